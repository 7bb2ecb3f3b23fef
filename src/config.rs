use core::num::NonZeroUsize;

/// Branching threshold used when none is configured.
pub const DEFAULT_FORK_AFTER: usize = 2;

/// Fork nesting limit used when none is configured.
pub const DEFAULT_MAX_FORK_DEPTH: usize = 32;

/// Tuning of a single solver.
///
/// The threshold decides when a task stops walking sequentially and forks
/// one child per neighbour instead: a node forks when it claims more than
/// `fork_after` previously unclaimed neighbours. A threshold of `0` disables
/// forking, so the search degrades to one sequential depth-first walk.
///
/// Every fork keeps its task blocked on a worker stack until the children
/// finish, so nesting is capped by `max_fork_depth`. Tasks at that depth walk
/// sequentially whatever their branching.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Branching threshold; `0` never forks.
    pub fork_after: usize,
    /// Upper bound on the number of children forked at one node. Neighbours
    /// are spread evenly over the children when there are more neighbours
    /// than children. `None` forks one child per neighbour.
    pub max_fanout: Option<NonZeroUsize>,
    /// Number of nested forks after which tasks stop forking; `0` never
    /// forks.
    pub max_fork_depth: usize,
    /// Size of a dedicated worker pool. `None` runs on rayon's global pool.
    pub num_threads: Option<NonZeroUsize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            fork_after: DEFAULT_FORK_AFTER,
            max_fanout: None,
            max_fork_depth: DEFAULT_MAX_FORK_DEPTH,
            num_threads: None,
        }
    }
}

impl SolverConfig {
    /// Default configuration with the given branching threshold.
    pub fn new(fork_after: usize) -> Self {
        Self::default().with_fork_after(fork_after)
    }

    /// Configuration that never forks.
    pub fn sequential() -> Self {
        Self::new(0)
    }

    /// Set the branching threshold.
    pub fn with_fork_after(mut self, fork_after: usize) -> Self {
        self.fork_after = fork_after;
        self
    }

    /// Cap the number of children forked at one node.
    pub fn with_max_fanout(mut self, max_fanout: NonZeroUsize) -> Self {
        self.max_fanout = Some(max_fanout);
        self
    }

    /// Cap fork nesting at `max_fork_depth` levels.
    pub fn with_max_fork_depth(mut self, max_fork_depth: usize) -> Self {
        self.max_fork_depth = max_fork_depth;
        self
    }

    /// Run on a dedicated pool of `num_threads` workers.
    pub fn with_num_threads(mut self, num_threads: NonZeroUsize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Whether a task nested `depth` forks deep should fork over
    /// `claimed` freshly claimed neighbours.
    #[must_use]
    pub fn should_fork(&self, claimed: usize, depth: usize) -> bool {
        self.fork_after > 0 && claimed > self.fork_after && depth < self.max_fork_depth
    }

    /// Number of children to fork for `claimed` fresh neighbours.
    #[must_use]
    pub fn fanout(&self, claimed: usize) -> usize {
        self.max_fanout.map_or(claimed, |max| claimed.min(max.get()))
    }
}
