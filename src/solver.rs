mod fork;
mod task;

/// Error returned by [`Solver::compute`] when the search breaks an internal
/// invariant or its worker pool cannot be started.
pub use crate::solver::task::SearchError;
use crate::{
    config::SolverConfig,
    context::RunContext,
    maze::Maze,
    solver::task::SearchTask,
    sync::Arc,
    types::{Node, Path},
};
use derive_more::Debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, debug_span};

/// Fork/join depth-first solver for a maze.
///
/// Every call to [`compute`](Solver::compute) starts an independent run
/// with its own visited record, predecessor map and completion flag. A root
/// task walks the maze from the start node, claiming neighbours as it
/// discovers them; whenever a node yields more claims than the configured
/// `fork_after` threshold the task forks children for them on the worker
/// pool and joins their results. Forking stops `max_fork_depth` levels
/// below the root. The first task to reach a goal ends the run.
#[must_use]
#[derive(Debug)]
pub struct Solver<M> {
    #[debug(skip)]
    maze: std::sync::Arc<M>,
    start: Node,
    config: SolverConfig,
    #[debug(skip)]
    pool: Option<ThreadPool>,
}

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Search tasks started, the root task included.
    pub tasks: usize,
    /// Nodes claimed by some task.
    pub claimed: usize,
    /// Discovery edges recorded.
    pub edges: usize,
}

/// Result of a run together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Path from the start node to a goal, if one was found.
    pub path: Option<Path>,
    /// Run statistics.
    pub stats: SearchStats,
}

impl<M: Maze> Solver<M> {
    /// Solver over `maze` from `start` with the default configuration.
    pub fn new(maze: M, start: Node) -> Self {
        Self::from_arc(std::sync::Arc::new(maze), start)
    }

    /// Solver over a shared `maze` from `start` with the default
    /// configuration.
    pub fn from_arc(maze: std::sync::Arc<M>, start: Node) -> Self {
        Self {
            maze,
            start,
            config: SolverConfig::default(),
            pool: None,
        }
    }

    /// Solver over `maze` from `start` with `config`.
    ///
    /// # Errors
    /// If `config` asks for a dedicated worker pool that cannot be built.
    pub fn with_config(maze: M, start: Node, config: SolverConfig) -> Result<Self, SearchError> {
        Self::new(maze, start).configure(config)
    }

    /// Replace the configuration, building a dedicated worker pool if one
    /// is requested.
    ///
    /// # Errors
    /// If the dedicated worker pool cannot be built.
    pub fn configure(mut self, config: SolverConfig) -> Result<Self, SearchError> {
        self.pool = match config.num_threads {
            Some(num_threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(num_threads.get())
                    .thread_name(|idx| format!("fjm-worker-{idx}"))
                    .build()?,
            ),
            None => None,
        };
        self.config = config;
        Ok(self)
    }

    /// Maze being searched.
    pub fn maze(&self) -> &M {
        &self.maze
    }

    /// Start node of every run.
    #[must_use]
    pub fn start(&self) -> Node {
        self.start
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for a path from the start node to a goal.
    ///
    /// Returns `Ok(None)` when the maze has no goal reachable from the
    /// start node.
    ///
    /// # Errors
    /// If predecessor bookkeeping breaks, which indicates a bug rather than
    /// an unsolvable maze.
    pub fn compute(&self) -> Result<Option<Path>, SearchError> {
        self.compute_with_stats().map(|outcome| outcome.path)
    }

    /// Same as [`compute`](Solver::compute), but also reports run
    /// statistics.
    ///
    /// # Errors
    /// See [`compute`](Solver::compute).
    pub fn compute_with_stats(&self) -> Result<SearchOutcome, SearchError> {
        let span = debug_span!("search", start = self.start, fork_after = self.config.fork_after);
        let _enter = span.enter();
        debug!(config = ?self.config, "starting run");

        let ctx = Arc::new(RunContext::new(
            std::sync::Arc::clone(&self.maze),
            self.config,
        ));
        let root = SearchTask::root(Arc::clone(&ctx), self.start);
        let path = self.run_root(root)?;

        let stats = SearchStats {
            tasks: ctx.tasks(),
            claimed: ctx.visited().len(),
            edges: ctx.predecessors().len(),
        };
        debug!(
            found = path.is_some(),
            len = path.as_ref().map_or(0, Vec::len),
            tasks = stats.tasks,
            claimed = stats.claimed,
            "run finished"
        );
        Ok(SearchOutcome { path, stats })
    }

    #[cfg(not(feature = "loom"))]
    fn run_root(&self, root: SearchTask<std::sync::Arc<M>>) -> Result<Option<Path>, SearchError> {
        match &self.pool {
            Some(pool) => pool.install(|| root.run()),
            None => root.run(),
        }
    }

    /// Loom-testable version of `run_root`: the task runs on the model
    /// thread and forks on loom threads.
    #[cfg(feature = "loom")]
    #[allow(clippy::unused_self)]
    fn run_root(&self, root: SearchTask<std::sync::Arc<M>>) -> Result<Option<Path>, SearchError> {
        root.run()
    }
}

/// Search `maze` from `start`, forking at nodes with more than `fork_after`
/// unclaimed neighbours. A `fork_after` of `0` never forks.
///
/// # Errors
/// See [`Solver::compute`].
pub fn search<M: Maze>(
    maze: M,
    start: Node,
    fork_after: usize,
) -> Result<Option<Path>, SearchError> {
    Solver::with_config(maze, start, SolverConfig::new(fork_after))?.compute()
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::maze::GraphMaze;
    use core::num::NonZeroUsize;

    #[test]
    fn start_is_goal() {
        let maze = GraphMaze::from_edges([(0, 1)], [0]);
        assert_eq!(search(maze, 0, 2).unwrap(), Some(vec![0]));
    }

    #[test]
    fn every_run_gets_fresh_state() {
        let solver = Solver::new(GraphMaze::from_edges([(0, 1), (1, 2)], [2]), 0);
        let first = solver.compute_with_stats().unwrap();
        let second = solver.compute_with_stats().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path, Some(vec![0, 1, 2]));
        assert_eq!(first.stats.claimed, 3);
        assert_eq!(first.stats.edges, 2);
    }

    #[test]
    fn dedicated_pool_is_used() {
        let config = SolverConfig::new(1).with_num_threads(NonZeroUsize::new(2).unwrap());
        let maze = GraphMaze::from_edges([(0, 1), (0, 2), (0, 3)], [3]);
        let solver = Solver::with_config(maze, 0, config).unwrap();
        assert_eq!(solver.config().num_threads, NonZeroUsize::new(2));
        assert_eq!(solver.compute().unwrap(), Some(vec![0, 3]));
    }

    #[test]
    fn accessors_report_construction() {
        let solver = Solver::new(GraphMaze::new().with_node(4), 4);
        assert_eq!(solver.start(), 4);
        assert_eq!(solver.config(), &SolverConfig::default());
        assert_eq!(solver.maze().len(), 1);
        assert_eq!(solver.compute().unwrap(), None);
    }
}
