use crate::{
    config::SolverConfig,
    maze::Maze,
    path::PredecessorMap,
    sync::{AtomicBool, AtomicUsize, Ordering},
    types::Node,
    visited::VisitedRecord,
};
use core::fmt;

/// State shared by every search task of one top-level run.
///
/// A fresh context is created for each call to
/// [`Solver::compute`](crate::solver::Solver::compute) and handed to all
/// tasks by reference, so independent runs never observe each other.
pub struct RunContext<M> {
    maze: M,
    config: SolverConfig,
    visited: VisitedRecord,
    predecessors: PredecessorMap,
    completed: AtomicBool,
    tasks: AtomicUsize,
}

impl<M: Maze> RunContext<M> {
    /// Create the context of a new run over `maze`.
    pub fn new(maze: M, config: SolverConfig) -> Self {
        Self {
            maze,
            config,
            visited: VisitedRecord::new(),
            predecessors: PredecessorMap::new(),
            completed: AtomicBool::new(false),
            tasks: AtomicUsize::new(0),
        }
    }
}

impl<M> RunContext<M> {
    /// Claim `node` for the calling task, recording `from` as its discovery
    /// edge.
    ///
    /// Returns `false` if another task already owns `node`; nothing is
    /// recorded then. The winner is the only task allowed to explore
    /// `node` or hand it to a child.
    pub fn claim(&self, node: Node, from: Option<Node>) -> bool {
        if !self.visited.try_claim(node) {
            return false;
        }
        if let Some(from) = from {
            let recorded = self.predecessors.record(node, from);
            debug_assert!(recorded, "RunContext::claim: [1]");
        }
        true
    }

    /// Maze being searched.
    pub fn maze(&self) -> &M {
        &self.maze
    }

    /// Configuration of the run.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Nodes claimed so far.
    pub fn visited(&self) -> &VisitedRecord {
        &self.visited
    }

    /// Discovery edges recorded so far.
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Signal that a goal has been found somewhere in the run.
    pub fn complete(&self) {
        self.completed.store(true, Ordering::Release);
    }

    /// Whether some task has already found a goal.
    pub fn is_complete(&self) -> bool {
        self.completed.load(Ordering::Acquire)
    }

    /// Count one more started search task.
    pub(crate) fn task_started(&self) {
        self.tasks.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of search tasks started in this run.
    pub fn tasks(&self) -> usize {
        self.tasks.load(Ordering::Relaxed)
    }
}

impl<M> fmt::Debug for RunContext<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("config", &self.config)
            .field("visited", &self.visited.len())
            .field("predecessors", &self.predecessors.len())
            .field("completed", &self.is_complete())
            .field("tasks", &self.tasks())
            .finish_non_exhaustive()
    }
}
