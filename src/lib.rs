//! Fork/join parallel depth-first search over incrementally discovered
//! mazes.
//!
//! This crate finds a path from a start node to any goal node of a maze
//! whose structure is only revealed one node at a time. It:
//! - Walks the maze depth-first inside lightweight search tasks.
//! - Forks child tasks on rayon's work-stealing pool at nodes whose number
//!   of freshly claimed neighbours exceeds a configurable threshold, and
//!   joins them afterwards. Fork nesting is bounded, so deep mazes fall back
//!   to a heap-allocated frontier instead of growing worker stacks.
//! - Shares one visited record per run between all tasks. Nodes are
//!   claimed with a single atomic test-and-mark, so no node is explored
//!   twice and no node is forked on twice.
//! - Stops every task of the run as soon as one of them reaches a goal.
//!
//! Key modules:
//! - `maze`: the `Maze` trait consumed by the solver, plus `GraphMaze`, an
//!   in-memory implementation.
//! - `solver`: the `Solver` entry point and the search task/fork-join
//!   machinery.
//! - `config`: `SolverConfig` with the branching threshold, fork depth
//!   limit and pool sizing.
//! - `context`, `visited`, `path`, `walker`: per-run shared state and the
//!   task-local sequential walker.
//!
//! Quick start:
//! 1. Implement `Maze` for your graph, or build a `GraphMaze`.
//! 2. Create a `Solver` with the start node and, optionally, a
//!    `SolverConfig`.
//! 3. Call `compute` to get the node sequence from start to a goal, or
//!    `None` if no goal is reachable.
//!
//! Paths are reconstructed from the discovery edges recorded by the tasks
//! that won each claim. A child task reports a path starting at the node it
//! was forked from, and every forking task prepends its own prefix, so the
//! root always returns a path from the start node.

/// Solver configuration.
pub mod config;
/// Shared state of one run.
///
/// Bundles the visited record, the predecessor map, the completion flag and
/// run statistics. One context exists per top-level run.
pub mod context;
/// The graph provider interface and an in-memory maze.
pub mod maze;
/// Predecessor map and path reconstruction.
pub mod path;
/// Entry points and the fork/join search.
///
/// Contains the `Solver`, the search task loop, the forking policy and the
/// join protocol that aggregates child results.
pub mod solver;
mod sync;
/// Node and path types plus hash collection aliases.
pub mod types;
mod utils;
/// Concurrent visited record with atomic claims.
pub mod visited;
/// Task-local frontier and sequential walker.
pub mod walker;

pub use crate::{
    config::SolverConfig,
    maze::{GraphMaze, Maze},
    solver::{SearchError, SearchOutcome, SearchStats, Solver, search},
    types::{Node, Path},
};
