use crate::{
    context::RunContext,
    maze::Maze,
    solver::fork::fork_join,
    sync::Arc,
    types::{Node, Path},
    walker::Walker,
};
use derive_more::Debug;
use thiserror::Error;
use tracing::trace;

/// Error kind for search failures.
///
/// Failing to find a goal is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A node the search itself reached has no recorded discovery chain back
    /// to the node its task started from. Indicates broken predecessor
    /// bookkeeping.
    #[error("no recorded path from node {origin} to node {target}")]
    BrokenPredecessorChain {
        /// Node the chain was expected to end at.
        origin: Node,
        /// Node the chain was walked back from.
        target: Node,
    },
    /// The dedicated worker pool could not be started.
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub(crate) type TaskResult = Result<Option<Path>, SearchError>;

/// A unit of concurrent search work.
///
/// Explores its frontier depth-first until it finds a goal, runs out of
/// nodes, or learns that another task already finished the run. Neighbours
/// are claimed as soon as they are discovered, so every node on the
/// frontier belongs to this task alone. When a node yields more freshly
/// claimed neighbours than the configured threshold, and the task is not
/// nested too deep, it forks one child per neighbour (or per neighbour
/// group) and joins them; if none of them finds a goal it resumes with what
/// is left on its own frontier.
#[must_use]
#[derive(Debug)]
pub(crate) struct SearchTask<M> {
    #[debug(skip)]
    ctx: Arc<RunContext<M>>,
    walker: Walker,
    depth: usize,
}

impl<M: Maze> SearchTask<M> {
    /// Task that starts the run at `start`, claiming it.
    pub(crate) fn root(ctx: Arc<RunContext<M>>, start: Node) -> Self {
        let claimed = ctx.claim(start, None);
        debug_assert!(claimed, "SearchTask::root: [1]");
        Self {
            ctx,
            walker: Walker::rooted(start),
            depth: 0,
        }
    }

    /// Task forked at `origin`, `depth` forks below the root, to explore
    /// `nodes`. The forking task must already own every node of `nodes`.
    pub(crate) fn forked(
        ctx: Arc<RunContext<M>>,
        origin: Node,
        nodes: Vec<Node>,
        depth: usize,
    ) -> Self {
        Self {
            ctx,
            walker: Walker::forked(origin, nodes),
            depth,
        }
    }

    /// Run the task to completion.
    ///
    /// Returns a path starting at the task origin and ending at a goal, or
    /// `None` if this task's part of the maze holds no reachable goal.
    pub(crate) fn run(self) -> TaskResult {
        let Self {
            ctx,
            mut walker,
            depth,
        } = self;
        ctx.task_started();
        let maze = ctx.maze();
        let mut player = None;

        while !ctx.is_complete() {
            let Some(node) = walker.pop() else {
                return Ok(None);
            };
            match &mut player {
                Some(walking) => maze.move_player(walking, node),
                None => player = Some(maze.new_player(node)),
            }

            if maze.has_goal(node) {
                ctx.complete();
                trace!(origin = walker.origin(), node, depth, "goal reached");
                return walker
                    .path_to(ctx.predecessors(), node)
                    .map(Some)
                    .ok_or(SearchError::BrokenPredecessorChain {
                        origin: walker.origin(),
                        target: node,
                    });
            }

            let claimed: Vec<Node> = maze
                .neighbors(node)
                .into_iter()
                .filter(|&neighbor| ctx.claim(neighbor, Some(node)))
                .collect();
            if ctx.config().should_fork(claimed.len(), depth) {
                // Forked neighbours belong to the children. Nodes pending
                // from before the fork are still ours to explore.
                if let Some(path) = fork_join(&ctx, &walker, node, claimed, depth + 1)? {
                    return Ok(Some(path));
                }
                continue;
            }
            for neighbor in claimed {
                walker.push(neighbor);
            }
        }
        Ok(None)
    }
}
