use crate::{
    context::RunContext,
    maze::Maze,
    solver::task::{SearchError, SearchTask, TaskResult},
    sync::{Arc, join},
    types::Node,
    utils::SplitEvenly,
    walker::Walker,
};
use tracing::trace;

/// Fork children, at `child_depth`, for the `claimed` neighbours of `node`
/// and join them.
///
/// The calling task already owns every node of `claimed` and hands them
/// over. Each child starts at `node` and shares the run context; when a
/// child reports a path, the caller's prefix from its origin to `node` is
/// prepended to it.
pub(super) fn fork_join<M: Maze>(
    ctx: &Arc<RunContext<M>>,
    walker: &Walker,
    node: Node,
    claimed: Vec<Node>,
    child_depth: usize,
) -> TaskResult {
    let fanout = ctx.config().fanout(claimed.len());
    let children: Vec<_> = claimed
        .split_evenly(fanout)
        .into_iter()
        .map(|group| SearchTask::forked(Arc::clone(ctx), node, group, child_depth))
        .collect();
    trace!(
        node,
        depth = child_depth,
        children = children.len(),
        pending = walker.len(),
        "forking"
    );

    let Some(suffix) = join_children(children)? else {
        return Ok(None);
    };
    let mut path =
        walker
            .path_to(ctx.predecessors(), node)
            .ok_or(SearchError::BrokenPredecessorChain {
                origin: walker.origin(),
                target: node,
            })?;
    // `suffix` starts at `node`, which already ends the prefix.
    path.extend(suffix.into_iter().skip(1));
    Ok(Some(path))
}

/// Run `children` in parallel by recursive halving and keep the first path
/// found, preferring the left half. An error from any child wins over
/// `None`.
fn join_children<M: Maze>(mut children: Vec<SearchTask<M>>) -> TaskResult {
    match children.len() {
        0 => return Ok(None),
        1 => return children.pop().expect("join_children: [1]").run(),
        _ => {}
    }
    let right = children.split_off(children.len() / 2);
    let (lhs, rhs) = join(move || join_children(children), move || join_children(right));
    Ok(lhs?.or(rhs?))
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::{config::SolverConfig, maze::GraphMaze};
    use core::num::NonZeroUsize;

    fn star(leaves: Node) -> GraphMaze {
        (1..=leaves).fold(GraphMaze::new(), |maze, leaf| maze.with_edge(0, leaf))
    }

    #[test]
    fn joins_children_into_full_path() {
        let ctx = Arc::new(RunContext::new(star(4).with_goal(3), SolverConfig::new(2)));
        let path = SearchTask::root(Arc::clone(&ctx), 0).run().unwrap();
        assert_eq!(path, Some(vec![0, 3]));
        assert_eq!(ctx.tasks(), 5);
    }

    #[test]
    fn no_goal_among_children() {
        let ctx = Arc::new(RunContext::new(star(4), SolverConfig::new(2)));
        let path = SearchTask::root(Arc::clone(&ctx), 0).run().unwrap();
        assert_eq!(path, None);
        assert_eq!(ctx.visited().len(), 5);
    }

    #[test]
    fn bounded_fanout_groups_neighbours() {
        let config = SolverConfig::new(1).with_max_fanout(NonZeroUsize::new(2).unwrap());
        let ctx = Arc::new(RunContext::new(star(6).with_goal(5), config));
        let path = SearchTask::root(Arc::clone(&ctx), 0).run().unwrap();
        assert_eq!(path, Some(vec![0, 5]));
        assert_eq!(ctx.tasks(), 3);
    }

    #[test]
    fn unknown_prefix_is_reported() {
        // The walker claims to start at 9, which never reached 0.
        let ctx = Arc::new(RunContext::new(star(1).with_goal(1), SolverConfig::new(0)));
        assert!(ctx.claim(0, None));
        assert!(ctx.claim(1, Some(0)));
        let walker = Walker::forked(9, []);
        let result = fork_join(&ctx, &walker, 0, vec![1], 1);
        assert!(matches!(
            result,
            Err(SearchError::BrokenPredecessorChain {
                origin: 9,
                target: 0
            })
        ));
    }

    #[test]
    fn children_start_one_level_deeper() {
        // With a depth limit of 1 the children of the root walk their
        // branches sequentially even though 1 fans out again.
        let maze = GraphMaze::from_edges(
            [(0, 1), (0, 2), (0, 3), (1, 4), (1, 5), (1, 6), (4, 7)],
            [7],
        );
        let config = SolverConfig::new(2).with_max_fork_depth(1);
        let ctx = Arc::new(RunContext::new(maze, config));
        let path = SearchTask::root(Arc::clone(&ctx), 0).run().unwrap();
        assert_eq!(path, Some(vec![0, 1, 4, 7]));
        assert_eq!(ctx.tasks(), 4);
    }

    #[test]
    fn prefix_is_composed_with_child_suffix() {
        // 0 - 1 - 2 then 2 branches to 3, 4, 5; goal hangs off 4.
        let maze = GraphMaze::from_edges([(0, 1), (1, 2), (2, 3), (2, 4), (2, 5), (4, 6)], [6]);
        let ctx = Arc::new(RunContext::new(maze, SolverConfig::new(2)));
        let path = SearchTask::root(Arc::clone(&ctx), 0).run().unwrap();
        assert_eq!(path, Some(vec![0, 1, 2, 4, 6]));
    }
}
