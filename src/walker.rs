use crate::{
    path::{PredecessorMap, reconstruct},
    types::{Node, Path},
};

/// Sequential depth-first walker owned by a single search task.
///
/// Holds the task's frontier stack and the task origin: the overall start
/// node for the root task, the forking node for every forked child. Every
/// node on the frontier is already claimed by the owning task, so popping it
/// never races with another task. Paths produced by a walker always begin at
/// its origin.
#[must_use]
#[derive(Debug)]
pub struct Walker {
    origin: Node,
    frontier: Vec<Node>,
}

impl Walker {
    /// Walker whose frontier starts with `start` alone.
    pub fn rooted(start: Node) -> Self {
        Self {
            origin: start,
            frontier: vec![start],
        }
    }

    /// Walker forked at `origin` that explores `nodes`, all reached from
    /// `origin`. The first node of `nodes` is explored first.
    pub fn forked(origin: Node, nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut frontier: Vec<_> = nodes.into_iter().collect();
        frontier.reverse();
        Self { origin, frontier }
    }

    /// Node every path of this walker starts from.
    #[must_use]
    pub fn origin(&self) -> Node {
        self.origin
    }

    /// Schedule a claimed `node` for exploration.
    pub fn push(&mut self, node: Node) {
        self.frontier.push(node);
    }

    /// Take the most recently scheduled node.
    pub fn pop(&mut self) -> Option<Node> {
        self.frontier.pop()
    }

    /// Number of nodes left on the frontier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Whether nothing is left to explore.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Path from `from` to `to` along recorded discovery edges.
    #[must_use]
    pub fn path_from_to(
        &self,
        predecessors: &PredecessorMap,
        from: Node,
        to: Node,
    ) -> Option<Path> {
        reconstruct(predecessors, from, to)
    }

    /// Path from this walker's origin to `to`.
    #[must_use]
    pub fn path_to(&self, predecessors: &PredecessorMap, to: Node) -> Option<Path> {
        self.path_from_to(predecessors, self.origin, to)
    }
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;

    #[test]
    fn rooted_walker_starts_at_origin() {
        let mut walker = Walker::rooted(3);
        assert_eq!(walker.origin(), 3);
        assert_eq!(walker.pop(), Some(3));
        assert!(walker.is_empty());
        assert_eq!(walker.pop(), None);
    }

    #[test]
    fn frontier_is_lifo() {
        let mut walker = Walker::rooted(0);
        walker.pop();
        walker.push(1);
        walker.push(2);
        assert_eq!(walker.len(), 2);
        assert_eq!(walker.pop(), Some(2));
        assert_eq!(walker.pop(), Some(1));
    }

    #[test]
    fn forked_walker_keeps_group_order() {
        let mut walker = Walker::forked(5, [6, 7]);
        assert_eq!(walker.origin(), 5);
        assert_eq!(walker.pop(), Some(6));
        assert_eq!(walker.pop(), Some(7));
        assert!(walker.is_empty());
    }

    #[test]
    fn paths_begin_at_origin() {
        let predecessors = PredecessorMap::new();
        predecessors.record(6, 5);
        predecessors.record(8, 6);
        let walker = Walker::forked(5, [6]);
        assert_eq!(walker.path_to(&predecessors, 8), Some(vec![5, 6, 8]));
        assert_eq!(walker.path_from_to(&predecessors, 6, 8), Some(vec![6, 8]));
        assert_eq!(walker.path_to(&predecessors, 9), None);
    }
}
