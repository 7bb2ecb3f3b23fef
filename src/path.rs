use crate::{
    sync::NodeMap,
    types::{Node, Path},
};

/// Discovery edges of one run: for each reached node, the node it was first
/// reached from.
///
/// Entries are write-once. Only the task that won the claim on a node
/// records that node's predecessor, so the map never holds two competing
/// edges for the same node.
#[derive(Debug)]
pub struct PredecessorMap {
    edges: NodeMap,
}

impl Default for PredecessorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl PredecessorMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: NodeMap::new(),
        }
    }

    /// Record that `node` was reached from `from`.
    ///
    /// Returns `false` and keeps the existing entry if `node` already has a
    /// predecessor.
    pub fn record(&self, node: Node, from: Node) -> bool {
        self.edges.insert_vacant(node, from)
    }

    /// Predecessor of `node`, if one was recorded.
    #[must_use]
    pub fn get(&self, node: Node) -> Option<Node> {
        self.edges.get(node)
    }

    /// Number of recorded edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk predecessor links back from `to` until `from` and return the
/// forward sequence `from, ..., to`.
///
/// Returns `None` if the chain ends before reaching `from`. The walk is
/// bounded by the number of recorded edges, so a corrupted map containing a
/// cycle also yields `None` instead of looping.
#[must_use]
pub fn reconstruct(predecessors: &PredecessorMap, from: Node, to: Node) -> Option<Path> {
    let mut path = vec![to];
    let mut current = to;
    let max_steps = predecessors.len();
    while current != from {
        if path.len() > max_steps {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;

    fn chain(edges: &[(Node, Node)]) -> PredecessorMap {
        let map = PredecessorMap::new();
        for &(node, from) in edges {
            assert!(map.record(node, from));
        }
        map
    }

    #[test]
    fn first_record_wins() {
        let map = PredecessorMap::new();
        assert!(map.record(2, 1));
        assert!(!map.record(2, 5));
        assert_eq!(map.get(2), Some(1));
        assert_eq!(map.get(1), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn reconstructs_forward_order() {
        let map = chain(&[(1, 0), (2, 1), (4, 2), (3, 1)]);
        assert_eq!(reconstruct(&map, 0, 4), Some(vec![0, 1, 2, 4]));
        assert_eq!(reconstruct(&map, 1, 4), Some(vec![1, 2, 4]));
        assert_eq!(reconstruct(&map, 0, 3), Some(vec![0, 1, 3]));
    }

    #[test]
    fn same_endpoints_give_single_node() {
        let map = PredecessorMap::new();
        assert_eq!(reconstruct(&map, 9, 9), Some(vec![9]));
    }

    #[test]
    fn broken_chain_gives_none() {
        let map = chain(&[(2, 1), (3, 2)]);
        assert_eq!(reconstruct(&map, 0, 3), None);
        assert_eq!(reconstruct(&map, 0, 7), None);
    }

    #[test]
    fn cyclic_map_gives_none() {
        let map = chain(&[(1, 2), (2, 1)]);
        assert_eq!(reconstruct(&map, 0, 1), None);
    }
}
