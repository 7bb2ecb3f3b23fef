use crate::{sync::NodeSet, types::Node};

/// Set of nodes already claimed by some search task of one run.
///
/// Every visit and every forking decision is gated on [`try_claim`], which
/// tests and marks a node in one atomic step. A node is never un-claimed.
///
/// [`try_claim`]: VisitedRecord::try_claim
#[derive(Debug)]
pub struct VisitedRecord {
    nodes: NodeSet,
}

impl Default for VisitedRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitedRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: NodeSet::new(),
        }
    }

    /// Claim `node` for the calling task.
    ///
    /// Returns `true` to exactly one caller per node, no matter how many
    /// tasks race on it; all later callers get `false`.
    pub fn try_claim(&self, node: Node) -> bool {
        self.nodes.insert(node)
    }

    /// Whether `node` has been claimed already.
    ///
    /// The answer may be stale by the time it is used, so it only serves to
    /// skip obviously explored neighbours. It never replaces `try_claim`.
    #[must_use]
    pub fn is_claimed(&self, node: Node) -> bool {
        self.nodes.contains(node)
    }

    /// Number of claimed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been claimed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
