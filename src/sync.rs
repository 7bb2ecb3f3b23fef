#[cfg(feature = "loom")]
mod imp {
    use crate::types::{HashMap, HashSet, Node};
    use core::fmt;
    pub(crate) use loom::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };
    use loom::{sync::Mutex, thread};

    pub(crate) fn join<RA, RB>(
        lhs: impl FnOnce() -> RA + Send + 'static,
        rhs: impl FnOnce() -> RB + Send + 'static,
    ) -> (RA, RB)
    where
        RA: Send + 'static,
        RB: Send + 'static,
    {
        let lhs = thread::spawn(lhs);
        let rhs = thread::spawn(rhs);
        (
            lhs.join().expect("sync::join: [1]"),
            rhs.join().expect("sync::join: [2]"),
        )
    }

    pub(crate) struct NodeSet(Mutex<HashSet<Node>>);

    impl NodeSet {
        pub(crate) fn new() -> Self {
            Self(Mutex::new(HashSet::default()))
        }

        pub(crate) fn insert(&self, node: Node) -> bool {
            self.0.lock().expect("NodeSet::insert").insert(node)
        }

        pub(crate) fn contains(&self, node: Node) -> bool {
            self.0.lock().expect("NodeSet::contains").contains(&node)
        }

        pub(crate) fn len(&self) -> usize {
            self.0.lock().expect("NodeSet::len").len()
        }
    }

    impl fmt::Debug for NodeSet {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("NodeSet").field("len", &self.len()).finish()
        }
    }

    pub(crate) struct NodeMap(Mutex<HashMap<Node, Node>>);

    impl NodeMap {
        pub(crate) fn new() -> Self {
            Self(Mutex::new(HashMap::default()))
        }

        pub(crate) fn insert_vacant(&self, key: Node, value: Node) -> bool {
            let mut map = self.0.lock().expect("NodeMap::insert_vacant");
            if map.contains_key(&key) {
                return false;
            }
            map.insert(key, value);
            true
        }

        pub(crate) fn get(&self, key: Node) -> Option<Node> {
            self.0.lock().expect("NodeMap::get").get(&key).copied()
        }

        pub(crate) fn len(&self) -> usize {
            self.0.lock().expect("NodeMap::len").len()
        }
    }

    impl fmt::Debug for NodeMap {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("NodeMap").field("len", &self.len()).finish()
        }
    }
}

#[cfg(not(feature = "loom"))]
mod imp {
    use crate::types::Node;
    use dashmap::{DashMap, DashSet, mapref::entry::Entry};
    use rustc_hash::FxBuildHasher;
    pub(crate) use std::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };

    pub(crate) fn join<RA, RB>(
        lhs: impl FnOnce() -> RA + Send,
        rhs: impl FnOnce() -> RB + Send,
    ) -> (RA, RB)
    where
        RA: Send,
        RB: Send,
    {
        rayon::join(lhs, rhs)
    }

    /// Sharded concurrent node set; `insert` is a single atomic test-and-mark.
    #[derive(Debug)]
    pub(crate) struct NodeSet(DashSet<Node, FxBuildHasher>);

    impl NodeSet {
        pub(crate) fn new() -> Self {
            Self(DashSet::with_hasher(FxBuildHasher))
        }

        pub(crate) fn insert(&self, node: Node) -> bool {
            self.0.insert(node)
        }

        pub(crate) fn contains(&self, node: Node) -> bool {
            self.0.contains(&node)
        }

        pub(crate) fn len(&self) -> usize {
            self.0.len()
        }
    }

    #[derive(Debug)]
    pub(crate) struct NodeMap(DashMap<Node, Node, FxBuildHasher>);

    impl NodeMap {
        pub(crate) fn new() -> Self {
            Self(DashMap::with_hasher(FxBuildHasher))
        }

        /// Writes `value` only if `key` has no entry yet. The shard lock is
        /// held across the check and the write.
        pub(crate) fn insert_vacant(&self, key: Node, value: Node) -> bool {
            match self.0.entry(key) {
                Entry::Occupied(_) => false,
                Entry::Vacant(entry) => {
                    entry.insert(value);
                    true
                }
            }
        }

        pub(crate) fn get(&self, key: Node) -> Option<Node> {
            self.0.get(&key).map(|entry| *entry.value())
        }

        pub(crate) fn len(&self) -> usize {
            self.0.len()
        }
    }
}

pub(crate) use imp::*;
