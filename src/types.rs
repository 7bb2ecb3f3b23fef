use indexmap::{IndexMap as _IndexMap, IndexSet as _IndexSet};
use rustc_hash::FxBuildHasher;
use std::collections::{HashMap as _HashMap, HashSet as _HashSet};

/// Identifier of a location in the maze.
///
/// Nodes carry no identity beyond equality; the maze decides what a given
/// number means.
pub type Node = u32;

/// Ordered sequence of nodes from a search origin to a goal.
///
/// Consecutive nodes are adjacent in the maze. A path produced by
/// [`Solver::compute`](crate::solver::Solver::compute) always starts at the
/// start node and ends at a goal node.
pub type Path = Vec<Node>;

#[cfg_attr(not(feature = "loom"), allow(dead_code))]
pub(crate) type HashMap<K, V> = _HashMap<K, V, FxBuildHasher>;
#[cfg_attr(not(feature = "loom"), allow(dead_code))]
pub(crate) type HashSet<T> = _HashSet<T, FxBuildHasher>;
/// `IndexMap` type with fast hasher.
pub type IndexMap<K, V> = _IndexMap<K, V, FxBuildHasher>;
/// `IndexSet` type with fast hasher.
pub type IndexSet<T> = _IndexSet<T, FxBuildHasher>;
