use crate::types::{IndexMap, IndexSet, Node};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Graph provider consumed by the solver.
///
/// A maze owns adjacency, goal membership and player bookkeeping. The solver
/// only enumerates neighbours, tests for goals and moves one player per
/// search task across the nodes that task visits. Implementations must be
/// safe to call from many tasks at once.
pub trait Maze: Send + Sync + 'static {
    /// Handle of a traversal marker placed on the maze.
    type Player: Send;

    /// Nodes adjacent to `node`.
    fn neighbors(&self, node: Node) -> impl IntoIterator<Item = Node>;

    /// Whether `node` satisfies the goal predicate.
    fn has_goal(&self, node: Node) -> bool;

    /// Place a new player on `node`.
    fn new_player(&self, node: Node) -> Self::Player;

    /// Move `player` to `node`.
    fn move_player(&self, player: &mut Self::Player, node: Node);
}

impl<M: Maze> Maze for Arc<M> {
    type Player = M::Player;

    fn neighbors(&self, node: Node) -> impl IntoIterator<Item = Node> {
        (**self).neighbors(node)
    }

    fn has_goal(&self, node: Node) -> bool {
        (**self).has_goal(node)
    }

    fn new_player(&self, node: Node) -> Self::Player {
        (**self).new_player(node)
    }

    fn move_player(&self, player: &mut Self::Player, node: Node) {
        (**self).move_player(player, node);
    }
}

/// In-memory undirected maze described by its edges and goal nodes.
///
/// Keeps occupancy counters so callers can observe how many players were
/// placed and how many moves they made.
#[must_use]
#[derive(Debug, Default)]
pub struct GraphMaze {
    adjacency: IndexMap<Node, IndexSet<Node>>,
    goals: IndexSet<Node>,
    players: AtomicUsize,
    moves: AtomicUsize,
}

/// Player placed on a [`GraphMaze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphPlayer {
    /// Sequence number of the player, starting at zero.
    pub id: usize,
    /// Node the player currently stands on.
    pub position: Node,
}

impl GraphMaze {
    /// Create a maze without nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a maze from undirected `edges` and `goals`.
    pub fn from_edges(
        edges: impl IntoIterator<Item = (Node, Node)>,
        goals: impl IntoIterator<Item = Node>,
    ) -> Self {
        let mut maze = edges
            .into_iter()
            .fold(Self::new(), |maze, (a, b)| maze.with_edge(a, b));
        for goal in goals {
            maze.goals.insert(goal);
        }
        maze
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn with_edge(mut self, a: Node, b: Node) -> Self {
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        self
    }

    /// Add an isolated node, or leave an existing node untouched.
    pub fn with_node(mut self, node: Node) -> Self {
        self.adjacency.entry(node).or_default();
        self
    }

    /// Mark `node` as a goal.
    pub fn with_goal(mut self, node: Node) -> Self {
        self.goals.insert(node);
        self
    }

    /// Unmark `node` as a goal.
    pub fn without_goal(mut self, node: Node) -> Self {
        self.goals.shift_remove(&node);
        self
    }

    /// Whether `a` and `b` are connected by an edge.
    #[must_use]
    pub fn is_edge(&self, a: Node, b: Node) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the maze has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of players placed so far.
    #[must_use]
    pub fn players(&self) -> usize {
        self.players.load(Ordering::Relaxed)
    }

    /// Number of player moves made so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves.load(Ordering::Relaxed)
    }
}

impl Maze for GraphMaze {
    type Player = GraphPlayer;

    fn neighbors(&self, node: Node) -> impl IntoIterator<Item = Node> {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    fn has_goal(&self, node: Node) -> bool {
        self.goals.contains(&node)
    }

    fn new_player(&self, node: Node) -> Self::Player {
        GraphPlayer {
            id: self.players.fetch_add(1, Ordering::Relaxed),
            position: node,
        }
    }

    fn move_player(&self, player: &mut Self::Player, node: Node) {
        self.moves.fetch_add(1, Ordering::Relaxed);
        player.position = node;
    }
}
