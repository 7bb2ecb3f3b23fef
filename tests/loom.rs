#![allow(missing_docs)]
#![cfg(feature = "loom")]

use fjm::{GraphMaze, Solver, SolverConfig, visited::VisitedRecord};
use loom::{sync::Arc, thread};

#[test]
fn loom_racing_claims_single_winner() {
    loom::model(|| {
        let visited = Arc::new(VisitedRecord::new());
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let visited = visited.clone();
                thread::spawn(move || visited.try_claim(7))
            })
            .collect();
        let mut winners = usize::from(visited.try_claim(7));
        for handle in handles {
            winners += usize::from(handle.join().unwrap());
        }
        assert_eq!(winners, 1);
        assert_eq!(visited.len(), 1);
    });
}

#[test]
fn loom_forked_children_find_goal() {
    loom::model(|| {
        // Graph:
        //     0
        //    / \
        //   1   2*
        // Node 0 has two unclaimed neighbours, above the threshold of 1, so
        // both are explored by forked children.
        let maze = GraphMaze::from_edges([(0, 1), (0, 2)], [2]);
        let solver = Solver::with_config(maze, 0, SolverConfig::new(1)).unwrap();
        let outcome = solver.compute_with_stats().unwrap();
        assert_eq!(outcome.path, Some(vec![0, 2]));
        assert_eq!(outcome.stats.tasks, 3);
    });
}

#[test]
fn loom_diamond_claims_shared_node_once() {
    loom::model(|| {
        // Graph:
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3
        // Both children may see 3 as unclaimed; only one of them claims it.
        let maze = GraphMaze::from_edges([(0, 1), (0, 2), (1, 3), (2, 3)], []);
        let solver = Solver::with_config(maze, 0, SolverConfig::new(1)).unwrap();
        let outcome = solver.compute_with_stats().unwrap();
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.stats.claimed, 4);
        assert_eq!(outcome.stats.edges, 3);
    });
}
