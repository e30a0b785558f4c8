//! Top-down pass over a tree.
//!
//! For every vertex, [PathAggregates] records its weighted and unweighted
//! distance from the root and how far the closest leaf *outside* its
//! subtree is. The latter needs the [SubtreeAggregates] of the siblings,
//! so the post-order pass must have run completely before.

use crate::model::{Tree, VertexIndex};
use crate::stats::aggregate::SubtreeAggregates;
use tracing::debug;

/// Per-vertex results of the pre-order pass, parallel to the tree's arena.
#[derive(Debug, Clone)]
pub struct PathAggregates {
    root_to_tip_weighted: Vec<f64>,
    root_to_tip_unweighted: Vec<usize>,
    min_distance_above: Vec<f64>,
}

impl PathAggregates {
    /// Runs the pre-order pass over `tree`, using the results of the post-order pass.
    ///
    /// The root is at distance `0` and has no leaf outside its subtree
    /// (`min_distance_above` is infinite). For a child `c` of `p`, the
    /// closest leaf outside the subtree of `c` is reached either above `p`
    /// or down the edge to a sibling `s` of `c` and within its subtree, and
    /// in both cases across the edge from `c` to `p`:
    ///
    /// `above(c) = min(above(p), min over siblings s of (below(s) + edge(s))) + edge(c)`
    ///
    /// Absent edge lengths count as `0` for weighted distances and
    /// as one edge for unweighted ones.
    pub fn compute(tree: &Tree, aggregates: &SubtreeAggregates) -> Self {
        let num_vertices = tree.num_vertices();
        let root = tree.root_index();
        let mut root_to_tip_weighted = vec![0.0; num_vertices];
        let mut root_to_tip_unweighted = vec![0; num_vertices];
        let mut min_distance_above = vec![f64::INFINITY; num_vertices];

        // Each vertex fills in its children, so parents are complete when read
        for vertex in tree.pre_order_iter() {
            let parent = vertex.index();
            let closest = ClosestChildren::of(tree, vertex.children(), aggregates);

            for &child in vertex.children() {
                let edge = tree[child].edge_length().distance();
                root_to_tip_weighted[child] = root_to_tip_weighted[parent] + edge;
                root_to_tip_unweighted[child] = root_to_tip_unweighted[parent] + 1;

                let via_sibling = closest.excluding(child);
                min_distance_above[child] = min_distance_above[parent].min(via_sibling) + edge;
            }
        }
        debug_assert!(min_distance_above[root].is_infinite());

        debug!(vertices = num_vertices, "computed root paths");

        PathAggregates {
            root_to_tip_weighted,
            root_to_tip_unweighted,
            min_distance_above,
        }
    }

    /// Returns the sum of edge lengths from the root to vertex `index`.
    pub fn root_to_tip_weighted(&self, index: VertexIndex) -> f64 {
        self.root_to_tip_weighted[index]
    }

    /// Returns the number of edges from the root to vertex `index`.
    pub fn root_to_tip_unweighted(&self, index: VertexIndex) -> usize {
        self.root_to_tip_unweighted[index]
    }

    /// Returns the distance from vertex `index` to the closest leaf outside its subtree.
    pub fn min_distance_above(&self, index: VertexIndex) -> f64 {
        self.min_distance_above[index]
    }
}

// Smallest and second smallest distance from a vertex to a leaf below it via
// each of its children, so the minimum over all siblings of a child is found
// in constant time.
struct ClosestChildren {
    best: Option<(VertexIndex, f64)>,
    second: f64,
}

impl ClosestChildren {
    fn of(tree: &Tree, children: &[VertexIndex], aggregates: &SubtreeAggregates) -> Self {
        let mut best: Option<(VertexIndex, f64)> = None;
        let mut second = f64::INFINITY;
        for &child in children {
            let distance =
                aggregates.min_distance_below(child) + tree[child].edge_length().distance();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {
                    second = second.min(distance);
                }
                _ => {
                    if let Some((_, best_distance)) = best {
                        second = best_distance;
                    }
                    best = Some((child, distance));
                }
            }
        }
        ClosestChildren { best, second }
    }

    // Minimum over all children other than `child`; infinite for an only child
    fn excluding(&self, child: VertexIndex) -> f64 {
        match self.best {
            Some((best_child, _)) if best_child == child => self.second,
            Some((_, best_distance)) => best_distance,
            None => f64::INFINITY,
        }
    }
}
