//! Bottom-up pass over a tree.
//!
//! For every vertex, [SubtreeAggregates] records how many leaves its subtree
//! holds and how far the closest of those leaves is.

use crate::model::{Tree, VertexIndex};
use tracing::debug;

/// Per-vertex results of the post-order pass, parallel to the tree's arena.
#[derive(Debug, Clone)]
pub struct SubtreeAggregates {
    leaf_count: Vec<usize>,
    min_distance_below: Vec<f64>,
}

impl SubtreeAggregates {
    /// Runs the post-order pass over `tree`.
    ///
    /// * A leaf counts itself and has distance `0` to its closest leaf.
    /// * An internal vertex sums the leaf counts of its children and takes
    ///   the minimum over children `c` of `min_distance_below(c) + edge(c)`,
    ///   where an absent edge length counts as `0`.
    pub fn compute(tree: &Tree) -> Self {
        let num_vertices = tree.num_vertices();
        let mut leaf_count = vec![0; num_vertices];
        let mut min_distance_below = vec![f64::INFINITY; num_vertices];

        for vertex in tree.post_order_iter() {
            let index = vertex.index();
            if vertex.is_leaf() {
                leaf_count[index] = 1;
                min_distance_below[index] = 0.0;
                continue;
            }

            for &child in vertex.children() {
                leaf_count[index] += leaf_count[child];
                let via_child = min_distance_below[child] + tree[child].edge_length().distance();
                min_distance_below[index] = min_distance_below[index].min(via_child);
            }
        }

        debug!(
            vertices = num_vertices,
            leaves = leaf_count[tree.root_index()],
            "computed subtree aggregates"
        );

        SubtreeAggregates {
            leaf_count,
            min_distance_below,
        }
    }

    /// Returns the number of leaves in the subtree of vertex `index`.
    pub fn leaf_count(&self, index: VertexIndex) -> usize {
        self.leaf_count[index]
    }

    /// Returns the distance from vertex `index` to the closest leaf in its subtree.
    pub fn min_distance_below(&self, index: VertexIndex) -> f64 {
        self.min_distance_below[index]
    }
}
