//! Output record for a single leaf.

use crate::model::EdgeLength;
use crate::stats::lookup::{DiagnosisTime, Efficacy};

/// Column names in the order in which [LeafRecord] values are emitted.
pub const COLUMNS: [&str; 8] = [
    "name",
    "diagnosis",
    "efficacy",
    "edge_length",
    "root_to_tip",
    "root_to_tip_u",
    "sib_leaves",
    "closest_leaf",
];

/// Statistics of one leaf, joined with the values looked up for its name.
///
/// Records are built once both traversal passes are complete and are not
/// changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafRecord {
    pub(crate) name: String,
    pub(crate) diagnosis: DiagnosisTime,
    pub(crate) efficacy: Efficacy,
    pub(crate) edge_length: EdgeLength,
    pub(crate) root_to_tip_weighted: f64,
    pub(crate) root_to_tip_unweighted: usize,
    pub(crate) sibling_leaf_count: usize,
    pub(crate) closest_leaf_distance: f64,
}

impl LeafRecord {
    /// Returns the label of the leaf.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the diagnosis time looked up for this leaf (`None` if unset).
    pub fn diagnosis(&self) -> DiagnosisTime {
        self.diagnosis
    }

    /// Returns the efficacy looked up for this leaf.
    pub fn efficacy(&self) -> Efficacy {
        self.efficacy
    }

    /// Returns the length of the edge from the leaf to its parent.
    pub fn edge_length(&self) -> EdgeLength {
        self.edge_length
    }

    /// Returns the sum of edge lengths from the root to the leaf.
    pub fn root_to_tip_weighted(&self) -> f64 {
        self.root_to_tip_weighted
    }

    /// Returns the number of edges from the root to the leaf.
    pub fn root_to_tip_unweighted(&self) -> usize {
        self.root_to_tip_unweighted
    }

    /// Returns the number of leaves below the siblings of the leaf.
    pub fn sibling_leaf_count(&self) -> usize {
        self.sibling_leaf_count
    }

    /// Returns the distance to the closest other leaf,
    /// infinite if the tree has no other leaf.
    pub fn closest_leaf_distance(&self) -> f64 {
        self.closest_leaf_distance
    }
}
