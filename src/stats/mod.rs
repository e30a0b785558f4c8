//! Per-leaf statistics on a rooted tree.
//!
//! The computation runs in three steps:
//! 1. [SubtreeAggregates] - post-order pass: leaves per subtree and
//!    distance to the closest leaf below each vertex
//! 2. [PathAggregates] - pre-order pass: root-to-tip distances and
//!    distance to the closest leaf outside each subtree
//! 3. [assemble_leaf_records] - joins both with the externally supplied
//!    diagnosis and efficacy tables into one [LeafRecord] per leaf
//!
//! [compute_leaf_stats] runs all three.
//!
//! # Example
//! ```
//! use leafstats::model::TreeBuilder;
//! use leafstats::stats::compute_leaf_stats;
//! use std::collections::HashMap;
//!
//! let mut builder = TreeBuilder::new();
//! let a = builder.add_leaf(Some(1.0), "A")?;
//! let b = builder.add_leaf(Some(2.0), "B")?;
//! builder.add_internal(&[a, b], None)?;
//! let tree = builder.finish()?;
//!
//! let diagnoses = HashMap::from([("A".to_string(), Some(3.5)), ("B".to_string(), None)]);
//! let efficacies = HashMap::from([("A".to_string(), 0.5), ("B".to_string(), 1.0)]);
//!
//! let records = compute_leaf_stats(&tree, &diagnoses, &efficacies)?;
//! assert_eq!(records[0].name(), "A");
//! assert_eq!(records[0].closest_leaf_distance(), 3.0);
//! # Ok::<(), leafstats::LeafStatsError>(())
//! ```

pub mod aggregate;
pub mod lookup;
pub mod propagate;
pub mod record;

pub use aggregate::SubtreeAggregates;
pub use lookup::{DiagnosisTime, Efficacy, Lookup, LookupKind};
pub use propagate::PathAggregates;
pub use record::{COLUMNS, LeafRecord};

use crate::error::LeafStatsError;
use crate::model::Tree;
use tracing::debug;

/// Computes the [LeafRecord]s of all leaves of `tree`, in leaf encounter order.
///
/// # Arguments
/// * `tree` - The tree; validated on construction
/// * `diagnoses` - Diagnosis time per leaf name
/// * `efficacies` - Efficacy per leaf name
///
/// # Errors
/// Returns [LeafStatsError::MissingLookup] for the first leaf (in encounter
/// order) missing from `diagnoses` or `efficacies`. No records are returned
/// in that case.
pub fn compute_leaf_stats<D, E>(
    tree: &Tree,
    diagnoses: &D,
    efficacies: &E,
) -> Result<Vec<LeafRecord>, LeafStatsError>
where
    D: Lookup<DiagnosisTime>,
    E: Lookup<Efficacy>,
{
    let aggregates = SubtreeAggregates::compute(tree);
    let paths = PathAggregates::compute(tree, &aggregates);
    assemble_leaf_records(tree, &aggregates, &paths, diagnoses, efficacies)
}

/// Joins the results of both passes with the lookup tables,
/// producing one [LeafRecord] per leaf in encounter order.
///
/// For a leaf `l` with parent `p`, the sibling leaf count is
/// `leaf_count(p) - 1` and the closest leaf distance is the distance to the
/// closest leaf outside the subtree of `l`. A leaf without parent (a tree
/// of one vertex) has no siblings and an infinite closest leaf distance.
///
/// # Errors
/// Returns [LeafStatsError::MissingLookup] for the first missing entry,
/// checking the diagnosis table before the efficacy table for each leaf.
pub fn assemble_leaf_records<D, E>(
    tree: &Tree,
    aggregates: &SubtreeAggregates,
    paths: &PathAggregates,
    diagnoses: &D,
    efficacies: &E,
) -> Result<Vec<LeafRecord>, LeafStatsError>
where
    D: Lookup<DiagnosisTime>,
    E: Lookup<Efficacy>,
{
    let mut records = Vec::with_capacity(aggregates.leaf_count(tree.root_index()));

    for leaf in tree.leaves() {
        let index = leaf.index();
        // Labels of leaves are guaranteed by the builder
        let name = leaf.label().unwrap_or_default();

        let diagnosis = *diagnoses
            .lookup(name)
            .ok_or_else(|| missing(LookupKind::Diagnosis, name))?;
        let efficacy = *efficacies
            .lookup(name)
            .ok_or_else(|| missing(LookupKind::Efficacy, name))?;

        let sibling_leaf_count = leaf.parent().map_or(0, |parent| {
            aggregates.leaf_count(parent) - aggregates.leaf_count(index)
        });

        records.push(LeafRecord {
            name: name.to_string(),
            diagnosis,
            efficacy,
            edge_length: leaf.edge_length(),
            root_to_tip_weighted: paths.root_to_tip_weighted(index),
            root_to_tip_unweighted: paths.root_to_tip_unweighted(index),
            sibling_leaf_count,
            closest_leaf_distance: paths.min_distance_above(index),
        });
    }

    debug!(records = records.len(), "assembled leaf records");
    Ok(records)
}

fn missing(kind: LookupKind, leaf: &str) -> LeafStatsError {
    LeafStatsError::MissingLookup {
        kind,
        leaf: leaf.to_string(),
    }
}
