//! Leafstats computes per-leaf statistics on rooted phylogenetic trees.
//!
//! For every leaf of a tree with (optionally missing) edge lengths, this
//! crate derives:
//! - the number of leaves below its siblings,
//! - its weighted and unweighted distance from the root,
//! - its distance to the closest other leaf anywhere in the tree,
//!
//! and joins them with externally supplied diagnosis times and efficacy
//! values into one record per leaf. Core functionality provided:
//! - Tree model: [Tree] built and validated by a [TreeBuilder]; arena
//!   pattern with vertices of any arity. See [crate::model].
//! - Statistics: two linear passes (post-order, then pre-order) over the
//!   tree and the assembly of [LeafRecord]s. See [crate::stats].
//! - Output: delimited text with a fixed column order. See [crate::table].
//!
//! Limitations:
//! - Reading trees from Newick or other notations is left to the caller,
//!   who feeds vertices into a [TreeBuilder].
//! - Diagnosis times and efficacy values are computed elsewhere and passed
//!   in as name-keyed tables.
//!
//! # Example
//! ```
//! use leafstats::{TreeBuilder, leaf_stats_table};
//! use std::collections::HashMap;
//!
//! // ((A:1,B:1):1,(C:1,D:1):1);
//! let mut builder = TreeBuilder::new();
//! let a = builder.add_leaf(Some(1.0), "A")?;
//! let b = builder.add_leaf(Some(1.0), "B")?;
//! let c = builder.add_leaf(Some(1.0), "C")?;
//! let d = builder.add_leaf(Some(1.0), "D")?;
//! let ab = builder.add_internal(&[a, b], Some(1.0))?;
//! let cd = builder.add_internal(&[c, d], Some(1.0))?;
//! builder.add_internal(&[ab, cd], None)?;
//! let tree = builder.finish()?;
//!
//! let names = ["A", "B", "C", "D"].map(String::from);
//! let diagnoses: HashMap<_, _> = names.iter().map(|n| (n.clone(), Some(1.0))).collect();
//! let efficacies: HashMap<_, _> = names.iter().map(|n| (n.clone(), 0.0)).collect();
//!
//! let table = leaf_stats_table(&tree, &diagnoses, &efficacies)?;
//! assert!(table.lines().nth(1).unwrap().starts_with("A,1.0,0.0,1.0,2.0,2,1,2.0"));
//! # Ok::<(), leafstats::LeafStatsError>(())
//! ```

pub mod error;
pub mod model;
pub mod stats;
pub mod table;

pub use crate::error::LeafStatsError;
pub use crate::model::{Tree, TreeBuilder, TreeError};
pub use crate::stats::{LeafRecord, compute_leaf_stats};

use crate::stats::{DiagnosisTime, Efficacy, Lookup};
use crate::table::TableStyle;
use std::io::Write;

// ============================================================================
// Quick API
// ============================================================================
/// Computes the leaf statistics of `tree` and returns them as a
/// comma-separated table with header, using [TableStyle::default].
///
/// See [`stats::compute_leaf_stats`] for the computation and its errors.
pub fn leaf_stats_table<D, E>(
    tree: &Tree,
    diagnoses: &D,
    efficacies: &E,
) -> Result<String, LeafStatsError>
where
    D: Lookup<DiagnosisTime>,
    E: Lookup<Efficacy>,
{
    let records = compute_leaf_stats(tree, diagnoses, efficacies)?;
    Ok(table::to_leaf_table(&records, &TableStyle::default()))
}

/// Computes the leaf statistics of `tree` and writes them to `writer`
/// in the given style.
///
/// Nothing is written if a lookup fails.
pub fn write_leaf_stats<W, D, E>(
    writer: W,
    tree: &Tree,
    diagnoses: &D,
    efficacies: &E,
    style: &TableStyle,
) -> Result<(), LeafStatsError>
where
    W: Write,
    D: Lookup<DiagnosisTime>,
    E: Lookup<Efficacy>,
{
    let records = compute_leaf_stats(tree, diagnoses, efficacies)?;
    table::write_leaf_table(writer, &records, style)?;
    Ok(())
}
