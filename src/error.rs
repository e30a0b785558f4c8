//! Crate-level error type.

use crate::model::TreeError;
use crate::stats::lookup::LookupKind;
use thiserror::Error;

/// Errors that abort a leaf statistics computation.
#[derive(Error, Debug)]
pub enum LeafStatsError {
    /// The input does not form a single rooted tree.
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeError),

    /// A leaf has no entry in one of the lookup tables.
    #[error("no {kind} value for leaf '{leaf}'")]
    MissingLookup { kind: LookupKind, leaf: String },

    /// Writing the output table failed.
    #[error("IO error - {0}")]
    Io(#[from] std::io::Error),
}
