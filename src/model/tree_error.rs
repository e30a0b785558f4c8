//! Error type for constructing trees.
//!
//! A [TreeError] is raised by [TreeBuilder](crate::model::TreeBuilder) when
//! the vertices and links handed to it do not form a single rooted tree, or
//! when an edge length is invalid. A [Tree](crate::model::Tree) only exists
//! once all of these checks passed.

use crate::model::tree::VertexIndex;
use thiserror::Error;

/// Errors that can occur while building a tree.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum TreeError {
    #[error("tree has no vertices")]
    Empty,

    #[error("tree has {0} vertices without parent, expected exactly one root")]
    MultipleRoots(usize),

    #[error("vertex {0} lies on a cycle")]
    Cycle(VertexIndex),

    #[error("vertex {child} already has parent {parent}")]
    MultipleParents {
        child: VertexIndex,
        parent: VertexIndex,
    },

    #[error("unknown vertex index {0}")]
    UnknownVertex(VertexIndex),

    #[error("internal vertex needs at least one child")]
    NoChildren,

    #[error("leaf vertex {0} has no label")]
    UnlabeledLeaf(VertexIndex),

    #[error("leaf label '{0}' occurs more than once")]
    DuplicateLabel(String),

    #[error("invalid edge length {0} (must be finite and non-negative)")]
    InvalidEdgeLength(f64),
}
