//! Data model for rooted phylogenetic trees.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [Vertex] nodes referenced by [VertexIndex]. Vertices may have any number
//! of children; whether a vertex is root, internal or leaf follows from its
//! links. A single vertex on its own is a valid tree (its root is a leaf).
//!
//! Edge lengths are modelled explicitly as [EdgeLength], which is either
//! `Present` with a validated [BranchLength] or `Absent`.
//!
//! # Building trees
//! Trees are read-only and obtained from a [TreeBuilder], which rejects
//! anything but a single rooted tree with [TreeError].

pub mod tree;
pub mod tree_builder;
pub mod tree_error;
pub mod vertex;

pub use tree::Tree;
pub use tree::VertexIndex;
pub use tree::{LeavesIter, PostOrderIter, PreOrderIter};
pub use tree_builder::TreeBuilder;
pub use tree_error::TreeError;
pub use vertex::{BranchLength, EdgeLength, Vertex};
