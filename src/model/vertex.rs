//! Vertex module for phylogenetic tree representation.
//!
//! Provides the building blocks stored in a [Tree](crate::model::Tree) arena:
//! * [Vertex] - a single vertex with parent, children, edge length and label
//! * [BranchLength] - a validated, non-negative and finite edge length
//! * [EdgeLength] - the length of the edge to the parent, which may be absent

use crate::model::tree::VertexIndex;
use crate::model::tree_error::TreeError;
use std::fmt;
use std::ops::Deref;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a rooted phylogenetic tree.
///
/// Whether a vertex is the root, an internal vertex or a leaf is determined by
/// its links rather than by a variant:
/// - **Root**: has no parent
/// - **Leaf**: has no children, carries a label
/// - **Internal**: has a parent and at least one child
///
/// A tree consisting of a single vertex has a root that is also a leaf.
///
/// # Invariants
/// - `index` is the position of this vertex in the arena
/// - `children` are ordered as added, but carry no meaning beyond that order
/// - `edge_length` is validated on construction (see [BranchLength])
#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
    /// Index of this vertex in the tree arena
    index: VertexIndex,
    /// Index of the parent vertex, `None` for the root
    parent: Option<VertexIndex>,
    /// Indices of the child vertices, empty for leaves
    children: Vec<VertexIndex>,
    /// Length of the edge to the parent
    edge_length: EdgeLength,
    /// Label; required for leaves, optional for other vertices
    label: Option<String>,
}

impl Vertex {
    /// Creates a new vertex without parent and without children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `edge_length` - Length of the edge to the (future) parent
    /// * `label` - Optional label of this vertex
    pub(crate) fn new(index: VertexIndex, edge_length: EdgeLength, label: Option<String>) -> Self {
        Vertex {
            index,
            parent: None,
            children: Vec::new(),
            edge_length,
            label,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        self.index
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<VertexIndex> {
        self.parent
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the indices of the children of this vertex (empty for a leaf).
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the number of children of this vertex.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns the length of the edge to the parent.
    pub fn edge_length(&self) -> EdgeLength {
        self.edge_length
    }

    /// Returns the label of this vertex, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` if this vertex is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if this vertex is the root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if this vertex is neither root nor leaf.
    pub fn is_internal(&self) -> bool {
        !self.is_root() && !self.is_leaf()
    }

    pub(crate) fn set_parent(&mut self, parent: VertexIndex) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}

// =#========================================================================#=
// BRANCH LENGTH
// =#========================================================================#=
/// Branch length in a phylogenetic tree, enforced non-negative and finite.
///
/// Represents the evolutionary distance between a vertex and its parent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BranchLength(f64);

impl BranchLength {
    /// Creates a new branch length.
    ///
    /// # Panics
    /// Panics if `length` is negative or not finite.
    /// Use [`BranchLength::try_new`] for lengths coming from input data.
    pub fn new(length: f64) -> Self {
        assert!(length >= 0.0, "Branch length must be non-negative, got {}", length);
        assert!(length.is_finite(), "Branch length must be finite, got {}", length);
        BranchLength(length)
    }

    /// Creates a new branch length, rejecting negative, NaN and infinite values.
    pub fn try_new(length: f64) -> Result<Self, TreeError> {
        if length.is_finite() && length >= 0.0 {
            Ok(BranchLength(length))
        } else {
            Err(TreeError::InvalidEdgeLength(length))
        }
    }
}

impl Deref for BranchLength {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for BranchLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =#========================================================================#=
// EDGE LENGTH
// =#========================================================================#=
/// Length of the edge from a vertex to its parent, which may be absent.
///
/// Absent lengths occur when a tree comes without (some) branch lengths.
/// Every distance computation has to decide how to treat them; for weighted
/// distances [`EdgeLength::distance`] substitutes zero, while topological
/// counts ignore the length altogether.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EdgeLength {
    /// Edge with a known length
    Present(BranchLength),
    /// Edge without length information
    #[default]
    Absent,
}

impl EdgeLength {
    /// Validates an optional raw length into an [EdgeLength].
    pub fn try_from_option(length: Option<f64>) -> Result<Self, TreeError> {
        match length {
            Some(length) => Ok(EdgeLength::Present(BranchLength::try_new(length)?)),
            None => Ok(EdgeLength::Absent),
        }
    }

    /// Returns the length used for weighted distances; absent counts as `0`.
    pub fn distance(&self) -> f64 {
        match self {
            EdgeLength::Present(length) => **length,
            EdgeLength::Absent => 0.0,
        }
    }

    /// Returns `true` if a length is present.
    pub fn is_present(&self) -> bool {
        matches!(self, EdgeLength::Present(_))
    }

    /// Returns the branch length, if present.
    pub fn branch_length(&self) -> Option<BranchLength> {
        match self {
            EdgeLength::Present(length) => Some(*length),
            EdgeLength::Absent => None,
        }
    }
}

impl From<BranchLength> for EdgeLength {
    fn from(length: BranchLength) -> Self {
        EdgeLength::Present(length)
    }
}

impl From<Option<BranchLength>> for EdgeLength {
    fn from(length: Option<BranchLength>) -> Self {
        length.map_or(EdgeLength::Absent, EdgeLength::Present)
    }
}
