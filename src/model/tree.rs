//! Provides the rooted tree representation.
//!
//! Provides core data structures for representing phylogenetic trees:
//! * [Tree] - Main tree structure using the arena pattern
//!   for efficient memory layout
//! * [VertexIndex] as type used to index vertices in tree
//! * [PreOrderIter], [PostOrderIter] and [LeavesIter] for traversal

use crate::model::vertex::Vertex;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted phylogenetic tree of arbitrary arity represented using the arena
/// pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Aim is to avoid referencing troubles as well as to provide
/// efficient memory layout and cache locality for traversal operations.
///
/// # Structure
/// - All vertices (root, internal, and leaves) are stored in the arena.
/// - Index of root is maintained.
/// - No assumption on order of indices is maintained.
///   (e.g. leaves must not be first `n` indices)
/// - Every leaf carries a unique, non-empty label.
/// - Edge lengths are optional, but if provided are non-negative and finite.
///
/// # Construction
/// Trees are read-only. They are obtained from a
/// [TreeBuilder](crate::model::TreeBuilder), which checks that the
/// vertices form exactly one rooted tree before handing it out.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree
    root_index: VertexIndex,

    /// Name of tree; optional
    name: Option<String>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Wraps vertices that have been validated by the builder.
    pub(crate) fn from_validated(
        vertices: Vec<Vertex>,
        root_index: VertexIndex,
        name: Option<String>,
    ) -> Self {
        Tree {
            vertices,
            root_index,
            name,
        }
    }

    /// Returns reference to name of this tree, or `None` if not set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns a reference to the root vertex.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index]
    }

    /// Returns the index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices (neither root nor leaf) in this tree.
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the sum of all edge lengths below the root,
    /// where absent lengths count as zero.
    pub fn total_branch_length(&self) -> f64 {
        self.vertices
            .iter()
            .filter(|v| !v.is_root())
            .map(|v| v.edge_length().distance())
            .sum::<f64>()
    }

    /// Checks if all non-root vertices have edge lengths set.
    pub fn has_branch_lengths(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| v.is_root() || v.edge_length().is_present())
    }
}

impl std::ops::Index<VertexIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl Tree {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Post-order traversal visits each vertex's children, in stored order,
    /// before visiting the vertex itself. This is useful for aggregating data
    /// from leaves upward.
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Pre-order traversal visits each vertex before visiting its children.
    /// This is useful for propagating data from root to leaves.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the leaves in pre-order,
    /// i.e. in the left-to-right order in which they are encountered.
    pub fn leaves(&self) -> LeavesIter<'_> {
        LeavesIter {
            inner: self.pre_order_iter(),
        }
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited after all its descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::with_capacity(tree.num_vertices());
        stack.push((tree.root_index, false));
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_leaf() {
                // Either we've already processed children, or this is a leaf
                return Some(vertex);
            }

            self.stack.push((index, true));
            // Push children in reverse, so the first child is processed first
            for &child in vertex.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited before any of its descendants.
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::with_capacity(tree.num_vertices());
        stack.push(tree.root_index);
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children in reverse, so the first child is processed first
        self.stack.extend(vertex.children().iter().rev());

        Some(vertex)
    }
}

/// Iterator over the leaves of a tree in pre-order.
pub struct LeavesIter<'a> {
    inner: PreOrderIter<'a>,
}

impl<'a> Iterator for LeavesIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|v| v.is_leaf())
    }
}
