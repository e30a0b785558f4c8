//! Construction and validation of [Tree]s.
//!
//! The [TreeBuilder] is the seam between whatever reads a tree (a Newick
//! reader, a database, test code) and the statistics computed on it. Readers
//! add vertices one by one and link them, then call
//! [`finish`](TreeBuilder::finish), which hands out a [Tree] only if the
//! vertices form exactly one rooted tree.
//!
//! Two styles of construction are supported and can be mixed:
//! * **Bottom-up:** [`add_leaf`](TreeBuilder::add_leaf) and
//!   [`add_internal`](TreeBuilder::add_internal), where children exist
//!   before their parent (as when parsing Newick).
//! * **Linking:** [`add_vertex`](TreeBuilder::add_vertex) and
//!   [`attach`](TreeBuilder::attach), for sources that list vertices and
//!   parent links in any order.
//!
//! # Example
//! ```
//! use leafstats::model::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! let a = builder.add_leaf(Some(1.0), "A")?;
//! let b = builder.add_leaf(Some(2.0), "B")?;
//! let c = builder.add_leaf(None, "C")?;
//! builder.add_internal(&[a, b, c], None)?;
//! let tree = builder.finish()?;
//!
//! assert_eq!(tree.num_leaves(), 3);
//! # Ok::<(), leafstats::model::TreeError>(())
//! ```

use crate::model::tree::{Tree, VertexIndex};
use crate::model::tree_error::TreeError;
use crate::model::vertex::{EdgeLength, Vertex};
use std::collections::HashSet;
use tracing::debug;

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Collects vertices and parent-child links and validates them into a [Tree].
///
/// Links are checked eagerly where possible (unknown indices, self-links,
/// second parents); global properties (single root, reachability, leaf
/// labels) are checked in [`finish`](TreeBuilder::finish).
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    vertices: Vec<Vertex>,
    name: Option<String>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `num_vertices` vertices.
    pub fn with_capacity(num_vertices: usize) -> Self {
        TreeBuilder {
            vertices: Vec::with_capacity(num_vertices),
            name: None,
        }
    }

    /// Attaches a name to the tree under construction.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the name of the tree under construction.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns the number of vertices added so far.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a leaf, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `edge_length` - Length of the edge to the parent, if known
    /// * `label` - Label of this leaf
    ///
    /// # Errors
    /// Returns [TreeError::InvalidEdgeLength] if `edge_length` is negative or not finite.
    pub fn add_leaf(
        &mut self,
        edge_length: Option<f64>,
        label: impl Into<String>,
    ) -> Result<VertexIndex, TreeError> {
        self.add_vertex(Some(label.into()), edge_length)
    }

    /// Adds an internal vertex (or the root) above the given children,
    /// assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `children` - Indices of previously added vertices without parent
    /// * `edge_length` - Length of the edge to the parent, if known
    ///
    /// # Errors
    /// Returns an error if `children` is empty, refers to unknown vertices or
    /// to vertices that already have a parent, or if `edge_length` is invalid.
    pub fn add_internal(
        &mut self,
        children: &[VertexIndex],
        edge_length: Option<f64>,
    ) -> Result<VertexIndex, TreeError> {
        if children.is_empty() {
            return Err(TreeError::NoChildren);
        }
        // Check all children first, so a failed call leaves the builder unchanged
        let mut seen = HashSet::with_capacity(children.len());
        for &child in children {
            self.check_attachable(child)?;
            if !seen.insert(child) {
                return Err(TreeError::MultipleParents {
                    child,
                    parent: self.vertices.len(),
                });
            }
        }

        let index = self.add_vertex(None, edge_length)?;
        for &child in children {
            self.link(index, child);
        }

        Ok(index)
    }

    /// Adds an unlinked vertex, assigning a unique index, which gets returned.
    ///
    /// Link it to others with [`attach`](TreeBuilder::attach).
    /// Vertices that end up without children must have a label.
    ///
    /// # Errors
    /// Returns [TreeError::InvalidEdgeLength] if `edge_length` is negative or not finite.
    pub fn add_vertex(
        &mut self,
        label: Option<String>,
        edge_length: Option<f64>,
    ) -> Result<VertexIndex, TreeError> {
        let edge_length = EdgeLength::try_from_option(edge_length)?;
        let index = self.vertices.len();
        self.vertices.push(Vertex::new(index, edge_length, label));
        Ok(index)
    }

    /// Makes `child` the next child of `parent`.
    ///
    /// # Errors
    /// * [TreeError::UnknownVertex] if either index was not handed out by this builder
    /// * [TreeError::Cycle] if `parent == child`
    /// * [TreeError::MultipleParents] if `child` already has a parent
    pub fn attach(&mut self, parent: VertexIndex, child: VertexIndex) -> Result<(), TreeError> {
        if parent >= self.vertices.len() {
            return Err(TreeError::UnknownVertex(parent));
        }
        self.check_attachable(child)?;
        if parent == child {
            return Err(TreeError::Cycle(child));
        }

        self.link(parent, child);
        Ok(())
    }

    /// Validates the collected vertices and returns the resulting [Tree].
    ///
    /// Checks:
    /// - There is at least one vertex
    /// - Exactly one vertex has no parent (the root)
    /// - Every vertex is reachable from the root (otherwise it lies on a cycle)
    /// - Every leaf has a non-empty label, and no label is used by two leaves
    pub fn finish(self) -> Result<Tree, TreeError> {
        if self.vertices.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut roots = self.vertices.iter().filter(|v| v.is_root());
        let root_index = match (roots.next(), roots.count()) {
            (Some(root), 0) => root.index(),
            (Some(_), others) => return Err(TreeError::MultipleRoots(others + 1)),
            (None, _) => return Err(TreeError::Cycle(self.vertex_on_cycle(0))),
        };

        let reached = self.reachable_from(root_index);
        if let Some(unreached) = reached.iter().position(|&r| !r) {
            return Err(TreeError::Cycle(self.vertex_on_cycle(unreached)));
        }

        let mut labels = HashSet::new();
        for vertex in self.vertices.iter().filter(|v| v.is_leaf()) {
            match vertex.label() {
                None | Some("") => return Err(TreeError::UnlabeledLeaf(vertex.index())),
                Some(label) => {
                    if !labels.insert(label) {
                        return Err(TreeError::DuplicateLabel(label.to_string()));
                    }
                }
            }
        }

        debug!(
            vertices = self.vertices.len(),
            leaves = labels.len(),
            root = root_index,
            "validated tree"
        );

        Ok(Tree::from_validated(self.vertices, root_index, self.name))
    }

    // Checks that `child` exists and is still free to receive a parent
    fn check_attachable(&self, child: VertexIndex) -> Result<(), TreeError> {
        let vertex = self
            .vertices
            .get(child)
            .ok_or(TreeError::UnknownVertex(child))?;
        match vertex.parent() {
            Some(parent) => Err(TreeError::MultipleParents { child, parent }),
            None => Ok(()),
        }
    }

    fn link(&mut self, parent: VertexIndex, child: VertexIndex) {
        self.vertices[child].set_parent(parent);
        self.vertices[parent].push_child(child);
    }

    // Follows parent links from a vertex whose ancestors never reach a root.
    // After as many steps as there are vertices, the walk is on the cycle.
    fn vertex_on_cycle(&self, start: VertexIndex) -> VertexIndex {
        let mut index = start;
        for _ in 0..self.vertices.len() {
            match self.vertices[index].parent() {
                Some(parent) => index = parent,
                None => break,
            }
        }
        index
    }

    // Marks all vertices reachable from `root` via child links (iteratively)
    fn reachable_from(&self, root: VertexIndex) -> Vec<bool> {
        let mut reached = vec![false; self.vertices.len()];
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            // Each vertex has at most one parent, so no vertex is pushed twice
            reached[index] = true;
            stack.extend(self.vertices[index].children().iter());
        }
        reached
    }
}
