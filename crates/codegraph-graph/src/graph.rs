//! Graph container.
//!
//! The container is an adjacency list: every vertex keeps the descriptors of its inbound and
//! outbound edges, and every edge keeps its endpoints. Vertices and edges live in two
//! descriptor-keyed tables, so removing an edge is one table lookup plus a linear splice in
//! each endpoint's list.
//!
//! Costs (N vertices, M edges incident to the vertex at hand):
//! - `add_vertex`, `add_edge`: amortized O(1)
//! - `remove_edge`: O(M) for the splice
//! - `remove_vertex`: O(M) splices, one per incident edge
//! - adjacency enumeration: O(M)

mod descriptor;
mod entries;
mod table;

pub use descriptor::{Descriptor, DescriptorGenerator, EdgeDescriptor, VertexDescriptor};

use crate::error::{Error, Result};
use entries::{EdgeEntry, VertexEntry, splice_out};
use table::Table;

/// General directed graph with per-vertex context `V` and per-edge context `E`.
///
/// Self-loops and parallel edges are allowed. Enumeration always follows insertion order.
/// Descriptors from one graph instance must not be used with another.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Table<VertexDescriptor, VertexEntry<V>>,
    edges: Table<EdgeDescriptor, EdgeEntry<E>>,
    vertex_ids: DescriptorGenerator<VertexDescriptor>,
    edge_ids: DescriptorGenerator<EdgeDescriptor>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Table::with_capacity(vertices),
            edges: Table::with_capacity(edges),
            vertex_ids: DescriptorGenerator::new(),
            edge_ids: DescriptorGenerator::new(),
        }
    }

    fn vertex(&self, vertex: VertexDescriptor) -> Result<&VertexEntry<V>> {
        self.vertices
            .get(vertex)
            .ok_or(Error::VertexNotFound(vertex))
    }

    fn vertex_mut(&mut self, vertex: VertexDescriptor) -> Result<&mut VertexEntry<V>> {
        self.vertices
            .get_mut(vertex)
            .ok_or(Error::VertexNotFound(vertex))
    }

    fn edge(&self, edge: EdgeDescriptor) -> Result<&EdgeEntry<E>> {
        self.edges.get(edge).ok_or(Error::EdgeNotFound(edge))
    }

    fn edge_mut(&mut self, edge: EdgeDescriptor) -> Result<&mut EdgeEntry<E>> {
        self.edges.get_mut(edge).ok_or(Error::EdgeNotFound(edge))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    pub fn has_vertex(&self, vertex: VertexDescriptor) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn has_edge(&self, edge: EdgeDescriptor) -> bool {
        self.edges.contains(edge)
    }

    /// Adds a vertex carrying `context` and returns its freshly minted descriptor.
    pub fn add_vertex(&mut self, context: V) -> VertexDescriptor {
        let vertex = self.vertex_ids.next();
        self.vertices.insert(vertex, VertexEntry::new(context));
        tracing::trace!(%vertex, "add vertex");
        vertex
    }

    /// Adds a vertex under a caller-chosen descriptor.
    ///
    /// Fails if `vertex` has already been issued by this graph, even if it was removed since,
    /// or if it is not below [`DescriptorGenerator::RESERVE_LIMIT`]. Descriptors minted
    /// afterwards are greater than `vertex`.
    pub fn insert_vertex(&mut self, vertex: VertexDescriptor, context: V) -> Result<()> {
        if self.vertex_ids.is_issued(vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }
        if !self.vertex_ids.reserve(vertex) {
            return Err(Error::VertexOutOfRange(vertex));
        }
        self.vertices.insert(vertex, VertexEntry::new(context));
        tracing::trace!(%vertex, "insert vertex");
        Ok(())
    }

    /// Adds an edge `from -> to` carrying `context`.
    ///
    /// Both endpoints must exist; they may be the same vertex.
    pub fn add_edge(
        &mut self,
        from: VertexDescriptor,
        to: VertexDescriptor,
        context: E,
    ) -> Result<EdgeDescriptor> {
        self.check_endpoints(from, to)?;
        let edge = self.edge_ids.next();
        self.link(edge, from, to, context)?;
        Ok(edge)
    }

    /// Adds an edge under a caller-chosen descriptor. See [`Graph::insert_vertex`].
    pub fn insert_edge(
        &mut self,
        edge: EdgeDescriptor,
        from: VertexDescriptor,
        to: VertexDescriptor,
        context: E,
    ) -> Result<()> {
        if self.edge_ids.is_issued(edge) {
            return Err(Error::DuplicateEdge(edge));
        }
        if !self.edge_ids.can_reserve(edge) {
            return Err(Error::EdgeOutOfRange(edge));
        }
        self.check_endpoints(from, to)?;
        if !self.edge_ids.reserve(edge) {
            return Err(Error::EdgeOutOfRange(edge));
        }
        self.link(edge, from, to, context)
    }

    fn check_endpoints(&self, from: VertexDescriptor, to: VertexDescriptor) -> Result<()> {
        self.vertex(from)?;
        self.vertex(to)?;
        Ok(())
    }

    fn link(
        &mut self,
        edge: EdgeDescriptor,
        from: VertexDescriptor,
        to: VertexDescriptor,
        context: E,
    ) -> Result<()> {
        self.vertex_mut(from)?.outbound.push(edge);
        self.vertex_mut(to)?.inbound.push(edge);
        self.edges.insert(edge, EdgeEntry { from, to, context });
        tracing::trace!(%edge, %from, %to, "add edge");
        Ok(())
    }

    /// Removes `vertex` together with every edge incident to it and returns its context.
    pub fn remove_vertex(&mut self, vertex: VertexDescriptor) -> Result<V> {
        let entry = self
            .vertices
            .remove(vertex)
            .ok_or(Error::VertexNotFound(vertex))?;

        // The vertex is already gone from the table, so the lookups below only ever find the
        // other endpoint. A self-loop shows up in both lists but is removed on the first pass.
        let mut removed = 0usize;
        for &edge in &entry.inbound {
            let Some(e) = self.edges.remove(edge) else {
                continue;
            };
            removed += 1;
            if let Some(source) = self.vertices.get_mut(e.from) {
                splice_out(&mut source.outbound, edge);
            }
        }
        for &edge in &entry.outbound {
            let Some(e) = self.edges.remove(edge) else {
                continue;
            };
            removed += 1;
            if let Some(target) = self.vertices.get_mut(e.to) {
                splice_out(&mut target.inbound, edge);
            }
        }

        tracing::debug!(%vertex, edges = removed, "remove vertex");
        Ok(entry.context)
    }

    /// Removes `edge` and returns its context.
    pub fn remove_edge(&mut self, edge: EdgeDescriptor) -> Result<E> {
        let entry = self.edges.remove(edge).ok_or(Error::EdgeNotFound(edge))?;
        if let Some(source) = self.vertices.get_mut(entry.from) {
            splice_out(&mut source.outbound, edge);
        }
        if let Some(target) = self.vertices.get_mut(entry.to) {
            splice_out(&mut target.inbound, edge);
        }
        tracing::trace!(%edge, "remove edge");
        Ok(entry.context)
    }

    /// All live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexDescriptor> + '_ {
        self.vertices.keys()
    }

    /// All live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeDescriptor> + '_ {
        self.edges.keys()
    }

    pub fn for_each_vertex<F>(&self, mut f: F)
    where
        F: FnMut(VertexDescriptor, &V),
    {
        for (v, entry) in self.vertices.iter() {
            f(v, &entry.context);
        }
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(EdgeDescriptor, &E),
    {
        for (e, entry) in self.edges.iter() {
            f(e, &entry.context);
        }
    }

    /// Targets of the outbound edges of `vertex` (`vertex -> u`), in edge insertion order.
    pub fn adjacent_vertices(
        &self,
        vertex: VertexDescriptor,
    ) -> Result<impl Iterator<Item = VertexDescriptor> + '_> {
        let entry = self.vertex(vertex)?;
        Ok(entry
            .outbound
            .iter()
            .filter_map(move |&e| self.edges.get(e))
            .map(|e| e.to))
    }

    /// Sources of the inbound edges of `vertex` (`u -> vertex`), in edge insertion order.
    pub fn inv_adjacent_vertices(
        &self,
        vertex: VertexDescriptor,
    ) -> Result<impl Iterator<Item = VertexDescriptor> + '_> {
        let entry = self.vertex(vertex)?;
        Ok(entry
            .inbound
            .iter()
            .filter_map(move |&e| self.edges.get(e))
            .map(|e| e.from))
    }

    pub fn out_edges(
        &self,
        vertex: VertexDescriptor,
    ) -> Result<impl Iterator<Item = EdgeDescriptor> + '_> {
        Ok(self.vertex(vertex)?.outbound.iter().copied())
    }

    pub fn in_edges(
        &self,
        vertex: VertexDescriptor,
    ) -> Result<impl Iterator<Item = EdgeDescriptor> + '_> {
        Ok(self.vertex(vertex)?.inbound.iter().copied())
    }

    pub fn out_degree(&self, vertex: VertexDescriptor) -> Result<usize> {
        Ok(self.vertex(vertex)?.outbound.len())
    }

    pub fn in_degree(&self, vertex: VertexDescriptor) -> Result<usize> {
        Ok(self.vertex(vertex)?.inbound.len())
    }

    /// Inbound plus outbound edge count; a self-loop counts twice.
    pub fn degree(&self, vertex: VertexDescriptor) -> Result<usize> {
        let entry = self.vertex(vertex)?;
        Ok(entry.inbound.len() + entry.outbound.len())
    }

    /// Returns `(from, to)`.
    pub fn edge_nodes(&self, edge: EdgeDescriptor) -> Result<(VertexDescriptor, VertexDescriptor)> {
        let entry = self.edge(edge)?;
        Ok((entry.from, entry.to))
    }

    pub fn vertex_get(&self, vertex: VertexDescriptor) -> Result<&V> {
        Ok(&self.vertex(vertex)?.context)
    }

    pub fn vertex_get_mut(&mut self, vertex: VertexDescriptor) -> Result<&mut V> {
        Ok(&mut self.vertex_mut(vertex)?.context)
    }

    /// Replaces the context of `vertex` and returns the previous one. Adjacency is untouched.
    pub fn vertex_set(&mut self, vertex: VertexDescriptor, context: V) -> Result<V> {
        Ok(std::mem::replace(&mut self.vertex_mut(vertex)?.context, context))
    }

    pub fn edge_get(&self, edge: EdgeDescriptor) -> Result<&E> {
        Ok(&self.edge(edge)?.context)
    }

    pub fn edge_get_mut(&mut self, edge: EdgeDescriptor) -> Result<&mut E> {
        Ok(&mut self.edge_mut(edge)?.context)
    }

    /// Replaces the context of `edge` and returns the previous one.
    pub fn edge_set(&mut self, edge: EdgeDescriptor, context: E) -> Result<E> {
        Ok(std::mem::replace(&mut self.edge_mut(edge)?.context, context))
    }
}
