//! Symbols as vertices, references as edges.

use crate::error::{Error, Result};
use crate::options::CodeGraphOptions;
use crate::symbol::{Location, SymbolInformation};
use codegraph_graph::{EdgeDescriptor, Graph, VertexDescriptor};
use rustc_hash::FxHashMap;

/// Renderer-side position of a node, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertex context: one code symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub symbol: SymbolInformation,
    /// Set once the renderer has placed (or the user has dragged) the node.
    pub position: Option<Point>,
}

impl Node {
    pub fn new(symbol: SymbolInformation) -> Self {
        Self {
            symbol,
            position: None,
        }
    }
}

/// Edge context: a reference from one symbol to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    /// Where the reference occurs, when the caller knows it.
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default)]
pub struct CodeGraph {
    options: CodeGraphOptions,
    graph: Graph<Node, Reference>,
    index: FxHashMap<SymbolInformation, VertexDescriptor>,
}

impl CodeGraph {
    pub fn new() -> Self {
        Self::with_options(CodeGraphOptions::default())
    }

    pub fn with_options(options: CodeGraphOptions) -> Self {
        Self {
            options,
            graph: Graph::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> CodeGraphOptions {
        self.options
    }

    /// Read access for renderers: walk `vertices()`, `edges()`, adjacency and contexts.
    pub fn graph(&self) -> &Graph<Node, Reference> {
        &self.graph
    }

    pub fn symbol_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn reference_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Adds `symbol` unless an equal symbol is already present; returns its vertex either way.
    pub fn add_symbol(&mut self, symbol: SymbolInformation) -> VertexDescriptor {
        if let Some(&node) = self.index.get(&symbol) {
            tracing::debug!(name = %symbol.name, %node, "symbol already in graph");
            return node;
        }
        let node = self.graph.add_vertex(Node::new(symbol.clone()));
        tracing::debug!(name = %symbol.name, %node, "add symbol");
        self.index.insert(symbol, node);
        node
    }

    pub fn find_node(&self, symbol: &SymbolInformation) -> Option<VertexDescriptor> {
        self.index.get(symbol).copied()
    }

    pub fn node(&self, node: VertexDescriptor) -> Result<&Node> {
        Ok(self.graph.vertex_get(node)?)
    }

    pub fn symbol(&self, node: VertexDescriptor) -> Result<&SymbolInformation> {
        Ok(&self.node(node)?.symbol)
    }

    fn require(&self, symbol: &SymbolInformation) -> Result<VertexDescriptor> {
        self.find_node(symbol).ok_or_else(|| Error::UnknownSymbol {
            name: symbol.name.clone(),
        })
    }

    /// Records that `from` references `to`, adding either symbol if it is missing.
    ///
    /// Without [`CodeGraphOptions::multigraph`], a second reference between the same ordered
    /// pair returns the existing edge.
    pub fn add_reference(
        &mut self,
        from: SymbolInformation,
        to: SymbolInformation,
        location: Option<Location>,
    ) -> Result<EdgeDescriptor> {
        let from = self.add_symbol(from);
        let to = self.add_symbol(to);

        if !self.options.multigraph {
            let existing = self
                .graph
                .out_edges(from)?
                .find(|&e| matches!(self.graph.edge_nodes(e), Ok((_, w)) if w == to));
            if let Some(edge) = existing {
                tracing::debug!(%from, %to, %edge, "reference already in graph");
                return Ok(edge);
            }
        }

        let edge = self.graph.add_edge(from, to, Reference { location })?;
        tracing::debug!(%from, %to, %edge, "add reference");
        Ok(edge)
    }

    /// Removes `symbol` and every reference from or to it.
    pub fn remove_symbol(&mut self, symbol: &SymbolInformation) -> Result<Node> {
        let node = self.require(symbol)?;
        let removed = self.graph.remove_vertex(node)?;
        self.index.remove(symbol);
        Ok(removed)
    }

    /// Symbols referenced by `symbol`, in reference insertion order.
    pub fn references_from(&self, symbol: &SymbolInformation) -> Result<Vec<&SymbolInformation>> {
        let node = self.require(symbol)?;
        self.graph
            .adjacent_vertices(node)?
            .map(|v| self.symbol(v))
            .collect()
    }

    /// Symbols referencing `symbol`, in reference insertion order.
    pub fn references_to(&self, symbol: &SymbolInformation) -> Result<Vec<&SymbolInformation>> {
        let node = self.require(symbol)?;
        self.graph
            .inv_adjacent_vertices(node)?
            .map(|v| self.symbol(v))
            .collect()
    }

    /// Stores the renderer position of `node` after a drag.
    pub fn move_node(&mut self, node: VertexDescriptor, position: Point) -> Result<()> {
        self.graph.vertex_get_mut(node)?.position = Some(position);
        Ok(())
    }
}
