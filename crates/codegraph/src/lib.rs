#![forbid(unsafe_code)]

//! Code relationship graph (headless).
//!
//! Symbols reported by a document-symbol provider become vertices, references between
//! them become edges. Rendering and editor integration are callers of this crate: they read
//! the graph through [`CodeGraph::graph`] and feed symbols in through [`SymbolSource`].

pub mod code_graph;
pub mod error;
pub mod options;
pub mod outline;
pub mod symbol;

pub use codegraph_graph as graph;

pub use code_graph::{CodeGraph, Node, Point, Reference};
pub use error::{Error, Result};
pub use options::CodeGraphOptions;
pub use outline::{SymbolSource, symbol_at, symbol_under_cursor, symbols_from_json};
pub use symbol::{Location, Position, Range, Symbol, SymbolInformation, SymbolKind, Uri};
