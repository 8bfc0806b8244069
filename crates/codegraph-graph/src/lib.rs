#![forbid(unsafe_code)]

//! Directed graph container used by `codegraph`.
//!
//! Vertices and edges are addressed by opaque descriptors minted by the container. Each
//! vertex keeps its inbound and outbound edges in insertion order, and both vertices and
//! edges carry an arbitrary caller-supplied context. The interface follows the Boost Graph
//! Library naming (`add_vertex`, `adjacent_vertices`, `edge_nodes`, ...).
//!
//! ```
//! use codegraph_graph::Graph;
//!
//! let mut g: Graph<&str, u32> = Graph::new();
//! let a = g.add_vertex("a");
//! let b = g.add_vertex("b");
//! let e = g.add_edge(a, b, 7).unwrap();
//!
//! assert_eq!(g.adjacent_vertices(a).unwrap().collect::<Vec<_>>(), vec![b]);
//! assert_eq!(g.edge_nodes(e).unwrap(), (a, b));
//! assert_eq!(g.edge_get(e).unwrap(), &7);
//! ```

pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Descriptor, DescriptorGenerator, EdgeDescriptor, Graph, VertexDescriptor};
