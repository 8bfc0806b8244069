//! Internal storage entries for [`Graph`](super::Graph).
//!
//! Adjacency lists hold edge descriptors only; the endpoints and context of an edge live in
//! the edge table, so one lookup resolves both sides of a splice.

use super::{EdgeDescriptor, VertexDescriptor};

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<V> {
    pub(in crate::graph) context: V,
    pub(in crate::graph) outbound: Vec<EdgeDescriptor>,
    pub(in crate::graph) inbound: Vec<EdgeDescriptor>,
}

impl<V> VertexEntry<V> {
    pub(in crate::graph) fn new(context: V) -> Self {
        Self {
            context,
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) from: VertexDescriptor,
    pub(in crate::graph) to: VertexDescriptor,
    pub(in crate::graph) context: E,
}

/// Removes the first occurrence of `edge`, preserving the order of the rest. O(M).
pub(in crate::graph) fn splice_out(list: &mut Vec<EdgeDescriptor>, edge: EdgeDescriptor) {
    if let Some(idx) = list.iter().position(|&e| e == edge) {
        list.remove(idx);
    } else {
        debug_assert!(false, "edge {edge} missing from adjacency list");
    }
}
