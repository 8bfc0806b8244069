//! Code graph configuration options.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeGraphOptions {
    /// Keep one edge per reference site instead of one per ordered symbol pair.
    pub multigraph: bool,
}

impl CodeGraphOptions {
    /// At most one reference edge between two symbols in the same direction.
    pub fn simple() -> Self {
        Self { multigraph: false }
    }

    /// Every `add_reference` call adds a new edge.
    pub fn multigraph() -> Self {
        Self { multigraph: true }
    }
}
