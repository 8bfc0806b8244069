//! Descriptor types and the generator that mints them.
//!
//! Vertex and edge descriptors share the same raw representation but are distinct types, so
//! a vertex descriptor can never be passed where an edge descriptor is expected.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Common interface of [`VertexDescriptor`] and [`EdgeDescriptor`].
pub trait Descriptor: sealed::Sealed + Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    fn from_raw(raw: u64) -> Self;
    fn raw(self) -> u64;
}

/// Vertex identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexDescriptor(u64);

/// Edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeDescriptor(u64);

macro_rules! descriptor {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Wraps a raw value. The result is not registered in any graph.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl sealed::Sealed for $ty {}

        impl Descriptor for $ty {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

descriptor!(VertexDescriptor, "v");
descriptor!(EdgeDescriptor, "e");

/// Mints strictly increasing descriptors of one kind.
///
/// A value handed out once is never handed out again, even after the corresponding record
/// has been removed from the graph.
#[derive(Debug, Clone)]
pub struct DescriptorGenerator<D> {
    next: u64,
    _kind: PhantomData<D>,
}

impl<D: Descriptor> Default for DescriptorGenerator<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Descriptor> DescriptorGenerator<D> {
    /// Caller-chosen descriptors must be below this value. Everything from here up stays free
    /// for minting, so the counter cannot run out through [`DescriptorGenerator::reserve`].
    pub const RESERVE_LIMIT: u64 = 1 << 63;

    pub fn new() -> Self {
        Self {
            next: 0,
            _kind: PhantomData,
        }
    }

    /// Mints the next descriptor. The watermark starts at most at
    /// [`Self::RESERVE_LIMIT`], leaving 2^63 values to mint.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> D {
        let d = D::from_raw(self.next);
        self.next += 1;
        d
    }

    /// Returns true if `d` is below the watermark, i.e. it was minted or reserved before.
    pub fn is_issued(&self, d: D) -> bool {
        d.raw() < self.next
    }

    /// Returns true if `d` may be reserved: it is neither issued nor at or above
    /// [`Self::RESERVE_LIMIT`].
    pub fn can_reserve(&self, d: D) -> bool {
        !self.is_issued(d) && d.raw() < Self::RESERVE_LIMIT
    }

    /// Moves the watermark past a caller-chosen descriptor so `next` never returns it.
    ///
    /// Returns false and leaves the watermark alone if `d` cannot be reserved.
    #[must_use]
    pub fn reserve(&mut self, d: D) -> bool {
        if !self.can_reserve(d) {
            return false;
        }
        self.next = d.raw() + 1;
        true
    }
}
