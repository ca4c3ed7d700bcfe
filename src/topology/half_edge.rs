//! `HalfEdge`: a strong, zero-cost handle for oriented triangulation edges
//!
//! Every edge of a triangulation has two oriented sides. `HalfEdge` wraps a
//! nonzero `i64` so that the reverse of `h` is simply `-h`, and 0 stays
//! reserved as an invalid value.
//!
//! This module provides:
//! - A transparent `HalfEdge` newtype around `NonZeroI64`.
//! - The reversal involution as `Neg`.
//! - The `Vertex` handle used to enumerate vertex cycles.

use std::{fmt, num::NonZeroI64, ops::Neg};

use crate::region_error::RegionError;

/// One oriented side of a triangulation edge.
///
/// # Memory layout
/// This type is `repr(transparent)`, it has the same ABI and alignment as an
/// `i64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct HalfEdge(NonZeroI64);

impl HalfEdge {
    /// Creates a new `HalfEdge` from its signed id.
    ///
    /// Returns [`RegionError::InvalidHalfEdge`] if `id == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use flatsurf_region::topology::half_edge::HalfEdge;
    /// let h = HalfEdge::new(3).unwrap();
    /// assert_eq!((-h).id(), -3);
    /// ```
    #[inline]
    pub fn new(id: i64) -> Result<Self, RegionError> {
        NonZeroI64::new(id)
            .map(HalfEdge)
            .ok_or(RegionError::InvalidHalfEdge)
    }

    /// Returns the signed id of this half-edge.
    #[inline]
    pub const fn id(self) -> i64 {
        self.0.get()
    }

    /// Returns the 1-based index of the undirected edge this half-edge belongs to.
    #[inline]
    pub const fn edge(self) -> u64 {
        self.0.get().unsigned_abs()
    }

    /// Whether this is the positively oriented side of its edge.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0.get() > 0
    }
}

/// The reversal involution `h ↦ -h`.
impl Neg for HalfEdge {
    type Output = HalfEdge;

    #[inline]
    fn neg(self) -> Self::Output {
        HalfEdge(-self.0)
    }
}

impl fmt::Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfEdge").field(&self.id()).finish()
    }
}

/// Prints only the signed id.
impl fmt::Display for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A vertex of a surface, i.e., one cycle of half-edges around a point.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Vertex(pub usize);

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
