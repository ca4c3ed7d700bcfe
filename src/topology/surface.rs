//! Core trait for combinatorial flat surfaces.
//!
//! A [`Surface`] is a triangulated translation surface seen through its
//! half-edges: each half-edge has a reverse, a vector, and a position in the
//! rotation around its source vertex. The classification algorithms only
//! consume this interface; [`FlatTriangulation`](crate::topology::triangulation::FlatTriangulation)
//! is the in-memory implementation shipped with the crate.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::region_error::RegionError;
use crate::topology::half_edge::{HalfEdge, Vertex};
use crate::topology::vector::{Scalar, Vector};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a surface; curves and deformations refer to surfaces by id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// A process-wide unique id.
    pub fn fresh() -> Self {
        SurfaceId(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only half-edge surface.
///
/// # Rotations
/// `next_at_vertex(h)` is the half-edge following `h` counterclockwise around
/// the source vertex of `h`; `previous_at_vertex` is its inverse.
pub trait Surface {
    type Scalar: Scalar;

    fn id(&self) -> SurfaceId;

    /// All half-edges, in a fixed order that the algorithms preserve.
    fn half_edges<'a>(&'a self) -> Box<dyn Iterator<Item = HalfEdge> + 'a>;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = Vertex> + 'a>;

    /// Half-edges leaving `vertex`, in counterclockwise order.
    fn at_vertex(&self, vertex: Vertex) -> Result<Vec<HalfEdge>, RegionError>;

    fn previous_at_vertex(&self, half_edge: HalfEdge) -> Result<HalfEdge, RegionError>;

    fn next_at_vertex(&self, half_edge: HalfEdge) -> Result<HalfEdge, RegionError>;

    fn from_half_edge(&self, half_edge: HalfEdge) -> Result<Vector<Self::Scalar>, RegionError>;

    /// Whether `half_edge` belongs to this surface.
    fn contains(&self, half_edge: HalfEdge) -> bool {
        self.from_half_edge(half_edge).is_ok()
    }
}
