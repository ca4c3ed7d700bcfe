//! RegionError: Unified error type for flatsurf-region public APIs
//!
//! Every failure of the classification pipeline is one of these variants. None
//! of them are recoverable inside the crate: they point at malformed input
//! surfaces or curves, or at a broken invariant of an external collaborator.

use thiserror::Error;

use crate::topology::half_edge::{HalfEdge, Vertex};
use crate::topology::surface::SurfaceId;

/// Unified error type for flatsurf-region operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Attempted to construct a HalfEdge with a zero id (0 has no reverse).
    #[error("HalfEdge must be non-zero (0 is its own reverse)")]
    InvalidHalfEdge,
    /// A half-edge was used with a surface that does not contain it.
    #[error("half edge {0} does not belong to the surface")]
    UnknownHalfEdge(HalfEdge),
    /// A vertex index outside of the surface's vertex list.
    #[error("vertex {0} does not belong to the surface")]
    UnknownVertex(Vertex),
    /// The combinatorial data handed to a surface constructor is inconsistent.
    #[error("Malformed surface: {0}")]
    MalformedSurface(String),
    /// A curve was used with a surface (or deformation) it does not live on.
    #[error("Surface mismatch: expected a curve on surface {expected}, found surface {found}")]
    DomainMismatch {
        expected: SurfaceId,
        found: SurfaceId,
    },
    /// The deformation is not defined on the connection leaving `0`.
    #[error("Deformation has no image for the connection leaving half edge {0}")]
    UndefinedImage(HalfEdge),
    /// An external collaborator broke a documented invariant.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// The path of a connection and the path of its reverse do not mirror each other.
    #[error("Asymmetric path for the connection from {from} to {to}: {reason}")]
    PathAsymmetry {
        from: HalfEdge,
        to: HalfEdge,
        reason: String,
    },
    /// Two events on the same half-edge compare equal.
    #[error(
        "Cannot order events #{first} and #{second} at half edge {half_edge} (degenerate configuration)"
    )]
    AmbiguousOrdering {
        half_edge: HalfEdge,
        first: usize,
        second: usize,
    },
    /// The flood fill left a half-edge without classification.
    #[error("Half edge {0} was not reached by region classification")]
    UnresolvedHalfEdge(HalfEdge),
    /// The component has no perimeter at all and the caller asked to reject that.
    #[error("Component has no perimeter events to classify against")]
    EmptyPerimeter,
}
