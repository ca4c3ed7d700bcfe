#![cfg_attr(docsrs, feature(doc_cfg))]
//! # flatsurf-region
//!
//! flatsurf-region locates flow components on triangulated translation surfaces. Given the
//! saddle connections bounding a component, it determines which half-edges of the
//! triangulation lie inside the component and in which order the perimeter threads through
//! each half-edge, producing a serializable description that a renderer can draw directly.
//!
//! ## Features
//! - Half-edge surfaces behind the [`Surface`](topology::Surface) trait, with an in-memory
//!   [`FlatTriangulation`](topology::FlatTriangulation)
//! - Generic scalars: exact integers or floating point coordinates
//! - Ordering of touchings and crossings along every half-edge, rejecting degenerate ties
//! - Inside/outside classification by direct evidence and an iterative flood fill
//! - Pulling perimeters back through a [`Deformation`](algs::Deformation) and checking holonomy
//! - Optional parallel encoding of whole decompositions (`rayon` feature)
//!
//! ## Determinism
//!
//! All output follows the half-edge order of the surface and the order of the perimeter, so
//! encoding the same component twice yields identical results.
//!
//! ## Usage
//! Add `flatsurf-region` as a dependency in your `Cargo.toml` and enable features as needed:
//!
//! ```toml
//! [dependencies]
//! flatsurf-region = "0.1.0"
//! # Optional features:
//! # features = ["rayon", "check-invariants"]
//! ```
//!
//! ```rust
//! use flatsurf_region::prelude::*;
//!
//! # fn main() -> Result<(), RegionError> {
//! let torus = FlatTriangulation::from_faces(
//!     &[[1, 2, 3], [-1, -2, -3]],
//!     vec![Vector::new(1, 1), Vector::new(-1, 0), Vector::new(0, -1)],
//! )?;
//! let mut perimeter = Vec::new();
//! for id in [3, 1, -3, -1] {
//!     perimeter.push(PerimeterCurve::new(torus.connection_along(HalfEdge::new(id)?)?, false, false));
//! }
//! let component = FlowComponent::new(perimeter, true);
//! let encoded = encode_flow_component(&torus, &component, None, &EncodeOptions::default())?;
//! assert_eq!(encoded.inside.len(), 6);
//! # Ok(())
//! # }
//! ```

// Re-export our major subsystems:
pub mod algs;
pub mod debug_invariants;
pub mod encoding;
pub mod region_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use region_error::RegionError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::classify::{EmptyPerimeterHandling, RegionClassification, classify_region};
    pub use crate::algs::events::{Event, EventIndex};
    pub use crate::algs::pullback::{Deformation, PullbackResolver};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::encoding::{
        EncodeOptions, EncodedComponent, encode_flat_triangulation, encode_flow_component,
        encode_flow_decomposition, encode_path, encode_saddle_connection,
    };
    pub use crate::region_error::RegionError;
    pub use crate::topology::component::{FlowComponent, FlowDecomposition, PerimeterCurve};
    pub use crate::topology::connection::{HalfEdgeIntersection, Path, SaddleConnection};
    pub use crate::topology::half_edge::{HalfEdge, Vertex};
    pub use crate::topology::surface::{Surface, SurfaceId};
    pub use crate::topology::triangulation::FlatTriangulation;
    pub use crate::topology::vector::{Scalar, Vector};
}
