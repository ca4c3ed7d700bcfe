//! Top-level module for flat surface topology.
//!
//! This module provides the combinatorial model the algorithms run on:
//! - `HalfEdge` and `Vertex` handles
//! - planar vectors over a generic `Scalar`
//! - the `Surface` trait and the in-memory `FlatTriangulation`
//! - saddle connections, paths and flow components
//!
//! Most users will build a `FlatTriangulation` (or implement `Surface` for
//! their own type) and describe components with `PerimeterCurve`s.

pub mod component;
pub mod connection;
pub mod half_edge;
pub mod surface;
pub mod triangulation;
pub mod validation;
pub mod vector;

pub use component::{FlowComponent, FlowDecomposition, PerimeterCurve};
pub use connection::{HalfEdgeIntersection, Path, SaddleConnection};
pub use half_edge::{HalfEdge, Vertex};
pub use surface::{Surface, SurfaceId};
pub use triangulation::FlatTriangulation;
pub use vector::{Ccw, Scalar, Vector};
