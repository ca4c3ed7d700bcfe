//! Saddle connections and paths made of them.
//!
//! A saddle connection is a straight curve between two singular points,
//! recorded relative to the triangulation: the half-edge it leaves from, the
//! half-edge it arrives at, its holonomy vector and the half-edges it crosses
//! on the way. The surface also reports the crossings of the reversed curve;
//! both are kept so that their symmetry can be checked rather than assumed.

use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::SurfaceId;
use crate::topology::vector::{Scalar, Vector};

/// A point where a curve crosses the interior of a half-edge.
///
/// The curve leaves the face of `half_edge` there. `at` is an intrinsic
/// position along the half-edge; positions order points from the source of
/// the half-edge to its target.
#[derive(Clone, Debug, PartialEq)]
pub struct HalfEdgeIntersection<T> {
    half_edge: HalfEdge,
    at: T,
}

impl<T: Scalar> HalfEdgeIntersection<T> {
    pub fn new(half_edge: HalfEdge, at: T) -> Self {
        Self { half_edge, at }
    }

    pub fn half_edge(&self) -> HalfEdge {
        self.half_edge
    }

    pub fn at(&self) -> &T {
        &self.at
    }
}

/// An oriented saddle connection on a specific surface.
#[derive(Clone, Debug, PartialEq)]
pub struct SaddleConnection<T> {
    surface: SurfaceId,
    source: HalfEdge,
    target: HalfEdge,
    vector: Vector<T>,
    path: Vec<HalfEdgeIntersection<T>>,
    reverse_path: Vec<HalfEdgeIntersection<T>>,
}

impl<T: Scalar> SaddleConnection<T> {
    /// A connection that crosses no half-edge between `source` and `target`.
    pub fn new(surface: SurfaceId, source: HalfEdge, target: HalfEdge, vector: Vector<T>) -> Self {
        Self {
            surface,
            source,
            target,
            vector,
            path: Vec::new(),
            reverse_path: Vec::new(),
        }
    }

    /// Attach the crossings of this connection and of its reverse, both in
    /// the order they are met when walking the respective curve.
    pub fn with_crossings(
        mut self,
        path: Vec<HalfEdgeIntersection<T>>,
        reverse_path: Vec<HalfEdgeIntersection<T>>,
    ) -> Self {
        self.path = path;
        self.reverse_path = reverse_path;
        self
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The half-edge at the starting vertex whose sector contains this connection.
    pub fn source(&self) -> HalfEdge {
        self.source
    }

    /// The half-edge at the final vertex whose sector contains the reversed connection.
    pub fn target(&self) -> HalfEdge {
        self.target
    }

    pub fn vector(&self) -> &Vector<T> {
        &self.vector
    }

    pub fn path(&self) -> &[HalfEdgeIntersection<T>] {
        &self.path
    }

    /// The path of [`Self::reversed`], i.e., walked from `target` to `source`.
    pub fn reverse_path(&self) -> &[HalfEdgeIntersection<T>] {
        &self.reverse_path
    }

    /// The same curve with opposite orientation.
    pub fn reversed(&self) -> Self {
        Self {
            surface: self.surface,
            source: self.target,
            target: self.source,
            vector: -&self.vector,
            path: self.reverse_path.clone(),
            reverse_path: self.path.clone(),
        }
    }
}

/// A sequence of saddle connections, e.g., the image of a curve under a deformation.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<T> {
    connections: Vec<SaddleConnection<T>>,
}

impl<T: Scalar> Path<T> {
    pub fn new(connections: Vec<SaddleConnection<T>>) -> Self {
        Self { connections }
    }

    pub fn connections(&self) -> &[SaddleConnection<T>] {
        &self.connections
    }

    pub fn into_connections(self) -> Vec<SaddleConnection<T>> {
        self.connections
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Total holonomy of the path.
    pub fn vector(&self) -> Vector<T> {
        self.connections
            .iter()
            .fold(Vector::zero(), |acc, c| acc + c.vector())
    }
}

impl<T: Scalar> From<SaddleConnection<T>> for Path<T> {
    fn from(connection: SaddleConnection<T>) -> Self {
        Path::new(vec![connection])
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a SaddleConnection<T>;
    type IntoIter = std::slice::Iter<'a, SaddleConnection<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.iter()
    }
}
