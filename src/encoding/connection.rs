//! JSON-ready views of vectors, saddle connections and paths.

use serde::{Deserialize, Serialize};

use crate::topology::connection::{HalfEdgeIntersection, Path, SaddleConnection};
use crate::topology::half_edge::HalfEdge;
use crate::topology::vector::{Scalar, Vector};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedVector {
    pub x: f64,
    pub y: f64,
}

impl<T: Scalar> From<&Vector<T>> for EncodedVector {
    fn from(vector: &Vector<T>) -> Self {
        let (x, y) = vector.to_f64();
        Self { x, y }
    }
}

/// Where a connection crosses the interior of a half-edge.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedCrossing {
    pub half_edge: HalfEdge,
    pub at: f64,
}

impl<T: Scalar> From<&HalfEdgeIntersection<T>> for EncodedCrossing {
    fn from(intersection: &HalfEdgeIntersection<T>) -> Self {
        Self {
            half_edge: intersection.half_edge(),
            at: intersection.at().to_f64().unwrap_or(f64::NAN),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedSaddleConnection {
    pub source: HalfEdge,
    pub target: HalfEdge,
    pub vector: EncodedVector,
    pub crossings: Vec<EncodedCrossing>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedPath {
    pub connections: Vec<EncodedSaddleConnection>,
}

pub fn encode_saddle_connection<T: Scalar>(connection: &SaddleConnection<T>) -> EncodedSaddleConnection {
    EncodedSaddleConnection {
        source: connection.source(),
        target: connection.target(),
        vector: connection.vector().into(),
        crossings: connection.path().iter().map(EncodedCrossing::from).collect(),
    }
}

pub fn encode_path<T: Scalar>(path: &Path<T>) -> EncodedPath {
    EncodedPath {
        connections: path.into_iter().map(encode_saddle_connection).collect(),
    }
}
