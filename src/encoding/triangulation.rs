//! JSON-ready view of a triangulated surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::encoding::connection::EncodedVector;
use crate::region_error::RegionError;
use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::Surface;

/// Vertex cycles and the vectors of the positive half-edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedTriangulation {
    pub vertices: Vec<Vec<HalfEdge>>,
    pub vectors: BTreeMap<HalfEdge, EncodedVector>,
}

pub fn encode_flat_triangulation<S: Surface>(surface: &S) -> Result<EncodedTriangulation, RegionError> {
    let vertices = surface
        .vertices()
        .map(|v| surface.at_vertex(v))
        .collect::<Result<Vec<_>, _>>()?;
    let mut vectors = BTreeMap::new();
    for h in surface.half_edges().filter(|h| h.is_positive()) {
        vectors.insert(h, EncodedVector::from(&surface.from_half_edge(h)?));
    }
    Ok(EncodedTriangulation { vertices, vectors })
}
