//! In-memory triangulated translation surface.
//!
//! A [`FlatTriangulation`] is built from its faces, each given as three
//! half-edge ids in counterclockwise order, and from one vector per edge
//! (the vector of the positive half-edge; `-h` carries the negated vector).
//! Half-edges are enumerated `1, -1, 2, -2, …`. Rotations around vertices are
//! derived from the faces:
//!
//! - `next_at_vertex(h) = -previous_in_face(h)`
//! - `previous_at_vertex(h) = next_in_face(-h)`
//!
//! Vertices are numbered in order of first appearance in that enumeration and
//! each vertex cycle starts with its first half-edge.

use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::region_error::RegionError;
use crate::topology::connection::SaddleConnection;
use crate::topology::half_edge::{HalfEdge, Vertex};
use crate::topology::surface::{Surface, SurfaceId};
use crate::topology::validation::validate_surface;
use crate::topology::vector::{Ccw, DEFAULT_TOLERANCE, Scalar, Vector};

/// Triangulated flat surface with explicit face and vertex tables.
#[derive(Clone, Debug)]
pub struct FlatTriangulation<T> {
    id: SurfaceId,
    /// Vector of half-edge `i + 1`.
    vectors: Vec<Vector<T>>,
    /// `1, -1, 2, -2, …`; position in this list is the slot of a half-edge.
    order: Vec<HalfEdge>,
    next_in_face: Vec<HalfEdge>,
    previous_in_face: Vec<HalfEdge>,
    vertex_of: Vec<Vertex>,
    vertices: Vec<Vec<HalfEdge>>,
}

fn slot(edges: usize, h: HalfEdge) -> Result<usize, RegionError> {
    let edge = usize::try_from(h.edge()).map_err(|_| RegionError::UnknownHalfEdge(h))?;
    if edge == 0 || edge > edges {
        return Err(RegionError::UnknownHalfEdge(h));
    }
    Ok(2 * (edge - 1) + usize::from(!h.is_positive()))
}

impl<T: Scalar> FlatTriangulation<T> {
    /// Glue triangles into a surface.
    ///
    /// `vectors[i]` is the vector of half-edge `i + 1`. Fails with
    /// [`RegionError::MalformedSurface`] unless every half-edge occurs in
    /// exactly one face and every face closes up counterclockwise.
    pub fn from_faces(faces: &[[i64; 3]], vectors: Vec<Vector<T>>) -> Result<Self, RegionError> {
        let edges = vectors.len();
        if 2 * edges != 3 * faces.len() {
            return Err(RegionError::MalformedSurface(format!(
                "{} faces cannot be glued from {} edges",
                faces.len(),
                edges
            )));
        }

        let mut order = Vec::with_capacity(2 * edges);
        for edge in 1..=edges {
            let id = i64::try_from(edge).map_err(|_| {
                RegionError::MalformedSurface(format!("too many edges: {edges}"))
            })?;
            order.push(HalfEdge::new(id)?);
            order.push(HalfEdge::new(-id)?);
        }

        let vector_of = |h: HalfEdge| -> Result<Vector<T>, RegionError> {
            let v = vectors[slot(edges, h)? / 2].clone();
            Ok(if h.is_positive() { v } else { -v })
        };

        let mut next: Vec<Option<HalfEdge>> = vec![None; 2 * edges];
        let mut previous: Vec<Option<HalfEdge>> = vec![None; 2 * edges];
        for (f, face) in faces.iter().enumerate() {
            let mut sides = Vec::with_capacity(3);
            for &id in face {
                sides.push(HalfEdge::new(id)?);
            }
            for i in 0..3 {
                let (h, n) = (sides[i], sides[(i + 1) % 3]);
                let s = slot(edges, h)?;
                if next[s].is_some() {
                    return Err(RegionError::MalformedSurface(format!(
                        "half edge {h} appears in more than one face"
                    )));
                }
                next[s] = Some(n);
                previous[slot(edges, n)?] = Some(h);
            }

            let sides = sides
                .into_iter()
                .map(&vector_of)
                .collect::<Result<Vec<_>, _>>()?;
            let sum: Vector<T> = sides.iter().cloned().sum();
            if !sum.approx_eq(&Vector::zero(), DEFAULT_TOLERANCE) {
                return Err(RegionError::MalformedSurface(format!(
                    "face {f} does not close up"
                )));
            }
            if sides[0].ccw(&sides[1]) != Ccw::Counterclockwise {
                return Err(RegionError::MalformedSurface(format!(
                    "face {f} is not oriented counterclockwise"
                )));
            }
        }

        let next_in_face: Vec<HalfEdge> = next.into_iter().collect::<Option<_>>().ok_or_else(|| {
            RegionError::MalformedSurface("some half edge is not part of any face".to_string())
        })?;
        let previous_in_face: Vec<HalfEdge> =
            previous.into_iter().collect::<Option<_>>().ok_or_else(|| {
                RegionError::MalformedSurface("some half edge is not part of any face".to_string())
            })?;

        // next_at_vertex is a permutation, so following it from any
        // half-edge comes back to the start before touching another cycle.
        let mut vertex_of: Vec<Option<Vertex>> = vec![None; 2 * edges];
        let mut vertices = Vec::new();
        for &start in &order {
            if vertex_of[slot(edges, start)?].is_some() {
                continue;
            }
            let vertex = Vertex(vertices.len());
            let mut cycle = Vec::new();
            let mut h = start;
            loop {
                vertex_of[slot(edges, h)?] = Some(vertex);
                cycle.push(h);
                h = -previous_in_face[slot(edges, h)?];
                if h == start {
                    break;
                }
            }
            vertices.push(cycle);
        }
        let vertex_of = vertex_of.into_iter().flatten().collect();

        let triangulation = Self {
            id: SurfaceId::fresh(),
            vectors,
            order,
            next_in_face,
            previous_in_face,
            vertex_of,
            vertices,
        };
        log::debug!(
            "glued surface {} from {} faces: {} vertices",
            triangulation.id,
            faces.len(),
            triangulation.vertices.len()
        );
        debug_invariants!(
            triangulation.validate_invariants(),
            "FlatTriangulation::from_faces"
        );
        Ok(triangulation)
    }

    fn slot(&self, h: HalfEdge) -> Result<usize, RegionError> {
        slot(self.vectors.len(), h)
    }

    pub fn next_in_face(&self, h: HalfEdge) -> Result<HalfEdge, RegionError> {
        Ok(self.next_in_face[self.slot(h)?])
    }

    pub fn previous_in_face(&self, h: HalfEdge) -> Result<HalfEdge, RegionError> {
        Ok(self.previous_in_face[self.slot(h)?])
    }

    /// The source vertex of `h`.
    pub fn vertex(&self, h: HalfEdge) -> Result<Vertex, RegionError> {
        Ok(self.vertex_of[self.slot(h)?])
    }

    /// The saddle connection running along `h`, from its source to its target.
    pub fn connection_along(&self, h: HalfEdge) -> Result<SaddleConnection<T>, RegionError> {
        Ok(SaddleConnection::new(
            self.id,
            h,
            -h,
            self.from_half_edge(h)?,
        ))
    }
}

impl<T: Scalar> Surface for FlatTriangulation<T> {
    type Scalar = T;

    fn id(&self) -> SurfaceId {
        self.id
    }

    fn half_edges<'a>(&'a self) -> Box<dyn Iterator<Item = HalfEdge> + 'a> {
        Box::new(self.order.iter().copied())
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = Vertex> + 'a> {
        Box::new((0..self.vertices.len()).map(Vertex))
    }

    fn at_vertex(&self, vertex: Vertex) -> Result<Vec<HalfEdge>, RegionError> {
        self.vertices
            .get(vertex.0)
            .cloned()
            .ok_or(RegionError::UnknownVertex(vertex))
    }

    fn previous_at_vertex(&self, half_edge: HalfEdge) -> Result<HalfEdge, RegionError> {
        self.next_in_face(-half_edge)
    }

    fn next_at_vertex(&self, half_edge: HalfEdge) -> Result<HalfEdge, RegionError> {
        Ok(-self.previous_in_face(half_edge)?)
    }

    fn from_half_edge(&self, half_edge: HalfEdge) -> Result<Vector<T>, RegionError> {
        let v = &self.vectors[self.slot(half_edge)? / 2];
        Ok(if half_edge.is_positive() { v.clone() } else { -v })
    }
}

impl<T: Scalar> DebugInvariants for FlatTriangulation<T> {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "FlatTriangulation");
    }

    fn validate_invariants(&self) -> Result<(), RegionError> {
        for &h in &self.order {
            let next = self.next_in_face(h)?;
            if self.previous_in_face(next)? != h {
                return Err(RegionError::MalformedSurface(format!(
                    "face tables disagree at {h}"
                )));
            }
            if self.next_in_face(self.next_in_face(next)?)? != h {
                return Err(RegionError::MalformedSurface(format!(
                    "face of {h} is not a triangle"
                )));
            }
            if self.vertex(self.next_at_vertex(h)?)? != self.vertex(h)? {
                return Err(RegionError::MalformedSurface(format!(
                    "rotation at {h} leaves its vertex"
                )));
            }
        }
        validate_surface(self)
    }
}
