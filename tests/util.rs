#![allow(dead_code)]
use std::collections::HashMap;

use flatsurf_region::prelude::*;

pub fn he(id: i64) -> HalfEdge {
    HalfEdge::new(id).unwrap()
}

pub fn ids(hs: &[HalfEdge]) -> Vec<i64> {
    hs.iter().map(|h| h.id()).collect()
}

fn v<T: Scalar + From<i32>>(x: i32, y: i32) -> Vector<T> {
    Vector::new(T::from(x), T::from(y))
}

/// The unit square glued to a torus along one diagonal: a single vertex.
pub fn square_torus() -> FlatTriangulation<i64> {
    FlatTriangulation::from_faces(
        &[[1, 2, 3], [-1, -2, -3]],
        vec![v(1, 1), v(-1, 0), v(0, -1)],
    )
    .unwrap()
}

/// The square torus scaled by two.
pub fn doubled_square_torus() -> FlatTriangulation<i64> {
    FlatTriangulation::from_faces(
        &[[1, 2, 3], [-1, -2, -3]],
        vec![v(2, 2), v(-2, 0), v(0, -2)],
    )
    .unwrap()
}

/// A 1×2 torus with marked points P (bottom) and Q (middle), i.e., two stacked
/// horizontal cylinders: 1 and 2 are horizontal, 3 and 4 vertical, 5 and 6
/// diagonals of the lower and upper square.
pub fn two_cylinder_torus<T: Scalar + From<i32>>() -> FlatTriangulation<T> {
    FlatTriangulation::from_faces(
        &[[1, 3, -5], [5, -2, -3], [2, 4, -6], [6, -1, -4]],
        vec![v(1, 0), v(1, 0), v(0, 1), v(0, 1), v(1, 1), v(1, 1)],
    )
    .unwrap()
}

/// The doubled square torus with its center M marked.
pub fn marked_torus() -> FlatTriangulation<i64> {
    FlatTriangulation::from_faces(
        &[[1, 3, 4], [2, 5, -3], [-1, 6, -5], [-2, -4, -6]],
        vec![v(2, 0), v(0, 2), v(-1, 1), v(-1, -1), v(-1, -1), v(1, -1)],
    )
    .unwrap()
}

/// Two square tori in one triangulation.
pub fn two_tori() -> FlatTriangulation<i64> {
    FlatTriangulation::from_faces(
        &[[1, 2, 3], [-1, -2, -3], [4, 5, 6], [-4, -5, -6]],
        vec![v(1, 1), v(-1, 0), v(0, -1), v(1, 1), v(-1, 0), v(0, -1)],
    )
    .unwrap()
}

pub fn along<T: Scalar>(surface: &FlatTriangulation<T>, id: i64) -> SaddleConnection<T> {
    surface.connection_along(he(id)).unwrap()
}

pub fn curves<T: Scalar>(surface: &FlatTriangulation<T>, ids: &[i64], boundary: bool) -> Vec<PerimeterCurve<T>> {
    ids.iter()
        .map(|&id| PerimeterCurve::new(along(surface, id), false, boundary))
        .collect()
}

/// A deformation given by the images of single connections, keyed by source.
pub struct TableDeformation<T> {
    pub domain: SurfaceId,
    pub codomain: SurfaceId,
    pub table: HashMap<HalfEdge, Vec<SaddleConnection<T>>>,
}

impl<T: Scalar> Deformation<T> for TableDeformation<T> {
    fn domain(&self) -> SurfaceId {
        self.domain
    }

    fn codomain(&self) -> SurfaceId {
        self.codomain
    }

    fn image(&self, path: &Path<T>) -> Option<Path<T>> {
        let mut image = Vec::new();
        for connection in path {
            image.extend(self.table.get(&connection.source())?.iter().cloned());
        }
        Some(Path::new(image))
    }
}

/// Carries the sides and the diagonal of [`doubled_square_torus`] over to
/// [`marked_torus`]; the diagonal splits at the marked point.
pub fn mark_center(
    domain: &FlatTriangulation<i64>,
    codomain: &FlatTriangulation<i64>,
) -> TableDeformation<i64> {
    let table = HashMap::from([
        (he(3), vec![along(codomain, -2)]),
        (he(1), vec![along(codomain, -4), along(codomain, -5)]),
        (he(-3), vec![along(codomain, 2)]),
        (he(-1), vec![along(codomain, 5), along(codomain, 4)]),
    ]);
    TableDeformation {
        domain: domain.id(),
        codomain: codomain.id(),
        table,
    }
}

pub fn encode<T: Scalar>(
    surface: &FlatTriangulation<T>,
    component: &FlowComponent<T>,
) -> Result<EncodedComponent, RegionError> {
    encode_flow_component(surface, component, None, &EncodeOptions::default())
}
