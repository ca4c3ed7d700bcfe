mod util;
use flatsurf_region::prelude::*;
use flatsurf_region::topology::vector::Ccw;
use proptest::prelude::*;
use util::*;

/// Splits every connection of the domain into the given pieces on the codomain.
struct Splitting {
    domain: SurfaceId,
    codomain: SurfaceId,
    pieces: Vec<Vector<i64>>,
}

impl Deformation<i64> for Splitting {
    fn domain(&self) -> SurfaceId {
        self.domain
    }

    fn codomain(&self) -> SurfaceId {
        self.codomain
    }

    fn image(&self, path: &Path<i64>) -> Option<Path<i64>> {
        let mut image = Vec::new();
        for connection in path {
            for (i, piece) in self.pieces.iter().enumerate() {
                let source = if i == 0 { connection.source() } else { he(100) };
                let target = if i + 1 == self.pieces.len() { connection.target() } else { he(-100) };
                image.push(SaddleConnection::new(self.codomain, source, target, piece.clone()));
            }
        }
        Some(Path::new(image))
    }
}

fn vector() -> impl Strategy<Value = Vector<i64>> {
    (-50i64..50, -50i64..50).prop_map(|(x, y)| Vector::new(x, y))
}

fn inside_after<T: Scalar>(surface: &FlatTriangulation<T>, component: &FlowComponent<T>) -> Vec<i64> {
    ids(&encode(surface, component).unwrap().inside)
}

proptest! {
    #[test]
    fn ccw_is_antisymmetric(a in vector(), b in vector()) {
        prop_assert_eq!(a.ccw(&b), b.ccw(&a).reverse());
        prop_assert_eq!(a.ccw(&a), Ccw::Collinear);
    }

    #[test]
    fn pullback_accepts_exactly_conserving_splits(
        pieces in prop::collection::vec(vector(), 1..6),
        skew in -2i64..3,
    ) {
        let domain = SurfaceId::fresh();
        let total = pieces.iter().cloned().sum::<Vector<i64>>() + &Vector::new(skew, 0);
        let connection = SaddleConnection::new(domain, he(1), he(-1), total);
        let deformation = Splitting { domain, codomain: SurfaceId::fresh(), pieces: pieces.clone() };
        let resolver = PullbackResolver::new(Some(&deformation as &dyn Deformation<i64>));

        match resolver.pullback(&connection) {
            Ok(parts) => {
                prop_assert_eq!(skew, 0);
                prop_assert_eq!(parts.len(), pieces.len());
                prop_assert_eq!(parts[0].source(), he(1));
                prop_assert_eq!(parts[parts.len() - 1].target(), he(-1));
            }
            Err(err) => {
                prop_assert_ne!(skew, 0);
                prop_assert!(matches!(err, RegionError::InvariantViolation(_)));
            }
        }
    }

    #[test]
    fn square_torus_inside_ignores_perimeter_order(
        order in Just(vec![3i64, 1, -3, -1]).prop_shuffle()
    ) {
        let surface = square_torus();
        let component = FlowComponent::new(curves(&surface, &order, false), true);
        prop_assert_eq!(inside_after(&surface, &component), vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn cylinder_inside_ignores_perimeter_order(
        order in Just(vec![1i64, 3, -2, -3]).prop_shuffle()
    ) {
        let surface = two_cylinder_torus::<i64>();
        let component = FlowComponent::new(curves(&surface, &order, true), true);
        let encoded = encode(&surface, &component).unwrap();
        prop_assert_eq!(ids(&encoded.inside), vec![1, -2, 3, -3, 5, -5]);
        for step in &encoded.perimeter {
            prop_assert_eq!(step.touches.len(), 2);
        }
    }
}
