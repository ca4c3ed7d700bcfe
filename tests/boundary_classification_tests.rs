mod util;
use flatsurf_region::prelude::*;
use util::*;

fn touches(encoded: &EncodedComponent) -> Vec<Vec<(i64, usize)>> {
    encoded
        .perimeter
        .iter()
        .map(|s| s.touches.iter().map(|t| (t.half_edge.id(), t.index)).collect())
        .collect()
}

#[test]
fn lower_and_upper_cylinders_split_the_torus() {
    let surface = two_cylinder_torus::<i64>();

    let lower = FlowComponent::new(curves(&surface, &[1, 3, -2, -3], true), true);
    let upper = FlowComponent::new(curves(&surface, &[2, 4, -1, -4], true), true);
    let encoded = encode_flow_decomposition(
        &surface,
        &FlowDecomposition::new(vec![lower, upper]),
        None,
        &EncodeOptions::default(),
    )
    .unwrap();

    assert_eq!(ids(&encoded[0].inside), vec![1, -2, 3, -3, 5, -5]);
    assert_eq!(ids(&encoded[1].inside), vec![-1, 2, 4, -4, 6, -6]);
}

/// The lower cylinder bounded by its bottom, a slope 1/2 connection wrapping
/// once around, its top, and that connection reversed.
fn slanted_cylinder(surface: &FlatTriangulation<f64>) -> FlowComponent<f64> {
    let gamma = SaddleConnection::new(surface.id(), he(1), he(-2), Vector::new(2.0, 1.0))
        .with_crossings(
            vec![HalfEdgeIntersection::new(he(3), 0.5)],
            vec![HalfEdgeIntersection::new(he(-3), 0.5)],
        );
    FlowComponent::new(
        vec![
            PerimeterCurve::new(along(surface, 1), false, true),
            PerimeterCurve::new(gamma.clone(), false, true),
            PerimeterCurve::new(along(surface, -2), false, true),
            PerimeterCurve::new(gamma.reversed(), false, true),
        ],
        true,
    )
}

#[test]
fn crossings_decide_their_half_edges() {
    let surface = two_cylinder_torus::<f64>();
    let component = slanted_cylinder(&surface);
    let curves: Vec<_> = component.perimeter().iter().collect();
    let events = EventIndex::build(&surface, &curves, &PullbackResolver::new(None)).unwrap();
    let labels = classify_region(&surface, &events, EmptyPerimeterHandling::Error).unwrap();

    let expected = [
        (1, true),
        (-1, false),
        (2, false),
        (-2, true),
        (3, true),
        (-3, true),
        (4, false),
        (-4, false),
        (5, true),
        (-5, true),
        (6, false),
        (-6, false),
    ];
    for (id, value) in expected {
        assert_eq!(labels.start(he(id)), Ok(value), "start of {id}");
        assert_eq!(labels.end(he(id)), Ok(value), "end of {id}");
    }
    assert!(events.has_crossing(he(3)));
    assert!(events.has_crossing(he(-3)));
}

#[test]
fn crossed_half_edges_are_not_interior() {
    let surface = two_cylinder_torus::<f64>();
    let encoded = encode(&surface, &slanted_cylinder(&surface)).unwrap();

    assert_eq!(ids(&encoded.inside), vec![1, -2, 5, -5]);
    assert_eq!(
        touches(&encoded),
        vec![
            vec![(1, 2), (-1, 0)],
            vec![(1, 0), (3, 1), (-3, 0), (-2, 1)],
            vec![(-2, 2), (2, 0)],
            vec![(-2, 0), (-3, 1), (3, 0), (1, 1)],
        ]
    );
    assert_eq!(encoded.perimeter[1].connection.crossings.len(), 1);
    assert_eq!(encoded.perimeter[1].connection.crossings[0].half_edge, he(3));
    assert_eq!(encoded.perimeter[1].connection.crossings[0].at, 0.5);
}

#[test]
fn perimeter_flags_are_carried_over() {
    let surface = two_cylinder_torus::<i64>();
    let component = FlowComponent::new(
        vec![
            PerimeterCurve::new(along(&surface, 1), true, true),
            PerimeterCurve::new(along(&surface, 3), false, true),
            PerimeterCurve::new(along(&surface, -2), true, true),
            PerimeterCurve::new(along(&surface, -3), false, true),
        ],
        true,
    );
    let encoded = encode(&surface, &component).unwrap();
    let vertical: Vec<_> = encoded.perimeter.iter().map(|s| s.vertical).collect();
    assert_eq!(vertical, vec![true, false, true, false]);
    assert!(encoded.perimeter.iter().all(|s| s.boundary));
}

/// The lower cylinder cut along a connection from the bottom-right corner
/// to the top-left one, crossing the diagonal, in place of the vertical edge.
fn diagonal_cut_cylinder(surface: &FlatTriangulation<f64>) -> FlowComponent<f64> {
    let delta = SaddleConnection::new(surface.id(), he(3), he(-3), Vector::new(-1.0, 1.0))
        .with_crossings(
            vec![HalfEdgeIntersection::new(he(-5), 0.5)],
            vec![HalfEdgeIntersection::new(he(5), 0.5)],
        );
    FlowComponent::new(
        vec![
            PerimeterCurve::new(along(surface, 1), false, true),
            PerimeterCurve::new(delta.clone(), false, true),
            PerimeterCurve::new(along(surface, -2), false, true),
            PerimeterCurve::new(delta.reversed(), false, true),
        ],
        true,
    )
}

#[test]
fn touchings_off_the_half_edge_decide_by_the_nearest_one() {
    let surface = two_cylinder_torus::<f64>();
    let component = diagonal_cut_cylinder(&surface);
    let curves: Vec<_> = component.perimeter().iter().collect();
    let events = EventIndex::build(&surface, &curves, &PullbackResolver::new(None)).unwrap();

    for id in [3, -3] {
        let direction = surface.from_half_edge(he(id)).unwrap();
        let here = events.events(he(id));
        assert_eq!(here.len(), 2, "events at {id}");
        for event in here {
            match event {
                Event::Touching { vector, .. } => assert_ne!(vector, &direction),
                Event::Crossing { .. } => panic!("{id} should only be touched"),
            }
        }
        // The step entering the corner is the one nearest the half-edge.
        assert!(here[0].out());
        assert!(!here[1].out());
    }

    let labels = classify_region(&surface, &events, EmptyPerimeterHandling::Error).unwrap();
    for id in [3, -3] {
        assert_eq!(labels.start(he(id)), Ok(true), "start of {id}");
        assert_eq!(labels.end(he(id)), Ok(true), "end of {id}");
    }

    let encoded = encode(&surface, &component).unwrap();
    assert_eq!(ids(&encoded.inside), vec![1, -2, 3, -3]);
    assert_eq!(
        touches(&encoded)[1],
        vec![(3, 0), (-5, 1), (5, 0), (-3, 1)]
    );
}

#[test]
fn touchings_along_the_half_edge_must_match_exactly() {
    let surface = two_cylinder_torus::<f64>();
    let nearly_vertical = SaddleConnection::new(
        surface.id(),
        he(3),
        he(-3),
        Vector::new(0.0, 1.0 + 1e-12),
    );
    let component = FlowComponent::new(
        vec![
            PerimeterCurve::new(along(&surface, 1), false, true),
            PerimeterCurve::new(nearly_vertical, false, true),
            PerimeterCurve::new(along(&surface, -2), false, true),
            PerimeterCurve::new(along(&surface, -3), false, true),
        ],
        true,
    );
    let curves: Vec<_> = component.perimeter().iter().collect();
    let events = EventIndex::build(&surface, &curves, &PullbackResolver::new(None)).unwrap();
    let labels = classify_region(&surface, &events, EmptyPerimeterHandling::Error).unwrap();

    assert_eq!(labels.start(he(3)), Ok(false));
    assert_eq!(labels.end(he(3)), Ok(false));
    assert_eq!(labels.start(he(-3)), Ok(true));

    let encoded = encode(&surface, &component).unwrap();
    assert_eq!(ids(&encoded.inside), vec![1, -2, -3, 5, -5]);
}
