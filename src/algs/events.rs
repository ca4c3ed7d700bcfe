//! Touchings and crossings of perimeter curves with the triangulation.
//!
//! Every expanded perimeter connection ("step") meets the triangulation in a
//! sequence of events: it leaves a vertex (a touching filed under its source
//! half-edge), crosses the interior of some half-edges (pairs of crossings,
//! one on each side of the crossed edge) and arrives at a vertex (a touching
//! filed under its target half-edge).
//!
//! [`EventIndex`] collects these events per half-edge and sorts them into the
//! order in which the curves thread through the half-edge, walking from its
//! source to its target:
//!
//! - touchings come before crossings;
//! - touchings are ordered from the most counterclockwise to the most
//!   clockwise direction, so the last touching is the one closest to the
//!   half-edge;
//! - crossings are ordered by their position along the half-edge;
//! - remaining ties put the outgoing event first.
//!
//! Any further tie is a degenerate configuration and reported as
//! [`RegionError::AmbiguousOrdering`].

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::algs::pullback::PullbackResolver;
use crate::region_error::RegionError;
use crate::topology::component::PerimeterCurve;
use crate::topology::connection::{HalfEdgeIntersection, SaddleConnection};
use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::Surface;
use crate::topology::vector::{Ccw, Scalar, Vector};

/// Index of a step in [`EventIndex::steps`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub usize);

/// One expanded perimeter connection together with the flags of the curve it
/// came from.
#[derive(Clone, Debug)]
pub struct Step<T> {
    connection: SaddleConnection<T>,
    curve: usize,
    vertical: bool,
    boundary: bool,
}

impl<T: Scalar> Step<T> {
    pub fn connection(&self) -> &SaddleConnection<T> {
        &self.connection
    }

    /// Position of the originating curve in the perimeter the index was built from.
    pub fn curve(&self) -> usize {
        self.curve
    }

    pub fn vertical(&self) -> bool {
        self.vertical
    }

    pub fn boundary(&self) -> bool {
        self.boundary
    }
}

/// The moment a perimeter step hits a half-edge.
#[derive(Clone, Debug, PartialEq)]
pub enum Event<T> {
    /// The step starts (`out`) or ends at the source vertex of the half-edge.
    /// `vector` points from that vertex along the step.
    Touching {
        n: usize,
        step: StepId,
        vector: Vector<T>,
        out: bool,
    },
    /// The step passes through the interior of the half-edge.
    Crossing {
        n: usize,
        step: StepId,
        intersection: HalfEdgeIntersection<T>,
        out: bool,
    },
}

/// Puts the outgoing event first.
fn out_first(a: bool, b: bool) -> Option<Ordering> {
    match (a, b) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        _ => None,
    }
}

impl<T: Scalar> Event<T> {
    /// 1-based position of this event along its step.
    pub fn n(&self) -> usize {
        match self {
            Event::Touching { n, .. } | Event::Crossing { n, .. } => *n,
        }
    }

    pub fn step(&self) -> StepId {
        match self {
            Event::Touching { step, .. } | Event::Crossing { step, .. } => *step,
        }
    }

    /// Whether the step leaves through this event.
    pub fn out(&self) -> bool {
        match self {
            Event::Touching { out, .. } | Event::Crossing { out, .. } => *out,
        }
    }

    pub fn is_crossing(&self) -> bool {
        matches!(self, Event::Crossing { .. })
    }

    /// Order of two events on the same half-edge, `None` if they cannot be told apart.
    pub fn compare_along(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Event::Touching { .. }, Event::Crossing { .. }) => Some(Ordering::Less),
            (Event::Crossing { .. }, Event::Touching { .. }) => Some(Ordering::Greater),
            (
                Event::Touching {
                    vector: a, out: a_out, ..
                },
                Event::Touching {
                    vector: b, out: b_out, ..
                },
            ) => match a.ccw(b) {
                Ccw::Clockwise => Some(Ordering::Less),
                Ccw::Counterclockwise => Some(Ordering::Greater),
                Ccw::Collinear => out_first(*a_out, *b_out),
            },
            (
                Event::Crossing {
                    intersection: a,
                    out: a_out,
                    ..
                },
                Event::Crossing {
                    intersection: b,
                    out: b_out,
                    ..
                },
            ) => match a.at().partial_cmp(b.at())? {
                Ordering::Equal => out_first(*a_out, *b_out),
                unequal => Some(unequal),
            },
        }
    }
}

/// Sort `events` along `half_edge`, failing on the first tie.
fn sort_along<T: Scalar>(half_edge: HalfEdge, events: &mut [Event<T>]) -> Result<(), RegionError> {
    let mut ambiguous = None;
    events.sort_by(|a, b| {
        a.compare_along(b).unwrap_or_else(|| {
            if ambiguous.is_none() {
                ambiguous = Some((a.n(), b.n()));
            }
            Ordering::Equal
        })
    });
    match ambiguous {
        Some((first, second)) => Err(RegionError::AmbiguousOrdering {
            half_edge,
            first,
            second,
        }),
        None => Ok(()),
    }
}

/// Per half-edge, the sorted events of all perimeter steps.
#[derive(Clone, Debug)]
pub struct EventIndex<T> {
    steps: Vec<Step<T>>,
    events: HashMap<HalfEdge, Vec<Event<T>>>,
}

impl<T: Scalar> EventIndex<T> {
    /// Expand `curves` through `resolver` and collect their events on `surface`.
    pub fn build<S>(
        surface: &S,
        curves: &[&PerimeterCurve<T>],
        resolver: &PullbackResolver<'_, T>,
    ) -> Result<Self, RegionError>
    where
        S: Surface<Scalar = T>,
    {
        let mut events: HashMap<HalfEdge, Vec<Event<T>>> =
            surface.half_edges().map(|h| (h, Vec::new())).collect();
        let mut steps = Vec::new();

        let mut file = |h: HalfEdge, event: Event<T>| -> Result<(), RegionError> {
            events
                .get_mut(&h)
                .ok_or(RegionError::UnknownHalfEdge(h))?
                .push(event);
            Ok(())
        };

        for (curve_index, curve) in curves.iter().enumerate() {
            for connection in resolver.pullback(curve.saddle_connection())? {
                if connection.surface() != surface.id() {
                    return Err(RegionError::DomainMismatch {
                        expected: surface.id(),
                        found: connection.surface(),
                    });
                }

                let step = StepId(steps.len());
                let mut n = 1;
                file(
                    connection.source(),
                    Event::Touching {
                        n,
                        step,
                        vector: connection.vector().clone(),
                        out: true,
                    },
                )?;

                let path = connection.path();
                let reverse = connection.reverse_path();
                if path.len() != reverse.len() {
                    return Err(RegionError::PathAsymmetry {
                        from: connection.source(),
                        to: connection.target(),
                        reason: format!(
                            "{} crossings but {} on the reverse",
                            path.len(),
                            reverse.len()
                        ),
                    });
                }
                for (entering, leaving) in path.iter().zip(reverse.iter().rev()) {
                    if entering.half_edge() != -leaving.half_edge() {
                        return Err(RegionError::PathAsymmetry {
                            from: connection.source(),
                            to: connection.target(),
                            reason: format!(
                                "crossing of {} is mirrored by a crossing of {}",
                                entering.half_edge(),
                                leaving.half_edge()
                            ),
                        });
                    }
                    n += 1;
                    file(
                        entering.half_edge(),
                        Event::Crossing {
                            n,
                            step,
                            intersection: entering.clone(),
                            out: false,
                        },
                    )?;
                    n += 1;
                    file(
                        leaving.half_edge(),
                        Event::Crossing {
                            n,
                            step,
                            intersection: leaving.clone(),
                            out: true,
                        },
                    )?;
                }

                n += 1;
                file(
                    connection.target(),
                    Event::Touching {
                        n,
                        step,
                        vector: -connection.vector(),
                        out: false,
                    },
                )?;

                steps.push(Step {
                    connection,
                    curve: curve_index,
                    vertical: curve.vertical(),
                    boundary: curve.boundary(),
                });
            }
        }

        for h in surface.half_edges() {
            if let Some(list) = events.get_mut(&h) {
                sort_along(h, list)?;
            }
        }

        let index = Self { steps, events };
        log::debug!(
            "indexed {} events of {} steps from {} perimeter curves",
            index.events.values().map(Vec::len).sum::<usize>(),
            index.steps.len(),
            curves.len()
        );
        index.debug_assert_invariants();
        Ok(index)
    }

    /// All steps, grouped by curve in perimeter order.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn step(&self, id: StepId) -> Option<&Step<T>> {
        self.steps.get(id.0)
    }

    /// Sorted events at `half_edge`; empty for half-edges without events.
    pub fn events(&self, half_edge: HalfEdge) -> &[Event<T>] {
        self.events.get(&half_edge).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_crossing(&self, half_edge: HalfEdge) -> bool {
        self.events(half_edge).iter().any(Event::is_crossing)
    }

    /// Whether no step touches the triangulation at all.
    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }
}

impl<T: Scalar> DebugInvariants for EventIndex<T> {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "EventIndex");
    }

    /// Every step numbers its events `1..=k` with `k` even, and crossings
    /// alternate between entering (even `n`) and leaving (odd `n`).
    fn validate_invariants(&self) -> Result<(), RegionError> {
        let mut numbers: Vec<Vec<usize>> = vec![Vec::new(); self.steps.len()];
        for (&h, list) in &self.events {
            for event in list {
                let slot = numbers
                    .get_mut(event.step().0)
                    .ok_or_else(|| {
                        RegionError::InvariantViolation(format!(
                            "event at {h} refers to unknown step {}",
                            event.step().0
                        ))
                    })?;
                slot.push(event.n());
                if event.is_crossing() && event.out() != (event.n() % 2 == 1) {
                    return Err(RegionError::InvariantViolation(format!(
                        "crossing #{} at {h} has the wrong direction",
                        event.n()
                    )));
                }
            }
        }
        for (i, mut ns) in numbers.into_iter().enumerate() {
            ns.sort_unstable();
            let contiguous = ns.iter().copied().eq(1..=ns.len());
            if !contiguous || ns.len() % 2 != 0 {
                return Err(RegionError::InvariantViolation(format!(
                    "events of step {i} are numbered {ns:?}"
                )));
            }
        }
        Ok(())
    }
}
