//! Inside/outside labeling of half-edge endpoints.
//!
//! For every half-edge `h` the classification records whether the source
//! (`start`) and the target (`end`) of `h` lie in the region bounded by the
//! perimeter. Half-edges with events decide directly from their sorted event
//! list; all others inherit the label of a neighbor in the rotation around a
//! vertex (a flood fill through untouched wedges).

use std::collections::{HashMap, HashSet};

use crate::algs::events::{Event, EventIndex};
use crate::region_error::RegionError;
use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::Surface;

/// What to do with a component whose perimeter does not meet the
/// triangulation at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmptyPerimeterHandling {
    /// Treat the whole surface as the region.
    Inside,
    /// Like `Inside`, but emit a `log::warn!`.
    #[default]
    Warn,
    /// Fail with [`RegionError::EmptyPerimeter`].
    Error,
}

/// Per half-edge labels produced by [`classify_region`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionClassification {
    start: HashMap<HalfEdge, bool>,
    end: HashMap<HalfEdge, bool>,
}

impl RegionClassification {
    /// Whether the source of `half_edge` is in the region.
    pub fn start(&self, half_edge: HalfEdge) -> Result<bool, RegionError> {
        self.start
            .get(&half_edge)
            .copied()
            .ok_or(RegionError::UnresolvedHalfEdge(half_edge))
    }

    /// Whether the target of `half_edge` is in the region.
    pub fn end(&self, half_edge: HalfEdge) -> Result<bool, RegionError> {
        self.end
            .get(&half_edge)
            .copied()
            .ok_or(RegionError::UnresolvedHalfEdge(half_edge))
    }

    /// Both endpoints of `half_edge` are in the region.
    pub fn is_inside(&self, half_edge: HalfEdge) -> Result<bool, RegionError> {
        Ok(self.start(half_edge)? && self.end(half_edge)?)
    }

    fn set(&mut self, half_edge: HalfEdge, value: bool) {
        self.start.insert(half_edge, value);
        self.end.insert(half_edge, value);
    }
}

enum Work {
    Visit(HalfEdge),
    /// Continue the visit of a half-edge after the flood through `-next` returned.
    Resume { next: HalfEdge, value: bool },
}

/// Label the endpoints of every half-edge of `surface`.
pub fn classify_region<S>(
    surface: &S,
    events: &EventIndex<S::Scalar>,
    handling: EmptyPerimeterHandling,
) -> Result<RegionClassification, RegionError>
where
    S: Surface,
{
    let mut labels = RegionClassification {
        start: HashMap::new(),
        end: HashMap::new(),
    };

    if events.is_empty() {
        match handling {
            EmptyPerimeterHandling::Error => return Err(RegionError::EmptyPerimeter),
            EmptyPerimeterHandling::Warn => log::warn!(
                "perimeter does not meet surface {}, treating every half edge as inside",
                surface.id()
            ),
            EmptyPerimeterHandling::Inside => {}
        }
        for h in surface.half_edges() {
            labels.set(h, true);
        }
        return Ok(labels);
    }

    for h in surface.half_edges() {
        let here = events.events(h);
        if here.is_empty() {
            let previous = surface.previous_at_vertex(h)?;
            match events.events(previous).first() {
                Some(nearest) => {
                    labels.set(h, nearest.out());
                    labels.set(-h, nearest.out());
                }
                None => log::trace!("{h} has no events nearby, deferring"),
            }
            continue;
        }

        let mut crossings = here.iter().filter(|e| e.is_crossing());
        if let Some(first) = crossings.next() {
            let last = crossings.last().unwrap_or(first);
            labels.start.insert(h, first.out());
            labels.end.insert(h, !last.out());
            continue;
        }

        let direction = surface.from_half_edge(h)?;
        let along = here.iter().find_map(|e| match e {
            Event::Touching { vector, out, .. } if *vector == direction => Some(*out),
            _ => None,
        });
        let value = match (along, here.last()) {
            (Some(out), _) => out,
            (None, Some(nearest)) => !nearest.out(),
            (None, None) => continue,
        };
        labels.set(h, value);
    }

    flood(surface, &mut labels)?;

    for h in surface.half_edges() {
        if !labels.start.contains_key(&h) || !labels.end.contains_key(&h) {
            return Err(RegionError::UnresolvedHalfEdge(h));
        }
    }

    log::debug!(
        "classified {} half edges of surface {}, {} with both endpoints inside",
        labels.start.len(),
        surface.id(),
        labels.start.iter().filter(|&(h, &s)| s && labels.end.get(h) == Some(&true)).count()
    );
    Ok(labels)
}

/// Spread labels to unresolved half-edges around each vertex.
fn flood<S: Surface>(surface: &S, labels: &mut RegionClassification) -> Result<(), RegionError> {
    let mut visited = HashSet::new();
    let mut stack = Vec::new();

    for seed in surface.half_edges() {
        stack.push(Work::Visit(seed));
        while let Some(work) = stack.pop() {
            match work {
                Work::Visit(source) => {
                    let Some(&value) = labels.start.get(&source) else {
                        continue;
                    };
                    if !visited.insert(source) {
                        continue;
                    }
                    let next = surface.next_at_vertex(source)?;
                    if !labels.end.contains_key(&-next) {
                        labels.set(-next, value);
                        stack.push(Work::Resume { next, value });
                        stack.push(Work::Visit(-next));
                    }
                }
                Work::Resume { next, value } => {
                    if !labels.start.contains_key(&next) {
                        labels.set(next, value);
                        stack.push(Work::Visit(next));
                    }
                }
            }
        }
    }
    Ok(())
}
