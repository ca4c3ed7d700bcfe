//! Turning events and labels into the encoded component.

use std::collections::HashMap;

use itertools::Itertools;

use crate::algs::classify::RegionClassification;
use crate::algs::events::{EventIndex, StepId};
use crate::encoding::component::{EncodedComponent, EncodedPerimeterStep, EncodedTouch};
use crate::encoding::connection::encode_saddle_connection;
use crate::region_error::RegionError;
use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::Surface;

/// Collect the interior half-edges and the perimeter steps with their touches.
///
/// A half-edge is interior when both of its endpoints are in the region and no
/// perimeter step crosses it. Touches of a step are listed in the order the
/// step meets the triangulation; `index` is the position of the event in the
/// sorted list of its half-edge.
pub fn assemble<S>(
    surface: &S,
    events: &EventIndex<S::Scalar>,
    classification: &RegionClassification,
    cylinder: bool,
) -> Result<EncodedComponent, RegionError>
where
    S: Surface,
{
    let mut inside = Vec::new();
    let mut touches: HashMap<StepId, Vec<(usize, HalfEdge, usize)>> = HashMap::new();
    for h in surface.half_edges() {
        if classification.is_inside(h)? && !events.has_crossing(h) {
            inside.push(h);
        }
        for (index, event) in events.events(h).iter().enumerate() {
            touches
                .entry(event.step())
                .or_default()
                .push((event.n(), h, index));
        }
    }

    let perimeter = events
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| EncodedPerimeterStep {
            connection: encode_saddle_connection(step.connection()),
            vertical: step.vertical(),
            boundary: step.boundary(),
            touches: touches
                .remove(&StepId(i))
                .unwrap_or_default()
                .into_iter()
                .sorted_by_key(|&(n, _, _)| n)
                .map(|(_, half_edge, index)| EncodedTouch { half_edge, index })
                .collect(),
        })
        .collect_vec();

    log::debug!(
        "assembled component on surface {}: {} perimeter steps, {} interior half edges",
        surface.id(),
        perimeter.len(),
        inside.len()
    );
    Ok(EncodedComponent {
        cylinder,
        perimeter,
        inside,
    })
}
