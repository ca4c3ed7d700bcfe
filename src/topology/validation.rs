//! Surface validation helpers.
//!
//! These checks only use the [`Surface`] trait, so they apply to any
//! collaborator-provided surface before it is handed to the classification.

use std::collections::HashSet;

use crate::region_error::RegionError;
use crate::topology::surface::Surface;

/// Validate the combinatorial consistency of a surface.
///
/// Checks that
/// - every half-edge has its reverse in the surface,
/// - `next_at_vertex` and `previous_at_vertex` are inverse to each other and
///   stay within the surface,
/// - the vertex cycles list every half-edge exactly once and agree with the
///   rotations.
pub fn validate_surface<S: Surface>(surface: &S) -> Result<(), RegionError> {
    let half_edges: HashSet<_> = surface.half_edges().collect();

    for &h in &half_edges {
        if !half_edges.contains(&-h) {
            return Err(RegionError::MalformedSurface(format!(
                "half edge {h} has no reverse"
            )));
        }
        let next = surface.next_at_vertex(h)?;
        if !half_edges.contains(&next) {
            return Err(RegionError::UnknownHalfEdge(next));
        }
        if surface.previous_at_vertex(next)? != h {
            return Err(RegionError::MalformedSurface(format!(
                "previous_at_vertex does not invert next_at_vertex at {h}"
            )));
        }
    }

    let mut seen = HashSet::with_capacity(half_edges.len());
    for vertex in surface.vertices() {
        let cycle = surface.at_vertex(vertex)?;
        for (i, &h) in cycle.iter().enumerate() {
            if !seen.insert(h) {
                return Err(RegionError::MalformedSurface(format!(
                    "half edge {h} appears in more than one vertex cycle"
                )));
            }
            let expected = cycle[(i + 1) % cycle.len()];
            if surface.next_at_vertex(h)? != expected {
                return Err(RegionError::MalformedSurface(format!(
                    "vertex {vertex} does not list the rotation at {h}"
                )));
            }
        }
    }
    if seen.len() != half_edges.len() {
        log::warn!(
            "vertex cycles cover {} of {} half edges",
            seen.len(),
            half_edges.len()
        );
        return Err(RegionError::MalformedSurface(
            "vertex cycles do not cover every half edge".to_string(),
        ));
    }

    Ok(())
}
