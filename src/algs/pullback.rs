//! Pulling curves back through a deformation.
//!
//! When a flow decomposition was computed on a deformed surface (e.g., after
//! eliminating marked points), its perimeter has to be drawn on the undeformed
//! surface. A [`Deformation`] maps paths of its domain to paths of its
//! codomain; [`PullbackResolver`] applies it to single saddle connections and
//! checks that the total holonomy is preserved.

use crate::region_error::RegionError;
use crate::topology::connection::{Path, SaddleConnection};
use crate::topology::surface::SurfaceId;
use crate::topology::vector::{DEFAULT_TOLERANCE, Scalar};

/// A map between two surfaces that transports paths.
pub trait Deformation<T> {
    /// Surface whose paths this deformation accepts.
    fn domain(&self) -> SurfaceId;
    /// Surface the images live on.
    fn codomain(&self) -> SurfaceId;
    /// The image of `path`, `None` where the deformation is undefined.
    fn image(&self, path: &Path<T>) -> Option<Path<T>>;
}

/// Expands perimeter connections into connections of the surface the
/// classification runs on.
#[derive(Clone)]
pub struct PullbackResolver<'a, T> {
    deformation: Option<&'a dyn Deformation<T>>,
    tolerance: f64,
}

impl<'a, T: Scalar> PullbackResolver<'a, T> {
    pub fn new(deformation: Option<&'a dyn Deformation<T>>) -> Self {
        Self {
            deformation,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Relative tolerance of the holonomy check for floating point scalars.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The surface the expanded connections live on, `None` when there is no
    /// deformation and connections are taken as they are.
    pub fn codomain(&self) -> Option<SurfaceId> {
        self.deformation.map(|d| d.codomain())
    }

    /// The connections making up `connection` before the deformation.
    ///
    /// Order matters: it defines the numbering of events downstream.
    pub fn pullback(
        &self,
        connection: &SaddleConnection<T>,
    ) -> Result<Vec<SaddleConnection<T>>, RegionError> {
        let Some(deformation) = self.deformation else {
            return Ok(vec![connection.clone()]);
        };

        if connection.surface() != deformation.domain() {
            return Err(RegionError::DomainMismatch {
                expected: deformation.domain(),
                found: connection.surface(),
            });
        }

        let image = deformation
            .image(&Path::from(connection.clone()))
            .ok_or(RegionError::UndefinedImage(connection.source()))?;

        if let Some(stray) = image
            .connections()
            .iter()
            .find(|c| c.surface() != deformation.codomain())
        {
            return Err(RegionError::DomainMismatch {
                expected: deformation.codomain(),
                found: stray.surface(),
            });
        }

        let vector = image.vector();
        if !vector.approx_eq(connection.vector(), self.tolerance) {
            return Err(RegionError::InvariantViolation(format!(
                "pullback of the connection from {} to {} has holonomy {:?} instead of {:?}",
                connection.source(),
                connection.target(),
                vector,
                connection.vector()
            )));
        }

        log::trace!(
            "connection from {} pulled back to {} connections",
            connection.source(),
            image.len()
        );
        Ok(image.into_connections())
    }
}
