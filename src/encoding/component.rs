//! Encoding flow components and decompositions.
//!
//! This is the entry point of the crate: a component's perimeter is expanded
//! (optionally through a [`Deformation`]), its events are indexed on the
//! surface, the half-edges are classified and everything is assembled into an
//! [`EncodedComponent`].

use serde::{Deserialize, Serialize};

use crate::algs::assemble::assemble;
use crate::algs::classify::{EmptyPerimeterHandling, classify_region};
use crate::algs::events::EventIndex;
use crate::algs::pullback::{Deformation, PullbackResolver};
use crate::encoding::connection::EncodedSaddleConnection;
use crate::region_error::RegionError;
use crate::topology::component::{FlowComponent, FlowDecomposition};
use crate::topology::half_edge::HalfEdge;
use crate::topology::surface::Surface;
use crate::topology::validation::validate_surface;
use crate::topology::vector::DEFAULT_TOLERANCE;

/// Knobs for [`encode_flow_component`] and [`encode_flow_decomposition`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EncodeOptions {
    /// Relative tolerance when comparing the holonomy of a pulled back curve.
    pub conservation_tolerance: f64,
    pub empty_perimeter: EmptyPerimeterHandling,
    /// Run [`validate_surface`] before encoding.
    pub validate_surface: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            conservation_tolerance: DEFAULT_TOLERANCE,
            empty_perimeter: EmptyPerimeterHandling::default(),
            validate_surface: true,
        }
    }
}

/// A perimeter step meeting the triangulation at `half_edge`, as the
/// `index`-th event there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedTouch {
    pub half_edge: HalfEdge,
    pub index: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedPerimeterStep {
    #[serde(flatten)]
    pub connection: EncodedSaddleConnection,
    pub vertical: bool,
    pub boundary: bool,
    pub touches: Vec<EncodedTouch>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedComponent {
    pub cylinder: bool,
    pub perimeter: Vec<EncodedPerimeterStep>,
    /// Half-edges with both endpoints in the component that no perimeter step crosses.
    pub inside: Vec<HalfEdge>,
}

/// Encode a single component of a flow decomposition on `surface`.
///
/// With a `deformation`, the component lives on its domain and `surface` must
/// be its codomain; perimeter connections are pulled back before indexing.
pub fn encode_flow_component<S>(
    surface: &S,
    component: &FlowComponent<S::Scalar>,
    deformation: Option<&dyn Deformation<S::Scalar>>,
    options: &EncodeOptions,
) -> Result<EncodedComponent, RegionError>
where
    S: Surface,
{
    if let Some(codomain) = deformation.map(|d| d.codomain()) {
        if codomain != surface.id() {
            return Err(RegionError::DomainMismatch {
                expected: surface.id(),
                found: codomain,
            });
        }
    }
    if options.validate_surface {
        validate_surface(surface)?;
    }

    let curves = component.relevant_perimeter();
    if curves.len() < component.perimeter().len() {
        log::debug!(
            "dropping {} non-boundary perimeter curves of a minimal component",
            component.perimeter().len() - curves.len()
        );
    }
    let resolver = PullbackResolver::new(deformation).with_tolerance(options.conservation_tolerance);
    let events = EventIndex::build(surface, &curves, &resolver)?;
    let classification = classify_region(surface, &events, options.empty_perimeter)?;
    assemble(surface, &events, &classification, component.is_cylinder())
}

/// Encode every component of `decomposition`, in order.
///
/// The surface is validated once up front if requested. With the `rayon`
/// feature, components are encoded in parallel.
pub fn encode_flow_decomposition<S>(
    surface: &S,
    decomposition: &FlowDecomposition<S::Scalar>,
    deformation: Option<&(dyn Deformation<S::Scalar> + Sync)>,
    options: &EncodeOptions,
) -> Result<Vec<EncodedComponent>, RegionError>
where
    S: Surface + Sync,
    S::Scalar: Send + Sync,
{
    if options.validate_surface {
        validate_surface(surface)?;
    }
    let per_component = EncodeOptions {
        validate_surface: false,
        ..*options
    };
    let encode = |component: &FlowComponent<S::Scalar>| {
        let deformation = deformation.map(|d| d as &dyn Deformation<S::Scalar>);
        encode_flow_component(surface, component, deformation, &per_component)
    };

    #[cfg(feature = "rayon")]
    let encoded: Result<Vec<_>, _> = {
        use rayon::prelude::*;
        decomposition.components().par_iter().map(encode).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let encoded: Result<Vec<_>, _> = decomposition.components().iter().map(encode).collect();

    encoded
}
