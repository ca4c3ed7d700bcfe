//! Serializable views of surfaces, curves and flow components.
//!
//! Every `Encoded*` type derives `serde::Serialize`; keys follow the camelCase
//! convention of the consuming widgets (`halfEdge`). Scalars are converted to
//! `f64` on the way out.

pub mod component;
pub mod connection;
pub mod triangulation;

pub use component::{
    EncodeOptions, EncodedComponent, EncodedPerimeterStep, EncodedTouch, encode_flow_component,
    encode_flow_decomposition,
};
pub use connection::{
    EncodedCrossing, EncodedPath, EncodedSaddleConnection, EncodedVector, encode_path,
    encode_saddle_connection,
};
pub use triangulation::{EncodedTriangulation, encode_flat_triangulation};
