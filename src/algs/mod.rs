//! Re-export public algorithms.

pub mod assemble;
pub mod classify;
pub mod events;
pub mod pullback;

pub use assemble::assemble;
pub use classify::{EmptyPerimeterHandling, RegionClassification, classify_region};
pub use events::{Event, EventIndex, Step, StepId};
pub use pullback::{Deformation, PullbackResolver};
