//! Stagehand - scene-graph inspection and editing core
//!
//! This library derives a display tree from a hierarchical stage document,
//! keeps per-prim display facets consistent with edits, and applies typed
//! edits back into the stage with text-to-value coercion. Presentation,
//! host selection, and composition arbitration stay outside; the crate
//! exposes plain data snapshots and synchronous edit operations.

pub mod applier;
pub mod bridge;
pub mod coerce;
pub mod error;
pub mod facets;
pub mod inspector;
pub mod session;
pub mod stage;
pub mod tree;

// Re-export commonly used types
pub use error::EditError;
pub use facets::PrimFacets;
pub use inspector::{AttributeCategory, AttributeRow, TimeSampleRow, VariantSetInfo};
pub use session::{EditorSession, SelectionSource, KIND_SUGGESTIONS};
pub use stage::{
    Attribute, AttributeValue, Interpolation, Payload, Prim, PrimPath, Primvar, Purpose, Stage,
    TimeSample, ValueType, VariantSet,
};
pub use tree::{project, DisplayRow};
