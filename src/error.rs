//! Error taxonomy for edit and text-bridge operations
//!
//! Every error here is recovered at the editor boundary: the stage is left
//! unchanged on validation failure and the session stays usable.

use thiserror::Error;

/// Errors surfaced by the edit applier and the document text bridge
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("prim path {0} no longer resolves on the stage")]
    StalePath(String),
    #[error("prim {0} is not imageable, purpose cannot be authored")]
    CapabilityMissing(String),
    #[error("variant set {0} does not exist on this prim")]
    UnknownVariantSet(String),
    #[error("variant {variant} is not in variant set {set}")]
    UnknownVariant { set: String, variant: String },
    #[error("no attribute or primvar named {0} on this prim")]
    PropertyNotFound(String),
    #[error("a property named {0} already exists on this prim")]
    DuplicateName(String),
    #[error("{0:?} is not a valid number")]
    InvalidNumber(String),
    #[error("{0:?} is not a 3-component vector")]
    InvalidVector(String),
    #[error("unsupported value type {0}")]
    UnsupportedType(String),
    #[error("failed to parse layer text: {0}")]
    ParseError(String),
    #[error("failed to serialize layer: {0}")]
    ExportFailed(String),
}
