//! Error types for tether.
//!
//! Misuse of the builder (relating anchors of different axes, asking a layout
//! guide for a baseline) does not compile, so only runtime conditions live here.

use thiserror::Error;

use crate::request::ConstraintId;

/// Top-level error type for tether.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Constraint {id} is not active in this engine")]
    UnknownConstraint { id: ConstraintId },

    #[error("Invalid layout configuration: {reason}")]
    InvalidConfig { reason: String },
}
