//! Core types shared by every tether crate.
//!
//! This crate provides:
//! - Typed anchors (`Anchor<XAxis>`, `Anchor<YAxis>`, `Anchor<Dimension>`)
//! - Constraint relations and requests
//! - Layout configuration
//! - Error types

pub mod anchor;
pub mod config;
pub mod errors;
pub mod request;

pub use anchor::*;
pub use config::*;
pub use errors::*;
pub use request::*;
