//! The host layout engine as seen by tether.
//!
//! This crate provides:
//! - The `LayoutEngine` capability trait that constraint builders talk to
//! - `RecordingEngine`, an in-memory engine that keeps the activation table

mod engine;
mod recording;

pub use engine::LayoutEngine;
pub use recording::RecordingEngine;
