//! Declarative constraint building for views and layout guides.
//!
//! A [`ConstraintBuilder`] is scoped to one participant. Each call emits one
//! constraint (four for [`ConstraintBuilder::edges`]), activates it in the
//! engine right away and returns its id.
//!
//! # Example
//!
//! ```
//! use tether_constraint::RecordingEngine;
//! use tether_layout::{constrain, View};
//!
//! let mut engine = RecordingEngine::new();
//! let container = View::new(1);
//! let content = View::new(2);
//!
//! let edges = constrain(&mut engine, &content, |layout| layout.edges_padding(&container, 8.0));
//! assert_eq!(edges.len(), 4);
//! assert_eq!(engine.len(), 4);
//! ```

mod builder;
mod participant;

pub use builder::{begin_constraining, constrain, ConstraintBuilder, Direction};
pub use participant::{BaselineParticipant, LayoutGuide, LayoutParticipant, View};
pub use tether_core::{Anchor, ConstraintId, EdgeInsets, ItemId, Relation};
