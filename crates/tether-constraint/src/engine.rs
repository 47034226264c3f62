//! The layout engine capability.

use tether_core::{ConstraintId, ConstraintRequest, ItemId, LayoutError};

/// Capability interface of the host layout engine.
///
/// Solving is entirely the engine's business. Builders only ask it to
/// activate relations, flip the frame-translation flag of a view, and report
/// the standard spacing unit.
pub trait LayoutEngine {
    /// Register `request` and mark it active.
    fn activate(&mut self, request: ConstraintRequest) -> ConstraintId;

    /// Deactivate a previously activated constraint, returning its request.
    fn deactivate(&mut self, id: ConstraintId) -> Result<ConstraintRequest, LayoutError>;

    /// Look up an active constraint.
    fn constraint(&self, id: ConstraintId) -> Option<&ConstraintRequest>;

    fn is_active(&self, id: ConstraintId) -> bool {
        self.constraint(id).is_some()
    }

    /// Whether the engine derives constraints from `item`'s frame.
    fn translates_frame(&self, item: ItemId) -> bool;

    fn set_translates_frame(&mut self, item: ItemId, enabled: bool);

    /// The standard spacing unit between adjacent elements.
    fn system_spacing(&self) -> f64;
}
