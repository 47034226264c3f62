//! In-memory layout engine.
//!
//! `RecordingEngine` keeps the activation table and the frame-translation
//! flags, but never solves anything. It backs tests and any host that feeds
//! the recorded requests into its own solver.

use std::collections::HashMap;

use indexmap::IndexMap;
use tether_core::{ConstraintId, ConstraintRequest, ItemId, LayoutConfig, LayoutError};
use tracing::{debug, trace};

use crate::engine::LayoutEngine;

/// A layout engine that records active constraints in activation order.
#[derive(Debug)]
pub struct RecordingEngine {
    config: LayoutConfig,
    /// Active constraints, in activation order
    active: IndexMap<ConstraintId, ConstraintRequest>,
    /// Frame-translation flag per item; absent means enabled
    frame_flags: HashMap<ItemId, bool>,
    /// Number of times any frame flag was written
    flag_writes: usize,
    /// Counter for constraint IDs; IDs are never reused
    id_counter: u64,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            active: IndexMap::new(),
            frame_flags: HashMap::new(),
            flag_writes: 0,
            id_counter: 0,
        }
    }

    /// Create an engine with a validated configuration.
    pub fn with_config(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of active constraints.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active constraints in activation order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &ConstraintRequest)> {
        self.active.iter().map(|(&id, request)| (id, request))
    }

    /// Active constraints that mention `item` on either side.
    pub fn constraints_for(
        &self,
        item: ItemId,
    ) -> impl Iterator<Item = (ConstraintId, &ConstraintRequest)> {
        self.constraints().filter(move |(_, request)| {
            request.first().item == item || request.second().is_some_and(|s| s.item == item)
        })
    }

    /// Number of times a frame-translation flag was written.
    pub fn flag_writes(&self) -> usize {
        self.flag_writes
    }
}

impl LayoutEngine for RecordingEngine {
    fn activate(&mut self, request: ConstraintRequest) -> ConstraintId {
        let id = ConstraintId(self.id_counter);
        self.id_counter += 1;
        debug!(%id, %request, "activating constraint");
        self.active.insert(id, request);
        id
    }

    fn deactivate(&mut self, id: ConstraintId) -> Result<ConstraintRequest, LayoutError> {
        let request = self
            .active
            .shift_remove(&id)
            .ok_or(LayoutError::UnknownConstraint { id })?;
        debug!(%id, %request, "deactivated constraint");
        Ok(request)
    }

    fn constraint(&self, id: ConstraintId) -> Option<&ConstraintRequest> {
        self.active.get(&id)
    }

    fn translates_frame(&self, item: ItemId) -> bool {
        self.frame_flags.get(&item).copied().unwrap_or(true)
    }

    fn set_translates_frame(&mut self, item: ItemId, enabled: bool) {
        trace!(%item, enabled, "setting frame translation");
        self.frame_flags.insert(item, enabled);
        self.flag_writes += 1;
    }

    fn system_spacing(&self) -> f64 {
        self.config.system_spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::{Anchor, Relation};

    fn request(from: u64, to: u64) -> ConstraintRequest {
        ConstraintRequest::between(
            Anchor::top(ItemId(from)),
            Anchor::top(ItemId(to)),
            Relation::Equal,
            0.0,
        )
    }

    #[test]
    fn test_activate_assigns_fresh_ids() {
        let mut engine = RecordingEngine::new();
        let a = engine.activate(request(1, 2));
        let b = engine.activate(request(1, 3));
        assert_ne!(a, b);
        assert!(engine.is_active(a));
        assert!(engine.is_active(b));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_deactivate() {
        let mut engine = RecordingEngine::new();
        let id = engine.activate(request(1, 2));
        let removed = engine.deactivate(id).unwrap();
        assert_eq!(removed, request(1, 2));
        assert!(!engine.is_active(id));
        assert!(engine.is_empty());

        assert!(matches!(
            engine.deactivate(id),
            Err(LayoutError::UnknownConstraint { .. })
        ));
    }

    #[test]
    fn test_ids_not_reused_after_deactivate() {
        let mut engine = RecordingEngine::new();
        let first = engine.activate(request(1, 2));
        engine.deactivate(first).unwrap();
        let second = engine.activate(request(1, 2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_activation_order_preserved() {
        let mut engine = RecordingEngine::new();
        let a = engine.activate(request(1, 2));
        let b = engine.activate(request(3, 4));
        let c = engine.activate(request(5, 6));
        engine.deactivate(b).unwrap();
        let ids: Vec<_> = engine.constraints().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_constraints_for_item() {
        let mut engine = RecordingEngine::new();
        engine.activate(request(1, 2));
        engine.activate(request(3, 1));
        engine.activate(request(3, 4));
        assert_eq!(engine.constraints_for(ItemId(1)).count(), 2);
        assert_eq!(engine.constraints_for(ItemId(4)).count(), 1);
        assert_eq!(engine.constraints_for(ItemId(9)).count(), 0);
    }

    #[test]
    fn test_frame_flag_defaults_to_enabled() {
        let mut engine = RecordingEngine::new();
        assert!(engine.translates_frame(ItemId(1)));
        engine.set_translates_frame(ItemId(1), false);
        assert!(!engine.translates_frame(ItemId(1)));
        assert!(engine.translates_frame(ItemId(2)));
        assert_eq!(engine.flag_writes(), 1);
    }

    #[test]
    fn test_with_config() {
        let engine =
            RecordingEngine::with_config(LayoutConfig::default().with_system_spacing(6.0)).unwrap();
        assert_eq!(engine.system_spacing(), 6.0);

        let invalid = RecordingEngine::with_config(LayoutConfig::default().with_system_spacing(-3.0));
        assert!(invalid.is_err());
    }
}
