//! Layout participants: anything that exposes anchors.

use tether_constraint::LayoutEngine;
use tether_core::{Anchor, Dimension, ItemId, XAxis, YAxis};

use crate::builder::{begin_constraining, ConstraintBuilder};

/// An item that can be pinned by constraints.
///
/// Anchors are derived from [`LayoutParticipant::item`], so implementors only
/// provide an id and say whether the engine derives constraints from their frame.
pub trait LayoutParticipant {
    /// Whether the engine turns this participant's frame into implicit
    /// constraints until told otherwise. True for views, false for guides.
    const TRANSLATES_FRAME: bool;

    fn item(&self) -> ItemId;

    fn top_anchor(&self) -> Anchor<YAxis> {
        Anchor::top(self.item())
    }

    fn bottom_anchor(&self) -> Anchor<YAxis> {
        Anchor::bottom(self.item())
    }

    fn leading_anchor(&self) -> Anchor<XAxis> {
        Anchor::leading(self.item())
    }

    fn trailing_anchor(&self) -> Anchor<XAxis> {
        Anchor::trailing(self.item())
    }

    fn left_anchor(&self) -> Anchor<XAxis> {
        Anchor::left(self.item())
    }

    fn right_anchor(&self) -> Anchor<XAxis> {
        Anchor::right(self.item())
    }

    fn center_x_anchor(&self) -> Anchor<XAxis> {
        Anchor::center_x(self.item())
    }

    fn center_y_anchor(&self) -> Anchor<YAxis> {
        Anchor::center_y(self.item())
    }

    fn width_anchor(&self) -> Anchor<Dimension> {
        Anchor::width(self.item())
    }

    fn height_anchor(&self) -> Anchor<Dimension> {
        Anchor::height(self.item())
    }

    /// Start a constraining session for this participant.
    fn layout<'a, E: LayoutEngine>(&'a self, engine: &'a mut E) -> ConstraintBuilder<'a, Self, E>
    where
        Self: Sized,
    {
        begin_constraining(engine, self)
    }
}

/// A participant with text baselines. Only views implement this.
pub trait BaselineParticipant: LayoutParticipant {
    fn first_baseline_anchor(&self) -> Anchor<YAxis> {
        Anchor::first_baseline(self.item())
    }

    fn last_baseline_anchor(&self) -> Anchor<YAxis> {
        Anchor::last_baseline(self.item())
    }
}

/// Handle to a view in the host view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    id: ItemId,
}

impl View {
    pub const fn new(id: u64) -> Self {
        Self { id: ItemId(id) }
    }
}

impl LayoutParticipant for View {
    const TRANSLATES_FRAME: bool = true;

    fn item(&self) -> ItemId {
        self.id
    }
}

impl BaselineParticipant for View {}

/// Handle to a layout guide: a rectangle with anchors but no content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutGuide {
    id: ItemId,
}

impl LayoutGuide {
    pub const fn new(id: u64) -> Self {
        Self { id: ItemId(id) }
    }
}

impl LayoutParticipant for LayoutGuide {
    const TRANSLATES_FRAME: bool = false;

    fn item(&self) -> ItemId {
        self.id
    }
}
