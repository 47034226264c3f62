//! The constraint builder.
//!
//! Positive offsets mean "inward" on every edge. For the edges that lie later
//! on their axis (trailing, right, bottom, last baseline) this requires the
//! operands to be swapped: the target is related to the participant's anchor
//! instead of the other way around. [`Direction`] makes that choice explicit.

use tether_constraint::LayoutEngine;
use tether_core::{
    Anchor, Attribute, Axis, ConstraintId, ConstraintRequest, Dimension, EdgeInsets, Relation,
    XAxis, YAxis,
};
use tracing::trace;

use crate::participant::{BaselineParticipant, LayoutParticipant};

/// Operand order used when relating a participant's anchor to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `own REL target + offset`
    Forward,
    /// `target REL own + offset`
    Inverted,
}

impl Direction {
    /// The direction used for constraints on `attribute`.
    pub const fn for_attribute(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Trailing | Attribute::Right | Attribute::Bottom | Attribute::LastBaseline => {
                Direction::Inverted
            }
            Attribute::Top
            | Attribute::Leading
            | Attribute::Left
            | Attribute::CenterX
            | Attribute::CenterY
            | Attribute::Width
            | Attribute::Height
            | Attribute::FirstBaseline => Direction::Forward,
        }
    }

    /// Order `own` and `target` into `(first, second)` operands.
    pub fn order<A: Axis>(self, own: Anchor<A>, target: Anchor<A>) -> (Anchor<A>, Anchor<A>) {
        match self {
            Direction::Forward => (own, target),
            Direction::Inverted => (target, own),
        }
    }
}

/// Start constraining `participant`.
///
/// Views stop having their frame translated into constraints. The flag is only
/// written while it is still enabled, so repeated sessions leave it untouched.
pub fn begin_constraining<'a, P, E>(engine: &'a mut E, participant: &'a P) -> ConstraintBuilder<'a, P, E>
where
    P: LayoutParticipant,
    E: LayoutEngine,
{
    let item = participant.item();
    trace!(%item, "begin constraining");
    if P::TRANSLATES_FRAME && engine.translates_frame(item) {
        engine.set_translates_frame(item, false);
    }
    ConstraintBuilder {
        engine,
        participant,
    }
}

/// Run `block` with a builder scoped to `participant`.
pub fn constrain<P, E, R>(
    engine: &mut E,
    participant: &P,
    block: impl FnOnce(&mut ConstraintBuilder<'_, P, E>) -> R,
) -> R
where
    P: LayoutParticipant,
    E: LayoutEngine,
{
    let mut builder = begin_constraining(engine, participant);
    block(&mut builder)
}

/// Emits constraints for one participant.
#[derive(Debug)]
pub struct ConstraintBuilder<'a, P, E> {
    engine: &'a mut E,
    participant: &'a P,
}

impl<'a, P, E> ConstraintBuilder<'a, P, E>
where
    P: LayoutParticipant,
    E: LayoutEngine,
{
    pub fn participant(&self) -> &P {
        self.participant
    }

    pub fn engine(&self) -> &E {
        &*self.engine
    }

    fn activate(&mut self, request: ConstraintRequest) -> ConstraintId {
        self.engine.activate(request)
    }

    /// Relate one of the participant's anchors to `target`.
    fn relate<A: Axis>(
        &mut self,
        own: Anchor<A>,
        target: Anchor<A>,
        constant: f64,
        relation: Relation,
    ) -> ConstraintId {
        let direction = Direction::for_attribute(own.attribute());
        let (first, second) = direction.order(own, target);
        trace!(%own, %target, ?direction, "relating anchors");
        self.activate(ConstraintRequest::between(first, second, relation, constant))
    }

    /// Like [`Self::relate`], with the constant given in system spacing units.
    fn relate_spacing<A: Axis>(
        &mut self,
        own: Anchor<A>,
        target: Anchor<A>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let constant = multiplier * self.engine.system_spacing();
        self.relate(own, target, constant, relation)
    }

    /// Pin all four edges to `other`, inset by `padding` on every side.
    pub fn edges_padding<Q: LayoutParticipant>(&mut self, other: &Q, padding: f64) -> [ConstraintId; 4] {
        self.edges(other, EdgeInsets::uniform(padding))
    }

    /// Pin all four edges to `other`'s edges, in [top, bottom, leading, trailing] order.
    ///
    /// `insets.left` goes to the leading edge and `insets.right` to the
    /// trailing edge. Right-to-left mirroring is left to the engine.
    pub fn edges<Q: LayoutParticipant>(&mut self, other: &Q, insets: EdgeInsets) -> [ConstraintId; 4] {
        [
            self.top(other.top_anchor(), insets.top, Relation::Equal),
            self.bottom(other.bottom_anchor(), insets.bottom, Relation::Equal),
            self.leading(other.leading_anchor(), insets.left, Relation::Equal),
            self.trailing(other.trailing_anchor(), insets.right, Relation::Equal),
        ]
    }

    pub fn top(&mut self, anchor: Anchor<YAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.top_anchor();
        self.relate(own, anchor, offset, relation)
    }

    /// Top edge `multiplier` system spacings below `anchor`.
    pub fn top_spacing(&mut self, anchor: Anchor<YAxis>, multiplier: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.top_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }

    pub fn bottom(&mut self, anchor: Anchor<YAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.bottom_anchor();
        self.relate(own, anchor, offset, relation)
    }

    /// `anchor` lies `multiplier` system spacings below the bottom edge.
    pub fn bottom_spacing(
        &mut self,
        anchor: Anchor<YAxis>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.bottom_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }

    pub fn leading(&mut self, anchor: Anchor<XAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.leading_anchor();
        self.relate(own, anchor, offset, relation)
    }

    /// Leading edge `multiplier` system spacings after `anchor`.
    pub fn leading_spacing(
        &mut self,
        anchor: Anchor<XAxis>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.leading_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }

    /// Align the leading edge with `other`'s leading edge.
    pub fn leading_aligned<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        offset: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.leading(other.leading_anchor(), offset, relation)
    }

    pub fn leading_spacing_to<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.leading_spacing(other.leading_anchor(), multiplier, relation)
    }

    pub fn trailing(&mut self, anchor: Anchor<XAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.trailing_anchor();
        self.relate(own, anchor, offset, relation)
    }

    /// `anchor` lies `multiplier` system spacings after the trailing edge.
    pub fn trailing_spacing(
        &mut self,
        anchor: Anchor<XAxis>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.trailing_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }

    /// Align the trailing edge with `other`'s trailing edge.
    pub fn trailing_aligned<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        offset: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.trailing(other.trailing_anchor(), offset, relation)
    }

    pub fn trailing_spacing_to<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.trailing_spacing(other.trailing_anchor(), multiplier, relation)
    }

    pub fn center_x(&mut self, anchor: Anchor<XAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.center_x_anchor();
        self.relate(own, anchor, offset, relation)
    }

    pub fn center_x_on<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        offset: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.center_x(other.center_x_anchor(), offset, relation)
    }

    pub fn center_y(&mut self, anchor: Anchor<YAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.center_y_anchor();
        self.relate(own, anchor, offset, relation)
    }

    pub fn center_y_on<Q: LayoutParticipant>(
        &mut self,
        other: &Q,
        offset: f64,
        relation: Relation,
    ) -> ConstraintId {
        self.center_y(other.center_y_anchor(), offset, relation)
    }

    /// Fixed width. Negative values are forwarded unchanged.
    pub fn width(&mut self, constant: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.width_anchor();
        self.activate(ConstraintRequest::fixed(own, constant, relation))
    }

    /// Width as `multiplier * dimension + constant`.
    pub fn width_to(
        &mut self,
        dimension: Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.width_anchor();
        self.activate(ConstraintRequest::ratio(own, dimension, multiplier, constant, relation))
    }

    /// Fixed height. Negative values are forwarded unchanged.
    pub fn height(&mut self, constant: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.height_anchor();
        self.activate(ConstraintRequest::fixed(own, constant, relation))
    }

    /// Height as `multiplier * dimension + constant`.
    pub fn height_to(
        &mut self,
        dimension: Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.height_anchor();
        self.activate(ConstraintRequest::ratio(own, dimension, multiplier, constant, relation))
    }
}

impl<'a, P, E> ConstraintBuilder<'a, P, E>
where
    P: BaselineParticipant,
    E: LayoutEngine,
{
    pub fn first_baseline(&mut self, anchor: Anchor<YAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.first_baseline_anchor();
        self.relate(own, anchor, offset, relation)
    }

    pub fn first_baseline_spacing(
        &mut self,
        anchor: Anchor<YAxis>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.first_baseline_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }

    pub fn last_baseline(&mut self, anchor: Anchor<YAxis>, offset: f64, relation: Relation) -> ConstraintId {
        let own = self.participant.last_baseline_anchor();
        self.relate(own, anchor, offset, relation)
    }

    pub fn last_baseline_spacing(
        &mut self,
        anchor: Anchor<YAxis>,
        multiplier: f64,
        relation: Relation,
    ) -> ConstraintId {
        let own = self.participant.last_baseline_anchor();
        self.relate_spacing(own, anchor, multiplier, relation)
    }
}
