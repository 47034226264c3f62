//! Anchors: named attachment points of a layout item along one axis.
//!
//! Every anchor is typed by the axis it lives on. The axis marker is a
//! zero-sized type, so `Anchor<XAxis>` and `Anchor<YAxis>` cannot be mixed up
//! when building a constraint.

use std::fmt;
use std::marker::PhantomData;

/// Unique identifier for an item taking part in layout (a view or a guide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// The geometric axis an anchor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// Horizontal positions (leading, trailing, left, right, center-x)
    Horizontal,
    /// Vertical positions (top, bottom, center-y, baselines)
    Vertical,
    /// Sizes (width, height)
    Dimension,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::XAxis {}
    impl Sealed for super::YAxis {}
    impl Sealed for super::Dimension {}
}

/// Marker trait implemented by the three axis types.
pub trait Axis: sealed::Sealed + Copy + fmt::Debug + Eq + std::hash::Hash {
    /// The runtime axis this marker stands for.
    const KIND: AxisKind;
}

/// Horizontal axis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XAxis;

/// Vertical axis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YAxis;

/// Dimension (size) axis marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension;

impl Axis for XAxis {
    const KIND: AxisKind = AxisKind::Horizontal;
}

impl Axis for YAxis {
    const KIND: AxisKind = AxisKind::Vertical;
}

impl Axis for Dimension {
    const KIND: AxisKind = AxisKind::Dimension;
}

/// A named attachment point on a layout item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Top,
    Bottom,
    Leading,
    Trailing,
    Left,
    Right,
    CenterX,
    CenterY,
    Width,
    Height,
    FirstBaseline,
    LastBaseline,
}

impl Attribute {
    /// The axis this attribute is measured along.
    pub const fn axis(self) -> AxisKind {
        match self {
            Attribute::Top
            | Attribute::Bottom
            | Attribute::CenterY
            | Attribute::FirstBaseline
            | Attribute::LastBaseline => AxisKind::Vertical,
            Attribute::Leading
            | Attribute::Trailing
            | Attribute::Left
            | Attribute::Right
            | Attribute::CenterX => AxisKind::Horizontal,
            Attribute::Width | Attribute::Height => AxisKind::Dimension,
        }
    }

    /// Name used when printing constraint equations.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Leading => "leading",
            Attribute::Trailing => "trailing",
            Attribute::Left => "left",
            Attribute::Right => "right",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::FirstBaseline => "firstBaseline",
            Attribute::LastBaseline => "lastBaseline",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An anchor with its axis erased, as stored by a layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorRef {
    pub item: ItemId,
    pub attribute: Attribute,
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.item, self.attribute)
    }
}

/// An anchor typed by its axis.
///
/// Anchors are only created through the per-axis constructors below, which
/// keeps the attribute and the axis marker in agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor<A: Axis> {
    item: ItemId,
    attribute: Attribute,
    _axis: PhantomData<A>,
}

impl<A: Axis> Anchor<A> {
    const fn new(item: ItemId, attribute: Attribute) -> Self {
        Self {
            item,
            attribute,
            _axis: PhantomData,
        }
    }

    /// The item owning this anchor.
    pub const fn item(&self) -> ItemId {
        self.item
    }

    /// The attribute this anchor stands for.
    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Erase the axis type.
    pub const fn erase(&self) -> AnchorRef {
        AnchorRef {
            item: self.item,
            attribute: self.attribute,
        }
    }
}

impl<A: Axis> From<Anchor<A>> for AnchorRef {
    fn from(anchor: Anchor<A>) -> Self {
        anchor.erase()
    }
}

impl<A: Axis> fmt::Display for Anchor<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.erase(), f)
    }
}

impl Anchor<XAxis> {
    pub const fn leading(item: ItemId) -> Self {
        Self::new(item, Attribute::Leading)
    }

    pub const fn trailing(item: ItemId) -> Self {
        Self::new(item, Attribute::Trailing)
    }

    pub const fn left(item: ItemId) -> Self {
        Self::new(item, Attribute::Left)
    }

    pub const fn right(item: ItemId) -> Self {
        Self::new(item, Attribute::Right)
    }

    pub const fn center_x(item: ItemId) -> Self {
        Self::new(item, Attribute::CenterX)
    }
}

impl Anchor<YAxis> {
    pub const fn top(item: ItemId) -> Self {
        Self::new(item, Attribute::Top)
    }

    pub const fn bottom(item: ItemId) -> Self {
        Self::new(item, Attribute::Bottom)
    }

    pub const fn center_y(item: ItemId) -> Self {
        Self::new(item, Attribute::CenterY)
    }

    pub const fn first_baseline(item: ItemId) -> Self {
        Self::new(item, Attribute::FirstBaseline)
    }

    pub const fn last_baseline(item: ItemId) -> Self {
        Self::new(item, Attribute::LastBaseline)
    }
}

impl Anchor<Dimension> {
    pub const fn width(item: ItemId) -> Self {
        Self::new(item, Attribute::Width)
    }

    pub const fn height(item: ItemId) -> Self {
        Self::new(item, Attribute::Height)
    }
}
