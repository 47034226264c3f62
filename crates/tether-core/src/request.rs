//! Constraint requests handed to a layout engine.

use std::fmt;

use crate::anchor::{Anchor, AnchorRef, Axis, Dimension};

/// Unique identifier for an activated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub u64);

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constraint#{}", self.0)
    }
}

/// The relation of a constraint (equality or inequality).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    LessOrEqual,
    #[default]
    Equal,
    GreaterOrEqual,
}

impl Relation {
    /// Tolerance used when checking a relation numerically.
    pub const EPSILON: f64 = 1e-8;

    /// Check whether `lhs REL rhs` holds.
    pub fn is_satisfied(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Relation::LessOrEqual => lhs <= rhs + Self::EPSILON,
            Relation::Equal => (lhs - rhs).abs() <= Self::EPSILON,
            Relation::GreaterOrEqual => lhs + Self::EPSILON >= rhs,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::LessOrEqual => "<=",
            Relation::Equal => "==",
            Relation::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A pending relation between two anchors, or an anchor and a constant.
///
/// The equation is `first REL multiplier * second + constant`, or
/// `first REL constant` when there is no second anchor. Requests can only be
/// built through the typed constructors, so both anchors always share an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstraintRequest {
    first: AnchorRef,
    relation: Relation,
    second: Option<AnchorRef>,
    multiplier: f64,
    constant: f64,
}

impl ConstraintRequest {
    /// `first REL second + constant`, for two anchors on the same axis.
    pub fn between<A: Axis>(
        first: Anchor<A>,
        second: Anchor<A>,
        relation: Relation,
        constant: f64,
    ) -> Self {
        Self {
            first: first.erase(),
            relation,
            second: Some(second.erase()),
            multiplier: 1.0,
            constant,
        }
    }

    /// `first REL multiplier * second + constant`, for two dimensions.
    pub fn ratio(
        first: Anchor<Dimension>,
        second: Anchor<Dimension>,
        multiplier: f64,
        constant: f64,
        relation: Relation,
    ) -> Self {
        Self {
            first: first.erase(),
            relation,
            second: Some(second.erase()),
            multiplier,
            constant,
        }
    }

    /// `dimension REL constant`. The constant is not validated.
    pub fn fixed(dimension: Anchor<Dimension>, constant: f64, relation: Relation) -> Self {
        Self {
            first: dimension.erase(),
            relation,
            second: None,
            multiplier: 0.0,
            constant,
        }
    }

    pub fn first(&self) -> AnchorRef {
        self.first
    }

    pub fn second(&self) -> Option<AnchorRef> {
        self.second
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Evaluate the request against resolved anchor values.
    ///
    /// Returns `None` when `value` cannot resolve one of the anchors.
    pub fn is_satisfied_by(&self, mut value: impl FnMut(AnchorRef) -> Option<f64>) -> Option<bool> {
        let lhs = value(self.first)?;
        let rhs = match self.second {
            Some(second) => self.multiplier * value(second)? + self.constant,
            None => self.constant,
        };
        Some(self.relation.is_satisfied(lhs, rhs))
    }
}

impl fmt::Display for ConstraintRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.first, self.relation)?;
        match self.second {
            Some(second) if self.multiplier == 1.0 => {
                write!(f, "{} + {}", second, self.constant)
            }
            Some(second) => write!(f, "{} * {} + {}", self.multiplier, second, self.constant),
            None => write!(f, "{}", self.constant),
        }
    }
}

/// Per-edge distances used when pinning all four edges at once.
///
/// `left` and `right` are applied to the leading and trailing anchors as-is;
/// no right-to-left mirroring happens here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{ItemId, YAxis};

    #[test]
    fn test_relation_default_is_equal() {
        assert_eq!(Relation::default(), Relation::Equal);
    }

    #[test]
    fn test_relation_is_satisfied() {
        assert!(Relation::Equal.is_satisfied(8.0, 8.0));
        assert!(!Relation::Equal.is_satisfied(8.0, 9.0));
        assert!(Relation::LessOrEqual.is_satisfied(8.0, 9.0));
        assert!(!Relation::LessOrEqual.is_satisfied(10.0, 9.0));
        assert!(Relation::GreaterOrEqual.is_satisfied(10.0, 9.0));
        assert!(Relation::GreaterOrEqual.is_satisfied(9.0, 9.0));
    }

    #[test]
    fn test_between_keeps_operand_order() {
        let a = Anchor::<YAxis>::top(ItemId(1));
        let b = Anchor::<YAxis>::top(ItemId(2));
        let request = ConstraintRequest::between(a, b, Relation::Equal, 4.0);
        assert_eq!(request.first(), a.erase());
        assert_eq!(request.second(), Some(b.erase()));
        assert_eq!(request.multiplier(), 1.0);
        assert_eq!(request.to_string(), "item#1.top == item#2.top + 4");
    }

    #[test]
    fn test_fixed_passes_negative_constant_through() {
        let request = ConstraintRequest::fixed(Anchor::width(ItemId(1)), -20.0, Relation::Equal);
        assert_eq!(request.constant(), -20.0);
        assert_eq!(request.second(), None);
    }

    #[test]
    fn test_is_satisfied_by() {
        let request = ConstraintRequest::ratio(
            Anchor::width(ItemId(1)),
            Anchor::height(ItemId(1)),
            2.0,
            10.0,
            Relation::Equal,
        );
        let satisfied = request.is_satisfied_by(|anchor| match anchor.attribute {
            crate::Attribute::Width => Some(50.0),
            crate::Attribute::Height => Some(20.0),
            _ => None,
        });
        assert_eq!(satisfied, Some(true));

        let unresolved = request.is_satisfied_by(|_| None);
        assert_eq!(unresolved, None);
    }

    #[test]
    fn test_uniform_insets() {
        assert_eq!(EdgeInsets::uniform(8.0), EdgeInsets::new(8.0, 8.0, 8.0, 8.0));
        assert_eq!(EdgeInsets::default(), EdgeInsets::ZERO);
    }
}
