//! Core value types for gradient expressions.

use std::fmt;

/// A numeral exactly as it appeared in the source text (e.g. `"0.5"`, `"5."`, `"-10"`).
///
/// Parsing never rounds numbers. Consumers convert with [`RawNumber::to_f64`]
/// when they need arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RawNumber(String);

impl RawNumber {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the text is a valid decimal number.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.parse().ok()
    }
}

impl From<&str> for RawNumber {
    fn from(s: &str) -> Self {
        RawNumber(s.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(s: String) -> Self {
        RawNumber(s)
    }
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four gradient functions the grammar understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GradientKind {
    LinearGradient,
    RepeatingLinearGradient,
    RadialGradient,
    RepeatingRadialGradient,
}

impl GradientKind {
    /// All kinds, in the order the parser tries them.
    pub const ALL: [GradientKind; 4] = [
        GradientKind::LinearGradient,
        GradientKind::RepeatingLinearGradient,
        GradientKind::RadialGradient,
        GradientKind::RepeatingRadialGradient,
    ];

    /// CSS function name without vendor prefix.
    pub const fn name(self) -> &'static str {
        match self {
            GradientKind::LinearGradient => "linear-gradient",
            GradientKind::RepeatingLinearGradient => "repeating-linear-gradient",
            GradientKind::RadialGradient => "radial-gradient",
            GradientKind::RepeatingRadialGradient => "repeating-radial-gradient",
        }
    }

    pub const fn is_radial(self) -> bool {
        matches!(
            self,
            GradientKind::RadialGradient | GradientKind::RepeatingRadialGradient
        )
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Legacy vendor prefix on a gradient function name (`-webkit-linear-gradient`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VendorPrefix {
    Webkit,
    Moz,
    Ms,
    O,
}

impl VendorPrefix {
    pub const ALL: [VendorPrefix; 4] = [
        VendorPrefix::Webkit,
        VendorPrefix::Moz,
        VendorPrefix::Ms,
        VendorPrefix::O,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            VendorPrefix::Webkit => "webkit",
            VendorPrefix::Moz => "moz",
            VendorPrefix::Ms => "ms",
            VendorPrefix::O => "o",
        }
    }
}

/// A single box side, as used after `to` in linear gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

/// Target of a `to <side-or-corner>` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SideOrCorner {
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl SideOrCorner {
    /// Combine two sides into a corner. Sides on the same axis do not form one.
    pub fn corner(first: Side, second: Side) -> Option<Self> {
        match (first, second) {
            (Side::Left, Side::Top) | (Side::Top, Side::Left) => Some(SideOrCorner::LeftTop),
            (Side::Left, Side::Bottom) | (Side::Bottom, Side::Left) => {
                Some(SideOrCorner::LeftBottom)
            }
            (Side::Right, Side::Top) | (Side::Top, Side::Right) => Some(SideOrCorner::RightTop),
            (Side::Right, Side::Bottom) | (Side::Bottom, Side::Right) => {
                Some(SideOrCorner::RightBottom)
            }
            _ => None,
        }
    }

    /// Canonical keyword text, horizontal side first for corners.
    pub const fn as_str(self) -> &'static str {
        match self {
            SideOrCorner::Left => "left",
            SideOrCorner::Right => "right",
            SideOrCorner::Top => "top",
            SideOrCorner::Bottom => "bottom",
            SideOrCorner::LeftTop => "left top",
            SideOrCorner::LeftBottom => "left bottom",
            SideOrCorner::RightTop => "right top",
            SideOrCorner::RightBottom => "right bottom",
        }
    }
}

impl From<Side> for SideOrCorner {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => SideOrCorner::Left,
            Side::Right => SideOrCorner::Right,
            Side::Top => SideOrCorner::Top,
            Side::Bottom => SideOrCorner::Bottom,
        }
    }
}

/// Keyword usable as a position coordinate or color-stop distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PositionKeyword {
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

impl PositionKeyword {
    pub const ALL: [PositionKeyword; 5] = [
        PositionKeyword::Left,
        PositionKeyword::Center,
        PositionKeyword::Right,
        PositionKeyword::Top,
        PositionKeyword::Bottom,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PositionKeyword::Left => "left",
            PositionKeyword::Center => "center",
            PositionKeyword::Right => "right",
            PositionKeyword::Top => "top",
            PositionKeyword::Bottom => "bottom",
        }
    }
}

/// Radial gradient sizing keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ExtentKeyword {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    FarthestCorner,
    Contain,
    Cover,
}

impl ExtentKeyword {
    pub const ALL: [ExtentKeyword; 6] = [
        ExtentKeyword::ClosestSide,
        ExtentKeyword::ClosestCorner,
        ExtentKeyword::FarthestSide,
        ExtentKeyword::FarthestCorner,
        ExtentKeyword::Contain,
        ExtentKeyword::Cover,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ExtentKeyword::ClosestSide => "closest-side",
            ExtentKeyword::ClosestCorner => "closest-corner",
            ExtentKeyword::FarthestSide => "farthest-side",
            ExtentKeyword::FarthestCorner => "farthest-corner",
            ExtentKeyword::Contain => "contain",
            ExtentKeyword::Cover => "cover",
        }
    }
}

/// Radial gradient ending shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    Circle,
    Ellipse,
}

impl Shape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Ellipse => "ellipse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_number_preserves_text() {
        let n = RawNumber::from("5.");
        assert_eq!(n.as_str(), "5.");
        assert_eq!(n.to_string(), "5.");
        assert_eq!(n.to_f64(), Some(5.0));
        assert_eq!(RawNumber::from(".25").to_f64(), Some(0.25));
    }

    #[test]
    fn test_gradient_kind_names() {
        assert_eq!(GradientKind::LinearGradient.name(), "linear-gradient");
        assert_eq!(
            GradientKind::RepeatingRadialGradient.to_string(),
            "repeating-radial-gradient"
        );
        assert!(GradientKind::RadialGradient.is_radial());
        assert!(!GradientKind::RepeatingLinearGradient.is_radial());
    }

    #[test]
    fn test_corner_from_sides() {
        assert_eq!(
            SideOrCorner::corner(Side::Top, Side::Left),
            Some(SideOrCorner::LeftTop)
        );
        assert_eq!(
            SideOrCorner::corner(Side::Right, Side::Bottom),
            Some(SideOrCorner::RightBottom)
        );
        assert_eq!(SideOrCorner::corner(Side::Left, Side::Right), None);
        assert_eq!(SideOrCorner::corner(Side::Top, Side::Top), None);
        assert_eq!(SideOrCorner::RightTop.as_str(), "right top");
    }
}
