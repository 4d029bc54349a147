//! Abstract Syntax Tree types for CSS gradient expressions.
//!
//! Nodes are plain values produced fresh by each parse. Numbers stay as
//! [`RawNumber`] text so that serializing a tree reproduces the source digits.

use crate::types::{
    ExtentKeyword, GradientKind, PositionKeyword, RawNumber, Shape, SideOrCorner, VendorPrefix,
};
use smallvec::SmallVec;

/// One gradient layer, e.g. `linear-gradient(to right, #fff 0%, #000 100%)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gradient {
    pub kind: GradientKind,
    /// Vendor prefix the function name was written with, if any
    pub prefix: Option<VendorPrefix>,
    /// Direction or shape clause preceding the color stops
    pub orientation: Option<Orientation>,
    /// Color stops, never empty for a parsed gradient
    pub color_stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn new(kind: GradientKind, color_stops: Vec<ColorStop>) -> Self {
        Self {
            kind,
            prefix: None,
            orientation: None,
            color_stops,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Function name as written in CSS, including any vendor prefix.
    pub fn function_name(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("-{}-{}", prefix.as_str(), self.kind.name()),
            None => self.kind.name().to_string(),
        }
    }
}

/// Up to two radial clauses, e.g. `closest-side, circle`.
pub type RadialOrientations = SmallVec<[RadialOrientation; 2]>;

/// The clause preceding the color stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Orientation {
    Linear(LinearOrientation),
    Radial(RadialOrientations),
}

/// Direction of a (repeating) linear gradient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum LinearOrientation {
    /// `to right`, `to left top`
    Directional(SideOrCorner),
    /// Angle in degrees, e.g. `45deg`
    Angular(RawNumber),
}

/// Shape, size and position of a (repeating) radial gradient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum RadialOrientation {
    /// `circle 10px at center`, `ellipse farthest-corner`
    Shape {
        shape: Shape,
        style: Option<ShapeStyle>,
        at: Option<Position>,
    },
    /// `closest-side at left top`
    ExtentKeyword {
        keyword: ExtentKeyword,
        at: Option<Position>,
    },
    /// A bare position with no shape or extent, e.g. `center`
    DefaultRadial { at: Position },
}

impl RadialOrientation {
    pub fn at(&self) -> Option<&Position> {
        match self {
            RadialOrientation::Shape { at, .. } | RadialOrientation::ExtentKeyword { at, .. } => {
                at.as_ref()
            }
            RadialOrientation::DefaultRadial { at } => Some(at),
        }
    }
}

/// Size qualifier following `circle` or `ellipse`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum ShapeStyle {
    Extent(ExtentKeyword),
    /// Explicit radius; ellipses may carry a second (vertical) radius
    Size(Distance, Option<Distance>),
}

/// `<x> <y>` coordinates of a radial center.
///
/// `x` is set whenever `y` is: CSS has no way to write a lone vertical
/// coordinate, so `Position { x: None, .. }` does not survive serialization.
/// Build positions with [`Position::new`] to keep that shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Option<Distance>,
    pub y: Option<Distance>,
}

impl Position {
    /// `None` when both axes are absent. A lone `y` moves to `x`.
    pub fn new(x: Option<Distance>, y: Option<Distance>) -> Option<Self> {
        match (x, y) {
            (None, None) => None,
            (None, Some(y)) => Some(Self {
                x: Some(y),
                y: None,
            }),
            (x, y) => Some(Self { x, y }),
        }
    }
}

/// A distance along the gradient line or a position coordinate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "kebab-case")
)]
pub enum Distance {
    Percentage(RawNumber),
    PositionKeyword(PositionKeyword),
    Length(Length),
}

/// An absolute or font-relative length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "unit", content = "value", rename_all = "lowercase")
)]
pub enum Length {
    Px(RawNumber),
    Em(RawNumber),
}

/// A `color [distance]` pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub color: Color,
    pub length: Option<Distance>,
}

impl ColorStop {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            length: None,
        }
    }

    pub fn at(mut self, length: Distance) -> Self {
        self.length = Some(length);
        self
    }
}

/// A color stop's color, kept in its source notation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "lowercase")
)]
pub enum Color {
    /// Hex digits without the leading `#`
    Hex(String),
    /// Named color such as `red` or `transparent`
    Literal(String),
    Rgb([RawNumber; 3]),
    Rgba([RawNumber; 4]),
}

impl Color {
    pub fn hex(digits: impl Into<String>) -> Self {
        Color::Hex(digits.into())
    }

    pub fn literal(name: impl Into<String>) -> Self {
        Color::Literal(name.into())
    }

    pub fn rgb(r: &str, g: &str, b: &str) -> Self {
        Color::Rgb([r.into(), g.into(), b.into()])
    }

    pub fn rgba(r: &str, g: &str, b: &str, a: &str) -> Self {
        Color::Rgba([r.into(), g.into(), b.into(), a.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_name_with_prefix() {
        let mut gradient = Gradient::new(
            GradientKind::RepeatingLinearGradient,
            vec![ColorStop::new(Color::literal("red"))],
        );
        assert_eq!(gradient.function_name(), "repeating-linear-gradient");

        gradient.prefix = Some(VendorPrefix::Webkit);
        assert_eq!(gradient.function_name(), "-webkit-repeating-linear-gradient");
    }

    #[test]
    fn test_position_requires_an_axis() {
        assert!(Position::new(None, None).is_none());

        let pos = Position::new(
            Some(Distance::PositionKeyword(PositionKeyword::Center)),
            None,
        )
        .unwrap();
        assert!(pos.x.is_some());
        assert!(pos.y.is_none());
    }

    #[test]
    fn test_position_lone_y_moves_to_x() {
        let pos = Position::new(None, Some(Distance::Percentage("10".into()))).unwrap();
        assert_eq!(pos.x, Some(Distance::Percentage("10".into())));
        assert_eq!(pos.y, None);
    }

    #[test]
    fn test_radial_orientation_at() {
        let at = Position::new(Some(Distance::Percentage("50".into())), None).unwrap();
        let default = RadialOrientation::DefaultRadial { at: at.clone() };
        assert_eq!(default.at(), Some(&at));

        let shape = RadialOrientation::Shape {
            shape: Shape::Circle,
            style: None,
            at: None,
        };
        assert_eq!(shape.at(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape_mirrors_css_names() {
        let stop = ColorStop::new(Color::hex("fff")).at(Distance::Percentage("0".into()));
        let json = serde_json::to_value(&stop).unwrap();

        assert_eq!(json["color"]["type"], "hex");
        assert_eq!(json["color"]["value"], "fff");
        assert_eq!(json["length"]["type"], "percentage");
        assert_eq!(json["length"]["value"], "0");

        let back: ColorStop = serde_json::from_value(json).unwrap();
        assert_eq!(back, stop);
    }
}
