//! Serialization of gradient ASTs back to CSS text.
//!
//! The output is canonical: single spaces, `", "` between list items,
//! lowercase keywords, and numbers exactly as they were written. Parsing
//! the output again yields an equal tree.

use std::fmt::{self, Write};

use swatch_core::{
    Color, ColorStop, Distance, Gradient, Length, LinearOrientation, Orientation, Position,
    RadialOrientation, ShapeStyle,
};

/// Trait for things that can serialize themselves in CSS syntax.
pub trait ToCss {
    /// Serialize `self` in CSS syntax, writing to `dest`.
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write;

    /// Serialize `self` in CSS syntax and return a string.
    #[inline]
    fn to_css_string(&self) -> String {
        let mut s = String::new();
        // Writing into a String is infallible.
        let _ = self.to_css(&mut s);
        s
    }
}

/// Serialize any node (or list of nodes) to CSS text.
///
/// # Example
///
/// ```
/// use swatch_core::{Color, ColorStop, Gradient, GradientKind};
/// use swatch_export::stringify;
///
/// let gradient = Gradient::new(
///     GradientKind::RadialGradient,
///     vec![ColorStop::new(Color::literal("red")), ColorStop::new(Color::hex("00f"))],
/// );
/// assert_eq!(stringify(&gradient), "radial-gradient(red, #00f)");
/// ```
pub fn stringify<T: ToCss + ?Sized>(node: &T) -> String {
    node.to_css_string()
}

/// Write `items` separated by `", "`.
fn write_list<W: Write, T: ToCss>(items: &[T], dest: &mut W) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            dest.write_str(", ")?;
        }
        item.to_css(dest)?;
    }
    Ok(())
}

impl<T: ToCss> ToCss for [T] {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        write_list(self, dest)
    }
}

impl ToCss for Gradient {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        dest.write_str(&self.function_name())?;
        dest.write_char('(')?;
        if let Some(orientation) = &self.orientation {
            orientation.to_css(dest)?;
            dest.write_str(", ")?;
        }
        write_list(&self.color_stops, dest)?;
        dest.write_char(')')
    }
}

impl ToCss for Orientation {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Orientation::Linear(linear) => linear.to_css(dest),
            Orientation::Radial(clauses) => write_list(clauses, dest),
        }
    }
}

impl ToCss for LinearOrientation {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            LinearOrientation::Directional(direction) => {
                dest.write_str("to ")?;
                dest.write_str(direction.as_str())
            }
            LinearOrientation::Angular(degrees) => write!(dest, "{degrees}deg"),
        }
    }
}

impl ToCss for RadialOrientation {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            RadialOrientation::Shape { shape, style, at } => {
                dest.write_str(shape.as_str())?;
                if let Some(style) = style {
                    dest.write_char(' ')?;
                    style.to_css(dest)?;
                }
                write_at(at.as_ref(), dest)
            }
            RadialOrientation::ExtentKeyword { keyword, at } => {
                dest.write_str(keyword.as_str())?;
                write_at(at.as_ref(), dest)
            }
            RadialOrientation::DefaultRadial { at } => at.to_css(dest),
        }
    }
}

fn write_at<W: Write>(at: Option<&Position>, dest: &mut W) -> fmt::Result {
    match at {
        Some(position) => {
            dest.write_str(" at ")?;
            position.to_css(dest)
        }
        None => Ok(()),
    }
}

impl ToCss for ShapeStyle {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            ShapeStyle::Extent(keyword) => dest.write_str(keyword.as_str()),
            ShapeStyle::Size(first, second) => {
                first.to_css(dest)?;
                if let Some(second) = second {
                    dest.write_char(' ')?;
                    second.to_css(dest)?;
                }
                Ok(())
            }
        }
    }
}

impl ToCss for Position {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        let mut axes = self.x.iter().chain(self.y.iter());
        if let Some(first) = axes.next() {
            first.to_css(dest)?;
        }
        for axis in axes {
            dest.write_char(' ')?;
            axis.to_css(dest)?;
        }
        Ok(())
    }
}

impl ToCss for Distance {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Distance::Percentage(value) => write!(dest, "{value}%"),
            Distance::PositionKeyword(keyword) => dest.write_str(keyword.as_str()),
            Distance::Length(length) => length.to_css(dest),
        }
    }
}

impl ToCss for Length {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Length::Px(value) => write!(dest, "{value}px"),
            Length::Em(value) => write!(dest, "{value}em"),
        }
    }
}

impl ToCss for ColorStop {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        self.color.to_css(dest)?;
        if let Some(length) = &self.length {
            dest.write_char(' ')?;
            length.to_css(dest)?;
        }
        Ok(())
    }
}

impl ToCss for Color {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: Write,
    {
        match self {
            Color::Hex(digits) => write!(dest, "#{digits}"),
            Color::Literal(name) => dest.write_str(name),
            Color::Rgb(channels) => {
                dest.write_str("rgb(")?;
                write_channels(channels, dest)
            }
            Color::Rgba(channels) => {
                dest.write_str("rgba(")?;
                write_channels(channels, dest)
            }
        }
    }
}

fn write_channels<W: Write>(channels: &[swatch_core::RawNumber], dest: &mut W) -> fmt::Result {
    for (i, channel) in channels.iter().enumerate() {
        if i > 0 {
            dest.write_str(", ")?;
        }
        dest.write_str(channel.as_str())?;
    }
    dest.write_char(')')
}
