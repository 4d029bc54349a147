//! Grammar rules for CSS gradient expressions.
//!
//! Recursive descent over a [`Scanner`]. Each `match_*` rule returns
//! `Ok(None)` when its leading token is absent, and an error once it has
//! committed to a partial match. There is no recovery: the first error
//! aborts the whole parse.

use nom::bytes::complete::tag_no_case;

use swatch_core::{ast::*, types::*, ParseError, SyntaxError};

use crate::lexer::*;

/// Parse a `background-image` style list of gradient layers.
///
/// Empty (or all-whitespace) input yields an empty list.
pub fn parse(input: &str) -> Result<Vec<Gradient>, ParseError> {
    tracing::debug!(len = input.len(), "parsing gradient expression");

    let mut scanner = Scanner::new(input);
    let result = match_definitions(&mut scanner);

    match &result {
        Ok(gradients) => {
            tracing::debug!(layers = gradients.len(), "parsed gradient expression")
        }
        Err(err) => {
            tracing::debug!(offset = err.offset(), error = %err.kind, "gradient parse failed")
        }
    }

    result
}

fn match_definitions(s: &mut Scanner<'_>) -> Result<Vec<Gradient>, ParseError> {
    let gradients = s.match_listing(match_definition)?;

    if !s.is_at_end() {
        return Err(s.error(SyntaxError::TrailingInput));
    }

    Ok(gradients)
}

/// Try each gradient function in turn; the first whose name matches wins.
fn match_definition(s: &mut Scanner<'_>) -> Result<Option<Gradient>, ParseError> {
    for kind in GradientKind::ALL {
        if let Some(gradient) = match_gradient(s, kind)? {
            return Ok(Some(gradient));
        }
    }
    Ok(None)
}

fn match_gradient(
    s: &mut Scanner<'_>,
    kind: GradientKind,
) -> Result<Option<Gradient>, ParseError> {
    s.match_call(
        |input| gradient_function(kind, input),
        |s, prefix| {
            let orientation = if kind.is_radial() {
                match_radial_orientations(s)?.map(Orientation::Radial)
            } else {
                match_linear_orientation(s).map(Orientation::Linear)
            };

            // Color stops follow the orientation directly when there is none.
            if orientation.is_some() && !s.punct(',') {
                return Err(s.error(SyntaxError::MissingComma));
            }

            let color_stops = s.match_listing(match_color_stop)?;

            Ok(Gradient {
                kind,
                prefix,
                orientation,
                color_stops,
            })
        },
    )
}

fn match_linear_orientation(s: &mut Scanner<'_>) -> Option<LinearOrientation> {
    if let Some(direction) = s.scan(side_or_corner) {
        return Some(LinearOrientation::Directional(direction));
    }
    s.scan(angle).map(LinearOrientation::Angular)
}

/// One radial clause, optionally followed by a comma and a second one.
fn match_radial_orientations(
    s: &mut Scanner<'_>,
) -> Result<Option<RadialOrientations>, ParseError> {
    let Some(first) = match_radial_orientation(s)? else {
        return Ok(None);
    };

    let mut orientations = RadialOrientations::new();
    orientations.push(first);

    // The comma may instead introduce the color stops.
    let checkpoint = s.checkpoint();
    if s.punct(',') {
        match match_radial_orientation(s)? {
            Some(second) => orientations.push(second),
            None => s.restore(checkpoint),
        }
    }

    Ok(Some(orientations))
}

fn match_radial_orientation(
    s: &mut Scanner<'_>,
) -> Result<Option<RadialOrientation>, ParseError> {
    if let Some((shape, style)) = match_shape(s) {
        let at = match_at_position(s)?;
        return Ok(Some(RadialOrientation::Shape { shape, style, at }));
    }

    if let Some(keyword) = s.scan(extent_keyword) {
        let at = match_at_position(s)?;
        return Ok(Some(RadialOrientation::ExtentKeyword { keyword, at }));
    }

    Ok(match_positioning(s).map(|at| RadialOrientation::DefaultRadial { at }))
}

/// `circle [<length> | <extent>]` or `ellipse [<distance>{1,2} | <extent>]`.
fn match_shape(s: &mut Scanner<'_>) -> Option<(Shape, Option<ShapeStyle>)> {
    if s.scan(|input| keyword("circle", input)).is_some() {
        let style = match s.scan(length) {
            Some(radius) => Some(ShapeStyle::Size(Distance::Length(radius), None)),
            None => s.scan(extent_keyword).map(ShapeStyle::Extent),
        };
        return Some((Shape::Circle, style));
    }

    if s.scan(|input| keyword("ellipse", input)).is_some() {
        let style = match match_distance(s) {
            Some(rx) => Some(ShapeStyle::Size(rx, match_distance(s))),
            None => s.scan(extent_keyword).map(ShapeStyle::Extent),
        };
        return Some((Shape::Ellipse, style));
    }

    None
}

fn match_at_position(s: &mut Scanner<'_>) -> Result<Option<Position>, ParseError> {
    if s.scan(|input| keyword("at", input)).is_none() {
        return Ok(None);
    }

    match match_positioning(s) {
        Some(position) => Ok(Some(position)),
        None => Err(s.error(SyntaxError::MissingPosition)),
    }
}

fn match_positioning(s: &mut Scanner<'_>) -> Option<Position> {
    let x = match_distance(s);
    let y = match_distance(s);
    Position::new(x, y)
}

fn match_distance(s: &mut Scanner<'_>) -> Option<Distance> {
    if let Some(value) = s.scan(percentage) {
        return Some(Distance::Percentage(value));
    }
    if let Some(keyword) = s.scan(position_keyword) {
        return Some(Distance::PositionKeyword(keyword));
    }
    s.scan(length).map(Distance::Length)
}

fn match_color_stop(s: &mut Scanner<'_>) -> Result<Option<ColorStop>, ParseError> {
    let Some(color) = match_color(s)? else {
        return Err(s.error(SyntaxError::ExpectedColor));
    };

    let length = match_distance(s);
    Ok(Some(ColorStop { color, length }))
}

fn match_color(s: &mut Scanner<'_>) -> Result<Option<Color>, ParseError> {
    if let Some(digits) = s.scan(hex_color) {
        return Ok(Some(Color::Hex(digits.to_string())));
    }

    // rgba before rgb, which is its prefix
    if let Some(channels) = match_channels::<4>(s, "rgba")? {
        return Ok(Some(Color::Rgba(channels)));
    }
    if let Some(channels) = match_channels::<3>(s, "rgb")? {
        return Ok(Some(Color::Rgb(channels)));
    }

    Ok(s.scan(literal_color).map(|name| Color::Literal(name.to_string())))
}

/// `<function>(<number>, ...)` with exactly `N` numeric channels.
fn match_channels<const N: usize>(
    s: &mut Scanner<'_>,
    function: &'static str,
) -> Result<Option<[RawNumber; N]>, ParseError> {
    s.match_call(
        |input| tag_no_case(function)(input),
        |s, _| {
            let channels = s.match_listing(|s| Ok(s.scan(number).map(RawNumber::new)))?;
            let found = channels.len();

            <[RawNumber; N]>::try_from(channels).map_err(|_| {
                s.error(SyntaxError::ChannelCount {
                    function,
                    expected: N,
                    found,
                })
            })
        },
    )
}
