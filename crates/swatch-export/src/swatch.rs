//! Swatch descriptions: the labelled values a color or gradient swatch shows.

use swatch_core::{rgba_to_hex, Color, ColorError, ColorStop, Gradient, GradientKind, SwatchError};

use crate::css::ToCss;

/// A solid color swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSwatch {
    /// Uppercase `#RRGGBB`, or `#RRGGBBAA` for translucent colors
    pub hex: String,
    /// The computed color as given, e.g. `rgb(59, 130, 246)`
    pub rgb: String,
    /// Custom property the color was declared through, e.g. `--brand`
    pub variable: Option<String>,
}

impl ColorSwatch {
    /// Describe a color from its computed `rgb()`/`rgba()` value and the
    /// value it was declared with.
    pub fn describe(computed: &str, declared: &str) -> Result<Self, SwatchError> {
        let hex = rgba_to_hex(computed)?.to_uppercase();

        Ok(Self {
            hex,
            rgb: computed.to_string(),
            variable: css_variable(declared),
        })
    }
}

/// A gradient swatch, one layer per gradient in the `background-image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSwatch {
    pub layers: Vec<SwatchLayer>,
    pub variable: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchLayer {
    pub kind: GradientKind,
    pub stops: Vec<SwatchField>,
}

/// A `label value` pair such as `start: #FF0000 0%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchField {
    pub label: String,
    pub value: String,
}

impl GradientSwatch {
    /// Describe the gradients in a computed `background-image` value.
    ///
    /// Returns `Ok(None)` when the value contains no linear or radial
    /// gradient, e.g. `none` or a `url()`.
    pub fn describe(background_image: &str, declared: &str) -> Result<Option<Self>, SwatchError> {
        if !is_gradient(background_image) {
            return Ok(None);
        }

        let layers = swatch_parser::parse(background_image)?
            .iter()
            .map(describe_layer)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            layers,
            variable: css_variable(declared),
        }))
    }
}

fn describe_layer(gradient: &Gradient) -> Result<SwatchLayer, ColorError> {
    let count = gradient.color_stops.len();
    tracing::trace!(kind = %gradient.kind, stops = count, "describing gradient layer");

    let stops = gradient
        .color_stops
        .iter()
        .enumerate()
        .map(|(index, stop)| -> Result<SwatchField, ColorError> {
            Ok(SwatchField {
                label: stop_label(index, count),
                value: format_stop(stop)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SwatchLayer {
        kind: gradient.kind,
        stops,
    })
}

/// Label for the stop at `index` out of `count`.
///
/// Two and three stop gradients get positional names; longer ones are numbered.
pub fn stop_label(index: usize, count: usize) -> String {
    const TWO: [&str; 2] = ["start", "end"];
    const THREE: [&str; 3] = ["start", "mid", "end"];

    match count {
        2 => format!("{}:", TWO[index.min(1)]),
        3 => format!("{}:", THREE[index.min(2)]),
        _ => format!("{}.", index + 1),
    }
}

/// Display value of a color stop. `rgb()` colors are shown as hex.
pub fn format_stop(stop: &ColorStop) -> Result<String, ColorError> {
    let mut value = match &stop.color {
        Color::Rgb(channels) => {
            let channels: Vec<&str> = channels.iter().map(|c| c.as_str()).collect();
            rgba_to_hex(&format!("rgb({})", channels.join(",")))?
        }
        Color::Rgba(channels) => {
            let channels: Vec<&str> = channels.iter().map(|c| c.as_str()).collect();
            format!("rgba({})", channels.join(", "))
        }
        Color::Hex(digits) => format!("#{digits}"),
        Color::Literal(name) => name.clone(),
    };

    if let Some(length) = &stop.length {
        value.push(' ');
        value.push_str(&length.to_css_string());
    }

    Ok(value)
}

/// Whether a CSS value holds a linear or radial gradient.
pub fn is_gradient(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    value.contains("linear-gradient") || value.contains("radial-gradient")
}

/// The custom property name of a `var(--name)` value.
pub fn css_variable(value: &str) -> Option<String> {
    if !value.contains("var(--") {
        return None;
    }
    Some(value.replace("var(", "").replace(')', ""))
}
