//! Conversion of `rgb()`/`rgba()` strings to hex notation.

use crate::errors::ColorError;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_RGBA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(([0-9]+),\s*([0-9]+),\s*([0-9]+)(?:,\s*([0-9]+\.?[0-9]*))?\)$").unwrap()
});

/// Convert `rgb(r, g, b)` or `rgba(r, g, b, a)` to lowercase `#rrggbb` / `#rrggbbaa`.
///
/// Each channel becomes a zero-padded hex byte. Alpha is scaled by
/// `round(a * 255)`. Channels are not clamped, so out-of-range values
/// produce more than two digits.
///
/// # Example
///
/// ```
/// use swatch_core::rgba_to_hex;
///
/// assert_eq!(rgba_to_hex("rgb(255, 0, 0)").unwrap(), "#ff0000");
/// assert_eq!(rgba_to_hex("rgba(255,0,0,0.5)").unwrap(), "#ff000080");
/// ```
pub fn rgba_to_hex(rgba: &str) -> Result<String, ColorError> {
    let captures = RE_RGBA
        .captures(rgba)
        .ok_or_else(|| ColorError::InputShape {
            value: rgba.to_string(),
        })?;

    let mut hex = String::with_capacity(9);
    hex.push('#');

    for channel in [&captures[1], &captures[2], &captures[3]] {
        let value: u64 = channel.parse().map_err(|_| ColorError::ChannelOverflow {
            value: channel.to_string(),
        })?;
        hex.push_str(&format!("{:02x}", value));
    }

    if let Some(alpha) = captures.get(4) {
        let alpha: f64 = alpha.as_str().parse().map_err(|_| ColorError::InputShape {
            value: rgba.to_string(),
        })?;
        let scaled = (alpha * 255.0).round();
        if !scaled.is_finite() || scaled >= u64::MAX as f64 {
            return Err(ColorError::ChannelOverflow {
                value: captures[4].to_string(),
            });
        }
        hex.push_str(&format!("{:02x}", scaled as u64));
    }

    Ok(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgba_to_hex("rgb(255, 0, 0)").unwrap(), "#ff0000");
        assert_eq!(rgba_to_hex("rgb(1,2,3)").unwrap(), "#010203");
        assert_eq!(rgba_to_hex("rgb(30, 41, 59)").unwrap(), "#1e293b");
    }

    #[test]
    fn test_rgba_scales_alpha() {
        assert_eq!(rgba_to_hex("rgba(255,0,0,0.5)").unwrap(), "#ff000080");
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 1)").unwrap(), "#000000ff");
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 0)").unwrap(), "#00000000");
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 0.2)").unwrap(), "#00000033");
    }

    #[test]
    fn test_out_of_range_channels_are_not_clamped() {
        assert_eq!(rgba_to_hex("rgb(300, 0, 0)").unwrap(), "#12c0000");
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        for input in [
            "#fff",
            "rgb(255 0 0)",
            "rgba(0,0,0,.5)",
            "rgb(1,2)",
            " rgb(1,2,3)",
            "hsl(0, 0%, 0%)",
        ] {
            assert_eq!(
                rgba_to_hex(input),
                Err(ColorError::InputShape {
                    value: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn test_huge_channel_overflows() {
        let err = rgba_to_hex("rgb(99999999999999999999999, 0, 0)").unwrap_err();
        assert!(matches!(err, ColorError::ChannelOverflow { .. }));
    }

    #[test]
    fn test_huge_alpha_overflows() {
        let err = rgba_to_hex("rgba(0,0,0,99999999999999999999999999)").unwrap_err();
        assert_eq!(
            err,
            ColorError::ChannelOverflow {
                value: "99999999999999999999999999".to_string()
            }
        );
        assert_eq!(rgba_to_hex("rgba(0,0,0,2)").unwrap(), "#0000001fe");
    }
}
