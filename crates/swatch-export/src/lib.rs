//! Output for parsed gradients.
//!
//! - CSS serialization of any AST node through [`ToCss`]
//! - Swatch descriptions (hex/rgb/var fields, labelled color stops),
//!   behind the default `swatch` feature

pub mod css;

#[cfg(feature = "swatch")]
pub mod swatch;

// Re-export commonly used items
pub use css::{stringify, ToCss};

#[cfg(feature = "swatch")]
pub use swatch::{ColorSwatch, GradientSwatch, SwatchField, SwatchLayer};
