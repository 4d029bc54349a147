//! Parser for CSS gradient expressions.
//!
//! This crate turns a `background-image` value such as
//! `linear-gradient(to right, #fff 0%, #000 100%)` into the AST defined in
//! `swatch-core`. Token recognizers are built on `nom`; the grammar itself is
//! a hand-written recursive descent over a [`lexer::Scanner`].

pub mod lexer;
mod grammar;

pub use grammar::parse;

use swatch_core::{Gradient, ParseError};

/// Parse a comma-separated list of gradients from source text.
///
/// # Example
///
/// ```
/// use swatch_parser::parse_gradients;
///
/// let layers = parse_gradients("linear-gradient(to right, #fff 0%, #000 100%)").unwrap();
/// assert_eq!(layers.len(), 1);
/// assert_eq!(layers[0].color_stops.len(), 2);
/// ```
pub fn parse_gradients(source: &str) -> Result<Vec<Gradient>, ParseError> {
    parse(source)
}
