//! Core types, AST definitions, and utilities for the swatch engine.
//!
//! This crate provides the foundational types shared by the parser and the
//! serializer:
//! - AST node types for parsed CSS gradient expressions
//! - Value types (raw numerals, keywords, vendor prefixes)
//! - The rgb/rgba to hex color codec
//! - Error types

pub mod ast;
pub mod color;
pub mod errors;
pub mod types;

pub use ast::*;
pub use color::rgba_to_hex;
pub use errors::*;
pub use types::*;
