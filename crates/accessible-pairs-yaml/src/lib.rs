//! Paint-style document loader for accessible-pairs.
//!
//! Reads a design library's exported paint styles (YAML or JSON) and turns
//! them into [`accessible_pairs_core::PaintStyle`]s for the contrast engine.

mod document;
mod error;

pub use document::{
    ColorValue, LoadedStyles, PaintEntry, PaintValue, RejectedStyle, StyleDocument, StyleEntry,
};
pub use error::ParseError;
