//! Procedural renderer for the extension's toolbar icons.
//!
//! Every icon is a vertical gradient clipped to a rounded square, with a white
//! "E" glyph and a small decorative arc underneath it.

pub mod arc;
pub mod glyph;
pub mod gradient;
pub mod icon_gen;
pub mod mask;
pub mod render;
pub mod svg;

pub use glyph::GlyphFont;
pub use render::{render, render_icon, IconStyle};
