//! Turns plain text into an HTML page that looks handwritten.
//!
//! Every character is replaced by a pre-drawn glyph image picked at random
//! from one of several interchangeable variant sets. A `#` switches ink
//! color, and spaces and `$` render as empty cells.

pub mod catalog;
pub mod engine;
pub mod preview;
pub mod render;
pub mod script;
