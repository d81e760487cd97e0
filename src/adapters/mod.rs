//! Adapter implementations for port traits.
//!
//! - `truetype` — scalable fonts loaded from disk
//! - `bitmap` — built-in fallback font

pub mod bitmap;
pub mod truetype;

pub use bitmap::BitmapFont;
pub use truetype::TrueTypeFont;
