//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and a
//! resource it does not control. Implementations live in `src/adapters/`.

pub mod label_font;

pub use label_font::{FontKind, LabelFont, TextBounds};
