//! Layout value types for the **trellis** fluent markup crates.
//!
//! This crate is kept intentionally small so editors, linters, and other
//! tooling can consume the value vocabulary without pulling in the element
//! layer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dimension`] | `Dimension` and its string grammar (`"Auto"`, `"*"`, `"2*"`, `"100"`) |
//! | [`thickness`] | `Thickness`, four-sided insets |
//! | [`corner_radius`] | `CornerRadius`, per-corner rounding |
//! | [`color`] | `Color`, straight-alpha RGBA |
//! | [`enums`] | alignment, orientation, visibility, text, scroll-bar enums |
//! | [`track`] | `TrackDefinition`, a grid row/column track |
//!
//! # Quick start
//!
//! ```rust
//! use trellis_layout::{Dimension, TrackDefinition};
//!
//! assert_eq!(Dimension::parse("2*"), Dimension::Proportional(2.0));
//! assert_eq!(Dimension::parse("Auto"), Dimension::Auto);
//!
//! let track = TrackDefinition::from("100").min(40.0);
//! assert_eq!(track.size, Dimension::Fixed(100.0));
//! ```

pub mod color;
pub mod corner_radius;
pub mod dimension;
pub mod enums;
pub mod thickness;
pub mod track;

pub use color::Color;
pub use corner_radius::CornerRadius;
pub use dimension::Dimension;
pub use enums::{
    HorizontalAlignment, Orientation, ScrollBarVisibility, TextAlignment, TextTrimming,
    TextWrapping, VerticalAlignment, Visibility,
};
pub use thickness::Thickness;
pub use track::TrackDefinition;
