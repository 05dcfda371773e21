//! Trellis markup — fluent, declarative UI-tree descriptions.
//!
//! Every element here is inert data: a plain struct with chainable setters,
//! each assigning exactly one property and handing the element back. The
//! crate builds *descriptions* of UI; measuring, arranging, painting, and
//! input belong to whatever toolkit consumes the tree.
//!
//! # Quick start
//!
//! ```rust
//! use trellis_markup::prelude::*;
//!
//! let panel = Border::new()
//!     .padding(12.0)
//!     .corner_radius(8.0)
//!     .background(Color::from_rgb8(0x1a, 0x1a, 0x2a))
//!     .child(
//!         Grid::new()
//!             .rows(["Auto", "*", "48"])
//!             .columns(["200", "*"])
//!             .row_spacing(8.0)
//!             .child(TextBlock::new("Title").font_size(20.0))
//!             .child(TextBlock::new("Body").wrapping(TextWrapping::Wrap).grid_row(1)),
//!     );
//! # let _ = panel;
//! ```
//!
//! # Extending with custom elements
//!
//! Implement [`Visual`] for any type and it gains the shared chainable
//! setters ([`VisualExt`]) and converts into [`Element`], the universal
//! child type:
//!
//! ```rust
//! use trellis_markup::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct Badge {
//!     common: CommonProps,
//! }
//!
//! impl Visual for Badge {
//!     fn common(&self) -> &CommonProps { &self.common }
//!     fn common_mut(&mut self) -> &mut CommonProps { &mut self.common }
//! }
//!
//! let tree = StackPanel::new().child(Badge::default().width(24.0));
//! # let _ = tree;
//! ```

pub mod elements;
pub mod logging;
pub mod visual;

pub use visual::{CommonProps, Element, Visual, VisualExt};

/// Everything needed to describe a UI tree — import this in component files.
pub mod prelude {
    pub use crate::elements::{
        Border, Grid, Popup, ScrollViewer, StackPanel, TextBlock,
    };
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::visual::{CommonProps, Element, Visual, VisualExt};

    // Re-export the value vocabulary everyone needs.
    pub use trellis_layout::{
        Color, CornerRadius, Dimension, HorizontalAlignment, Orientation, ScrollBarVisibility,
        TextAlignment, TextTrimming, TextWrapping, Thickness, TrackDefinition,
        VerticalAlignment, Visibility,
    };
}
