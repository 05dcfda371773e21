//! Concrete element descriptions.
//!
//! Each element is a struct with public fields (they are inert data) plus
//! fluent setters; every setter assigns one property and returns the
//! element for chaining.

pub mod border;
pub mod grid;
pub mod popup;
pub mod scroll;
pub mod stack;
pub mod text;

pub use border::Border;
pub use grid::Grid;
pub use popup::Popup;
pub use scroll::ScrollViewer;
pub use stack::StackPanel;
pub use text::TextBlock;
