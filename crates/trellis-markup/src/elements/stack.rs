use trellis_layout::{Color, CornerRadius, Orientation, Thickness};

use crate::visual::{CommonProps, Element, Visual};

/// A panel that lays children out in a single line, vertical by default.
///
/// # Example
/// ```rust
/// use trellis_markup::prelude::*;
///
/// let toolbar = StackPanel::new()
///     .orientation(Orientation::Horizontal)
///     .spacing(8.0)
///     .padding(4.0)
///     .child(TextBlock::new("Open"))
///     .child(TextBlock::new("Save"));
/// # let _ = toolbar;
/// ```
#[derive(Debug, Default)]
pub struct StackPanel {
    pub common: CommonProps,
    pub orientation: Orientation,
    pub spacing: f64,
    pub padding: Thickness,
    pub corner_radius: CornerRadius,
    pub border_thickness: Thickness,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
    pub children: Vec<Element>,
}

impl StackPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Uniform gap between adjacent children.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    pub fn border_thickness(mut self, thickness: impl Into<Thickness>) -> Self {
        self.border_thickness = thickness.into();
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }
}

impl Visual for StackPanel {
    fn common(&self) -> &CommonProps {
        &self.common
    }
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
