use trellis_layout::{Color, CornerRadius, Thickness};

use crate::visual::{CommonProps, Element, Visual};

/// A single-child decorator: padding, background, border stroke, and corner
/// rounding around one child element.
///
/// All properties are optional — an empty `Border` describes nothing but a
/// slot for its child.
///
/// # Example
/// ```rust
/// use trellis_markup::prelude::*;
///
/// let card = Border::new()
///     .padding((16.0, 8.0))
///     .corner_radius(6.0)
///     .border_thickness(1.0)
///     .border_color(Color::from_rgb8(0x30, 0x30, 0x38))
///     .background(Color::from_rgb8(0x1a, 0x1a, 0x22))
///     .child(TextBlock::new("hello"));
/// # let _ = card;
/// ```
#[derive(Debug, Default)]
pub struct Border {
    pub common: CommonProps,
    pub child: Option<Element>,
    pub padding: Thickness,
    pub corner_radius: CornerRadius,
    pub border_thickness: Thickness,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
}

impl Border {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Space between the border and its child. Accepts a [`Thickness`], a
    /// uniform `f64`, a `(horizontal, vertical)` pair, or a full
    /// `(left, top, right, bottom)` tuple.
    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Corner rounding. Accepts a [`CornerRadius`] or a uniform `f64`.
    pub fn corner_radius(mut self, radius: impl Into<CornerRadius>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    /// Stroke width per side, same conversions as [`padding`](Self::padding).
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
}

impl Visual for Border {
    fn common(&self) -> &CommonProps {
        &self.common
    }
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::text::TextBlock;
    use crate::visual::VisualExt as _;

    #[test]
    fn decorations_assign_one_property_each() {
        let b = Border::new()
            .padding(12.0)
            .corner_radius(CornerRadius::top_bottom(8.0, 0.0))
            .border_thickness((1.0, 2.0))
            .background(Color::from_rgb8(10, 20, 30));

        assert_eq!(b.padding, Thickness::all(12.0));
        assert_eq!(b.corner_radius, CornerRadius::top_bottom(8.0, 0.0));
        assert_eq!(b.border_thickness, Thickness::symmetric(1.0, 2.0));
        assert_eq!(b.background, Some(Color::from_rgb8(10, 20, 30)));
        assert_eq!(b.border_color, None);
        assert!(b.child.is_none());
    }

    #[test]
    fn child_slot_holds_any_visual() {
        let b = Border::new().child(TextBlock::new("inside").width(80.0));
        let child = b.child.expect("child was set");
        assert_eq!(child.common().width, Some(80.0));
    }
}
