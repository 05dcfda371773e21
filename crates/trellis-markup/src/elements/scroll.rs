use trellis_layout::ScrollBarVisibility;

use crate::visual::{CommonProps, Element, Visual};

/// A scrollable viewport around one content element.
///
/// Defaults follow the common convention: vertical scrolling enabled with a
/// visible bar, horizontal scrolling disabled.
#[derive(Debug)]
pub struct ScrollViewer {
    pub common: CommonProps,
    pub content: Option<Element>,
    pub horizontal_scroll_bar: ScrollBarVisibility,
    pub vertical_scroll_bar: ScrollBarVisibility,
    pub min_zoom_factor: f32,
    pub max_zoom_factor: f32,
}

impl ScrollViewer {
    pub fn new() -> Self {
        Self {
            common: CommonProps::default(),
            content: None,
            horizontal_scroll_bar: ScrollBarVisibility::Disabled,
            vertical_scroll_bar: ScrollBarVisibility::Visible,
            min_zoom_factor: 0.1,
            max_zoom_factor: 10.0,
        }
    }

    pub fn content(mut self, content: impl Into<Element>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn horizontal_scroll_bar(mut self, visibility: ScrollBarVisibility) -> Self {
        self.horizontal_scroll_bar = visibility;
        self
    }

    pub fn vertical_scroll_bar(mut self, visibility: ScrollBarVisibility) -> Self {
        self.vertical_scroll_bar = visibility;
        self
    }

    pub fn min_zoom_factor(mut self, factor: f32) -> Self {
        self.min_zoom_factor = factor;
        self
    }

    pub fn max_zoom_factor(mut self, factor: f32) -> Self {
        self.max_zoom_factor = factor;
        self
    }
}

impl Default for ScrollViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visual for ScrollViewer {
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

    #[test]
    fn vertical_by_default() {
        let s = ScrollViewer::new();
        assert_eq!(s.horizontal_scroll_bar, ScrollBarVisibility::Disabled);
        assert_eq!(s.vertical_scroll_bar, ScrollBarVisibility::Visible);
    }

    #[test]
    fn content_and_bars() {
        let s = ScrollViewer::new()
            .content(TextBlock::new("long document"))
            .horizontal_scroll_bar(ScrollBarVisibility::Auto)
            .vertical_scroll_bar(ScrollBarVisibility::Hidden);
        assert!(s.content.is_some());
        assert_eq!(s.horizontal_scroll_bar, ScrollBarVisibility::Auto);
        assert_eq!(s.vertical_scroll_bar, ScrollBarVisibility::Hidden);
    }
}
