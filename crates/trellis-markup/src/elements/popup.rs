use crate::visual::{CommonProps, Element, Visual};

/// A floating child anchored at an offset from its logical parent.
///
/// Like everything in this crate it only *describes* the popup; opening,
/// dismissal, and hit-testing belong to the consuming toolkit.
#[derive(Debug, Default)]
pub struct Popup {
    pub common: CommonProps,
    pub child: Option<Element>,
    pub is_open: bool,
    pub horizontal_offset: f64,
    pub vertical_offset: f64,
    pub is_light_dismiss_enabled: bool,
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn is_open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    pub fn horizontal_offset(mut self, offset: f64) -> Self {
        self.horizontal_offset = offset;
        self
    }

    pub fn vertical_offset(mut self, offset: f64) -> Self {
        self.vertical_offset = offset;
        self
    }

    /// Both offsets in one call.
    pub fn offset(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_offset = horizontal;
        self.vertical_offset = vertical;
        self
    }

    /// Whether tapping outside the popup closes it.
    pub fn is_light_dismiss_enabled(mut self, enabled: bool) -> Self {
        self.is_light_dismiss_enabled = enabled;
        self
    }
}

impl Visual for Popup {
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
    use crate::elements::border::Border;

    #[test]
    fn closed_by_default() {
        let p = Popup::new();
        assert!(!p.is_open);
        assert!(!p.is_light_dismiss_enabled);
        assert_eq!((p.horizontal_offset, p.vertical_offset), (0.0, 0.0));
    }

    #[test]
    fn offset_sets_both_axes() {
        let p = Popup::new()
            .child(Border::new())
            .offset(24.0, 48.0)
            .is_open(true)
            .is_light_dismiss_enabled(true);
        assert_eq!(p.horizontal_offset, 24.0);
        assert_eq!(p.vertical_offset, 48.0);
        assert!(p.is_open);
        assert!(p.is_light_dismiss_enabled);
    }
}
