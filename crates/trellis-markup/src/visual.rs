use std::fmt;

use trellis_layout::{HorizontalAlignment, Thickness, VerticalAlignment, Visibility};

// ── CommonProps ───────────────────────────────────────────────────────────

/// Properties every element carries, whatever its concrete type.
///
/// `grid_row` / `grid_column` / the spans only matter when the element is a
/// direct child of a [`Grid`](crate::elements::Grid); other parents ignore
/// them. They live here rather than on a wrapper so any element can be
/// placed in a grid cell without ceremony.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonProps {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    pub margin: Thickness,
    pub h_align: HorizontalAlignment,
    pub v_align: VerticalAlignment,
    pub opacity: f64,
    pub visibility: Visibility,
    pub grid_row: usize,
    pub grid_column: usize,
    pub grid_row_span: usize,
    pub grid_column_span: usize,
}

impl Default for CommonProps {
    fn default() -> Self {
        Self {
            name: None,
            width: None,
            height: None,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
            margin: Thickness::default(),
            h_align: HorizontalAlignment::default(),
            v_align: VerticalAlignment::default(),
            opacity: 1.0,
            visibility: Visibility::default(),
            grid_row: 0,
            grid_column: 0,
            grid_row_span: 1,
            grid_column_span: 1,
        }
    }
}

// ── Visual trait ──────────────────────────────────────────────────────────

/// The one trait every element description implements.
///
/// It only exposes the shared property block; all behavior (measure, paint,
/// input) is deliberately absent — consumers of the tree own that.
pub trait Visual: fmt::Debug + 'static {
    fn common(&self) -> &CommonProps;
    fn common_mut(&mut self) -> &mut CommonProps;
}

// ── VisualExt ─────────────────────────────────────────────────────────────

/// Chainable setters shared by every element.
///
/// Blanket-implemented for all [`Visual`] types, so a concrete element keeps
/// its concrete type through the chain:
///
/// ```rust
/// use trellis_markup::prelude::*;
///
/// let text: TextBlock = TextBlock::new("hi").width(120.0).opacity(0.8);
/// # let _ = text;
/// ```
pub trait VisualExt: Visual + Sized {
    fn name(mut self, name: impl Into<String>) -> Self {
        self.common_mut().name = Some(name.into());
        self
    }

    fn width(mut self, v: f64) -> Self {
        self.common_mut().width = Some(v);
        self
    }

    fn height(mut self, v: f64) -> Self {
        self.common_mut().height = Some(v);
        self
    }

    fn min_width(mut self, v: f64) -> Self {
        self.common_mut().min_width = Some(v);
        self
    }

    fn min_height(mut self, v: f64) -> Self {
        self.common_mut().min_height = Some(v);
        self
    }

    fn max_width(mut self, v: f64) -> Self {
        self.common_mut().max_width = Some(v);
        self
    }

    fn max_height(mut self, v: f64) -> Self {
        self.common_mut().max_height = Some(v);
        self
    }

    /// Accepts a [`Thickness`] or any of its conversions: a uniform `f64`,
    /// a `(horizontal, vertical)` pair, or a `(left, top, right, bottom)`
    /// tuple.
    fn margin(mut self, margin: impl Into<Thickness>) -> Self {
        self.common_mut().margin = margin.into();
        self
    }

    fn h_align(mut self, align: HorizontalAlignment) -> Self {
        self.common_mut().h_align = align;
        self
    }

    fn v_align(mut self, align: VerticalAlignment) -> Self {
        self.common_mut().v_align = align;
        self
    }

    /// Both alignments in one call.
    fn alignment(mut self, vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        self.common_mut().v_align = vertical;
        self.common_mut().h_align = horizontal;
        self
    }

    fn opacity(mut self, opacity: f64) -> Self {
        self.common_mut().opacity = opacity;
        self
    }

    fn visibility(mut self, visibility: Visibility) -> Self {
        self.common_mut().visibility = visibility;
        self
    }

    /// Grid row this element occupies when parented by a grid.
    fn grid_row(mut self, row: usize) -> Self {
        self.common_mut().grid_row = row;
        self
    }

    /// Grid column this element occupies when parented by a grid.
    fn grid_column(mut self, column: usize) -> Self {
        self.common_mut().grid_column = column;
        self
    }

    fn grid_row_span(mut self, span: usize) -> Self {
        self.common_mut().grid_row_span = span;
        self
    }

    fn grid_column_span(mut self, span: usize) -> Self {
        self.common_mut().grid_column_span = span;
        self
    }
}

impl<T: Visual> VisualExt for T {}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased element — the universal child type for containers.
///
/// Any `Visual` converts to `Element` via `From` / `Into`, so container
/// setters take `impl Into<Element>` and callers never box by hand.
pub struct Element(Box<dyn Visual>);

impl Element {
    pub fn new<V: Visual>(v: V) -> Self {
        Self(Box::new(v))
    }

    #[inline]
    pub fn common(&self) -> &CommonProps {
        self.0.common()
    }

    #[inline]
    pub fn common_mut(&mut self) -> &mut CommonProps {
        self.0.common_mut()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<V: Visual> From<V> for Element {
    fn from(v: V) -> Self {
        Self::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_layout::HorizontalAlignment as H;
    use trellis_layout::VerticalAlignment as V;

    #[derive(Debug, Default)]
    struct Probe {
        common: CommonProps,
    }

    impl Visual for Probe {
        fn common(&self) -> &CommonProps {
            &self.common
        }
        fn common_mut(&mut self) -> &mut CommonProps {
            &mut self.common
        }
    }

    #[test]
    fn defaults() {
        let p = Probe::default();
        assert_eq!(p.common().opacity, 1.0);
        assert_eq!(p.common().grid_row_span, 1);
        assert_eq!(p.common().grid_column_span, 1);
        assert_eq!(p.common().h_align, H::Stretch);
        assert_eq!(p.common().v_align, V::Stretch);
        assert_eq!(p.common().visibility, Visibility::Visible);
    }

    #[test]
    fn setters_chain_and_keep_concrete_type() {
        let p: Probe = Probe::default()
            .name("sidebar")
            .width(200.0)
            .height(40.0)
            .margin((8.0, 4.0))
            .alignment(V::Top, H::Left)
            .opacity(0.5)
            .grid_row(2)
            .grid_column(1)
            .grid_column_span(3);

        let c = p.common();
        assert_eq!(c.name.as_deref(), Some("sidebar"));
        assert_eq!(c.width, Some(200.0));
        assert_eq!(c.height, Some(40.0));
        assert_eq!(c.margin, Thickness::symmetric(8.0, 4.0));
        assert_eq!(c.v_align, V::Top);
        assert_eq!(c.h_align, H::Left);
        assert_eq!(c.opacity, 0.5);
        assert_eq!(c.grid_row, 2);
        assert_eq!(c.grid_column, 1);
        assert_eq!(c.grid_column_span, 3);
    }

    #[test]
    fn element_erases_but_keeps_common_props() {
        let e: Element = Probe::default().width(64.0).into();
        assert_eq!(e.common().width, Some(64.0));
    }
}
