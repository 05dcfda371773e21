use trellis_layout::{Color, CornerRadius, Thickness, TrackDefinition};

use crate::visual::{CommonProps, Element, Visual};

/// A track-based panel: rows and columns declared up front, children placed
/// by the `grid_row` / `grid_column` props they carry.
///
/// Tracks accept anything convertible to [`TrackDefinition`] — including
/// plain size strings, which go through the dimension grammar:
///
/// ```rust
/// use trellis_markup::prelude::*;
///
/// let g = Grid::new()
///     .rows(["Auto", "*", "2*", "200"])
///     .columns(["200", "*"])
///     .child(TextBlock::new("header").grid_column_span(2))
///     .child(TextBlock::new("nav").grid_row(1))
///     .child(TextBlock::new("content").grid_row(1).grid_column(1));
/// # let _ = g;
/// ```
///
/// A grid with no declared tracks behaves as a single one-star cell.
#[derive(Debug, Default)]
pub struct Grid {
    pub common: CommonProps,
    pub rows: Vec<TrackDefinition>,
    pub columns: Vec<TrackDefinition>,
    pub row_spacing: f64,
    pub column_spacing: f64,
    pub padding: Thickness,
    pub corner_radius: CornerRadius,
    pub border_thickness: Thickness,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
    pub children: Vec<Element>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row track.
    pub fn row(mut self, row: impl Into<TrackDefinition>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Appends one column track.
    pub fn column(mut self, column: impl Into<TrackDefinition>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Appends a batch of row tracks: `.rows(["Auto", "*", "48"])`.
    pub fn rows(mut self, rows: impl IntoIterator<Item = impl Into<TrackDefinition>>) -> Self {
        self.rows.extend(rows.into_iter().map(Into::into));
        self
    }

    /// Appends a batch of column tracks: `.columns(["200", "*"])`.
    pub fn columns(
        mut self,
        columns: impl IntoIterator<Item = impl Into<TrackDefinition>>,
    ) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Uniform gap between adjacent rows.
    pub fn row_spacing(mut self, spacing: f64) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Uniform gap between adjacent columns.
    pub fn column_spacing(mut self, spacing: f64) -> Self {
        self.column_spacing = spacing;
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

impl Visual for Grid {
    fn common(&self) -> &CommonProps {
        &self.common
    }
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
