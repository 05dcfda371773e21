//! Small closed enums assigned by the fluent element layer.
//!
//! Defaults match the usual retained-UI conventions: elements stretch to
//! fill, text does not wrap, vertical scroll bars appear on demand.

// ── Alignment ─────────────────────────────────────────────────────────────

/// Horizontal placement of an element inside the space its parent allots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Fill the full horizontal extent (default).
    #[default]
    Stretch,
    Left,
    Center,
    Right,
}

/// Vertical placement of an element inside the space its parent allots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Fill the full vertical extent (default).
    #[default]
    Stretch,
    Top,
    Center,
    Bottom,
}

// ── Orientation ───────────────────────────────────────────────────────────

/// Stacking direction for a stack panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

// ── Visibility ────────────────────────────────────────────────────────────

/// Whether an element participates in layout at all.
///
/// A collapsed element is removed from layout entirely, unlike an element
/// with zero opacity, which still occupies its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Collapsed,
}

// ── Text ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrapping {
    #[default]
    NoWrap,
    Wrap,
    /// Wrap, but never split inside a word.
    WrapWholeWords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTrimming {
    #[default]
    None,
    Clip,
    CharacterEllipsis,
    WordEllipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

// ── Scroll bars ───────────────────────────────────────────────────────────

/// Scroll-bar presence policy for one axis of a scroll viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBarVisibility {
    /// Shown only while the content overflows (default).
    #[default]
    Auto,
    Visible,
    Hidden,
    /// No bar and no scrolling on this axis.
    Disabled,
}
