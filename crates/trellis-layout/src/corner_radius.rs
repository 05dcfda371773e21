// ── CornerRadius ──────────────────────────────────────────────────────────

/// Per-corner radii for a rounded rectangle.
///
/// Corners follow CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Negative values are treated as zero by consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadius {
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f64) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// One radius for both top corners, another for both bottom corners.
    #[inline]
    pub const fn top_bottom(top: f64, bottom: f64) -> Self {
        Self { top_left: top, top_right: top, bottom_right: bottom, bottom_left: bottom }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }
}

impl From<f64> for CornerRadius {
    fn from(r: f64) -> Self {
        Self::all(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform() {
        assert_eq!(CornerRadius::all(4.0), CornerRadius::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn top_bottom_split() {
        let r = CornerRadius::top_bottom(8.0, 2.0);
        assert_eq!(r.top_left, 8.0);
        assert_eq!(r.top_right, 8.0);
        assert_eq!(r.bottom_right, 2.0);
        assert_eq!(r.bottom_left, 2.0);
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(CornerRadius::zero(), CornerRadius::default());
    }
}
