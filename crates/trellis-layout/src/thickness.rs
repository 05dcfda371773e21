// ── Thickness ─────────────────────────────────────────────────────────────

/// Insets on all four sides (padding, margin, border thickness).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform inset on all four sides.
    #[inline]
    pub const fn all(v: f64) -> Self {
        Self { left: v, top: v, right: v, bottom: v }
    }

    /// Same inset left/right and top/bottom.
    #[inline]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self { left: horizontal, top: vertical, right: horizontal, bottom: vertical }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Thickness {
    fn from(v: f64) -> Self {
        Self::all(v)
    }
}

impl From<(f64, f64)> for Thickness {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::symmetric(horizontal, vertical)
    }
}

impl From<(f64, f64, f64, f64)> for Thickness {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform() {
        let t = Thickness::all(8.0);
        assert_eq!(t, Thickness::new(8.0, 8.0, 8.0, 8.0));
        assert_eq!(t.horizontal(), 16.0);
        assert_eq!(t.vertical(), 16.0);
    }

    #[test]
    fn symmetric_maps_axes() {
        let t = Thickness::symmetric(12.0, 4.0);
        assert_eq!(t.left, 12.0);
        assert_eq!(t.right, 12.0);
        assert_eq!(t.top, 4.0);
        assert_eq!(t.bottom, 4.0);
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Thickness::from(6.0), Thickness::all(6.0));
        assert_eq!(Thickness::from((10.0, 2.0)), Thickness::symmetric(10.0, 2.0));
        assert_eq!(
            Thickness::from((1.0, 2.0, 3.0, 4.0)),
            Thickness::new(1.0, 2.0, 3.0, 4.0)
        );
    }
}
