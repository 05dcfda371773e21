use crate::dimension::Dimension;

// ── TrackDefinition ───────────────────────────────────────────────────────

/// One row or column track of a grid.
///
/// Carries the sizing mode plus optional hard bounds the layout system
/// clamps the resolved size into. The default track is one star share,
/// unbounded — the same default grid systems give an undeclared track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackDefinition {
    pub size: Dimension,
    pub min: f64,
    pub max: f64,
}

impl TrackDefinition {
    #[inline]
    pub fn new(size: Dimension) -> Self {
        Self { size, min: 0.0, max: f64::INFINITY }
    }

    /// Content-sized track.
    #[inline]
    pub fn auto() -> Self {
        Self::new(Dimension::Auto)
    }

    /// Absolute-size track.
    #[inline]
    pub fn fixed(value: f64) -> Self {
        Self::new(Dimension::Fixed(value))
    }

    /// Proportional track with the given star weight.
    #[inline]
    pub fn star(weight: f64) -> Self {
        Self::new(Dimension::Proportional(weight))
    }

    pub fn size(mut self, size: impl Into<Dimension>) -> Self {
        self.size = size.into();
        self
    }

    /// Lower bound on the resolved track size.
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Upper bound on the resolved track size.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }
}

impl Default for TrackDefinition {
    fn default() -> Self {
        Self::star(1.0)
    }
}

impl From<Dimension> for TrackDefinition {
    fn from(size: Dimension) -> Self {
        Self::new(size)
    }
}

/// Strings go through [`Dimension::parse`], so `"Auto"`, `"2*"`, `"100"`
/// all work and malformed text degrades to an auto track.
impl From<&str> for TrackDefinition {
    fn from(spec: &str) -> Self {
        Self::new(Dimension::parse(spec))
    }
}

impl From<f64> for TrackDefinition {
    fn from(value: f64) -> Self {
        Self::fixed(value)
    }
}
