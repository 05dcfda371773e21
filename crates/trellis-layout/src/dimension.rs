use std::fmt;

// ── Dimension ─────────────────────────────────────────────────────────────

/// The size of a single grid track (row or column).
///
/// Three sizing modes, matching the usual star-sizing grammar:
///
/// * [`Auto`](Self::Auto) — the track fits its content.
/// * [`Fixed`](Self::Fixed) — an absolute size in layout units, `>= 0`.
/// * [`Proportional`](Self::Proportional) — a share of the space left over
///   after fixed and auto tracks are resolved, weight `> 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Dimension {
    #[default]
    Auto,
    Fixed(f64),
    Proportional(f64),
}

impl Dimension {
    /// Parses a textual size specification.
    ///
    /// Recognized forms, first match wins:
    ///
    /// | Input | Result |
    /// |-------|--------|
    /// | `Auto` (any casing) | `Auto` |
    /// | `*`, `*anything` | `Proportional(1.0)` |
    /// | `2*`, `0.5*` | `Proportional(weight)` |
    /// | `100`, `0` | `Fixed(value)` |
    /// | anything else | `Auto` |
    ///
    /// This function is total: every string maps to a `Dimension`, and
    /// malformed input degrades to `Auto` instead of failing. Layout
    /// configuration should never take the UI down with it; a bad size
    /// string costs one auto-sized track. Fallbacks on non-empty input are
    /// reported through `log::warn!`.
    ///
    /// A leading `*` wins over everything after it, so `"*abc"` is one star
    /// share while `"abc*"` is a failed weight and falls back to `Auto`.
    /// Consuming code relies on that asymmetry; do not reorder the rules.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("auto") {
            return Self::Auto;
        }

        // A bare leading star means "one share", whatever follows it.
        if input.starts_with('*') {
            return Self::Proportional(1.0);
        }

        if input.ends_with('*') {
            // All trailing stars strip at once, so "2**" is still weight 2.
            let prefix = input.trim_end_matches('*');
            if let Ok(weight) = prefix.parse::<f64>() {
                if weight.is_finite() {
                    if weight > 0.0 {
                        return Self::Proportional(weight);
                    }
                    log::warn!("star weight {weight} out of range in {input:?}; using Auto");
                    return Self::Auto;
                }
            }
            // Unparseable weight: fall through to the plain-number rule,
            // which cannot match while the string still ends in '*'.
        }

        if let Ok(value) = input.parse::<f64>() {
            if value.is_finite() {
                if value >= 0.0 {
                    return Self::Fixed(value);
                }
                log::warn!("negative track size {value} in {input:?}; using Auto");
                return Self::Auto;
            }
        }

        if !input.is_empty() {
            log::warn!("unrecognized track size {input:?}; using Auto");
        }
        Self::Auto
    }

    #[inline]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    #[inline]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    #[inline]
    pub fn is_proportional(self) -> bool {
        matches!(self, Self::Proportional(_))
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// A plain number is a fixed size.
impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

/// Canonical text form: `Auto`, `100`, `*` (weight 1), `2*`.
///
/// Feeding the output back through [`Dimension::parse`] yields an equal
/// value.
impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Auto => f.write_str("Auto"),
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Proportional(weight) if weight == 1.0 => f.write_str("*"),
            Self::Proportional(weight) => write!(f, "{weight}*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Dimension {
        Dimension::parse(s)
    }

    // ── keyword rule ──────────────────────────────────────────────────────

    #[test]
    fn auto_exact() {
        assert_eq!(p("Auto"), Dimension::Auto);
    }

    #[test]
    fn auto_is_case_insensitive() {
        assert_eq!(p("auto"), Dimension::Auto);
        assert_eq!(p("AUTO"), Dimension::Auto);
        assert_eq!(p("aUtO"), Dimension::Auto);
    }

    #[test]
    fn auto_with_padding_is_not_the_keyword() {
        // The grammar does not trim; callers own whitespace handling.
        assert_eq!(p(" Auto"), Dimension::Auto); // fallback, not the keyword
        assert_eq!(p("Auto "), Dimension::Auto);
    }

    // ── star rules ────────────────────────────────────────────────────────

    #[test]
    fn bare_star_is_one_share() {
        assert_eq!(p("*"), Dimension::Proportional(1.0));
    }

    #[test]
    fn leading_star_ignores_trailing_text() {
        assert_eq!(p("*abc"), Dimension::Proportional(1.0));
        assert_eq!(p("**"), Dimension::Proportional(1.0));
        assert_eq!(p("*2"), Dimension::Proportional(1.0));
    }

    #[test]
    fn weighted_star() {
        assert_eq!(p("2*"), Dimension::Proportional(2.0));
        assert_eq!(p("0.5*"), Dimension::Proportional(0.5));
        assert_eq!(p("10*"), Dimension::Proportional(10.0));
    }

    #[test]
    fn repeated_trailing_stars_strip_together() {
        assert_eq!(p("2**"), Dimension::Proportional(2.0));
        assert_eq!(p("0.5***"), Dimension::Proportional(0.5));
        assert_eq!(p("abc**"), Dimension::Auto);
    }

    #[test]
    fn trailing_star_with_bad_weight_falls_back() {
        assert_eq!(p("abc*"), Dimension::Auto);
        assert_eq!(p("1 2*"), Dimension::Auto);
    }

    #[test]
    fn nonpositive_star_weight_normalizes_to_auto() {
        assert_eq!(p("0*"), Dimension::Auto);
        assert_eq!(p("-2*"), Dimension::Auto);
    }

    #[test]
    fn nonfinite_star_weight_falls_back() {
        assert_eq!(p("inf*"), Dimension::Auto);
        assert_eq!(p("NaN*"), Dimension::Auto);
    }

    // ── fixed rule ────────────────────────────────────────────────────────

    #[test]
    fn plain_number_is_fixed() {
        assert_eq!(p("100"), Dimension::Fixed(100.0));
        assert_eq!(p("0"), Dimension::Fixed(0.0));
        assert_eq!(p("12.5"), Dimension::Fixed(12.5));
    }

    #[test]
    fn negative_fixed_normalizes_to_auto() {
        assert_eq!(p("-100"), Dimension::Auto);
    }

    #[test]
    fn nonfinite_number_falls_back() {
        assert_eq!(p("inf"), Dimension::Auto);
        assert_eq!(p("NaN"), Dimension::Auto);
    }

    // ── fallback rule ─────────────────────────────────────────────────────

    #[test]
    fn garbage_falls_back_to_auto() {
        assert_eq!(p(""), Dimension::Auto);
        assert_eq!(p("abc"), Dimension::Auto);
        assert_eq!(p("12px"), Dimension::Auto);
        assert_eq!(p("1,5"), Dimension::Auto);
    }

    #[test]
    fn parse_is_total_on_hostile_input() {
        // Never panics, always lands on one of the three variants.
        let long = "9".repeat(4096);
        for s in ["\0", "a\0b*", "∞", "٣", "*\u{202e}", long.as_str()] {
            let _ = p(s);
        }
        assert_eq!(p("\u{feff}100"), Dimension::Auto);
    }

    // ── canonical form ────────────────────────────────────────────────────

    #[test]
    fn display_round_trips() {
        for d in [
            Dimension::Auto,
            Dimension::Fixed(0.0),
            Dimension::Fixed(100.0),
            Dimension::Fixed(12.5),
            Dimension::Proportional(1.0),
            Dimension::Proportional(2.0),
            Dimension::Proportional(0.5),
        ] {
            assert_eq!(p(&d.to_string()), d, "round trip failed for {d}");
        }
    }

    #[test]
    fn display_forms() {
        assert_eq!(Dimension::Auto.to_string(), "Auto");
        assert_eq!(Dimension::Fixed(100.0).to_string(), "100");
        assert_eq!(Dimension::Proportional(1.0).to_string(), "*");
        assert_eq!(Dimension::Proportional(2.0).to_string(), "2*");
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn from_str_and_f64() {
        assert_eq!(Dimension::from("2*"), Dimension::Proportional(2.0));
        assert_eq!(Dimension::from(48.0), Dimension::Fixed(48.0));
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(Dimension::default(), Dimension::Auto);
        assert!(Dimension::default().is_auto());
    }
}
