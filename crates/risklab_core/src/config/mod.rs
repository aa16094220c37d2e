//! Input normalization schema for the lenient entry points.
//!
//! Interactive inputs arrive as optional, possibly out-of-range numbers.
//! Rather than scattering clamps and fallbacks across the engines, each
//! engine publishes a [`FieldSpec`] per raw input and resolves through it.
//! The CLI resolves optional flags through the same specs, so documented
//! ranges and actual behavior cannot drift apart.

/// Declarative description of one numeric input field.
///
/// A spec carries the field's name, its default and the closed range the
/// resolved value is clamped into. Specs are `const`-constructible so
/// engines can publish them as associated constants.
///
/// # Examples
/// ```
/// use risklab_core::config::FieldSpec;
///
/// const CONFIDENCE: FieldSpec = FieldSpec::new("confidence", 95.0, 90.0, 99.9);
///
/// // Missing input falls back to the default.
/// assert_eq!(CONFIDENCE.resolve(None), 95.0);
///
/// // Out-of-range input is clamped into the documented range.
/// assert_eq!(CONFIDENCE.resolve(Some(120.0)), 99.9);
///
/// // In-range input passes through unchanged.
/// assert_eq!(CONFIDENCE.resolve(Some(97.5)), 97.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in reports and CLI flags
    pub name: &'static str,
    /// Value substituted for missing or non-finite input
    pub default: f64,
    /// Lower bound of the accepted range
    pub min: f64,
    /// Upper bound of the accepted range
    pub max: f64,
}

impl FieldSpec {
    /// Creates a field spec.
    ///
    /// # Arguments
    /// * `name` - Field name for reports and CLI flags
    /// * `default` - Fallback for missing or non-finite input
    /// * `min` - Lower bound of the accepted range
    /// * `max` - Upper bound of the accepted range
    pub const fn new(name: &'static str, default: f64, min: f64, max: f64) -> Self {
        Self {
            name,
            default,
            min,
            max,
        }
    }

    /// Spec with a lower bound only.
    ///
    /// Shorthand for fields that are floored but have no meaningful cap,
    /// such as horizons and mean-reversion speeds.
    pub const fn at_least(name: &'static str, default: f64, min: f64) -> Self {
        Self::new(name, default, min, f64::INFINITY)
    }

    /// Spec accepting any finite value.
    pub const fn unbounded(name: &'static str, default: f64) -> Self {
        Self::new(name, default, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Resolves a raw optional input into a usable value.
    ///
    /// Missing or non-finite input becomes the default; the result is then
    /// clamped into `[min, max]`. An explicit in-range value always passes
    /// through unchanged.
    ///
    /// # Arguments
    /// * `raw` - The raw input, `None` when the caller did not supply one
    ///
    /// # Returns
    /// A finite value inside the declared range.
    pub fn resolve(&self, raw: Option<f64>) -> f64 {
        let value = match raw {
            Some(value) if value.is_finite() => value,
            _ => self.default,
        };
        value.clamp(self.min, self.max)
    }
}
