//! Options controlling gusset construction.

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigurationError, LoadError};

/// Tunable inputs of the gusset constructor.
///
/// The only knob is a floor on the member size used to size gussets. The 3D printing
/// consumer raises it so plates never fall below the printer's feature size.
///
/// # Examples
/// ```
/// use gussetx::GussetOptions;
///
/// let options = GussetOptions::from_json_str(r#"{ "minimum_member_size_mm": 250.0 }"#)?;
/// assert_eq!(options.minimum_member_size_mm, 250.0);
/// assert_eq!(GussetOptions::default().minimum_member_size_mm, 0.0);
/// # Ok::<(), gussetx::LoadError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GussetOptions {
    /// Smallest member size in millimetres considered when sizing a gusset.
    pub minimum_member_size_mm: f64,
}

impl GussetOptions {
    /// Create validated options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when `minimum_member_size_mm` is negative or not finite.
    pub fn new(minimum_member_size_mm: f64) -> Result<Self, ConfigurationError> {
        let options = Self {
            minimum_member_size_mm,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that the options are in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] describing the first rejected value.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let size = self.minimum_member_size_mm;
        if !size.is_finite() {
            return Err(ConfigurationError::NonFiniteMinimumSize(size));
        }
        if size < 0.0 {
            return Err(ConfigurationError::NegativeMinimumSize(size));
        }
        Ok(())
    }

    /// Parse and validate options from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] for malformed input and [`LoadError::Configuration`]
    /// for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_minimum() {
        let options = GussetOptions::default();
        assert_eq!(options.minimum_member_size_mm, 0.0);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_and_non_finite_sizes() {
        assert_eq!(
            GussetOptions::new(-1.0),
            Err(ConfigurationError::NegativeMinimumSize(-1.0))
        );
        assert!(matches!(
            GussetOptions::new(f64::NAN),
            Err(ConfigurationError::NonFiniteMinimumSize(_))
        ));
        assert_eq!(
            GussetOptions::new(f64::INFINITY),
            Err(ConfigurationError::NonFiniteMinimumSize(f64::INFINITY))
        );
    }

    #[test]
    fn empty_json_object_gives_defaults() {
        let options = GussetOptions::from_json_str("{}").expect("defaults apply");
        assert_eq!(options, GussetOptions::default());
    }

    #[test]
    fn json_values_are_validated() {
        let error = GussetOptions::from_json_str(r#"{ "minimum_member_size_mm": -5 }"#)
            .expect_err("negative size rejected");
        assert!(matches!(
            error,
            LoadError::Configuration(ConfigurationError::NegativeMinimumSize(_))
        ));

        let error = GussetOptions::from_json_str(r#"{ "minimum_size": 5 }"#)
            .expect_err("unknown field rejected");
        assert!(matches!(error, LoadError::Json(_)));
    }
}
