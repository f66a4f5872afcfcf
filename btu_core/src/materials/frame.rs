//! Structural frame materials and their thermal bridge factors.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A frame material.
///
/// The thermal bridge factor is in (0, 1]; the estimator divides the
/// envelope loss by it, so 1.0 is an ideal frameless enclosure and lower
/// values leak more heat through the framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameMaterial {
    /// Display name (e.g., "Aluminum")
    pub name: String,
    /// Thermal bridge correction factor in (0, 1]
    pub thermal_bridge: f64,
}

impl FrameMaterial {
    pub fn new(name: impl Into<String>, thermal_bridge: f64) -> Self {
        FrameMaterial {
            name: name.into(),
            thermal_bridge,
        }
    }

    pub fn validate(&self, key: &str) -> CalcResult<()> {
        if !(self.thermal_bridge > 0.0 && self.thermal_bridge <= 1.0) {
            return Err(CalcError::invalid_input(
                format!("frames.{}.thermal_bridge", key),
                self.thermal_bridge.to_string(),
                "Thermal bridge factor must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Selection label (frames list by name only)
    pub fn label(&self) -> String {
        self.name.clone()
    }
}

impl std::fmt::Display for FrameMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(FrameMaterial::new("Treated Wood", 0.95).validate("wood").is_ok());
        assert!(FrameMaterial::new("Ideal", 1.0).validate("ideal").is_ok());
        assert!(FrameMaterial::new("None", 0.0).validate("none").is_err());
        assert!(FrameMaterial::new("Over", 1.2).validate("over").is_err());
        assert!(FrameMaterial::new("NaN", f64::NAN).validate("nan").is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(FrameMaterial::new("Galvanized Steel", 0.80).label(), "Galvanized Steel");
    }
}
