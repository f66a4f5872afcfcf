//! Glazing and film coverings for walls, roof and doors.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A covering material and its thermal resistance.
///
/// ## JSON Example
///
/// ```json
/// { "name": "Twin-Wall Polycarbonate", "r_value": 1.54 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveringMaterial {
    /// Display name (e.g., "Double Glass")
    pub name: String,
    /// Thermal resistance R (hr·ft²·°F/BTU), must be positive
    pub r_value: f64,
}

impl CoveringMaterial {
    pub fn new(name: impl Into<String>, r_value: f64) -> Self {
        CoveringMaterial {
            name: name.into(),
            r_value,
        }
    }

    /// Coverings are used as divisors, so R must be finite and positive.
    pub fn validate(&self, key: &str) -> CalcResult<()> {
        if !self.r_value.is_finite() || self.r_value <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("coverings.{}.r_value", key),
                self.r_value.to_string(),
                "Covering R-value must be positive",
            ));
        }
        Ok(())
    }

    /// Selection label, e.g. "Single Glass (R-0.9)"
    pub fn label(&self) -> String {
        format!("{} (R-{})", self.name, self.r_value)
    }
}

impl std::fmt::Display for CoveringMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(CoveringMaterial::new("Single Glass", 0.9).label(), "Single Glass (R-0.9)");
        assert_eq!(CoveringMaterial::new("Double Glass", 2.0).label(), "Double Glass (R-2)");
    }

    #[test]
    fn test_validate_rejects_zero_and_negative() {
        assert!(CoveringMaterial::new("Film", 0.83).validate("polyFilm").is_ok());
        assert!(CoveringMaterial::new("Air", 0.0).validate("air").is_err());
        assert!(CoveringMaterial::new("Bad", -1.0).validate("bad").is_err());
        assert!(CoveringMaterial::new("Bad", f64::NAN).validate("bad").is_err());
    }
}
