//! Wall insulation options (hay bales and the like).
//!
//! Insulation R-value adds to the wall covering only; roof and doors are
//! never insulated.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// An insulation option.
///
/// ## JSON Example
///
/// ```json
/// { "name": "Large Hay Bale (4'×4'×8')", "r_value": 2.8, "coverage_sqft": 32.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insulation {
    /// Display name
    pub name: String,
    /// Added thermal resistance, zero for "none"
    pub r_value: f64,
    /// Wall face area covered by one unit (e.g. one bale), in sq ft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_sqft: Option<f64>,
}

impl Insulation {
    pub fn new(name: impl Into<String>, r_value: f64) -> Self {
        Insulation {
            name: name.into(),
            r_value,
            coverage_sqft: None,
        }
    }

    /// Set the per-unit coverage
    pub fn with_coverage(mut self, coverage_sqft: f64) -> Self {
        self.coverage_sqft = Some(coverage_sqft);
        self
    }

    pub fn validate(&self, key: &str) -> CalcResult<()> {
        if !self.r_value.is_finite() || self.r_value < 0.0 {
            return Err(CalcError::invalid_input(
                format!("insulations.{}.r_value", key),
                self.r_value.to_string(),
                "Insulation R-value cannot be negative",
            ));
        }
        if let Some(coverage) = self.coverage_sqft {
            if !coverage.is_finite() || coverage <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("insulations.{}.coverage_sqft", key),
                    coverage.to_string(),
                    "Coverage must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Number of units needed to cover `wall_sqft`, if this option has a
    /// usable (positive) coverage.
    pub fn units_for(&self, wall_sqft: f64) -> Option<u64> {
        let coverage = self.coverage_sqft.filter(|c| c.is_finite() && *c > 0.0)?;
        if wall_sqft <= 0.0 {
            return Some(0);
        }
        Some((wall_sqft / coverage).ceil() as u64)
    }

    /// Selection label; the R-value is only shown when it is non-zero.
    pub fn label(&self) -> String {
        if self.r_value > 0.0 {
            format!("{} (R-{})", self.name, self.r_value)
        } else {
            self.name.clone()
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_hides_zero_r_value() {
        assert_eq!(Insulation::new("None", 0.0).label(), "None");
        assert_eq!(Insulation::new("Straw", 2.5).label(), "Straw (R-2.5)");
    }

    #[test]
    fn test_units_for() {
        let bale = Insulation::new("Standard Hay Bale", 2.5).with_coverage(4.5);
        assert_eq!(bale.units_for(492.5), Some(110));
        assert_eq!(bale.units_for(9.0), Some(2));
        assert_eq!(bale.units_for(0.0), Some(0));
        assert_eq!(Insulation::new("None", 0.0).units_for(492.5), None);
        assert_eq!(Insulation::new("Bale", 2.5).with_coverage(0.0).units_for(492.5), None);
    }

    #[test]
    fn test_validate() {
        assert!(Insulation::new("None", 0.0).validate("none").is_ok());
        assert!(Insulation::new("Bad", -0.5).validate("bad").is_err());
        assert!(Insulation::new("Bale", 2.5).with_coverage(0.0).validate("bale").is_err());
    }

    #[test]
    fn test_coverage_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&Insulation::new("None", 0.0)).unwrap();
        assert!(!json.contains("coverage_sqft"));
        let parsed: Insulation = serde_json::from_str(r#"{"name":"None","r_value":0.0}"#).unwrap();
        assert_eq!(parsed.coverage_sqft, None);
    }
}
