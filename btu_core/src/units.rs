//! # Unit Types
//!
//! Lightweight newtype wrappers for the units the estimator works in. They
//! serialize as plain numbers so JSON stays clean.
//!
//! ## US Customary Units
//!
//! - Length: feet (ft)
//! - Area: square feet (sq ft)
//! - Temperature difference: degrees Fahrenheit (°F)
//! - Heat flow: British Thermal Units per hour (BTU/hr)
//!
//! ## Example
//!
//! ```rust
//! use btu_core::units::{Feet, SqFt};
//!
//! let length = Feet(20.0);
//! let width = Feet(12.0);
//! let floor: SqFt = length * width;
//! assert_eq!(floor.0, 240.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Temperature difference in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegF(pub f64);

/// Heat flow rate in BTU per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtuPerHr(pub f64);

impl Mul for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

impl Feet {
    /// Clamp to zero; NaN also becomes zero.
    pub fn non_negative(self) -> Self {
        if self.0 > 0.0 {
            self
        } else {
            Feet(0.0)
        }
    }
}

impl SqFt {
    /// Clamp to zero; NaN also becomes zero.
    pub fn non_negative(self) -> Self {
        if self.0 > 0.0 {
            self
        } else {
            SqFt(0.0)
        }
    }
}

impl BtuPerHr {
    /// Round to the nearest whole BTU/hr for display. Negative values become 0.
    pub fn rounded(self) -> u64 {
        if self.0 > 0.0 {
            self.0.round() as u64
        } else {
            0
        }
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(SqFt);
impl_arithmetic!(DegF);
impl_arithmetic!(BtuPerHr);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_times_feet_is_area() {
        let area = Feet(3.0) * Feet(6.5);
        assert_eq!(area, SqFt(19.5));
    }

    #[test]
    fn test_arithmetic() {
        let a = SqFt(10.0);
        let b = SqFt(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Feet(-5.0).non_negative(), Feet(0.0));
        assert_eq!(Feet(f64::NAN).non_negative(), Feet(0.0));
        assert_eq!(Feet(7.5).non_negative(), Feet(7.5));
        assert_eq!(SqFt(-1.0).non_negative(), SqFt(0.0));
    }

    #[test]
    fn test_rounding() {
        assert_eq!(BtuPerHr(438.75).rounded(), 439);
        assert_eq!(BtuPerHr(438.49).rounded(), 438);
        assert_eq!(BtuPerHr(0.5).rounded(), 1);
        assert_eq!(BtuPerHr(-12.0).rounded(), 0);
    }

    #[test]
    fn test_serialization() {
        let area = SqFt(492.5);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "492.5");
    }
}
