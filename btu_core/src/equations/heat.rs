//! # Heat Transmission Formulas
//!
//! Steady-state conduction through one envelope surface, and the
//! whole-house correction for framing and sizing margin.

use crate::units::{BtuPerHr, DegF, SqFt};

/// Sizing margin applied to the whole-house total (25%)
pub const SAFETY_FACTOR: f64 = 1.25;

/// Conductive heat loss through one surface
///
/// # Formula
/// Q = A × ΔT / R
///
/// # Arguments
/// * `area` - Surface area
/// * `delta_t` - Inside minus outside temperature
/// * `r_value` - Thermal resistance of the surface, must be > 0
///
/// # Example
/// ```rust
/// use btu_core::equations::heat::conductive_loss;
/// use btu_core::units::{DegF, SqFt};
///
/// // 19.5 sq ft of double glass (R-2) at 45 °F difference
/// let q = conductive_loss(SqFt(19.5), DegF(45.0), 2.0);
/// assert!((q.0 - 438.75).abs() < 1e-9);
/// ```
#[inline]
pub fn conductive_loss(area: SqFt, delta_t: DegF, r_value: f64) -> BtuPerHr {
    BtuPerHr(area.value() * delta_t.value() / r_value)
}

/// Whole-house heat loss from the summed surface losses
///
/// Dividing by the thermal bridge factor (0, 1] inflates the envelope loss
/// for heat leaking through the frame; the safety factor adds sizing margin.
///
/// # Formula
/// Q_total = ΣQ / f_bridge × 1.25
#[inline]
pub fn whole_house_loss(envelope: BtuPerHr, thermal_bridge: f64) -> BtuPerHr {
    envelope / thermal_bridge * SAFETY_FACTOR
}
