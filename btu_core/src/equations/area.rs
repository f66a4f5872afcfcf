//! # Envelope Area Formulas
//!
//! Gross surface areas of the two supported greenhouse shapes. Door area is
//! computed separately and subtracted by the caller.
//!
//! ## Notation
//!
//! - `L` = length along the ridge
//! - `W` = width (hoop diameter for hoop houses)
//! - `H` = wall / end-wall height

use std::f64::consts::PI;

use crate::units::{Feet, SqFt};

// =============================================================================
// DOORS
// =============================================================================

/// Door area
///
/// # Formula
/// A_door = w_door × h_door
///
/// # Example
/// ```rust
/// use btu_core::equations::area::door_area;
/// use btu_core::units::Feet;
///
/// assert_eq!(door_area(Feet(3.0), Feet(6.5)).0, 19.5);
/// ```
#[inline]
pub fn door_area(width: Feet, height: Feet) -> SqFt {
    width * height
}

// =============================================================================
// RECTANGULAR HOUSE
// Four vertical walls and a flat (projected) roof
// =============================================================================

/// Gross wall area of a rectangular house (two side walls + two end walls)
///
/// ```text
///        L
///   ┌─────────┐
///   │         │ W      walls = 2·(L·H) + 2·(W·H)
///   └─────────┘
/// ```
///
/// # Formula
/// A_walls = 2·(L·H + W·H)
#[inline]
pub fn rectangular_wall_area(length: Feet, width: Feet, height: Feet) -> SqFt {
    (length * height + width * height) * 2.0
}

/// Roof area of a rectangular house, taken as the footprint
///
/// # Formula
/// A_roof = L·W
#[inline]
pub fn rectangular_roof_area(length: Feet, width: Feet) -> SqFt {
    length * width
}

// =============================================================================
// HOOP HOUSE
// Semicircular arch along the length, two end walls
// =============================================================================

/// Gross end-wall area of a hoop house
///
/// The end walls are treated as W × H rectangles.
///
/// # Formula
/// A_walls = 2·(W·H)
#[inline]
pub fn hoop_wall_area(width: Feet, height: Feet) -> SqFt {
    (width * height) * 2.0
}

/// Arched roof area of a hoop house
///
/// ```text
///      ╭───╮
///    ╭╯     ╰╮      arc = π·W/2 (half circumference)
///    │   W   │
/// ```
///
/// # Formula
/// A_roof = L·(π·W/2)
///
/// # Example
/// ```rust
/// use btu_core::equations::area::hoop_roof_area;
/// use btu_core::units::Feet;
///
/// let roof = hoop_roof_area(Feet(20.0), Feet(12.0));
/// assert!((roof.0 - 376.99).abs() < 0.01);
/// ```
#[inline]
pub fn hoop_roof_area(length: Feet, width: Feet) -> SqFt {
    let arc_length = Feet(PI * width.value() / 2.0);
    length * arc_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_door_area() {
        assert_relative_eq!(door_area(Feet(3.0), Feet(6.5)).0, 19.5);
    }

    #[test]
    fn test_rectangular_areas() {
        // 2·(20·8) + 2·(12·8) = 512
        assert_relative_eq!(rectangular_wall_area(Feet(20.0), Feet(12.0), Feet(8.0)).0, 512.0);
        assert_relative_eq!(rectangular_roof_area(Feet(20.0), Feet(12.0)).0, 240.0);
    }

    #[test]
    fn test_hoop_areas() {
        assert_relative_eq!(hoop_wall_area(Feet(12.0), Feet(8.0)).0, 192.0);
        assert_relative_eq!(hoop_roof_area(Feet(20.0), Feet(12.0)).0, 120.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_width_hoop_has_no_roof() {
        assert_eq!(hoop_roof_area(Feet(20.0), Feet(0.0)).0, 0.0);
    }
}
