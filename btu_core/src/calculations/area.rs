//! # Envelope Area Calculation
//!
//! Turns greenhouse dimensions and shape into the wall, roof and door areas
//! the heat-loss estimate needs.
//!
//! ## Assumptions
//!
//! - Dimensions are clamped to zero before use (negative or NaN input → 0)
//! - The door sits in a wall, so its area is subtracted from the walls
//! - Hoop houses: width is the hoop diameter, the roof is a half cylinder
//! - A door larger than the walls leaves zero net wall area, never negative
//!
//! ## Example
//!
//! ```rust
//! use btu_core::calculations::area::{calculate, Dimensions, Shape};
//!
//! let dims = Dimensions::new(20.0, 12.0, 8.0, 3.0, 6.5);
//! let areas = calculate(&dims, Shape::Rectangular);
//!
//! assert_eq!(areas.doors_sqft, 19.5);
//! assert_eq!(areas.walls_sqft, 492.5);
//! assert_eq!(areas.roof_sqft, 240.0);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::equations::area::{
    door_area, hoop_roof_area, hoop_wall_area, rectangular_roof_area, rectangular_wall_area,
};
use crate::units::Feet;

/// Greenhouse cross-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Vertical walls, flat roof footprint
    #[default]
    Rectangular,
    /// Semicircular arch (hoop house)
    Hoop,
}

impl Shape {
    /// All shapes for UI selection
    pub const ALL: [Shape; 2] = [Shape::Rectangular, Shape::Hoop];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "rectangular" | "rect" | "r" => Some(Shape::Rectangular),
            "hoop" | "hoophouse" | "h" => Some(Shape::Hoop),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Shape::Rectangular => "Rectangular",
            Shape::Hoop => "Hoop House",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Greenhouse and door dimensions, all in feet.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 20.0,
///   "width_ft": 12.0,
///   "height_ft": 8.0,
///   "door_width_ft": 3.0,
///   "door_height_ft": 6.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Length along the ridge
    pub length_ft: f64,
    /// Width (hoop diameter for hoop houses)
    pub width_ft: f64,
    /// Wall height
    pub height_ft: f64,
    /// Door width
    pub door_width_ft: f64,
    /// Door height
    pub door_height_ft: f64,
}

impl Dimensions {
    pub fn new(length_ft: f64, width_ft: f64, height_ft: f64, door_width_ft: f64, door_height_ft: f64) -> Self {
        Dimensions {
            length_ft,
            width_ft,
            height_ft,
            door_width_ft,
            door_height_ft,
        }
    }

    /// Copy with every dimension clamped to ≥ 0.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| Feet(v).non_negative().value();
        Dimensions {
            length_ft: clamp(self.length_ft),
            width_ft: clamp(self.width_ft),
            height_ft: clamp(self.height_ft),
            door_width_ft: clamp(self.door_width_ft),
            door_height_ft: clamp(self.door_height_ft),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::new(20.0, 12.0, 8.0, 3.0, 6.5)
    }
}

/// Envelope areas in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceAreas {
    /// Net wall area (gross walls minus door), never negative
    pub walls_sqft: f64,
    /// Roof area
    pub roof_sqft: f64,
    /// Door area
    pub doors_sqft: f64,
    /// Set when the door area exceeded the gross wall area and the net wall
    /// area was clamped to zero
    #[serde(default)]
    pub door_exceeds_walls: bool,
}

/// Calculate envelope areas for a shape.
///
/// Pure and infallible: bad dimensions clamp to zero instead of failing.
pub fn calculate(dimensions: &Dimensions, shape: Shape) -> SurfaceAreas {
    if *dimensions != dimensions.clamped() {
        warn!("negative or non-numeric dimensions clamped to zero: {:?}", dimensions);
    }
    let d = dimensions.clamped();

    let length = Feet(d.length_ft);
    let width = Feet(d.width_ft);
    let height = Feet(d.height_ft);

    let doors = door_area(Feet(d.door_width_ft), Feet(d.door_height_ft));

    let (gross_walls, roof) = match shape {
        Shape::Rectangular => (
            rectangular_wall_area(length, width, height),
            rectangular_roof_area(length, width),
        ),
        Shape::Hoop => (hoop_wall_area(width, height), hoop_roof_area(length, width)),
    };

    let net_walls = gross_walls - doors;
    let door_exceeds_walls = net_walls.value() < 0.0;
    if door_exceeds_walls {
        warn!(
            "door area {:.1} sq ft exceeds wall area {:.1} sq ft; net wall area set to 0",
            doors.value(),
            gross_walls.value()
        );
    }

    SurfaceAreas {
        walls_sqft: net_walls.non_negative().value(),
        roof_sqft: roof.value(),
        doors_sqft: doors.value(),
        door_exceeds_walls,
    }
}
