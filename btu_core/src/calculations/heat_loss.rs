//! # Greenhouse Heat-Loss Estimate
//!
//! Estimates the heating capacity (BTU/hr) needed to hold a greenhouse at the
//! desired temperature when it is at its minimum outside temperature.
//!
//! ## Method
//!
//! 1. Resolve every material key against the catalog (unknown key fails)
//! 2. ΔT = desired − minimum, clamped to ≥ 0
//! 3. Per surface: Q = A × ΔT / R, where the wall R includes insulation
//! 4. Total = ΣQ / thermal bridge factor × 1.25
//!
//! ## Rounding
//!
//! Each reported figure is rounded on its own. The total is computed from
//! the unrounded surface losses, not from the rounded ones, so recomputing
//! it from the displayed components can be off by a BTU or two. The
//! unrounded figures are kept in [`HeatLossResult::exact`].
//!
//! ## Example
//!
//! ```rust
//! use btu_core::calculations::heat_loss::{calculate, HeatLossInput};
//! use btu_core::materials::Catalog;
//!
//! let input = HeatLossInput::default();
//! let result = calculate(&input, Catalog::builtin()).unwrap();
//!
//! assert_eq!(result.walls_btu, 14_391);
//! assert_eq!(result.total_btu, 32_122);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::area::{self, Dimensions, Shape, SurfaceAreas};
use crate::equations::heat::{conductive_loss, whole_house_loss, SAFETY_FACTOR};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Catalog, MaterialSelection};
use crate::units::{DegF, SqFt};

/// Inside and outside design temperatures in °F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperature {
    /// Temperature to hold inside the greenhouse
    pub desired_f: f64,
    /// Lowest expected outside temperature
    pub minimum_f: f64,
}

impl Temperature {
    pub fn new(desired_f: f64, minimum_f: f64) -> Self {
        Temperature { desired_f, minimum_f }
    }

    /// Design temperature difference. No heating is needed when the minimum
    /// is at or above the desired temperature, so this never goes negative.
    pub fn difference(&self) -> DegF {
        DegF((self.desired_f - self.minimum_f).max(0.0))
    }

    fn validate(&self) -> CalcResult<()> {
        if !self.desired_f.is_finite() {
            return Err(CalcError::invalid_input(
                "temperature.desired_f",
                self.desired_f.to_string(),
                "Temperature must be a finite number",
            ));
        }
        if !self.minimum_f.is_finite() {
            return Err(CalcError::invalid_input(
                "temperature.minimum_f",
                self.minimum_f.to_string(),
                "Temperature must be a finite number",
            ));
        }
        Ok(())
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::new(75.0, 30.0)
    }
}

/// Everything the estimator needs apart from the catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shape": "rectangular",
///   "dimensions": {
///     "length_ft": 20.0, "width_ft": 12.0, "height_ft": 8.0,
///     "door_width_ft": 3.0, "door_height_ft": 6.5
///   },
///   "materials": {
///     "walls": "twinPoly", "roof": "twinPoly",
///     "doors": "doubleGlass", "frame": "aluminum"
///   },
///   "insulation": "none",
///   "temperature": { "desired_f": 75.0, "minimum_f": 30.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatLossInput {
    pub shape: Shape,
    pub dimensions: Dimensions,
    pub materials: MaterialSelection,
    /// Insulation key; applies to the walls only
    pub insulation: String,
    pub temperature: Temperature,
}

impl Default for HeatLossInput {
    /// 20 × 12 × 8 ft rectangular twin-wall house, glass door, aluminum
    /// frame, no insulation, 75 °F inside against 30 °F outside.
    fn default() -> Self {
        HeatLossInput {
            shape: Shape::Rectangular,
            dimensions: Dimensions::default(),
            materials: MaterialSelection::default(),
            insulation: "none".to_string(),
            temperature: Temperature::default(),
        }
    }
}

impl HeatLossInput {
    /// Validate the non-catalog parts of the input.
    pub fn validate(&self) -> CalcResult<()> {
        self.temperature.validate()
    }
}

/// Unrounded per-surface and total loss in BTU/hr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatLossBreakdown {
    pub walls_btu: f64,
    pub roof_btu: f64,
    pub doors_btu: f64,
    pub total_btu: f64,
}

/// Estimated heat loss.
///
/// ## JSON Example
///
/// ```json
/// {
///   "walls_btu": 14391,
///   "roof_btu": 7013,
///   "doors_btu": 439,
///   "total_btu": 32122,
///   "exact": { "walls_btu": 14391.23, "roof_btu": 7012.99, "doors_btu": 438.75, "total_btu": 32122.02 },
///   "areas": { "walls_sqft": 492.5, "roof_sqft": 240.0, "doors_sqft": 19.5, "door_exceeds_walls": false },
///   "temp_diff_f": 45.0,
///   "wall_r_value": 1.54,
///   "roof_r_value": 1.54,
///   "door_r_value": 2.0,
///   "thermal_bridge": 0.85,
///   "safety_factor": 1.25,
///   "insulation_units": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatLossResult {
    /// Wall loss, rounded (BTU/hr)
    pub walls_btu: u64,
    /// Roof loss, rounded (BTU/hr)
    pub roof_btu: u64,
    /// Door loss, rounded (BTU/hr)
    pub doors_btu: u64,
    /// Required heating capacity incl. frame and safety factors, rounded (BTU/hr)
    pub total_btu: u64,

    /// Unrounded values the rounded figures come from
    pub exact: HeatLossBreakdown,

    /// Areas used
    pub areas: SurfaceAreas,
    /// Design temperature difference used (°F)
    pub temp_diff_f: f64,
    /// Effective wall R-value (covering + insulation)
    pub wall_r_value: f64,
    pub roof_r_value: f64,
    pub door_r_value: f64,
    /// Frame thermal bridge factor
    pub thermal_bridge: f64,
    pub safety_factor: f64,

    /// Insulation units (e.g. bales) to cover the net wall area, when the
    /// chosen insulation has a coverage
    pub insulation_units: Option<u64>,
}

/// Calculate the heat loss of a greenhouse.
///
/// # Arguments
///
/// * `input` - Shape, dimensions, material keys and temperatures
/// * `catalog` - Catalog the material keys are looked up in
///
/// # Returns
///
/// * `Ok(HeatLossResult)` - Rounded and exact loss figures
/// * `Err(CalcError::MaterialNotFound)` - A key is missing from the catalog
/// * `Err(CalcError::InvalidInput)` - Non-finite temperature, non-positive
///   R-value, negative insulation R-value or coverage, or a thermal bridge
///   factor outside (0, 1]
pub fn calculate(input: &HeatLossInput, catalog: &Catalog) -> CalcResult<HeatLossResult> {
    input.validate()?;

    let materials = input.materials.resolve(catalog, &input.insulation)?;
    materials.insulation.validate(&input.insulation)?;
    debug!(
        "materials: walls={} roof={} doors={} frame={} insulation={}",
        materials.walls, materials.roof, materials.doors, materials.frame, materials.insulation
    );

    let wall_r_value = check_r_value("wall_r_value", materials.walls.r_value + materials.insulation.r_value)?;
    let roof_r_value = check_r_value("roof_r_value", materials.roof.r_value)?;
    let door_r_value = check_r_value("door_r_value", materials.doors.r_value)?;
    materials.frame.validate(&input.materials.frame)?;
    let thermal_bridge = materials.frame.thermal_bridge;

    if input.temperature.minimum_f > input.temperature.desired_f {
        warn!(
            "minimum temperature {} °F is above desired {} °F; no heating required",
            input.temperature.minimum_f, input.temperature.desired_f
        );
    }
    let delta_t = input.temperature.difference();

    let areas = area::calculate(&input.dimensions, input.shape);

    let walls = conductive_loss(SqFt(areas.walls_sqft), delta_t, wall_r_value);
    let roof = conductive_loss(SqFt(areas.roof_sqft), delta_t, roof_r_value);
    let doors = conductive_loss(SqFt(areas.doors_sqft), delta_t, door_r_value);
    let total = whole_house_loss(walls + roof + doors, thermal_bridge);

    debug!(
        "heat loss: walls={:.2} roof={:.2} doors={:.2} total={:.2} BTU/hr",
        walls.value(),
        roof.value(),
        doors.value(),
        total.value()
    );

    Ok(HeatLossResult {
        walls_btu: walls.rounded(),
        roof_btu: roof.rounded(),
        doors_btu: doors.rounded(),
        total_btu: total.rounded(),
        exact: HeatLossBreakdown {
            walls_btu: walls.value(),
            roof_btu: roof.value(),
            doors_btu: doors.value(),
            total_btu: total.value(),
        },
        areas,
        temp_diff_f: delta_t.value(),
        wall_r_value,
        roof_r_value,
        door_r_value,
        thermal_bridge,
        safety_factor: SAFETY_FACTOR,
        insulation_units: materials.insulation.units_for(areas.walls_sqft),
    })
}

/// R-values are divisors: reject zero, negative and non-finite values.
fn check_r_value(field: &str, r_value: f64) -> CalcResult<f64> {
    if !r_value.is_finite() || r_value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            r_value.to_string(),
            "R-value must be positive",
        ));
    }
    Ok(r_value)
}
