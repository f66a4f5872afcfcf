//! # Heat-Loss Equations
//!
//! The raw formulas behind the estimator, kept apart from input handling so
//! they can be checked against the references one by one.
//!
//! ## Modules
//!
//! - [`area`] - Envelope surface areas for rectangular and hoop houses
//! - [`heat`] - Steady-state conduction and the whole-house correction
//!
//! ## Conventions
//!
//! - Lengths in feet, areas in square feet
//! - Temperatures in °F, heat flow in BTU/hr
//! - R-values in hr·ft²·°F/BTU
//!
//! ## References
//!
//! - ASHRAE Handbook: Fundamentals, Chapter 18 (heat transmission)
//! - NRAES-33, Greenhouse Engineering, Chapter 5 (heat loss)

pub mod area;
pub mod heat;

pub use area::{door_area, hoop_roof_area, hoop_wall_area, rectangular_roof_area, rectangular_wall_area};
pub use heat::{conductive_loss, whole_house_loss, SAFETY_FACTOR};
