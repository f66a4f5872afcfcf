//! # Heat-Loss Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(...)` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`area`] - Envelope areas from shape and dimensions
//! - [`heat_loss`] - BTU/hr heat loss per surface and in total

pub mod area;
pub mod heat_loss;

pub use area::{Dimensions, Shape, SurfaceAreas};
pub use heat_loss::{HeatLossBreakdown, HeatLossInput, HeatLossResult, Temperature};
