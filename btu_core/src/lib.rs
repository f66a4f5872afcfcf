//! # btu_core - Greenhouse Heat-Loss Engine
//!
//! `btu_core` estimates how much heating a greenhouse needs, in BTU/hr, from
//! its shape, dimensions, covering/frame/insulation materials and the design
//! temperatures. Inputs and outputs are JSON-serializable so any front end
//! can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function of its input and catalog
//! - **Data-driven catalog**: materials come from an injectable [`materials::Catalog`]
//! - **Rich Errors**: unknown keys and unusable values are reported, never
//!   turned into NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use btu_core::{calculate, Catalog, HeatLossInput, Shape};
//!
//! let input = HeatLossInput {
//!     shape: Shape::Hoop,
//!     insulation: "standardHayBale".to_string(),
//!     ..HeatLossInput::default()
//! };
//!
//! let result = calculate(&input, Catalog::builtin()).unwrap();
//! println!("Total required: {} BTU/hr", result.total_btu);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Area calculator and heat-loss estimator
//! - [`equations`] - The underlying formulas
//! - [`materials`] - Material types and the catalog
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::heat_loss::calculate;
pub use calculations::{Dimensions, HeatLossInput, HeatLossResult, Shape, SurfaceAreas, Temperature};
pub use errors::{CalcError, CalcResult};
pub use materials::{Catalog, CoveringMaterial, FrameMaterial, Insulation, MaterialSelection};
