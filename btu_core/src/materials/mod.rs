//! # Materials Catalog
//!
//! Material definitions for the greenhouse envelope and the catalog that
//! holds them.
//!
//! ## Material Types
//!
//! - **Coverings**: glazing and films for walls, roof and doors (R-value)
//! - **Frames**: structural framing (thermal bridge factor)
//! - **Insulations**: extra wall insulation such as hay bales (R-value, coverage)
//!
//! ## Example
//!
//! ```rust
//! use btu_core::materials::{Catalog, CoveringMaterial};
//!
//! let catalog = Catalog::builtin()
//!     .clone()
//!     .with_covering("tripleGlass", CoveringMaterial::new("Triple Glass", 3.0));
//!
//! let walls = catalog.covering("tripleGlass").unwrap();
//! println!("{} has R-{}", walls.name, walls.r_value);
//! ```

pub mod catalog;
pub mod covering;
pub mod frame;
pub mod insulation;

pub use catalog::Catalog;
pub use covering::CoveringMaterial;
pub use frame::FrameMaterial;
pub use insulation::Insulation;

use serde::{Deserialize, Serialize};

/// Material key chosen for each envelope role.
///
/// ## JSON Example
///
/// ```json
/// { "walls": "twinPoly", "roof": "twinPoly", "doors": "doubleGlass", "frame": "aluminum" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSelection {
    /// Covering key for the walls
    pub walls: String,
    /// Covering key for the roof
    pub roof: String,
    /// Covering key for the doors
    pub doors: String,
    /// Frame key
    pub frame: String,
}

impl Default for MaterialSelection {
    fn default() -> Self {
        MaterialSelection {
            walls: "twinPoly".to_string(),
            roof: "twinPoly".to_string(),
            doors: "doubleGlass".to_string(),
            frame: "aluminum".to_string(),
        }
    }
}

/// Catalog entries resolved from a [`MaterialSelection`] and insulation key.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedMaterials<'a> {
    pub walls: &'a CoveringMaterial,
    pub roof: &'a CoveringMaterial,
    pub doors: &'a CoveringMaterial,
    pub frame: &'a FrameMaterial,
    pub insulation: &'a Insulation,
}

impl MaterialSelection {
    /// Resolve every key against the catalog. Fails on the first unknown key.
    pub fn resolve<'a>(&self, catalog: &'a Catalog, insulation: &str) -> crate::CalcResult<ResolvedMaterials<'a>> {
        Ok(ResolvedMaterials {
            walls: catalog.covering(&self.walls)?,
            roof: catalog.covering(&self.roof)?,
            doors: catalog.covering(&self.doors)?,
            frame: catalog.frame(&self.frame)?,
            insulation: catalog.insulation(insulation)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_default_selection_resolves() {
        let resolved = MaterialSelection::default()
            .resolve(Catalog::builtin(), "none")
            .unwrap();
        assert_eq!(resolved.walls.r_value, 1.54);
        assert_eq!(resolved.doors.r_value, 2.0);
        assert_eq!(resolved.frame.thermal_bridge, 0.85);
        assert_eq!(resolved.insulation.r_value, 0.0);
    }

    #[test]
    fn test_unknown_frame() {
        let selection = MaterialSelection {
            frame: "bamboo".to_string(),
            ..MaterialSelection::default()
        };
        let err = selection.resolve(Catalog::builtin(), "none").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("frames", "bamboo"));
    }

    #[test]
    fn test_unknown_insulation() {
        let err = MaterialSelection::default()
            .resolve(Catalog::builtin(), "strawWall")
            .unwrap_err();
        assert_eq!(err, CalcError::material_not_found("insulations", "strawWall"));
    }
}
