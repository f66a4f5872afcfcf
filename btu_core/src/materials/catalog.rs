//! Material catalog: the three lookup tables the estimator resolves keys
//! against.
//!
//! The built-in catalog is TOML embedded at compile time and parsed once on
//! first use. Custom catalogs load from TOML or JSON with the same layout:
//!
//! ```toml
//! [coverings.twinPoly]
//! name = "Twin-Wall Polycarbonate"
//! r_value = 1.54
//!
//! [frames.aluminum]
//! name = "Aluminum"
//! thermal_bridge = 0.85
//!
//! [insulations.none]
//! name = "None"
//! r_value = 0.0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{CoveringMaterial, FrameMaterial, Insulation};
use crate::errors::{CalcError, CalcResult};

const BUILTIN_TOML: &str = include_str!("../../data/catalog.toml");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_toml_str(BUILTIN_TOML).expect("built-in catalog.toml must be valid")
});

/// Key → entry tables for coverings, frames and insulations.
///
/// Tables are ordered by key so listings are stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub coverings: BTreeMap<String, CoveringMaterial>,
    #[serde(default)]
    pub frames: BTreeMap<String, FrameMaterial>,
    #[serde(default)]
    pub insulations: BTreeMap<String, Insulation>,
}

impl Catalog {
    /// The built-in catalog shipped with the crate.
    ///
    /// ```rust
    /// use btu_core::materials::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.covering("doubleGlass").unwrap().r_value, 2.0);
    /// ```
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let catalog: Catalog =
            toml::from_str(text).map_err(|e| CalcError::invalid_catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(text: &str) -> CalcResult<Self> {
        let catalog: Catalog =
            serde_json::from_str(text).map_err(|e| CalcError::invalid_catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file. `.json` files parse as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read catalog", path.display().to_string(), e.to_string())
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!("loading catalog from {} ({})", path.display(), if is_json { "json" } else { "toml" });

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Check every table is non-empty and every entry is usable.
    pub fn validate(&self) -> CalcResult<()> {
        if self.coverings.is_empty() {
            return Err(CalcError::invalid_catalog("no coverings defined"));
        }
        if self.frames.is_empty() {
            return Err(CalcError::invalid_catalog("no frames defined"));
        }
        if self.insulations.is_empty() {
            return Err(CalcError::invalid_catalog("no insulations defined"));
        }

        for (key, covering) in &self.coverings {
            covering.validate(key).map_err(invalid_entry)?;
        }
        for (key, frame) in &self.frames {
            frame.validate(key).map_err(invalid_entry)?;
        }
        for (key, insulation) in &self.insulations {
            insulation.validate(key).map_err(invalid_entry)?;
        }
        Ok(())
    }

    /// Look up a covering by key
    pub fn covering(&self, key: &str) -> CalcResult<&CoveringMaterial> {
        self.coverings
            .get(key)
            .ok_or_else(|| CalcError::material_not_found("coverings", key))
    }

    /// Look up a frame by key
    pub fn frame(&self, key: &str) -> CalcResult<&FrameMaterial> {
        self.frames
            .get(key)
            .ok_or_else(|| CalcError::material_not_found("frames", key))
    }

    /// Look up an insulation by key
    pub fn insulation(&self, key: &str) -> CalcResult<&Insulation> {
        self.insulations
            .get(key)
            .ok_or_else(|| CalcError::material_not_found("insulations", key))
    }

    /// Add or replace a covering
    pub fn with_covering(mut self, key: impl Into<String>, covering: CoveringMaterial) -> Self {
        self.coverings.insert(key.into(), covering);
        self
    }

    /// Add or replace a frame
    pub fn with_frame(mut self, key: impl Into<String>, frame: FrameMaterial) -> Self {
        self.frames.insert(key.into(), frame);
        self
    }

    /// Add or replace an insulation
    pub fn with_insulation(mut self, key: impl Into<String>, insulation: Insulation) -> Self {
        self.insulations.insert(key.into(), insulation);
        self
    }

    /// (key, label) pairs for covering selection
    pub fn covering_options(&self) -> Vec<(&str, String)> {
        self.coverings.iter().map(|(k, m)| (k.as_str(), m.label())).collect()
    }

    /// (key, label) pairs for frame selection
    pub fn frame_options(&self) -> Vec<(&str, String)> {
        self.frames.iter().map(|(k, m)| (k.as_str(), m.label())).collect()
    }

    /// (key, label) pairs for insulation selection
    pub fn insulation_options(&self) -> Vec<(&str, String)> {
        self.insulations.iter().map(|(k, m)| (k.as_str(), m.label())).collect()
    }
}

// Entry-level InvalidInput becomes a catalog error once it surfaces from
// catalog validation.
fn invalid_entry(e: CalcError) -> CalcError {
    match e {
        CalcError::InvalidInput { field, value, reason } => {
            CalcError::invalid_catalog(format!("{} = {}: {}", field, value, reason))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.coverings.len(), 4);
        assert_eq!(catalog.frames.len(), 3);
        assert_eq!(catalog.insulations.len(), 3);
    }

    #[test]
    fn test_builtin_values() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.covering("singleGlass").unwrap().r_value, 0.9);
        assert_eq!(catalog.covering("twinPoly").unwrap().r_value, 1.54);
        assert_eq!(catalog.covering("polyFilm").unwrap().r_value, 0.83);
        assert_eq!(catalog.frame("galvanizedSteel").unwrap().thermal_bridge, 0.80);
        assert_eq!(catalog.frame("wood").unwrap().name, "Treated Wood");

        let large = catalog.insulation("largeHayBale").unwrap();
        assert_eq!(large.r_value, 2.8);
        assert_eq!(large.coverage_sqft, Some(32.0));
        assert_eq!(catalog.insulation("none").unwrap().r_value, 0.0);
    }

    #[test]
    fn test_unknown_key() {
        let err = Catalog::builtin().covering("glassBrick").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("coverings", "glassBrick"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_options_are_key_ordered() {
        let options = Catalog::builtin().covering_options();
        let keys: Vec<&str> = options.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["doubleGlass", "polyFilm", "singleGlass", "twinPoly"]);
        assert_eq!(options[0].1, "Double Glass (R-2)");

        let insulation = Catalog::builtin().insulation_options();
        assert!(insulation.contains(&("none", "None".to_string())));
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"{
            "coverings": { "film": { "name": "Film", "r_value": 0.83 } },
            "frames": { "pvc": { "name": "PVC", "thermal_bridge": 0.9 } },
            "insulations": { "none": { "name": "None", "r_value": 0.0 } }
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.frame("pvc").unwrap().thermal_bridge, 0.9);
    }

    #[test]
    fn test_rejects_zero_r_value() {
        let toml = r#"
            [coverings.air]
            name = "Open Air"
            r_value = 0.0

            [frames.wood]
            name = "Wood"
            thermal_bridge = 0.95

            [insulations.none]
            name = "None"
            r_value = 0.0
        "#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
        assert!(err.to_string().contains("coverings.air.r_value"));
    }

    #[test]
    fn test_rejects_missing_table() {
        let toml = r#"
            [coverings.film]
            name = "Film"
            r_value = 0.83
        "#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert_eq!(err, CalcError::invalid_catalog("no frames defined"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Catalog::from_toml_str("[coverings.film\nname =").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_extend_builtin() {
        let catalog = Catalog::builtin()
            .clone()
            .with_covering("tripleGlass", CoveringMaterial::new("Triple Glass", 3.0));
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.covering("tripleGlass").unwrap().r_value, 3.0);
        assert_eq!(catalog.coverings.len(), 5);
    }

    #[test]
    fn test_extend_builtin_frame() {
        let catalog = Catalog::builtin()
            .clone()
            .with_frame("pvc", FrameMaterial::new("PVC", 0.9));
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.frame("pvc").unwrap().thermal_bridge, 0.9);
        assert!(catalog.frame_options().iter().any(|(key, label)| *key == "pvc" && label == "PVC"));

        let bad = catalog.with_frame("pvc", FrameMaterial::new("PVC", 1.5));
        assert_eq!(bad.validate().unwrap_err().error_code(), "INVALID_CATALOG");
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("btu_catalog_test_{}_{}", std::process::id(), name))
    }

    const FILM_JSON: &str = r#"{
        "coverings": { "film": { "name": "Film", "r_value": 0.83 } },
        "frames": { "pvc": { "name": "PVC", "thermal_bridge": 0.9 } },
        "insulations": { "none": { "name": "None", "r_value": 0.0 } }
    }"#;

    #[test]
    fn test_from_path_toml() {
        let path = temp_path("catalog.toml");
        std::fs::write(&path, BUILTIN_TOML).unwrap();
        let catalog = Catalog::from_path(&path);
        let _ = std::fs::remove_file(&path);

        let catalog = catalog.unwrap();
        assert_eq!(&catalog, Catalog::builtin());
        assert_eq!(catalog.covering("twinPoly").unwrap().r_value, 1.54);
    }

    #[test]
    fn test_from_path_json() {
        let path = temp_path("catalog.json");
        std::fs::write(&path, FILM_JSON).unwrap();
        let catalog = Catalog::from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.unwrap().covering("film").unwrap().r_value, 0.83);
    }

    #[test]
    fn test_from_path_uppercase_json_extension() {
        let path = temp_path("catalog.JSON");
        std::fs::write(&path, FILM_JSON).unwrap();
        let catalog = Catalog::from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(catalog.unwrap().frame("pvc").unwrap().thermal_bridge, 0.9);
    }

    #[test]
    fn test_from_path_json_content_with_toml_extension() {
        let path = temp_path("json_in_disguise.toml");
        std::fs::write(&path, FILM_JSON).unwrap();
        let err = Catalog::from_path(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
