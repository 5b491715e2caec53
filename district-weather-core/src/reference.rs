use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::debug;

use crate::model::{District, Division};

/// Divisions and districts loaded from the reference JSON documents.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub divisions: Vec<Division>,
    pub districts: Vec<District>,
}

impl ReferenceData {
    /// Read both reference files. Any read or parse failure is returned with the
    /// offending path attached; nothing is partially loaded.
    pub fn load(divisions_path: &Path, districts_path: &Path) -> Result<Self> {
        let divisions: Vec<Division> = read_json(divisions_path, "divisions")?;
        let districts: Vec<District> = read_json(districts_path, "districts")?;

        debug!(
            divisions = divisions.len(),
            districts = districts.len(),
            "Loaded reference data"
        );

        Ok(Self { divisions, districts })
    }

    pub fn from_json(divisions_json: &str, districts_json: &str) -> Result<Self> {
        let divisions =
            serde_json::from_str(divisions_json).context("Failed to parse divisions JSON")?;
        let districts =
            serde_json::from_str(districts_json).context("Failed to parse districts JSON")?;

        Ok(Self { divisions, districts })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {what} JSON: {}", path.display()))
}
