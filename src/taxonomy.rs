use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// A lookup into the loaded hierarchy found missing or malformed structure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("taxonomy entry missing or malformed: {0}")]
pub struct TaxonomyError(pub String);

/// Read-only nested tag dictionary, loaded once at startup
///
/// The document shape is owned by the taxonomy file, so the hierarchy is
/// kept as raw JSON behind typed accessors instead of a rigid struct.
#[derive(Debug, Clone)]
pub struct TagHierarchy {
    root: Value,
}

impl TagHierarchy {
    /// Load the hierarchy from a JSON file; a missing or unparsable file is
    /// an unrecoverable configuration error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read tag hierarchy: {}", path.as_ref().display())
        })?;

        let root: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tag hierarchy: {}", path.as_ref().display()))?;

        Ok(Self { root })
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Full hierarchy document, for discovery consumers
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Vehicle model names listed under `filter.subcategories.vehicle`
    ///
    /// Accepts either an array of model names or an object keyed by model
    /// name (both shapes occur in taxonomy exports).
    pub fn vehicle_models(&self) -> std::result::Result<Vec<String>, TaxonomyError> {
        let vehicles = self
            .root
            .pointer("/filter/subcategories/vehicle")
            .ok_or_else(|| TaxonomyError("filter.subcategories.vehicle".to_string()))?;

        match vehicles {
            Value::Array(entries) => entries
                .iter()
                .map(|entry| {
                    entry
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| TaxonomyError("non-string vehicle model entry".to_string()))
                })
                .collect(),
            Value::Object(entries) => Ok(entries.keys().cloned().collect()),
            _ => Err(TaxonomyError(
                "filter.subcategories.vehicle is neither array nor object".to_string(),
            )),
        }
    }
}

/// Known production years for one car model
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarModelInfo {
    pub years: Vec<String>,
}

/// Car model name to year list, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct CarModelTable {
    models: HashMap<String, CarModelInfo>,
}

impl CarModelTable {
    /// Load the car model document; a missing file degrades to an empty
    /// table with a warning, while an unreadable or unparsable file is an
    /// error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                eprintln!(
                    "Warning: {} not found. Using empty car model list.",
                    path.as_ref().display()
                );
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read car models: {}", path.as_ref().display())
                })
            }
        };

        let models: HashMap<String, CarModelInfo> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse car models: {}", path.as_ref().display()))?;

        Ok(Self { models })
    }

    pub fn from_models(models: HashMap<String, CarModelInfo>) -> Self {
        Self { models }
    }

    pub fn get(&self, model: &str) -> Option<&CarModelInfo> {
        self.models.get(model)
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
