// File: src/manifest.rs
// Purpose: Route manifest loading from routes.toml / routes.json

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{LinkError, RouteDefinition, RouteLinks};

/// Ordered list of route definitions
///
/// TOML form:
///
/// ```toml
/// [[routes]]
/// name = "index"
///
/// [[routes]]
/// name = "post"
/// pattern = "/blog/:slug"
/// page = "/post"
/// ```
///
/// JSON form: `{ "routes": [{ "name": "index" }, ...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
}

impl RouteManifest {
    /// Load a manifest file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means no routes
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route manifest: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        manifest.with_context(|| format!("Failed to parse route manifest: {:?}", path))
    }

    /// Load the manifest from the default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routes.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the route table from this manifest
    pub fn into_links(self) -> Result<RouteLinks, LinkError> {
        RouteLinks::new(self.routes)
    }
}
