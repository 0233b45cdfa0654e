// File: src/config.rs
// Purpose: Declarative route tables from routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{DuplicateRouteError, Resolver, RouteDefinition};

/// Declarative route table
///
/// A TOML file of `[[routes]]` entries, one per declaration. View handles
/// are declared as string identifiers; the embedding shell maps them to
/// renderable units after loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutesConfig {
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
}

/// One declared route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteDecl {
    pub path: String,
    pub name: String,
    pub view: String,
}

impl RoutesConfig {
    /// Load a route declaration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means an empty declaration
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read routes file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RoutesConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse routes file: {:?}", path))?;

        Ok(config)
    }

    /// Load a route declaration from the default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routes.toml")
    }

    /// Build a resolver whose view handles are the declared identifiers
    ///
    /// Declarations pass through the same validation as in-code tables,
    /// so duplicates in the file are rejected here.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::{RouteDecl, RoutesConfig};
    ///
    /// let config = RoutesConfig {
    ///     routes: vec![RouteDecl {
    ///         path: "/".to_string(),
    ///         name: "Home".to_string(),
    ///         view: "home".to_string(),
    ///     }],
    /// };
    ///
    /// let resolver = config.into_resolver().unwrap();
    /// assert_eq!(resolver.resolve("/").unwrap().view, "home");
    /// ```
    pub fn into_resolver(self) -> std::result::Result<Resolver<String>, DuplicateRouteError> {
        Resolver::register(
            self.routes
                .into_iter()
                .map(|decl| RouteDefinition::new(decl.path, decl.name, decl.view)),
        )
    }
}
