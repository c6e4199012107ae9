use std::path::Path;

use crate::config::{load_config, ResolverConfig};
use crate::declaration::Declarations;
use crate::diagnostics::Diagnostic;
use crate::errors::{ApiGraphError, Result};
use crate::graph::{ApiGraph, Class, EndPoint};
use crate::resolution::{resolve, Resolution, ResolutionStats};

/// Central entry point: loads declarations and configuration, runs the
/// resolution pipeline and exposes the finished graph to the emitter.
#[derive(Debug)]
pub struct ApiDefinition {
    config: ResolverConfig,
    resolution: Resolution,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl ApiDefinition {
    /// Resolves in-memory declarations with the given configuration.
    pub fn build(declarations: Declarations, config: ResolverConfig) -> Result<Self> {
        let resolution = resolve(declarations, &config)?;
        Ok(Self { config, resolution })
    }

    /// Loads a JSON definition and an optional JSON configuration from disk,
    /// then resolves them.
    ///
    /// Without a configuration path the default configuration is used. A
    /// configuration path that does not exist is an error.
    pub fn load(definition_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) if !path.exists() => {
                return Err(ApiGraphError::Config {
                    message: format!("config file '{}' does not exist", path.display()),
                })
            }
            Some(path) => load_config(path)?,
            None => ResolverConfig::default(),
        };
        let declarations = Declarations::load(definition_path)?;
        Self::build(declarations, config)
    }
}

// ---------------------------------------------------------------------------
// Query delegation
// ---------------------------------------------------------------------------

impl ApiDefinition {
    pub fn graph(&self) -> &ApiGraph {
        &self.resolution.graph
    }

    /// Declared classes, sorted by name.
    pub fn classes(&self) -> impl Iterator<Item = &Class> + '_ {
        self.resolution.graph.classes()
    }

    /// Endpoints, sorted by (url, verb).
    pub fn end_points(&self) -> impl Iterator<Item = &EndPoint> + '_ {
        self.resolution.graph.end_points()
    }

    /// Advisory findings of the finalize phase.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.resolution.diagnostics
    }

    pub fn stats(&self) -> &ResolutionStats {
        &self.resolution.stats
    }

    pub fn fingerprint(&self) -> String {
        self.resolution.graph.fingerprint()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Gives up the definition, keeping only the resolution result.
    pub fn into_resolution(self) -> Resolution {
        self.resolution
    }
}
