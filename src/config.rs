use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::ALLOW_ALL;
use crate::errors::{ApiGraphError, Result};

/// Conventional file name of a resolver configuration.
pub const CONFIG_FILENAME: &str = "apigraph.json";

/// Configuration of the resolution pipeline.
///
/// Describes the universe the declarations are resolved against: which builtin
/// types and framework base classes exist, how default bases and inferred
/// parameter types are chosen, and which coverage gaps are intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Builtin type names registered before resolution.
    pub builtin_types: Vec<String>,
    /// Framework base classes, registered as classes but never emitted as declared ones.
    pub base_classes: Vec<String>,
    /// Module of the framework base classes.
    pub base_module: String,
    /// Default base of updatable classes declared without a base.
    pub mutable_base: String,
    /// Default base of non-updatable classes declared without a base.
    pub immutable_base: String,
    /// Prefix joined to a class name to form its module.
    pub class_module_prefix: String,
    /// Builtin used for `id`-like shorthand parameters.
    pub integer_type: String,
    /// Builtin used for name-like shorthand parameters.
    pub string_type: String,
    /// Builtin used for `full_name` shorthand parameters.
    pub string_pair_type: String,
    /// Optional synthetic helper class resolved after the declared classes.
    ///
    /// Off by default: its return type must name a declared class, and a
    /// definition that does not declare it would otherwise fail to resolve.
    pub builder: Option<BuilderConfig>,
    /// Endpoint parameters that methods intentionally leave unimplemented.
    pub allowed_unimplemented: Vec<AllowedGap>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version: 1,
            builtin_types: [
                "int",
                "bool",
                "string",
                "datetime",
                "list",
                "dict",
                "Reset",
                "(string, string)",
                "GitAuthor",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            base_classes: vec![
                "SessionedGithubObject".to_string(),
                "UpdatableGithubObject".to_string(),
                "PaginatedList".to_string(),
            ],
            base_module: "PyGithub.Blocking.BaseGithubObject".to_string(),
            mutable_base: "UpdatableGithubObject".to_string(),
            immutable_base: "SessionedGithubObject".to_string(),
            class_module_prefix: "PyGithub.Blocking.".to_string(),
            integer_type: "int".to_string(),
            string_type: "string".to_string(),
            string_pair_type: "(string, string)".to_string(),
            builder: None,
            allowed_unimplemented: default_allow_list(),
        }
    }
}

/// Known partial implementations of the GitHub API description.
fn default_allow_list() -> Vec<AllowedGap> {
    const COMMITTER: &[&str] = &["name", "email", "date"];
    const CONTENTS: &[&str] = &["sha", "name", "email", "path", "branch"];
    const TREE: &[&str] = &["sha", "mode", "base_tree", "path", "type", "content"];

    vec![
        AllowedGap::new("AuthenticatedUser", "create_repo", &["team_id"]),
        AllowedGap::new("AuthenticatedUser", "create_fork", &["organization"]),
        AllowedGap::new("User", "create_fork", &["organization"]),
        AllowedGap::new("Organization", "create_fork", &["organization"]),
        AllowedGap::new("AuthenticatedUser", "edit", &["bio"]),
        AllowedGap::new("Repository", "edit", &["has_downloads"]),
        AllowedGap::new("Repository", "create_git_commit", COMMITTER),
        AllowedGap::new("Repository", "create_git_tag", &["name", "email", "date", "type"]),
        AllowedGap::new("Repository", "create_file", &["sha", "name", "email"]),
        AllowedGap::new("File", "edit", CONTENTS),
        AllowedGap::new("File", "delete", CONTENTS),
        AllowedGap::new("Dir", "get_contents", &["path", "ref"]),
        AllowedGap::new("Gist", "edit", &["filename", "content"]),
        AllowedGap::new("Repository", "create_git_tree", TREE),
        AllowedGap::new("GitTree", "create_modified_copy", TREE),
    ]
}

/// Synthetic entry-point class: one method, templated on the endpoint itself,
/// returning the root API object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub class: String,
    pub method: String,
    pub return_type: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            class: "Builder".to_string(),
            method: "Build".to_string(),
            return_type: "Github".to_string(),
        }
    }
}

/// An allow-list entry: `class.method` may leave `parameters` unimplemented.
///
/// The parameter `"*"` allows every parameter of every endpoint the method
/// implements. So does an empty `parameters` list, which names the pair alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedGap {
    pub class: String,
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl AllowedGap {
    pub fn new(class: &str, method: &str, parameters: &[&str]) -> Self {
        Self {
            class: class.to_string(),
            method: method.to_string(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Parameter names to allow, with an empty list widened to the wildcard.
    pub fn allowed_parameters(&self) -> Vec<String> {
        if self.parameters.is_empty() {
            vec![ALLOW_ALL.to_string()]
        } else {
            self.parameters.clone()
        }
    }
}

/// Loads a configuration file.
///
/// A missing file yields the default configuration.
pub fn load_config(path: &Path) -> Result<ResolverConfig> {
    if !path.exists() {
        return Ok(ResolverConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ApiGraphError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    let config: ResolverConfig =
        serde_json::from_str(&contents).map_err(|e| ApiGraphError::Config {
            message: format!("failed to parse config file '{}': {}", path.display(), e),
        })?;

    Ok(config)
}

/// Saves the configuration using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location,
/// ensuring that a partial write never corrupts the configuration.
pub fn save_config(path: &Path, config: &ResolverConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ApiGraphError::Config {
                message: format!(
                    "failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ),
            })?;
        }
    }

    let tmp_path = path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| ApiGraphError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| ApiGraphError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, path).map_err(|e| ApiGraphError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            path.display(),
            e
        ),
    })?;

    Ok(())
}
