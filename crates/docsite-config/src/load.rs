//! Loading configuration files from disk.
//!
//! The resolver itself never touches the filesystem; this module is the
//! adapter for callers that start from a file. Files are discovered in the
//! current directory and its parents, parsed by extension (TOML, JSON or
//! YAML), and unknown keys are logged rather than rejected.
//!
//! ## Environment Variable Expansion
//!
//! Repository fields support environment variable expansion before
//! resolution:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `theme.repo`
//! - `theme.docsRepo`
//! - `theme.docsBranch`
//! - `theme.docsDir`

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::raw::RawSiteConfig;
use crate::site::SiteConfig;
use crate::{ConfigError, resolve};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docsite.toml";

/// Filenames checked in each directory during discovery, in priority order.
const CONFIG_CANDIDATES: [&str; 4] = [
    CONFIG_FILENAME,
    "docsite.json",
    "docsite.yaml",
    "docsite.yml",
];

/// Source format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl Format {
    /// Format implied by a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl SiteConfig {
    /// Load and resolve a configuration file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for a `docsite.*` file in the current directory and its parents.
    ///
    /// # Errors
    ///
    /// Returns error if no file is found, parsing fails, an environment
    /// variable is unset, or the tree does not resolve.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd)
                .ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?
        };
        Self::load_from_file(&path)
    }

    /// Load and resolve a specific file, choosing the format by extension.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = Format::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), ?format, "Loading site configuration");
        Self::load_from_str(&content, format)
    }

    /// Parse, expand and resolve configuration source text.
    pub fn load_from_str(content: &str, format: Format) -> Result<Self, ConfigError> {
        let mut raw = parse_raw(content, format)?;
        expand_env_vars(&mut raw)?;
        resolve(&raw)
    }
}

/// Parse source text into a raw tree, logging keys the schema does not know.
pub fn parse_raw(content: &str, format: Format) -> Result<RawSiteConfig, ConfigError> {
    let mut ignored = Vec::new();
    let raw = match format {
        Format::Toml => {
            let value: toml::Value = toml::from_str(content)?;
            deserialize_tracking(value, &mut ignored)?
        }
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            deserialize_tracking(value, &mut ignored)?
        }
        Format::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content)?;
            deserialize_tracking(value, &mut ignored)?
        }
    };

    for key in &ignored {
        tracing::warn!(key = %key, "Ignoring unknown configuration key");
    }

    Ok(raw)
}

fn deserialize_tracking<'de, D, T>(
    deserializer: D,
    ignored: &mut Vec<String>,
) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    serde_ignored::deserialize(deserializer, |path| ignored.push(path.to_string()))
}

/// Search for a config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Expand environment variable references in repository fields.
fn expand_env_vars(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    let Some(theme) = raw.theme.as_mut() else {
        return Ok(());
    };

    let fields = [
        (&mut theme.repo, "theme.repo"),
        (&mut theme.docs_repo, "theme.docsRepo"),
        (&mut theme.docs_branch, "theme.docsBranch"),
        (&mut theme.docs_dir, "theme.docsDir"),
    ];
    for (value, field) in fields {
        if let Some(text) = value {
            *text = expand_env(text, field)?;
        }
    }

    Ok(())
}

/// Expand `${VAR}` and `${VAR:-default}` references.
///
/// Only braced references are handed to `shellexpand`; bare `$VAR` and
/// text outside the braces are copied verbatim.
fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&expand_reference(&rest[start..=start + len], field)?);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Lookup failure for an unset environment variable.
struct UnsetVar(String);
