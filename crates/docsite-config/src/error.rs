//! Configuration error type.

use std::path::PathBuf;

/// Configuration error.
///
/// Resolution errors carry the structural path of the offending node
/// (e.g. `head[3]` or `locales["/"].navbar[1].children[0]`).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required top-level field is absent or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Field name (e.g. "description").
        field: &'static str,
    },
    /// Head directive uses a tag outside `meta`, `link`, `script`.
    #[error("Unknown head tag `{tag}` at {path} (expected meta, link or script)")]
    UnknownTag {
        /// Path of the directive (e.g. "head[2]").
        path: String,
        /// Offending tag name.
        tag: String,
    },
    /// Locale table is empty or has no `/` entry.
    #[error("Locale table must contain the default locale \"/\"")]
    MissingDefaultLocale,
    /// Locale key is not an absolute, `/`-terminated path prefix.
    #[error("Invalid locale path {path:?}: must start and end with \"/\"")]
    InvalidLocalePath {
        /// Offending locale key.
        path: String,
    },
    /// Navbar node is malformed.
    #[error("Invalid navbar item at {path}: {reason}")]
    InvalidNavItem {
        /// Path of the node.
        path: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Edit links are enabled but repository metadata is incomplete.
    #[error("theme.editLinks is enabled but theme.{missing} is not set")]
    IncompleteEditConfig {
        /// First missing field (e.g. "docsRepo").
        missing: &'static str,
    },
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// File extension does not map to a known format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.docsRepo`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}
