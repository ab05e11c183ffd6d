//! Configuration resolution for documentation sites.
//!
//! A site generator is driven by one declarative tree: site metadata, tags
//! injected into `<head>`, a table of locales with their navbars and UI
//! strings, and theme settings. This crate turns the loosely-typed tree a
//! user writes ([`RawSiteConfig`]) into a validated, read-only
//! [`SiteConfig`] with every default filled in, or fails before any page is
//! rendered.
//!
//! ```
//! use docsite_config::{RawSiteConfig, resolve};
//!
//! let raw: RawSiteConfig = serde_json::from_str(
//!     r#"{"title": "T", "description": "D", "locales": {"/": {"navbar": []}}}"#,
//! )
//! .unwrap();
//! let config = resolve(&raw).unwrap();
//! assert!(config.theme().contributors);
//! assert!(!config.theme().last_updated);
//! ```
//!
//! [`SiteConfig::load`] reads a `docsite.toml` (or `.json`/`.yaml`) file,
//! discovered in the current directory and its parents.

mod error;
mod head;
mod load;
mod locale;
mod nav;
mod raw;
mod resolve;
mod site;
mod theme;

pub use error::ConfigError;
pub use head::{AttrValue, HeadDirective, HeadTag};
pub use load::{CONFIG_FILENAME, Format, parse_raw};
pub use locale::{DEFAULT_LOCALE, DEFAULT_NOT_FOUND, LocaleConfig, UiStrings};
pub use nav::{NavChild, NavItem, is_external};
pub use raw::{
    RawHeadDirective, RawLocaleConfig, RawNavChild, RawNavItem, RawSiteConfig, RawThemeConfig,
};
pub use resolve::resolve;
pub use site::SiteConfig;
pub use theme::ThemeConfig;
