//! Validation and normalization of a raw configuration tree.
//!
//! [`resolve`] runs a single top-down pass and stops at the first violation:
//!
//! 1. `title` and `description` are present.
//! 2. Every head directive uses `meta`, `link` or `script`.
//! 3. The locale table contains `/` and only `/`-delimited keys.
//! 4. Every navbar tree is well formed.
//! 5. Edit links, when enabled, have a repository, branch and directory.
//!
//! Optional fields are filled with their defaults, so resolving the raw form
//! of an already resolved config yields the same config.

use indexmap::IndexMap;

use crate::ConfigError;
use crate::head::{HeadDirective, HeadTag};
use crate::locale::{self, DEFAULT_LOCALE, LocaleConfig, UiStrings};
use crate::nav::{self, NavChild, NavItem};
use crate::raw::{
    RawHeadDirective, RawLocaleConfig, RawNavChild, RawNavItem, RawSiteConfig, RawThemeConfig,
};
use crate::site::SiteConfig;
use crate::theme::ThemeConfig;

/// Validate `raw` and produce a normalized [`SiteConfig`].
///
/// # Errors
///
/// Returns the first violation found, in the order listed in the module docs.
pub fn resolve(raw: &RawSiteConfig) -> Result<SiteConfig, ConfigError> {
    let title = require_field(raw.title.as_deref(), "title")?;
    let description = require_field(raw.description.as_deref(), "description")?;

    let head_directives = resolve_head(raw.head_directives.as_deref().unwrap_or_default())?;

    let raw_locales = require_default_locale(raw.locale_table())?;
    let locales = raw_locales
        .iter()
        .map(|(path, locale)| -> Result<_, ConfigError> {
            Ok((path.clone(), resolve_locale(path, locale)?))
        })
        .collect::<Result<IndexMap<_, _>, ConfigError>>()?;

    let theme = resolve_theme(raw.theme.as_ref())?;

    tracing::debug!(
        head_directives = head_directives.len(),
        locales = locales.len(),
        edit_links = theme.edit_links,
        "Resolved site configuration"
    );

    Ok(SiteConfig::new(
        title,
        description,
        head_directives,
        locales,
        theme,
    ))
}

/// Require a top-level string field to be present and non-empty.
fn require_field(value: Option<&str>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.to_owned()),
        _ => Err(ConfigError::MissingField { field }),
    }
}

fn resolve_head(raw: &[RawHeadDirective]) -> Result<Vec<HeadDirective>, ConfigError> {
    raw.iter()
        .enumerate()
        .map(|(index, directive)| -> Result<_, ConfigError> {
            let tag = HeadTag::parse(&directive.tag).ok_or_else(|| ConfigError::UnknownTag {
                path: format!("head[{index}]"),
                tag: directive.tag.clone(),
            })?;
            Ok(HeadDirective::new(
                tag,
                directive.attributes.clone(),
                directive.content.clone(),
            ))
        })
        .collect()
}

/// Check the locale table as a whole before descending into entries.
fn require_default_locale(
    table: Option<&IndexMap<String, RawLocaleConfig>>,
) -> Result<&IndexMap<String, RawLocaleConfig>, ConfigError> {
    let table = table
        .filter(|table| table.contains_key(DEFAULT_LOCALE))
        .ok_or(ConfigError::MissingDefaultLocale)?;

    if let Some(path) = table.keys().find(|path| !locale::is_valid_locale_path(path)) {
        return Err(ConfigError::InvalidLocalePath { path: path.clone() });
    }

    Ok(table)
}

fn resolve_locale(path: &str, raw: &RawLocaleConfig) -> Result<LocaleConfig, ConfigError> {
    let base = format!("locales[{path:?}].navbar");
    let navbar = raw
        .navbar
        .iter()
        .flatten()
        .enumerate()
        .map(|(index, item)| resolve_nav_item(item, &format!("{base}[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let defaults = UiStrings::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    let strings = UiStrings {
        edit_link_text: pick(&raw.edit_link_text, defaults.edit_link_text),
        last_updated_text: pick(&raw.last_updated_text, defaults.last_updated_text),
        contributors_text: pick(&raw.contributors_text, defaults.contributors_text),
        tip: pick(&raw.tip, defaults.tip),
        warning: pick(&raw.warning, defaults.warning),
        danger: pick(&raw.danger, defaults.danger),
        back_to_home: pick(&raw.back_to_home, defaults.back_to_home),
        open_in_new_window: pick(&raw.open_in_new_window, defaults.open_in_new_window),
        toggle_dark_mode: pick(&raw.toggle_dark_mode, defaults.toggle_dark_mode),
        toggle_sidebar: pick(&raw.toggle_sidebar, defaults.toggle_sidebar),
    };

    let not_found = match &raw.not_found {
        Some(messages) if !messages.is_empty() => messages.clone(),
        _ => LocaleConfig::default_not_found(),
    };

    Ok(LocaleConfig {
        lang: raw.lang.clone(),
        select_language_name: raw.select_language_name.clone(),
        title: raw.title.clone(),
        description: raw.description.clone(),
        navbar,
        strings,
        not_found,
    })
}

/// Recursive descent over one navbar node.
///
/// A node with `children` is a group even if it also has a `link`.
fn resolve_nav_item(raw: &RawNavItem, path: &str) -> Result<NavItem, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidNavItem {
        path: path.to_owned(),
        reason: reason.to_owned(),
    };

    let text = match raw.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_owned(),
        _ => return Err(invalid("missing `text`")),
    };

    if let Some(children) = &raw.children {
        if children.is_empty() {
            return Err(invalid("group `children` cannot be empty"));
        }
        if raw.link.is_some() {
            tracing::warn!(path, "Ignoring `link` on navbar group with `children`");
        }
        let children = children
            .iter()
            .enumerate()
            .map(|(index, child)| resolve_nav_child(child, &format!("{path}.children[{index}]")))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(NavItem::Group { text, children });
    }

    let link = raw
        .link
        .as_deref()
        .ok_or_else(|| invalid("item needs either `link` or `children`"))?;
    nav::check_link(link).map_err(invalid)?;

    Ok(NavItem::Link {
        text,
        link: link.to_owned(),
    })
}

fn resolve_nav_child(raw: &RawNavChild, path: &str) -> Result<NavChild, ConfigError> {
    match raw {
        RawNavChild::Path(link) => {
            nav::check_link(link).map_err(|reason| ConfigError::InvalidNavItem {
                path: path.to_owned(),
                reason: reason.to_owned(),
            })?;
            Ok(NavChild::Path(link.clone()))
        }
        RawNavChild::Item(item) => Ok(NavChild::Item(resolve_nav_item(item, path)?)),
    }
}

fn resolve_theme(raw: Option<&RawThemeConfig>) -> Result<ThemeConfig, ConfigError> {
    let Some(raw) = raw else {
        return Ok(ThemeConfig::default());
    };
    let defaults = ThemeConfig::default();

    let theme = ThemeConfig {
        logo: raw.logo.clone(),
        repo: raw.repo.clone(),
        repo_label: raw.repo_label.clone(),
        edit_links: raw.edit_links.unwrap_or(defaults.edit_links),
        last_updated: raw.last_updated.unwrap_or(defaults.last_updated),
        contributors: raw.contributors.unwrap_or(defaults.contributors),
        docs_repo: raw.docs_repo.clone(),
        docs_branch: raw.docs_branch.clone(),
        docs_dir: raw.docs_dir.clone(),
    };

    if theme.edit_links {
        let required = [
            (&theme.docs_repo, "docsRepo"),
            (&theme.docs_branch, "docsBranch"),
            (&theme.docs_dir, "docsDir"),
        ];
        for (value, missing) in required {
            if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                return Err(ConfigError::IncompleteEditConfig { missing });
            }
        }
    }

    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> RawSiteConfig {
        serde_json::from_str(json).unwrap()
    }

    fn nav_error(json: &str) -> (String, String) {
        match resolve(&parse(json)) {
            Err(ConfigError::InvalidNavItem { path, reason }) => (path, reason),
            other => panic!("Expected InvalidNavItem, got {other:?}"),
        }
    }

    #[test]
    fn test_require_field_rejects_blank() {
        let err = require_field(Some("  "), "title").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "title" }));
    }

    #[test]
    fn test_missing_title_reported_before_description() {
        let err = resolve(&RawSiteConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "title" }));
    }

    #[test]
    fn test_unknown_tag_reports_index() {
        let err = resolve(&parse(
            r#"{"title": "T", "description": "D",
                "head": [["meta", {}], ["style", {}]],
                "locales": {"/": {}}}"#,
        ))
        .unwrap_err();
        match err {
            ConfigError::UnknownTag { path, tag } => {
                assert_eq!(path, "head[1]");
                assert_eq!(tag, "style");
            }
            other => panic!("Expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn test_head_checked_before_locales() {
        let err = resolve(&parse(
            r#"{"title": "T", "description": "D", "head": [["base", {}]]}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTag { .. }));
    }

    #[test]
    fn test_missing_locales() {
        let err = resolve(&parse(r#"{"title": "T", "description": "D"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefaultLocale));
    }

    #[test]
    fn test_empty_locales() {
        let err = resolve(&parse(r#"{"title": "T", "description": "D", "locales": {}}"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingDefaultLocale));
    }

    #[test]
    fn test_invalid_locale_path() {
        let err = resolve(&parse(
            r#"{"title": "T", "description": "D", "locales": {"/": {}, "en": {}}}"#,
        ))
        .unwrap_err();
        match err {
            ConfigError::InvalidLocalePath { path } => assert_eq!(path, "en"),
            other => panic!("Expected InvalidLocalePath, got {other:?}"),
        }
    }

    #[test]
    fn test_nav_link_missing_text() {
        let (path, reason) = nav_error(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {"navbar": [{"link": "/a.html"}]}}}"#,
        );
        assert_eq!(path, r#"locales["/"].navbar[0]"#);
        assert!(reason.contains("text"));
    }

    #[test]
    fn test_nav_link_missing_link() {
        let (path, reason) = nav_error(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {"navbar": [{"text": "A", "link": "/a.html"}, {"text": "B"}]}}}"#,
        );
        assert_eq!(path, r#"locales["/"].navbar[1]"#);
        assert!(reason.contains("link"));
    }

    #[test]
    fn test_nav_invalid_link() {
        let (path, reason) = nav_error(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {"navbar": [{"text": "A", "link": "/a b.html"}]}}}"#,
        );
        assert_eq!(path, r#"locales["/"].navbar[0]"#);
        assert!(reason.contains("whitespace"));
    }

    #[test]
    fn test_nested_error_path() {
        let (path, _) = nav_error(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {}, "/en/": {"navbar": [
                    {"text": "Docs", "children": [
                        "/a.html",
                        {"text": "More", "children": ["/b.html", ""]}
                    ]}
                ]}}}"#,
        );
        assert_eq!(path, r#"locales["/en/"].navbar[0].children[1].children[1]"#);
    }

    #[test]
    fn test_children_take_precedence_over_link() {
        let config = resolve(&parse(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {"navbar": [
                    {"text": "Docs", "link": "/docs/", "children": ["/a.html"]}
                ]}}}"#,
        ))
        .unwrap();
        let navbar = &config.default_locale().unwrap().navbar;
        assert_eq!(
            navbar[0],
            NavItem::Group {
                text: "Docs".to_owned(),
                children: vec![NavChild::Path("/a.html".to_owned())],
            }
        );
    }

    #[test]
    fn test_ui_string_defaults_and_overrides() {
        let config = resolve(&parse(
            r#"{"title": "T", "description": "D",
                "locales": {"/": {"tip": "提示", "notFound": []}}}"#,
        ))
        .unwrap();
        let locale = config.default_locale().unwrap();
        assert_eq!(locale.strings.tip, "提示");
        assert_eq!(locale.strings.warning, "WARNING");
        assert_eq!(locale.not_found, LocaleConfig::default_not_found());
    }

    #[test]
    fn test_theme_defaults_without_section() {
        let theme = resolve_theme(None).unwrap();
        assert_eq!(theme, ThemeConfig::default());
    }

    #[test]
    fn test_edit_links_reports_first_missing_field() {
        let raw = RawThemeConfig {
            edit_links: Some(true),
            docs_repo: Some("flamego/flamego.cn".to_owned()),
            docs_dir: Some("docs".to_owned()),
            ..RawThemeConfig::default()
        };
        let err = resolve_theme(Some(&raw)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IncompleteEditConfig {
                missing: "docsBranch"
            }
        ));
    }

    #[test]
    fn test_edit_links_disabled_skips_checks() {
        let raw = RawThemeConfig {
            edit_links: Some(false),
            ..RawThemeConfig::default()
        };
        assert!(resolve_theme(Some(&raw)).is_ok());
    }

    #[test]
    fn test_edit_links_blank_value_is_missing() {
        let raw = RawThemeConfig {
            edit_links: Some(true),
            docs_repo: Some(String::new()),
            docs_branch: Some("main".to_owned()),
            docs_dir: Some("docs".to_owned()),
            ..RawThemeConfig::default()
        };
        let err = resolve_theme(Some(&raw)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IncompleteEditConfig { missing: "docsRepo" }
        ));
    }
}
