//! Resolved site configuration.

use indexmap::IndexMap;
use serde::Serialize;

use crate::ConfigError;
use crate::head::HeadDirective;
use crate::locale::{DEFAULT_LOCALE, LocaleConfig};
use crate::raw::RawSiteConfig;
use crate::theme::ThemeConfig;

/// Validated, read-only site configuration handed to the renderer.
///
/// Only [`crate::resolve`] constructs this type, so every instance satisfies
/// the resolver's invariants: non-empty title and description, recognized
/// head tags, a default `/` locale, well-formed navbars and complete edit
/// link settings.
///
/// Serializes to the same camelCase shape the resolver accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    description: String,
    head_directives: Vec<HeadDirective>,
    locales: IndexMap<String, LocaleConfig>,
    theme: ThemeConfig,
}

impl SiteConfig {
    pub(crate) fn new(
        title: String,
        description: String,
        head_directives: Vec<HeadDirective>,
        locales: IndexMap<String, LocaleConfig>,
        theme: ThemeConfig,
    ) -> Self {
        Self {
            title,
            description,
            head_directives,
            locales,
            theme,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Head directives in declaration order.
    pub fn head_directives(&self) -> &[HeadDirective] {
        &self.head_directives
    }

    /// Locale table in declaration order.
    pub fn locales(&self) -> &IndexMap<String, LocaleConfig> {
        &self.locales
    }

    /// Locale registered under exactly `path`.
    pub fn locale(&self, path: &str) -> Option<&LocaleConfig> {
        self.locales.get(path)
    }

    /// The `/` locale.
    pub fn default_locale(&self) -> Option<&LocaleConfig> {
        self.locale(DEFAULT_LOCALE)
    }

    /// Locale serving `page_path`: the longest matching locale prefix.
    ///
    /// Every absolute page path matches the default `/` locale, so this only
    /// returns `None` for relative paths.
    pub fn locale_for(&self, page_path: &str) -> Option<(&str, &LocaleConfig)> {
        self.locales
            .iter()
            .filter(|(prefix, _)| {
                page_path.starts_with(prefix.as_str())
                    || (prefix.as_str() != DEFAULT_LOCALE
                        && page_path == prefix.trim_end_matches('/'))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, locale)| (prefix.as_str(), locale))
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Convert back into a raw tree accepted by [`crate::resolve`].
    pub fn to_raw(&self) -> RawSiteConfig {
        RawSiteConfig::from(self)
    }

    /// Serialize to pretty-printed JSON for a JavaScript renderer.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::UiStrings;

    fn locale(lang: &str) -> LocaleConfig {
        LocaleConfig {
            lang: Some(lang.to_owned()),
            select_language_name: None,
            title: None,
            description: None,
            navbar: Vec::new(),
            strings: UiStrings::default(),
            not_found: LocaleConfig::default_not_found(),
        }
    }

    fn site() -> SiteConfig {
        let mut locales = IndexMap::new();
        locales.insert("/".to_owned(), locale("zh-CN"));
        locales.insert("/en/".to_owned(), locale("en-US"));
        SiteConfig::new(
            "Flamego".to_owned(),
            "Docs".to_owned(),
            Vec::new(),
            locales,
            ThemeConfig::default(),
        )
    }

    #[test]
    fn test_locale_for_longest_prefix() {
        let site = site();
        let (prefix, locale) = site.locale_for("/en/guide.html").unwrap();
        assert_eq!(prefix, "/en/");
        assert_eq!(locale.lang.as_deref(), Some("en-US"));
    }

    #[test]
    fn test_locale_for_falls_back_to_default() {
        let site = site();
        let (prefix, _) = site.locale_for("/faqs.html").unwrap();
        assert_eq!(prefix, "/");
        let (prefix, _) = site.locale_for("/english/").unwrap();
        assert_eq!(prefix, "/");
    }

    #[test]
    fn test_locale_for_matches_prefix_without_trailing_slash() {
        let site = site();
        let (prefix, _) = site.locale_for("/en").unwrap();
        assert_eq!(prefix, "/en/");
    }

    #[test]
    fn test_locale_for_relative_path() {
        assert!(site().locale_for("guide.html").is_none());
    }

    #[test]
    fn test_locale_for_empty_path() {
        assert!(site().locale_for("").is_none());
    }

    #[test]
    fn test_default_locale() {
        let site = site();
        assert_eq!(
            site.default_locale().and_then(|l| l.lang.as_deref()),
            Some("zh-CN")
        );
    }

    #[test]
    fn test_to_json_shape() {
        let json = site().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Flamego");
        assert_eq!(value["headDirectives"], serde_json::json!([]));
        assert_eq!(value["theme"]["contributors"], true);
        assert_eq!(value["locales"]["/en/"]["lang"], "en-US");
    }
}
