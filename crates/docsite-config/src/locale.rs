//! Per-locale navigation and UI strings.

use serde::Serialize;

use crate::nav::NavItem;

/// Path of the default locale.
pub const DEFAULT_LOCALE: &str = "/";

/// Stock 404 messages used when a locale declares none.
pub const DEFAULT_NOT_FOUND: [&str; 4] = [
    "There's nothing here.",
    "How did we get here?",
    "That's a Four-Oh-Four.",
    "Looks like we've got some broken links.",
];

/// Themeable UI strings substituted into the rendered chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    /// Label of the "edit this page" link.
    pub edit_link_text: String,
    /// Label in front of the last-updated timestamp.
    pub last_updated_text: String,
    /// Label in front of the contributor list.
    pub contributors_text: String,
    /// Default title of `tip` containers.
    pub tip: String,
    /// Default title of `warning` containers.
    pub warning: String,
    /// Default title of `danger` containers.
    pub danger: String,
    /// Link text on the 404 page.
    pub back_to_home: String,
    /// Screen-reader text for external links.
    pub open_in_new_window: String,
    /// Screen-reader text for the color mode switch.
    pub toggle_dark_mode: String,
    /// Screen-reader text for the sidebar button.
    pub toggle_sidebar: String,
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            edit_link_text: "Edit this page".to_owned(),
            last_updated_text: "Last Updated".to_owned(),
            contributors_text: "Contributors".to_owned(),
            tip: "TIP".to_owned(),
            warning: "WARNING".to_owned(),
            danger: "DANGER".to_owned(),
            back_to_home: "Take me home".to_owned(),
            open_in_new_window: "open in new window".to_owned(),
            toggle_dark_mode: "toggle dark mode".to_owned(),
            toggle_sidebar: "toggle sidebar".to_owned(),
        }
    }
}

/// Resolved configuration of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Value of the HTML `lang` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Label shown in the language picker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_language_name: Option<String>,
    /// Site title override for this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Site description override for this locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Navbar items in declaration order.
    pub navbar: Vec<NavItem>,
    /// UI strings, serialized inline next to `navbar`.
    #[serde(flatten)]
    pub strings: UiStrings,
    /// 404 messages; the renderer picks one at random.
    pub not_found: Vec<String>,
}

impl LocaleConfig {
    /// Default `not_found` list.
    pub(crate) fn default_not_found() -> Vec<String> {
        DEFAULT_NOT_FOUND.iter().map(|&s| s.to_owned()).collect()
    }
}

/// Check that a locale key is an absolute, `/`-terminated prefix.
pub(crate) fn is_valid_locale_path(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/') && !path.contains("//")
}
