//! Loosely-typed configuration tree as written by users.
//!
//! Every field is optional: presence is checked by [`crate::resolve`] so that
//! missing values are reported with a structural path rather than as a
//! deserialization error. Keys are camelCase, matching the site
//! generator's configuration file.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::head::{AttrValue, HeadDirective};
use crate::locale::LocaleConfig;
use crate::nav::{NavChild, NavItem};
use crate::site::SiteConfig;
use crate::theme::ThemeConfig;

/// Raw top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSiteConfig {
    /// Site title (required).
    pub title: Option<String>,
    /// Site description (required).
    pub description: Option<String>,
    /// Head directives; `head` in the site generator's own config.
    #[serde(alias = "head")]
    pub head_directives: Option<Vec<RawHeadDirective>>,
    /// Locale table keyed by locale path.
    pub locales: Option<IndexMap<String, RawLocaleConfig>>,
    /// Theme section; `themeConfig` in the site generator's own config.
    #[serde(alias = "themeConfig")]
    pub theme: Option<RawThemeConfig>,
}

impl RawSiteConfig {
    /// Locale table, falling back to one nested under the theme section.
    pub fn locale_table(&self) -> Option<&IndexMap<String, RawLocaleConfig>> {
        self.locales
            .as_ref()
            .or_else(|| self.theme.as_ref().and_then(|theme| theme.locales.as_ref()))
    }
}

/// Raw head directive: `[tag, attributes]` or `[tag, attributes, content]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "HeadTuple")]
pub struct RawHeadDirective {
    /// Element name, checked against the known tags during resolution.
    pub tag: String,
    /// Attributes in declaration order.
    pub attributes: IndexMap<String, AttrValue>,
    /// Inline element body.
    pub content: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HeadTuple {
    WithContent(String, IndexMap<String, AttrValue>, String),
    Plain(String, IndexMap<String, AttrValue>),
}

impl From<HeadTuple> for RawHeadDirective {
    fn from(tuple: HeadTuple) -> Self {
        match tuple {
            HeadTuple::WithContent(tag, attributes, content) => Self {
                tag,
                attributes,
                content: Some(content),
            },
            HeadTuple::Plain(tag, attributes) => Self {
                tag,
                attributes,
                content: None,
            },
        }
    }
}

/// Raw locale entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawLocaleConfig {
    /// HTML `lang` attribute.
    pub lang: Option<String>,
    /// Label in the language picker.
    pub select_language_name: Option<String>,
    /// Site title override.
    pub title: Option<String>,
    /// Site description override.
    pub description: Option<String>,
    /// Navbar items.
    pub navbar: Option<Vec<RawNavItem>>,
    /// "Edit this page" label.
    pub edit_link_text: Option<String>,
    /// Last-updated label.
    pub last_updated_text: Option<String>,
    /// Contributors label.
    pub contributors_text: Option<String>,
    /// `tip` container title.
    pub tip: Option<String>,
    /// `warning` container title.
    pub warning: Option<String>,
    /// `danger` container title.
    pub danger: Option<String>,
    /// 404 page home link text.
    pub back_to_home: Option<String>,
    /// External link screen-reader text.
    pub open_in_new_window: Option<String>,
    /// Color mode switch screen-reader text.
    pub toggle_dark_mode: Option<String>,
    /// Sidebar button screen-reader text.
    pub toggle_sidebar: Option<String>,
    /// 404 messages.
    pub not_found: Option<Vec<String>>,
}

/// Raw navbar node. Presence of `children` makes it a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    /// Display text.
    pub text: Option<String>,
    /// Link target; ignored when `children` is present.
    pub link: Option<String>,
    /// Group children.
    pub children: Option<Vec<RawNavChild>>,
}

/// Raw group child: leaf path or nested node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawNavChild {
    /// Leaf page path.
    Path(String),
    /// Nested link or group.
    Item(RawNavItem),
}

/// Raw theme section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawThemeConfig {
    /// Navbar logo path.
    pub logo: Option<String>,
    /// Project repository (`owner/name` or URL).
    pub repo: Option<String>,
    /// Label of the repository link.
    pub repo_label: Option<String>,
    /// Render "edit this page" links (default `false`).
    pub edit_links: Option<bool>,
    /// Render last-updated timestamps (default `false`).
    pub last_updated: Option<bool>,
    /// Render contributor lists (default `true`).
    pub contributors: Option<bool>,
    /// Docs repository, required with `edit_links`.
    pub docs_repo: Option<String>,
    /// Docs branch, required with `edit_links`.
    pub docs_branch: Option<String>,
    /// Docs directory, required with `edit_links`.
    pub docs_dir: Option<String>,
    /// Locale table nested under the theme section.
    pub locales: Option<IndexMap<String, RawLocaleConfig>>,
}

// Canonical -> raw, used to feed a resolved config back through `resolve`.

impl From<&SiteConfig> for RawSiteConfig {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: Some(config.title().to_owned()),
            description: Some(config.description().to_owned()),
            head_directives: Some(config.head_directives().iter().map(Into::into).collect()),
            locales: Some(
                config
                    .locales()
                    .iter()
                    .map(|(path, locale)| (path.clone(), locale.into()))
                    .collect(),
            ),
            theme: Some(config.theme().into()),
        }
    }
}

impl From<&HeadDirective> for RawHeadDirective {
    fn from(directive: &HeadDirective) -> Self {
        Self {
            tag: directive.tag().as_str().to_owned(),
            attributes: directive.attributes().clone(),
            content: directive.content().map(str::to_owned),
        }
    }
}

impl From<&LocaleConfig> for RawLocaleConfig {
    fn from(locale: &LocaleConfig) -> Self {
        let strings = locale.strings.clone();
        Self {
            lang: locale.lang.clone(),
            select_language_name: locale.select_language_name.clone(),
            title: locale.title.clone(),
            description: locale.description.clone(),
            navbar: Some(locale.navbar.iter().map(Into::into).collect()),
            edit_link_text: Some(strings.edit_link_text),
            last_updated_text: Some(strings.last_updated_text),
            contributors_text: Some(strings.contributors_text),
            tip: Some(strings.tip),
            warning: Some(strings.warning),
            danger: Some(strings.danger),
            back_to_home: Some(strings.back_to_home),
            open_in_new_window: Some(strings.open_in_new_window),
            toggle_dark_mode: Some(strings.toggle_dark_mode),
            toggle_sidebar: Some(strings.toggle_sidebar),
            not_found: Some(locale.not_found.clone()),
        }
    }
}

impl From<&NavItem> for RawNavItem {
    fn from(item: &NavItem) -> Self {
        match item {
            NavItem::Link { text, link } => Self {
                text: Some(text.clone()),
                link: Some(link.clone()),
                children: None,
            },
            NavItem::Group { text, children } => Self {
                text: Some(text.clone()),
                link: None,
                children: Some(children.iter().map(Into::into).collect()),
            },
        }
    }
}

impl From<&NavChild> for RawNavChild {
    fn from(child: &NavChild) -> Self {
        match child {
            NavChild::Path(path) => Self::Path(path.clone()),
            NavChild::Item(item) => Self::Item(item.into()),
        }
    }
}

impl From<&ThemeConfig> for RawThemeConfig {
    fn from(theme: &ThemeConfig) -> Self {
        Self {
            logo: theme.logo.clone(),
            repo: theme.repo.clone(),
            repo_label: theme.repo_label.clone(),
            edit_links: Some(theme.edit_links),
            last_updated: Some(theme.last_updated),
            contributors: Some(theme.contributors),
            docs_repo: theme.docs_repo.clone(),
            docs_branch: theme.docs_branch.clone(),
            docs_dir: theme.docs_dir.clone(),
            locales: None,
        }
    }
}
