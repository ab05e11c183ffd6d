//! Navbar tree.

use serde::Serialize;

/// Navbar node: a single link or a labelled group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Link to a page or external URL.
    Link {
        /// Display text.
        text: String,
        /// Relative path or absolute URL.
        link: String,
    },
    /// Dropdown group.
    Group {
        /// Display text.
        text: String,
        /// Children in declaration order (never empty).
        children: Vec<NavChild>,
    },
}

/// Child of a navbar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavChild {
    /// Leaf page path; the renderer takes the text from the page title.
    Path(String),
    /// Nested link or group.
    Item(NavItem),
}

impl NavItem {
    /// Display text.
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// All link targets under this node, depth-first in declaration order.
    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Link { link, .. } => out.push(link),
            Self::Group { children, .. } => {
                for child in children {
                    match child {
                        NavChild::Path(path) => out.push(path),
                        NavChild::Item(item) => item.collect_links(out),
                    }
                }
            }
        }
    }
}

/// Whether a link points outside the site (carries a URL scheme).
pub fn is_external(link: &str) -> bool {
    url_scheme(link).is_some()
}

/// Check that a link is a usable relative path or absolute URL.
///
/// Returns a short reason on failure.
pub(crate) fn check_link(link: &str) -> Result<(), &'static str> {
    if link.is_empty() {
        return Err("link cannot be empty");
    }
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("link cannot contain whitespace or control characters");
    }
    if let Some((scheme, rest)) = link.split_once(':')
        && !scheme.contains(['/', '?', '#'])
    {
        if url_scheme(link).is_none() {
            return Err("link has an invalid URL scheme");
        }
        if let Some(authority) = rest.strip_prefix("//")
            && authority.is_empty()
        {
            return Err("absolute URL has no host");
        }
    }
    Ok(())
}

/// Scheme of an absolute URL (`https` in `https://example.com`).
fn url_scheme(link: &str) -> Option<&str> {
    let (scheme, _) = link.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}
