//! Theme settings shared by all locales.
//!
//! Besides the flat settings record, this module derives the repository
//! links a renderer needs: the navbar repository link and per-page
//! "edit this page" links.

use serde::Serialize;

const GITHUB: &str = "https://github.com";

/// Resolved theme settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Navbar logo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Project repository: `owner/name` on GitHub, or a full URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Explicit label of the repository link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_label: Option<String>,
    /// Render "edit this page" links.
    pub edit_links: bool,
    /// Render last-updated timestamps.
    pub last_updated: bool,
    /// Render contributor lists.
    pub contributors: bool,
    /// Repository holding the docs sources (required with `edit_links`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_repo: Option<String>,
    /// Branch holding the docs sources (required with `edit_links`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_branch: Option<String>,
    /// Docs directory inside the repository (required with `edit_links`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo: None,
            repo: None,
            repo_label: None,
            edit_links: false,
            last_updated: false,
            contributors: true,
            docs_repo: None,
            docs_branch: None,
            docs_dir: None,
        }
    }
}

impl ThemeConfig {
    /// URL of the project repository.
    pub fn repo_link(&self) -> Option<String> {
        self.repo.as_deref().map(repo_url)
    }

    /// Label of the repository link, inferred from the host when not set.
    pub fn repo_link_label(&self) -> Option<String> {
        if let Some(label) = &self.repo_label {
            return Some(label.clone());
        }
        let url = self.repo_link()?;
        let label = match RepoHost::of(&url) {
            RepoHost::GitHub => "GitHub",
            RepoHost::GitLab => "GitLab",
            RepoHost::Bitbucket => "Bitbucket",
            RepoHost::Other => "Source",
        };
        Some(label.to_owned())
    }

    /// "Edit this page" URL for a source file relative to `docs_dir`.
    ///
    /// Returns `None` when edit links are disabled.
    pub fn edit_link(&self, page_path: &str) -> Option<String> {
        if !self.edit_links {
            return None;
        }
        let base = repo_url(self.docs_repo.as_deref()?);
        let branch = self.docs_branch.as_deref()?;
        let file = join_path(self.docs_dir.as_deref()?, page_path);

        let link = match RepoHost::of(&base) {
            RepoHost::GitLab => format!("{base}/-/edit/{branch}/{file}"),
            RepoHost::Bitbucket => {
                format!("{base}/src/{branch}/{file}?mode=edit&spa=0&at={branch}")
            }
            RepoHost::GitHub | RepoHost::Other => format!("{base}/edit/{branch}/{file}"),
        };
        Some(link)
    }
}

/// Whether `host` is `domain` itself or one of its subdomains.
fn on_domain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('.'))
}

#[derive(Debug, PartialEq, Eq)]
enum RepoHost {
    GitHub,
    GitLab,
    Bitbucket,
    Other,
}

impl RepoHost {
    fn of(url: &str) -> Self {
        let host = url
            .split_once("://")
            .map_or(url, |(_, rest)| rest)
            .split('/')
            .next()
            .unwrap_or_default();
        if on_domain(host, "github.com") {
            Self::GitHub
        } else if host.contains("gitlab") {
            Self::GitLab
        } else if on_domain(host, "bitbucket.org") {
            Self::Bitbucket
        } else {
            Self::Other
        }
    }
}

/// Expand a bare `owner/name` identifier to a GitHub URL.
fn repo_url(repo: &str) -> String {
    if repo.contains("://") {
        repo.trim_end_matches('/').to_owned()
    } else {
        format!("{GITHUB}/{}", repo.trim_matches('/'))
    }
}

fn join_path(dir: &str, page: &str) -> String {
    let dir = dir.trim_matches('/');
    let page = page.trim_start_matches('/');
    if dir.is_empty() {
        page.to_owned()
    } else {
        format!("{dir}/{page}")
    }
}
