//! Site-wide settings, loaded from a `site.yaml` at the project root.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use url::Url;

const SITE_FILE: &str = "site.yaml";

/// The person credited in the feed.
#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct PostsPerPage(usize);
impl Default for PostsPerPage {
    fn default() -> Self {
        PostsPerPage(5)
    }
}

/// Raw deserialization target for `site.yaml`.
#[derive(Deserialize)]
struct SiteFile {
    title: String,
    description: String,
    website: Url,
    #[serde(default)]
    author: Option<Author>,
    #[serde(default)]
    posts_per_page: PostsPerPage,
    #[serde(default)]
    og_image: Option<String>,
}

/// Site-wide settings: the paginator's page size plus the metadata the
/// feed writer needs.
#[derive(Clone, Debug)]
pub struct Site {
    pub title: String,
    pub description: String,

    /// Absolute base URL of the deployed site. Always ends in a slash so
    /// post links join beneath it instead of replacing its last segment.
    pub website: Url,

    pub author: Option<Author>,

    /// Page size for listing pages.
    pub posts_per_page: usize,

    /// Site-relative path of the default Open Graph image, consumed by
    /// the external image pipeline.
    pub og_image: Option<String>,
}

impl Site {
    /// Loads `site.yaml` from `dir` or the nearest ancestor directory
    /// that has one.
    pub fn from_directory(dir: &Path) -> Result<Site> {
        let path = dir.join(SITE_FILE);
        if path.exists() {
            Site::from_file(&path)
        } else {
            match dir.parent() {
                Some(parent) => Site::from_directory(parent),
                None => Err(anyhow!(
                    "Could not find `{}` in any parent directory",
                    SITE_FILE
                )),
            }
        }
    }

    /// Loads settings from a specific `site.yaml` path.
    pub fn from_file(path: &Path) -> Result<Site> {
        let file = File::open(path)
            .map_err(|e| anyhow!("Opening site file `{}`: {}", path.display(), e))?;
        let raw: SiteFile = serde_yaml::from_reader(file)?;
        tracing::debug!("site settings loaded from `{}`", path.display());

        // `Url::join` treats a last path segment without a trailing slash
        // as a file and replaces it, so normalize the base here once.
        let mut website = raw.website;
        if !website.path().ends_with('/') {
            let path = format!("{}/", website.path());
            website.set_path(&path);
        }

        Ok(Site {
            title: raw.title,
            description: raw.description,
            website,
            author: raw.author,
            posts_per_page: raw.posts_per_page.0,
            og_image: raw.og_image,
        })
    }
}
