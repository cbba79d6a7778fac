//! Defines the [`Post`] content model, the release gate that decides
//! whether a post is publicly visible, and the recency ordering shared by
//! every feed.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single blog entry as declared by its source file. The frontmatter
/// fields that the source may omit (`tags`, `isDraft`, `isFeatured`,
/// `relatedPosts`) default explicitly here so no consumer ever has to
/// null-check them.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    /// Unique identifier, taken from the source file stem rather than the
    /// frontmatter. Uniqueness across the collection is the content
    /// store's guarantee, not enforced here.
    #[serde(default)]
    pub slug: String,

    pub title: String,

    pub description: String,

    /// The publish instant. Feed membership compares this against the
    /// evaluation time, so a scheduled post becomes visible at exactly
    /// this instant with no rebuild flag.
    #[serde(
        rename = "pubDate",
        deserialize_with = "crate::date::deserialize_timestamp"
    )]
    pub published: DateTime<Utc>,

    /// Last-edit instant. Informational only; ordering never consults it.
    #[serde(
        default,
        rename = "updatedAt",
        deserialize_with = "crate::date::deserialize_optional_timestamp"
    )]
    pub updated: Option<DateTime<Utc>>,

    /// Tags as written, in declaration order. Matching is exact and
    /// case-sensitive; ordering among them carries no meaning.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Drafts never appear in any feed, whatever their other flags say.
    #[serde(default, rename = "isDraft")]
    pub draft: bool,

    #[serde(default, rename = "isFeatured")]
    pub featured: bool,

    /// Slugs of hand-picked related posts, in the author's order. Feeds
    /// ignore that order and re-sort by recency.
    #[serde(default, rename = "relatedPosts")]
    pub related: Vec<String>,

    /// The post body rendered to HTML. Filled in by the content store
    /// after the frontmatter is parsed.
    #[serde(skip)]
    pub body: String,
}

impl Post {
    /// Reports whether the post is publicly visible at `now`: not a draft,
    /// and not scheduled strictly after `now`. The caller supplies the
    /// clock, so the result is deterministic and testable.
    pub fn is_released(&self, now: DateTime<Utc>) -> bool {
        !self.draft && self.published <= now
    }

    /// Reports whether the post carries `tag`, comparing exactly as
    /// stored.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The one recency ordering: publish instant descending, most recent
/// first. Posts sharing an instant compare equal — no secondary key — so a
/// stable sort keeps their collection order.
pub fn by_recency(a: &Post, b: &Post) -> Ordering {
    b.published.cmp(&a.published)
}
