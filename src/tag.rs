//! The tag catalog: the distinct tags in use across released posts, with
//! usage counts, ordered the way a reader scanning an alphabet expects.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::post::Post;

/// One entry in the tag catalog, as shown by the tag listing page. A
/// derived view, recomputed per call and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    /// The tag exactly as written in post frontmatter.
    pub name: String,

    /// The URL-safe form of the name, used for the tag's index route
    /// (e.g. `tags/{slug}/`).
    pub slug: String,

    /// Number of released posts carrying the tag. At least one, since
    /// only tags in use are cataloged.
    pub post_count: usize,
}

/// Builds the catalog over the posts released at `now`: one entry per
/// distinct tag, counting every released post that carries it (a post
/// with three tags contributes to three entries), sorted by name
/// ascending. The ordering folds case and diacritics so `Éclair` files
/// under E instead of after `z`; the raw name breaks ties so the order is
/// total.
pub fn catalog(posts: &[Post], now: DateTime<Utc>) -> Vec<Tag> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for post in posts.iter().filter(|p| p.is_released(now)) {
        // A tag repeated within one post still counts that post once.
        let mut seen: Vec<&str> = Vec::new();
        for tag in &post.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
    }

    let mut catalog: Vec<Tag> = counts
        .into_iter()
        .map(|(name, post_count)| Tag {
            name: name.to_owned(),
            slug: slug::slugify(name),
            post_count,
        })
        .collect();
    catalog.sort_by(|a, b| {
        collation_key(&a.name)
            .cmp(&collation_key(&b.name))
            .then_with(|| a.name.cmp(&b.name))
    });
    catalog
}

// Approximates locale collation: ASCII-fold the name, then lowercase it.
fn collation_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}
