//! The projection handed to the external search-index builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed;
use crate::post::Post;

/// What the search index knows about one post: the fields the search UI
/// matches against and displays in results.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchDocument {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl From<&Post> for SearchDocument {
    fn from(post: &Post) -> SearchDocument {
        SearchDocument {
            slug: post.slug.clone(),
            title: post.title.clone(),
            description: post.description.clone(),
            tags: post.tags.clone(),
        }
    }
}

/// Projects every post released at `now`, most recent first, ready to
/// serialize into the index.
pub fn documents(posts: &[Post], now: DateTime<Utc>) -> Vec<SearchDocument> {
    feed::all_visible(posts, now)
        .into_iter()
        .map(SearchDocument::from)
        .collect()
}
