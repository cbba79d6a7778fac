//! Feed selection and ordering: the closed set of filters and the
//! builders that produce every sorted view of the post collection.
//!
//! All gating goes through [`select`], which combines one [`Filter`] with
//! the release gate — so a draft or future-dated post cannot leak into
//! any feed, whichever filter a caller picks. All ordering goes through
//! [`post::by_recency`] behind a stable sort, so posts sharing a publish
//! instant keep their collection order.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::post::{self, Post};

/// The filters a feed can apply on top of the release gate. A closed set
/// rather than an arbitrary predicate: every feed the site renders is one
/// of these, and adding a new kind of feed means adding a variant here.
#[derive(Clone, Debug)]
pub enum Filter<'a> {
    /// Every released post.
    All,

    /// Posts whose tag list contains the tag, compared exactly as stored
    /// (case-sensitive).
    ByTag(&'a str),

    /// Posts whose slug is in the set. The set carries no order; output
    /// order comes from the recency sort like every other feed. An empty
    /// set selects nothing.
    BySlugSet(HashSet<&'a str>),

    /// Posts flagged as featured.
    Featured,
}

impl Filter<'_> {
    fn matches(&self, post: &Post) -> bool {
        match self {
            Filter::All => true,
            Filter::ByTag(tag) => post.has_tag(tag),
            Filter::BySlugSet(slugs) => slugs.contains(post.slug.as_str()),
            Filter::Featured => post.featured,
        }
    }
}

/// Applies `filter` AND the release gate to the collection. Output keeps
/// collection order; sorting belongs to the builders below.
pub fn select<'a>(posts: &'a [Post], filter: &Filter, now: DateTime<Utc>) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.is_released(now) && filter.matches(p))
        .collect()
}

// `sort_by` is stable, so equal publish instants keep collection order.
fn sorted(mut posts: Vec<&Post>) -> Vec<&Post> {
    posts.sort_by(|a, b| post::by_recency(a, b));
    posts
}

/// Every released post, most recent first.
pub fn all_visible<'a>(posts: &'a [Post], now: DateTime<Utc>) -> Vec<&'a Post> {
    sorted(select(posts, &Filter::All, now))
}

/// The `count` most recent released posts. Asking for more than exist
/// returns what exists; asking for zero returns nothing, not everything.
pub fn latest<'a>(posts: &'a [Post], now: DateTime<Utc>, count: usize) -> Vec<&'a Post> {
    let mut feed = all_visible(posts, now);
    feed.truncate(count);
    feed
}

/// Released featured posts, most recent first, truncated to `limit` when
/// one is given. `Some(0)` means an empty feed, not an unbounded one.
pub fn featured<'a>(
    posts: &'a [Post],
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<&'a Post> {
    let mut feed = sorted(select(posts, &Filter::Featured, now));
    if let Some(limit) = limit {
        feed.truncate(limit);
    }
    feed
}

/// Released posts carrying `tag`, most recent first.
pub fn by_tag<'a>(posts: &'a [Post], now: DateTime<Utc>, tag: &str) -> Vec<&'a Post> {
    sorted(select(posts, &Filter::ByTag(tag), now))
}

/// Released posts named by `slugs`, most recent first. The order of
/// `slugs` is ignored; slugs naming no post in the collection are
/// silently skipped, and an empty list yields an empty feed.
pub fn related<'a>(posts: &'a [Post], now: DateTime<Utc>, slugs: &[String]) -> Vec<&'a Post> {
    let slugs: HashSet<&str> = slugs.iter().map(String::as_str).collect();
    sorted(select(posts, &Filter::BySlugSet(slugs), now))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn post(slug: &str, published_at: i64) -> Post {
        Post {
            slug: slug.to_owned(),
            title: format!("Title for {}", slug),
            description: format!("Description for {}", slug),
            published: instant(published_at),
            updated: None,
            tags: Vec::new(),
            draft: false,
            featured: false,
            related: Vec::new(),
            body: String::new(),
        }
    }

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn slugs(feed: &[&Post]) -> Vec<String> {
        feed.iter().map(|p| p.slug.clone()).collect()
    }

    /// A collection exercising every flag: a draft, a future post, a
    /// featured pair, a tagged pair, and two posts sharing an instant.
    /// `now` for this fixture is 1000.
    fn fixture() -> Vec<Post> {
        let mut draft = post("draft", 100);
        draft.draft = true;
        draft.featured = true;
        draft.tags = vec!["rust".to_owned()];

        let mut scheduled = post("scheduled", 1001);
        scheduled.featured = true;
        scheduled.tags = vec!["rust".to_owned()];

        let mut old_featured = post("old-featured", 200);
        old_featured.featured = true;

        let mut new_featured = post("new-featured", 900);
        new_featured.featured = true;

        let mut tagged_rust = post("tagged-rust", 300);
        tagged_rust.tags = vec!["rust".to_owned(), "til".to_owned()];

        let mut tagged_til = post("tagged-til", 400);
        tagged_til.tags = vec!["til".to_owned()];

        // Same instant; collection order must survive the sort.
        let tie_first = post("tie-first", 500);
        let tie_second = post("tie-second", 500);

        vec![
            draft,
            scheduled,
            old_featured,
            new_featured,
            tagged_rust,
            tagged_til,
            tie_first,
            tie_second,
        ]
    }

    #[test]
    fn test_all_visible_excludes_drafts_and_future_posts() {
        let posts = fixture();
        let feed = all_visible(&posts, instant(1000));
        assert!(!slugs(&feed).iter().any(|s| s == "draft" || s == "scheduled"));
        assert_eq!(6, feed.len());
    }

    #[test]
    fn test_all_visible_most_recent_first() {
        let posts = fixture();
        let feed = all_visible(&posts, instant(1000));
        for pair in feed.windows(2) {
            assert!(pair[0].published >= pair[1].published);
        }
    }

    #[test]
    fn test_all_visible_keeps_collection_order_on_ties() {
        let posts = fixture();
        let feed = all_visible(&posts, instant(1000));
        let order = slugs(&feed);
        let first = order.iter().position(|s| s == "tie-first").unwrap();
        let second = order.iter().position(|s| s == "tie-second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_scheduled_post_appears_once_now_reaches_it() {
        let posts = fixture();
        assert!(!slugs(&all_visible(&posts, instant(1000)))
            .contains(&"scheduled".to_owned()));
        assert!(slugs(&all_visible(&posts, instant(1001)))
            .contains(&"scheduled".to_owned()));
    }

    #[test]
    fn test_latest_truncates_to_count() {
        let posts = fixture();
        let feed = latest(&posts, instant(1000), 3);
        assert_eq!(vec!["new-featured", "tie-first", "tie-second"], slugs(&feed));
    }

    #[test]
    fn test_latest_with_count_beyond_collection() {
        let posts = fixture();
        assert_eq!(6, latest(&posts, instant(1000), 50).len());
    }

    #[test]
    fn test_latest_with_zero_count() {
        let posts = fixture();
        assert!(latest(&posts, instant(1000), 0).is_empty());
    }

    #[test]
    fn test_featured_applies_release_gate() {
        let posts = fixture();
        let feed = featured(&posts, instant(1000), None);
        // The draft and the scheduled post are both flagged featured and
        // must still be absent.
        assert_eq!(vec!["new-featured", "old-featured"], slugs(&feed));
    }

    #[test]
    fn test_featured_with_limit() {
        let posts = fixture();
        assert_eq!(
            vec!["new-featured"],
            slugs(&featured(&posts, instant(1000), Some(1))),
        );
    }

    #[test]
    fn test_featured_with_zero_limit_is_empty() {
        let posts = fixture();
        assert!(featured(&posts, instant(1000), Some(0)).is_empty());
    }

    #[test]
    fn test_by_tag_matches_exactly() {
        let posts = fixture();
        assert_eq!(
            vec!["tagged-rust"],
            slugs(&by_tag(&posts, instant(1000), "rust")),
        );
        assert!(by_tag(&posts, instant(1000), "Rust").is_empty());
    }

    #[test]
    fn test_by_tag_sorts_by_recency() {
        let posts = fixture();
        assert_eq!(
            vec!["tagged-til", "tagged-rust"],
            slugs(&by_tag(&posts, instant(1000), "til")),
        );
    }

    #[test]
    fn test_related_ignores_slug_order() {
        let posts = fixture();
        let wanted = vec!["tagged-rust".to_owned(), "tagged-til".to_owned()];
        let reversed = vec!["tagged-til".to_owned(), "tagged-rust".to_owned()];
        // tagged-til is more recent, so it leads either way.
        let expected = vec!["tagged-til", "tagged-rust"];
        assert_eq!(expected, slugs(&related(&posts, instant(1000), &wanted)));
        assert_eq!(expected, slugs(&related(&posts, instant(1000), &reversed)));
    }

    #[test]
    fn test_related_with_empty_slug_list() {
        let posts = fixture();
        assert!(related(&posts, instant(1000), &[]).is_empty());
    }

    #[test]
    fn test_related_skips_unknown_and_gated_slugs() {
        let posts = fixture();
        let wanted = vec![
            "draft".to_owned(),
            "scheduled".to_owned(),
            "no-such-post".to_owned(),
            "tagged-til".to_owned(),
        ];
        assert_eq!(
            vec!["tagged-til"],
            slugs(&related(&posts, instant(1000), &wanted)),
        );
    }

    #[test]
    fn test_select_preserves_collection_order() {
        let posts = fixture();
        let picked = select(&posts, &Filter::Featured, instant(1000));
        assert_eq!(vec!["old-featured", "new-featured"], slugs(&picked));
    }

    #[test]
    fn test_empty_collection_degrades_to_empty_feeds() {
        let posts: Vec<Post> = Vec::new();
        let now = instant(1000);
        assert!(all_visible(&posts, now).is_empty());
        assert!(latest(&posts, now, 3).is_empty());
        assert!(featured(&posts, now, None).is_empty());
        assert!(by_tag(&posts, now, "rust").is_empty());
        assert!(related(&posts, now, &["a".to_owned()]).is_empty());
    }

    #[test]
    fn test_identical_inputs_give_identical_feeds() {
        let posts = fixture();
        let now = instant(1000);
        assert_eq!(
            slugs(&all_visible(&posts, now)),
            slugs(&all_visible(&posts, now)),
        );
        assert_eq!(
            slugs(&featured(&posts, now, Some(2))),
            slugs(&featured(&posts, now, Some(2))),
        );
    }
}
