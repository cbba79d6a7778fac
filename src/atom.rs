//! Support for creating an Atom feed from the released posts.

use std::fmt;
use std::io::Write;

use atom_syndication::{
    EntryBuilder, Error as AtomError, FeedBuilder, LinkBuilder, Person, PersonBuilder, Text,
};
use chrono::{DateTime, Utc};
use url::Url;

use crate::config::{Author, Site};
use crate::feed;
use crate::post::Post;

/// A post projected to the fields a feed serializer needs. Public so that
/// serializers other than the Atom writer (an RSS endpoint, say) can
/// consume the same projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,

    /// Absolute URL of the post page: `posts/{slug}` beneath the site's
    /// base URL.
    pub link: Url,

    pub description: String,

    pub published: DateTime<Utc>,
}

impl FeedEntry {
    /// Projects a single post against the site's base URL.
    pub fn from_post(post: &Post, website: &Url) -> Result<FeedEntry> {
        Ok(FeedEntry {
            title: post.title.clone(),
            link: website.join(&format!("posts/{}", post.slug))?,
            description: post.description.clone(),
            published: post.published,
        })
    }
}

/// Projects every post released at `now`, most recent first.
pub fn entries(site: &Site, posts: &[Post], now: DateTime<Utc>) -> Result<Vec<FeedEntry>> {
    feed::all_visible(posts, now)
        .into_iter()
        .map(|post| FeedEntry::from_post(post, &site.website))
        .collect()
}

/// Creates the site's Atom feed from its settings and posts and writes the
/// XML to `w`. `now` is both the release gate's evaluation time and the
/// feed's `updated` stamp, so identical inputs serialize identically.
pub fn write_feed<W: Write>(
    site: &Site,
    posts: &[Post],
    now: DateTime<Utc>,
    w: W,
) -> Result<()> {
    feed_document(site, posts, now)?.write_to(w)?;
    Ok(())
}

fn feed_document(
    site: &Site,
    posts: &[Post],
    now: DateTime<Utc>,
) -> Result<atom_syndication::Feed> {
    let entries: Vec<atom_syndication::Entry> = entries(site, posts, now)?
        .iter()
        .map(|entry| atom_entry(entry, &site.author))
        .collect();

    Ok(FeedBuilder::default()
        .title(Text::plain(site.title.clone()))
        .id(site.website.to_string())
        .subtitle(Some(Text::plain(site.description.clone())))
        .updated(now.fixed_offset())
        .authors(author_to_people(&site.author))
        .links(vec![LinkBuilder::default()
            .href(site.website.to_string())
            .rel("alternate")
            .build()])
        .entries(entries)
        .build())
}

fn atom_entry(entry: &FeedEntry, author: &Option<Author>) -> atom_syndication::Entry {
    let published = entry.published.fixed_offset();
    EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(entry.link.to_string())
        .updated(published)
        .published(Some(published))
        .authors(author_to_people(author))
        .links(vec![LinkBuilder::default()
            .href(entry.link.to_string())
            .rel("alternate")
            .build()])
        .summary(Some(Text::plain(entry.description.clone())))
        .build()
}

fn author_to_people(author: &Option<Author>) -> Vec<Person> {
    match author {
        Some(author) => vec![PersonBuilder::default()
            .name(author.name.clone())
            .email(author.email.clone())
            .build()],
        None => Vec::new(),
    }
}

/// The result of a fallible feed operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem creating a feed.
#[derive(Debug)]
pub enum Error {
    /// Returned when there is a generic I/O error.
    Io(std::io::Error),

    /// Returned when there is an Atom-related error.
    Atom(AtomError),

    /// Returned when a post slug can't be joined onto the site URL.
    Url(url::ParseError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => err.fmt(f),
            Error::Atom(err) => err.fmt(f),
            Error::Url(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Atom(err) => Some(err),
            Error::Url(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: url::ParseError) -> Error {
        Error::Url(err)
    }
}
