//! The content store: loads the full post collection from a directory of
//! Markdown files with YAML frontmatter.
//!
//! Each source file is a `---`-fenced frontmatter block describing a
//! [`Post`] followed by a Markdown body, which is rendered to HTML. The
//! store does no gating and no sorting — it returns the raw collection the
//! feed builders consume — but it visits files in path order so the
//! collection order (and therefore the relative order of posts sharing a
//! publish instant) is identical from build to build.

use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

use pulldown_cmark::{html, Parser};
use walkdir::WalkDir;

use crate::post::Post;

const MARKDOWN_EXTENSION: &str = "md";

/// Parses a single [`Post`] from its `slug` and source text. The slug is
/// assigned by the caller (the file stem, for posts loaded from disk)
/// rather than read from the frontmatter.
pub fn parse_post(slug: &str, input: &str) -> Result<Post> {
    fn frontmatter_indices(input: &str) -> Result<(usize, usize, usize)> {
        const FENCE: &str = "---";
        if !input.starts_with(FENCE) {
            return Err(Error::FrontmatterMissingStartFence);
        }
        match input[FENCE.len()..].find(FENCE) {
            None => Err(Error::FrontmatterMissingEndFence),
            Some(offset) => Ok((
                FENCE.len(),                        // yaml_start
                FENCE.len() + offset,               // yaml_stop
                FENCE.len() + offset + FENCE.len(), // body_start
            )),
        }
    }

    let (yaml_start, yaml_stop, body_start) = frontmatter_indices(input)?;
    let mut post: Post = serde_yaml::from_str(&input[yaml_start..yaml_stop])?;
    post.slug = slug.to_owned();
    html::push_html(&mut post.body, Parser::new(&input[body_start..]));
    Ok(post)
}

/// Walks `dir` and parses every Markdown file into a [`Post`]. Files are
/// visited in path order; anything without an `.md` extension is ignored.
/// A file that fails to parse fails the whole load, with the offending
/// path annotated on the error.
pub fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    let mut posts = Vec::new();
    for result in WalkDir::new(dir).sort_by_file_name() {
        let entry = result?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXTENSION) {
            continue;
        }
        let slug = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        let contents = read_to_string(path)?;
        posts.push(parse_post(slug, &contents).map_err(|e| {
            Error::Annotated(format!("parsing post `{}`", path.display()), Box::new(e))
        })?);
    }
    tracing::debug!("loaded {} posts from `{}`", posts.len(), dir.display());
    Ok(posts)
}

/// The result of a fallible content-store operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a problem loading the post collection.
#[derive(Debug)]
pub enum Error {
    /// Returned when a source file doesn't begin with `---`.
    FrontmatterMissingStartFence,

    /// Returned when a source file's frontmatter is never closed.
    FrontmatterMissingEndFence,

    /// Returned when the frontmatter doesn't deserialize into a
    /// [`Post`].
    Yaml(serde_yaml::Error),

    /// Returned for I/O problems reading a source file.
    Io(std::io::Error),

    /// Returned for problems walking the content directory.
    Walk(walkdir::Error),

    /// Wraps another [`Error`] with context, typically the path of the
    /// file that produced it.
    Annotated(String, Box<Error>),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FrontmatterMissingStartFence => {
                write!(f, "Post must begin with `---`")
            }
            Error::FrontmatterMissingEndFence => {
                write!(f, "Missing closing `---`")
            }
            Error::Yaml(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
            Error::Walk(err) => err.fmt(f),
            Error::Annotated(context, err) => write!(f, "{}: {}", context, err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FrontmatterMissingStartFence => None,
            Error::FrontmatterMissingEndFence => None,
            Error::Yaml(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Walk(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to
    /// use the `?` operator.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    /// Converts [`walkdir::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: walkdir::Error) -> Error {
        Error::Walk(err)
    }
}
