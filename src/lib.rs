//! The library code for the `scop` blog feed engine. The architecture can
//! be generally broken down into two distinct steps:
//!
//! 1. Loading the post collection from source files on disk
//!    ([`crate::store`], configured by [`crate::config`])
//! 2. Deriving the site's views from that collection: the sorted and
//!    filtered feeds ([`crate::feed`]), the tag catalog ([`crate::tag`]),
//!    paginated listings ([`crate::page`]), the Atom document
//!    ([`crate::atom`]), and the search-index projection
//!    ([`crate::search`])
//!
//! Every view is a pure function of the collection plus an explicit
//! evaluation instant. Visibility depends on the clock — a scheduled post
//! appears at exactly its publish instant — so callers pass `now` rather
//! than the library reading ambient time, and identical inputs always
//! produce identical output.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod atom;
pub mod config;
pub mod date;
pub mod feed;
pub mod page;
pub mod post;
pub mod search;
pub mod store;
pub mod tag;
