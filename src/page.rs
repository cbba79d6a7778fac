//! Pagination arithmetic for listing pages.
//!
//! Listing routes are 1-indexed: page 1 holds the first `page_size`
//! items. Out-of-range page numbers degrade to empty slices so a "no
//! results" page renders without special cases; the only hard error in
//! this module is a page size of zero, which has no sensible coercion and
//! is surfaced to the caller.

use std::fmt;

/// One listing page: its 1-indexed number and the items it shows.
/// Computed on demand, never persisted.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub number: usize,
    pub items: &'a [T],
}

/// The number of pages needed to list `total_items` at `page_size` items
/// per page, rounding up. Zero items is zero pages — "no items" is
/// distinct from "one short page".
pub fn page_count(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    Ok(match total_items % page_size {
        0 => total_items / page_size,
        _ => total_items / page_size + 1,
    })
}

/// The 1-indexed page numbers for a listing, in render order:
/// `1..=page_count`. Empty when there are no items.
pub fn page_numbers(total_items: usize, page_size: usize) -> Result<Vec<usize>> {
    Ok((1..=page_count(total_items, page_size)?).collect())
}

/// The items on the 1-indexed page `page_number`. A page number outside
/// `[1, page_count]` — including 0 — yields an empty slice rather than an
/// error.
pub fn page_slice<'a, T>(
    items: &'a [T],
    page_number: usize,
    page_size: usize,
) -> Result<&'a [T]> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    if page_number == 0 {
        return Ok(&[]);
    }
    let start = match (page_number - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return Ok(&[]),
    };
    let stop = items.len().min(start + page_size);
    Ok(&items[start..stop])
}

/// Splits `items` into consecutive [`Page`]s of `page_size`. An empty
/// input produces no pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Vec<Page<T>>> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    Ok(items
        .chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            items: chunk,
        })
        .collect())
}

/// The result of a fallible pagination operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an invalid pagination request.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Returned when the page size is zero.
    InvalidPageSize,
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPageSize => write!(f, "Page size must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}
