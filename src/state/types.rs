//! Core pagination data types
//!
//! Cursors are opaque tokens minted by the external source; this crate never
//! constructs or inspects their contents, it only stores and replays them.

use serde::{Deserialize, Serialize};

/// Opaque continuation token marking a page boundary.
///
/// Produced by the external paginated source. Compared by value; the absence
/// of a cursor (`Option<Cursor>` being `None`) denotes the start of the
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a raw token from the source
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for handing back to the source
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Ordered history of prior page-start cursors, oldest first.
///
/// Mutated only by [`push`](Self::push) on forward navigation and
/// [`pop`](Self::pop) from the tail on backward navigation. Entries are
/// strictly the start-cursors of pages visited before the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CursorStack(Vec<Cursor>);

impl CursorStack {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of earlier pages on record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether any earlier page is on record
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record the start-cursor of the page being navigated away from
    pub fn push(&mut self, cursor: Cursor) {
        self.0.push(cursor);
    }

    /// Take back the most recent start-cursor; `None` when the only earlier
    /// page is the first page of the sequence
    pub fn pop(&mut self) -> Option<Cursor> {
        self.0.pop()
    }
}

/// One page of results as delivered by the subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in display order
    pub items: Vec<T>,
    /// Continuation cursor for the page after this one
    pub continue_cursor: Option<Cursor>,
    /// Whether the source reported the end of the sequence
    pub is_done: bool,
}

impl<T> Page<T> {
    /// Create a page with a continuation cursor
    pub fn new(items: Vec<T>, continue_cursor: impl Into<Cursor>, is_done: bool) -> Self {
        Self {
            items,
            continue_cursor: Some(continue_cursor.into()),
            is_done,
        }
    }

    /// Create a final page with no continuation
    pub fn done(items: Vec<T>) -> Self {
        Self {
            items,
            continue_cursor: None,
            is_done: true,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cursor to request the next page with, or `None` at the end of the
    /// sequence.
    ///
    /// A page that is not done must carry a continuation cursor; a violation
    /// is surfaced as [`Error::MalformedPage`](crate::Error::MalformedPage)
    /// rather than defaulted.
    pub fn next_cursor(&self) -> crate::Result<Option<Cursor>> {
        if self.is_done {
            return Ok(None);
        }

        self.continue_cursor
            .clone()
            .map(Some)
            .ok_or_else(|| crate::Error::malformed_page("page is not done but has no continuation cursor"))
    }
}
