//! Query identity
//!
//! The triple (query reference, arguments, window options) that decides
//! whether an existing pagination session still applies. Compared by value:
//! the caller may rebuild the triple every cycle and nothing resets unless
//! something actually differs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object holding the caller's query arguments, excluding the page
/// window (which this crate injects)
pub type ArgsObject = serde_json::Map<String, Value>;

/// Opaque, value-comparable handle to a paginated query function.
///
/// The controller never interprets it; it only forwards it to the
/// [`QuerySource`](crate::QuerySource) and compares it for identity changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryRef(String);

impl QueryRef {
    /// Wrap a query function reference
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

/// Query arguments, or the sentinel disabling the subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryArgs {
    /// Live arguments for the query function
    Args(ArgsObject),
    /// Disable the query entirely; the session stays `Skipped`
    Skip,
}

impl QueryArgs {
    /// Arguments with no fields
    pub fn empty() -> Self {
        Self::Args(ArgsObject::new())
    }

    /// Check for the disabling sentinel
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// The argument object, unless skipping
    pub fn as_object(&self) -> Option<&ArgsObject> {
        match self {
            Self::Args(args) => Some(args),
            Self::Skip => None,
        }
    }
}

impl From<ArgsObject> for QueryArgs {
    fn from(args: ArgsObject) -> Self {
        Self::Args(args)
    }
}

/// Page-window options for one browsing session.
///
/// Validated at construction: a window of zero items fails fast, before any
/// pagination state exists. The window size is fixed for the lifetime of one
/// query identity; changing it is an identity change and restarts at page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    initial_num_items: u32,
}

impl WindowOptions {
    /// Create window options with the given page size
    pub fn new(initial_num_items: u32) -> Result<Self> {
        if initial_num_items == 0 {
            return Err(Error::InvalidWindow);
        }
        Ok(Self { initial_num_items })
    }

    /// Items requested per page, for every page of the session
    pub fn initial_num_items(&self) -> u32 {
        self.initial_num_items
    }
}

/// The value-compared triple that scopes one pagination session.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryIdentity {
    /// The paginated query function
    pub query: QueryRef,
    /// Arguments excluding the page window, or the skip sentinel
    pub args: QueryArgs,
    /// Page-window options
    pub options: WindowOptions,
}

impl QueryIdentity {
    /// Build an identity from the caller's inputs for this cycle
    pub fn new(query: QueryRef, args: QueryArgs, options: WindowOptions) -> Self {
        Self {
            query,
            args,
            options,
        }
    }
}
