//! # pagenav
//!
//! Stateful next/prev page navigation over cursor-paginated reactive query
//! sources.
//!
//! A cursor-paginated source only moves forward: each page hands out a
//! continuation cursor for the one after it. This crate wraps such a source
//! in a finite-state controller that remembers where earlier pages started,
//! so a caller gets a bidirectional page browser, while staying compatible
//! with reactive recomputation: the subscription may redeliver a fresh
//! snapshot for the *same* page whenever the underlying data changes, and the
//! current page updates in place.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagenav::{PagedQuery, QueryArgs, QueryRef, ViewState, WindowOptions};
//!
//! let mut browser = PagedQuery::new();
//! let options = WindowOptions::new(25)?;
//! let query = QueryRef::new("messages:list");
//!
//! // Once per recomputation cycle of the host:
//! match browser.poll(&mut source, &query, &QueryArgs::empty(), options)? {
//!     ViewState::Loaded { page, page_num, load_next, .. } => {
//!         render(&page, page_num);
//!         if let Some(next) = load_next {
//!             on_next_button(move || next.call());
//!         }
//!     }
//!     other => render_spinner(other.name()),
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      PagedQuery (controller)                 │
//! │  identity diffing · nav dispatch · snapshot dedup · lifecycle│
//! └──────────────────────────────────────────────────────────────┘
//!            │                  │                    │
//! ┌──────────┴───────┐ ┌────────┴─────────┐ ┌────────┴─────────┐
//! │  state machine   │ │ arg projector    │ │ result projector │
//! │  PageState       │ │ PageRequest      │ │ ViewState        │
//! │  reduce(s, a)    │ │ cursor + window  │ │ page + actions   │
//! └──────────────────┘ └──────────────────┘ └──────────────────┘
//! ```
//!
//! The reactive subscription itself is a collaborator behind the
//! [`QuerySource`] trait; this crate holds only the current page's data plus
//! a stack of earlier cursors, never multiple pages at once, and leaves
//! retries to the collaborator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Pagination state machine: states, cursor history, transition function
pub mod state;

/// Projections of state to subscription arguments and to the public view
pub mod project;

/// The per-call-site controller and its collaborator contracts
pub mod controller;

// ============================================================================
// Re-exports
// ============================================================================

pub use controller::{ArgsObject, PagedQuery, QueryArgs, QueryIdentity, QueryRef, QuerySource, WindowOptions};
pub use error::{Error, Result};
pub use project::{subscription_args, NavHandle, PageRequest, ViewState};
pub use state::{reduce, Cursor, CursorStack, Page, PageAction, PageState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
