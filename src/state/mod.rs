//! Pagination state machine
//!
//! # Overview
//!
//! The state module holds the closed set of lifecycle states for one browsing
//! session, the cursor history that makes backward navigation possible, and the
//! pure transition function that is the only way to move between states. Every
//! legal transition is written out in [`reduce`]; anything else is an
//! [`Error::IllegalTransition`](crate::Error::IllegalTransition).

mod machine;
mod types;

pub use machine::{reduce, PageAction, PageState};
pub use types::{Cursor, CursorStack, Page};
