//! Pagination controller
//!
//! Owns one state machine per call site, detects value-level changes in the
//! caller's query identity, drives the external subscription, and turns
//! delivered snapshots into state transitions. One [`PagedQuery`] per logical
//! call site; one [`poll`](PagedQuery::poll) per recomputation cycle.

mod driver;
mod identity;
mod source;

pub use driver::PagedQuery;
pub use identity::{ArgsObject, QueryArgs, QueryIdentity, QueryRef, WindowOptions};
pub use source::QuerySource;
