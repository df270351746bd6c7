//! Subscription collaborator contract
//!
//! The reactive subscription mechanism is external to this crate. The
//! controller only needs a latest-value view of it, polled once per
//! recomputation cycle.

use super::identity::{ArgsObject, QueryRef};
use crate::error::Result;
use crate::project::PageRequest;
use crate::state::Page;

/// Latest-value subscription to a paginated query source.
///
/// Implementations wrap whatever reactive client actually runs the query. The
/// controller calls [`latest`](Self::latest) every recomputation cycle with
/// the arguments it wants the subscription driven by; the implementation is
/// expected to (re)subscribe when those arguments change and to hand back the
/// newest snapshot it has.
///
/// Contract:
/// - `Ok(None)` means the subscription for these arguments has not produced a
///   value yet (the pending indicator).
/// - A structurally identical snapshot may be redelivered at any time when
///   unrelated upstream data recomputes; the controller dedups by value.
/// - Retry and backoff for transient failures live behind this trait, not in
///   the controller. Errors returned here are surfaced to the caller as-is.
pub trait QuerySource<T> {
    /// Latest snapshot for the given query and page window, or `None` while
    /// pending
    fn latest(
        &mut self,
        query: &QueryRef,
        args: &ArgsObject,
        request: &PageRequest,
    ) -> Result<Option<Page<T>>>;
}
