//! Argument projector
//!
//! Maps the current state to the page-window parameters the subscription
//! should be driven with.

use crate::state::{Cursor, PageState};
use serde::{Deserialize, Serialize};

/// Page-window parameters merged into a subscription call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Start-cursor of the requested page, `None` for the start of the
    /// sequence
    pub cursor: Option<Cursor>,
    /// Number of items to request; the same window size for every page of a
    /// session
    pub num_items: u32,
}

/// Project the state to subscription parameters.
///
/// Returns `None` while `Skipped`: the subscription must be disabled entirely,
/// not driven with placeholder arguments. While `Loaded` the request carries
/// the current page's own cursor, so an upstream recomputation re-fetches the
/// page in place and live updates flow into already-displayed data.
pub fn subscription_args<T>(state: &PageState<T>, num_items: u32) -> Option<PageRequest> {
    let cursor = match state {
        PageState::Skipped => return None,
        PageState::LoadingInitial => None,
        PageState::LoadingNext { target, .. } => Some(target.clone()),
        PageState::LoadingPrev { target, .. } => target.clone(),
        PageState::Loaded { current_cursor, .. } => current_cursor.clone(),
    };

    Some(PageRequest { cursor, num_items })
}
