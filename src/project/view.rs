//! Result projector
//!
//! Maps the current state to the public view. Loading states expose only a
//! phase indicator, never page content, so a caller cannot render stale data
//! mid-transition. Navigation actions are handed out exactly when legal and
//! are bound to the controller's dispatch channel; a handle captured before a
//! transition becomes a silent no-op once the epoch moves on.

use crate::state::PageState;
use tokio::sync::mpsc;

/// Direction of a queued navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavKind {
    Next,
    Prev,
}

/// A navigation request queued by a captured view handle.
///
/// The epoch records which view generation handed the handle out; the
/// controller drops requests whose epoch no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NavRequest {
    pub kind: NavKind,
    pub epoch: u64,
}

pub(crate) type NavSender = mpsc::UnboundedSender<NavRequest>;
pub(crate) type NavReceiver = mpsc::UnboundedReceiver<NavRequest>;

/// Create the dispatch channel pairing view handles with their controller
pub(crate) fn nav_channel() -> (NavSender, NavReceiver) {
    mpsc::unbounded_channel()
}

/// Zero-argument navigation action bound to a live controller.
///
/// Cloneable and safe to call at any time: if the controller has moved to a
/// different state (or been torn down) since the handle was captured, the
/// call is absorbed as a no-op.
#[derive(Debug, Clone)]
pub struct NavHandle {
    tx: NavSender,
    request: NavRequest,
}

impl NavHandle {
    fn new(tx: NavSender, kind: NavKind, epoch: u64) -> Self {
        Self {
            tx,
            request: NavRequest { kind, epoch },
        }
    }

    /// Request the navigation this handle was captured for.
    ///
    /// Enqueues the request for the controller's next cycle. Never fails; a
    /// closed channel means the call site was torn down and the request is
    /// simply dropped.
    pub fn call(&self) {
        let _ = self.tx.send(self.request);
    }
}

/// Externally observable pagination result.
///
/// The tagged counterpart of [`PageState`](crate::PageState), stripped down to
/// what a caller may act on.
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    /// The disabling sentinel is in effect
    Skipped,
    /// First page of a fresh session is on its way
    LoadingInitialResults,
    /// A later page is on its way
    LoadingNextResults,
    /// An earlier page is on its way
    LoadingPrevResults,
    /// A page is ready to render
    Loaded {
        /// Items of the current page, in display order
        page: Vec<T>,
        /// 1-based page number
        page_num: usize,
        /// Present exactly when a further page exists
        load_next: Option<NavHandle>,
        /// Present exactly when an earlier page exists
        load_prev: Option<NavHandle>,
    },
}

impl<T> ViewState<T> {
    /// Variant name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skipped => "Skipped",
            Self::LoadingInitialResults => "LoadingInitialResults",
            Self::LoadingNextResults => "LoadingNextResults",
            Self::LoadingPrevResults => "LoadingPrevResults",
            Self::Loaded { .. } => "Loaded",
        }
    }

    /// Check whether a page is ready to render
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Project the state to its public view.
///
/// `load_next` is handed out iff a further cursor exists; `load_prev` iff the
/// history is non-empty or the current page is not the first. Both are bound
/// to `tx` under the given epoch.
pub(crate) fn project<T: Clone>(
    state: &PageState<T>,
    tx: &NavSender,
    epoch: u64,
) -> ViewState<T> {
    match state {
        PageState::Skipped => ViewState::Skipped,
        PageState::LoadingInitial => ViewState::LoadingInitialResults,
        PageState::LoadingNext { .. } => ViewState::LoadingNextResults,
        PageState::LoadingPrev { .. } => ViewState::LoadingPrevResults,
        PageState::Loaded {
            page,
            current_cursor,
            prev_cursors,
            next_cursor,
        } => {
            let load_next = next_cursor
                .is_some()
                .then(|| NavHandle::new(tx.clone(), NavKind::Next, epoch));
            let load_prev = (current_cursor.is_some() || !prev_cursors.is_empty())
                .then(|| NavHandle::new(tx.clone(), NavKind::Prev, epoch));

            ViewState::Loaded {
                page: page.items.clone(),
                page_num: 1 + prev_cursors.len() + usize::from(current_cursor.is_some()),
                load_next,
                load_prev,
            }
        }
    }
}
