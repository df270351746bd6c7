//! State variants and the transition function
//!
//! One [`PageState`] exists per browsing session. It is mutated exclusively by
//! feeding [`PageAction`]s through [`reduce`], which is pure and exhaustive:
//! every (state, action) pairing is either written out below or rejected as an
//! illegal transition.

use super::types::{Cursor, CursorStack, Page};
use crate::error::{Error, Result};

/// Lifecycle state of one pagination session.
///
/// `Skipped` and `LoadingInitial` carry no history; only `Loaded` exposes page
/// content. The loading variants remember the cursor being fetched so the
/// arriving page can be attributed to it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// The caller supplied the disabling sentinel; no subscription is active
    Skipped,
    /// Waiting for the first page of a fresh session
    LoadingInitial,
    /// Waiting for the page that starts at `target`
    LoadingNext {
        /// Start-cursor of the page being fetched
        target: Cursor,
        /// History carried over from the page navigated away from
        prev_cursors: CursorStack,
    },
    /// Waiting for an earlier page; `target` of `None` means the first page
    LoadingPrev {
        /// Start-cursor of the page being fetched, `None` for the first page
        target: Option<Cursor>,
        /// History with the popped entry already removed
        prev_cursors: CursorStack,
    },
    /// A page is on display
    Loaded {
        /// The latest snapshot for the current page
        page: Page<T>,
        /// Start-cursor of the current page, `None` on the first page
        current_cursor: Option<Cursor>,
        /// Start-cursors of pages visited before the current one
        prev_cursors: CursorStack,
        /// Cursor for the page after this one, `None` at the end
        next_cursor: Option<Cursor>,
    },
}

impl<T> PageState<T> {
    /// Variant name for diagnostics and error reporting
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skipped => "Skipped",
            Self::LoadingInitial => "LoadingInitial",
            Self::LoadingNext { .. } => "LoadingNext",
            Self::LoadingPrev { .. } => "LoadingPrev",
            Self::Loaded { .. } => "Loaded",
        }
    }

    /// Check whether a page is currently on display
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// 1-based page number: 1 + earlier pages + 1 more when the current page
    /// is not the first
    pub fn page_num(&self) -> Option<usize> {
        match self {
            Self::Loaded {
                current_cursor,
                prev_cursors,
                ..
            } => Some(1 + prev_cursors.len() + usize::from(current_cursor.is_some())),
            _ => None,
        }
    }
}

/// Actions accepted by the pagination state machine.
///
/// Named in past tense: they record what happened, not what to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction<T> {
    /// The caller asked for the page after the current one
    NextPageRequested,
    /// The caller asked for the page before the current one
    PrevPageRequested,
    /// The subscription delivered a snapshot
    ResultsArrived(Page<T>),
}

impl<T> PageAction<T> {
    /// Variant name for diagnostics and error reporting
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextPageRequested => "NextPageRequested",
            Self::PrevPageRequested => "PrevPageRequested",
            Self::ResultsArrived(_) => "ResultsArrived",
        }
    }
}

/// Apply one action to the state, returning the successor state.
///
/// Pure transition function of the pagination machine. Illegal pairings are
/// contract violations and come back as
/// [`Error::IllegalTransition`]; they are never silently swallowed.
pub fn reduce<T>(state: PageState<T>, action: PageAction<T>) -> Result<PageState<T>> {
    match action {
        PageAction::NextPageRequested => match state {
            PageState::Loaded {
                current_cursor,
                mut prev_cursors,
                next_cursor: Some(target),
                ..
            } => {
                if let Some(current) = current_cursor {
                    prev_cursors.push(current);
                }
                Ok(PageState::LoadingNext {
                    target,
                    prev_cursors,
                })
            }
            other => Err(Error::illegal_transition(other.name(), "NextPageRequested")),
        },
        PageAction::PrevPageRequested => match state {
            PageState::Loaded {
                current_cursor,
                mut prev_cursors,
                ..
            } if current_cursor.is_some() || !prev_cursors.is_empty() => {
                // Popping an empty stack means "return to the first page".
                let target = prev_cursors.pop();
                Ok(PageState::LoadingPrev {
                    target,
                    prev_cursors,
                })
            }
            other => Err(Error::illegal_transition(other.name(), "PrevPageRequested")),
        },
        PageAction::ResultsArrived(page) => {
            let next_cursor = page.next_cursor()?;

            match state {
                PageState::LoadingInitial => Ok(PageState::Loaded {
                    page,
                    current_cursor: None,
                    prev_cursors: CursorStack::new(),
                    next_cursor,
                }),
                PageState::LoadingNext {
                    target,
                    prev_cursors,
                } => Ok(PageState::Loaded {
                    page,
                    current_cursor: Some(target),
                    prev_cursors,
                    next_cursor,
                }),
                PageState::LoadingPrev {
                    target,
                    prev_cursors,
                } => Ok(PageState::Loaded {
                    page,
                    current_cursor: target,
                    prev_cursors,
                    next_cursor,
                }),
                // In-place refresh of the page on display: content and
                // continuation are replaced, cursor and history stay put.
                PageState::Loaded {
                    current_cursor,
                    prev_cursors,
                    ..
                } => Ok(PageState::Loaded {
                    page,
                    current_cursor,
                    prev_cursors,
                    next_cursor,
                }),
                other @ PageState::Skipped => {
                    Err(Error::illegal_transition(other.name(), "ResultsArrived"))
                }
            }
        }
    }
}
