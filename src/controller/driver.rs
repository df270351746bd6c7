//! The pagination controller
//!
//! One [`PagedQuery`] per logical call site. Each recomputation cycle the
//! host calls [`poll`](PagedQuery::poll) with its current query, arguments and
//! window; the controller resets on identity changes, applies queued
//! navigation, drives the subscription, folds in new snapshots and returns the
//! projected view.

use super::identity::{QueryArgs, QueryIdentity, QueryRef, WindowOptions};
use super::source::QuerySource;
use crate::error::Result;
use crate::project::{
    nav_channel, project, subscription_args, NavKind, NavReceiver, NavSender, ViewState,
};
use crate::state::{reduce, Page, PageAction, PageState};
use tracing::{debug, trace};

/// Stateful next/prev page browser over one paginated query call site.
///
/// Owns the session state exclusively; there is no other writer. Mutation
/// happens only inside [`poll`](Self::poll), strictly interleaved with the
/// host's recomputation cycle, so no locking is involved. Dropping the
/// controller tears the session down; navigation handles captured earlier
/// degrade into no-ops.
///
/// `T` is the page item type. `Clone` is needed to hand owned pages to the
/// view; `PartialEq` backs the value-equality snapshot dedup.
#[derive(Debug)]
pub struct PagedQuery<T> {
    /// Identity that produced the current state, `None` before the first poll
    identity: Option<QueryIdentity>,
    state: PageState<T>,
    /// Bumped on every transition; stale navigation requests are filtered
    /// against it
    epoch: u64,
    nav_tx: NavSender,
    nav_rx: NavReceiver,
    /// Last snapshot folded into the state, for value-equality dedup
    last_snapshot: Option<Page<T>>,
}

impl<T: Clone + PartialEq> PagedQuery<T> {
    /// Create a controller for one call site
    pub fn new() -> Self {
        let (nav_tx, nav_rx) = nav_channel();
        Self {
            identity: None,
            state: PageState::Skipped,
            epoch: 0,
            nav_tx,
            nav_rx,
            last_snapshot: None,
        }
    }

    /// Run one recomputation cycle and return the current view.
    ///
    /// Steps, in order: reset the session if the (query, args, options)
    /// triple differs by value from the one that produced the current state;
    /// apply queued navigation requests; drive the subscription with the
    /// projected arguments (unless skipped); fold a newly delivered snapshot
    /// into the state; project the public view.
    pub fn poll<S: QuerySource<T>>(
        &mut self,
        source: &mut S,
        query: &QueryRef,
        args: &QueryArgs,
        options: WindowOptions,
    ) -> Result<ViewState<T>> {
        self.sync_identity(query, args, options);
        self.apply_queued_nav()?;

        if let QueryArgs::Args(args_object) = args {
            if let Some(request) =
                subscription_args(&self.state, options.initial_num_items())
            {
                if let Some(snapshot) = source.latest(query, args_object, &request)? {
                    self.deliver(snapshot)?;
                }
            }
        }

        Ok(project(&self.state, &self.nav_tx, self.epoch))
    }

    /// Current 1-based page number, when a page is on display
    pub fn page_num(&self) -> Option<usize> {
        self.state.page_num()
    }

    /// Reset the session if the caller's inputs differ from the identity that
    /// produced the current state. The skip sentinel flipping counts as a
    /// difference like any other.
    fn sync_identity(&mut self, query: &QueryRef, args: &QueryArgs, options: WindowOptions) {
        let identity = QueryIdentity::new(query.clone(), args.clone(), options);
        if self.identity.as_ref() == Some(&identity) {
            return;
        }

        if self.identity.is_some() {
            debug!(
                query = query.as_str(),
                from = self.state.name(),
                "query identity changed, restarting pagination at page 1"
            );
        }

        // Nothing carries over: history, in-flight request and pending
        // snapshot are all scoped to the old identity.
        self.state = if args.is_skip() {
            PageState::Skipped
        } else {
            PageState::LoadingInitial
        };
        self.identity = Some(identity);
        self.last_snapshot = None;
        self.epoch += 1;
    }

    /// Drain queued navigation requests, applying current ones and dropping
    /// requests captured from a superseded view.
    fn apply_queued_nav(&mut self) -> Result<()> {
        while let Ok(request) = self.nav_rx.try_recv() {
            if request.epoch != self.epoch {
                debug!(
                    request = ?request.kind,
                    "dropping stale navigation request from a superseded view"
                );
                continue;
            }

            let action = match request.kind {
                NavKind::Next => PageAction::NextPageRequested,
                NavKind::Prev => PageAction::PrevPageRequested,
            };
            self.apply(action)?;
        }
        Ok(())
    }

    /// Fold a delivered snapshot into the state, unless it is value-identical
    /// to the one already folded in.
    fn deliver(&mut self, snapshot: Page<T>) -> Result<()> {
        if self.last_snapshot.as_ref() == Some(&snapshot) {
            trace!("skipping redelivery of value-identical snapshot");
            return Ok(());
        }

        self.apply(PageAction::ResultsArrived(snapshot.clone()))?;
        self.last_snapshot = Some(snapshot);
        Ok(())
    }

    /// Run one action through the reducer and bump the epoch.
    ///
    /// When the reducer rejects the action the previous state is kept, so
    /// the error is reported without ending the session.
    fn apply(&mut self, action: PageAction<T>) -> Result<()> {
        trace!(
            from = self.state.name(),
            action = action.name(),
            "applying pagination action"
        );

        self.state = reduce(self.state.clone(), action)?;
        self.epoch += 1;
        Ok(())
    }
}

impl<T: Clone + PartialEq> Default for PagedQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}
