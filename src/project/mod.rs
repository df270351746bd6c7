//! State projections
//!
//! Two read-only views of a [`PageState`](crate::PageState): the parameters to
//! drive the external subscription with ([`subscription_args`]), and the
//! minimal public view handed to the caller ([`ViewState`]). Neither projection
//! ever mutates state; navigation flows back through the dispatch channel
//! behind [`NavHandle`].

mod args;
mod view;

pub use args::{subscription_args, PageRequest};
pub use view::{NavHandle, ViewState};

pub(crate) use view::{nav_channel, project, NavKind, NavReceiver, NavSender};

#[cfg(test)]
mod tests;
