//! Tests for the argument and result projectors

use super::view::{nav_channel, NavKind};
use super::*;
use crate::state::{Cursor, CursorStack, Page, PageState};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn loaded(current: Option<&str>, prev: &[&str], next: Option<&str>) -> PageState<u32> {
    let mut prev_cursors = CursorStack::new();
    for cursor in prev {
        prev_cursors.push(Cursor::from(*cursor));
    }
    PageState::Loaded {
        page: Page {
            items: vec![1, 2, 3],
            continue_cursor: next.map(Cursor::from),
            is_done: next.is_none(),
        },
        current_cursor: current.map(Cursor::from),
        prev_cursors,
        next_cursor: next.map(Cursor::from),
    }
}

// ============================================================================
// Argument Projector
// ============================================================================

#[test]
fn test_args_skipped_disables_subscription() {
    let state: PageState<u32> = PageState::Skipped;
    assert_eq!(subscription_args(&state, 3), None);
}

#[test]
fn test_args_loading_initial_starts_at_sequence_start() {
    let state: PageState<u32> = PageState::LoadingInitial;
    assert_eq!(
        subscription_args(&state, 3),
        Some(PageRequest {
            cursor: None,
            num_items: 3
        })
    );
}

#[test_case(Some("5") ; "back to a cursor")]
#[test_case(None ; "back to the first page")]
fn test_args_loading_prev_uses_pending_cursor(target: Option<&str>) {
    let state: PageState<u32> = PageState::LoadingPrev {
        target: target.map(Cursor::from),
        prev_cursors: CursorStack::new(),
    };
    assert_eq!(
        subscription_args(&state, 3),
        Some(PageRequest {
            cursor: target.map(Cursor::from),
            num_items: 3
        })
    );
}

#[test]
fn test_args_loading_next_uses_pending_cursor() {
    let state: PageState<u32> = PageState::LoadingNext {
        target: Cursor::from("8"),
        prev_cursors: CursorStack::new(),
    };
    assert_eq!(
        subscription_args(&state, 3),
        Some(PageRequest {
            cursor: Some(Cursor::from("8")),
            num_items: 3
        })
    );
}

#[test]
fn test_args_loaded_refetches_current_page_in_place() {
    let state = loaded(Some("2"), &[], Some("5"));
    assert_eq!(
        subscription_args(&state, 3),
        Some(PageRequest {
            cursor: Some(Cursor::from("2")),
            num_items: 3
        })
    );
}

#[test]
fn test_args_window_size_is_constant_across_states() {
    // Every page of a session is requested with the initial window size.
    let states: Vec<PageState<u32>> = vec![
        PageState::LoadingInitial,
        PageState::LoadingNext {
            target: Cursor::from("5"),
            prev_cursors: CursorStack::new(),
        },
        loaded(Some("5"), &["2"], None),
    ];
    for state in states {
        assert_eq!(subscription_args(&state, 7).unwrap().num_items, 7);
    }
}

// ============================================================================
// Result Projector
// ============================================================================

#[test_case(PageState::Skipped, "Skipped")]
#[test_case(PageState::LoadingInitial, "LoadingInitialResults")]
#[test_case(PageState::LoadingNext { target: Cursor::from("2"), prev_cursors: CursorStack::new() }, "LoadingNextResults")]
#[test_case(PageState::LoadingPrev { target: None, prev_cursors: CursorStack::new() }, "LoadingPrevResults")]
fn test_view_transitional_states_expose_no_content(state: PageState<u32>, expected: &str) {
    let (tx, _rx) = nav_channel();
    let view = project(&state, &tx, 0);
    assert_eq!(view.name(), expected);
    assert!(!view.is_loaded());
}

#[test]
fn test_view_first_page_withholds_load_prev() {
    let (tx, _rx) = nav_channel();
    let view = project(&loaded(None, &[], Some("2")), &tx, 0);

    let ViewState::Loaded {
        page,
        page_num,
        load_next,
        load_prev,
    } = view
    else {
        panic!("expected Loaded view");
    };
    assert_eq!(page, vec![1, 2, 3]);
    assert_eq!(page_num, 1);
    assert!(load_next.is_some());
    assert!(load_prev.is_none());
}

#[test]
fn test_view_last_page_withholds_load_next() {
    let (tx, _rx) = nav_channel();
    let view = project(&loaded(Some("5"), &["2"], None), &tx, 0);

    let ViewState::Loaded {
        page_num,
        load_next,
        load_prev,
        ..
    } = view
    else {
        panic!("expected Loaded view");
    };
    assert_eq!(page_num, 3);
    assert!(load_next.is_none());
    assert!(load_prev.is_some());
}

#[test]
fn test_view_middle_page_offers_both_actions() {
    let (tx, _rx) = nav_channel();
    let view = project(&loaded(Some("2"), &[], Some("5")), &tx, 0);

    let ViewState::Loaded {
        page_num,
        load_next,
        load_prev,
        ..
    } = view
    else {
        panic!("expected Loaded view");
    };
    assert_eq!(page_num, 2);
    assert!(load_next.is_some());
    assert!(load_prev.is_some());
}

#[test]
fn test_nav_handle_enqueues_request_with_capture_epoch() {
    let (tx, mut rx) = nav_channel();
    let view = project(&loaded(Some("2"), &[], Some("5")), &tx, 41);

    let ViewState::Loaded {
        load_next,
        load_prev,
        ..
    } = view
    else {
        panic!("expected Loaded view");
    };

    load_next.unwrap().call();
    load_prev.unwrap().call();

    let first = rx.try_recv().unwrap();
    assert_eq!(first.kind, NavKind::Next);
    assert_eq!(first.epoch, 41);

    let second = rx.try_recv().unwrap();
    assert_eq!(second.kind, NavKind::Prev);
    assert_eq!(second.epoch, 41);

    assert!(rx.try_recv().is_err());
}

#[test]
fn test_nav_handle_survives_controller_teardown() {
    let (tx, rx) = nav_channel();
    let view = project(&loaded(Some("2"), &[], Some("5")), &tx, 0);

    let ViewState::Loaded { load_next, .. } = view else {
        panic!("expected Loaded view");
    };
    let handle = load_next.unwrap();

    drop(rx);
    drop(tx);

    // Must be a silent no-op, not a panic or error.
    handle.call();
}
