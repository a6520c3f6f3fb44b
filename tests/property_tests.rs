//! Property-based tests for store, categorization, and scroll invariants.
//!
//! Tests validate:
//! 1. The recent log holds exactly the last ten recorded events, in order
//! 2. The unique index keeps the first event per signature, in first-seen order
//! 3. Categorization is total and agrees with the event's own category
//! 4. Scroll offsets never go below zero and replay deterministically

use cheapspy::model::codes::{
    WM_CHAR, WM_KEYDOWN, WM_KEYUP, WM_KILLFOCUS, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
    WM_MOVE, WM_SETFOCUS, WM_SIZE,
};
use cheapspy::model::{categorize, Category, Event};
use cheapspy::state::{MessageStore, ScrollController, RECENT_CAPACITY, SCROLL_STEP};
use proptest::prelude::*;

fn code_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(WM_KEYDOWN),
        Just(WM_KEYUP),
        Just(WM_CHAR),
        Just(WM_MOUSEMOVE),
        Just(WM_LBUTTONDOWN),
        Just(WM_SIZE),
        Just(WM_SETFOCUS),
        0u32..0x0400,
    ]
}

/// Small `param_a` range so signatures collide often.
fn event_strategy() -> impl Strategy<Value = Event> {
    (code_strategy(), 0usize..4, any::<isize>()).prop_map(|(code, a, b)| Event::new(code, a, b))
}

fn record_all(events: &[Event]) -> MessageStore {
    let mut store = MessageStore::new();
    for event in events {
        store.record(*event);
    }
    store
}

// ===== Property 1: Recent Log =====

proptest! {
    #[test]
    fn recent_log_holds_last_ten_in_order(events in prop::collection::vec(event_strategy(), 0..40)) {
        let store = record_all(&events);

        let start = events.len().saturating_sub(RECENT_CAPACITY);
        let expected: Vec<Event> = events[start..].to_vec();
        let actual: Vec<Event> = store.recent().iter().map(|e| *e.event()).collect();

        prop_assert_eq!(actual, expected);
        prop_assert!(store.recent().len() <= RECENT_CAPACITY);
    }
}

// ===== Property 2: Unique Index =====

proptest! {
    #[test]
    fn unique_index_keeps_first_event_per_signature(events in prop::collection::vec(event_strategy(), 0..60)) {
        let store = record_all(&events);

        let mut expected: Vec<Event> = Vec::new();
        for event in &events {
            if !expected.iter().any(|seen| seen.signature() == event.signature()) {
                expected.push(*event);
            }
        }
        let actual: Vec<Event> = store.unique().iter().map(|u| *u.entry.event()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn unique_entries_are_keyed_by_their_own_signature(events in prop::collection::vec(event_strategy(), 1..60)) {
        let store = record_all(&events);

        for unique in store.unique().iter() {
            prop_assert_eq!(unique.key, unique.entry.event().signature());
            prop_assert_eq!(unique.category, unique.entry.event().category());
            prop_assert!(store.unique().get(&unique.key).is_some());
        }
    }
}

// ===== Property 3: Categorization =====

proptest! {
    #[test]
    fn categorize_is_deterministic(code in any::<u32>()) {
        prop_assert_eq!(categorize(code), categorize(code));
    }

    #[test]
    fn only_listed_codes_are_categorized(code in any::<u32>()) {
        let listed = [
            WM_KEYDOWN, WM_KEYUP, WM_CHAR, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_MOVE,
            WM_SIZE, WM_SETFOCUS, WM_KILLFOCUS,
        ];
        if !listed.contains(&code) {
            prop_assert_eq!(categorize(code), Category::Unknown);
        } else {
            prop_assert_ne!(categorize(code), Category::Unknown);
        }
    }

    #[test]
    fn event_category_matches_categorize(event in event_strategy()) {
        prop_assert_eq!(event.category(), categorize(event.code));
    }
}

// ===== Property 4: Scroll Offset =====

/// Reference model: offset in i64, floored at zero after every step.
fn expected_offset(deltas: &[i16]) -> i64 {
    deltas.iter().fold(0i64, |offset, &delta| {
        (offset - i64::from(delta).div_euclid(120) * SCROLL_STEP).max(0)
    })
}

proptest! {
    #[test]
    fn scroll_offset_matches_floored_model(deltas in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut scroll = ScrollController::new();
        for &delta in &deltas {
            scroll.on_wheel(delta);
        }

        prop_assert_eq!(i64::from(scroll.offset().get()), expected_offset(&deltas));
    }

    #[test]
    fn scroll_replay_is_deterministic(deltas in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut first = ScrollController::new();
        let mut second = ScrollController::new();
        for &delta in &deltas {
            prop_assert_eq!(first.on_wheel(delta), second.on_wheel(delta));
        }
    }

    #[test]
    fn scroll_offset_is_a_multiple_of_the_step(deltas in prop::collection::vec(any::<i16>(), 0..50)) {
        let mut scroll = ScrollController::new();
        for &delta in &deltas {
            scroll.on_wheel(delta);
        }

        prop_assert_eq!(i64::from(scroll.offset().get()) % SCROLL_STEP, 0);
    }
}
