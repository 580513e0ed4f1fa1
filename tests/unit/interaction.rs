use std::sync::Arc;

use txp::decoder::decode_hex;
use txp::interaction::{apply_toggle, InteractionError, InteractionStore, ToggleCommand, ViewState};

use crate::common::fixture_registry::{EMPTY, PAYMENT_AND_CHANGE};

fn store_for(hex_str: &str) -> InteractionStore {
    InteractionStore::new(Arc::new(decode_hex(hex_str).unwrap()))
}

#[test]
fn test_initial_state_all_collapsed() {
    let store = store_for(PAYMENT_AND_CHANGE.hex);
    let state = store.view_state();
    assert_eq!(state.len(), PAYMENT_AND_CHANGE.segment_count());
    assert!((0..state.len()).all(|i| state.is_expanded(i) == Some(false)));
    assert_eq!(state.is_expanded(state.len()), None);
}

#[test]
fn test_toggle_pair_is_identity_for_every_index() {
    let state = ViewState::collapsed(7);
    let state = apply_toggle(&state, ToggleCommand { index: 2 }).unwrap();
    for index in 0..7 {
        let once = apply_toggle(&state, ToggleCommand { index }).unwrap();
        for other in (0..7).filter(|j| *j != index) {
            assert_eq!(once.is_expanded(other), state.is_expanded(other));
        }
        let twice = apply_toggle(&once, ToggleCommand { index }).unwrap();
        assert_eq!(twice, state);
    }
}

#[test]
fn test_store_toggle_returns_new_flag() {
    let mut store = store_for(PAYMENT_AND_CHANGE.hex);
    assert_eq!(store.toggle(2), Ok(true));
    assert_eq!(store.toggle(2), Ok(false));
    assert_eq!(store.toggle(5), Ok(true));
    assert_eq!(store.view_state().expanded_indices(), vec![5]);
}

#[test]
fn test_store_rejects_out_of_range_without_change() {
    let mut store = store_for(EMPTY.hex);
    store.toggle(1).unwrap();
    let before = store.view_state().clone();
    assert_eq!(
        store.toggle(4),
        Err(InteractionError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(store.view_state(), &before);
}

#[test]
fn test_load_replaces_transaction_and_state() {
    let mut store = store_for(PAYMENT_AND_CHANGE.hex);
    store.toggle(0).unwrap();
    store.load(Arc::new(decode_hex(EMPTY.hex).unwrap()));
    assert_eq!(store.view_state(), &ViewState::collapsed(4));
    assert_eq!(store.transaction().version(), 2);
}

#[test]
fn test_sessions_share_transaction_independently() {
    let tx = Arc::new(decode_hex(PAYMENT_AND_CHANGE.hex).unwrap());
    let mut first = InteractionStore::new(Arc::clone(&tx));
    let second = InteractionStore::new(Arc::clone(&tx));

    first.toggle(2).unwrap();
    assert_eq!(first.view_state().expanded_indices(), vec![2]);
    assert!(second.view_state().expanded_indices().is_empty());
    assert!(Arc::ptr_eq(first.transaction(), second.transaction()));
}

#[test]
fn test_expanded_view_includes_input_sub_fields() {
    let mut store = store_for(PAYMENT_AND_CHANGE.hex);
    store.toggle(2).unwrap();
    let view = &store.view_model()[2];
    let labels: Vec<_> = view.fields.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        vec![
            "Previous txid",
            "Previous output index",
            "Unlocking script length",
            "Unlocking script",
            "Sequence"
        ]
    );
    assert_eq!(view.fields[4].raw_hex, "feffffff");
    assert_eq!(view.fields[2].raw_hex, "6b");
}
