//! Undo/redo tests

use pixel_engine_edit::{EditMode, EngineError, GridEditState, GridOperationType, GridUndoState};
use pretty_assertions::assert_eq;

use crate::helpers::{create_test_state, grid_of};

#[test]
fn test_undo_on_fresh_state_is_noop() {
    let mut state = create_test_state(2);
    let before = state.grid().clone();

    assert!(!state.can_undo());
    assert!(!state.undo());

    assert_eq!(state.grid(), &before);
    assert_eq!(state.history_step(), 0);
}

#[test]
fn test_redo_without_undo_is_noop() {
    let mut state = create_test_state(2);
    state.paint(0, "#000000", EditMode::Draw).unwrap();

    assert!(!state.can_redo());
    assert!(!state.redo());
    assert_eq!(state.history_step(), 1);
}

#[test]
fn test_undo_redo_inverse() {
    let mut state = create_test_state(2);
    state.paint(0, "#000000", EditMode::Draw).unwrap();
    state.paint(1, "#111111", EditMode::Draw).unwrap();
    state.replace_all(grid_of(&["a", "b", "c", "d"])).unwrap();
    let before = state.grid().clone();

    assert!(state.undo());
    assert_ne!(state.grid(), &before);
    assert!(state.redo());

    assert_eq!(state.grid(), &before);
}

#[test]
fn test_multiple_undo_then_redo() {
    let mut state = create_test_state(2);
    state.paint(0, "1", EditMode::Draw).unwrap();
    state.paint(1, "2", EditMode::Draw).unwrap();
    state.paint(2, "3", EditMode::Draw).unwrap();

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.undo_stack_len(), 1);
    assert_eq!(state.redo_stack_len(), 2);
    assert_eq!(state.grid(), &grid_of(&["1", "", "", ""]));

    assert!(state.undo());
    assert!(!state.undo());
    assert_eq!(state.grid(), &grid_of(&["", "", "", ""]));

    while state.redo() {}
    assert_eq!(state.grid(), &grid_of(&["1", "2", "3", ""]));
    assert_eq!(state.history_step(), 3);
}

#[test]
fn test_new_edit_discards_redo_branch() {
    let mut state = create_test_state(2);
    state.paint(0, "#000000", EditMode::Draw).unwrap();
    state.paint(1, "#000000", EditMode::Draw).unwrap();
    state.undo();

    state.paint(2, "#ff0000", EditMode::Draw).unwrap();

    assert_eq!(state.history_step(), state.history_len() - 1);
    assert_eq!(state.history_len(), 3);
    assert!(!state.redo());
    assert_eq!(state.grid(), &grid_of(&["#000000", "", "#ff0000", ""]));
}

#[test]
fn test_replace_all_always_commits() {
    let mut state = create_test_state(2);
    let same = state.grid().clone();

    state.replace_all(same.clone()).unwrap();

    assert_eq!(state.history_len(), 2);
    assert_eq!(state.grid(), &same);
}

#[test]
fn test_replace_all_dimension_mismatch() {
    let mut state = create_test_state(2);

    let result = state.replace_all(grid_of(&["a", "b", "c"]));

    assert!(matches!(result, Err(EngineError::DimensionMismatch { expected: 4, actual: 3 })));
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_from_grid_seeds_initial_entry() {
    let state = GridEditState::from_grid(2, grid_of(&["a", "", "", "b"])).unwrap();
    assert_eq!(state.history_len(), 1);
    assert!(!state.is_dirty());
    assert_eq!(state.undo_stack().current_snapshot().operation_type, GridOperationType::Initial);

    assert!(matches!(
        GridEditState::from_grid(3, grid_of(&["a"])),
        Err(EngineError::DimensionMismatch { expected: 9, actual: 1 })
    ));
}

#[test]
fn test_undo_descriptions_follow_operations() {
    let mut state = create_test_state(2);
    state.paint(0, "#000000", EditMode::Draw).unwrap();
    state.paint(0, "", EditMode::Erase).unwrap();

    assert_eq!(state.undo_description().as_deref(), Some("Erase"));
    state.undo();
    assert_eq!(state.undo_description().as_deref(), Some("Paint"));
    assert_eq!(state.redo_description().as_deref(), Some("Erase"));
}

#[test]
fn test_history_entries_are_snapshots() {
    let mut state = create_test_state(2);
    state.paint(0, "x", EditMode::Draw).unwrap();
    state.paint(1, "y", EditMode::Draw).unwrap();

    let entries = state.undo_stack().entries();
    assert_eq!(entries[0].grid, grid_of(&["", "", "", ""]));
    assert_eq!(entries[1].grid, grid_of(&["x", "", "", ""]));
    assert_eq!(entries[2].grid, grid_of(&["x", "y", "", ""]));
}
