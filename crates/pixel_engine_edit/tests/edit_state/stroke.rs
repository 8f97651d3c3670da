//! Pointer stroke tests

use pixel_engine_edit::{EditMode, PaintOutcome};

use crate::helpers::create_test_state;

#[test]
fn test_click_paints_once() {
    let mut state = create_test_state(4);

    assert!(state.pointer_down(5).unwrap().changed());
    state.pointer_up();

    assert_eq!(state.cell(5), Some("#000000"));
    assert_eq!(state.history_len(), 2);
    assert!(!state.is_drawing());
}

#[test]
fn test_drag_paints_each_new_cell() {
    let mut state = create_test_state(4);

    state.pointer_down(0).unwrap();
    state.pointer_move(0).unwrap();
    state.pointer_move(1).unwrap();
    state.pointer_move(1).unwrap();
    state.pointer_move(2).unwrap();
    state.pointer_up();

    assert_eq!(state.grid().painted_count(), 3);
    assert_eq!(state.history_len(), 4);
}

#[test]
fn test_move_without_press_does_nothing() {
    let mut state = create_test_state(4);

    assert_eq!(state.pointer_move(3).unwrap(), PaintOutcome::Unchanged);

    state.pointer_down(0).unwrap();
    state.pointer_up();
    state.pointer_move(7).unwrap();

    assert_eq!(state.cell(7), Some(""));
    assert_eq!(state.history_len(), 2);
}

#[test]
fn test_leave_ends_stroke() {
    let mut state = create_test_state(4);

    state.pointer_down(0).unwrap();
    state.pointer_leave();
    state.pointer_move(1).unwrap();

    assert!(!state.is_drawing());
    assert_eq!(state.cell(1), Some(""));
}

#[test]
fn test_drag_over_painted_cells_records_only_changes() {
    let mut state = create_test_state(2);
    state.pointer_down(0).unwrap();
    state.pointer_move(1).unwrap();
    state.pointer_up();
    assert_eq!(state.history_len(), 3);

    state.pointer_down(1).unwrap();
    state.pointer_move(0).unwrap();
    state.pointer_move(2).unwrap();
    state.pointer_up();

    assert_eq!(state.history_len(), 4);
}

#[test]
fn test_eyedropper_press_picks_without_stroke() {
    let mut state = create_test_state(2);
    state.set_active_color("#ff00ff");
    state.pointer_down(3).unwrap();
    state.pointer_up();

    state.set_mode(EditMode::Eyedropper);
    state.set_active_color("#000000");
    let outcome = state.pointer_down(3).unwrap();

    assert_eq!(outcome.picked(), Some("#ff00ff"));
    assert_eq!(state.active_color(), "#ff00ff");
    assert!(!state.is_drawing());
    assert_eq!(state.pointer_move(0).unwrap(), PaintOutcome::Unchanged);
    assert_eq!(state.history_len(), 2);
}

#[test]
fn test_erase_stroke() {
    let mut state = create_test_state(2);
    state.pointer_down(0).unwrap();
    state.pointer_move(1).unwrap();
    state.pointer_up();

    state.set_mode(EditMode::Erase);
    state.pointer_down(1).unwrap();
    state.pointer_move(0).unwrap();
    state.pointer_up();

    assert_eq!(state.grid().painted_count(), 0);
    assert_eq!(state.history_len(), 5);
}

#[test]
fn test_out_of_range_press_does_not_start_stroke() {
    let mut state = create_test_state(2);
    assert!(state.pointer_down(9).is_err());
    assert!(!state.is_drawing());
}
