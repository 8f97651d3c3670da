//! Single cell painting tests

use pixel_engine_edit::{EditMode, EngineError, GridEditState, PaintOutcome};
use pretty_assertions::assert_eq;

use crate::helpers::{cells, create_test_state};

#[test]
fn test_new_state_is_empty() {
    let state = create_test_state(4);
    assert_eq!(state.cell_count(), 16);
    assert_eq!(state.side_length(), 4);
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.history_step(), 0);
    assert!(state.grid().iter().all(String::is_empty));
}

#[test]
fn test_with_fill() {
    let state = GridEditState::with_fill(2, "#123456").unwrap();
    assert_eq!(cells(&state), vec!["#123456"; 4]);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_invalid_dimension() {
    assert!(matches!(GridEditState::new(0), Err(EngineError::InvalidDimension { side_length: 0 })));
}

#[test]
fn test_draw_changes_cell_and_adds_history() {
    let mut state = create_test_state(2);

    let outcome = state.paint(1, "#ff0000", EditMode::Draw).unwrap();

    assert_eq!(outcome, PaintOutcome::Changed);
    assert!(outcome.changed());
    assert_eq!(state.cell(1), Some("#ff0000"));
    assert_eq!(state.history_len(), 2);
    assert_eq!(state.history_step(), 1);
}

#[test]
fn test_paint_same_color_twice_is_one_entry() {
    let mut state = create_test_state(2);

    assert!(state.paint(0, "#000000", EditMode::Draw).unwrap().changed());
    let second = state.paint(0, "#000000", EditMode::Draw).unwrap();

    assert_eq!(second, PaintOutcome::Unchanged);
    assert!(!second.changed());
    assert_eq!(state.history_len(), 2);
}

#[test]
fn test_erase_sets_empty_token() {
    let mut state = GridEditState::with_fill(2, "#ffffff").unwrap();

    // the color argument is ignored when erasing
    assert!(state.paint(2, "#000000", EditMode::Erase).unwrap().changed());

    assert_eq!(cells(&state), vec!["#ffffff", "#ffffff", "", "#ffffff"]);
}

#[test]
fn test_erase_empty_cell_is_noop() {
    let mut state = create_test_state(2);
    assert_eq!(state.paint(0, "#000000", EditMode::Erase).unwrap(), PaintOutcome::Unchanged);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_draw_empty_color_acts_like_erase() {
    let mut state = GridEditState::with_fill(1, "#ffffff").unwrap();
    assert!(state.paint(0, "", EditMode::Draw).unwrap().changed());
    assert_eq!(state.cell(0), Some(""));
}

#[test]
fn test_eyedropper_never_mutates() {
    let mut state = create_test_state(2);
    state.paint(3, "rgb(1,2,3)", EditMode::Draw).unwrap();
    let before = state.grid().clone();

    for i in 0..4 {
        let outcome = state.paint(i, "#abcdef", EditMode::Eyedropper).unwrap();
        assert!(!outcome.changed());
        assert!(outcome.picked().is_some());
    }

    assert_eq!(state.grid(), &before);
    assert_eq!(state.history_len(), 2);
    assert_eq!(state.paint(3, "", EditMode::Eyedropper).unwrap(), PaintOutcome::Picked("rgb(1,2,3)".to_string()));
}

#[test]
fn test_eyedropper_picks_empty_token() {
    let mut state = create_test_state(2);
    state.set_mode(EditMode::Eyedropper);

    let outcome = state.paint_active(0).unwrap();

    assert_eq!(outcome.picked(), Some(""));
    assert_eq!(state.active_color(), "");
}

#[test]
fn test_paint_active_uses_tool_state() {
    let mut state = create_test_state(2);
    state.set_active_color("#00ff00");

    state.paint_active(0).unwrap();
    state.set_mode(EditMode::Eyedropper);
    state.set_active_color("#000000");
    state.paint_active(0).unwrap();

    assert_eq!(state.active_color(), "#00ff00");
    state.set_mode(EditMode::Erase);
    state.paint_active(0).unwrap();
    assert_eq!(state.cell(0), Some(""));
    assert_eq!(state.history_len(), 3);
}

#[test]
fn test_paint_out_of_range_fails_without_change() {
    let mut state = create_test_state(2);

    for mode in EditMode::ALL {
        let result = state.paint(4, "#000000", mode);
        assert!(matches!(result, Err(EngineError::IndexOutOfRange { index: 4, len: 4 })), "{mode}");
    }

    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_cell_at_is_row_major() {
    let mut state = create_test_state(3);
    state.paint(5, "#010101", EditMode::Draw).unwrap();

    assert_eq!(state.cell_at(2, 1), Some("#010101"));
    assert_eq!(state.cell_at(3, 0), None);
}

#[test]
fn test_edit_mode_parse() {
    assert_eq!("Draw".parse::<EditMode>().unwrap(), EditMode::Draw);
    assert_eq!("eraser".parse::<EditMode>().unwrap(), EditMode::Erase);
    assert_eq!("eyedropper".parse::<EditMode>().unwrap(), EditMode::Eyedropper);
    assert!("fill".parse::<EditMode>().is_err());
    assert_eq!(EditMode::Eyedropper.to_string(), "eyedropper");
}
