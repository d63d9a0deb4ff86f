//! End-to-end tests through the public API.
//!
//! Drives the task store the way the key handler does and checks that
//! the derived chart data and the rendered frame stay consistent with
//! the store after every mutation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use donutdo::tui::{ui, AppState, Focus};
use donutdo::{ProgressStage, TaskList};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_task(state: &mut AppState, text: &str) {
    for c in text.chars() {
        state.handle_key(key(KeyCode::Char(c)));
    }
    state.handle_key(key(KeyCode::Enter));
}

fn frame_content(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, state)).unwrap();

    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
        .collect()
}

#[test]
fn add_toggle_and_chart_stay_consistent() {
    let mut list = TaskList::new();
    assert!(list.add("A"));
    assert!(list.add("B"));
    assert!(list.add("C"));

    // Toggle "B"; completed tasks partition to the back.
    assert!(list.toggle(1));
    let order: Vec<_> = list.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B"]);

    let data = list.chart_data();
    assert_eq!(data.completed_count, 1);
    assert_eq!(data.uncompleted_count, 2);
    assert_eq!(data.percentage, 33);
    assert_eq!(list.progress_stage(), ProgressStage::Sprout20);
}

#[test]
fn percentage_rounds_half_up() {
    let mut list = TaskList::new();
    for i in 0..8 {
        list.add(&format!("t{i}"));
    }
    list.toggle(0);
    list.toggle(0);
    list.toggle(0);

    // 3/8 = 37.5, rounded half-up.
    assert_eq!(list.chart_data().percentage, 38);
}

#[test]
fn blank_and_whitespace_adds_are_rejected() {
    let mut list = TaskList::new();
    assert!(!list.add(""));
    assert!(!list.add("   "));
    assert!(!list.add("\t\n"));
    assert!(list.is_empty());
    assert_eq!(list.chart_data().percentage, 0);
}

#[test]
fn out_of_range_toggle_changes_nothing() {
    let mut list = TaskList::new();
    list.add("only");
    assert!(!list.toggle(5));
    assert!(!list.get(0).unwrap().completed);
}

#[test]
fn stage_walks_every_threshold() {
    let mut list = TaskList::new();
    for i in 0..5 {
        list.add(&format!("t{i}"));
    }
    assert_eq!(list.progress_stage(), ProgressStage::Seed0);

    let expected = [
        ProgressStage::Sprout20,  // 20%
        ProgressStage::Stem40,    // 40%
        ProgressStage::Leaves60,  // 60%
        ProgressStage::Bud80,     // 80%
        ProgressStage::Bloom100,  // 100%
    ];
    for stage in expected {
        list.toggle(0);
        assert_eq!(list.progress_stage(), stage);
    }
}

#[test]
fn keyboard_flow_from_typing_to_toggling() {
    let mut state = AppState::new();
    type_task(&mut state, "water the plants");
    type_task(&mut state, "call the bank");

    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.focus, Focus::Input);

    // Move into the list and complete the first task.
    state.handle_key(key(KeyCode::Tab));
    assert_eq!(state.focus, Focus::List);
    state.handle_key(key(KeyCode::Enter));

    let data = state.tasks.chart_data();
    assert_eq!(data.completed_count, 1);
    assert_eq!(data.percentage, 50);

    // The completed task moved behind the remaining one.
    assert!(!state.tasks.get(0).unwrap().completed);
    assert!(state.tasks.get(1).unwrap().completed);
}

#[test]
fn rendered_frame_tracks_the_store() {
    let mut state = AppState::new();
    type_task(&mut state, "water the plants");
    type_task(&mut state, "call the bank");

    let before = frame_content(&state, 80, 24);
    assert!(before.contains("water the plants"));
    assert!(before.contains("Done: 0"));
    assert!(before.contains("0%"));

    state.handle_key(key(KeyCode::Tab));
    state.handle_key(key(KeyCode::Enter));

    let after = frame_content(&state, 80, 24);
    assert!(after.contains("Done: 1"));
    assert!(after.contains("Todo: 1"));
    assert!(after.contains("50%"));
}

#[test]
fn quitting_does_not_touch_the_store() {
    let mut state = AppState::new();
    type_task(&mut state, "persisting");
    state.handle_key(key(KeyCode::Esc));

    assert!(state.should_quit());
    assert_eq!(state.tasks.len(), 1);
}
