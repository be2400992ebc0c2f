use crossterm::event::KeyCode;
use draw_poker::table::Phase;
use draw_poker::tui::app::{AppState, InputAction, Scene};
use draw_poker::tui::controller::handle_key;

fn setup_table_app() -> AppState {
    let mut app = AppState::default();
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.table.num_players(), 3);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_drive_a_round() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.table.phase(), Phase::Drawing);

    handle_key(&mut app, KeyCode::Char('3'));
    assert_eq!(app.table.seats()[0].replacements(), 1);
    handle_key(&mut app, KeyCode::Char('s'));
    assert_eq!(app.table.current(), 1);
    handle_key(&mut app, KeyCode::Enter);
    assert_eq!(app.table.current(), 2);
    handle_key(&mut app, KeyCode::Char('s'));
    handle_key(&mut app, KeyCode::Char('s'));
    assert_eq!(app.table.phase(), Phase::Showdown);
    assert!((0..4).all(|seat| app.reveals(seat)));
}

#[test]
fn replacing_past_the_limit_is_reported() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::NewRound);
    assert!(app.handle_input(InputAction::Replace(0)));
    assert!(app.handle_input(InputAction::Replace(1)));
    // seat 0 hit the limit and its turn ended
    assert_eq!(app.table.current(), 1);
    assert!(!app.handle_input(InputAction::Replace(7)));
    assert!(app.action_error().is_some());
}

#[test]
fn history_scrolls_within_bounds() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::NewRound);
    let _ = app.handle_input(InputAction::ToggleHistory);
    let _ = app.handle_input(InputAction::HistoryUp);
    // four deal entries fit on one page
    assert_eq!(app.history_offset(), 0);
    let _ = app.handle_input(InputAction::HistoryDown);
    assert_eq!(app.history_offset(), 0);
}

#[test]
fn quit_from_table_and_menu() {
    let mut app = setup_table_app();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
    let mut app = AppState::default();
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn menu_key_returns_to_menu() {
    let mut app = setup_table_app();
    handle_key(&mut app, KeyCode::Char('m'));
    assert!(matches!(app.scene, Scene::Menu));
    handle_key(&mut app, KeyCode::Esc);
    assert!(matches!(app.scene, Scene::Table));
}
