//! Key bindings.
//!
//! Maps raw terminal events to App state-machine transitions. Only key
//! presses act; repeats and releases are ignored so terminals with enhanced
//! keyboard reporting do not double-fire.
//!
//! Picker screen: arrows or `hjkl` move the crosshair, `Enter`/space confirm
//! the cursor position (the tap analog), `p` parks at the best-known device
//! position, `+`/`-` zoom. `Tab` toggles screens, `d`/`m` jump to a specific
//! screen, `q`/`Esc`/`Ctrl-C` quit.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use parkspot_app::{App, AppAction};

/// Map a terminal event to state-machine transitions.
pub fn handle_event(app: &mut App, event: &Event) -> Vec<AppAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(_, _) => vec![AppAction::Render],
        _ => Vec::new(),
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) -> Vec<AppAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![AppAction::Quit]
        },
        KeyCode::Char('q') | KeyCode::Esc => vec![AppAction::Quit],

        KeyCode::Tab => app.toggle_screen(),
        KeyCode::Char('d') => app.show_detail(),
        KeyCode::Char('m') => app.show_picker(),

        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(-1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),

        KeyCode::Enter | KeyCode::Char(' ') => app.park_at_cursor(),
        KeyCode::Char('p') => app.park_here(),

        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom(1.0),
        KeyCode::Char('-') => app.zoom(-1.0),

        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use parkspot_app::{AppConfig, Screen};
    use parkspot_core::LocationStore;

    use super::*;

    fn app() -> App {
        App::new(LocationStore::new(), AppConfig::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_parks_at_cursor() {
        let mut app = app();
        let actions = handle_event(&mut app, &press(KeyCode::Enter));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.store().current().as_deref(), Some("0, 0"));
    }

    #[test]
    fn p_requests_position_when_no_fix_known() {
        let mut app = app();
        let actions = handle_event(&mut app, &press(KeyCode::Char('p')));
        assert_eq!(actions, vec![AppAction::QueryPosition]);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert_eq!(handle_event(&mut app, &press(KeyCode::Char('q'))), vec![AppAction::Quit]);
        assert_eq!(handle_event(&mut app, &press(KeyCode::Esc)), vec![AppAction::Quit]);
        let ctrl_c =
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, &ctrl_c), vec![AppAction::Quit]);
    }

    #[test]
    fn tab_toggles_screens() {
        let mut app = app();
        handle_event(&mut app, &press(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Detail);
        handle_event(&mut app, &press(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Picker);
    }

    #[test]
    fn arrows_move_the_cursor() {
        let mut app = app();
        let start = app.picker().cursor;
        handle_event(&mut app, &press(KeyCode::Right));
        handle_event(&mut app, &press(KeyCode::Up));
        let cursor = app.picker().cursor;
        assert!(cursor.lon > start.lon);
        assert!(cursor.lat > start.lat);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(handle_event(&mut app, &Event::Key(key)).is_empty());
        assert_eq!(app.store().current(), None);
    }

    #[test]
    fn resize_requests_render() {
        let mut app = app();
        assert_eq!(handle_event(&mut app, &Event::Resize(80, 24)), vec![AppAction::Render]);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut app = app();
        assert!(handle_event(&mut app, &press(KeyCode::Char('x'))).is_empty());
    }
}
