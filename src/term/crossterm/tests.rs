//! Tests for crossterm backend

use super::{translate_event, translate_key_event};
use crate::key::{Key, KeyMods, NavKey};
use crate::term::crossterm::CrosstermBackend;
use crate::term::{ModifierSupport, TerminalBackend};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn test_crossterm_backend_new() {
    let backend = CrosstermBackend::new();
    assert!(backend.is_ok());
}

#[test]
fn test_uninitialized_backend_is_degraded() {
    let backend = CrosstermBackend::new().unwrap();
    assert_eq!(backend.modifier_support(), ModifierSupport::Degraded);
}

#[test]
fn test_translate_chars() {
    assert_eq!(
        translate_key_event(press(KeyCode::Char('a'), KeyModifiers::empty())),
        Key::Char('a')
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
        Key::Char('A')
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('é'), KeyModifiers::empty())),
        Key::Char('é')
    );
}

#[test]
fn test_translate_ctrl_and_alt() {
    assert_eq!(
        translate_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Key::Ctrl('c')
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('S'), KeyModifiers::CONTROL)),
        Key::Ctrl('s')
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('b'), KeyModifiers::ALT)),
        Key::Alt('b')
    );
}

#[test]
fn test_translate_enter_variants() {
    assert_eq!(
        translate_key_event(press(KeyCode::Enter, KeyModifiers::empty())),
        Key::Enter
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Char('\r'), KeyModifiers::empty())),
        Key::Enter
    );
}

#[test]
fn test_translate_navigation_with_modifiers() {
    assert_eq!(
        translate_key_event(press(KeyCode::Up, KeyModifiers::empty())),
        Key::nav(NavKey::Up)
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Left, KeyModifiers::SHIFT)),
        Key::Nav(NavKey::Left, KeyMods::SHIFT)
    );
    assert_eq!(
        translate_key_event(press(
            KeyCode::Right,
            KeyModifiers::SHIFT | KeyModifiers::CONTROL
        )),
        Key::Nav(NavKey::Right, KeyMods::CTRL_SHIFT)
    );
    assert_eq!(
        translate_key_event(press(KeyCode::End, KeyModifiers::CONTROL)),
        Key::Nav(NavKey::End, KeyMods::CTRL)
    );
    assert_eq!(
        translate_key_event(press(KeyCode::PageDown, KeyModifiers::empty())),
        Key::nav(NavKey::PageDown)
    );
}

#[test]
fn test_translate_editing_keys() {
    assert_eq!(
        translate_key_event(press(KeyCode::Backspace, KeyModifiers::empty())),
        Key::Backspace
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Delete, KeyModifiers::empty())),
        Key::Delete
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Tab, KeyModifiers::empty())),
        Key::Tab
    );
    assert_eq!(
        translate_key_event(press(KeyCode::Esc, KeyModifiers::empty())),
        Key::Escape
    );
    assert_eq!(
        translate_key_event(press(KeyCode::F(5), KeyModifiers::empty())),
        Key::Unknown
    );
}

#[test]
fn test_translate_events() {
    assert_eq!(translate_event(Event::Resize(120, 40)), Some(Key::Resize(120, 40)));
    assert_eq!(translate_event(Event::FocusGained), None);

    let mut release = press(KeyCode::Char('x'), KeyModifiers::empty());
    release.kind = KeyEventKind::Release;
    assert_eq!(translate_event(Event::Key(release)), None);

    let mut repeat = press(KeyCode::Down, KeyModifiers::empty());
    repeat.kind = KeyEventKind::Repeat;
    assert_eq!(
        translate_event(Event::Key(repeat)),
        Some(Key::nav(NavKey::Down))
    );
}
