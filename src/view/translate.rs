//! Terminal input to host message translation.
//!
//! Maps crossterm events onto the message vocabulary in [`crate::model::codes`]
//! the way a windowing system would deliver them to a focused window:
//! - key press/repeat/release: `WM_KEYDOWN`/`WM_KEYUP` with a virtual-key code,
//!   followed by `WM_CHAR` for keys that produce a character
//! - mouse: button down/up, move/drag with `MK_*` state flags and packed
//!   cell coordinates; vertical scroll as `WM_MOUSEWHEEL`
//! - resize, focus and paste as `WM_SIZE`, `WM_SETFOCUS`/`WM_KILLFOCUS`, `WM_PASTE`

use crate::model::codes::{
    make_lparam, make_param, KF_REPEAT, KF_UP, MK_CONTROL, MK_LBUTTON, MK_MBUTTON, MK_RBUTTON,
    MK_SHIFT, SIZE_RESTORED, WHEEL_DELTA, WM_CHAR, WM_KEYDOWN, WM_KEYUP, WM_KILLFOCUS,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL,
    WM_PASTE, WM_RBUTTONDOWN, WM_RBUTTONUP, WM_SETFOCUS, WM_SIZE,
};
use crate::model::Event;
use crossterm::event::{
    Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Translate one terminal event into zero or more host events.
pub fn translate(event: &TerminalEvent) -> Vec<Event> {
    match event {
        TerminalEvent::Key(key) => translate_key(key),
        TerminalEvent::Mouse(mouse) => translate_mouse(mouse).into_iter().collect(),
        TerminalEvent::Resize(width, height) => vec![Event::new(
            WM_SIZE,
            SIZE_RESTORED,
            make_lparam(*width, *height),
        )],
        TerminalEvent::FocusGained => vec![Event::new(WM_SETFOCUS, 0, 0)],
        TerminalEvent::FocusLost => vec![Event::new(WM_KILLFOCUS, 0, 0)],
        TerminalEvent::Paste(text) => vec![Event::new(WM_PASTE, text.chars().count(), 0)],
    }
}

fn translate_key(key: &KeyEvent) -> Vec<Event> {
    let mut events = Vec::with_capacity(2);
    // Repeat count of 1 in the low word, transition bits on top.
    let flags = match key.kind {
        KeyEventKind::Press => 1,
        KeyEventKind::Repeat => 1 | KF_REPEAT,
        KeyEventKind::Release => 1 | KF_REPEAT | KF_UP,
    };
    let code = if key.kind == KeyEventKind::Release {
        WM_KEYUP
    } else {
        WM_KEYDOWN
    };

    if let Some(vk) = virtual_key(key.code) {
        events.push(Event::new(code, vk, flags));
    }
    if key.kind != KeyEventKind::Release {
        if let Some(ch) = character(key) {
            events.push(Event::new(WM_CHAR, ch, flags));
        }
    }
    events
}

/// Virtual-key code for a terminal key, where one exists.
pub fn virtual_key(code: KeyCode) -> Option<usize> {
    let vk = match code {
        KeyCode::Backspace => 0x08,
        KeyCode::Tab | KeyCode::BackTab => 0x09,
        KeyCode::Enter => 0x0D,
        KeyCode::Esc => 0x1B,
        KeyCode::PageUp => 0x21,
        KeyCode::PageDown => 0x22,
        KeyCode::End => 0x23,
        KeyCode::Home => 0x24,
        KeyCode::Left => 0x25,
        KeyCode::Up => 0x26,
        KeyCode::Right => 0x27,
        KeyCode::Down => 0x28,
        KeyCode::Insert => 0x2D,
        KeyCode::Delete => 0x2E,
        KeyCode::F(n @ 1..=24) => 0x70 + usize::from(n) - 1,
        KeyCode::Char(' ') => 0x20,
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => c.to_ascii_uppercase() as usize,
        _ => return None,
    };
    Some(vk)
}

fn character(key: &KeyEvent) -> Option<usize> {
    let ch = match key.code {
        KeyCode::Char(c)
            if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() =>
        {
            (c.to_ascii_uppercase() as usize) & 0x1F
        }
        KeyCode::Char(c) => c as usize,
        KeyCode::Enter => 0x0D,
        KeyCode::Tab => 0x09,
        KeyCode::Backspace => 0x08,
        KeyCode::Esc => 0x1B,
        _ => return None,
    };
    Some(ch)
}

fn key_state(modifiers: KeyModifiers) -> usize {
    let mut state = 0;
    if modifiers.contains(KeyModifiers::SHIFT) {
        state |= MK_SHIFT;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        state |= MK_CONTROL;
    }
    state
}

fn button_flag(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => MK_LBUTTON,
        MouseButton::Right => MK_RBUTTON,
        MouseButton::Middle => MK_MBUTTON,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<Event> {
    let state = key_state(mouse.modifiers);
    let position = make_lparam(mouse.column, mouse.row);

    let (code, held) = match mouse.kind {
        MouseEventKind::Down(button) => {
            let code = match button {
                MouseButton::Left => WM_LBUTTONDOWN,
                MouseButton::Right => WM_RBUTTONDOWN,
                MouseButton::Middle => WM_MBUTTONDOWN,
            };
            (code, button_flag(button))
        }
        MouseEventKind::Up(button) => {
            let code = match button {
                MouseButton::Left => WM_LBUTTONUP,
                MouseButton::Right => WM_RBUTTONUP,
                MouseButton::Middle => WM_MBUTTONUP,
            };
            (code, 0)
        }
        MouseEventKind::Drag(button) => (WM_MOUSEMOVE, button_flag(button)),
        MouseEventKind::Moved => (WM_MOUSEMOVE, 0),
        MouseEventKind::ScrollUp => return Some(wheel(WHEEL_DELTA as i16, state, position)),
        MouseEventKind::ScrollDown => return Some(wheel(-WHEEL_DELTA as i16, state, position)),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
    };

    Some(Event::new(code, state | held, position))
}

fn wheel(delta: i16, state: usize, position: isize) -> Event {
    Event::new(
        WM_MOUSEWHEEL,
        make_param(state as u16, delta as u16),
        position,
    )
}
