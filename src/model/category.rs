//! Event categorization.

use super::codes::{
    WM_CHAR, WM_KEYDOWN, WM_KEYUP, WM_KILLFOCUS, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
    WM_MOVE, WM_SETFOCUS, WM_SIZE,
};
use std::fmt;

const KEYBOARD_INPUT: [u32; 3] = [WM_KEYDOWN, WM_KEYUP, WM_CHAR];
const MOUSE_INTERACTION: [u32; 3] = [WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE];
const WINDOW_EVENT: [u32; 4] = [WM_MOVE, WM_SIZE, WM_SETFOCUS, WM_KILLFOCUS];

/// Semantic bucket an event code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Key down, key up, character.
    KeyboardInput,
    /// Left button down/up, pointer move.
    MouseInteraction,
    /// Move, resize, focus gained/lost.
    WindowEvent,
    /// Any other code.
    Unknown,
}

impl Category {
    /// Label used when rendering the unique index.
    pub fn label(self) -> &'static str {
        match self {
            Self::KeyboardInput => "Keyboard Input",
            Self::MouseInteraction => "Mouse Interaction",
            Self::WindowEvent => "Window Event",
            Self::Unknown => "Unknown Message",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an event code to its category. Total: unlisted codes are `Unknown`.
pub fn categorize(code: u32) -> Category {
    if KEYBOARD_INPUT.contains(&code) {
        Category::KeyboardInput
    } else if MOUSE_INTERACTION.contains(&code) {
        Category::MouseInteraction
    } else if WINDOW_EVENT.contains(&code) {
        Category::WindowEvent
    } else {
        Category::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::codes::{WM_MOUSEWHEEL, WM_PAINT, WM_RBUTTONDOWN, WM_TIMER};

    #[test]
    fn keyboard_codes_are_keyboard_input() {
        for code in [WM_KEYDOWN, WM_KEYUP, WM_CHAR] {
            assert_eq!(
                categorize(code),
                Category::KeyboardInput,
                "code {code:#06x}"
            );
        }
    }

    #[test]
    fn mouse_codes_are_mouse_interaction() {
        for code in [WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE] {
            assert_eq!(
                categorize(code),
                Category::MouseInteraction,
                "code {code:#06x}"
            );
        }
    }

    #[test]
    fn window_codes_are_window_events() {
        for code in [WM_MOVE, WM_SIZE, WM_SETFOCUS, WM_KILLFOCUS] {
            assert_eq!(categorize(code), Category::WindowEvent, "code {code:#06x}");
        }
    }

    #[test]
    fn everything_else_is_unknown() {
        // Right button and wheel are deliberately outside the mouse set.
        for code in [
            WM_RBUTTONDOWN,
            WM_MOUSEWHEEL,
            WM_PAINT,
            WM_TIMER,
            0,
            u32::MAX,
        ] {
            assert_eq!(categorize(code), Category::Unknown, "code {code:#06x}");
        }
    }

    #[test]
    fn labels_match_rendered_text() {
        assert_eq!(Category::KeyboardInput.to_string(), "Keyboard Input");
        assert_eq!(Category::MouseInteraction.to_string(), "Mouse Interaction");
        assert_eq!(Category::WindowEvent.to_string(), "Window Event");
        assert_eq!(Category::Unknown.to_string(), "Unknown Message");
    }
}
