//! Host message vocabulary.
//!
//! Message codes and packing helpers follow the Win32 window-message layout,
//! which is the vocabulary the router speaks regardless of the concrete host.

/// Window is being created.
pub const WM_CREATE: u32 = 0x0001;
/// Window is being destroyed.
pub const WM_DESTROY: u32 = 0x0002;
/// Window has moved.
pub const WM_MOVE: u32 = 0x0003;
/// Window has been resized.
pub const WM_SIZE: u32 = 0x0005;
/// Window gained keyboard focus.
pub const WM_SETFOCUS: u32 = 0x0007;
/// Window lost keyboard focus.
pub const WM_KILLFOCUS: u32 = 0x0008;
/// Window surface is ready to be painted.
pub const WM_PAINT: u32 = 0x000F;
/// Window is asked to close.
pub const WM_CLOSE: u32 = 0x0010;
/// Non-system key pressed.
pub const WM_KEYDOWN: u32 = 0x0100;
/// Non-system key released.
pub const WM_KEYUP: u32 = 0x0101;
/// Translated character input.
pub const WM_CHAR: u32 = 0x0102;
/// Timer elapsed.
pub const WM_TIMER: u32 = 0x0113;
/// Pointer moved.
pub const WM_MOUSEMOVE: u32 = 0x0200;
/// Left button pressed.
pub const WM_LBUTTONDOWN: u32 = 0x0201;
/// Left button released.
pub const WM_LBUTTONUP: u32 = 0x0202;
/// Right button pressed.
pub const WM_RBUTTONDOWN: u32 = 0x0204;
/// Right button released.
pub const WM_RBUTTONUP: u32 = 0x0205;
/// Middle button pressed.
pub const WM_MBUTTONDOWN: u32 = 0x0207;
/// Middle button released.
pub const WM_MBUTTONUP: u32 = 0x0208;
/// Vertical wheel rotated.
pub const WM_MOUSEWHEEL: u32 = 0x020A;
/// Clipboard contents pasted.
pub const WM_PASTE: u32 = 0x0302;

/// One wheel notch, in raw wheel-delta units.
pub const WHEEL_DELTA: i32 = 120;

/// `WM_SIZE` kind for a normal (restored) resize.
pub const SIZE_RESTORED: usize = 0;

/// Left button held.
pub const MK_LBUTTON: usize = 0x0001;
/// Right button held.
pub const MK_RBUTTON: usize = 0x0002;
/// Shift held.
pub const MK_SHIFT: usize = 0x0004;
/// Control held.
pub const MK_CONTROL: usize = 0x0008;
/// Middle button held.
pub const MK_MBUTTON: usize = 0x0010;

/// Key-message `lParam` bit: key was already down (auto-repeat).
pub const KF_REPEAT: isize = 1 << 30;
/// Key-message `lParam` bit: key is being released.
pub const KF_UP: isize = 1 << 31;

/// Low-order 16 bits of a parameter.
pub fn loword(value: usize) -> u16 {
    (value & 0xFFFF) as u16
}

/// High-order 16 bits of the low 32 bits of a parameter.
pub fn hiword(value: usize) -> u16 {
    ((value >> 16) & 0xFFFF) as u16
}

/// Pack two 16-bit values into a parameter (`low` in bits 0..16, `high` in 16..32).
pub fn make_param(low: u16, high: u16) -> usize {
    (usize::from(high) << 16) | usize::from(low)
}

/// Pack pointer coordinates into an `lParam`.
pub fn make_lparam(x: u16, y: u16) -> isize {
    make_param(x, y) as isize
}

/// Human-readable name for a known message code.
pub fn name(code: u32) -> Option<&'static str> {
    let name = match code {
        WM_CREATE => "WM_CREATE",
        WM_DESTROY => "WM_DESTROY",
        WM_MOVE => "WM_MOVE",
        WM_SIZE => "WM_SIZE",
        WM_SETFOCUS => "WM_SETFOCUS",
        WM_KILLFOCUS => "WM_KILLFOCUS",
        WM_PAINT => "WM_PAINT",
        WM_CLOSE => "WM_CLOSE",
        WM_KEYDOWN => "WM_KEYDOWN",
        WM_KEYUP => "WM_KEYUP",
        WM_CHAR => "WM_CHAR",
        WM_TIMER => "WM_TIMER",
        WM_MOUSEMOVE => "WM_MOUSEMOVE",
        WM_LBUTTONDOWN => "WM_LBUTTONDOWN",
        WM_LBUTTONUP => "WM_LBUTTONUP",
        WM_RBUTTONDOWN => "WM_RBUTTONDOWN",
        WM_RBUTTONUP => "WM_RBUTTONUP",
        WM_MBUTTONDOWN => "WM_MBUTTONDOWN",
        WM_MBUTTONUP => "WM_MBUTTONUP",
        WM_MOUSEWHEEL => "WM_MOUSEWHEEL",
        WM_PASTE => "WM_PASTE",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiword_extracts_bits_16_to_32() {
        assert_eq!(hiword(0x0078_0000), 0x0078);
        assert_eq!(hiword(0xFF88_0008), 0xFF88);
    }

    #[test]
    fn hiword_reinterprets_as_signed_wheel_delta() {
        let up = make_param(0, 120);
        let down = make_param(0, (-120i16) as u16);
        assert_eq!(hiword(up) as i16, 120);
        assert_eq!(hiword(down) as i16, -120);
    }

    #[test]
    fn make_lparam_packs_x_low_y_high() {
        let lparam = make_lparam(12, 7) as usize;
        assert_eq!(loword(lparam), 12);
        assert_eq!(hiword(lparam), 7);
    }

    #[test]
    fn name_covers_control_codes() {
        assert_eq!(name(WM_PAINT), Some("WM_PAINT"));
        assert_eq!(name(WM_MOUSEWHEEL), Some("WM_MOUSEWHEEL"));
        assert_eq!(name(0xBEEF), None);
    }
}
