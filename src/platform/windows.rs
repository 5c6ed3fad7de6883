//! General Windows platform utilities
//!
//! Win32 helpers shared by the window shell: string and rectangle
//! conversions and message parameter decoding.

use crate::domain::core::Rect;
use windows::Win32::Foundation::{RECT, WPARAM};

/// Converts a domain rectangle to Windows RECT structure
pub fn rect_to_win32_rect(rect: &Rect) -> RECT {
    RECT {
        left: rect.x,
        top: rect.y,
        right: rect.x + rect.w,
        bottom: rect.y + rect.h,
    }
}

/// Converts a Windows RECT to domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> Rect {
    Rect {
        x: rect.left,
        y: rect.top,
        w: rect.right - rect.left,
        h: rect.bottom - rect.top,
    }
}

/// Encodes a string as a NUL-terminated UTF-16 buffer
pub fn to_wstring(input: &str) -> Vec<u16> {
    input.encode_utf16().chain(std::iter::once(0)).collect()
}

pub fn loword(wparam: WPARAM) -> u16 {
    (wparam.0 & 0xFFFF) as u16
}

pub fn hiword(wparam: WPARAM) -> u16 {
    ((wparam.0 >> 16) & 0xFFFF) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_round_trips() {
        let rect = Rect::new(-10, 20, 300, 145);
        let win32 = rect_to_win32_rect(&rect);
        assert_eq!((win32.right, win32.bottom), (290, 165));
        assert_eq!(win32_rect_to_rect(&win32), rect);
    }

    #[test]
    fn splits_command_parameters() {
        // EN_CHANGE (0x0300) from control 101
        let wparam = WPARAM((0x0300 << 16) | 101);
        assert_eq!(loword(wparam), 101);
        assert_eq!(hiword(wparam), 0x0300);
    }

    #[test]
    fn wide_strings_are_terminated() {
        assert_eq!(to_wstring("角度"), vec![0x89D2, 0x5EA6, 0]);
    }
}
