//! Per-monitor DPI awareness
//!
//! The process opts into per-monitor v2 awareness before any window is
//! created, so Windows sends `WM_DPICHANGED` instead of bitmap-stretching
//! the window when it moves between monitors.

use tracing::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::HiDpi::{
    GetDpiForWindow, SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};

use crate::config::LayoutConfig;

/// Requests per-monitor v2 DPI awareness for the whole process
///
/// Fails quietly when awareness was already fixed (for example by a
/// manifest); the window then keeps whatever mode the process has.
pub fn enable_per_monitor_awareness() {
    let _ = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };
    debug!("requested per-monitor DPI awareness");
}

/// Returns the DPI of the monitor a window is on, or 96 when it is unknown
pub fn dpi_for_window(hwnd: HWND) -> u32 {
    match unsafe { GetDpiForWindow(hwnd) } {
        0 => LayoutConfig::BASE_DPI,
        dpi => dpi,
    }
}
