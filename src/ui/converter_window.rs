//! Converter window implemented with raw Win32 controls.
//!
//! One top-level window holds two labelled edit controls. Every `EN_CHANGE`
//! from the input edit goes through the [`ConversionController`] and the
//! result replaces the read-only output edit's text. The window follows
//! per-monitor DPI changes by re-running the layout and swapping its font.

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::c_void;

use tracing::{debug, warn};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{
    GetLastError, FALSE, HINSTANCE, HWND, LPARAM, LRESULT, RECT, TRUE, WIN32_ERROR, WPARAM,
};
use windows::Win32::Graphics::Gdi::{
    GetSysColorBrush, SetBkMode, UpdateWindow, COLOR_WINDOW, HDC, HFONT, TRANSPARENT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::AdjustWindowRectExForDpi;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::app::ConversionController;
use crate::config::{LayoutConfig, LayoutConfigError};
use crate::domain::core::Rect;
use crate::platform::dpi::{dpi_for_window, enable_per_monitor_awareness};
use crate::platform::font::{FontError, ScaledFont};
use crate::platform::windows::{hiword, loword, rect_to_win32_rect, to_wstring, win32_rect_to_rect};
use crate::ui::layout::ControlLayout;
use crate::ui::{INPUT_LABEL, OUTPUT_LABEL, WINDOW_TITLE};

const ID_INPUT: i32 = 101;
const ID_OUTPUT: i32 = 102;
const ID_STATIC_INPUT: i32 = 103;
const ID_STATIC_OUTPUT: i32 = 104;

// Winuser.h EM_LIMITTEXT
const EM_LIMITTEXT: u32 = 0x00C5;
// Matches the Win32 ERROR_CLASS_ALREADY_EXISTS (1410) code.
const CLASS_ALREADY_EXISTS_ERR: WIN32_ERROR = WIN32_ERROR(1410);
/// Units read back from the input edit, terminator included
const INPUT_BUFFER_UNITS: usize = 64;

const MAIN_WINDOW_STYLE: WINDOW_STYLE =
    WINDOW_STYLE(WS_OVERLAPPED.0 | WS_CAPTION.0 | WS_SYSMENU.0 | WS_MINIMIZEBOX.0);

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to register converter window class")]
    ClassRegistrationFailed,
    #[error("Failed to create converter window")]
    WindowCreationFailed,
    #[error("Failed to create child control {id}")]
    ControlCreationFailed { id: i32 },
    #[error("Windows API error: {0}")]
    Win32Error(String),
    #[error(transparent)]
    Font(#[from] FontError),
    #[error(transparent)]
    Layout(#[from] LayoutConfigError),
}

/// Public entry point for the converter window
pub struct ConverterWindow;

impl ConverterWindow {
    /// Creates the window and pumps messages until it is closed
    pub fn run(config: LayoutConfig) -> Result<(), WindowError> {
        config.validate()?;
        enable_per_monitor_awareness();

        let state_ptr = Box::into_raw(Box::new(WindowState::new(config)));

        let result = unsafe {
            create_main_window(state_ptr).map(|hwnd| {
                let _ = ShowWindow(hwnd, SW_SHOW);
                let _ = UpdateWindow(hwnd);
                run_message_loop(hwnd);
            })
        };

        // The window is gone by now, nothing else can reach the state.
        let mut state = unsafe { Box::from_raw(state_ptr) };
        match state.creation_error.take() {
            Some(err) => Err(err),
            None => result,
        }
    }
}

struct WindowState {
    hwnd: HWND,
    input_label: HWND,
    input: HWND,
    output_label: HWND,
    output: HWND,
    config: LayoutConfig,
    controller: ConversionController,
    layout: ControlLayout,
    font: Option<ScaledFont>,
    creation_error: Option<WindowError>,
}

impl WindowState {
    fn new(config: LayoutConfig) -> Self {
        let controller = ConversionController::from_layout(&config);
        let layout = ControlLayout::for_dpi(&config, LayoutConfig::BASE_DPI);

        Self {
            hwnd: HWND(0),
            input_label: HWND(0),
            input: HWND(0),
            output_label: HWND(0),
            output: HWND(0),
            config,
            controller,
            layout,
            font: None,
            creation_error: None,
        }
    }

    fn controls(&self) -> [HWND; 4] {
        [self.input_label, self.input, self.output_label, self.output]
    }
}

unsafe fn create_main_window(state_ptr: *mut WindowState) -> Result<HWND, WindowError> {
    let module = GetModuleHandleW(PCWSTR::null())
        .map_err(|e| WindowError::Win32Error(format!("{:?}", e)))?;
    let instance: HINSTANCE = module.into();

    register_window_class(instance)?;

    let title = to_wstring(WINDOW_TITLE);
    let hwnd = CreateWindowExW(
        WINDOW_EX_STYLE(0),
        w!("HexDirConversionTool"),
        PCWSTR(title.as_ptr()),
        MAIN_WINDOW_STYLE,
        CW_USEDEFAULT,
        CW_USEDEFAULT,
        0,
        0,
        None,
        None,
        instance,
        Some(state_ptr as *const c_void),
    );

    if hwnd.0 == 0 {
        return Err(WindowError::WindowCreationFailed);
    }

    (*state_ptr).hwnd = hwnd;
    Ok(hwnd)
}

unsafe fn register_window_class(instance: HINSTANCE) -> Result<(), WindowError> {
    let wnd_class = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(converter_wnd_proc),
        hInstance: instance,
        hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
        hbrBackground: GetSysColorBrush(COLOR_WINDOW),
        lpszClassName: w!("HexDirConversionTool"),
        ..Default::default()
    };

    if RegisterClassW(&wnd_class) == 0 {
        match GetLastError() {
            Err(err) if err.code() == CLASS_ALREADY_EXISTS_ERR.to_hresult() => {}
            _ => return Err(WindowError::ClassRegistrationFailed),
        }
    }

    Ok(())
}

unsafe extern "system" fn converter_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            let createstruct = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, createstruct.lpCreateParams as isize);
            if let Some(state) = window_state_mut(hwnd) {
                state.hwnd = hwnd;
                if let Err(err) = state.build_controls() {
                    state.creation_error = Some(err);
                    return LRESULT(-1);
                }
            }
            LRESULT(0)
        }
        WM_COMMAND => {
            if let Some(state) = window_state_mut(hwnd) {
                state.handle_command(wparam);
            }
            LRESULT(0)
        }
        WM_DPICHANGED => {
            if let Some(state) = window_state_mut(hwnd) {
                let suggested = &*(lparam.0 as *const RECT);
                state.handle_dpi_changed(u32::from(hiword(wparam)), win32_rect_to_rect(suggested));
            }
            LRESULT(0)
        }
        WM_CTLCOLORSTATIC | WM_CTLCOLOREDIT => {
            SetBkMode(HDC(wparam.0 as isize), TRANSPARENT);
            LRESULT(GetSysColorBrush(COLOR_WINDOW).0)
        }
        WM_DESTROY => {
            if let Some(state) = window_state_mut(hwnd) {
                state.hwnd = HWND(0);
            }
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn run_message_loop(hwnd: HWND) {
    let mut msg = MSG::default();
    // 0 is WM_QUIT, -1 is an error
    while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
        if !IsDialogMessageW(hwnd, &msg).as_bool() {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
    debug!("message loop finished");
}

unsafe fn window_state_mut(hwnd: HWND) -> Option<&'static mut WindowState> {
    let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowState;
    if ptr.is_null() {
        None
    } else {
        Some(&mut *ptr)
    }
}

impl WindowState {
    fn build_controls(&mut self) -> Result<(), WindowError> {
        let dpi = dpi_for_window(self.hwnd);
        self.layout = ControlLayout::for_dpi(&self.config, dpi);
        debug!(dpi, "building converter controls");

        let label_style = WINDOW_STYLE(WS_CHILD.0 | WS_VISIBLE.0);
        let edit_style_bits =
            WS_CHILD.0 | WS_VISIBLE.0 | WS_BORDER.0 | WS_TABSTOP.0 | (ES_AUTOHSCROLL as u32);

        self.input_label = create_control(self.hwnd, w!("STATIC"), label_style, ID_STATIC_INPUT)?;
        self.input = create_control(
            self.hwnd,
            w!("EDIT"),
            WINDOW_STYLE(edit_style_bits),
            ID_INPUT,
        )?;
        self.output_label = create_control(self.hwnd, w!("STATIC"), label_style, ID_STATIC_OUTPUT)?;
        self.output = create_control(
            self.hwnd,
            w!("EDIT"),
            WINDOW_STYLE(edit_style_bits | (ES_READONLY as u32)),
            ID_OUTPUT,
        )?;

        set_control_text(self.input_label, INPUT_LABEL);
        set_control_text(self.output_label, OUTPUT_LABEL);
        unsafe {
            SendMessageW(
                self.input,
                EM_LIMITTEXT,
                WPARAM(self.controller.input_limit()),
                LPARAM(0),
            );
        }

        self.apply_layout();
        self.refresh_font()?;
        self.fit_client_area();

        Ok(())
    }

    fn apply_layout(&self) {
        for (hwnd, rect) in self.controls().into_iter().zip(self.layout.controls()) {
            unsafe {
                let _ = MoveWindow(hwnd, rect.x, rect.y, rect.w, rect.h, TRUE);
            }
        }
    }

    /// Creates the font for the current DPI and hands it to every control
    ///
    /// The previous font is only released once no control uses it.
    fn refresh_font(&mut self) -> Result<(), WindowError> {
        let font = ScaledFont::create(self.config.font_face, self.layout.font_height)?;
        for hwnd in self.controls() {
            apply_font(hwnd, font.handle());
        }
        self.font = Some(font);
        Ok(())
    }

    /// Resizes the frame so the client area matches the layout
    fn fit_client_area(&self) {
        let client = Rect::new(0, 0, self.layout.client_width, self.layout.client_height);
        let mut frame = rect_to_win32_rect(&client);
        let adjusted = unsafe {
            AdjustWindowRectExForDpi(
                &mut frame,
                MAIN_WINDOW_STYLE,
                FALSE,
                WINDOW_EX_STYLE(0),
                self.layout.dpi,
            )
        };
        if adjusted.is_err() {
            warn!("could not compute frame size, using client size");
            frame = rect_to_win32_rect(&client);
        }

        let frame = win32_rect_to_rect(&frame);
        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                HWND(0),
                0,
                0,
                frame.w,
                frame.h,
                SWP_NOMOVE | SWP_NOZORDER,
            );
        }
    }

    fn handle_command(&mut self, wparam: WPARAM) {
        let command_id = i32::from(loword(wparam));
        let notify_code = u32::from(hiword(wparam));

        if command_id == ID_INPUT && notify_code == EN_CHANGE as u32 {
            self.refresh_output();
        }
    }

    fn refresh_output(&self) {
        let mut buffer = [0u16; INPUT_BUFFER_UNITS];
        let length = unsafe { GetWindowTextW(self.input, &mut buffer) };
        let text = String::from_utf16_lossy(&buffer[..length.max(0) as usize]);

        let result = self.controller.on_input_changed(&text);
        set_control_text(self.output, &result);
    }

    fn handle_dpi_changed(&mut self, dpi: u32, suggested: Rect) {
        debug!(dpi, ?suggested, "DPI changed");

        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                HWND(0),
                suggested.x,
                suggested.y,
                suggested.w,
                suggested.h,
                SWP_NOZORDER | SWP_NOACTIVATE,
            );
        }

        self.layout = ControlLayout::for_dpi(&self.config, dpi);
        self.apply_layout();
        if let Err(err) = self.refresh_font() {
            warn!(%err, "keeping previous font after DPI change");
        }
    }
}

fn create_control(
    parent: HWND,
    class: PCWSTR,
    style: WINDOW_STYLE,
    id: i32,
) -> Result<HWND, WindowError> {
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            class,
            PCWSTR::null(),
            style,
            0,
            0,
            0,
            0,
            parent,
            HMENU(id as isize),
            None,
            None,
        )
    };

    if hwnd.0 == 0 {
        return Err(WindowError::ControlCreationFailed { id });
    }
    Ok(hwnd)
}

fn apply_font(hwnd: HWND, font: HFONT) {
    unsafe {
        SendMessageW(hwnd, WM_SETFONT, WPARAM(font.0 as usize), LPARAM(1));
    }
}

fn set_control_text(hwnd: HWND, text: &str) {
    let wide = to_wstring(text);
    unsafe {
        let _ = SetWindowTextW(hwnd, PCWSTR(wide.as_ptr()));
    }
}
