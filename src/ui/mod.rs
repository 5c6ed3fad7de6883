pub mod console;
#[cfg(windows)]
pub mod converter_window;
pub mod layout;

pub use console::run_console;
#[cfg(windows)]
pub use converter_window::{ConverterWindow, WindowError};
pub use layout::{scale_for_dpi, ControlLayout};

pub const WINDOW_TITLE: &str = "十六进制方向值换算";
pub const INPUT_LABEL: &str = "十六进制方向值：";
pub const OUTPUT_LABEL: &str = "换算角度：";
