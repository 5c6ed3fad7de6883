#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hexdir::config::LayoutConfig;

fn main() -> ExitCode {
    init_logging();

    match run(LayoutConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "hexdir stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hexdir=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(windows)]
fn run(config: LayoutConfig) -> Result<(), hexdir::ui::WindowError> {
    info!("starting converter window");
    hexdir::ui::ConverterWindow::run(config)
}

#[cfg(not(windows))]
fn run(config: LayoutConfig) -> Result<(), Box<dyn std::error::Error>> {
    use hexdir::app::ConversionController;
    use hexdir::ui::{run_console, WINDOW_TITLE};

    config.validate()?;
    info!("no native window on this platform, using console shell");

    let controller = ConversionController::from_layout(&config);
    println!("{WINDOW_TITLE}");
    run_console(&controller, std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}
