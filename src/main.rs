use color_eyre::{eyre::eyre, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use joymap::config::AppConfig;
use joymap::input::GilrsSource;
use joymap::ui::JoymapApp;
use joymap::vjoy::{self, SlotPool};

#[cfg(windows)]
fn platform_driver() -> impl vjoy::VJoyDriver {
    vjoy::ffi::VJoyInterface::new()
}

#[cfg(not(windows))]
fn platform_driver() -> impl vjoy::VJoyDriver {
    info!("no vJoy driver on this platform, using the in-memory backend");
    vjoy::SimDriver::with_slots(4)
}

fn main() -> Result<()> {
    setup()?;

    let config = AppConfig::load();

    // Fatal startup failures all happen here, before the frame loop: a
    // missing driver, no slot count, or an un-acquirable slot aborts with a
    // non-zero exit. The pool releases acquired slots on every exit path.
    let pool = SlotPool::acquire(platform_driver())?;

    let input = GilrsSource::new()?;

    info!("starting UI with {} virtual slots", pool.slot_count());
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Joymap",
        native_options,
        Box::new(|cc| Ok(Box::new(JoymapApp::new(cc, &config, input, pool)))),
    )
    .map_err(|e| eyre!("failed to run UI: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
    Ok(())
}
