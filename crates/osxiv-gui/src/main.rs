mod app;
mod convert;
mod input;
mod viewport;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use osxiv_core::consts::FALLBACK_WINDOW_SIZE;
use osxiv_core::io::decode::load_image;
use osxiv_core::io::source::ImageSource;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "osxiv", about = "Overly simple image viewer")]
#[command(version)]
struct Cli {
    /// Image file to show, or '-' to read from stdin
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and go to stdout.
            if let Err(write_err) = err.print() {
                warn!(%write_err, "failed to write usage message");
            }
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Everything that can fail on bad input happens before a window exists.
    let source = ImageSource::from_arg(cli.file.as_deref())?;
    let image = load_image(&source)?;

    let title = source.window_title();
    info!(%title, width = image.width, height = image.height, "opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(FALLBACK_WINDOW_SIZE)
            .with_resizable(true)
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        "osxiv",
        options,
        Box::new(move |cc| Ok(Box::new(app::ViewerApp::new(&cc.egui_ctx, image)?))),
    )
    .map_err(|err| anyhow!("Event handling exception: {err}"))
}
