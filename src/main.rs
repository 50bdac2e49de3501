//! insight-probe CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use insight_probe::cli::{Cli, Command, ProbeCommand};
use insight_probe::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the probe output. Level is
/// controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("insight_probe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("insight_probe=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("insight-probe starting with args: {:?}", cli);

    let mut ui = create_ui(cli.output_mode(), cli.no_color);
    let command = ProbeCommand::new(cli.probe_config(), cli.report_format(), cli.strict);

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            // Only reachable when the JSON report itself cannot be written.
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
