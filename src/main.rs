//! envaudit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envaudit::audit::run_audit;
use envaudit::cli::Cli;
use envaudit::ui::{show_report, AuditTheme, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envaudit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envaudit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envaudit starting with args: {:?}", cli);

    let mut ui = if cli.no_color {
        TerminalUI::with_theme(AuditTheme::plain())
    } else {
        TerminalUI::new()
    };

    let report = run_audit();
    show_report(&report, &mut ui);

    // Advisories never change the exit status.
    ExitCode::SUCCESS
}
