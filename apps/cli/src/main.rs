mod controller;
mod model;
mod render;
mod transport;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::controller::UploadController;
use crate::render::TerminalView;
use crate::transport::HttpTransport;

/// Upload a resume to an ATScore analysis service and print the report.
#[derive(Parser, Debug)]
#[command(name = "atscore", version)]
struct Args {
    /// Resume file to analyze (.pdf or .docx)
    file: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,
}

/// Filter directive used when RUST_LOG is unset. Tracing targets use
/// underscores where the package name has hyphens.
fn default_filter_directive() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME").replace('-', "_"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive())),
        )
        .init();

    let args = Args::parse();

    let controller = UploadController::new(HttpTransport::new(&args.server), TerminalView);

    match controller.submit(args.file.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_this_crate() {
        assert_eq!(default_filter_directive(), "atscore_cli=info");
    }

    #[test]
    fn test_default_filter_is_a_valid_directive() {
        // An unparsable directive would silently disable all output.
        assert!(EnvFilter::try_new(default_filter_directive()).is_ok());
    }
}
