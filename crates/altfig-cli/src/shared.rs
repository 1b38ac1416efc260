use std::path::Path;

use altfig_core::{AltFigError, ObjectGraph};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` flags pick the level, starting at `warn`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read a PDF file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or unreadable.
pub fn read_pdf(file: &Path) -> Result<Vec<u8>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    std::fs::read(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })
}

/// Parse PDF bytes into an object graph, reporting failure on stderr.
pub fn load_graph(bytes: &[u8]) -> Result<ObjectGraph, i32> {
    ObjectGraph::load(bytes).map_err(fail)
}

/// Print an error to stderr and turn it into the process exit code.
pub fn fail(err: AltFigError) -> i32 {
    eprintln!("Error: {err}");
    1
}
