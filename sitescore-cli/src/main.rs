//! Entry point for the `sitescore` binary.
#![forbid(unsafe_code)]

use sitescore_cli::{CliError, run};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports its final error on stderr"
)]
fn main() {
    init_tracing();
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("sitescore: {err}");
            std::process::exit(1);
        }
    }
}
