use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod shell;

/// Quickwin interactive session shell.
///
/// Activities live only for the lifetime of the process: one run is one
/// planning session. Commands are read line by line from stdin, so the
/// shell works both at a terminal and with a piped script.
#[derive(Parser)]
#[command(name = "quickwin-cli", version, about = "Quickwin session shell")]
struct Cli {}

#[tokio::main]
async fn main() {
    // Keep stdout clean for command output; diagnostics go to stderr.
    // Override with RUST_LOG=debug to watch store mutations.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quickwin_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    if let Err(e) = shell::run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
