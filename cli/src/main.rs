//! Evil Genius CLI - Vagrantfile generation and Vagrant process control

use clap::Parser;
use tracing_subscriber::EnvFilter;

use evilgenius::cli::Cli;
use evilgenius::output::json;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "evilgenius=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let json_mode = cli.json;
    match cli.run().await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            match json::format_error(&format!("{e:#}"), json::error_code(&e)) {
                Ok(out) if json_mode => println!("{out}"),
                _ => eprintln!("Error: {e:#}"),
            }
            std::process::exit(1);
        }
    }
}
