use clap::Parser;
use oddsfold::cli::Cli;
use oddsfold::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config_path()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("oddsfold starting");

    if let Err(e) = oddsfold::cli::run(cli, &config).await {
        error!(error = %e, "Fatal error");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
