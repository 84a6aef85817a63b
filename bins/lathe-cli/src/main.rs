mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands};
use error::CliError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!(error = %e, "lathe failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = cli.client()?;
    match cli.command {
        Commands::Stage(args) => cmd::stage::run(&client, args).await,
        Commands::Report(args) => cmd::report::run(&client, args).await,
    }
}

#[cfg(test)]
mod tests {
    use lathe_client::ClientError;

    use super::*;

    #[tokio::test]
    async fn setup_errors_surface_from_run() {
        let cli = Cli::try_parse_from([
            "lathe",
            "--config",
            "/nonexistent/lathe.toml",
            "report",
            "--chip",
            "chip1",
            "--query",
            "SELECT 1",
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        assert!(matches!(err, CliError::Client(ClientError::Config(_))));
    }
}
