use clap::{Args, Parser, Subcommand};
use lathe_client::{ClientConfig, LatheClient};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lathe", about = "Stage data and run reports against a lathe service")]
pub struct Cli {
    /// Path to TOML client configuration.
    #[arg(long, global = true, env = "LATHE_CONFIG")]
    pub config: Option<String>,

    /// Service URL; overrides `base_url` from the config file.
    #[arg(long, global = true, env = "LATHE_URL")]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stage query results as chips
    Stage(StageArgs),
    /// Run queries against staged chips
    Report(ReportArgs),
}

#[derive(Args, Clone, Debug)]
pub struct StageArgs {
    /// Source database name.
    #[arg(long)]
    pub database: String,

    /// Table name the staged data is exposed as.
    #[arg(long)]
    pub table: Option<String>,

    /// Reuse an existing chip id.
    #[arg(long)]
    pub chip_id: Option<String>,

    /// Source query; repeat to stage several datasets.
    #[arg(long = "query", required = true)]
    pub queries: Vec<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Chip to query; repeat for several.
    #[arg(long = "chip", required = true)]
    pub chip_ids: Vec<String>,

    /// Report query; repeat for several.
    #[arg(long = "query", required = true)]
    pub queries: Vec<String>,
}

impl Cli {
    pub fn client(&self) -> Result<LatheClient, CliError> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };
        if let Some(url) = &self.url {
            config.base_url = url.clone();
        }
        tracing::debug!(base_url = %config.base_url, "client configured");
        Ok(LatheClient::from_config(&config)?)
    }
}
