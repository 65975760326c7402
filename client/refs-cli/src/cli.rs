use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "refs")]
#[command(about = "References pre-registration client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config directory (defaults to REFS_CONFIG_DIR, then ./.refs)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Backend base URL, overrides config.toml and REFS_API_URL
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,
}
