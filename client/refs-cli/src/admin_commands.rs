use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in and show the registrations table
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Show the registrations table
    Dashboard,
    /// Write registrations.csv
    Export {
        /// Directory to write into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Forget the stored session
    Logout,
}
