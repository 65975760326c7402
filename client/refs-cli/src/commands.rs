use crate::admin_commands::AdminCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Pre-register an email address
    Register {
        /// Email to put on the waitlist
        email: String,
    },

    /// Admin operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },

    /// Navigate to a path (/, /admin, /admin/dashboard)
    Open {
        /// Path to open; unknown paths go to the landing page
        path: String,
    },
}
