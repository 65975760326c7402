//! refs-cli library
//!
//! Flows, routing shell and rendering behind the `refs` binary, exported for
//! tests.

pub mod app;
pub mod error;
pub mod flows;
pub mod logger;
pub mod render;


pub use app::{App, Screen, View};
pub use error::{CliError, Result as CliResult};
