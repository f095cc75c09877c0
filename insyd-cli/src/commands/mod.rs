//! Command implementations for insyd CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

pub mod init;
pub mod serve;

pub use init::run_init;
pub use serve::run_serve;

/// Database file name used when no path is configured
const DEFAULT_DB_FILE: &str = "insyd.db";

/// Database location shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database file path (default: insyd.db next to the executable)
    #[arg(long, env = "INSYD_DB_PATH")]
    pub db_path: Option<PathBuf>,
}

impl DbArgs {
    /// Resolve the database path, falling back to the executable's directory.
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }

        let exe = std::env::current_exe().context("could not determine current executable")?;
        let dir = exe
            .parent()
            .context("executable has no parent directory")?;
        Ok(dir.join(DEFAULT_DB_FILE))
    }
}
