//! HTTP server command
//!
//! Opens the database, initializes it, then binds the listener. Requests
//! are never accepted before the schema exists.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use insyd_server::db::{initialize, open_pool, PoolOptions};
use insyd_server::http::{run_server, ServerConfig};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 4001)]
    pub port: u16,

    /// Host address to bind
    #[arg(long, env = "INSYD_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[command(flatten)]
    pub db: DbArgs,

    /// Request timeout in seconds
    #[arg(long, env = "INSYD_REQUEST_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Skip inserting sample users and notifications
    #[arg(long, env = "INSYD_NO_SEED")]
    pub no_seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_path = args.db.resolve()?;
    tracing::info!("Opening database at {}", db_path.display());

    let pool = open_pool(&db_path, PoolOptions::default())
        .await
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

    initialize(&pool, !args.no_seed)
        .await
        .context("Database initialization failed")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_override_defaults() {
        let h = Harness::parse_from([
            "insyd",
            "--port",
            "5005",
            "--host",
            "127.0.0.1",
            "--no-seed",
            "--db-path",
            "/tmp/x.db",
        ]);
        assert_eq!(h.serve.port, 5005);
        assert_eq!(h.serve.host, IpAddr::from([127, 0, 0, 1]));
        assert!(h.serve.no_seed);
        assert_eq!(h.serve.timeout, 30);
        assert_eq!(h.serve.db.db_path.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
    }

    #[test]
    fn cors_cannot_be_restricted() {
        assert!(Harness::try_parse_from(["insyd", "--cors-localhost-only"]).is_err());
    }
}
