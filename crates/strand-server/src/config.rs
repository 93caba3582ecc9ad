//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};

/// Command-line arguments, with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(name = "strand-server")]
#[command(about = "Strand string analysis service")]
#[command(version)]
pub struct Args {
    /// HTTP server port
    #[arg(short, long, env = "STRAND_PORT", default_value = "3000")]
    pub port: u16,

    /// HTTP server address (overrides port)
    #[arg(short, long, env = "STRAND_ADDRESS")]
    pub address: Option<String>,

    /// SQLite database file
    #[arg(long, env = "DB_FILE", default_value = "data.db")]
    pub db_file: PathBuf,

    /// Keep strings in memory only; `--db-file` is ignored
    #[arg(long)]
    pub in_memory: bool,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Where strings are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    Sqlite(PathBuf),
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub storage: StorageConfig,
    pub log_level: String,
}

impl ServerConfig {
    /// Resolve and validate parsed arguments.
    pub fn from_args(args: Args) -> Result<Self> {
        let addr = match args.address {
            Some(address) => address
                .parse()
                .map_err(|e| Error::Config(format!("failed to parse address '{}': {}", address, e)))?,
            None => SocketAddr::from(([0, 0, 0, 0], args.port)),
        };

        let storage = if args.in_memory {
            StorageConfig::Memory
        } else {
            StorageConfig::Sqlite(args.db_file)
        };

        let log_level = match args.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => args.log_level,
            other => {
                return Err(Error::Config(format!("unknown log level '{}'", other)));
            }
        };

        Ok(Self {
            addr,
            storage,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("strand-server").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_port_builds_wildcard_address() {
        let config = ServerConfig::from_args(parse(&["--port", "8081"])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8081".parse().unwrap());
    }

    #[test]
    fn test_address_overrides_port() {
        let config =
            ServerConfig::from_args(parse(&["--port", "8081", "--address", "127.0.0.1:9000"]))
                .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn test_invalid_address() {
        let err = ServerConfig::from_args(parse(&["--address", "nowhere"])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_storage_selection() {
        let config = ServerConfig::from_args(parse(&["--db-file", "/tmp/s.db"])).unwrap();
        assert_eq!(config.storage, StorageConfig::Sqlite(PathBuf::from("/tmp/s.db")));

        let config = ServerConfig::from_args(parse(&["--in-memory"])).unwrap();
        assert_eq!(config.storage, StorageConfig::Memory);
    }

    #[test]
    fn test_unknown_log_level() {
        let err = ServerConfig::from_args(parse(&["--log-level", "loud"])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
