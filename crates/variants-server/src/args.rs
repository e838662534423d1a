//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Command line interface for the Variants API server
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "variants-server")]
#[command(about = "REST API over a coronavirus variants collection with a cache-aside read path")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Overrides to apply on top of the loaded configuration
    pub fn overrides(&self) -> ServerOverrides {
        ServerOverrides {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Values from the command line that win over every configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerOverrides {
    /// Bind address
    pub host: Option<String>,
    /// Bind port
    pub port: Option<u16>,
}
