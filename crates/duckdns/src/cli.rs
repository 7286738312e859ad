//! Command-line flags

use clap::{ArgAction, Parser};
use duckdns_core::config::DEFAULT_CONFIG_FILE;
use duckdns_core::resolver::{Arguments, ConfigFile};
use std::path::PathBuf;

/// Command-line arguments accepted by the `duckdns` binary.
#[derive(Parser, Debug)]
#[command(name = "duckdns", version, about = "Update DuckDNS records with this host's IP address")]
pub struct Cli {
    #[arg(short, long, help = "Use debug mode")]
    pub debug: bool,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_FILE,
        help = "Config file location"
    )]
    pub config: PathBuf,

    #[arg(
        short,
        long,
        value_name = "NAME",
        action = ArgAction::Append,
        value_delimiter = ',',
        help = "Names to update with DuckDNS. Just the subdomain section. \
                Use the flag multiple times to set multiple values."
    )]
    pub names: Vec<String>,

    #[arg(short, long, value_name = "TOKEN", help = "Token for updating DuckDNS")]
    pub token: Option<String>,

    #[arg(short, long, value_name = "FILE", help = "Log file location")]
    pub log: Option<PathBuf>,
}

impl Cli {
    /// Token and names as a resolution source
    pub fn arguments(&self) -> Arguments {
        Arguments::new(self.token.clone(), self.names.clone())
    }

    /// Configuration file as a resolution source
    pub fn config_file(&self) -> ConfigFile {
        ConfigFile::new(self.config.clone())
    }
}
