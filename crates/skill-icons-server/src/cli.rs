//! Command-line arguments for the `skill-icons` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ServerConfig;
use crate::error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "skill-icons",
    about = "Serve composed skill icon SVGs and the icon catalogue over HTTP",
    version
)]
pub struct Cli {
    /// TOML config file. Flags and environment variables override it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to bind to.
    #[arg(long, env = "SKILL_ICONS_BIND", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on.
    #[arg(short, long, env = "SKILL_ICONS_PORT")]
    pub port: Option<u16>,

    /// Icon catalogue JSON file, instead of the embedded one.
    #[arg(long, env = "SKILL_ICONS_CATALOGUE", value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    /// Fail at startup if an alias points at a missing icon.
    #[arg(long)]
    pub strict_aliases: bool,

    /// Default log filter, used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Merge the config file (if any) with flags and environment.
    pub fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(path) = self.catalogue {
            config.catalogue_path = Some(path);
        }
        if self.strict_aliases {
            config.strict_aliases = true;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}
