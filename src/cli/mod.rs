// CLI module for langbridge

use clap::Parser;
use std::path::PathBuf;

/// langbridge - HTTP gateway to pretrained OPUS-MT translation models
#[derive(Parser, Debug)]
#[command(name = "langbridge", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.langbridge/config.toml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Address to bind to, overriding the config file
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}
