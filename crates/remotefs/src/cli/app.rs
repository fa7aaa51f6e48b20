use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use url::Url;

#[derive(Clone, Debug, Parser)]
#[command(name = "remotefs", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "g", name = "get", about = "Download a single file")]
    Get(GetArg),
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Never prompt for credentials.
    #[arg(long, global = true)]
    pub no_interaction: bool,

    #[arg(long, global = true, help = "Do not print download progress")]
    pub no_progress: bool,

    #[arg(long, global = true, value_name = "SECS", default_value_t = 30)]
    pub connect_timeout: u64,

    #[arg(long, global = true, value_name = "SECS", default_value_t = 300)]
    pub timeout: u64,

    #[arg(long, global = true, env = "REMOTEFS_PROXY")]
    pub proxy: Option<Url>,

    #[arg(long, global = true, env = "REMOTEFS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "REMOTEFS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl GlobalArgs {
    pub fn connect_timeout(&self) -> Duration { Duration::from_secs(self.connect_timeout) }

    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout) }

    /// Default tracing directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct GetArg {
    pub url: Url,

    /// Credential scope; defaults to the URL's host and port.
    #[arg(long)]
    pub origin: Option<String>,

    /// Write to PATH instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl GetArg {
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.origin {
            return origin.clone();
        }
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }
}
