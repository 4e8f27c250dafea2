//! Server configuration.

use clap::Parser;

/// Default address to listen on.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Thialfi server command line arguments.
#[derive(Debug, Parser)]
#[command(name = "thialfi-server")]
#[command(version, about = "Thialfi-style publish/notify service")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl ServerConfig {
    /// Set the listen address.
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Filter directive for the tracing subscriber.
    pub fn log_filter(&self) -> String {
        format!("thialfi_server={0},thialfi_core={0},tower_http=info", self.log_level)
    }
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
