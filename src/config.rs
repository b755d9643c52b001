//! Configuration and CLI argument handling

use std::time::Duration;

use anyhow::bail;
use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "hint-clock")]
#[command(about = "A polling clock display for shared escape-room timer state")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Endpoint returning `start,stop,hints,pause`
    #[arg(short, long, default_value = "http://localhost/getdata.php")]
    pub endpoint: String,

    /// How often to poll the endpoint, in milliseconds
    #[arg(long, default_value = "2000")]
    pub poll_interval_ms: u64,

    /// How often to redraw the clock, in milliseconds
    #[arg(long, default_value = "1000")]
    pub render_interval_ms: u64,

    /// Upper bound for a single poll request, in milliseconds
    #[arg(long, default_value = "1500")]
    pub request_timeout_ms: u64,

    /// Host address for the display server
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the display server
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Do not start the display server
    #[arg(long)]
    pub no_server: bool,

    /// Do not draw the clock line on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject settings the tasks cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.poll_interval_ms == 0 {
            bail!("--poll-interval-ms must be greater than zero");
        }
        if self.render_interval_ms == 0 {
            bail!("--render-interval-ms must be greater than zero");
        }
        if self.request_timeout_ms == 0 {
            bail!("--request-timeout-ms must be greater than zero");
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            bail!("endpoint must be an http:// or https:// URL, got {}", self.endpoint);
        }
        Ok(())
    }

    /// Get the display server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }

    /// Request timeout, never longer than one poll interval so requests cannot overlap
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.min(self.poll_interval_ms))
    }
}
