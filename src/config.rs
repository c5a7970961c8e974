//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::state::constants::{DEFAULT_INTERVAL_MINUTES, DEFAULT_TOAST_TTL_SECS};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "hydrate")]
#[command(about = "A local hydration reminder with a daily water tally")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Reminder interval in minutes (at least 1)
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MINUTES as i64, allow_negative_numbers = true)]
    pub interval: i64,

    /// Sound file played with every reminder
    #[arg(long)]
    pub sound: Option<PathBuf>,

    /// Command used to play the sound file
    #[arg(long, default_value = "paplay")]
    pub player: String,

    /// Command used to show desktop notifications
    #[arg(long, default_value = "notify-send")]
    pub notifier: String,

    /// Never show desktop notifications
    #[arg(long)]
    pub no_notifications: bool,

    /// How long toasts stay on screen, in seconds
    #[arg(long, default_value_t = DEFAULT_TOAST_TTL_SECS)]
    pub toast_ttl: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_a_fresh_session() {
        let config = Config::try_parse_from(["hydrate"]).unwrap();
        assert_eq!(config.port, 20554);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.interval, 60);
        assert_eq!(config.sound, None);
        assert_eq!(config.player, "paplay");
        assert_eq!(config.notifier, "notify-send");
        assert!(!config.no_notifications);
        assert_eq!(config.toast_ttl, 4);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.address(), "127.0.0.1:20554");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "hydrate",
            "-p", "8080",
            "-i", "25",
            "--sound", "/tmp/bell.mp3",
            "--no-notifications",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.interval, 25);
        assert_eq!(config.sound, Some(PathBuf::from("/tmp/bell.mp3")));
        assert!(config.no_notifications);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_non_numeric_interval() {
        assert!(Config::try_parse_from(["hydrate", "--interval", "soon"]).is_err());
    }
}
