//! Command-line interface definitions for the announcements server.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Both options can also be provided via environment variables, which is how
//! container deployments usually configure them.

use clap::Parser;

/// Command-line arguments for the admission announcements server.
///
/// # Examples
///
/// ```sh
/// # Bind the defaults (0.0.0.0:8000)
/// admission_announcements
///
/// # Bind a specific interface and port
/// admission_announcements --host 127.0.0.1 --port 3000
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["admission_announcements"]);
        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 8000);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "admission_announcements",
            "--host",
            "127.0.0.1",
            "--port",
            "3000",
        ]);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.port, 3000);
    }

    #[test]
    fn test_cli_short_port_flag() {
        let cli = Cli::parse_from(["admission_announcements", "-p", "9000"]);
        assert_eq!(cli.port, 9000);
    }
}
