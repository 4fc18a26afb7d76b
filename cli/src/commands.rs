use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use probehost_common::config::{AdmissionPolicy, Config};

/// Every option can also be set through its environment variable. A flag on
/// the command line wins.
#[derive(Debug, Parser)]
#[command(name = "probehost")]
#[command(about = "Network diagnostics over HTTP.", version)]
pub struct CommandLine {
    /// Sets the output file for the log
    #[arg(
        short = 'o',
        long,
        alias = "logFilePath",
        env = "PROBEHOST_LOGPATH",
        default_value = "probehost2.log"
    )]
    pub log_file_path: PathBuf,
    /// Sets the port to listen on
    #[arg(short, long, env = "PROBEHOST_LISTEN_PORT", default_value_t = 8080)]
    pub port: u16,
    /// Log the requesting IP instead of X-Forwarded-For.
    ///
    /// The variable enables this for any value except 0, false, no, off, n or f.
    #[arg(short = 'x', long, env = "PROBEHOST_DISABLE_X_FORWARDED_FOR")]
    pub disable_x_forwarded_for: bool,
    /// Allow probing private and loopback addresses.
    ///
    /// The variable enables this for any value except 0, false, no, off, n or f.
    #[arg(short = 'l', long, env = "PROBEHOST_ALLOW_PRIVATE")]
    pub allow_private: bool,
    /// Kill a probe that runs longer than this many seconds
    #[arg(short = 't', long, env = "PROBEHOST_PROBE_TIMEOUT", value_name = "SECONDS")]
    pub probe_timeout: Option<u64>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            listen_port: self.port,
            log_file_path: self.log_file_path,
            probe_timeout: self.probe_timeout.map(Duration::from_secs),
            policy: AdmissionPolicy {
                allow_private: self.allow_private,
                disable_forwarded_for: self.disable_x_forwarded_for,
            },
        }
    }
}
