//! Spawns the diagnostic tool and captures what it prints.
//!
//! Every run is written to the audit log under [`AUDIT_TARGET`]: once when
//! it starts and once with its outcome.

use std::fmt;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

/// `tracing` target for per-invocation audit records.
pub const AUDIT_TARGET: &str = "probehost::audit";

/// A binary plus the exact `argv` it is started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub binary: String,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.binary, self.args)
    }
}

#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Returns the captured standard output.
    ///
    /// Failing to launch, a non-zero exit or a timeout are logged, never
    /// raised. Whatever was captured (possibly nothing) is still returned.
    async fn run(&self, identity: &str, invocation: &Invocation) -> String;
}

#[derive(Clone, Debug, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, identity: &str, invocation: &Invocation) -> String {
        let command = invocation.to_string();
        info!(target: AUDIT_TARGET, remote_ip = identity, command = %command, "request initiated");

        let mut cmd = Command::new(&invocation.binary);
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    let reason = format!("timed out after {}s", limit.as_secs_f64());
                    warn!(target: AUDIT_TARGET, remote_ip = identity, command = %command, error = %reason, "request failed");
                    return String::new();
                }
            },
            None => cmd.output().await,
        };

        let output = match result {
            Ok(output) => output,
            Err(e) => {
                warn!(target: AUDIT_TARGET, remote_ip = identity, command = %command, error = %e, "request failed");
                return String::new();
            }
        };

        if output.status.success() {
            info!(target: AUDIT_TARGET, remote_ip = identity, command = %command, "request succeeded");
        } else {
            warn!(
                target: AUDIT_TARGET,
                remote_ip = identity,
                command = %command,
                error = %output.status,
                "request failed"
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}
