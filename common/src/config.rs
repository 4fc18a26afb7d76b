use std::path::PathBuf;
use std::time::Duration;

/// Decides which targets may be probed and whose address gets recorded.
///
/// Built once at startup and shared read-only for the lifetime of the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdmissionPolicy {
    /// Admits private-range and loopback IP literals.
    ///
    /// Hostnames are never re-checked after resolution, so this only
    /// applies to targets given as IP literals.
    pub allow_private: bool,
    /// Ignores `X-Forwarded-For` and always logs the transport peer address.
    pub disable_forwarded_for: bool,
}

pub struct Config {
    pub listen_port: u16,
    pub log_file_path: PathBuf,
    /// Upper bound for a single tool invocation. `None` waits indefinitely.
    pub probe_timeout: Option<Duration>,
    pub policy: AdmissionPolicy,
}
