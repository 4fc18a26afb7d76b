use std::net::SocketAddr;

use probehost_common::config::AdmissionPolicy;

use crate::command::CommandKind;
use crate::error::ProbeError;

/// One parsed `/<endpoint>/<targets>[/<options>]` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    pub kind: CommandKind,
    /// Comma-separated `host[_port]` tokens.
    pub raw_targets: String,
    /// Comma-separated option tokens. `None` when the segment is missing or empty.
    pub raw_options: Option<String>,
}

impl ProbeRequest {
    /// Segment 1 selects the tool, segment 2 holds the targets and
    /// segment 3, if non-empty, the options. Anything after that is ignored.
    pub fn from_path(path: &str) -> Result<Self, ProbeError> {
        let segments: Vec<&str> = path.split('/').collect();

        let endpoint = segments.get(1).copied().unwrap_or_default();
        let kind: CommandKind = endpoint.parse()?;

        let raw_targets = segments.get(2).copied().unwrap_or_default().to_string();
        let raw_options = segments
            .get(3)
            .filter(|options| !options.is_empty())
            .map(|options| options.to_string());

        Ok(Self {
            kind,
            raw_targets,
            raw_options,
        })
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.raw_targets.split(',')
    }

    pub fn options(&self) -> Option<&str> {
        self.raw_options.as_deref()
    }
}

/// Who gets recorded as the origin of a request in the logs.
///
/// A non-empty `X-Forwarded-For` wins over the peer address unless the
/// policy disables it. Never used for admission decisions.
pub fn remote_identity(
    forwarded_for: Option<&str>,
    peer: Option<SocketAddr>,
    policy: &AdmissionPolicy,
) -> String {
    match forwarded_for {
        Some(value) if !value.is_empty() && !policy.disable_forwarded_for => value.to_string(),
        _ => peer.map_or_else(|| String::from("unknown"), |addr| addr.to_string()),
    }
}
