//! # Probe Target Model
//!
//! A target arrives as a single `host[_port]` token taken from a
//! comma-separated list in the request path:
//! * `8.8.8.8` or `2001:db8::1` (IP literal, no port).
//! * `example.com` (name, resolved later).
//! * `203.0.113.5_443` (anything before the first `_` is the host).
//!
//! Parsing a token never fails. Whether the host is admitted is decided
//! by the resolver in `probehost-core`.

use std::net::IpAddr;

use thiserror::Error;

const MAX_HOSTNAME_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// One `host[_port]` token, split but not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetToken {
    pub host: String,
    /// `0` when the suffix is absent or is not a valid port number.
    pub port: u16,
}

/// What a token's host turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostKind {
    Literal(IpAddr),
    /// Syntactically valid hostname, still unresolved.
    Name,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("host is empty")]
    Empty,
    #[error("host exceeds 253 characters")]
    TooLong,
    #[error("invalid hostname label '{0}'")]
    InvalidLabel(String),
    /// `127.1`, `2130706433` or `0x7f000001`: the system resolver reads
    /// these as addresses, not names.
    #[error("numeric top-level label '{0}'")]
    NumericTopLabel(String),
}

impl TargetToken {
    /// Splits on the first `_`. The remainder must be a base-10 port.
    pub fn parse(token: &str) -> Self {
        let (host, port) = match token.split_once('_') {
            Some((host, port_str)) => (host, port_str.parse::<u16>().unwrap_or(0)),
            None => (token, 0),
        };

        Self {
            host: host.to_string(),
            port,
        }
    }

    pub fn classify(&self) -> Result<HostKind, HostError> {
        classify_host(&self.host)
    }
}

pub fn classify_host(host: &str) -> Result<HostKind, HostError> {
    if let Ok(addr) = host.parse::<IpAddr>() {
        return Ok(HostKind::Literal(addr));
    }
    validate_hostname(host)?;
    Ok(HostKind::Name)
}

/// Letters, digits and hyphens in dot-separated labels.
///
/// A label may not start with `-`, so a valid hostname can never be taken
/// for a command-line flag.
pub fn validate_hostname(host: &str) -> Result<(), HostError> {
    if host.is_empty() {
        return Err(HostError::Empty);
    }
    if host.len() > MAX_HOSTNAME_LENGTH {
        return Err(HostError::TooLong);
    }

    // A single trailing dot marks a fully qualified name.
    let trimmed = host.strip_suffix('.').unwrap_or(host);

    for label in trimmed.split('.') {
        let valid = !label.is_empty()
            && label.len() <= MAX_LABEL_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');

        if !valid {
            return Err(HostError::InvalidLabel(label.to_string()));
        }
    }

    // RFC 1123 rules out all-numeric top-level labels.
    if let Some(top) = trimmed.rsplit('.').next()
        && is_numeric_label(top)
    {
        return Err(HostError::NumericTopLabel(top.to_string()));
    }

    Ok(())
}

/// Decimal, octal or `0x` hex, the forms `inet_aton` accepts.
fn is_numeric_label(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    match lower.strip_prefix("0x") {
        Some(hex) => hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => lower.bytes().all(|b| b.is_ascii_digit()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
