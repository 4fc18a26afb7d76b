//! Static per-tool configuration.
//!
//! Each [`CommandKind`] owns exactly one [`CommandProfile`]. Profiles are
//! plain `'static` data and never change after the binary is built.

use std::fmt;
use std::str::FromStr;

use crate::error::ProbeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Reachability probe.
    Ping,
    /// Multi-hop loss/latency probe.
    Mtr,
    /// Route trace.
    Traceroute,
    /// Packet-crafting probe. The only kind that honours a target port.
    Nping,
}

impl CommandKind {
    pub fn profile(self) -> &'static CommandProfile {
        match self {
            CommandKind::Ping => &PING,
            CommandKind::Mtr => &MTR,
            CommandKind::Traceroute => &TRACEROUTE,
            CommandKind::Nping => &NPING,
        }
    }
}

impl FromStr for CommandKind {
    type Err = ProbeError;

    /// Parses the first path segment of a request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(CommandKind::Ping),
            "mtr" => Ok(CommandKind::Mtr),
            "tracert" | "traceroute" => Ok(CommandKind::Traceroute),
            "nping" => Ok(CommandKind::Nping),
            other => Err(ProbeError::UnknownEndpoint(other.to_string())),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().binary)
    }
}

/// Whitelist from user-facing option tokens to tool flags.
#[derive(Debug)]
pub struct OptionTable {
    entries: &'static [(&'static str, &'static str)],
}

impl OptionTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the flag for `token`, or `""` when the token is not whitelisted.
    ///
    /// The empty string is still passed on as an argument.
    pub fn flag(&self, token: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, flag)| *flag)
            .unwrap_or("")
    }
}

#[derive(Debug)]
pub struct CommandProfile {
    /// Looked up in `PATH` at spawn time.
    pub binary: &'static str,
    pub options: OptionTable,
    /// Always placed before any user-selected flag.
    pub defaults: &'static [&'static str],
    /// Whether a `_port` suffix turns into `-p<port>`.
    pub accepts_port: bool,
}

pub static PING: CommandProfile = CommandProfile {
    binary: "ping",
    options: OptionTable::new(&[
        ("4", "-4"),
        ("6", "-6"),
        ("d", "-D"),
        ("n", "-n"),
        ("v", "-v"),
        ("c1", "-c1"),
        ("c5", "-c5"),
        ("c10", "-c10"),
        ("force4", "-4"),
        ("force6", "-6"),
        ("timestamps", "-D"),
        ("nodns", "-n"),
        ("verbose", "-v"),
        ("count1", "-c1"),
        ("count5", "-c5"),
        ("count10", "-c10"),
    ]),
    defaults: &["-c10"],
    accepts_port: false,
};

pub static MTR: CommandProfile = CommandProfile {
    binary: "mtr",
    options: OptionTable::new(&[
        ("4", "-4"),
        ("6", "-6"),
        ("u", "-u"),
        ("t", "-T"),
        ("e", "-e"),
        ("x", "-x"),
        ("n", "-n"),
        ("b", "-b"),
        ("z", "-z"),
        ("c1", "-c1"),
        ("c5", "-c5"),
        ("c10", "-c10"),
        ("force4", "-4"),
        ("force6", "-6"),
        ("udp", "-u"),
        ("tcp", "-T"),
        ("ext", "-e"),
        ("xml", "-x"),
        ("nodns", "-n"),
        ("cmb", "-b"),
        ("asn", "-z"),
        ("count1", "-c1"),
        ("count5", "-c5"),
        ("count10", "-c10"),
    ]),
    defaults: &["-r", "-w", "-c10"],
    accepts_port: false,
};

pub static TRACEROUTE: CommandProfile = CommandProfile {
    binary: "traceroute",
    options: OptionTable::new(&[
        ("4", "-4"),
        ("6", "-6"),
        ("f", "-F"),
        ("i", "-I"),
        ("t", "-T"),
        ("n", "-n"),
        ("u", "-U"),
        ("ul", "-UL"),
        ("d", "-D"),
        ("b", "--back"),
        ("force4", "-4"),
        ("force6", "-6"),
        ("dnf", "-F"),
        ("icmp", "-I"),
        ("tcp", "-T"),
        ("nodns", "-n"),
        ("udp", "-U"),
        ("udplite", "-UL"),
        ("dccp", "-D"),
        ("back", "--back"),
    ]),
    defaults: &[],
    accepts_port: false,
};

pub static NPING: CommandProfile = CommandProfile {
    binary: "nping",
    options: OptionTable::new(&[
        ("4", "-4"),
        ("6", "-6"),
        ("u", "--udp"),
        ("t", "--tcp-connect"),
        ("v", "-v"),
        ("c1", "-c1"),
        ("c3", "-c3"),
        ("c5", "-c5"),
        ("force4", "-4"),
        ("force6", "-6"),
        ("udp", "--udp"),
        ("tcp", "--tcp-connect"),
        ("verbose", "-v"),
        ("count1", "-c1"),
        ("count3", "-c3"),
        ("count5", "-c5"),
    ]),
    defaults: &["-c3"],
    accepts_port: true,
};
