//! # probehost core
//!
//! Turns an untrusted request path into argument vectors for a fixed set of
//! diagnostic tools and runs them.
//!
//! * **[`request`]**: splits `/<endpoint>/<targets>[/<options>]` into a [`ProbeRequest`].
//! * **[`command`]**: the four supported tools, their option whitelists and default flags.
//! * **[`probe`]**: target admission ([`probe::resolver`]) and argument assembly ([`probe::assembler`]).
//! * **[`runner`]**: the seam to the operating system that actually spawns the tool.
//!
//! Nothing in here goes through a shell. Every argument reaches the child
//! process as its own `argv` entry.

pub mod command;
pub mod error;
pub mod probe;
pub mod request;
pub mod runner;

pub use command::{CommandKind, CommandProfile, OptionTable};
pub use error::ProbeError;
pub use request::ProbeRequest;
