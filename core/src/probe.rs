//! The request-to-command pipeline.
//!
//! [`resolver::TargetResolver`] decides which targets survive, then
//! [`assembler::CommandAssembler`] builds one argument vector per survivor
//! and hands it to a [`crate::runner::ProcessRunner`].

pub mod assembler;
pub mod resolver;

pub use assembler::CommandAssembler;
pub use resolver::{NameLookup, SystemLookup, TargetResolver, TargetSpec};
