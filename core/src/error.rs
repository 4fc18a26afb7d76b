use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),
    /// Every target was rejected or every tool run produced nothing.
    #[error("no usable output was produced")]
    NoOutput,
}
