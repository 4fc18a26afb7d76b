#![cfg(test)]
//! Full pipeline with the real resolver and the real process runner.
//!
//! `echo` stands in for the diagnostic tool so nothing here needs raw
//! sockets or network access. Only IP literals and `.invalid` names are
//! used, so DNS is never expected to succeed.

use std::sync::Arc;

use probehost_common::config::AdmissionPolicy;
use probehost_core::command::{CommandProfile, OptionTable};
use probehost_core::probe::{CommandAssembler, SystemLookup, TargetResolver};
use probehost_core::runner::SystemRunner;
use probehost_core::{ProbeError, ProbeRequest};

static ECHO: CommandProfile = CommandProfile {
    binary: "echo",
    options: OptionTable::new(&[("a", "alpha"), ("alias", "alpha"), ("b", "beta")]),
    defaults: &["probe"],
    accepts_port: true,
};

static MISSING: CommandProfile = CommandProfile {
    binary: "probehost-missing-tool",
    options: OptionTable::new(&[]),
    defaults: &[],
    accepts_port: false,
};

fn assembler(allow_private: bool) -> CommandAssembler {
    let policy = AdmissionPolicy {
        allow_private,
        ..Default::default()
    };
    let resolver = TargetResolver::new(policy, Arc::new(SystemLookup));
    CommandAssembler::new(resolver, Arc::new(SystemRunner::default()))
}

#[tokio::test]
#[cfg(unix)]
async fn echo_pipeline_public_only() -> anyhow::Result<()> {
    let assembler = assembler(false);
    let request = ProbeRequest::from_path("/nping/8.8.8.8_53,10.0.0.1,127.0.0.1,unknown.invalid,1.1.1.1/a,b")?;

    let output = assembler.build(&request, &ECHO, "integration").await;

    assert_eq!(output, "probe alpha beta -p53 8.8.8.8\n\nprobe alpha beta 1.1.1.1");
    Ok(())
}

#[tokio::test]
#[cfg(unix)]
async fn echo_pipeline_private_allowed() -> anyhow::Result<()> {
    let assembler = assembler(true);
    let request = ProbeRequest::from_path("/nping/10.0.0.1_8080,::1/alias")?;

    let output = assembler.build(&request, &ECHO, "integration").await;

    assert_eq!(output, "probe alpha -p8080 10.0.0.1\n\nprobe alpha ::1");
    Ok(())
}

#[tokio::test]
#[cfg(unix)]
async fn unknown_option_is_passed_as_empty_argument() -> anyhow::Result<()> {
    let assembler = assembler(false);
    let request = ProbeRequest::from_path("/nping/9.9.9.9/zzz,b")?;

    let output = assembler.build(&request, &ECHO, "integration").await;

    // echo separates the empty argument with its own space
    assert_eq!(output, "probe  beta 9.9.9.9");
    Ok(())
}

#[tokio::test]
async fn missing_tool_is_no_output() -> anyhow::Result<()> {
    let assembler = assembler(false);
    let request = ProbeRequest::from_path("/ping/8.8.8.8")?;

    let output = assembler.build(&request, &MISSING, "integration").await;

    assert!(output.is_empty());
    Ok(())
}

#[tokio::test]
async fn rejected_targets_never_spawn() -> anyhow::Result<()> {
    let assembler = assembler(false);
    let request = ProbeRequest::from_path("/ping/192.168.1.1,-c1,unknown.invalid,a;reboot")?;

    assert_eq!(
        assembler.probe(&request, "integration").await,
        Err(ProbeError::NoOutput)
    );
    Ok(())
}
