use std::sync::Arc;

use tracing::{Instrument, debug, info_span};

use crate::command::CommandProfile;
use crate::error::ProbeError;
use crate::probe::resolver::{TargetResolver, TargetSpec};
use crate::request::ProbeRequest;
use crate::runner::{Invocation, ProcessRunner};

/// Turns a [`ProbeRequest`] into tool runs and joins their output.
///
/// Holds no per-request state, so one instance serves every request.
pub struct CommandAssembler {
    resolver: TargetResolver,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandAssembler {
    pub fn new(resolver: TargetResolver, runner: Arc<dyn ProcessRunner>) -> Self {
        Self { resolver, runner }
    }

    /// Runs `request` with the profile of its own command kind.
    pub async fn probe(&self, request: &ProbeRequest, identity: &str) -> Result<String, ProbeError> {
        let output = self.build(request, request.kind.profile(), identity).await;
        if output.is_empty() {
            return Err(ProbeError::NoOutput);
        }
        Ok(output)
    }

    /// Resolves the targets, runs the tool once per admitted target and
    /// returns the trimmed, newline-joined output.
    ///
    /// An empty string means nothing usable came back.
    pub async fn build(&self, request: &ProbeRequest, profile: &CommandProfile, identity: &str) -> String {
        let span = info_span!("probe", remote = identity, command = profile.binary);

        async move {
            let targets = self.resolver.resolve(request.targets()).await;
            if targets.is_empty() {
                debug!(targets = %request.raw_targets, "no target admitted");
                return String::new();
            }

            let options = effective_options(profile, request.options());
            let mut output = String::new();

            for args in argument_vectors(profile, &options, &targets) {
                let invocation = Invocation {
                    binary: profile.binary.to_string(),
                    args,
                };
                output.push_str(&self.runner.run(identity, &invocation).await);
                output.push('\n');
            }

            output.trim().to_string()
        }
        .instrument(span)
        .await
    }
}

/// Default flags followed by one mapped flag per option token.
///
/// Tokens missing from the whitelist become `""` and keep their position.
pub fn effective_options(profile: &CommandProfile, raw_options: Option<&str>) -> Vec<String> {
    let mut options: Vec<String> = profile.defaults.iter().map(|flag| flag.to_string()).collect();

    if let Some(raw) = raw_options {
        options.extend(raw.split(',').map(|token| profile.options.flag(token).to_string()));
    }

    options
}

/// One fresh vector per target: `options`, then `-p<port>` where the
/// profile honours ports and one is set, then the host.
pub fn argument_vectors(profile: &CommandProfile, options: &[String], targets: &[TargetSpec]) -> Vec<Vec<String>> {
    targets
        .iter()
        .map(|target| {
            let mut args = options.to_vec();
            if profile.accepts_port && target.port != 0 {
                args.push(format!("-p{}", target.port));
            }
            args.push(target.host.clone());
            args
        })
        .collect()
}
