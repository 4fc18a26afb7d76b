mod commands;
mod http;
mod terminal;

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use commands::CommandLine;
use probehost_common::config::Config;
use probehost_core::probe::{CommandAssembler, SystemLookup, TargetResolver};
use probehost_core::runner::SystemRunner;
use tracing::info;

use crate::http::state::AppState;
use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: Config = CommandLine::parse_args().into_config();

    let log_file = open_log_file(&cfg.log_file_path)
        .with_context(|| format!("failed to initialize the log file {}", cfg.log_file_path.display()))?;
    logging::init_logging(log_file);
    info!("probehost initialized");

    let resolver = TargetResolver::new(cfg.policy, Arc::new(SystemLookup));
    let runner = Arc::new(SystemRunner::new(cfg.probe_timeout));
    let state = Arc::new(AppState::new(CommandAssembler::new(resolver, runner), cfg.policy));

    http::serve(state, cfg.listen_port)
        .await
        .with_context(|| format!("failed to serve on port {}", cfg.listen_port))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o660);
    }

    options.open(path)
}
