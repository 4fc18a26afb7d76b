use probehost_common::config::AdmissionPolicy;
use probehost_core::probe::CommandAssembler;

pub struct AppState {
    pub assembler: CommandAssembler,
    pub policy: AdmissionPolicy,
}

impl AppState {
    pub fn new(assembler: CommandAssembler, policy: AdmissionPolicy) -> Self {
        Self { assembler, policy }
    }
}
