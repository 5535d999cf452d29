use crate::model::case::CaseSummary;
use crate::model::phase::{Phase, PhaseResult};

pub enum EngineCommand {
    StartTrial { run_id: u64, case: CaseSummary },
    TestConnection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineResponse {
    PhaseStarted { run_id: u64, phase: Phase },
    PhaseCompleted { run_id: u64, result: PhaseResult },
    TrialFailed { run_id: u64, phase: Phase, message: String },
    TrialFinished { run_id: u64 },
    ConnectionStatus(Result<String, String>),
}
