use serde::{Deserialize, Serialize};
use std::fmt;

/// The three stages of a proceeding, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Arguments,
    Deliberation,
    Verdict,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Arguments, Phase::Deliberation, Phase::Verdict];

    pub fn index(self) -> usize {
        match self {
            Phase::Arguments => 0,
            Phase::Deliberation => 1,
            Phase::Verdict => 2,
        }
    }

    pub fn tab_title(self) -> &'static str {
        match self {
            Phase::Arguments => "Opening Arguments",
            Phase::Deliberation => "Jury Deliberation",
            Phase::Verdict => "Final Verdict",
        }
    }

    /// Text shown next to the spinner while the phase is running.
    pub fn progress_label(self) -> &'static str {
        match self {
            Phase::Arguments => "Hearing arguments...",
            Phase::Deliberation => "Jury deliberating...",
            Phase::Verdict => "Preparing judgment...",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Arguments => "arguments",
            Phase::Deliberation => "deliberation",
            Phase::Verdict => "verdict",
        };
        f.write_str(name)
    }
}

/// Raw backend output for one phase. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: Phase,
    pub transcript: String,
}

/// Output of a run that completed all three phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub arguments: PhaseResult,
    pub deliberation: PhaseResult,
    pub verdict: PhaseResult,
}
