use std::time::Instant;

use thiserror::Error;

use crate::config::ModelProfiles;
use crate::engine::llm_client::{BackendError, GenerationBackend};
use crate::engine::prompt_builder::PromptBuilder;
use crate::model::case::CaseSummary;
use crate::model::persona::{Persona, JUDGE, JUROR_ANALYTICAL};
use crate::model::phase::{Phase, PhaseResult, TrialRecord};

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("{phase} phase failed: {source}")]
    Backend {
        phase: Phase,
        #[source]
        source: BackendError,
    },
    #[error("run was superseded before the {phase} phase")]
    Superseded { phase: Phase },
}

impl TrialError {
    /// The phase that did not complete.
    pub fn phase(&self) -> Phase {
        match self {
            TrialError::Backend { phase, .. } | TrialError::Superseded { phase } => *phase,
        }
    }
}

/// Progress notifications emitted while a trial runs.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseEvent {
    Started(Phase),
    Completed(PhaseResult),
}

/// The persona whose task drives a phase. Its backend profile decides the
/// sampling parameters of that phase's call.
pub fn lead_persona(phase: Phase) -> &'static Persona {
    match phase {
        Phase::Arguments | Phase::Verdict => &JUDGE,
        Phase::Deliberation => &JUROR_ANALYTICAL,
    }
}

/// Runs arguments, deliberation and verdict in order. Each prompt embeds
/// the full transcripts of the phases before it. The first backend failure
/// ends the trial; later phases are never attempted.
///
/// `still_wanted` is asked before every phase. Once it returns false the
/// trial stops without issuing further requests.
pub fn run_trial<B, W, F>(
    backend: &B,
    profiles: &ModelProfiles,
    case: &CaseSummary,
    still_wanted: W,
    mut on_event: F,
) -> Result<TrialRecord, TrialError>
where
    B: GenerationBackend + ?Sized,
    W: Fn() -> bool,
    F: FnMut(PhaseEvent),
{
    let mut step = |phase: Phase, prompt: String| {
        if !still_wanted() {
            tracing::info!(%phase, "run superseded, stopping");
            return Err(TrialError::Superseded { phase });
        }
        run_phase(backend, profiles, phase, &prompt, &mut on_event)
    };

    let arguments = step(Phase::Arguments, PromptBuilder::arguments(case))?;
    let deliberation = step(
        Phase::Deliberation,
        PromptBuilder::deliberation(&arguments.transcript),
    )?;
    let verdict = step(
        Phase::Verdict,
        PromptBuilder::verdict(&arguments.transcript, &deliberation.transcript),
    )?;

    Ok(TrialRecord {
        arguments,
        deliberation,
        verdict,
    })
}

fn run_phase<B, F>(
    backend: &B,
    profiles: &ModelProfiles,
    phase: Phase,
    prompt: &str,
    on_event: &mut F,
) -> Result<PhaseResult, TrialError>
where
    B: GenerationBackend + ?Sized,
    F: FnMut(PhaseEvent),
{
    let persona = lead_persona(phase);
    let profile = profiles.get(persona.profile);

    on_event(PhaseEvent::Started(phase));
    tracing::info!(
        %phase,
        persona = persona.role,
        model = %profile.model_id,
        prompt_chars = prompt.len(),
        "phase started"
    );

    let started = Instant::now();
    let transcript = backend.generate(prompt, profile).map_err(|source| {
        tracing::error!(%phase, error = %source, "phase failed");
        TrialError::Backend { phase, source }
    })?;

    tracing::info!(
        %phase,
        elapsed_ms = started.elapsed().as_millis() as u64,
        transcript_chars = transcript.len(),
        "phase completed"
    );

    let result = PhaseResult { phase, transcript };
    on_event(PhaseEvent::Completed(result.clone()));
    Ok(result)
}
