use std::sync::mpsc::{Receiver, Sender};

use crate::config::ModelProfiles;
use crate::engine::llm_client::GenerationBackend;
use crate::engine::pipeline::{run_trial, PhaseEvent, TrialError};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::case::CaseSummary;
use crate::model::session::ActiveRun;

/// Worker that owns the backend. Runs on its own thread so the window keeps
/// repainting while a trial's blocking requests are in flight. Commands are
/// handled one at a time, so trials never overlap. A trial the window no
/// longer wants is skipped if still queued and stopped between phases if
/// already running.
pub struct Engine<B> {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    backend: B,
    profiles: ModelProfiles,
    active: ActiveRun,
}

impl<B: GenerationBackend> Engine<B> {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        backend: B,
        profiles: ModelProfiles,
        active: ActiveRun,
    ) -> Self {
        Self {
            rx,
            tx,
            backend,
            profiles,
            active,
        }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::StartTrial { run_id, case } if !self.active.is(run_id) => {
                    tracing::debug!(run_id, case_chars = case.as_str().len(), "skipping superseded trial");
                }
                EngineCommand::StartTrial { run_id, case } => self.start_trial(run_id, &case),

                EngineCommand::TestConnection => {
                    let status = self
                        .backend
                        .test_connection()
                        .map_err(|e| format!("{e:#}"));
                    if let Err(e) = &status {
                        tracing::warn!(error = %e, "connection test failed");
                    }
                    let _ = self.tx.send(EngineResponse::ConnectionStatus(status));
                }
            }
        }
        tracing::debug!("command channel closed, engine stopping");
    }

    fn start_trial(&self, run_id: u64, case: &CaseSummary) {
        tracing::info!(run_id, case_chars = case.as_str().len(), "trial started");

        let tx = &self.tx;
        let active = &self.active;
        let still_wanted = || active.is(run_id);
        let outcome = run_trial(&self.backend, &self.profiles, case, still_wanted, |event| {
            let resp = match event {
                PhaseEvent::Started(phase) => EngineResponse::PhaseStarted { run_id, phase },
                PhaseEvent::Completed(result) => EngineResponse::PhaseCompleted { run_id, result },
            };
            let _ = tx.send(resp);
        });

        let resp = match outcome {
            Ok(record) => {
                tracing::info!(
                    run_id,
                    verdict_chars = record.verdict.transcript.len(),
                    "trial finished"
                );
                EngineResponse::TrialFinished { run_id }
            }
            // Nobody is listening for this run any more.
            Err(TrialError::Superseded { .. }) => return,
            Err(e) => EngineResponse::TrialFailed {
                run_id,
                phase: e.phase(),
                message: e.to_string(),
            },
        };
        let _ = self.tx.send(resp);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::engine::llm_client::BackendError;
    use crate::engine::test_support::ScriptedBackend;
    use crate::model::phase::Phase;
    use crate::model::session::SessionState;

    fn run_commands(
        backend: &ScriptedBackend,
        active: &ActiveRun,
        cmds: Vec<EngineCommand>,
    ) -> Vec<EngineResponse> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        for cmd in cmds {
            cmd_tx.send(cmd).unwrap();
        }
        drop(cmd_tx);

        Engine::new(cmd_rx, resp_tx, backend, ModelProfiles::default(), active.clone()).run();
        resp_rx.try_iter().collect()
    }

    fn start(run_id: u64) -> EngineCommand {
        EngineCommand::StartTrial {
            run_id,
            case: CaseSummary::new("Maintenance claim by a live-in partner.").unwrap(),
        }
    }

    #[test]
    fn successful_trial_streams_every_phase() {
        let backend = ScriptedBackend::new(vec![
            Ok("Petitioner Counsel: Allow it.".into()),
            Ok("Juror #1 (Analytical): Allow.".into()),
            Ok("Presiding Judge: Allowed.".into()),
        ]);

        let active = ActiveRun::default();
        active.set(7);

        let resps = run_commands(&backend, &active, vec![start(7)]);

        assert_eq!(resps.len(), 7);
        assert_eq!(
            resps[0],
            EngineResponse::PhaseStarted {
                run_id: 7,
                phase: Phase::Arguments
            }
        );
        assert!(matches!(
            &resps[5],
            EngineResponse::PhaseCompleted { run_id: 7, result } if result.phase == Phase::Verdict
        ));
        assert_eq!(resps[6], EngineResponse::TrialFinished { run_id: 7 });
    }

    #[test]
    fn backend_failure_is_reported_with_its_phase() {
        let backend = ScriptedBackend::new(vec![Err(BackendError::Status {
            status: 401,
            body: "invalid api key".into(),
        })]);

        let active = ActiveRun::default();
        active.set(1);

        let resps = run_commands(&backend, &active, vec![start(1)]);

        assert_eq!(resps.len(), 2);
        match &resps[1] {
            EngineResponse::TrialFailed {
                run_id,
                phase,
                message,
            } => {
                assert_eq!(*run_id, 1);
                assert_eq!(*phase, Phase::Arguments);
                assert!(message.contains("401"));
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[test]
    fn connection_test_reports_status() {
        let backend = ScriptedBackend::new(vec![]);
        let resps = run_commands(&backend, &ActiveRun::default(), vec![EngineCommand::TestConnection]);
        assert_eq!(
            resps,
            vec![EngineResponse::ConnectionStatus(Ok("Connected (scripted)".into()))]
        );
    }

    #[test]
    fn queued_trial_replaced_by_a_newer_one_is_skipped() {
        let backend = ScriptedBackend::new(vec![
            Ok("Petitioner Counsel: Allow it.".into()),
            Ok("Juror #1 (Analytical): Allow.".into()),
            Ok("Presiding Judge: Allowed.".into()),
        ]);
        let mut session = SessionState::default();
        let active = session.active_run();
        let first = session.begin_run();
        session.reset();
        let second = session.begin_run();

        let resps = run_commands(&backend, &active, vec![start(first), start(second)]);

        assert_eq!(backend.call_count(), 3);
        assert_eq!(resps.len(), 7);
        assert!(resps.iter().all(|r| match r {
            EngineResponse::PhaseStarted { run_id, .. }
            | EngineResponse::PhaseCompleted { run_id, .. }
            | EngineResponse::TrialFailed { run_id, .. }
            | EngineResponse::TrialFinished { run_id } => *run_id == second,
            EngineResponse::ConnectionStatus(_) => false,
        }));
    }

    #[test]
    fn trial_reset_mid_run_sends_nothing_after_it_stops() {
        let backend = ScriptedBackend::new(vec![
            Ok("Petitioner Counsel: Allow it.".into()),
            Ok("Juror #1 (Analytical): Allow.".into()),
        ]);
        let active = ActiveRun::default();
        active.set(3);
        // Stand-in for the window resetting once arguments come back.
        let resetting = ResetAfterFirstCall {
            inner: &backend,
            active: active.clone(),
        };

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        cmd_tx.send(start(3)).unwrap();
        drop(cmd_tx);
        Engine::new(cmd_rx, resp_tx, resetting, ModelProfiles::default(), active).run();
        let resps: Vec<_> = resp_rx.try_iter().collect();

        assert_eq!(backend.call_count(), 1);
        assert_eq!(resps.len(), 2);
        assert!(!resps
            .iter()
            .any(|r| matches!(r, EngineResponse::TrialFailed { .. } | EngineResponse::TrialFinished { .. })));
    }

    struct ResetAfterFirstCall<'a> {
        inner: &'a ScriptedBackend,
        active: ActiveRun,
    }

    impl GenerationBackend for ResetAfterFirstCall<'_> {
        fn generate(
            &self,
            prompt: &str,
            profile: &crate::config::ModelProfile,
        ) -> Result<String, BackendError> {
            let reply = self.inner.generate(prompt, profile);
            self.active.set(u64::MAX);
            reply
        }

        fn test_connection(&self) -> anyhow::Result<String> {
            self.inner.test_connection()
        }
    }
}
