use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::model::case::EXAMPLE_CASES;
use crate::model::phase::{Phase, PhaseResult};

/// Id of the run the window still wants, shared with the engine thread so a
/// superseded run is dropped from the queue or stopped between phases.
#[derive(Debug, Clone, Default)]
pub struct ActiveRun(Arc<AtomicU64>);

impl ActiveRun {
    pub fn set(&self, run_id: u64) {
        self.0.store(run_id, Ordering::SeqCst);
    }

    pub fn is(&self, run_id: u64) -> bool {
        self.0.load(Ordering::SeqCst) == run_id
    }
}

/// Where one phase of the current run stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhaseStatus {
    #[default]
    Pending,
    Running,
    Done(PhaseResult),
    Failed(String),
    /// An earlier phase failed, so this one never ran.
    NotReached,
}

/// Everything one window remembers between frames: the case text being
/// edited and the progress of the latest run. `reset` returns it to the
/// state of a freshly opened window.
#[derive(Debug, Default)]
pub struct SessionState {
    pub case_text: String,
    pub selected_example: Option<usize>,
    pub input_warning: Option<String>,
    /// Id of the run whose responses are still wanted. Bumped on every start
    /// and every reset so late responses of an abandoned run are ignored.
    pub run_id: u64,
    pub running: bool,
    pub phases: [PhaseStatus; 3],
    active: ActiveRun,
}

impl SessionState {
    /// Handle the engine uses to check whether a run is still wanted.
    pub fn active_run(&self) -> ActiveRun {
        self.active.clone()
    }

    pub fn begin_run(&mut self) -> u64 {
        self.run_id += 1;
        self.active.set(self.run_id);
        self.running = true;
        self.input_warning = None;
        self.phases = Default::default();
        self.run_id
    }

    pub fn is_current(&self, run_id: u64) -> bool {
        run_id == self.run_id
    }

    pub fn phase(&self, phase: Phase) -> &PhaseStatus {
        &self.phases[phase.index()]
    }

    pub fn mark_running(&mut self, phase: Phase) {
        self.phases[phase.index()] = PhaseStatus::Running;
    }

    pub fn mark_done(&mut self, result: PhaseResult) {
        let idx = result.phase.index();
        self.phases[idx] = PhaseStatus::Done(result);
    }

    pub fn mark_failed(&mut self, phase: Phase, message: String) {
        self.phases[phase.index()] = PhaseStatus::Failed(message);
        for later in &mut self.phases[phase.index() + 1..] {
            *later = PhaseStatus::NotReached;
        }
        self.running = false;
    }

    pub fn finish(&mut self) {
        self.running = false;
    }

    pub fn has_results(&self) -> bool {
        self.phases.iter().any(|p| *p != PhaseStatus::Pending)
    }

    /// Fills the input from an example case, replacing whatever was typed.
    pub fn load_example(&mut self, index: usize) {
        if let Some(case) = EXAMPLE_CASES.get(index) {
            self.selected_example = Some(index);
            self.case_text = case.summary.to_string();
            self.input_warning = None;
        }
    }

    pub fn reset(&mut self) {
        let next_run = self.run_id + 1;
        let active = self.active.clone();
        *self = Self {
            active,
            ..Self::default()
        };
        self.run_id = next_run;
        self.active.set(next_run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(phase: Phase, text: &str) -> PhaseResult {
        PhaseResult {
            phase,
            transcript: text.to_string(),
        }
    }

    #[test]
    fn reset_clears_everything_and_invalidates_the_run() {
        let mut session = SessionState::default();
        session.case_text = "Some case".into();
        session.selected_example = Some(1);
        let run = session.begin_run();
        session.mark_done(result(Phase::Arguments, "Presiding Judge: Proceed."));

        session.reset();

        assert!(session.case_text.is_empty());
        assert_eq!(session.selected_example, None);
        assert!(!session.running);
        assert!(!session.has_results());
        assert!(!session.is_current(run));
    }

    #[test]
    fn failure_marks_later_phases_not_reached() {
        let mut session = SessionState::default();
        session.begin_run();
        session.mark_done(result(Phase::Arguments, "text"));
        session.mark_failed(Phase::Deliberation, "timeout".into());

        assert!(matches!(session.phase(Phase::Arguments), PhaseStatus::Done(_)));
        assert_eq!(
            session.phase(Phase::Deliberation),
            &PhaseStatus::Failed("timeout".into())
        );
        assert_eq!(session.phase(Phase::Verdict), &PhaseStatus::NotReached);
        assert!(!session.running);
    }

    #[test]
    fn new_run_discards_previous_phases() {
        let mut session = SessionState::default();
        let first = session.begin_run();
        session.mark_done(result(Phase::Arguments, "old"));
        let second = session.begin_run();

        assert_ne!(first, second);
        assert_eq!(session.phase(Phase::Arguments), &PhaseStatus::Pending);
        assert!(session.running);
    }

    #[test]
    fn engine_handle_follows_start_and_reset() {
        let mut session = SessionState::default();
        let handle = session.active_run();

        let first = session.begin_run();
        assert!(handle.is(first));

        session.reset();
        assert!(!handle.is(first));

        let second = session.begin_run();
        assert!(handle.is(second));
        assert!(!handle.is(first));
    }

    #[test]
    fn reloading_the_same_example_discards_edits() {
        let mut session = SessionState::default();
        session.load_example(0);
        let original = session.case_text.clone();

        session.case_text.push_str("\nEdited by hand.");
        session.load_example(0);

        assert_eq!(session.case_text, original);
        assert_eq!(session.selected_example, Some(0));
    }

    #[test]
    fn unknown_example_leaves_input_alone() {
        let mut session = SessionState::default();
        session.case_text = "typed".into();
        session.load_example(EXAMPLE_CASES.len());
        assert_eq!(session.case_text, "typed");
        assert_eq!(session.selected_example, None);
    }
}
