use std::cell::RefCell;
use std::collections::VecDeque;

use crate::config::ModelProfile;
use crate::engine::llm_client::{BackendError, GenerationBackend};

/// Replays scripted replies in order and records every call it receives.
/// Once the script runs out every call fails with `EmptyResponse`.
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<String, BackendError>>>,
    calls: RefCell<Vec<(String, ModelProfile)>>,
}

impl ScriptedBackend {
    pub fn new(replies: Vec<Result<String, BackendError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn prompt(&self, i: usize) -> String {
        self.calls.borrow()[i].0.clone()
    }

    pub fn calls(&self) -> Vec<(String, ModelProfile)> {
        self.calls.borrow().clone()
    }
}

impl GenerationBackend for ScriptedBackend {
    fn generate(&self, prompt: &str, profile: &ModelProfile) -> Result<String, BackendError> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), profile.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(BackendError::EmptyResponse))
    }

    fn test_connection(&self) -> anyhow::Result<String> {
        Ok("Connected (scripted)".to_string())
    }
}
