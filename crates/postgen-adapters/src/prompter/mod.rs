//! Non-interactive prompter that replays prepared answers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use postgen_core::{
    application::{ApplicationError, ports::Prompter},
    error::PostgenResult,
};
use tracing::debug;

/// Answers questions from a fixed script and records what was asked.
///
/// Clones share the same script and transcript, so a test can keep a handle
/// after boxing one into a workflow.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<Transcript>>,
}

#[derive(Debug, Default)]
struct Transcript {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    notifications: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(Transcript {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Transcript::default()
            })),
        }
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|t| t.prompts.clone())
            .unwrap_or_default()
    }

    /// Messages passed to `notify`, in order.
    pub fn notifications(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|t| t.notifications.clone())
            .unwrap_or_default()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inner.lock().map(|t| t.answers.len()).unwrap_or(0)
    }

    fn next_answer(&self, prompt: &str) -> PostgenResult<String> {
        let mut transcript = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        transcript.prompts.push(prompt.to_string());

        let answer = transcript
            .answers
            .pop_front()
            .ok_or_else(|| ApplicationError::PromptFailed {
                reason: format!("no scripted answer left for '{prompt}'"),
            })?;
        debug!(prompt, answer = %answer, "Scripted answer");
        Ok(answer)
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&self, prompt: &str) -> PostgenResult<String> {
        self.next_answer(prompt)
    }

    fn ask_choice(&self, prompt: &str, _options: &[String]) -> PostgenResult<String> {
        self.next_answer(prompt)
    }

    fn notify(&self, message: &str) {
        if let Ok(mut transcript) = self.inner.lock() {
            transcript.notifications.push(message.to_string());
        }
    }
}
