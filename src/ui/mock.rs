//! Scripted prompt answers for non-interactive runs and tests

use std::cell::RefCell;
use std::collections::VecDeque;

use super::input::{InputError, Result, UserInput};

/// [`UserInput`] that replays queued answers and records every prompt
///
/// An exhausted script behaves like the user pressing Esc.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    selections: RefCell<VecDeque<Option<usize>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    /// Answers for successive `prompt_select` calls (`None` = cancelled)
    #[must_use]
    pub fn selecting(answers: impl IntoIterator<Item = Option<usize>>) -> Self {
        Self {
            selections: RefCell::new(answers.into_iter().collect()),
            prompts: RefCell::default(),
        }
    }

    /// Every prompt shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    fn next(&self, prompt: &str) -> Option<usize> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.selections.borrow_mut().pop_front().flatten()
    }
}

impl UserInput for ScriptedInput {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        _default: Option<usize>,
    ) -> Result<Option<usize>> {
        match self.next(prompt) {
            Some(index) if index >= items.len() => Err(InputError::Invalid(format!(
                "choice {index} out of {} options",
                items.len()
            ))),
            answer => Ok(answer),
        }
    }
}
