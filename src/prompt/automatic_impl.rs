//! Prompter that answers without user interaction.
//!
//! Used for `--features`/`--no-features` and in tests.

use super::interface::{MultipleChoiceConfig, MultipleChoicePrompter};
use crate::error::Result;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    multiple_choice_responses: HashMap<String, Vec<usize>>,
    default_multiple_choice: Vec<usize>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined multiple choice response for a specific prompt
    pub fn with_multiple_choice_response(
        mut self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        self.multiple_choice_responses.insert(prompt.to_string(), choice_indices);
        self
    }

    /// Answer used for any prompt without a predefined response
    pub fn with_default_multiple_choice(mut self, choice_indices: Vec<usize>) -> Self {
        self.default_multiple_choice = choice_indices;
        self
    }
}

impl MultipleChoicePrompter for AutomaticPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let response: Vec<usize> = self
            .multiple_choice_responses
            .get(&config.prompt)
            .unwrap_or(&self.default_multiple_choice)
            .iter()
            .copied()
            .filter(|&index| index < config.choices.len())
            .collect();

        log::debug!(
            "Auto-answering multiple choice prompt '{}' with: {:?}",
            config.prompt,
            response
        );
        Ok(response)
    }
}
