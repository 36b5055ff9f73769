//! Checklist prompt rendered in the terminal with `dialoguer`

use super::interface::{MultipleChoiceConfig, MultipleChoicePrompter};
use crate::error::Result;
use dialoguer::MultiSelect;

/// Asks interactively; space toggles an item, enter confirms.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let indices = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact()?;

        Ok(indices)
    }
}
