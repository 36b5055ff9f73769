//! The one question `goo create` asks: which of a fixed list of features to
//! install. Answered by a terminal prompt or, with `--features`, up front.

use crate::error::Result;

/// Items offered in the feature checklist, with their initial ticks
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Source of the feature checklist answer
pub trait MultipleChoicePrompter {
    /// Returns the indices of the chosen items, possibly none.
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig)
        -> Result<Vec<usize>>;
}
