//! Feature selection
//!
//! Presents the fixed list of optional features and turns the chosen
//! indices back into a [`FeatureSet`].

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

use crate::{
    error::Result,
    feature::{Feature, FeatureSet},
};
use interface::{MultipleChoiceConfig, MultipleChoicePrompter};

pub const FEATURE_PROMPT: &str = "Check the features needed for your project";

/// Asks which optional features to install.
pub fn select_features(prompter: &dyn MultipleChoicePrompter) -> Result<FeatureSet> {
    let config = MultipleChoiceConfig {
        prompt: FEATURE_PROMPT.to_string(),
        choices: Feature::ALL.iter().map(|feature| feature.label().to_string()).collect(),
        defaults: vec![false; Feature::ALL.len()],
    };

    let indices = prompter.prompt_multiple_choice(&config)?;

    Ok(indices.into_iter().filter_map(|index| Feature::ALL.get(index).copied()).collect())
}
