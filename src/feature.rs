use clap::ValueEnum;
use std::collections::BTreeSet;
use std::fmt::Display;

/// Optional tooling the user can add to the generated project.
///
/// Variant order is the order in which features are installed and in which
/// their commands appear in the `build` script and the lint-staged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Feature {
    /// ESLint with the TypeScript parser and plugin.
    ESLint,
    /// Prettier code formatter.
    Prettier,
    /// Commitizen prompt plus commitlint.
    CZ,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::ESLint, Feature::Prettier, Feature::CZ];

    /// Label shown in the selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ESLint => "ESLint",
            Feature::Prettier => "Prettier",
            Feature::CZ => "CZ",
        }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The subset of [`Feature`]s chosen for a project.
///
/// Only membership matters; iteration always follows enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet(BTreeSet<Feature>);

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for FeatureSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.iter().map(|feature| feature.label()).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}
