use serde_json::{json, Map, Value};

use super::Installer;
use crate::{
    constants::{hooks, packages, scripts, LINT_STAGED_GLOB},
    error::Result,
    feature::{Feature, FeatureSet},
    package::PackageDescriptor,
    toolchain::{git_init, npm_install_dev},
};

/// Git hooks and staged-file commands derived from the selected features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookConfiguration {
    /// Hooks added on top of the default `pre-commit: lint-staged`.
    pub hooks: Vec<(&'static str, &'static str)>,
    /// Script names lint-staged runs, in enumeration order.
    pub lint_staged_commands: Vec<&'static str>,
}

impl HookConfiguration {
    pub fn from_features(features: &FeatureSet) -> Self {
        let mut config = Self::default();

        if features.contains(Feature::CZ) {
            config.hooks.push((hooks::COMMIT_MSG, hooks::COMMIT_MSG_COMMAND));
        }
        if features.contains(Feature::ESLint) {
            config.lint_staged_commands.push(scripts::ESLINT);
        }
        if features.contains(Feature::Prettier) {
            config.lint_staged_commands.push(scripts::PRETTIER);
        }

        config
    }

    /// Value of the `husky` key.
    pub fn husky(&self) -> Value {
        let mut hook_map = Map::new();
        hook_map.insert(hooks::PRE_COMMIT.to_string(), json!(hooks::PRE_COMMIT_COMMAND));
        for (name, command) in &self.hooks {
            hook_map.insert(name.to_string(), json!(command));
        }
        json!({ "hooks": hook_map })
    }

    /// Value of the `lint-staged` key.
    pub fn lint_staged(&self) -> Value {
        let commands: Vec<String> = self
            .lint_staged_commands
            .iter()
            .map(|script| format!("npm run {script}"))
            .collect();
        json!({ LINT_STAGED_GLOB: commands })
    }
}

impl Installer<'_> {
    /// Initializes git, installs husky and lint-staged and writes their configuration.
    pub fn install_husky(&self, config: &HookConfiguration) -> Result<()> {
        log::info!("Installing git hooks");
        git_init(&self.root)?;
        npm_install_dev(self.runner, &self.root, packages::HUSKY)?;

        PackageDescriptor::update(&self.root, |pkg| {
            pkg.set("husky", config.husky());
            pkg.set("lint-staged", config.lint_staged());
            Ok(())
        })
    }
}
