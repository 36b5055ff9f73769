use super::Installer;
use crate::{
    constants::scripts,
    error::Result,
    feature::{Feature, FeatureSet},
    package::PackageDescriptor,
};

/// The `build` script: lint and format first when selected, then compile.
pub fn build_command(features: &FeatureSet) -> String {
    let mut steps = Vec::new();
    if features.contains(Feature::ESLint) {
        steps.push(format!("npm run {}", scripts::ESLINT));
    }
    if features.contains(Feature::Prettier) {
        steps.push(format!("npm run {}", scripts::PRETTIER));
    }
    steps.push(scripts::BUILD_TAIL.to_string());
    steps.join(" && ")
}

impl Installer<'_> {
    pub fn install_build(&self, features: &FeatureSet) -> Result<()> {
        let command = build_command(features);
        PackageDescriptor::update(&self.root, |pkg| {
            pkg.add_script_with_comment(scripts::BUILD, scripts::BUILD_COMMENT, &command)
        })
    }
}
