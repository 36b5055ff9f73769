//! Installation stages run against the generated project.
//!
//! Each stage receives the project root through [`Installer`]; nothing
//! depends on the process working directory.

mod build;
mod features;
mod husky;
mod project;
mod typescript;

pub use build::build_command;
pub use husky::HookConfiguration;

use std::path::PathBuf;

use crate::{
    error::{Error, Result},
    feature::{Feature, FeatureSet},
    ioutils::write_file,
    report,
    toolchain::CommandRunner,
};

pub struct Installer<'a> {
    root: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Installer<'a> {
    pub fn new<P: Into<PathBuf>>(root: P, runner: &'a dyn CommandRunner) -> Self {
        Self { root: root.into(), runner }
    }

    /// Runs the installer of every selected feature, then the hook and build setup.
    pub fn install_features(&self, features: &FeatureSet) -> Result<()> {
        for feature in features.iter() {
            log::info!("Installing {feature}");
            self.install_feature(feature)?;
        }

        self.install_husky(&HookConfiguration::from_features(features))?;
        self.install_build(features)
    }

    pub fn install_feature(&self, feature: Feature) -> Result<()> {
        match feature {
            Feature::ESLint => self.install_eslint(),
            Feature::Prettier => self.install_prettier(),
            Feature::CZ => self.install_cz(),
        }
    }

    /// Writes a feature configuration file.
    ///
    /// An IO failure here is not fatal: the content is printed so the
    /// operator can create the file by hand, and installation continues.
    fn write_config_file(&self, file_name: &str, content: &str) -> Result<()> {
        match write_file(content, self.root.join(file_name)) {
            Ok(()) => Ok(()),
            Err(Error::IoError(e)) => {
                log::warn!("Failed to write {file_name}: {e}");
                report::config_write_failed(file_name, content);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
