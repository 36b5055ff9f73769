use super::Installer;
use crate::{
    constants::{config_files, packages, scripts},
    error::Result,
    package::PackageDescriptor,
    templates,
    toolchain::{npm_install_dev, npx},
};

impl Installer<'_> {
    pub fn install_eslint(&self) -> Result<()> {
        npm_install_dev(self.runner, &self.root, packages::ESLINT)?;
        self.write_config_file(config_files::ESLINT, templates::ESLINTRC)?;

        PackageDescriptor::update(&self.root, |pkg| {
            pkg.add_script_with_comment(
                scripts::ESLINT,
                scripts::ESLINT_COMMENT,
                scripts::ESLINT_COMMAND,
            )
        })
    }

    pub fn install_prettier(&self) -> Result<()> {
        npm_install_dev(self.runner, &self.root, packages::PRETTIER)?;
        self.write_config_file(config_files::PRETTIER, templates::PRETTIERRC)?;

        PackageDescriptor::update(&self.root, |pkg| {
            pkg.add_script_with_comment(
                scripts::PRETTIER,
                scripts::PRETTIER_COMMENT,
                scripts::PRETTIER_COMMAND,
            )
        })
    }

    /// Commitizen for writing commit messages, commitlint for checking them.
    pub fn install_cz(&self) -> Result<()> {
        npx(
            self.runner,
            &self.root,
            &["commitizen", "init", "cz-conventional-changelog", "--save", "--save-exact"],
        )?;
        npm_install_dev(self.runner, &self.root, packages::COMMITLINT)?;
        self.write_config_file(config_files::COMMITLINT, templates::COMMITLINT_CONFIG)?;

        PackageDescriptor::update(&self.root, |pkg| {
            pkg.add_script_with_comment(
                scripts::COMMIT,
                scripts::COMMIT_COMMENT,
                scripts::COMMIT_COMMAND,
            )
        })
    }
}
