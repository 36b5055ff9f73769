use super::Installer;
use crate::{error::Result, ioutils::create_dir, package::PackageDescriptor, toolchain::npm_init};

impl Installer<'_> {
    /// Creates the project directory and bootstraps `package.json` in it.
    ///
    /// Nothing is rolled back if `npm init` fails after the directory exists.
    pub fn init_project_dir(&self) -> Result<()> {
        log::info!("Creating {}", self.root.display());
        create_dir(&self.root)?;
        npm_init(self.runner, &self.root)
    }

    /// Sets `name` and `description` in `package.json` to the project name.
    pub fn change_package_info(&self, project_name: &str) -> Result<()> {
        PackageDescriptor::update(&self.root, |pkg| {
            pkg.set_name_and_description(project_name);
            Ok(())
        })
    }
}
