use super::Installer;
use crate::{
    constants::{packages, scripts, ENTRY_POINT, SOURCE_DIR, TSCONFIG_JSON},
    error::Result,
    ioutils::{create_dir_all, touch, write_json},
    package::PackageDescriptor,
    templates,
    toolchain::{npm_install_dev, npx},
};

impl Installer<'_> {
    /// Installs TypeScript and replaces the generated `tsconfig.json` with ours.
    pub fn install_typescript(&self) -> Result<()> {
        log::info!("Installing TypeScript");
        npm_install_dev(self.runner, &self.root, packages::TYPESCRIPT)?;
        npx(self.runner, &self.root, &["tsc", "--init"])?;

        write_json(self.root.join(TSCONFIG_JSON), &templates::tsconfig())?;

        create_dir_all(self.root.join(SOURCE_DIR))?;
        touch(self.root.join(ENTRY_POINT))
    }

    /// Installs the Node.js type declarations.
    pub fn install_types_node(&self) -> Result<()> {
        log::info!("Installing Node.js type declarations");
        npm_install_dev(self.runner, &self.root, packages::TYPES_NODE)
    }

    /// Installs `ts-node-dev` and registers the `dev` script.
    pub fn install_dev_environment(&self) -> Result<()> {
        log::info!("Installing development environment");
        npm_install_dev(self.runner, &self.root, packages::DEV_LOOP)?;

        PackageDescriptor::update(&self.root, |pkg| {
            pkg.add_script_with_comment(scripts::DEV, scripts::DEV_COMMENT, scripts::DEV_COMMAND)
        })
    }
}
