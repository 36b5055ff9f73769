//! External package-manager and version-control invocations.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::{
    constants::package_manager::{NPM, NPX},
    error::{Error, Result},
};

/// Runs an external program to completion inside a given directory.
pub trait CommandRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<()>;
}

/// Spawns real processes, inheriting the terminal so installer output stays visible.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
        let command = display_command(program, args);
        log::debug!("Running `{command}` in {}", cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandSpawnError { command: command.clone(), e })?;

        if !status.success() {
            return Err(Error::CommandError { command, status });
        }
        Ok(())
    }
}

pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// `npm init -y`
pub fn npm_init(runner: &dyn CommandRunner, cwd: &Path) -> Result<()> {
    runner.run(cwd, NPM, &["init", "-y"])
}

/// `npm i <packages> -D`
pub fn npm_install_dev(
    runner: &dyn CommandRunner,
    cwd: &Path,
    packages: &[&str],
) -> Result<()> {
    let mut args = vec!["i"];
    args.extend_from_slice(packages);
    args.push("-D");
    runner.run(cwd, NPM, &args)
}

/// `npx <args>`
pub fn npx(runner: &dyn CommandRunner, cwd: &Path, args: &[&str]) -> Result<()> {
    runner.run(cwd, NPX, args)
}

/// Creates an empty git repository at `cwd`.
pub fn git_init(cwd: &Path) -> Result<()> {
    log::debug!("Initializing git repository in {}", cwd.display());
    git2::Repository::init(cwd)?;
    Ok(())
}
