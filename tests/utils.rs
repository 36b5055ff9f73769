use goo::cli::Runner;
use goo::error::{Error, Result};
use goo::prompt::automatic_impl::AutomaticPrompter;
use goo::prompt::FEATURE_PROMPT;
use goo::toolchain::{display_command, CommandRunner};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Stands in for npm/npx: records every command and simulates the files
/// `npm init -y` and `tsc --init` would produce.
#[derive(Default)]
pub struct FakeToolchain {
    pub commands: RefCell<Vec<String>>,
    /// Command (without the program name) that should exit with status 1.
    pub fail_on: Option<&'static str>,
    /// Command (without the program name) that cannot be started at all.
    pub unspawnable: Option<&'static str>,
    /// File name turned into a directory right after `npm init`, so writing it fails.
    pub block_file: Option<&'static str>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, command: &'static str) -> Self {
        self.fail_on = Some(command);
        self
    }

    pub fn unspawnable(mut self, command: &'static str) -> Self {
        self.unspawnable = Some(command);
        self
    }

    pub fn blocking(mut self, file_name: &'static str) -> Self {
        self.block_file = Some(file_name);
        self
    }

    /// Recorded commands with the program name stripped (`npm.cmd` on Windows).
    pub fn recorded(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|c| c.split_once(' ').map(|(_, rest)| rest.to_string()).unwrap_or_default())
            .collect()
    }
}

impl CommandRunner for FakeToolchain {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<()> {
        let command = display_command(program, args);
        self.commands.borrow_mut().push(command.clone());

        let joined = args.join(" ");
        if self.unspawnable == Some(joined.as_str()) {
            return Err(Error::CommandSpawnError {
                command,
                e: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }
        if self.fail_on == Some(joined.as_str()) {
            return Err(Error::CommandError { command, status: exit_status(1) });
        }

        match joined.as_str() {
            "init -y" => {
                let name = cwd.file_name().unwrap().to_string_lossy().to_string();
                let descriptor = json!({
                    "name": name,
                    "version": "1.0.0",
                    "description": "",
                    "main": "index.js",
                    "scripts": {
                        "test": "echo \"Error: no test specified\" && exit 1"
                    },
                    "keywords": [],
                    "author": "",
                    "license": "ISC"
                });
                std::fs::write(
                    cwd.join("package.json"),
                    serde_json::to_string_pretty(&descriptor).unwrap(),
                )?;
                if let Some(file_name) = self.block_file {
                    std::fs::create_dir(cwd.join(file_name))?;
                }
            }
            "tsc --init" => {
                std::fs::write(
                    cwd.join("tsconfig.json"),
                    r#"{"compilerOptions": {"target": "es2016", "strict": true}}"#,
                )?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Runs the whole pipeline in a fresh temporary directory with the given
/// prompt answer (indices into the feature list).
pub fn run_pipeline(
    toolchain: &FakeToolchain,
    answer: Vec<usize>,
) -> (tempfile::TempDir, PathBuf, Result<()>) {
    let tmp = tempfile::tempdir().unwrap();
    let prompter = AutomaticPrompter::new().with_multiple_choice_response(FEATURE_PROMPT, answer);
    let runner = Runner::new(tmp.path(), "demo", toolchain, &prompter).with_banner(false);
    let root = runner.project_root();
    let result = runner.run();
    (tmp, root, result)
}

pub fn read_package(root: &Path) -> Value {
    let buf = std::fs::read_to_string(root.join("package.json")).unwrap();
    serde_json::from_str(&buf).unwrap()
}
