use crate::{
    cli::CreateArgs,
    error::{Error, Result},
    feature::FeatureSet,
    installer::Installer,
    ioutils::ensure_absent,
    prompt::{
        automatic_impl::AutomaticPrompter, dialoguer::DialoguerPrompter,
        interface::MultipleChoicePrompter, select_features,
    },
    report,
    toolchain::{CommandRunner, SystemCommandRunner},
};
use std::path::{Component, Path, PathBuf};

/// Runs the `create` pipeline from the existence check to the final message.
pub struct Runner<'a> {
    base_dir: PathBuf,
    project_name: String,
    command_runner: &'a dyn CommandRunner,
    prompter: &'a dyn MultipleChoicePrompter,
    show_banner: bool,
}

impl<'a> Runner<'a> {
    pub fn new<P: Into<PathBuf>>(
        base_dir: P,
        project_name: &str,
        command_runner: &'a dyn CommandRunner,
        prompter: &'a dyn MultipleChoicePrompter,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            project_name: project_name.to_string(),
            command_runner,
            prompter,
            show_banner: true,
        }
    }

    /// Whether to clear the screen and print the banner before selection.
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn shows_banner(&self) -> bool {
        self.show_banner
    }

    pub fn project_root(&self) -> PathBuf {
        self.base_dir.join(&self.project_name)
    }

    /// Executes every stage in order; the first error aborts the run.
    pub fn run(&self) -> Result<()> {
        validate_project_name(&self.project_name)?;
        let project_root = ensure_absent(self.project_root())?;

        let features = self.select_features()?;
        log::info!("Selected features: {features}");

        let installer = Installer::new(&project_root, self.command_runner);
        installer.init_project_dir()?;
        installer.change_package_info(&self.project_name)?;
        installer.install_typescript()?;
        installer.install_types_node()?;
        installer.install_dev_environment()?;
        installer.install_features(&features)?;

        report::completed(&self.project_name);
        Ok(())
    }

    fn select_features(&self) -> Result<FeatureSet> {
        if self.show_banner {
            report::banner(env!("CARGO_PKG_VERSION"));
        }
        select_features(self.prompter)
    }
}

/// Accepts a single, normal path component such as `my-app`.
fn validate_project_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::InvalidProjectName(name.to_string())),
    }
}

/// Main entry point for `goo create`
pub fn run(args: CreateArgs) -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let command_runner = SystemCommandRunner::new();

    let prompter: Box<dyn MultipleChoicePrompter> = if args.is_non_interactive() {
        let indices = crate::feature::Feature::ALL
            .iter()
            .enumerate()
            .filter(|(_, feature)| args.features.contains(feature))
            .map(|(index, _)| index)
            .collect();
        Box::new(AutomaticPrompter::new().with_default_multiple_choice(indices))
    } else {
        Box::new(DialoguerPrompter::new())
    };

    Runner::new(base_dir, &args.name, &command_runner, prompter.as_ref())
        .with_banner(!args.is_non_interactive())
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_on_unless_disabled() {
        let toolchain = SystemCommandRunner::new();
        let prompter = AutomaticPrompter::new();
        let runner = Runner::new("/tmp", "demo", &toolchain, &prompter);
        assert!(runner.shows_banner());
        assert!(!runner.with_banner(false).shows_banner());
    }

    #[test]
    fn accepts_plain_names() {
        assert!(validate_project_name("my-app").is_ok());
        assert!(validate_project_name("app_2").is_ok());
    }

    #[test]
    fn rejects_paths_and_empty_names() {
        for name in ["", ".", "..", "a/b", "/abs"] {
            assert!(
                matches!(validate_project_name(name), Err(Error::InvalidProjectName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
