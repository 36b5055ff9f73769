use crate::constants::{exit_codes, verbosity};
use crate::feature::Feature;
use clap::{error::ErrorKind, ArgAction, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for goo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create new project from => goo create yourProjectName
    Create(CreateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project directory to create.
    #[arg(value_name = "APP_NAME")]
    pub name: String,

    /// Features to install without prompting (comma-separated).
    #[arg(long, value_delimiter = ',', value_enum, conflicts_with = "no_features")]
    pub features: Vec<Feature>,

    /// Install no optional features and skip the prompt.
    #[arg(long = "no-features")]
    pub no_features: bool,

    /// Increase logging verbosity (`--verbose`, `--verbose --verbose`, ...).
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CreateArgs {
    /// Whether the feature selection was fully given on the command line.
    pub fn is_non_interactive(&self) -> bool {
        self.no_features || !self.features.is_empty()
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingSubcommand
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `--verbose` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
