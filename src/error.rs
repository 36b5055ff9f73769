use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to initialize repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("{path} already exists.")]
    ProjectExistsError { path: String },

    #[error("Invalid project name '{0}': expected a single directory name.")]
    InvalidProjectName(String),

    /// When the external command has executed but finished with an error.
    #[error("Command `{command}` failed with status: {status}")]
    CommandError { command: String, status: ExitStatus },

    #[error("Cannot run `{command}`. Original error: {e}")]
    CommandSpawnError { command: String, e: std::io::Error },

    #[error("Invalid package.json: {0}.")]
    PackageDescriptorError(String),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", console::style(&err).red());
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_exists_message_names_the_path() {
        let err = Error::ProjectExistsError { path: "/tmp/demo".to_string() };
        assert_eq!(err.to_string(), "/tmp/demo already exists.");
    }

    #[test]
    fn io_errors_convert_through_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::IoError(_))));
    }
}
