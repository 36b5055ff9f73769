//! User-facing terminal output.
//!
//! Diagnostics go through `log`; everything here is meant for the operator
//! and is printed regardless of verbosity.

use console::{style, Term};

/// Clears the screen and prints the tool banner.
pub fn banner(version: &str) {
    if let Err(e) = Term::stdout().clear_screen() {
        log::debug!("Could not clear the terminal: {e}");
    }
    println!("{}", style(format!("TS CLI v{version}")).blue());
    println!("Start initializing the project:");
    println!();
}

/// Tells the operator how to create a configuration file that could not be written.
pub fn config_write_failed(file_name: &str, content: &str) {
    println!("{}", style(format!("Failed to write {file_name} file content")).red());
    println!("{}", style(format!("Please add the following content in {file_name}")).red());
    println!("{}", style(content).red());
}

/// Final message with the next commands to run.
pub fn completed(project_name: &str) {
    println!("Successfully created project {}", style(project_name).yellow());
    println!("Get started with the following commands:");
    println!();
    println!("{} {}", style("$").dim(), style(format!("cd {project_name}")).cyan());
    println!("{} {}", style("$").dim(), style("npm run dev").cyan());
    println!();
}
