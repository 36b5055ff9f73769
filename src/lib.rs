/// Handles argument parsing and the `create` pipeline.
pub mod cli;

/// Fixed names, packages and scripts.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Optional features offered to the user.
pub mod feature;

/// Installation stages run inside the generated project.
pub mod installer;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reading and writing the generated `package.json`.
pub mod package;

/// User input and interaction handling.
pub mod prompt;

/// Styled messages for the operator.
pub mod report;

/// Literal configuration file templates.
pub mod templates;

/// External command execution.
pub mod toolchain;
