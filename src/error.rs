//! Error types and handling for shapez-mod
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shapez-mod operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShapezModError {
    // Project errors
    #[error("A folder with the name '{path}' already exists")]
    #[diagnostic(
        code(shapez_mod::project::exists),
        help("Choose another directory name or remove the existing folder")
    )]
    ProjectExists { path: String },

    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(shapez_mod::project::not_found),
        help("Run 'shapez-mod init' first or pass --project <DIR>")
    )]
    ProjectNotFound { path: String },

    #[error("Invalid mod id '{id}': {reason}")]
    #[diagnostic(
        code(shapez_mod::project::invalid_mod_id),
        help("Mod ids may contain ASCII letters, digits, '-' and '_'")
    )]
    InvalidModId { id: String, reason: String },

    // Host errors
    #[error("shapez.io build not found at: {path}")]
    #[diagnostic(
        code(shapez_mod::host::not_found),
        help("Check out the shapez.io modloader build into the 'shapez' folder of the project")
    )]
    HostNotFound { path: String },

    // Typings errors
    #[error("Raw declarations not found: {path}")]
    #[diagnostic(
        code(shapez_mod::typings::input_missing),
        help("Run 'shapez-mod typings --generate' to emit them with the host's TypeScript compiler")
    )]
    TypingsInputMissing { path: String },

    #[error("Command '{command}' failed: {reason}")]
    #[diagnostic(code(shapez_mod::typings::command_failed))]
    CommandFailed { command: String, reason: String },

    #[error("Formatter rejected the declarations at line {line}: {message}")]
    #[diagnostic(
        code(shapez_mod::format::rejected),
        help("A rewrite pass produced text that does not parse; inspect types_fixed.d.ts")
    )]
    FormatRejected { line: usize, message: String },

    #[error("Formatter '{program}' could not be run: {reason}")]
    #[diagnostic(
        code(shapez_mod::format::unavailable),
        help("Install prettier in the host build or use '--formatter builtin'")
    )]
    FormatterUnavailable { program: String, reason: String },

    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(shapez_mod::git::operation_failed))]
    GitOperationFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(shapez_mod::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(shapez_mod::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(shapez_mod::config::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(shapez_mod::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(shapez_mod::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(shapez_mod::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shapez_mod::fs::io_error))]
    IoError { message: String },
}

impl ShapezModError {
    /// Build a `FileReadFailed` from a path and the underlying error
    pub fn read_failed(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::FileReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Build a `FileWriteFailed` from a path and the underlying error
    pub fn write_failed(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Self::FileWriteFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ShapezModError {
    fn from(err: std::io::Error) -> Self {
        ShapezModError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShapezModError {
    fn from(err: serde_json::Error) -> Self {
        ShapezModError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for ShapezModError {
    fn from(err: git2::Error) -> Self {
        ShapezModError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShapezModError>;
