//! prettier, run from the host build

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{FormatOptions, PackageManager};
use crate::error::{Result, ShapezModError};

use super::Formatter;

#[allow(clippy::expect_used)]
static ERROR_POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+):\d+\)").expect("valid regex"));

/// Pipes declarations through `prettier --parser typescript`
#[derive(Debug, Clone)]
pub struct PrettierFormatter {
    program: String,
    leading_args: Vec<String>,
    cwd: PathBuf,
}

impl PrettierFormatter {
    pub fn new(package_manager: PackageManager, cwd: &Path) -> Self {
        let (program, leading_args) = package_manager.exec("prettier");
        Self {
            program: program.to_string(),
            leading_args,
            cwd: cwd.to_path_buf(),
        }
    }

    /// prettier command-line flags for `options`
    pub fn cli_args(options: &FormatOptions) -> Vec<String> {
        let mut args = vec![
            "--parser".to_string(),
            "typescript".to_string(),
            "--trailing-comma".to_string(),
            options.trailing_comma.to_string(),
            "--tab-width".to_string(),
            options.tab_width.to_string(),
            "--print-width".to_string(),
            options.print_width.to_string(),
            "--end-of-line".to_string(),
            "auto".to_string(),
        ];

        if options.use_tabs {
            args.push("--use-tabs".to_string());
        }
        if options.single_quote {
            args.push("--single-quote".to_string());
        }
        if !options.semi {
            args.push("--no-semi".to_string());
        }
        if !options.bracket_spacing {
            args.push("--no-bracket-spacing".to_string());
        }
        if options.arrow_parens_avoid {
            args.extend(["--arrow-parens".to_string(), "avoid".to_string()]);
        }
        if options.quote_props_consistent {
            args.extend(["--quote-props".to_string(), "consistent".to_string()]);
        }

        args
    }

    fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.leading_args.iter().cloned());
        parts.join(" ")
    }
}

impl Formatter for PrettierFormatter {
    fn name(&self) -> &str {
        "prettier"
    }

    fn format(&self, text: &str, options: &FormatOptions) -> Result<String> {
        debug!(command = %self.command_line(), cwd = %self.cwd.display(), "running formatter");

        let mut child = Command::new(&self.program)
            .args(&self.leading_args)
            .args(Self::cli_args(options))
            .current_dir(&self.cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ShapezModError::FormatterUnavailable {
                program: self.command_line(),
                reason: e.to_string(),
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ShapezModError::FormatterUnavailable {
                program: self.command_line(),
                reason: "stdin not available".to_string(),
            })?;
        let input = text.to_string();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        writer
            .join()
            .map_err(|_| ShapezModError::IoError {
                message: "formatter input thread panicked".to_string(),
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(rejection_from_stderr(&stderr));
        }

        String::from_utf8(output.stdout).map_err(|e| ShapezModError::IoError {
            message: e.to_string(),
        })
    }
}

/// Turn prettier's error output into a `FormatRejected`
fn rejection_from_stderr(stderr: &str) -> ShapezModError {
    let message = stderr
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("formatter exited with an error")
        .to_string();

    let line = ERROR_POSITION
        .captures(&message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    ShapezModError::FormatRejected { line, message }
}
