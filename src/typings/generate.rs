//! Raw declaration emit through the host's TypeScript compiler

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::config::PackageManager;
use crate::error::{Result, ShapezModError};
use crate::project::ProjectLayout;

/// Arguments passed to `tsc`, relative to the host directory
pub const TSC_ARGS: [&str; 7] = [
    "src/js/application.js",
    "--declaration",
    "--allowJs",
    "--emitDeclarationOnly",
    "--skipLibCheck",
    "--out",
    "types_raw.js",
];

/// Program and full argument list for the compiler run
pub fn tsc_command(package_manager: PackageManager) -> (&'static str, Vec<String>) {
    let (program, mut args) = package_manager.exec("tsc");
    args.extend(TSC_ARGS.iter().map(|a| (*a).to_string()));
    (program, args)
}

/// Emit `types_raw.d.ts` in the host build
pub fn generate_raw_types(layout: &ProjectLayout, package_manager: PackageManager) -> Result<PathBuf> {
    let host_dir = layout.require_host()?;
    let (program, args) = tsc_command(package_manager);
    let command_line = format!("{program} {}", args.join(" "));
    debug!(command = %command_line, cwd = %host_dir.display(), "generating raw declarations");

    let output = Command::new(program)
        .args(&args)
        .current_dir(&host_dir)
        .output()
        .map_err(|e| ShapezModError::CommandFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let reason = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        return Err(ShapezModError::CommandFailed {
            command: command_line,
            reason,
        });
    }

    Ok(layout.raw_types())
}
