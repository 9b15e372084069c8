//! Patch-host command implementation

use std::path::PathBuf;

use console::style;

use crate::commands::helpers::{command, print_done, print_info};
use crate::config::DEV_SERVER_MOD_URL;
use crate::error::Result;
use crate::host;
use crate::progress::step;
use crate::project::ProjectLayout;

/// Run patch-host command
pub fn run(project: Option<PathBuf>) -> Result<()> {
    let layout = ProjectLayout::resolve(project)?;
    let host_dir = layout.require_host()?;

    let patched = step("Patching shapez.io build", || host::patch_host(&host_dir))?;
    for path in &patched {
        let shown = path.strip_prefix(layout.root()).unwrap_or(path);
        println!("  {}", style(shown.display()).dim());
    }

    print_done("Host build patched");
    print_info(&format!(
        "The host now loads mods from {}; start it with {}",
        DEV_SERVER_MOD_URL,
        command("yarn dev")
    ));
    Ok(())
}
