//! Mod command implementation
//!
//! Adds a mod package to an existing project and refreshes its typings.

use std::path::PathBuf;

use crate::cli::ModArgs;
use crate::commands::helpers::{print_done, print_typings_summary, update_typings_if_possible};
use crate::config::ProjectOptions;
use crate::error::Result;
use crate::format::formatter_for;
use crate::progress::step;
use crate::project::ProjectLayout;
use crate::scaffold::{self, ModMetadata};

/// Run mod command
pub fn run(project: Option<PathBuf>, args: ModArgs) -> Result<()> {
    let layout = ProjectLayout::resolve(project)?;
    let ModArgs {
        metadata,
        formatter: kind,
    } = args;
    let metadata: ModMetadata = metadata.into();
    metadata.validate()?;

    let options = ProjectOptions::load(layout.root())?;
    let formatter = formatter_for(kind, &layout.host_dir(), options.package_manager());

    step("Copy new project files", || {
        scaffold::write_mod_package(&layout, &metadata, false)
    })?;
    step("Updating project files", || {
        scaffold::fill_mod_package(&layout, &metadata)
    })?;

    if let Some(outcome) = update_typings_if_possible(&layout, formatter.as_ref())? {
        print_typings_summary(&outcome);
    }

    step("Saving options", || options.save(layout.root()))?;

    print_done("Mod ready");
    Ok(())
}
