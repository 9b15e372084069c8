//! Init command implementation
//!
//! Creates a project directory with the project files and one mod package.

use std::path::PathBuf;

use crate::cli::InitArgs;
use crate::commands::helpers::{command, print_done, print_info};
use crate::config::{DEFAULT_PROJECT_DIR, ProjectOptions};
use crate::error::Result;
use crate::progress::step;
use crate::scaffold::{self, ModMetadata};

/// Run init command
pub fn run(args: InitArgs) -> Result<()> {
    let metadata: ModMetadata = args.metadata.into();
    metadata.validate()?;

    let target = args
        .dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_DIR));
    let layout = scaffold::create_project_dir(&target)?;

    step("Copy project files", || {
        scaffold::write_mod_package(&layout, &metadata, true)
    })?;
    step("Updating project files", || {
        scaffold::fill_mod_package(&layout, &metadata)
    })?;

    if args.git {
        step("Initialize git repository", || scaffold::init_git(&layout))?;
    }

    let package_manager = args.package_manager.unwrap_or_default();
    step("Saving options", || {
        let mut options = ProjectOptions::load(layout.root())?;
        options.package_manager = Some(package_manager);
        options.save(layout.root())
    })?;

    print_done("Project ready");
    print_info(&format!(
        "Check out the shapez.io build into {}, then run {} and {}",
        layout.host_dir().display(),
        command("shapez-mod patch-host"),
        command("shapez-mod typings --generate")
    ));
    print_info(&format!(
        "Afterwards {} refreshes the typings",
        command(&package_manager.run_script("typings"))
    ));

    Ok(())
}
