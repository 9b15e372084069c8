//! Project and mod package scaffolding
//!
//! `init` lays out a whole project, `mod` adds another package to an
//! existing one. Neither overwrites a file that is already there.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ShapezModError};
use crate::project::ProjectLayout;

pub mod manifest;
pub mod template;

pub use manifest::ModMetadata;
pub use template::{CopyReport, copy_template_files};

/// Create the project directory, refusing one that already exists
pub fn create_project_dir(target: &Path) -> Result<ProjectLayout> {
    if target.exists() {
        let name = target
            .file_name()
            .map_or_else(|| target.display().to_string(), |n| n.to_string_lossy().to_string());
        return Err(ShapezModError::ProjectExists { path: name });
    }

    fs::create_dir_all(target).map_err(|e| ShapezModError::write_failed(target, e))?;
    let root = dunce::canonicalize(target).unwrap_or_else(|_| target.to_path_buf());
    Ok(ProjectLayout::new(root))
}

/// Copy the mod package (and project files) for `metadata`
pub fn write_mod_package(
    layout: &ProjectLayout,
    metadata: &ModMetadata,
    include_project_files: bool,
) -> Result<CopyReport> {
    metadata.validate()?;
    let mod_dir = layout.mod_dir(&metadata.id);
    copy_template_files(layout.root(), &mod_dir, include_project_files)
}

/// Fill the manifest and entry script placeholders of a package
pub fn fill_mod_package(layout: &ProjectLayout, metadata: &ModMetadata) -> Result<()> {
    manifest::fill_file(&layout.mod_manifest(&metadata.id), metadata)?;

    let entry = layout.mod_dir(&metadata.id).join("js").join("main.js");
    if entry.is_file() {
        manifest::fill_file(&entry, metadata)?;
    }
    Ok(())
}

/// Initialise a git repository at the project root unless one exists
pub fn init_git(layout: &ProjectLayout) -> Result<bool> {
    if git2::Repository::open(layout.root()).is_ok() {
        debug!(path = %layout.root().display(), "git repository already present");
        return Ok(false);
    }

    git2::Repository::init(layout.root())?;
    Ok(true)
}
