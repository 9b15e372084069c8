//! Files embedded from `template/`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShapezModError};

/// One file of the project template
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Destination, relative to its target directory
    pub path: &'static str,
    pub contents: &'static str,
}

/// Files placed at the project root
pub const PROJECT_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "package.json",
        contents: include_str!("../../template/package.json"),
    },
    TemplateFile {
        path: ".gitignore",
        contents: include_str!("../../template/gitignore"),
    },
];

/// Files making up one mod package under `src/<id>/`
pub const MOD_FILES: &[TemplateFile] = &[
    TemplateFile {
        path: "mod.json",
        contents: include_str!("../../template/src/mod.json"),
    },
    TemplateFile {
        path: "js/main.js",
        contents: include_str!("../../template/src/js/main.js"),
    },
];

/// Files created and left alone by a copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub created: Vec<PathBuf>,
    /// Already present, not overwritten
    pub skipped: Vec<PathBuf>,
}

impl CopyReport {
    fn merge(&mut self, other: CopyReport) {
        self.created.extend(other.created);
        self.skipped.extend(other.skipped);
    }
}

/// Write `files` below `target`, never replacing an existing file
pub fn copy_files(files: &[TemplateFile], target: &Path) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    for file in files {
        let dest = target.join(file.path);
        if dest.exists() {
            debug!(path = %dest.display(), "keeping existing file");
            report.skipped.push(dest);
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| ShapezModError::write_failed(parent, e))?;
        }
        fs::write(&dest, file.contents).map_err(|e| ShapezModError::write_failed(&dest, e))?;
        report.created.push(dest);
    }

    Ok(report)
}

/// Copy the mod package into `mod_dir` and, when asked, the project files
/// into `project_root`
pub fn copy_template_files(
    project_root: &Path,
    mod_dir: &Path,
    include_project_files: bool,
) -> Result<CopyReport> {
    let mut report = copy_files(MOD_FILES, mod_dir)?;
    if include_project_files {
        report.merge(copy_files(PROJECT_FILES, project_root)?);
    }
    Ok(report)
}
