//! Fan-out of the final declarations to mod directories
//!
//! Every direct child of `src/` that is not itself a mod root (has no
//! `mod.json`) gets its own copy at `js/types.d.ts`, so each package can
//! resolve its type references on its own. Directories are enumerated fresh
//! on every run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::MOD_MANIFEST_FILE;
use crate::error::{Result, ShapezModError};
use crate::hash;

/// Name of the per-directory declaration copy
pub const TYPES_FILE: &str = "types.d.ts";

/// A directory under `src/` receiving a copy of the declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDirectory {
    path: PathBuf,
}

impl ModDirectory {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the declaration copy is written
    pub fn types_path(&self) -> PathBuf {
        self.path.join("js").join(TYPES_FILE)
    }
}

/// Result of a fan-out run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanOut {
    pub written: Vec<PathBuf>,
    /// Copies whose content already matched
    pub unchanged: Vec<PathBuf>,
}

/// List the directories under `src_dir` lacking a mod manifest, sorted by path
pub fn enumerate_mod_directories(src_dir: &Path) -> Result<Vec<ModDirectory>> {
    if !src_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(src_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ShapezModError::read_failed(src_dir, e))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.path().join(MOD_MANIFEST_FILE).exists() {
            debug!(dir = %entry.path().display(), "skipping mod root");
            continue;
        }
        dirs.push(ModDirectory {
            path: entry.path().to_path_buf(),
        });
    }

    dirs.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(dirs)
}

/// Write `text` to every directory, skipping copies already up to date
pub fn fan_out(text: &str, dirs: &[ModDirectory]) -> Result<FanOut> {
    let digest = hash::hash_bytes(text.as_bytes());
    let mut result = FanOut::default();

    for dir in dirs {
        let target = dir.types_path();

        if hash::matches_digest(&target, &digest) {
            debug!(dir = %dir.path().display(), "declarations up to date");
            result.unchanged.push(target);
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ShapezModError::write_failed(parent, e))?;
        }
        fs::write(&target, text).map_err(|e| ShapezModError::write_failed(&target, e))?;
        debug!(path = %target.display(), "wrote declarations");
        result.written.push(target);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_src(dirs_without: &[&str], dirs_with: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        for name in dirs_without {
            fs::create_dir_all(src.join(name)).unwrap();
        }
        for name in dirs_with {
            fs::create_dir_all(src.join(name)).unwrap();
            fs::write(src.join(name).join(MOD_MANIFEST_FILE), "{}").unwrap();
        }
        fs::write(src.join("README.md"), "not a directory").unwrap();
        temp
    }

    #[test]
    fn test_enumerate_skips_manifest_dirs_and_files() {
        let temp = make_src(&["shared", "common"], &["flipper"]);
        let dirs = enumerate_mod_directories(&temp.path().join("src")).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.path().file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["common".to_string(), "shared".to_string()]);
    }

    #[test]
    fn test_enumerate_missing_src() {
        let temp = TempDir::new().unwrap();
        let dirs = enumerate_mod_directories(&temp.path().join("src")).unwrap();
        assert!(dirs.is_empty());
    }

    #[test]
    fn test_fan_out_writes_one_copy_per_directory() {
        let temp = make_src(&["a", "b", "c"], &["m1", "m2"]);
        let src = temp.path().join("src");
        let dirs = enumerate_mod_directories(&src).unwrap();

        let result = fan_out("declare const shapez: any;\n", &dirs).unwrap();
        assert_eq!(result.written.len(), 3);
        assert!(result.unchanged.is_empty());

        for name in ["a", "b", "c"] {
            let copy = src.join(name).join("js").join(TYPES_FILE);
            assert_eq!(
                fs::read_to_string(copy).unwrap(),
                "declare const shapez: any;\n"
            );
        }
        for name in ["m1", "m2"] {
            assert!(!src.join(name).join("js").join(TYPES_FILE).exists());
        }
    }

    #[test]
    fn test_fan_out_skips_identical_copies() {
        let temp = make_src(&["a", "b"], &[]);
        let dirs = enumerate_mod_directories(&temp.path().join("src")).unwrap();

        fan_out("x", &dirs).unwrap();
        let again = fan_out("x", &dirs).unwrap();
        assert!(again.written.is_empty());
        assert_eq!(again.unchanged.len(), 2);

        let changed = fan_out("y", &dirs).unwrap();
        assert_eq!(changed.written.len(), 2);
        assert!(changed.unchanged.is_empty());
    }
}
