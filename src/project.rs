//! Fixed paths inside a mod project

use std::path::{Path, PathBuf};

use crate::config::{
    FIXED_TYPES_FILE, FORMATTED_TYPES_FILE, HOST_DIR_NAME, MOD_MANIFEST_FILE, RAW_TYPES_FILE,
};
use crate::error::{Result, ShapezModError};

/// Layout of a mod project rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the project root from an optional `--project` value
    ///
    /// Falls back to the current directory. The directory must exist.
    pub fn resolve(project: Option<PathBuf>) -> Result<Self> {
        let root = match project {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        if !root.is_dir() {
            return Err(ShapezModError::ProjectNotFound {
                path: root.display().to_string(),
            });
        }

        let root = dunce::canonicalize(&root).unwrap_or(root);
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `src/`, holding one directory per mod package
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn mod_dir(&self, mod_id: &str) -> PathBuf {
        self.src_dir().join(mod_id)
    }

    pub fn mod_manifest(&self, mod_id: &str) -> PathBuf {
        self.mod_dir(mod_id).join(MOD_MANIFEST_FILE)
    }

    /// Checkout of the host game build
    pub fn host_dir(&self) -> PathBuf {
        self.root.join(HOST_DIR_NAME)
    }

    pub fn has_host(&self) -> bool {
        self.host_dir().is_dir()
    }

    pub fn raw_types(&self) -> PathBuf {
        self.host_dir().join(RAW_TYPES_FILE)
    }

    pub fn fixed_types(&self) -> PathBuf {
        self.host_dir().join(FIXED_TYPES_FILE)
    }

    pub fn formatted_types(&self) -> PathBuf {
        self.host_dir().join(FORMATTED_TYPES_FILE)
    }

    /// Fail unless the host build is present
    pub fn require_host(&self) -> Result<PathBuf> {
        let host = self.host_dir();
        if host.is_dir() {
            Ok(host)
        } else {
            Err(ShapezModError::HostNotFound {
                path: host.display().to_string(),
            })
        }
    }
}
