//! Project configuration
//!
//! Fixed names used throughout a mod project, the `.shapez` options file,
//! and the options handed to the declaration formatter.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapezModError};

/// Prefix for every host module identifier in the rewritten declarations
pub const NAMESPACE_PREFIX: &str = "shapez";

/// Directory (inside the project) holding the host game build
pub const HOST_DIR_NAME: &str = "shapez";

/// Manifest file marking a directory as a mod package
pub const MOD_MANIFEST_FILE: &str = "mod.json";

/// Options file at the project root
pub const OPTIONS_FILE: &str = ".shapez";

/// Raw declarations emitted by the host's TypeScript compiler
pub const RAW_TYPES_FILE: &str = "types_raw.d.ts";

/// Declarations after the rewrite passes, before formatting
pub const FIXED_TYPES_FILE: &str = "types_fixed.d.ts";

/// Declarations after formatting
pub const FORMATTED_TYPES_FILE: &str = "types_formatted.d.ts";

/// Where the local dev server serves the bundled mod from
pub const DEV_SERVER_MOD_URL: &str = "http://localhost:3010/mod/mod.js";

/// Default folder created by `init`
pub const DEFAULT_PROJECT_DIR: &str = "shapezio-mods";

/// Package manager used to run the host's tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    /// Program and leading arguments that run a locally installed tool
    pub fn exec(self, tool: &str) -> (&'static str, Vec<String>) {
        match self {
            PackageManager::Yarn => ("yarn", vec![tool.to_string()]),
            PackageManager::Npm => ("npx", vec![tool.to_string()]),
        }
    }

    /// Command line running a `package.json` script
    pub fn run_script(self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {script}"),
            PackageManager::Npm => format!("npm run {script}"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }
}

/// Contents of the `.shapez` options file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_shapez_commit: Option<String>,
}

impl ProjectOptions {
    /// Load options from a project root, falling back to defaults when absent
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(OPTIONS_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ShapezModError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ShapezModError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save options to a project root with four-space indentation
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = project_root.join(OPTIONS_FILE);
        let content = to_pretty_json(self)?;

        fs::write(&path, content).map_err(|e| ShapezModError::write_failed(&path, e))
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager.unwrap_or_default()
    }
}

/// Serialize with four-space indentation, matching the host's JSON files
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    String::from_utf8(buf).map_err(|e| ShapezModError::IoError {
        message: e.to_string(),
    })
}

/// Options for formatting the rewritten declarations
///
/// These are fixed per invocation; the defaults match the style the host
/// game's own sources use.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormatOptions {
    pub tab_width: usize,
    pub use_tabs: bool,
    pub single_quote: bool,
    pub semi: bool,
    /// Prettier `--trailing-comma` value
    pub trailing_comma: &'static str,
    pub print_width: usize,
    pub bracket_spacing: bool,
    pub arrow_parens_avoid: bool,
    pub quote_props_consistent: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            use_tabs: false,
            single_quote: false,
            semi: true,
            trailing_comma: "es5",
            print_width: 110,
            bracket_spacing: true,
            arrow_parens_avoid: true,
            quote_props_consistent: true,
        }
    }
}

impl FormatOptions {
    /// One level of indentation
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}
