//! Formatting of the rewritten declarations
//!
//! The formatter is the last pass before the declarations are written. It is
//! also the only place malformed output is caught: a formatter that cannot
//! make sense of the text fails the run.

use std::path::Path;

use crate::config::{FormatOptions, PackageManager};
use crate::error::Result;

pub mod builtin;
pub mod prettier;

pub use builtin::BuiltinFormatter;
pub use prettier::PrettierFormatter;

/// Canonicalises declaration text
pub trait Formatter {
    fn name(&self) -> &str;

    /// Format `text`, failing when it does not parse
    fn format(&self, text: &str, options: &FormatOptions) -> Result<String>;
}

/// Which formatter to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormatterKind {
    /// Bracket-depth re-indenter shipped with shapez-mod
    #[default]
    Builtin,
    /// prettier from the host build's node_modules
    Prettier,
}

/// Build the formatter for `kind`
///
/// prettier runs inside `host_dir` so it picks up the host's installation.
pub fn formatter_for(
    kind: FormatterKind,
    host_dir: &Path,
    package_manager: PackageManager,
) -> Box<dyn Formatter> {
    match kind {
        FormatterKind::Builtin => Box::new(BuiltinFormatter),
        FormatterKind::Prettier => Box::new(PrettierFormatter::new(package_manager, host_dir)),
    }
}
