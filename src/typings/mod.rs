//! Type declarations for mod authors
//!
//! The host build's TypeScript compiler emits one ambient declaration file
//! for the whole game. This module rewrites it into something a mod project
//! can type-check against, formats it and copies it into every mod
//! directory.

use std::fs;

use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::config::FormatOptions;
use crate::distribute::{self, FanOut};
use crate::error::{Result, ShapezModError};
use crate::format::Formatter;
use crate::project::ProjectLayout;

pub mod abstracts;
pub mod ambient;
pub mod generate;
pub mod module_ref;
pub mod rewrite;

pub use rewrite::{DeclarationRewriter, RewriteReport};

/// Everything a typings run produced
#[derive(Debug, Clone, Default)]
pub struct TypingsOutcome {
    pub report: RewriteReport,
    pub fan_out: FanOut,
}

/// Replace every match for which `f` returns a replacement
///
/// Matches where `f` returns `None` are kept as-is and not counted.
pub(crate) fn replace_with<F>(re: &Regex, text: &str, mut f: F) -> (String, usize)
where
    F: FnMut(&Captures<'_>) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;

    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };
        if let Some(replacement) = f(&caps) {
            out.push_str(&text[last..m.start()]);
            out.push_str(&replacement);
            last = m.end();
            count += 1;
        }
    }

    out.push_str(&text[last..]);
    (out, count)
}

/// Rewrite, format and distribute the raw declarations of a project
///
/// Reads `shapez/types_raw.d.ts`, writes `types_fixed.d.ts` after the
/// rewrite passes and `types_formatted.d.ts` after formatting, then copies
/// the formatted text into every mod directory under `src/`.
pub fn build_typings(
    layout: &ProjectLayout,
    rewriter: &DeclarationRewriter,
    formatter: &dyn Formatter,
    options: &FormatOptions,
) -> Result<TypingsOutcome> {
    let raw_path = layout.raw_types();
    if !raw_path.is_file() {
        return Err(ShapezModError::TypingsInputMissing {
            path: raw_path.display().to_string(),
        });
    }

    let raw = fs::read_to_string(&raw_path).map_err(|e| ShapezModError::read_failed(&raw_path, e))?;
    debug!(bytes = raw.len(), path = %raw_path.display(), "read raw declarations");

    let (fixed, report) = rewriter.rewrite(&raw);
    let fixed_path = layout.fixed_types();
    fs::write(&fixed_path, &fixed).map_err(|e| ShapezModError::write_failed(&fixed_path, e))?;

    debug!(formatter = formatter.name(), "formatting declarations");
    let formatted = formatter.format(&fixed, options)?;
    let formatted_path = layout.formatted_types();
    fs::write(&formatted_path, &formatted)
        .map_err(|e| ShapezModError::write_failed(&formatted_path, e))?;

    let dirs = distribute::enumerate_mod_directories(&layout.src_dir())?;
    let fan_out = distribute::fan_out(&formatted, &dirs)?;
    info!(
        written = fan_out.written.len(),
        unchanged = fan_out.unchanged.len(),
        "distributed declarations"
    );

    Ok(TypingsOutcome { report, fan_out })
}
