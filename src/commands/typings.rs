//! Typings command implementation

use std::path::PathBuf;

use tracing::debug;

use crate::cli::TypingsArgs;
use crate::commands::helpers::{print_done, print_typings_summary};
use crate::config::{FormatOptions, ProjectOptions};
use crate::error::Result;
use crate::format::formatter_for;
use crate::progress::step;
use crate::project::ProjectLayout;
use crate::typings::{self, DeclarationRewriter, generate};

/// Run typings command
pub fn run(project: Option<PathBuf>, args: TypingsArgs) -> Result<()> {
    let layout = ProjectLayout::resolve(project)?;
    let host_dir = layout.require_host()?;
    let package_manager = ProjectOptions::load(layout.root())?.package_manager();
    debug!(
        project = %layout.root().display(),
        package_manager = package_manager.name(),
        "running typings"
    );

    if args.generate {
        step("Generating raw declarations", || {
            generate::generate_raw_types(&layout, package_manager)
        })?;
    }

    let formatter = formatter_for(args.formatter, &host_dir, package_manager);
    let rewriter = DeclarationRewriter::default();
    let outcome = step("Updating typings", || {
        typings::build_typings(
            &layout,
            &rewriter,
            formatter.as_ref(),
            &FormatOptions::default(),
        )
    })?;

    print_typings_summary(&outcome);
    print_done("Typings ready");
    Ok(())
}
