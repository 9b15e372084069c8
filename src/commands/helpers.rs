//! Command helper utilities

use console::style;

use crate::config::FormatOptions;
use crate::error::Result;
use crate::format::Formatter;
use crate::progress::StepProgress;
use crate::project::ProjectLayout;
use crate::typings::{self, DeclarationRewriter, TypingsOutcome};

/// Print a green `DONE` line
pub fn print_done(message: &str) {
    println!("{} {}", style("DONE").green().bold(), message);
}

/// Print a highlighted ` INFO ` line
pub fn print_info(message: &str) {
    println!("{} {}", style(" INFO ").on_blue().white().bold(), message);
}

/// Name a command for display
pub fn command(text: &str) -> String {
    style(text).green().bold().to_string()
}

/// Rebuild typings when the host build and its raw declarations exist
///
/// Returns `None` when the step was skipped.
pub fn update_typings_if_possible(
    layout: &ProjectLayout,
    formatter: &dyn Formatter,
) -> Result<Option<TypingsOutcome>> {
    let progress = StepProgress::start("Updating typings");

    if !layout.has_host() {
        progress.skip("Shapez not installed");
        return Ok(None);
    }
    if !layout.raw_types().is_file() {
        progress.skip("No raw declarations, run 'shapez-mod typings --generate'");
        return Ok(None);
    }

    let rewriter = DeclarationRewriter::default();
    match typings::build_typings(layout, &rewriter, formatter, &FormatOptions::default()) {
        Ok(outcome) => {
            progress.finish();
            Ok(Some(outcome))
        }
        Err(e) => {
            progress.fail();
            Err(e)
        }
    }
}

/// Print what a typings run did
pub fn print_typings_summary(outcome: &TypingsOutcome) {
    let report = &outcome.report;
    println!(
        "  {} {} module headers, {} imports",
        style("Namespaced:").bold(),
        report.modules_namespaced,
        report.dynamic_imports + report.named_imports
    );
    if !report.abstract_classes.is_empty() {
        println!(
            "  {} {}",
            style("Abstract classes:").bold(),
            report.abstract_classes.len()
        );
    }
    if !report.wrapped_subclasses.is_empty() {
        println!(
            "  {} {}",
            style("Wrapped subclasses:").bold(),
            report.wrapped_subclasses.len()
        );
    }
    if !report.global_config_members.is_empty() {
        println!(
            "  {} {}",
            style("globalConfig members added:").bold(),
            report.global_config_members.join(", ")
        );
    }
    for module in &report.unresolved_imports {
        println!(
            "  {} relative import {} outside any module declaration",
            style("warning:").yellow().bold(),
            style(module).dim()
        );
    }
    println!(
        "  {} {} written, {} unchanged",
        style("Mod directories:").bold(),
        outcome.fan_out.written.len(),
        outcome.fan_out.unchanged.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::BuiltinFormatter;
    use tempfile::TempDir;

    #[test]
    fn test_update_typings_skips_without_host() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        let outcome = update_typings_if_possible(&layout, &BuiltinFormatter).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_update_typings_skips_without_raw_declarations() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("shapez")).unwrap();
        let layout = ProjectLayout::new(temp.path());
        let outcome = update_typings_if_possible(&layout, &BuiltinFormatter).unwrap();
        assert!(outcome.is_none());
    }
}
