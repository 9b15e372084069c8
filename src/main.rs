//! shapez-mod - shapez.io mod project tooling
//!
//! Scaffolds mod projects, patches a checked-out host build to load mods from
//! the local dev server, and rewrites the host's generated TypeScript
//! declarations into typings every mod package can use.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod distribute;
mod error;
mod format;
mod hash;
mod host;
mod logging;
mod progress;
mod project;
mod scaffold;
mod typings;

use cli::{Cli, Commands};
use error::ShapezModError;

/// Render an error with its help text, if any
fn render_error(err: &ShapezModError) -> String {
    match err.help() {
        Some(help) => format!("Error: {err}\n  help: {help}"),
        None => format!("Error: {err}"),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Mod(args) => commands::new_mod::run(cli.project, args),
        Commands::Typings(args) => commands::typings::run(cli.project, args),
        Commands::PatchHost => commands::patch_host::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("{}", render_error(&e));
        std::process::exit(1);
    }
}
