//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - new_mod: Mod command arguments
//! - metadata: Mod metadata flags shared by init and mod
//! - typings: Typings command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod metadata;
pub mod new_mod;
pub mod typings;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use metadata::MetadataArgs;
pub use new_mod::ModArgs;
pub use typings::TypingsArgs;

/// shapez-mod - shapez.io mod project tooling
///
/// Scaffold mod projects, patch the host build and keep mod typings in sync.
#[derive(Parser, Debug)]
#[command(
    name = "shapez-mod",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffolding and typings for shapez.io mods",
    long_about = "shapez-mod creates shapez.io mod projects, patches a checked-out host build \
                  to load mods from the local dev server, and rewrites the host's generated \
                  TypeScript declarations into typings for every mod package.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  shapez-mod init                          \x1b[90m# Create ./shapezio-mods\x1b[0m\n   \
                  shapez-mod mod --mod-id flipper          \x1b[90m# Add a mod package\x1b[0m\n   \
                  shapez-mod patch-host                    \x1b[90m# Patch ./shapez for local mods\x1b[0m\n   \
                  shapez-mod typings --generate            \x1b[90m# Emit and rewrite typings\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "SHAPEZ_MOD_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new mod project
    Init(InitArgs),

    /// Add a mod package to the current project
    #[command(name = "mod")]
    Mod(ModArgs),

    /// Rewrite the host declarations into mod typings
    Typings(TypingsArgs),

    /// Patch the host build to load mods from the dev server
    #[command(name = "patch-host")]
    PatchHost,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageManager;
    use crate::format::FormatterKind;

    #[test]
    fn test_cli_parsing_init_defaults() {
        let cli = Cli::try_parse_from(["shapez-mod", "init"]).unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.dir, None);
                assert_eq!(args.package_manager, None);
                assert!(!args.git);
                assert_eq!(args.metadata.mod_id, "mod");
                assert_eq!(args.metadata.name, "shapezio-mod");
                assert_eq!(args.metadata.mod_version, "1.0.0");
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parsing_init_with_options() {
        let cli = Cli::try_parse_from([
            "shapez-mod",
            "init",
            "my-mods",
            "--package-manager",
            "npm",
            "--git",
            "--mod-id",
            "flipper",
            "--author",
            "me",
        ])
        .unwrap();
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.dir, Some(PathBuf::from("my-mods")));
                assert_eq!(args.package_manager, Some(PackageManager::Npm));
                assert!(args.git);
                assert_eq!(args.metadata.mod_id, "flipper");
                assert_eq!(args.metadata.author, "me");
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_parsing_mod() {
        let cli =
            Cli::try_parse_from(["shapez-mod", "mod", "--mod-id", "rotator", "--name", "Rotator"])
                .unwrap();
        match cli.command {
            Commands::Mod(args) => {
                assert_eq!(args.metadata.mod_id, "rotator");
                assert_eq!(args.metadata.name, "Rotator");
                assert_eq!(args.formatter, FormatterKind::Builtin);
            }
            _ => panic!("Expected Mod command"),
        }
    }

    #[test]
    fn test_cli_parsing_mod_formatter() {
        let cli = Cli::try_parse_from(["shapez-mod", "mod", "--formatter", "prettier"]).unwrap();
        match cli.command {
            Commands::Mod(args) => assert_eq!(args.formatter, FormatterKind::Prettier),
            _ => panic!("Expected Mod command"),
        }
    }

    #[test]
    fn test_cli_parsing_typings() {
        let cli = Cli::try_parse_from(["shapez-mod", "typings"]).unwrap();
        match cli.command {
            Commands::Typings(args) => {
                assert!(!args.generate);
                assert_eq!(args.formatter, FormatterKind::Builtin);
            }
            _ => panic!("Expected Typings command"),
        }

        let cli = Cli::try_parse_from([
            "shapez-mod",
            "typings",
            "--generate",
            "--formatter",
            "prettier",
        ])
        .unwrap();
        match cli.command {
            Commands::Typings(args) => {
                assert!(args.generate);
                assert_eq!(args.formatter, FormatterKind::Prettier);
            }
            _ => panic!("Expected Typings command"),
        }
    }

    #[test]
    fn test_cli_parsing_patch_host() {
        let cli = Cli::try_parse_from(["shapez-mod", "patch-host"]).unwrap();
        assert!(matches!(cli.command, Commands::PatchHost));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["shapez-mod", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["shapez-mod", "-v", "-p", "/tmp/project", "typings"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["shapez-mod", "patch-host", "--project", "/tmp/p"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/p")));
    }

    #[test]
    fn test_cli_rejects_unknown_formatter() {
        assert!(Cli::try_parse_from(["shapez-mod", "typings", "--formatter", "black"]).is_err());
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["shapez-mod", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
