use clap::Parser;
use std::path::PathBuf;

use super::MetadataArgs;
use crate::config::PackageManager;

/// Arguments for init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create ./shapezio-mods with the default mod:\n    shapez-mod init\n\n\
                  Create a project with a named mod and a git repository:\n    shapez-mod init my-mods --mod-id flipper --name Flipper --git\n\n\
                  Use npm instead of yarn:\n    shapez-mod init --package-manager npm")]
pub struct InitArgs {
    /// Project directory to create (default: shapezio-mods)
    pub dir: Option<PathBuf>,

    /// Package manager used to run the host's tooling
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Initialize a git repository in the project
    #[arg(long)]
    pub git: bool,

    #[command(flatten)]
    pub metadata: MetadataArgs,
}
