use clap::Parser;

use super::MetadataArgs;
use crate::format::FormatterKind;

/// Arguments for mod command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a mod package to the project in the current directory:\n    shapez-mod mod --mod-id rotator --name Rotator\n\n\
                  Add a mod package to another project:\n    shapez-mod mod --mod-id rotator --project ../shapezio-mods\n\n\
                  Format the refreshed typings with the host's prettier:\n    shapez-mod mod --mod-id rotator --formatter prettier")]
pub struct ModArgs {
    #[command(flatten)]
    pub metadata: MetadataArgs,

    /// Formatter for the refreshed typings
    #[arg(long, value_enum, default_value_t = FormatterKind::Builtin)]
    pub formatter: FormatterKind,
}
