use clap::Parser;

use crate::format::FormatterKind;

/// Arguments for typings command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rewrite existing raw declarations:\n    shapez-mod typings\n\n\
                  Run the host's TypeScript compiler first:\n    shapez-mod typings --generate\n\n\
                  Format with the host's prettier:\n    shapez-mod typings --formatter prettier")]
pub struct TypingsArgs {
    /// Emit shapez/types_raw.d.ts with the host's tsc before rewriting
    #[arg(long)]
    pub generate: bool,

    /// Formatter for the rewritten declarations
    #[arg(long, value_enum, default_value_t = FormatterKind::Builtin)]
    pub formatter: FormatterKind,
}
