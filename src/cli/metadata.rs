use clap::Args;

use crate::scaffold::ModMetadata;

/// Metadata written into a new mod's manifest
#[derive(Args, Debug, Clone)]
pub struct MetadataArgs {
    /// Mod name
    #[arg(long, default_value = "shapezio-mod")]
    pub name: String,

    /// Mod id, also the package directory under src/
    #[arg(long = "mod-id", default_value = "mod")]
    pub mod_id: String,

    /// Mod version
    #[arg(long = "mod-version", default_value = "1.0.0")]
    pub mod_version: String,

    /// Mod description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Mod author
    #[arg(long, default_value = "")]
    pub author: String,

    /// Mod website
    #[arg(long, default_value = "")]
    pub website: String,
}

impl From<MetadataArgs> for ModMetadata {
    fn from(args: MetadataArgs) -> Self {
        Self {
            id: args.mod_id,
            name: args.name,
            description: args.description,
            version: args.mod_version,
            author: args.author,
            website: args.website,
        }
    }
}
