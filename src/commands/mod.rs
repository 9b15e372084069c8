//! Command implementations for shapez-mod CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod new_mod;
pub mod patch_host;
pub mod typings;
pub mod version;
