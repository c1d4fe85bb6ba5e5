//! Runtime configuration

use crate::extract::ExtractArgs;
use std::path::PathBuf;

/// Everything a run needs to know, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The SoundFont to read presets from
    pub file_path: PathBuf,
}

impl From<ExtractArgs> for Config {
    fn from(args: ExtractArgs) -> Self {
        Self {
            file_path: args.file,
        }
    }
}
