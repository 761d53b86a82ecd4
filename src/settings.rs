//! Oximeta settings, which are configurable using environment variables.
use crate::converter::{DicomJsonConfig, KeyStyle};
use camino::Utf8PathBuf;
use serde::Deserialize;
use std::num::NonZeroUsize;

/// Name of the output directory created inside the source directory
/// when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "MetadataToJson";

#[derive(Debug, Deserialize)]
pub struct OximetaEnvOptions {
    /// Directory of `*.dcm` files.
    pub source_dir: Utf8PathBuf,
    /// Directory where JSON files are written.
    #[serde(default)]
    pub output_dir: Option<Utf8PathBuf>,
    #[serde(default = "default_threads")]
    pub threads: NonZeroUsize,
    #[serde(default)]
    pub key_style: KeyStyle,
    #[serde(default)]
    pub pretty_print: bool,
}

impl OximetaEnvOptions {
    pub fn output_dir(&self) -> Utf8PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.source_dir.join(DEFAULT_OUTPUT_DIR_NAME))
    }

    pub fn json_config(&self) -> DicomJsonConfig {
        DicomJsonConfig {
            key_style: self.key_style,
            pretty_print: self.pretty_print,
        }
    }
}

fn default_threads() -> NonZeroUsize {
    NonZeroUsize::new(4).unwrap()
}
