use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub prediction: Option<FilePredictionConfig>,
    pub launcher: Option<FileLauncherConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePredictionConfig {
    pub fasta_paths: Option<String>,
    pub max_template_date: Option<String>,
    pub model_preset: Option<String>,
    pub data_dir: Option<String>,
    pub use_precomputed_msas: Option<bool>,
    #[serde(default)]
    pub extra_args: Vec<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLauncherConfig {
    pub interpreter: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
