//! Output directory layout conventions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_plots_file() -> String {
    "default-plots.csv".to_string()
}

fn default_contents_file() -> String {
    "contents.csv".to_string()
}

fn default_steppers_file() -> String {
    "steppers.csv".to_string()
}

fn default_success_file() -> String {
    "success".to_string()
}

fn default_manifest_delimiter() -> char {
    ','
}

fn default_data_delimiter() -> char {
    '\t'
}

/// Filesystem conventions for locating simulation output.
///
/// Every path the pipeline touches is composed from this struct; there is
/// no process-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputLayout {
    /// Root directory holding one subdirectory per model.
    pub models_dir: PathBuf,
    /// Directory listing available protocols.
    pub protocols_dir: PathBuf,
    /// Per-model-per-protocol manifest of (plot, x, y) rows.
    #[serde(default = "default_plots_file")]
    pub default_plots_file: String,
    /// Per-directory index mapping variable titles to storage files.
    #[serde(default = "default_contents_file")]
    pub contents_file: String,
    /// Stepper definitions, including the time row used as the implicit y axis.
    #[serde(default = "default_steppers_file")]
    pub steppers_file: String,
    /// Sentinel marking a model+protocol computation as complete.
    #[serde(default = "default_success_file")]
    pub success_file: String,
    /// Field delimiter for manifest and index files.
    #[serde(default = "default_manifest_delimiter")]
    pub manifest_delimiter: char,
    /// Field delimiter for numeric data files.
    #[serde(default = "default_data_delimiter")]
    pub data_delimiter: char,
}

impl OutputLayout {
    /// Layout rooted at the given directories, with conventional filenames
    /// and delimiters.
    pub fn new(models_dir: PathBuf, protocols_dir: PathBuf) -> Self {
        Self {
            models_dir,
            protocols_dir,
            default_plots_file: default_plots_file(),
            contents_file: default_contents_file(),
            steppers_file: default_steppers_file(),
            success_file: default_success_file(),
            manifest_delimiter: default_manifest_delimiter(),
            data_delimiter: default_data_delimiter(),
        }
    }

    /// Output directory for one model+protocol combination.
    pub fn data_path(&self, model: &str, protocol: &str) -> PathBuf {
        self.models_dir.join(model).join(protocol)
    }

    pub fn default_plots_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.default_plots_file)
    }

    pub fn contents_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.contents_file)
    }

    pub fn steppers_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.steppers_file)
    }

    pub fn success_path(&self, data_path: &Path) -> PathBuf {
        data_path.join(&self.success_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_conventions() {
        let layout = OutputLayout::new(PathBuf::from("/out"), PathBuf::from("/protocols"));
        assert_eq!(layout.default_plots_file, "default-plots.csv");
        assert_eq!(layout.contents_file, "contents.csv");
        assert_eq!(layout.steppers_file, "steppers.csv");
        assert_eq!(layout.success_file, "success");
        assert_eq!(layout.manifest_delimiter, ',');
        assert_eq!(layout.data_delimiter, '\t');
    }

    #[test]
    fn data_path_joins_model_and_protocol() {
        let layout = OutputLayout::new(PathBuf::from("/out"), PathBuf::from("/protocols"));
        let data_path = layout.data_path("m1", "p1");
        assert_eq!(data_path, PathBuf::from("/out/m1/p1"));
        assert_eq!(
            layout.contents_path(&data_path),
            PathBuf::from("/out/m1/p1/contents.csv")
        );
    }
}
