use std::path::PathBuf;

use derive_new::new;

use crate::{cli::Strategy, extraction::attribute::DEFAULT_ATTRIBUTE, senses::Sense};

/// Directory the answer files are read from unless overridden
pub static DEFAULT_DATA_DIR: &str = "PA3";

/// Audit log written next to the working directory unless overridden
pub static DEFAULT_LOG_FILE: &str = "scorer-log.txt";

/// Settings for a single scoring run
#[derive(Debug, Clone, PartialEq, new)]
pub struct Config {
    /// Predicted answers file, relative to `data_dir`
    pub predicted: PathBuf,

    /// Gold answers file, relative to `data_dir`
    pub gold: PathBuf,

    /// Directory the answer files are resolved against
    #[new(value = "PathBuf::from(DEFAULT_DATA_DIR)")]
    pub data_dir: PathBuf,

    /// Append-only audit log
    #[new(value = "PathBuf::from(DEFAULT_LOG_FILE)")]
    pub log_file: PathBuf,

    /// How senses are pulled out of each line
    #[new(default)]
    pub strategy: Strategy,

    /// Attribute read by [`Strategy::Attribute`]
    #[new(value = "DEFAULT_ATTRIBUTE.to_string()")]
    pub attribute: String,

    /// Sense the baseline always predicts
    #[new(value = "Sense::MAJORITY")]
    pub majority: Sense,

    /// Print the report as JSON
    #[new(default)]
    pub json: bool,
}

impl Config {
    /// Full path to the predicted answers
    pub fn predicted_path(&self) -> PathBuf {
        self.data_dir.join(&self.predicted)
    }

    /// Full path to the gold answers
    pub fn gold_path(&self) -> PathBuf {
        self.data_dir.join(&self.gold)
    }
}
