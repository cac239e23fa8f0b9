use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::SettingsError;

const DEFAULT_OUT_DIR: &str = "data";

/// Runtime paths: optional `ris3.toml`, then `RIS3_*` environment variables,
/// then command-line flags.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("ris3").required(false))
                .add_source(Environment::with_prefix("RIS3")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Flags given on the command line win over file and environment.
    pub fn override_with(mut self, flags: Settings) -> Self {
        self.input = flags.input.or(self.input);
        self.reference = flags.reference.or(self.reference);
        self.out_dir = flags.out_dir.or(self.out_dir);
        self.db_path = flags.db_path.or(self.db_path);
        self
    }

    pub fn input(&self) -> Result<&Path, SettingsError> {
        self.input.as_deref().ok_or(SettingsError::MissingInput)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}

// ── Tests ──
