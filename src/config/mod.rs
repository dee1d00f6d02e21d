use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::FormError;
use crate::form::{FieldId, Step, StepLayout};

const DEFAULT_DIR_NAME: &str = ".contact_form";
const CONFIG_FILE: &str = "form.json";
const HOME_ENV: &str = "CONTACT_FORM_HOME";

/// One wizard step as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepConfig {
    pub step: u32,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Start with one step visible at a time.
    pub wizard: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepConfig>,
    pub plain_output: bool,
    /// Hide informational shell messages; warnings and results still print.
    pub quiet_output: bool,
}

impl FormConfig {
    /// Step layout described by the file, or the built-in one when absent.
    pub fn layout(&self) -> Result<StepLayout, FormError> {
        if self.steps.is_empty() {
            return Ok(StepLayout::contact_default());
        }
        let steps = self
            .steps
            .iter()
            .map(|entry| {
                let fields = entry
                    .fields
                    .iter()
                    .map(|name| name.parse::<FieldId>())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Step::new(entry.step, fields))
            })
            .collect::<Result<Vec<_>, FormError>>()?;
        StepLayout::new(steps)
    }
}

/// Directory holding the config file, defaulting to `~/.contact_form`.
pub fn app_config_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::from_base(app_config_dir())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Reads the config, falling back to defaults when the file is missing.
    pub fn load(&self) -> Result<FormConfig, FormError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(FormConfig::default())
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
