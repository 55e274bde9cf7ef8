use crate::config::CatalogSettings;
use crate::core::columns::ColumnSynonyms;
use crate::core::loader::SchemaErrorPolicy;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every section and field is optional; anything left
/// out keeps the built-in default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub catalog: CatalogSection,
    pub columns: ColumnSynonyms,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub directory: Option<String>,
    pub output: Option<String>,
    pub filename_marker: Option<String>,
    pub extension: Option<String>,
    pub delimiter: Option<String>,
    pub on_schema_error: Option<SchemaErrorPolicy>,
}

impl TomlConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Applies the file's values on top of `settings`.
    pub fn apply_to(&self, settings: &mut CatalogSettings) {
        let catalog = &self.catalog;
        if let Some(directory) = &catalog.directory {
            settings.directory = directory.clone();
        }
        if let Some(output) = &catalog.output {
            settings.output = output.clone();
        }
        if let Some(marker) = &catalog.filename_marker {
            settings.filename_marker = marker.clone();
        }
        if let Some(extension) = &catalog.extension {
            settings.extension = extension.clone();
        }
        if let Some(delimiter) = &catalog.delimiter {
            settings.delimiter = delimiter.clone();
        }
        if let Some(policy) = catalog.on_schema_error {
            settings.on_schema_error = policy;
        }
        settings.columns = self.columns.clone();
    }

    pub fn into_settings(self) -> CatalogSettings {
        let mut settings = CatalogSettings::default();
        self.apply_to(&mut settings);
        settings
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_settings().validate()
    }
}
