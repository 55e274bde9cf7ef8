pub mod toml_config;

use crate::core::columns::ColumnSynonyms;
use crate::core::html::DEFAULT_EXPORT_PATH;
use crate::core::loader::{
    LoadOptions, SchemaErrorPolicy, DEFAULT_DIRECTORY, DEFAULT_EXTENSION, DEFAULT_FILENAME_MARKER,
};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_delimiter, validate_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Effective settings after defaults, config file and command line are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub directory: String,
    pub output: String,
    pub filename_marker: String,
    pub extension: String,
    pub delimiter: String,
    pub on_schema_error: SchemaErrorPolicy,
    pub columns: ColumnSynonyms,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.to_string(),
            output: DEFAULT_EXPORT_PATH.to_string(),
            filename_marker: DEFAULT_FILENAME_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            delimiter: ",".to_string(),
            on_schema_error: SchemaErrorPolicy::Abort,
            columns: ColumnSynonyms::default(),
        }
    }
}

impl CatalogSettings {
    pub fn load_options(&self) -> Result<LoadOptions> {
        Ok(LoadOptions {
            filename_marker: self.filename_marker.clone(),
            extension: self.extension.clone(),
            delimiter: validate_delimiter("catalog.delimiter", &self.delimiter)?,
            columns: self.columns.clone(),
            on_schema_error: self.on_schema_error,
        })
    }
}

impl Validate for CatalogSettings {
    fn validate(&self) -> Result<()> {
        validate_path("catalog.directory", &self.directory)?;
        validate_path("catalog.output", &self.output)?;
        validate_non_empty_string("catalog.filename_marker", &self.filename_marker)?;
        validate_extension("catalog.extension", &self.extension)?;
        validate_delimiter("catalog.delimiter", &self.delimiter)?;
        self.columns.validate()
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "price-machine")]
#[command(about = "Search product price lists and export them as an HTML table")]
pub struct CliConfig {
    /// Directory holding the price list files
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Destination of the HTML export
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Skip price lists with unrecognised columns instead of stopping
    #[arg(long)]
    pub skip_invalid_files: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges built-in defaults, the config file (if any) and command line flags,
    /// in increasing order of precedence.
    pub fn settings(&self) -> Result<CatalogSettings> {
        let mut settings = CatalogSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Reading configuration from {}", path);
            toml_config::TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(directory) = &self.directory {
            settings.directory = directory.clone();
        }
        if let Some(output) = &self.output {
            settings.output = output.clone();
        }
        if self.skip_invalid_files {
            settings.on_schema_error = SchemaErrorPolicy::Skip;
        }

        settings.validate()?;
        Ok(settings)
    }
}
