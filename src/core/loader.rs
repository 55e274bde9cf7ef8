//! Discovery and parsing of listing files.
//!
//! A listing is a delimited text file whose name contains a marker (`price` by
//! default) and ends with a known extension (`.csv`). Its first row names the
//! columns; the product, price and weight columns are located through
//! [`ColumnSynonyms`]. Rows too short to reach every resolved column are
//! skipped, every other row must carry numeric price and weight values.

use crate::core::columns::ColumnSynonyms;
use crate::domain::model::{ColumnIndices, Entry, Role};
use crate::utils::error::{CatalogError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const DEFAULT_DIRECTORY: &str = "price";
pub const DEFAULT_FILENAME_MARKER: &str = "price";
pub const DEFAULT_EXTENSION: &str = "csv";

/// What to do with a listing whose header lacks one of the required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaErrorPolicy {
    /// Fail the whole load.
    #[default]
    Abort,
    /// Log the file and continue with the next one.
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub filename_marker: String,
    pub extension: String,
    pub delimiter: u8,
    pub columns: ColumnSynonyms,
    pub on_schema_error: SchemaErrorPolicy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            filename_marker: DEFAULT_FILENAME_MARKER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            delimiter: b',',
            columns: ColumnSynonyms::default(),
            on_schema_error: SchemaErrorPolicy::Abort,
        }
    }
}

impl LoadOptions {
    pub fn is_listing(&self, file_name: &str) -> bool {
        file_name.contains(self.filename_marker.as_str())
            && file_name
                .strip_suffix(self.extension.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub entries_loaded: usize,
    pub rows_skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedListing {
    pub entries: Vec<Entry>,
    pub rows_skipped: usize,
}

/// Lists qualifying listing files in `directory`, sorted by path so that load
/// order does not depend on the filesystem.
pub fn discover_listings(directory: &Path, options: &LoadOptions) -> Result<Vec<PathBuf>> {
    let read_error = |source| CatalogError::DirectoryRead {
        path: directory.to_path_buf(),
        source,
    };

    let mut listings = Vec::new();
    for dir_entry in fs::read_dir(directory).map_err(read_error)? {
        let dir_entry = dir_entry.map_err(read_error)?;
        let path = dir_entry.path();

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!("Ignoring non UTF-8 file name: {}", path.display());
            continue;
        };

        if !options.is_listing(file_name) {
            continue;
        }

        if !path.is_file() {
            tracing::debug!("Ignoring non-file entry: {}", path.display());
            continue;
        }

        listings.push(path);
    }

    listings.sort();
    tracing::debug!(
        "Found {} listing files in {}",
        listings.len(),
        directory.display()
    );
    Ok(listings)
}

/// Opens and parses one listing file. Entries are tagged with the file name.
pub fn parse_listing(path: &Path, options: &LoadOptions) -> Result<ParsedListing> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = File::open(path)?;
    parse_reader(file, &file_name, options)
}

pub fn parse_reader<R: Read>(
    reader: R,
    file_name: &str,
    options: &LoadOptions,
) -> Result<ParsedListing> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();
    let headers = match records.next() {
        Some(record) => record?,
        None => StringRecord::new(),
    };

    let columns = options
        .columns
        .resolve(headers.iter())
        .map_err(|missing| CatalogError::SchemaError {
            file: file_name.to_string(),
            missing: missing
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    let required = columns.max() + 1;
    let mut parsed = ParsedListing::default();

    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() < required {
            tracing::debug!(
                "Skipping short row in {} at line {} ({} of {} fields)",
                file_name,
                line,
                record.len(),
                required
            );
            parsed.rows_skipped += 1;
            continue;
        }

        let product = record[columns.product].trim();
        let price = parse_number(&record, &columns, Role::Price, file_name, line)?;
        let weight = parse_number(&record, &columns, Role::Weight, file_name, line)?;

        parsed
            .entries
            .push(Entry::new(product, price, weight, file_name));
    }

    Ok(parsed)
}

fn parse_number(
    record: &StringRecord,
    columns: &ColumnIndices,
    role: Role,
    file_name: &str,
    line: u64,
) -> Result<f64> {
    let raw = record[columns.index_of(role)].trim();
    raw.parse::<f64>().map_err(|_| CatalogError::ParseError {
        file: file_name.to_string(),
        line,
        role: role.to_string(),
        value: raw.to_string(),
    })
}
