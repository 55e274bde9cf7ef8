use crate::core::html::render_catalog;
use crate::core::loader::{
    discover_listings, parse_listing, LoadOptions, LoadSummary, SchemaErrorPolicy,
};
use crate::domain::model::Entry;
use crate::utils::error::{CatalogError, Result};
use std::fs;
use std::path::Path;

/// Price listings from every loaded file, ordered by ascending unit price.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from already parsed entries.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut catalog = Self { entries };
        catalog.sort();
        catalog
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads every listing in `directory` with the default options.
    pub fn load<P: AsRef<Path>>(&mut self, directory: P) -> Result<LoadSummary> {
        self.load_with(directory, &LoadOptions::default())
    }

    /// Loads every listing in `directory`. On error the catalog is left as it
    /// was before the call.
    pub fn load_with<P: AsRef<Path>>(
        &mut self,
        directory: P,
        options: &LoadOptions,
    ) -> Result<LoadSummary> {
        let directory = directory.as_ref();
        tracing::info!("Loading price listings from {}", directory.display());

        let mut summary = LoadSummary::default();
        let mut loaded = Vec::new();

        for path in discover_listings(directory, options)? {
            tracing::debug!("Reading listing {}", path.display());

            let parsed = match parse_listing(&path, options) {
                Ok(parsed) => parsed,
                Err(e @ CatalogError::SchemaError { .. })
                    if options.on_schema_error == SchemaErrorPolicy::Skip =>
                {
                    tracing::warn!("Skipping listing: {}", e);
                    summary.files_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            tracing::debug!(
                "{}: {} entries, {} short rows skipped",
                path.display(),
                parsed.entries.len(),
                parsed.rows_skipped
            );

            summary.files_loaded += 1;
            summary.rows_skipped += parsed.rows_skipped;
            loaded.extend(parsed.entries);
        }

        summary.entries_loaded = loaded.len();
        self.entries.extend(loaded);
        self.sort();

        tracing::info!(
            "Loaded {} entries from {} listings ({} skipped)",
            summary.entries_loaded,
            summary.files_loaded,
            summary.files_skipped
        );
        Ok(summary)
    }

    /// Entries whose product name contains `text`, ignoring case, in catalog
    /// order. An empty `text` matches everything.
    pub fn search(&self, text: &str) -> Vec<&Entry> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.product.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn render_html(&self) -> String {
        render_catalog(&self.entries).into_string()
    }

    /// Writes the catalog as HTML to `path`, replacing any existing file, and
    /// returns a confirmation message.
    pub fn export_html<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        fs::write(path, self.render_html()).map_err(|source| CatalogError::ExportError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Exported {} entries to {}", self.len(), path.display());
        Ok(format!("Данные прайс-листов выгружены в {}", path.display()))
    }

    // Stable, so equal unit prices keep file then row order.
    fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
    }
}
