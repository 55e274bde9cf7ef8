pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::Session;
pub use config::{toml_config::TomlConfig, CatalogSettings};
pub use core::catalog::Catalog;
pub use core::loader::{LoadOptions, LoadSummary, SchemaErrorPolicy};
pub use domain::model::Entry;
pub use utils::error::{CatalogError, Result};
