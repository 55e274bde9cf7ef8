pub mod catalog;
pub mod columns;
pub mod html;
pub mod loader;

pub use crate::domain::model::{ColumnIndices, Entry, Role};
pub use crate::utils::error::Result;
