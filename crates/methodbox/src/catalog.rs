//! The immutable method catalog and its loader

mod query;

pub use query::FilterCriteria;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::method::MethodEntry;

/// The full static set of method entries, keyed by identifier.
///
/// Loaded once at process start and never mutated afterwards. Iteration
/// follows the insertion order of the source file, and every query over
/// the catalog reports identifiers in that order. Sessions share one
/// catalog read-only; only their [`Session`](crate::Session) values are
/// per-user.
///
/// # Example
///
/// ```
/// use methodbox::Catalog;
///
/// let catalog = Catalog::from_json_str(
///     r#"{"brainstorming": {"title": "Brainstorming", "phase": "Ideate"}}"#,
/// ).unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get("brainstorming").unwrap().title, "Brainstorming");
/// assert!(catalog.get("persona").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, MethodEntry>,
}

impl Catalog {
    /// Load the catalog from a JSON data file.
    ///
    /// Meant to be called once per process lifetime; the result is kept
    /// for as long as the process runs. Loading the same file twice
    /// yields identical catalogs.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Missing`] if the file cannot be read
    /// - [`CatalogError::Malformed`] if its content is not the expected
    ///   structure
    ///
    /// Both are fatal to the caller: there is no partial catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Missing {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// The expected shape is a top-level object mapping identifier to
    /// method entry. Entry order in the document becomes catalog
    /// insertion order.
    pub fn from_json_str(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        let entries: IndexMap<String, MethodEntry> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&MethodEntry> {
        self.entries.get(id)
    }

    /// Check whether an identifier exists in the catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Iterate over all identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
