//! Per-session selection state

use tracing::debug;

use crate::catalog::Catalog;
use crate::method::MethodEntry;

/// The selection state machine for one browsing session.
///
/// Tracks at most one "currently viewed" entry: the state is either
/// empty or holds a single identifier. It starts empty, is set and
/// cleared by user actions, and is never persisted across restarts.
///
/// Each simultaneous session owns its own `Session` value; the catalog
/// itself is shared read-only, so sessions cannot observe each other's
/// selections.
///
/// # Example
///
/// ```
/// use methodbox::{Catalog, Session};
///
/// let catalog = Catalog::from_json_str(
///     r#"{"persona": {"title": "Persona", "phase": "Observe"}}"#,
/// ).unwrap();
/// let mut session = Session::new();
///
/// assert!(session.select(&catalog, "persona"));
/// assert_eq!(session.current_entry(&catalog).unwrap().title, "Persona");
///
/// session.clear();
/// assert!(session.current_entry(&catalog).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<String>,
}

impl Session {
    /// Create a session with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an entry for detail view.
    ///
    /// When `id` is not in the catalog the call is a no-op returning
    /// `false`: the previous selection, if any, stays in place.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            debug!(id, "select ignored: unknown identifier");
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Clear the selection. Idempotent.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected identifier, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether anything is selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Resolve the selection against the catalog.
    ///
    /// Returns `None` when nothing is selected or when the identifier no
    /// longer resolves; callers fall back to the placeholder view in
    /// both cases.
    pub fn current_entry<'c>(&self, catalog: &'c Catalog) -> Option<&'c MethodEntry> {
        self.selected.as_deref().and_then(|id| catalog.get(id))
    }
}
