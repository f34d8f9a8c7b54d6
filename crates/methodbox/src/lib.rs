//! # Methodbox
//!
//! An in-memory catalog of design-thinking method cards.
//!
//! Methodbox loads a static catalog of method cards once at startup and
//! answers three kinds of questions over it: direct lookup by identifier,
//! phase-grouped browsing, and exact-match filtering by a
//! phase/time/size-group triple. A small per-session state machine tracks
//! which single entry is currently open for detail view.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable `id -> MethodEntry` mapping, read once from a
//!   JSON data file and never mutated afterwards
//! - **Taxonomy**: the fixed phase, time-budget, size-group, and zone
//!   enumerations that classify every card
//! - **Session**: the per-user selection state machine
//! - **Queries**: phase grouping and criteria filtering, both preserving
//!   catalog insertion order
//!
//! The catalog is read-only shared state: hand one instance to any number
//! of sessions and give each session its own [`Session`] value.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod method;
pub mod session;
pub mod taxonomy;

// Re-export main types
pub use catalog::{Catalog, FilterCriteria};
pub use error::{CatalogError, Result};
pub use method::MethodEntry;
pub use session::Session;
pub use taxonomy::{Phase, SizeGroup, TimeBudget, UnknownKeyword, Zone};

/// Methodbox version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
