//! In-memory document tree navigator.
//!
//! Organizes documents into per-section folder trees and lets a UI walk
//! them by breadcrumb, sort listings, toggle bookmarks and move items
//! through a retention-limited trash.

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod navigator;
pub mod resolve;
pub mod state;

pub use config::Config;
pub use error::{Error, Outcome, Result};
pub use listing::Listing;
pub use model::{Document, FileKind, Folder, Item, Library, Section};
pub use navigator::Navigator;
pub use state::{SortBy, SortOptions, SortOrder, TrashEntry, View};
