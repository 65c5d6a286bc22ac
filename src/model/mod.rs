mod document;
mod folder;
mod item;
mod library;
mod section;
mod tree;

pub use document::{Document, FileKind};
pub use folder::Folder;
pub use item::Item;
pub use library::Library;
pub use section::Section;
pub use tree::{Detached, SectionTree};
