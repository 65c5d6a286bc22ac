//! Bookmarks are not stored separately: they are the live documents whose
//! flag is set, found by a pre-order scan of every section.

use crate::model::{Document, Folder, Library};

/// Bookmarked documents in scan order: sections in order, root folders in
/// stored order, each folder's files before its subfolders.
pub fn collect_bookmarks(library: &Library) -> Vec<&Document> {
    let mut found = Vec::new();
    for tree in library.trees() {
        for folder in &tree.folders {
            collect_from(folder, &mut found);
        }
    }
    found
}

fn collect_from<'a>(folder: &'a Folder, found: &mut Vec<&'a Document>) {
    found.extend(folder.files.iter().filter(|d| d.bookmarked));
    for child in &folder.subfolders {
        collect_from(child, found);
    }
}

/// Flips the flag on the first live document with `id`.
///
/// Returns the new flag, or `None` if no live document has that id.
pub fn toggle_bookmark(library: &mut Library, id: &str) -> Option<bool> {
    for section in crate::model::Section::ALL {
        if let Some(document) = library.tree_mut(section).find_document_mut(id) {
            document.bookmarked = !document.bookmarked;
            return Some(document.bookmarked);
        }
    }
    None
}
