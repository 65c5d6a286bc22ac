//! Breadcrumb path resolution
//!
//! A breadcrumb starts with the section root name and continues with
//! folder names. Resolution is fail-soft: a segment that matches nothing
//! stops the walk at the deepest folder found so far.

use crate::model::{Folder, SectionTree};

/// Where a path walk ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    /// Deepest matched folder, `None` for the section root
    pub folder: Option<&'a Folder>,
    /// False when a segment failed to match and the walk stopped early
    pub complete: bool,
}

/// Resolves a breadcrumb, ignoring its first segment (the section root name)
pub fn resolve_path<'a, S: AsRef<str>>(tree: &'a SectionTree, path: &[S]) -> Resolved<'a> {
    match path.split_first() {
        Some((_, folders)) => walk(tree, folders),
        None => Resolved {
            folder: None,
            complete: true,
        },
    }
}

/// Resolves folder names from the section root, no section segment
pub fn walk<'a, S: AsRef<str>>(tree: &'a SectionTree, segments: &[S]) -> Resolved<'a> {
    let mut current: Option<&'a Folder> = None;

    for segment in segments {
        let candidates = match current {
            Some(folder) => &folder.subfolders,
            None => &tree.folders,
        };
        // First match wins if names repeat at one level
        match candidates.iter().find(|f| f.name == segment.as_ref()) {
            Some(folder) => current = Some(folder),
            None => {
                return Resolved {
                    folder: current,
                    complete: false,
                }
            }
        }
    }

    Resolved {
        folder: current,
        complete: true,
    }
}
