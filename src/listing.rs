//! Projection of the library into the folder and file lists a view shows

use crate::bookmarks::collect_bookmarks;
use crate::model::{Document, Folder, Library};
use crate::state::{Location, NameFilter, SortOptions, TrashBin, View};

/// What a view displays, borrowed from the library or the trash
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Listing<'a> {
    pub folders: Vec<&'a Folder>,
    pub files: Vec<&'a Document>,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }

    pub fn sorted(mut self, options: SortOptions) -> Self {
        options.apply(&mut self.folders, &mut self.files);
        self
    }

    pub fn filtered(mut self, filter: &NameFilter) -> Self {
        if filter.is_active() {
            self.folders.retain(|f| filter.matches(&f.name));
            self.files.retain(|d| filter.matches(&d.name));
        }
        self
    }
}

/// Builds the unsorted listing for `view`.
///
/// Library shows one level under the location's folder, falling back to
/// the deepest live ancestor when part of the path is gone. The section
/// root lists folders only. Bookmarks and trash ignore the location.
pub fn project<'a>(
    view: View,
    library: &'a Library,
    trash: &'a TrashBin,
    location: &Location,
) -> Listing<'a> {
    match view {
        View::Library => {
            let tree = library.tree(location.section);
            match location.folder_in(tree) {
                Some(folder) => Listing {
                    folders: folder.subfolders.iter().collect(),
                    files: folder.files.iter().collect(),
                },
                None => Listing {
                    folders: tree.folders.iter().collect(),
                    files: Vec::new(),
                },
            }
        }
        View::Bookmarks => Listing {
            folders: Vec::new(),
            files: collect_bookmarks(library),
        },
        View::Trash => Listing {
            folders: trash.folders().collect(),
            files: trash.documents().collect(),
        },
    }
}
