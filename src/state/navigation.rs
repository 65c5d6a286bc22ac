// Navigation state - history and current location
use crate::model::{Folder, Section, SectionTree};
use crate::resolve::walk;

/// A position in the library: a section and a folder inside it.
///
/// `folder_id` pins the exact folder; `folder_path` is the fallback used
/// once that folder is no longer live. Both empty is the section root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub section: Section,
    pub folder_id: Option<String>,
    pub folder_path: Vec<String>,
}

impl Location {
    pub fn root(section: Section) -> Self {
        Self {
            section,
            folder_id: None,
            folder_path: Vec::new(),
        }
    }

    pub fn at_folder(section: Section, folder: &Folder) -> Self {
        Self {
            section,
            folder_id: Some(folder.id.clone()),
            folder_path: folder.path.clone(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.folder_id.is_none() && self.folder_path.is_empty()
    }

    /// The folder this location points at in `tree`.
    ///
    /// Looks the folder up by id first, then walks the name path down to
    /// the deepest live ancestor.
    pub fn folder_in<'a>(&self, tree: &'a SectionTree) -> Option<&'a Folder> {
        self.folder_id
            .as_deref()
            .and_then(|id| tree.find_folder(id))
            .or_else(|| walk(tree, self.folder_path.as_slice()).folder)
    }

    /// Section root name followed by the folder names
    pub fn breadcrumb(&self) -> Vec<String> {
        let mut crumbs = Vec::with_capacity(self.folder_path.len() + 1);
        crumbs.push(self.section.root_name().to_string());
        crumbs.extend(self.folder_path.iter().cloned());
        crumbs
    }
}

pub struct NavigationState {
    pub current: Location,
    pub history: Vec<Location>,
    pub history_index: usize,
    pub history_limit: usize,
}

impl NavigationState {
    pub fn new(start: Location, history_limit: usize) -> Self {
        Self {
            current: start.clone(),
            history: vec![start],
            history_index: 0,
            history_limit: history_limit.max(1),
        }
    }

    pub fn push_history(&mut self, location: Location) {
        if location == self.current {
            return;
        }
        // Remove any forward history when navigating to a new location
        self.history.truncate(self.history_index + 1);
        self.history.push(location.clone());
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
        self.history_index = self.history.len() - 1;
        self.current = location;
    }

    pub fn go_back(&mut self) -> Option<&Location> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current = self.history[self.history_index].clone();
            Some(&self.current)
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&Location> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current = self.history[self.history_index].clone();
            Some(&self.current)
        } else {
            None
        }
    }
}
