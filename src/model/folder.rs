use super::Document;
use serde::{Deserialize, Serialize};

/// A folder in a section tree. Owns its subfolders and documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    /// Cached summary supplied by the data source, never recomputed
    #[serde(default)]
    pub item_count: usize,
    /// Names from the section root down to this folder, inclusive
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub subfolders: Vec<Folder>,
    #[serde(default)]
    pub files: Vec<Document>,
}

impl Folder {
    /// Creates a root-level folder
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: vec![name.clone()],
            name,
            item_count: 0,
            subfolders: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_subfolder(mut self, folder: Folder) -> Self {
        self.add_subfolder(folder);
        self
    }

    pub fn with_file(mut self, document: Document) -> Self {
        self.add_file(document);
        self
    }

    /// Appends a subfolder, rewriting its subtree paths under this folder
    pub fn add_subfolder(&mut self, mut folder: Folder) {
        folder.rebase(&self.path);
        self.subfolders.push(folder);
    }

    pub fn add_file(&mut self, mut document: Document) {
        document.path = self.path.clone();
        self.files.push(document);
    }

    /// Moves this folder under `parent_path`, fixing every path in the subtree
    pub fn rebase(&mut self, parent_path: &[String]) {
        let mut path = parent_path.to_vec();
        path.push(self.name.clone());
        self.path = path;

        for document in &mut self.files {
            document.path = self.path.clone();
        }
        let own_path = self.path.clone();
        for folder in &mut self.subfolders {
            folder.rebase(&own_path);
        }
    }

    /// Depth-first search for a folder in this subtree, self included
    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        if self.id == id {
            return Some(self);
        }
        self.subfolders.iter().find_map(|f| f.find_folder(id))
    }

    pub fn find_folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        if self.id == id {
            return Some(self);
        }
        self.subfolders.iter_mut().find_map(|f| f.find_folder_mut(id))
    }

    /// Number of direct children actually held, as opposed to `item_count`
    pub fn live_item_count(&self) -> usize {
        self.subfolders.len() + self.files.len()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
