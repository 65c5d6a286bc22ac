use super::{Document, Folder, Item, Section};

/// The folder hierarchy of one section. Root level holds folders only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTree {
    pub section: Section,
    pub folders: Vec<Folder>,
}

/// An item cut out of a tree, with the folder it was cut from
#[derive(Debug)]
pub struct Detached {
    pub item: Item,
    /// `None` when the item was a root folder
    pub parent_id: Option<String>,
}

impl SectionTree {
    pub fn new(section: Section, folders: Vec<Folder>) -> Self {
        Self { section, folders }
    }

    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find_map(|f| f.find_folder(id))
    }

    pub fn find_folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find_map(|f| f.find_folder_mut(id))
    }

    /// Pre-order search, each folder's files before its subfolders
    pub fn find_document_mut(&mut self, id: &str) -> Option<&mut Document> {
        self.folders
            .iter_mut()
            .find_map(|folder| find_document_in(folder, id))
    }

    /// Folder directly holding the folder `id`, `None` at root level or if missing
    pub fn parent_of(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find_map(|folder| parent_in(folder, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.folders.iter().any(|folder| subtree_contains(folder, id))
    }

    /// Removes the first item with `id`, taking a folder's whole subtree with it
    pub fn detach(&mut self, id: &str) -> Option<Detached> {
        for index in 0..self.folders.len() {
            if self.folders[index].id == id {
                let folder = self.folders.remove(index);
                return Some(Detached {
                    item: Item::Folder(folder),
                    parent_id: None,
                });
            }
            if let Some(found) = detach_child(&mut self.folders[index], id) {
                return Some(found);
            }
        }
        None
    }

    /// Appends `item` under `parent_id`, or at root level when `None`.
    ///
    /// Gives the item back if the parent is missing, or if a document
    /// is aimed at the root.
    pub fn attach(&mut self, item: Item, parent_id: Option<&str>) -> Result<(), Item> {
        match (parent_id, item) {
            (None, Item::Folder(mut folder)) => {
                folder.rebase(&[]);
                self.folders.push(folder);
                Ok(())
            }
            (None, item @ Item::Document(_)) => Err(item),
            (Some(parent_id), item) => match self.find_folder_mut(parent_id) {
                Some(parent) => {
                    match item {
                        Item::Folder(folder) => parent.add_subfolder(folder),
                        Item::Document(document) => parent.add_file(document),
                    }
                    Ok(())
                }
                None => Err(item),
            },
        }
    }
}

fn find_document_in<'a>(folder: &'a mut Folder, id: &str) -> Option<&'a mut Document> {
    let Folder {
        files, subfolders, ..
    } = folder;
    if let Some(document) = files.iter_mut().find(|d| d.id == id) {
        return Some(document);
    }
    subfolders
        .iter_mut()
        .find_map(|child| find_document_in(child, id))
}

fn parent_in<'a>(folder: &'a Folder, id: &str) -> Option<&'a Folder> {
    if folder.subfolders.iter().any(|child| child.id == id) {
        return Some(folder);
    }
    folder
        .subfolders
        .iter()
        .find_map(|child| parent_in(child, id))
}

fn subtree_contains(folder: &Folder, id: &str) -> bool {
    folder.id == id
        || folder.files.iter().any(|d| d.id == id)
        || folder.subfolders.iter().any(|f| subtree_contains(f, id))
}

fn detach_child(folder: &mut Folder, id: &str) -> Option<Detached> {
    if let Some(pos) = folder.files.iter().position(|d| d.id == id) {
        let document = folder.files.remove(pos);
        return Some(Detached {
            item: Item::Document(document),
            parent_id: Some(folder.id.clone()),
        });
    }
    for index in 0..folder.subfolders.len() {
        if folder.subfolders[index].id == id {
            let child = folder.subfolders.remove(index);
            return Some(Detached {
                item: Item::Folder(child),
                parent_id: Some(folder.id.clone()),
            });
        }
        if let Some(found) = detach_child(&mut folder.subfolders[index], id) {
            return Some(found);
        }
    }
    None
}
