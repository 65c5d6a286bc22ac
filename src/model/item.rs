use super::{Document, Folder};
use serde::{Deserialize, Serialize};

/// Either kind of tree node, as moved between a section tree and the trash
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Folder(Folder),
    Document(Document),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Folder(folder) => &folder.id,
            Item::Document(document) => &document.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Folder(folder) => &folder.name,
            Item::Document(document) => &document.name,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Item::Folder(folder) => &folder.path,
            Item::Document(document) => &document.path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Item::Folder(_))
    }
}
