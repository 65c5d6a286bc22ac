use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Docx,
    Xlsx,
    Jpg,
    Png,
    #[default]
    Other,
}

impl FileKind {
    /// Derives the kind from a file name's extension
    pub fn from_name(name: &str) -> Self {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => FileKind::Pdf,
            "doc" | "docx" => FileKind::Docx,
            "xls" | "xlsx" => FileKind::Xlsx,
            "jpg" | "jpeg" => FileKind::Jpg,
            "png" => FileKind::Png,
            _ => FileKind::Other,
        }
    }
}

/// A document stored in a folder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: FileKind,
    /// Human-readable size, carried as given
    #[serde(default)]
    pub size: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    /// Path of the owning folder
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            kind: FileKind::from_name(&name),
            name,
            size: String::new(),
            updated_at,
            created_by: String::new(),
            path: Vec::new(),
            bookmarked: false,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_creator(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn bookmarked(mut self, bookmarked: bool) -> Self {
        self.bookmarked = bookmarked;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("license.pdf", FileKind::Pdf)]
    #[test_case("Contract.DOCX", FileKind::Docx)]
    #[test_case("old.doc", FileKind::Docx)]
    #[test_case("budget.xlsx", FileKind::Xlsx)]
    #[test_case("scan.jpeg", FileKind::Jpg)]
    #[test_case("logo.png", FileKind::Png)]
    #[test_case("notes.txt", FileKind::Other)]
    #[test_case("README", FileKind::Other)]
    fn test_kind_from_name(name: &str, expected: FileKind) {
        assert_eq!(FileKind::from_name(name), expected);
    }

    #[test]
    fn test_new_document_is_not_bookmarked() {
        let doc = Document::new("d1", "a.pdf", Utc::now());
        assert!(!doc.bookmarked);
        assert_eq!(doc.kind, FileKind::Pdf);
        assert!(doc.path.is_empty());
    }
}
