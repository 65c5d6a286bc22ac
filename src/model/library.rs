use super::{Folder, Section, SectionTree};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;

/// Both section trees, validated on construction
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Library {
    operational: SectionTree,
    customer: SectionTree,
}

#[derive(Deserialize)]
struct LibraryFile {
    #[serde(default)]
    operational: Vec<Folder>,
    #[serde(default)]
    customer: Vec<Folder>,
}

impl Library {
    /// Builds a library from root folders, rejecting trees that break
    /// identifier uniqueness or path consistency.
    pub fn new(operational: Vec<Folder>, customer: Vec<Folder>) -> Result<Self> {
        let library = Self {
            operational: SectionTree::new(Section::Operational, operational),
            customer: SectionTree::new(Section::Customer, customer),
        };
        library.validate()?;
        Ok(library)
    }

    /// Parses a TOML tree with `[[operational]]` and `[[customer]]` root folders.
    ///
    /// Paths left out of the file are derived from nesting; paths that
    /// are given must agree with it.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let LibraryFile {
            mut operational,
            mut customer,
        } = toml::from_str(contents)?;

        for folder in operational.iter_mut().chain(customer.iter_mut()) {
            fill_missing_paths(folder, &[]);
        }
        Self::new(operational, customer)
    }

    pub fn tree(&self, section: Section) -> &SectionTree {
        match section {
            Section::Operational => &self.operational,
            Section::Customer => &self.customer,
        }
    }

    pub fn tree_mut(&mut self, section: Section) -> &mut SectionTree {
        match section {
            Section::Operational => &mut self.operational,
            Section::Customer => &mut self.customer,
        }
    }

    /// Section trees in scan order
    pub fn trees(&self) -> impl Iterator<Item = &SectionTree> {
        Section::ALL.into_iter().map(move |section| self.tree(section))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.trees().any(|tree| tree.contains(id))
    }

    pub fn find_folder(&self, id: &str) -> Option<(Section, &Folder)> {
        self.trees()
            .find_map(|tree| tree.find_folder(id).map(|folder| (tree.section, folder)))
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tree in self.trees() {
            for folder in &tree.folders {
                check_folder(folder, &[], &mut seen)?;
            }
        }
        Ok(())
    }
}

fn fill_missing_paths(folder: &mut Folder, parent_path: &[String]) {
    if folder.path.is_empty() {
        folder.path = parent_path.to_vec();
        folder.path.push(folder.name.clone());
    }
    for document in &mut folder.files {
        if document.path.is_empty() {
            document.path = folder.path.clone();
        }
    }
    let own_path = folder.path.clone();
    for child in &mut folder.subfolders {
        fill_missing_paths(child, &own_path);
    }
}

fn check_folder(folder: &Folder, parent_path: &[String], seen: &mut HashSet<String>) -> Result<()> {
    if !seen.insert(folder.id.clone()) {
        return Err(Error::DuplicateId(folder.id.clone()));
    }

    let mut expected = parent_path.to_vec();
    expected.push(folder.name.clone());
    if folder.path != expected {
        return Err(Error::PathMismatch {
            id: folder.id.clone(),
            expected,
            found: folder.path.clone(),
        });
    }

    for document in &folder.files {
        if !seen.insert(document.id.clone()) {
            return Err(Error::DuplicateId(document.id.clone()));
        }
        if document.path != folder.path {
            return Err(Error::PathMismatch {
                id: document.id.clone(),
                expected: folder.path.clone(),
                found: document.path.clone(),
            });
        }
    }

    for child in &folder.subfolders {
        check_folder(child, &folder.path, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use chrono::Utc;

    const TREE: &str = r#"
[[operational]]
id = "legal"
name = "Legal"
item_count = 1

[[operational.subfolders]]
id = "licenses"
name = "Licenses"

[[operational.subfolders.files]]
id = "license.pdf"
name = "license.pdf"
kind = "pdf"
size = "1.2 MB"
updated_at = "2024-03-01T09:30:00Z"
created_by = "Dana"

[[customer]]
id = "contracts"
name = "Contracts"
"#;

    #[test]
    fn test_from_toml_derives_paths() {
        let library = Library::from_toml_str(TREE).unwrap();
        let (section, licenses) = library.find_folder("licenses").unwrap();

        assert_eq!(section, Section::Operational);
        assert_eq!(licenses.path, vec!["Legal", "Licenses"]);
        assert_eq!(licenses.files[0].path, vec!["Legal", "Licenses"]);
        assert_eq!(licenses.files[0].created_by, "Dana");
        assert!(library.tree(Section::Customer).find_folder("contracts").is_some());
    }

    #[test]
    fn test_from_toml_rejects_wrong_path() {
        let bad = r#"
[[customer]]
id = "contracts"
name = "Contracts"
path = ["Deals"]
"#;
        assert!(matches!(
            Library::from_toml_str(bad),
            Err(Error::PathMismatch { id, .. }) if id == "contracts"
        ));
    }

    #[test]
    fn test_from_toml_syntax_error() {
        assert!(matches!(
            Library::from_toml_str("[[operational]]\nid = "),
            Err(Error::TomlDe(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_across_sections() {
        let result = Library::new(
            vec![Folder::new("shared", "Shared")],
            vec![Folder::new("shared", "Shared")],
        );
        assert!(matches!(result, Err(Error::DuplicateId(id)) if id == "shared"));
    }

    #[test]
    fn test_duplicate_id_between_folder_and_file() {
        let result = Library::new(
            vec![Folder::new("x", "Legal").with_file(Document::new("x", "x.pdf", Utc::now()))],
            Vec::new(),
        );
        assert!(matches!(result, Err(Error::DuplicateId(_))));
    }

    #[test]
    fn test_file_path_must_match_folder() {
        let mut folder = Folder::new("legal", "Legal");
        let mut document = Document::new("nda", "nda.pdf", Utc::now());
        document.path = vec!["Elsewhere".to_string()];
        folder.files.push(document);

        assert!(matches!(
            Library::new(vec![folder], Vec::new()),
            Err(Error::PathMismatch { id, .. }) if id == "nda"
        ));
    }

    #[test]
    fn test_empty_library_is_valid() {
        let library = Library::new(Vec::new(), Vec::new()).unwrap();
        assert!(library.trees().all(|tree| tree.folders.is_empty()));
    }
}
