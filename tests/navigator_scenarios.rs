use chrono::{TimeZone, Utc};
use folio::{Document, Folder, Library, Navigator, Outcome, Section, SortOptions, View};

const TREE: &str = r#"
[[operational]]
id = "Legal"
name = "Legal"

[[operational.subfolders]]
id = "Licenses"
name = "Licenses"

[[operational.subfolders.files]]
id = "license.pdf"
name = "license.pdf"
kind = "pdf"
size = "240 KB"
updated_at = "2024-04-02T10:00:00Z"
created_by = "Ops"

[[operational]]
id = "Finance"
name = "Finance"

[[operational.files]]
id = "budget.xlsx"
name = "budget.xlsx"
updated_at = "2024-01-15T10:00:00Z"

[[operational.files]]
id = "audit.pdf"
name = "audit.pdf"
updated_at = "2024-03-20T10:00:00Z"

[[customer]]
id = "Acme"
name = "Acme"

[[customer.files]]
id = "acme-contract.docx"
name = "acme-contract.docx"
updated_at = "2024-02-01T10:00:00Z"
bookmarked = true
"#;

fn navigator() -> Navigator {
    Navigator::new(Library::from_toml_str(TREE).expect("valid tree"))
}

fn file_ids(files: &[&Document]) -> Vec<String> {
    files.iter().map(|d| d.id.clone()).collect()
}

fn folder_ids(folders: &[&Folder]) -> Vec<String> {
    folders.iter().map(|f| f.id.clone()).collect()
}

fn check_paths(folder: &Folder, parent: &[String]) {
    let mut expected = parent.to_vec();
    expected.push(folder.name.clone());
    assert_eq!(folder.path, expected, "folder {}", folder.id);
    for file in &folder.files {
        assert_eq!(file.path, folder.path, "file {}", file.id);
    }
    for child in &folder.subfolders {
        check_paths(child, &folder.path);
    }
}

fn assert_tree_invariants(nav: &Navigator) {
    for tree in nav.library().trees() {
        for folder in &tree.folders {
            check_paths(folder, &[]);
        }
    }
}

#[test]
fn navigate_bookmark_and_view_bookmarks() {
    let mut nav = navigator();
    nav.navigate_to_path(&["operational", "Legal", "Licenses"]);

    let items = nav.get_display_items();
    assert!(items.folders.is_empty());
    assert_eq!(file_ids(&items.files), vec!["license.pdf"]);
    assert!(!items.files[0].bookmarked);

    assert_eq!(nav.toggle_bookmark("license.pdf"), Some(true));
    nav.set_view(View::Bookmarks);

    let items = nav.get_display_items();
    assert!(items.folders.is_empty());
    assert_eq!(
        file_ids(&items.files),
        vec!["acme-contract.docx", "license.pdf"]
    );
    assert!(items.files.iter().all(|d| d.bookmarked));
}

#[test]
fn trash_whole_folder_and_restore() {
    let mut nav = navigator();
    assert_eq!(nav.move_to_trash("Licenses"), Outcome::Applied);

    let legal = nav.library().find_folder("Legal").unwrap().1;
    assert!(legal.subfolders.is_empty());
    assert!(!nav.library().contains("license.pdf"));

    nav.set_view(View::Trash);
    let items = nav.get_display_items();
    assert_eq!(folder_ids(&items.folders), vec!["Licenses"]);
    assert_eq!(items.folders[0].files.len(), 1);

    assert_eq!(nav.restore_from_trash("Licenses").unwrap(), Outcome::Applied);
    assert!(nav.get_display_items().is_empty());
    assert!(nav.library().contains("license.pdf"));
    assert_tree_invariants(&nav);
}

#[test]
fn purged_items_are_gone_for_good() {
    let mut nav = navigator();
    let _ = nav.move_to_trash("audit.pdf");
    assert_eq!(nav.permanently_delete("audit.pdf"), Outcome::Applied);

    assert!(!nav.library().contains("audit.pdf"));
    assert!(nav.trash_entries().is_empty());
    assert_eq!(nav.restore_from_trash("audit.pdf").unwrap(), Outcome::NotFound);
    assert_eq!(nav.permanently_delete("audit.pdf"), Outcome::NotFound);
}

#[test]
fn root_paths_resolve_to_section_root() {
    let nav = navigator();
    let empty: [&str; 0] = [];
    assert!(nav.resolve_path(Section::Operational, &empty).folder.is_none());
    assert!(nav
        .resolve_path(Section::Operational, &["operational"])
        .folder
        .is_none());
}

#[test]
fn sort_options_reorder_finance() {
    let mut nav = navigator();
    assert!(nav.navigate_to_folder("Finance").is_applied());

    let by_name = |nav: &Navigator| file_ids(&nav.get_display_items().files);

    nav.set_sort_option("name-asc".parse::<SortOptions>().unwrap());
    let asc = by_name(&nav);
    nav.set_sort_option("name-desc".parse::<SortOptions>().unwrap());
    let mut desc = by_name(&nav);
    desc.reverse();
    assert_eq!(asc, desc);

    nav.set_sort_option("date-asc".parse::<SortOptions>().unwrap());
    assert_eq!(by_name(&nav), vec!["budget.xlsx", "audit.pdf"]);
}

#[test]
fn bookmarks_are_stable_between_calls() {
    let mut nav = navigator();
    let _ = nav.toggle_bookmark("budget.xlsx");
    let first: Vec<String> = nav.bookmarks().iter().map(|d| d.id.clone()).collect();
    let second: Vec<String> = nav.bookmarks().iter().map(|d| d.id.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec!["budget.xlsx", "acme-contract.docx"]);
}

#[test]
fn independent_navigators_do_not_share_state() {
    let mut a = navigator();
    let b = navigator();
    let _ = a.move_to_trash("Finance");
    assert!(!a.library().contains("Finance"));
    assert!(b.library().contains("Finance"));
    assert!(b.trash_entries().is_empty());
}

#[test]
fn trash_countdown_uses_retention() {
    let mut nav = navigator();
    let deleted = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let _ = nav.move_to_trash_at("budget.xlsx", deleted);
    let later = Utc.with_ymd_and_hms(2024, 6, 11, 0, 0, 0).unwrap();
    assert_eq!(nav.days_remaining("budget.xlsx", later), Some(20));
}
