//! The command/query surface a UI drives.
//!
//! A `Navigator` owns its library and trash outright, so independent
//! instances never share state. Every call is synchronous; callers that
//! share one across threads must serialize the mutating calls themselves.
//! Nothing is pushed to the caller: re-read `get_display_items` after a
//! command.

use crate::bookmarks;
use crate::config::Config;
use crate::error::{Error, Outcome, Result};
use crate::listing::{project, Listing};
use crate::model::{Document, Folder, Library, Section};
use crate::resolve::{resolve_path, Resolved};
use crate::state::{
    Location, NameFilter, NavigationState, SortOptions, TrashBin, TrashEntry, View,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub struct Navigator {
    library: Library,
    trash: TrashBin,
    navigation: NavigationState,
    view: View,
    sort_options: SortOptions,
    filter: NameFilter,
}

impl Navigator {
    pub fn new(library: Library) -> Self {
        Self::with_config(library, &Config::default())
    }

    pub fn with_config(library: Library, config: &Config) -> Self {
        let start = Location::root(config.navigation.default_section);
        Self {
            library,
            trash: TrashBin::new(config.trash.retention_days),
            navigation: NavigationState::new(start, config.navigation.history_limit),
            view: config.navigation.default_view,
            sort_options: config.sort_options(),
            filter: NameFilter::default(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn trash(&self) -> &TrashBin {
        &self.trash
    }

    pub fn section(&self) -> Section {
        self.navigation.current.section
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn sort_options(&self) -> SortOptions {
        self.sort_options
    }

    pub fn filter(&self) -> &NameFilter {
        &self.filter
    }

    /// The location as last navigated, which may name folders since trashed
    pub fn location(&self) -> &Location {
        &self.navigation.current
    }

    /// Deepest live folder on the current location, `None` at section root
    pub fn current_folder(&self) -> Option<&Folder> {
        let location = &self.navigation.current;
        location.folder_in(self.library.tree(location.section))
    }

    /// Section root name followed by the live folder names
    pub fn breadcrumb(&self) -> Vec<String> {
        self.live_location().breadcrumb()
    }

    pub fn resolve_path<S: AsRef<str>>(&self, section: Section, path: &[S]) -> Resolved<'_> {
        resolve_path(self.library.tree(section), path)
    }

    /// Current view's items, filtered and sorted
    pub fn get_display_items(&self) -> Listing<'_> {
        project(
            self.view,
            &self.library,
            &self.trash,
            &self.navigation.current,
        )
        .filtered(&self.filter)
        .sorted(self.sort_options)
    }

    pub fn bookmarks(&self) -> Vec<&Document> {
        bookmarks::collect_bookmarks(&self.library)
    }

    pub fn trash_entries(&self) -> &[TrashEntry] {
        self.trash.entries()
    }

    /// Countdown for a trashed item, `None` if it is not in the trash
    pub fn days_remaining(&self, id: &str, now: DateTime<Utc>) -> Option<u32> {
        self.trash
            .get(id)
            .map(|entry| entry.days_remaining(self.trash.retention_days, now))
    }

    pub fn expired_trash(&self, now: DateTime<Utc>) -> Vec<&TrashEntry> {
        self.trash.expired(now).collect()
    }

    /// Jumps to the root of `section`
    pub fn select_section(&mut self, section: Section) {
        debug!(%section, "Selecting section");
        self.navigation.push_history(Location::root(section));
    }

    /// Moves to the folder with `folder_id`, switching section if needed
    pub fn navigate_to_folder(&mut self, folder_id: &str) -> Outcome {
        let Some((section, folder)) = self.library.find_folder(folder_id) else {
            debug!(folder_id, "Folder not found, staying put");
            return Outcome::NotFound;
        };
        let location = Location::at_folder(section, folder);
        debug!(folder_id, path = ?location.folder_path, "Navigating to folder");
        self.navigation.push_history(location);
        Outcome::Applied
    }

    /// Resolves a breadcrumb and moves there.
    ///
    /// A first segment naming a section switches to it; any other first
    /// segment keeps the current section. Returns false when the path only
    /// partly matched; the location is then the deepest folder that did match.
    pub fn navigate_to_path<S: AsRef<str>>(&mut self, path: &[S]) -> bool {
        let section = path
            .first()
            .and_then(|root| root.as_ref().parse::<Section>().ok())
            .unwrap_or_else(|| self.section());
        let resolved = resolve_path(self.library.tree(section), path);
        let complete = resolved.complete;
        let location = match resolved.folder {
            Some(folder) => Location::at_folder(section, folder),
            None => Location::root(section),
        };

        if !complete {
            let requested: Vec<&str> = path.iter().map(|segment| segment.as_ref()).collect();
            warn!(?requested, resolved = ?location.folder_path, "Path only partly resolved");
        }
        self.navigation.push_history(location);
        complete
    }

    /// Moves to the parent of the current live folder
    pub fn navigate_up(&mut self) -> bool {
        let section = self.section();
        let Some(current) = self.current_folder() else {
            return false;
        };
        let tree = self.library.tree(section);
        let location = match tree.parent_of(&current.id) {
            Some(parent) => Location::at_folder(section, parent),
            None => Location::root(section),
        };
        self.navigation.push_history(location);
        true
    }

    pub fn go_back(&mut self) -> bool {
        self.navigation.go_back().is_some()
    }

    pub fn go_forward(&mut self) -> bool {
        self.navigation.go_forward().is_some()
    }

    pub fn set_sort_option(&mut self, options: SortOptions) {
        debug!(sort = %options, "Sort changed");
        self.sort_options = options;
    }

    pub fn set_view(&mut self, view: View) {
        debug!(?view, "View changed");
        self.view = view;
    }

    /// Narrows every view to names matching `query`; blank clears it
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter.set(query);
    }

    /// Flips a live document's bookmark. `None` if no live document has `id`.
    pub fn toggle_bookmark(&mut self, id: &str) -> Option<bool> {
        let flag = bookmarks::toggle_bookmark(&mut self.library, id);
        match flag {
            Some(bookmarked) => info!(id, bookmarked, "Bookmark toggled"),
            None => debug!(id, "No live document to bookmark"),
        }
        flag
    }

    /// Moves a live folder (with its subtree) or document to the trash
    pub fn move_to_trash(&mut self, id: &str) -> Outcome {
        self.move_to_trash_at(id, Utc::now())
    }

    pub fn move_to_trash_at(&mut self, id: &str, now: DateTime<Utc>) -> Outcome {
        for section in Section::ALL {
            if let Some(detached) = self.library.tree_mut(section).detach(id) {
                info!(
                    id,
                    name = detached.item.name(),
                    path = ?detached.item.path(),
                    %section,
                    parent = ?detached.parent_id,
                    "Moved to trash"
                );
                self.trash.push(TrashEntry {
                    item: detached.item,
                    section,
                    parent_id: detached.parent_id,
                    deleted_at: now,
                });
                return Outcome::Applied;
            }
        }
        debug!(id, "Nothing live to trash");
        Outcome::NotFound
    }

    /// Puts a trashed item back where it was removed from.
    ///
    /// Fails with `RestoreTargetMissing`, leaving the item in the trash,
    /// if its original folder is no longer live.
    pub fn restore_from_trash(&mut self, id: &str) -> Result<Outcome> {
        let Some(entry) = self.trash.get(id) else {
            debug!(id, "Not in trash, nothing to restore");
            return Ok(Outcome::NotFound);
        };
        let section = entry.section;
        let parent_id = entry.parent_id.clone();
        self.restore_into(id, section, parent_id.as_deref())
    }

    /// Restores a trashed item under `parent_id` in `section`, or at the
    /// section root when `parent_id` is `None` (folders only).
    pub fn restore_to(
        &mut self,
        id: &str,
        section: Section,
        parent_id: Option<&str>,
    ) -> Result<Outcome> {
        if !self.trash.contains(id) {
            debug!(id, "Not in trash, nothing to restore");
            return Ok(Outcome::NotFound);
        }
        self.restore_into(id, section, parent_id)
    }

    fn restore_into(
        &mut self,
        id: &str,
        section: Section,
        parent_id: Option<&str>,
    ) -> Result<Outcome> {
        if self.library.contains(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        match parent_id {
            Some(parent) => {
                if self.library.tree(section).find_folder(parent).is_none() {
                    return Err(Error::RestoreTargetMissing {
                        id: id.to_string(),
                        parent: parent.to_string(),
                    });
                }
            }
            None => {
                let is_folder = self
                    .trash
                    .get(id)
                    .is_some_and(|entry| entry.item.is_folder());
                if !is_folder {
                    return Err(Error::InvalidRestoreTarget {
                        id: id.to_string(),
                        reason: "documents cannot sit at a section root".to_string(),
                    });
                }
            }
        }

        let Some(entry) = self.trash.take(id) else {
            return Ok(Outcome::NotFound);
        };
        if let Err(item) = self.library.tree_mut(section).attach(entry.item, parent_id) {
            self.trash.push(TrashEntry { item, ..entry });
            return Err(Error::InvalidRestoreTarget {
                id: id.to_string(),
                reason: "target rejected the item".to_string(),
            });
        }
        info!(id, %section, parent = ?parent_id, "Restored from trash");
        Ok(Outcome::Applied)
    }

    /// Drops a trashed item for good. Live items are never purged directly.
    pub fn permanently_delete(&mut self, id: &str) -> Outcome {
        match self.trash.take(id) {
            Some(_) => {
                info!(id, "Permanently deleted");
                Outcome::Applied
            }
            None => {
                debug!(id, "Not in trash, nothing to purge");
                Outcome::NotFound
            }
        }
    }

    /// Purges every entry whose retention ran out by `now`
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> Vec<TrashEntry> {
        let purged = self.trash.drain_expired(now);
        if !purged.is_empty() {
            info!(count = purged.len(), "Purged expired trash");
        }
        purged
    }

    fn live_location(&self) -> Location {
        let section = self.section();
        self.current_folder()
            .map(|folder| Location::at_folder(section, folder))
            .unwrap_or_else(|| Location::root(section))
    }
}
