// Sort options for listings
use crate::error::Error;
use crate::model::{Document, Folder};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    /// Reorders documents only; folders carry no timestamp
    Modified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOptions {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Name,
            sort_order: SortOrder::Ascending,
        }
    }
}

impl SortOptions {
    pub fn new(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    pub fn cycle_sort_by(&mut self) {
        self.sort_by = match self.sort_by {
            SortBy::Name => SortBy::Modified,
            SortBy::Modified => SortBy::Name,
        };
    }

    pub fn toggle_order(&mut self) {
        self.sort_order = match self.sort_order {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        };
    }

    /// Stable in-place sort of both lists.
    ///
    /// Descending reverses the comparator, so equal keys keep their
    /// original relative order in both directions.
    pub fn apply(&self, folders: &mut [&Folder], files: &mut [&Document]) {
        let order = self.sort_order;
        match self.sort_by {
            SortBy::Name => {
                folders.sort_by(|a, b| directed(compare_names(&a.name, &b.name), order));
                files.sort_by(|a, b| directed(compare_names(&a.name, &b.name), order));
            }
            SortBy::Modified => {
                files.sort_by(|a, b| directed(a.updated_at.cmp(&b.updated_at), order));
            }
        }
    }
}

fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Case-insensitive first; case variants of one name put lowercase first
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

impl fmt::Display for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let by = match self.sort_by {
            SortBy::Name => "name",
            SortBy::Modified => "date",
        };
        let order = match self.sort_order {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        };
        write!(f, "{}-{}", by, order)
    }
}

/// Parses the `name-asc`, `name-desc`, `date-asc`, `date-desc` forms
impl FromStr for SortOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (by, order) = s
            .split_once('-')
            .ok_or_else(|| Error::UnknownSortOption(s.to_string()))?;
        let sort_by = match by {
            "name" => SortBy::Name,
            "date" | "modified" => SortBy::Modified,
            _ => return Err(Error::UnknownSortOption(s.to_string())),
        };
        let sort_order = match order {
            "asc" => SortOrder::Ascending,
            "desc" => SortOrder::Descending,
            _ => return Err(Error::UnknownSortOption(s.to_string())),
        };
        Ok(Self::new(sort_by, sort_order))
    }
}
