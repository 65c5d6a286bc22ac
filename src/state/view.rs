use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which projection the navigator shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// The current section's tree at the current folder
    #[default]
    Library,
    /// Bookmarked documents across every section
    Bookmarks,
    /// Everything in the trash, regardless of section
    Trash,
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "library" => Ok(View::Library),
            "bookmarks" => Ok(View::Bookmarks),
            "trash" => Ok(View::Trash),
            other => Err(Error::UnknownView(other.to_string())),
        }
    }
}
