use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two items in the library share an identifier
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),

    /// A folder or document path does not match its position in the tree
    #[error("path of {id} is {found:?}, expected {expected:?}")]
    PathMismatch {
        id: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// The folder a trashed item came from is no longer live
    #[error("cannot restore {id}: original folder {parent} no longer exists")]
    RestoreTargetMissing { id: String, parent: String },

    #[error("cannot restore {id}: {reason}")]
    InvalidRestoreTarget { id: String, reason: String },

    #[error("unknown sort option: {0}")]
    UnknownSortOption(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result of a command that may find nothing to act on.
///
/// Not-found is not an error, but callers can tell it apart from a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    Applied,
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}
