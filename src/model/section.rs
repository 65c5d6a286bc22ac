use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level document tree. Sections never share folders or files.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Operational,
    Customer,
}

impl Section {
    /// Scan order for anything that walks every section
    pub const ALL: [Section; 2] = [Section::Operational, Section::Customer];

    /// Name used as the first breadcrumb segment
    pub fn root_name(self) -> &'static str {
        match self {
            Section::Operational => "operational",
            Section::Customer => "customer",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_name())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operational" => Ok(Section::Operational),
            "customer" => Ok(Section::Customer),
            other => Err(Error::UnknownSection(other.to_string())),
        }
    }
}
