pub mod filter;
pub mod navigation;
pub mod sort;
pub mod trash;
pub mod view;

pub use filter::NameFilter;
pub use navigation::{Location, NavigationState};
pub use sort::{SortBy, SortOptions, SortOrder};
pub use trash::{TrashBin, TrashEntry, DEFAULT_RETENTION_DAYS};
pub use view::View;
