//! External collaborators: the stored settings mapping and the raw count.
//!
//! Both are read fresh per request; nothing is memoized in-process.

pub mod count;
pub mod settings_store;

pub use count::{from_config, CountSource, FileCount, StaticCount};
pub use settings_store::SettingsStore;
