pub mod error;
pub mod loaders;

pub use error::{LoadError, LoadResult};
pub use loaders::{GamePrepLoader, HistoryLoader, RosterLoader};
