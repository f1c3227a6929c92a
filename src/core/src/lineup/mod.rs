pub mod generator;
pub mod lineup;
pub mod summary;
pub mod usage;

pub use generator::*;
pub use lineup::*;
pub use summary::*;
pub use usage::*;
