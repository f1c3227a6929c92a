pub mod aggregator;
pub mod games;
pub mod stats;

pub use aggregator::*;
pub use games::*;
pub use stats::*;
