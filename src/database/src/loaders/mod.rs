pub mod history;
pub mod prep;
pub mod roster;

pub use history::*;
pub use prep::*;
pub use roster::*;
