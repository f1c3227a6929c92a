pub mod prep;

pub use prep::*;
