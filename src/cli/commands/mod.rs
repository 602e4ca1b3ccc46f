//! Command implementations

mod catalog;
mod explain;
mod score;

pub use catalog::catalog;
pub use explain::explain;
pub use score::score;
