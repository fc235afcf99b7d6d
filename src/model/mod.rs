pub mod config;
pub mod sort;
pub mod task;

pub use config::*;
pub use sort::*;
pub use task::*;
