pub mod config;
pub mod id;
pub mod project;
pub mod selection;
pub mod task;

pub use config::*;
pub use id::*;
pub use project::*;
pub use selection::*;
pub use task::*;
