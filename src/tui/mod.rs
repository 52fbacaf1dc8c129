pub mod app;
pub mod input;
pub mod listener;
pub mod render;
pub mod theme;

pub use app::run;
