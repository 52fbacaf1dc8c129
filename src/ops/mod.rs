pub mod date;
pub mod draft;
pub mod workspace;
