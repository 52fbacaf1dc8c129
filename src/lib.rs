//! In-memory project and task deck.
//!
//! [`ops::workspace::Workspace`] holds projects, tasks and the selection;
//! [`ops::draft::DraftForm`] validates new projects before they reach it.
//! The `tui` module is a terminal front end over both.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
