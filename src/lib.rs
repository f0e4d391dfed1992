//! Terminal viewer for the historical match statistics of Talleres.
//!
//! The match history is loaded once from a CSV file and kept as a read-only
//! snapshot for the whole session; every view is a pure projection over it.

pub mod aggregate;
pub mod format;
pub mod history;
pub mod state;
pub mod team_colors;
