//! Analyzer for search-structure benchmark logs: parse the harness's timing log into
//! index-aligned series and render comparison charts.

pub mod log;
pub mod logging;
pub mod model;
pub mod render;

pub use log::{ParseError, parse_log_file};
pub use model::{Algorithm, Dataset};
