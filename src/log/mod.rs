//! Parsing for the search-benchmark timing log (info_time.txt).

pub mod block;
pub mod error;
pub mod line;
pub mod parse;

pub use block::{BlockBuilder, BlockRecord};
pub use error::{FormatError, ParseError};
pub use line::{Field, LogLine, Measurement, classify_line};
pub use parse::{parse_blocks, parse_log_file, parse_log_str};
