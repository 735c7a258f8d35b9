//! Classification of a single benchmark log line.

use crate::log::FormatError;
use crate::model::Algorithm;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const DATASETS_TAG: &str = "Datasets";
const COLLISIONS_TAG: &str = "Collisions";
const SEPARATOR: &str = ": ";

// Digits right after the tag, then only the ":" / "\r" terminator the harness emits.
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)[:\s]*$").expect("size regex is valid"));

/// One slot of a block that a measurement line fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Timing(Algorithm),
    Collisions,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Timing(alg) => write!(f, "{alg}"),
            Field::Collisions => f.write_str("Collisions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Timing { algorithm: Algorithm, seconds: f64 },
    Collisions(u64),
}

impl Measurement {
    pub fn field(&self) -> Field {
        match self {
            Measurement::Timing { algorithm, .. } => Field::Timing(*algorithm),
            Measurement::Collisions(_) => Field::Collisions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLine {
    Blank,
    /// Start of a block for the given dataset size.
    Datasets(u64),
    Measurement(Measurement),
    /// Anything the log format does not define; ignored.
    Other,
}

/// Classify one line (without its '\n'). Dispatch is by prefix or first character,
/// in this order: blank, `Datasets`, tag digit 1-5, `Collisions`.
pub fn classify_line(line: &str) -> Result<LogLine, FormatError> {
    if line.trim().is_empty() {
        return Ok(LogLine::Blank);
    }

    if let Some(rest) = line.strip_prefix(DATASETS_TAG) {
        if !rest.contains(|c: char| c.is_ascii_digit()) {
            return Err(FormatError::MissingSize {
                text: line.to_string(),
            });
        }
        let size = SIZE_RE
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| FormatError::InvalidNumber {
                expected: "integer",
                value: rest.trim_end().to_string(),
            })?;
        return parse_int(size.as_str()).map(LogLine::Datasets);
    }

    if let Some(algorithm) = line.chars().next().and_then(Algorithm::from_tag) {
        let value = value_part(line)?;
        // nan/inf parse as f64 but have no JSON representation.
        let seconds = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or_else(|| FormatError::InvalidNumber {
                expected: "float",
                value: value.to_string(),
            })?;
        return Ok(LogLine::Measurement(Measurement::Timing { algorithm, seconds }));
    }

    if line.starts_with(COLLISIONS_TAG) {
        let count = parse_int(value_part(line)?)?;
        return Ok(LogLine::Measurement(Measurement::Collisions(count)));
    }

    Ok(LogLine::Other)
}

/// Everything after the first ": ". The label before it is discarded.
fn value_part(line: &str) -> Result<&str, FormatError> {
    line.split_once(SEPARATOR)
        .map(|(_, value)| value)
        .ok_or_else(|| FormatError::MissingSeparator {
            text: line.to_string(),
        })
}

fn parse_int(value: &str) -> Result<u64, FormatError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidNumber {
            expected: "integer",
            value: value.to_string(),
        })
}
