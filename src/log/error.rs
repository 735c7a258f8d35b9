use crate::log::Field;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a benchmark log into a Dataset. Always fatal for the run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read benchmark log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("benchmark log format error at line {line}: {kind}")]
    Format { line: usize, kind: FormatError },
}

impl ParseError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(line: usize, kind: FormatError) -> Self {
        Self::Format { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    // Line shape
    #[error("missing \": \" separator in {text:?}")]
    MissingSeparator { text: String },

    #[error("expected {expected} value, found {value:?}")]
    InvalidNumber {
        expected: &'static str,
        value: String,
    },

    #[error("no dataset size after \"Datasets\" in {text:?}")]
    MissingSize { text: String },

    // Block structure
    #[error("{field} measurement appears before any \"Datasets\" line")]
    OrphanMeasurement { field: Field },

    #[error("duplicate {field} measurement in block for size {size}")]
    DuplicateField { size: u64, field: Field },

    #[error("block for size {size} is missing {}", join_fields(.missing))]
    IncompleteBlock { size: u64, missing: Vec<Field> },
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
