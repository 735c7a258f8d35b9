use crate::log::{BlockBuilder, BlockRecord, FormatError, LogLine, ParseError, classify_line};
use crate::model::Dataset;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse a benchmark timing log file into a Dataset.
///
/// Expected shape, one block per dataset size:
///
/// ```text
/// Datasets100:
/// 1. Linear search time: 0.001
/// 2. Binary search tree time: 0.0005
/// 3. RB Tree search time: 0.0004
/// 4. HASH search time: 0.0002
/// Collisions: 3
/// 5. Multimap time: 0.0003
/// ```
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ParseError::io(path, e))?;
    let dataset = parse_log_str(&text)?;
    debug!(path = %path.display(), blocks = dataset.len(), "parsed benchmark log");
    Ok(dataset)
}

pub fn parse_log_str(text: &str) -> Result<Dataset, ParseError> {
    parse_blocks(text).map(|blocks| Dataset::from_blocks(&blocks))
}

/// Parse the log into complete blocks, in input order.
///
/// A `Datasets` line opens a block, the next one (or end of input) closes it.
pub fn parse_blocks(text: &str) -> Result<Vec<BlockRecord>, ParseError> {
    let mut blocks = Vec::new();
    // Open block and the line number of its `Datasets` line.
    let mut current: Option<(usize, BlockBuilder)> = None;

    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        match classify_line(line).map_err(|e| ParseError::format(lno, e))? {
            LogLine::Blank | LogLine::Other => {}
            LogLine::Datasets(size) => {
                if let Some((start, open)) = current.replace((lno, BlockBuilder::new(size))) {
                    blocks.push(close_block(start, open)?);
                }
            }
            LogLine::Measurement(m) => {
                let (_, open) = current.as_mut().ok_or_else(|| {
                    ParseError::format(lno, FormatError::OrphanMeasurement { field: m.field() })
                })?;
                open.record(m).map_err(|e| ParseError::format(lno, e))?;
            }
        }
    }

    if let Some((start, open)) = current {
        blocks.push(close_block(start, open)?);
    }

    Ok(blocks)
}

fn close_block(start: usize, open: BlockBuilder) -> Result<BlockRecord, ParseError> {
    let size = open.size();
    let block = open.finish().map_err(|e| ParseError::format(start, e))?;
    debug!(line = start, size, "closed block");
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Field;
    use crate::model::Algorithm;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const HARNESS_LOG: &str = "\
Datasets100:
1. Linear search time: 0.001
2. Binary search tree time: 0.0005
3. RB Tree search time: 0.0004
4. HASH search time: 0.0002
Collisions: 3
5. Multimap time: 0.0003


Datasets200:
1. Linear search time: 0.002
2. Binary search tree time: 0.0006
3. RB Tree search time: 0.0005
4. HASH search time: 0.0002
Collisions: 11
5. Multimap time: 0.0004


Datasets500:
1. Linear search time: 0.005
2. Binary search tree time: 0.0008
3. RB Tree search time: 0.0006
4. HASH search time: 0.0003
Collisions: 31
5. Multimap time: 0.0005
";

    fn format_error(err: ParseError) -> (usize, FormatError) {
        match err {
            ParseError::Format { line, kind } => (line, kind),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn single_block_end_to_end() {
        let text = "Datasets100\r\n\
                    1: 0.001\n2: 0.0005\n3: 0.0004\n4: 0.0002\n5: 0.0003\nCollisions: 3\n";
        let ds = parse_log_str(text).unwrap();

        assert_eq!(ds.sizes(), &[100]);
        assert_eq!(ds.timings(Algorithm::LinearSearch), &[0.001]);
        assert_eq!(ds.timings(Algorithm::BinarySearchTree), &[0.0005]);
        assert_eq!(ds.timings(Algorithm::RbTree), &[0.0004]);
        assert_eq!(ds.timings(Algorithm::HashTable), &[0.0002]);
        assert_eq!(ds.timings(Algorithm::Multimap), &[0.0003]);
        assert_eq!(ds.collisions(), &[3]);
    }

    #[test]
    fn every_series_has_one_entry_per_block() {
        let ds = parse_log_str(HARNESS_LOG).unwrap();
        assert_eq!(ds.len(), 3);
        for name in crate::model::SERIES_NAMES {
            assert_eq!(ds.series(name).map(|s| s.len()), Some(3), "series {name}");
        }
        assert_eq!(ds.collisions(), &[3, 11, 31]);
        assert_eq!(ds.timings(Algorithm::LinearSearch), &[0.001, 0.002, 0.005]);
    }

    #[test]
    fn sizes_keep_input_order() {
        let text = HARNESS_LOG
            .replace("Datasets100:", "Datasets900:")
            .replace("Datasets500:", "Datasets900:");
        let ds = parse_log_str(&text).unwrap();
        assert_eq!(ds.sizes(), &[900, 200, 900]);
    }

    #[test]
    fn parsing_is_repeatable() {
        assert_eq!(parse_log_str(HARNESS_LOG).unwrap(), parse_log_str(HARNESS_LOG).unwrap());
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        for text in ["", "\n\n", "# nothing here\n"] {
            let ds = parse_log_str(text).unwrap();
            assert!(ds.is_empty());
            for name in crate::model::SERIES_NAMES {
                assert_eq!(ds.series(name).map(|s| s.len()), Some(0));
            }
        }
    }

    #[test]
    fn unrecognised_lines_are_skipped() {
        let text = HARNESS_LOG.replace(
            "Collisions: 3\n",
            "Collisions: 3\n# comment\n6: 1.0\n0: 2.0\n",
        );
        assert_eq!(parse_log_str(&text).unwrap(), parse_log_str(HARNESS_LOG).unwrap());
    }

    #[test]
    fn nan_timing_fails() {
        let text = HARNESS_LOG.replace("5. Multimap time: 0.0003", "5. Multimap time: nan");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 7);
        assert!(matches!(kind, FormatError::InvalidNumber { expected: "float", .. }));
    }

    #[test]
    fn malformed_value_fails_with_line_number() {
        let text = HARNESS_LOG.replace("3. RB Tree search time: 0.0005", "3: abc");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 13);
        assert_eq!(
            kind,
            FormatError::InvalidNumber {
                expected: "float",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn collisions_without_separator_fails() {
        let text = HARNESS_LOG.replace("Collisions: 11", "Collisions abc");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 15);
        assert!(matches!(kind, FormatError::MissingSeparator { .. }));
    }

    #[test]
    fn measurement_before_first_block_fails() {
        let (line, kind) = format_error(parse_log_str("\n1: 0.5\nDatasets10:\n").unwrap_err());
        assert_eq!(line, 2);
        assert_eq!(
            kind,
            FormatError::OrphanMeasurement {
                field: Field::Timing(Algorithm::LinearSearch)
            }
        );
    }

    #[test]
    fn truncated_trailing_block_fails() {
        let text = format!("{HARNESS_LOG}\nDatasets1000:\n1. Linear search time: 0.01\n");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 27);
        assert!(matches!(kind, FormatError::IncompleteBlock { size: 1000, .. }));
    }

    #[test]
    fn block_missing_a_measurement_fails_at_its_header() {
        let text = HARNESS_LOG.replace("4. HASH search time: 0.0002\nCollisions: 11\n", "");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 10);
        assert_eq!(
            kind,
            FormatError::IncompleteBlock {
                size: 200,
                missing: vec![Field::Timing(Algorithm::HashTable), Field::Collisions],
            }
        );
    }

    #[test]
    fn repeated_measurement_fails() {
        let text = HARNESS_LOG.replace("Collisions: 31\n", "Collisions: 31\nCollisions: 32\n");
        let (line, kind) = format_error(parse_log_str(&text).unwrap_err());
        assert_eq!(line, 25);
        assert_eq!(
            kind,
            FormatError::DuplicateField {
                size: 500,
                field: Field::Collisions
            }
        );
    }

    #[test]
    fn blocks_carry_named_fields() {
        let blocks = parse_blocks(HARNESS_LOG).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].size, 200);
        assert_eq!(blocks[1].bst, 0.0006);
        assert_eq!(blocks[1].collisions, 11);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HARNESS_LOG.as_bytes()).unwrap();

        let ds = parse_log_file(file.path()).unwrap();
        assert_eq!(ds.sizes(), &[100, 200, 500]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_log_file(dir.path().join("info_time.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn non_utf8_file_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Datasets100:
1: \xFF\xFE0.001
").unwrap();

        let err = parse_log_file(file.path()).unwrap_err();
        match err {
            ParseError::Io { path, source } => {
                assert_eq!(path, file.path());
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
