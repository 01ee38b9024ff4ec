use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{ImportError, SampleSet};

/// Samples accepted from a delimited text source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    /// Accepted rows, indexed `1..=n` in file order.
    pub samples: SampleSet,
    /// Non-blank lines that did not yield a sample.
    pub skipped_lines: usize,
}

/// Parses one line into an `(x, y)` pair.
///
/// The line is split on commas; when that yields fewer than two non-empty
/// fields, it is split on tabs instead. The first two fields must both parse
/// as finite numbers, further fields are ignored.
#[must_use]
pub fn parse_line(line: &str) -> Option<(f64, f64)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = split_fields(line, ',');
    if fields.len() < 2 {
        fields = split_fields(line, '\t');
    }
    let [x, y, ..] = fields.as_slice() else {
        return None;
    };

    let x = x.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let y = y.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((x, y))
}

fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect()
}

/// Reads delimited samples from `reader`.
///
/// Blank lines are ignored and malformed lines are counted in
/// [`ImportOutcome::skipped_lines`]; neither aborts the import.
pub fn parse_samples<R>(reader: R) -> std::io::Result<ImportOutcome>
where
    R: BufRead,
{
    let mut outcome = ImportOutcome::default();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some((x, y)) => outcome.samples.push_pair(x, y),
            None => {
                log::debug!("skipping malformed sample line: {line:?}");
                outcome.skipped_lines += 1;
            }
        }
    }
    Ok(outcome)
}

/// Reads delimited samples from the file at `path`.
///
/// The file is read completely before anything is returned, so a failure
/// never yields a partial sample set.
pub fn import_file<P>(path: P) -> Result<ImportOutcome, ImportError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_owned(),
        source,
    })?;
    let outcome = parse_samples(BufReader::new(file)).map_err(|source| ImportError::Read {
        path: path.to_owned(),
        source,
    })?;
    log::info!(
        "imported {} samples from {} ({} lines skipped)",
        outcome.samples.len(),
        path.display(),
        outcome.skipped_lines
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write as _};

    use super::*;
    use crate::Sample;

    #[test]
    fn test_mixed_fixture_accepts_two_rows() {
        let input = "1.0,2.0\n,\nbad,line\n3.0\t4.0\n";
        let outcome = parse_samples(Cursor::new(input)).unwrap();

        assert_eq!(
            outcome.samples.as_slice(),
            &[Sample::new(1, 1.0, 2.0), Sample::new(2, 3.0, 4.0)]
        );
        assert_eq!(outcome.skipped_lines, 2);
    }

    #[test]
    fn test_blank_lines_are_not_counted_as_skipped() {
        let input = "\n   \n0.1,0.2\n\r\n\t\n";
        let outcome = parse_samples(Cursor::new(input)).unwrap();
        assert_eq!(outcome.samples.len(), 1);
        assert_eq!(outcome.skipped_lines, 0);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        assert_eq!(parse_line("0.5, -0.25, label, 9"), Some((0.5, -0.25)));
        assert_eq!(parse_line("0.5\t-0.25\tcomment"), Some((0.5, -0.25)));
    }

    #[test]
    fn test_empty_fields_are_dropped_before_indexing() {
        assert_eq!(parse_line(",,1.5,,2.5"), Some((1.5, 2.5)));
    }

    #[test]
    fn test_single_field_is_rejected() {
        assert_eq!(parse_line("1.0"), None);
        assert_eq!(parse_line("1.0,"), None);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert_eq!(parse_line("NaN,1.0"), None);
        assert_eq!(parse_line("1.0,inf"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let outcome = parse_samples(Cursor::new("1,2\r\n3,4\r\n")).unwrap();
        assert_eq!(outcome.samples.xs(), vec![1.0, 3.0]);
        assert_eq!(outcome.samples.ys(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_indices_only_count_accepted_rows() {
        let input = "header_x,header_y\n0.1,0.2\noops\n0.3,0.4\n";
        let outcome = parse_samples(Cursor::new(input)).unwrap();
        let indices = outcome.samples.iter().map(|s| s.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(outcome.skipped_lines, 2);
    }

    #[test]
    fn test_import_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.001,0.002").unwrap();
        writeln!(file, "-0.001\t-0.002").unwrap();
        file.flush().unwrap();

        let outcome = import_file(file.path()).unwrap();
        assert_eq!(outcome.samples.len(), 2);
        assert_eq!(outcome.samples[1], Sample::new(2, -0.001, -0.002));
    }

    #[test]
    fn test_import_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let err = import_file(&missing).unwrap_err();
        assert!(err.is_open());
        assert!(err.to_string().contains("missing.csv"));
    }
}
