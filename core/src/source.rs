//! Reading text into line sequences.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not open file: {} for reading", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Open { path, .. } | SourceError::Read { path, .. } => path,
        }
    }
}

/// Splits `reader` into lines.
///
/// Lines end at `\n`, and one trailing `\r` is dropped. A trailing newline
/// does not start an extra empty line. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

pub fn read_lines_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_lines(BufReader::new(file)).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines = lines.len(), "read line source");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let lines = read_lines(Cursor::new("a\nb\n")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let lines = read_lines(Cursor::new("a\nb")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn crlf_is_stripped() {
        let lines = read_lines(Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(read_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_preserved() {
        let lines = read_lines(Cursor::new("\n\nx\n")).unwrap();
        assert_eq!(lines, vec!["", "", "x"]);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let lines = read_lines(Cursor::new(b"ok\n\xff\n".to_vec())).unwrap();
        assert_eq!(lines[0], "ok");
        assert_eq!(lines[1], "\u{fffd}");
    }

    #[test]
    fn missing_file_reports_open_error_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.txt");
        let err = read_lines_from_path(&missing).unwrap_err();
        assert!(matches!(err, SourceError::Open { .. }));
        assert_eq!(err.path(), missing.as_path());
        let message = err.to_string();
        assert!(message.starts_with("Could not open file: "), "{message}");
        assert!(message.contains("nope.txt"), "{message}");
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lines.txt");
        std::fs::write(&path, "one\ntwo\n").expect("write fixture");
        assert_eq!(read_lines_from_path(&path).unwrap(), vec!["one", "two"]);
    }
}
