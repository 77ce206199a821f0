//! File reading utilities

use crate::error::{Result, SysdashError};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(SysdashError::from)
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Find the first line of a file starting with the given prefix.
///
/// `/etc/os-release` and `/proc/cpuinfo` are both keyed line formats, so the
/// probes share this scan.
pub fn find_line_with_prefix<P: AsRef<Path>>(path: P, prefix: &str) -> Result<String> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.starts_with(prefix) {
            return Ok(line.trim_end().to_string());
        }
    }
    Err(SysdashError::Detection(format!(
        "no line starting with '{}'",
        prefix
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_find_line_with_prefix() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "ID=arch").unwrap();
        writeln!(f, "NAME=\"Arch Linux\"").unwrap();
        let line = find_line_with_prefix(f.path(), "NAME=").unwrap();
        assert_eq!(line, "NAME=\"Arch Linux\"");
    }

    #[test]
    fn test_find_line_missing_prefix_is_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "ID=arch").unwrap();
        assert!(find_line_with_prefix(f.path(), "NAME=").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(read_file_safe("/nonexistent/sysdash-test").is_err());
        assert!(!file_exists("/nonexistent/sysdash-test"));
    }
}
