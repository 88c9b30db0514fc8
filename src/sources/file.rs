//! Plain-text file and stdin sources.

use std::io::Read;
use std::path::Path;

use crate::sources::error::SourceError;

/// Read a plain-text file.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn read_text_file(path: &Path) -> Result<String, SourceError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Read all of standard input.
///
/// # Errors
/// Returns an error if stdin cannot be read as UTF-8 text.
pub fn read_stdin() -> Result<String, SourceError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let outcome = read_text_file(Path::new("/definitely/not/a/real/file.txt"));
        assert!(matches!(outcome, Err(SourceError::Io(_))));
    }
}
