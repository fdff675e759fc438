//! Text codec modes and typed errors for the insertion pipeline

use std::path::{Path, PathBuf};

/// How file bytes are interpreted while reading.
///
/// The insertion pass itself works on raw bytes either way; the codec only
/// decides whether invalid UTF-8 is tolerated or rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// Treat files as raw byte sequences. Invalid UTF-8 passes through the
    /// read/write round trip bit-for-bit.
    #[default]
    Lossless,
    /// Require valid UTF-8; reading a file with invalid sequences fails with
    /// [`InsertError::InvalidUtf8`].
    Strict,
}

impl Codec {
    /// Read a whole file under this codec.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>, InsertError> {
        let data = std::fs::read(path).map_err(|source| InsertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if let Codec::Strict = self {
            if std::str::from_utf8(&data).is_err() {
                return Err(InsertError::InvalidUtf8 {
                    path: path.to_path_buf(),
                });
            }
        }

        Ok(data)
    }
}

/// Split file contents into lines, keeping each line's terminator.
///
/// The final line is yielded even without a trailing newline, so the
/// concatenation of all lines reproduces the input exactly.
pub fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split_inclusive(|&b| b == b'\n')
}

/// Error type for the insertion pipeline
#[derive(Debug)]
pub enum InsertError {
    /// Underlying I/O failure while reading or writing a file
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The strict codec rejected a file that is not valid UTF-8
    InvalidUtf8 { path: PathBuf },
    /// A directory-matching pattern could not be compiled
    BadPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

impl std::fmt::Display for InsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            InsertError::InvalidUtf8 { path } => {
                write!(f, "{} is not valid UTF-8", path.display())
            }
            InsertError::BadPattern { pattern, source } => {
                write!(f, "Invalid file pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InsertError::Io { source, .. } => Some(source),
            InsertError::InvalidUtf8 { .. } => None,
            InsertError::BadPattern { source, .. } => Some(source),
        }
    }
}
