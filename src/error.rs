//! Error types

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that read or parse networks.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading and parsing a list of networks. All of them are fatal for
/// the batch: no partial trie is ever returned.
#[derive(Error, Debug)]
pub enum Error {
    /// The text is neither an IPv4 address nor an IPv4 CIDR block.
    #[error("{}invalid IPv4 address or network: {input:?}", .line.map(|l| format!("line {l}: ")).unwrap_or_default())]
    InvalidAddress {
        /// The offending text, after comment stripping and trimming.
        input: String,
        /// The 1-based line number, if the text was read from a file.
        line: Option<usize>,
    },

    /// The input file could not be opened or read, e.g., because it is missing, is a directory,
    /// or is not valid UTF-8.
    #[error("cannot read {}", .path.display())]
    SourceUnavailable {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Reading from a reader that is not backed by a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Attach a line number to an [`Error::InvalidAddress`]. Other errors are returned unchanged.
    pub(crate) fn at_line(self, lineno: usize) -> Self {
        match self {
            Error::InvalidAddress { input, .. } => Error::InvalidAddress {
                input,
                line: Some(lineno),
            },
            e => e,
        }
    }

    /// Turn a read failure into an [`Error::SourceUnavailable`] for the file at `path`. Other
    /// errors are returned unchanged.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            Error::Io(source) => Error::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            },
            e => e,
        }
    }
}
