//! Reading lists of networks from text files.
//!
//! Every line holds one entry. Anything after a `;` or a `#` is a comment, surrounding whitespace
//! is ignored, and blank lines are skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, info};

use crate::{
    error::{Error, Result},
    prefix::encode,
    Bits,
};

/// Remove the comment from a line, and trim the remaining text. The part starting at the first
/// `;` is removed first, then the part starting at the first `#`.
///
/// ```
/// # use ip_cover_trie::source::strip_comment;
/// assert_eq!(strip_comment("  10.0.0.0/8 ; private # network"), "10.0.0.0/8");
/// assert_eq!(strip_comment("# 10.0.0.0/8"), "");
/// ```
pub fn strip_comment(line: &str) -> &str {
    let line = line.split(';').next().unwrap_or_default();
    line.split('#').next().unwrap_or_default().trim()
}

/// An iterator over the non-blank lines of a reader, with comments removed. Yields the 1-based
/// line number together with the text.
pub struct Lines<R> {
    inner: std::io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> Lines<R> {
    /// Create a new iterator over the entries of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            lineno: 0,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.inner.by_ref() {
            self.lineno += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let entry = strip_comment(&line);
            if !entry.is_empty() {
                return Some(Ok((self.lineno, entry.to_string())));
            }
        }
        None
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parse all networks from a reader. The first line that is not a valid IPv4 network or address
/// aborts with [`Error::InvalidAddress`].
pub fn parse_networks<R: BufRead>(reader: R) -> Result<Vec<Bits>> {
    Lines::new(reader)
        .map(|line| {
            let (lineno, text) = line?;
            encode(&text).map_err(|e| e.at_line(lineno))
        })
        .collect()
}

/// Read all networks from a file. See [`parse_networks`]. A file that cannot be opened or read
/// results in [`Error::SourceUnavailable`].
pub fn read_networks(path: impl AsRef<Path>) -> Result<Vec<Bits>> {
    let path = path.as_ref();
    let networks = parse_networks(open(path)?).map_err(|e| e.in_file(path))?;
    info!("read {} networks from {}", networks.len(), path.display());
    Ok(networks)
}

/// Read all entries of a plain list, using the same comment rules as for networks.
pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let entries = Lines::new(open(path)?)
        .map(|line| line.map(|(_, text)| text))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.in_file(path))?;
    debug!("read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
