// crates/engine/src/processor.rs
use crate::error::{EngineError, Result};
use memchr::memchr2_iter;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the physical lines of the file at `path`.
///
/// `\n`, `\r\n` and a lone `\r` each end a line; a trailing line without a
/// terminator still counts. The content must decode as UTF-8.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read and
/// [`EngineError::InvalidEncoding`] if it is not valid UTF-8.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    count_lines_from(&mut reader).map_err(|err| err.with_path(path))
}

/// Streaming variant of [`count_lines`] over any buffered reader.
///
/// # Errors
/// Same as [`count_lines`]; the reported path is empty.
pub fn count_lines_from<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut counter = LineCounter::default();
    loop {
        let buf = reader.fill_buf().map_err(|source| EngineError::FileRead {
            path: Default::default(),
            source,
        })?;
        if buf.is_empty() {
            break;
        }
        counter.feed(buf).map_err(invalid_encoding)?;
        let len = buf.len();
        reader.consume(len);
    }
    counter.finish().map_err(invalid_encoding)
}

fn invalid_encoding(offset: u64) -> EngineError {
    EngineError::InvalidEncoding {
        path: Default::default(),
        offset,
    }
}

impl EngineError {
    fn with_path(self, path: &Path) -> Self {
        match self {
            Self::FileRead { source, .. } => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            Self::InvalidEncoding { offset, .. } => Self::InvalidEncoding {
                path: path.to_path_buf(),
                offset,
            },
            other => other,
        }
    }
}

/// Incremental physical-line counter with UTF-8 validation.
///
/// Chunks may split multi-byte sequences and `\r\n` pairs arbitrarily.
#[derive(Debug, Default)]
pub struct LineCounter {
    terminators: usize,
    last: Option<u8>,
    carry: Vec<u8>,
    consumed: u64,
}

impl LineCounter {
    /// Feed the next chunk. On invalid UTF-8 returns the byte offset of the
    /// first offending byte.
    ///
    /// # Errors
    /// Returns the absolute offset of the invalid sequence.
    pub fn feed(&mut self, chunk: &[u8]) -> std::result::Result<(), u64> {
        if self.carry.is_empty() {
            let valid = self.validate(chunk)?;
            self.scan(&chunk[..valid]);
            self.carry.extend_from_slice(&chunk[valid..]);
        } else {
            let mut joined = std::mem::take(&mut self.carry);
            joined.extend_from_slice(chunk);
            let valid = self.validate(&joined)?;
            self.scan(&joined[..valid]);
            self.carry.extend_from_slice(&joined[valid..]);
        }
        Ok(())
    }

    /// Total line count once all input has been fed.
    ///
    /// # Errors
    /// Returns the offset of a multi-byte sequence truncated by end of input.
    pub fn finish(self) -> std::result::Result<usize, u64> {
        if !self.carry.is_empty() {
            return Err(self.consumed);
        }
        // 末尾に改行がない場合の行カウント補正
        let open_line = self.last.is_some_and(|b| b != b'\n' && b != b'\r');
        Ok(self.terminators + usize::from(open_line))
    }

    /// Length of the prefix of `data` that is complete, valid UTF-8.
    fn validate(&self, data: &[u8]) -> std::result::Result<usize, u64> {
        match std::str::from_utf8(data) {
            Ok(_) => Ok(data.len()),
            Err(err) if err.error_len().is_none() => Ok(err.valid_up_to()),
            Err(err) => Err(self.consumed + err.valid_up_to() as u64),
        }
    }

    fn scan(&mut self, bytes: &[u8]) {
        for pos in memchr2_iter(b'\n', b'\r', bytes) {
            if bytes[pos] == b'\r' {
                self.terminators += 1;
                continue;
            }
            let prev = if pos == 0 { self.last } else { Some(bytes[pos - 1]) };
            if prev != Some(b'\r') {
                self.terminators += 1;
            }
        }
        if let Some(&b) = bytes.last() {
            self.last = Some(b);
        }
        self.consumed += bytes.len() as u64;
    }
}
