use anyhow::{Context, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::warn;

/// Default refill buffer size. A performance knob, not a correctness one.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Pull-based byte source over any `Read`, backed by a fixed-size buffer.
///
/// Bytes come back in source order, one at a time; the buffer is refilled
/// only when exhausted, so no byte is skipped or duplicated across a refill
/// boundary. Once end of stream has been signaled, `next` keeps returning
/// `None`.
pub struct ByteReader<R: Read> {
    source: R,
    buffer: Vec<u8>,
    pos: usize,
    filled: usize,
    eof: bool,
}

impl ByteReader<File> {
    /// Open a file for scanning. The handle is released when the reader is
    /// dropped.
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("Cannot open input file {:?}", path))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> ByteReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, DEFAULT_BUFFER_SIZE)
    }

    /// Capacity below 1 is clamped. Small capacities force refill boundaries
    /// mid-token; tests use this.
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        ByteReader {
            source,
            buffer: vec![0; capacity.max(1)],
            pos: 0,
            filled: 0,
            eof: false,
        }
    }

    /// The next byte of the stream, or `None` once the source is exhausted.
    ///
    /// A zero-byte refill marks the stream permanently exhausted. A mid-read
    /// I/O error is treated the same way: the scan sees end of stream, not a
    /// retry.
    pub fn next(&mut self) -> Option<u8> {
        if self.pos < self.filled {
            let byte = self.buffer[self.pos];
            self.pos += 1;
            return Some(byte);
        }

        if self.eof {
            return None;
        }

        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => {
                    self.eof = true;
                    return None;
                }
                Ok(n) => {
                    self.filled = n;
                    self.pos = 1;
                    return Some(self.buffer[0]);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(action = "read", component = "byte_reader", error = %e, "Input read failed, treating as end of stream");
                    self.eof = true;
                    return None;
                }
            }
        }
    }
}
