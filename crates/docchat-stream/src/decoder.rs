//! Line framing over an arbitrarily chunked byte stream.
//!
//! Splitting happens on raw bytes: `\n` never occurs inside a multi-byte
//! UTF-8 sequence, so a character cut in half by a chunk boundary simply
//! stays in the pending buffer until the rest of it arrives. Text decoding
//! is only applied to lines that are known to be complete.

/// Incremental line splitter holding the bytes of the unfinished last line
#[derive(Debug, Default)]
pub struct LineDecoder {
    pending: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return every line it completes, without the `\n`
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let scanned = self.pending.len();
        self.pending.extend_from_slice(chunk);

        // Older bytes were already searched when they arrived
        let Some(offset) = chunk.iter().rposition(|b| *b == b'\n') else {
            return Vec::new();
        };
        let last_newline = scanned + offset;

        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);

        complete[..last_newline]
            .split(|b| *b == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    /// Flush the remainder at end of stream; blank remainders are dropped
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.pending);
        let line = String::from_utf8_lossy(&rest).into_owned();
        if line.trim().is_empty() {
            None
        } else {
            Some(line)
        }
    }

    /// Bytes held back waiting for a newline
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
