//! LIFO byte arena shared by the parser and the serializer.
//!
//! Bytes are pushed onto the top of the buffer and finalized by popping a
//! contiguous run back off. The underlying allocation only grows; the
//! number of outstanding (pushed but not yet popped) bytes must be zero
//! whenever no parse or stringify call is in progress.

use tracing::trace;

const INITIAL_SIZE: usize = 256;

/// Growable byte stack with explicit push/pop discipline.
#[derive(Debug, Default)]
pub struct ScratchBuffer {
    buf: Vec<u8>,
    top: usize,
}

impl ScratchBuffer {
    /// Create an empty buffer. No memory is allocated until the first push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding bytes.
    pub fn len(&self) -> usize {
        self.top
    }

    /// Returns true when nothing is pushed.
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Size of the underlying allocation.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Reserve `n` bytes at the top and return them for writing.
    ///
    /// Grows by half of the current size until the request fits.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        let needed = self.top + n;
        if needed > self.buf.len() {
            let mut size = self.buf.len().max(INITIAL_SIZE);
            while size < needed {
                size += size >> 1;
            }
            trace!(from = self.buf.len(), to = size, "scratch buffer grow");
            self.buf.resize(size, 0);
        }
        let start = self.top;
        self.top = needed;
        &mut self.buf[start..needed]
    }

    /// Push a single byte.
    pub fn push_byte(&mut self, b: u8) {
        self.push(1)[0] = b;
    }

    /// Push a run of bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.push(bytes.len()).copy_from_slice(bytes);
        }
    }

    /// Release the `n` bytes directly below the top and return them.
    ///
    /// The returned slice stays valid until the buffer is pushed again.
    pub fn pop(&mut self, n: usize) -> &[u8] {
        assert!(
            n <= self.top,
            "scratch pop of {n} bytes with only {} outstanding",
            self.top
        );
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Drop everything above `mark`, discarding partial writes.
    pub fn rewind(&mut self, mark: usize) {
        debug_assert!(mark <= self.top);
        self.top = mark.min(self.top);
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        // A non-zero top means a parse or stringify leaked partial output.
        if !std::thread::panicking() {
            assert_eq!(self.top, 0, "scratch buffer dropped with outstanding bytes");
        }
    }
}
