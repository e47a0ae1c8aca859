//! Reusable lexeme buffers.
//!
//! Splitting a name allocates a `Vec<Lexeme>`; under repeated conversions
//! (code generators mangle thousands of names) that allocation dominates.
//! The pool keeps a bounded LIFO stack of cleared buffers and hands them
//! back out, trading a small amount of retained memory for allocation
//! churn.

use std::cell::RefCell;

use crate::lexeme::Lexeme;

/// Bounded pool of reusable `Vec<Lexeme>` buffers.
///
/// Buffers are cleared on release, so an acquired buffer is always empty.
/// Returning more buffers than `max_size` drops the excess.
#[derive(Debug)]
pub struct LexemePool {
    buffers: Vec<Vec<Lexeme>>,
    max_size: usize,
    acquisitions: usize,
    reuses: usize,
}

impl LexemePool {
    /// Create a pool retaining at most `max_size` buffers.
    pub fn new(max_size: usize) -> Self {
        Self {
            buffers: Vec::with_capacity(max_size.min(16)),
            max_size,
            acquisitions: 0,
            reuses: 0,
        }
    }

    /// Pre-populate the pool with `count` empty buffers.
    pub fn prewarm(&mut self, count: usize) {
        let target = count.min(self.max_size);
        while self.buffers.len() < target {
            self.buffers.push(Vec::new());
        }
    }

    /// Take a buffer from the pool, or allocate a fresh one.
    pub fn acquire(&mut self) -> Vec<Lexeme> {
        self.acquisitions += 1;
        match self.buffers.pop() {
            Some(buffer) => {
                self.reuses += 1;
                buffer
            }
            None => Vec::new(),
        }
    }

    /// Return a buffer to the pool. The buffer is cleared first.
    pub fn release(&mut self, mut buffer: Vec<Lexeme>) {
        if self.buffers.len() < self.max_size {
            buffer.clear();
            self.buffers.push(buffer);
        }
    }

    /// Buffers currently held.
    pub fn size(&self) -> usize {
        self.buffers.len()
    }

    /// `(total acquisitions, satisfied from the pool)`.
    pub fn stats(&self) -> (usize, usize) {
        (self.acquisitions, self.reuses)
    }
}

impl Default for LexemePool {
    fn default() -> Self {
        Self::new(32)
    }
}

thread_local! {
    static POOL: RefCell<LexemePool> = RefCell::new(LexemePool::default());
}

/// Run `f` with a pooled buffer, returning the buffer afterwards.
pub(crate) fn with_buffer<R>(f: impl FnOnce(&mut Vec<Lexeme>) -> R) -> R {
    POOL.with(|pool| {
        let mut buffer = pool.borrow_mut().acquire();
        let result = f(&mut buffer);
        pool.borrow_mut().release(buffer);
        result
    })
}
