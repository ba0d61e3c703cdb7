// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable capture buffers.
//!
//! Each execution checks out two buffers (stdout and stderr). A checked-out
//! buffer is owned exclusively by its [`PooledBuffer`] guard and goes back to
//! the pool on drop, unless it grew past [`MAX_RETAINED_CAPACITY`].

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::Mutex;

/// Buffers whose capacity exceeds this are released instead of pooled.
pub const MAX_RETAINED_CAPACITY: usize = 256 * 1024;

/// Upper bound on idle buffers kept by the pool.
pub const MAX_POOLED_BUFFERS: usize = 64;

/// Thread-safe pool of byte buffers.
#[derive(Debug, Default)]
pub struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
}

impl BufferPool {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take an empty buffer, reusing an idle one when available.
    pub fn checkout(self: &Arc<Self>) -> PooledBuffer {
        let buf = self.idle.lock().pop().unwrap_or_default();
        PooledBuffer {
            buf,
            pool: Arc::clone(self),
        }
    }

    /// Number of idle buffers ready for reuse.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn give_back(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            tracing::trace!(capacity = buf.capacity(), "releasing oversize capture buffer");
            return;
        }
        buf.clear();
        let mut idle = self.idle.lock();
        if idle.len() < MAX_POOLED_BUFFERS {
            idle.push(buf);
        }
    }
}

/// A buffer on loan from a [`BufferPool`].
#[derive(Debug)]
pub struct PooledBuffer {
    buf: Vec<u8>,
    pool: Arc<BufferPool>,
}

impl PooledBuffer {
    /// Decode the contents as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl Deref for PooledBuffer {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        self.pool.give_back(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
