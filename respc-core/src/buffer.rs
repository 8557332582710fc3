//! The dynamic-buffer contract (spec.md §3, §6) and its one concrete
//! implementation.
//!
//! The parser and serializer are written only against [`DynamicBuffer`];
//! a caller is free to supply their own implementation as long as it
//! honors the same `data`/`prepare`/`commit`/`consume` contract.

/// A growable byte region with a readable region and a writable region.
///
/// - `data()` exposes the currently readable bytes.
/// - `prepare(n)` returns at least `n` writable bytes, growing the
///   underlying storage if necessary.
/// - `commit(n)` moves `n` bytes from the writable region into the
///   readable region (the caller has just written them via `prepare`).
/// - `consume(n)` discards `n` bytes from the front of the readable
///   region.
pub trait DynamicBuffer {
    /// The currently readable bytes.
    fn data(&self) -> &[u8];

    /// Reserves and returns at least `n` writable bytes.
    fn prepare(&mut self, n: usize) -> &mut [u8];

    /// Moves `n` bytes from the writable region into the readable region.
    fn commit(&mut self, n: usize);

    /// Discards `n` bytes from the front of the readable region.
    fn consume(&mut self, n: usize);

    /// Number of currently readable bytes.
    fn size(&self) -> usize {
        self.data().len()
    }
}

/// The default [`DynamicBuffer`], backed by [`bytes::BytesMut`].
///
/// `prepare` reserves spare capacity via [`bytes::BytesMut::reserve`] and
/// hands back a `&mut [u8]` over the (still-uninitialized, but zeroed on
/// first grow) tail; `commit` advances the buffer's length; `consume`
/// calls [`bytes::BytesMut::advance`].
#[derive(Debug, Default)]
pub struct GrowableBuffer {
    inner: bytes::BytesMut,
    // Length of `inner` that is "committed" (readable). Bytes in
    // `inner[committed..]` are writable space already reserved by a
    // prior `prepare`, not yet committed.
    committed: usize,
}

impl GrowableBuffer {
    /// Creates an empty buffer with at least `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: bytes::BytesMut::with_capacity(capacity),
            committed: 0,
        }
    }
}

impl DynamicBuffer for GrowableBuffer {
    fn data(&self) -> &[u8] {
        &self.inner[..self.committed]
    }

    fn prepare(&mut self, n: usize) -> &mut [u8] {
        let have = self.inner.len() - self.committed;
        if have < n {
            self.inner.resize(self.committed + n, 0);
        }
        &mut self.inner[self.committed..self.committed + n]
    }

    fn commit(&mut self, n: usize) {
        self.committed = (self.committed + n).min(self.inner.len());
    }

    fn consume(&mut self, n: usize) {
        let n = n.min(self.committed);
        let _ = self.inner.split_to(n);
        self.committed -= n;
    }
}
