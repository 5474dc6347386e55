// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Stop-the-world mark-and-compact garbage collection.
//!
//! A collection runs in four steps over the heap's dense index space:
//!
//! 1. Allocate a fresh [`MarkBitmap`] sized to the heap's capacity.
//! 2. Trace reachability from the root into the bitmap.
//! 3. Relocate live cells toward the low indices with the classic
//!    two-finger pass, recording every move in a forwarding table, then
//!    rewrite all surviving cons-pointer fields through that table.
//! 4. Rewind the allocation cursor to the end of the compacted region so
//!    reclaimed slots are handed out again.
//!
//! The mutator is fully suspended for the whole pass: no barriers, no
//! incremental work, no cancellation. The possibly-relocated root is
//! returned and **must** be adopted by the caller; the collector cannot
//! rewrite external references it was never given.

#[cfg(test)]
mod compact_test;

mod bitmap;
mod compact;
mod mark;

pub use bitmap::MarkBitmap;

use crate::heap::Heap;
use crate::value::Value;

impl Heap {
    /// Collect all cells unreachable from `root` and compact the survivors.
    ///
    /// Returns the possibly-relocated root. The caller must replace its held
    /// root reference with the return value; any other externally-held
    /// pointer into the heap is dangling after this call.
    ///
    /// Calling collect twice without intervening allocation is a no-op on
    /// the second call: everything reachable is already compacted.
    ///
    /// # Panics
    ///
    /// Panics if the heap has no pages yet (collecting before any
    /// allocation is a caller error), or if tracing encounters a pointer
    /// that resolves to no heap page (corruption).
    pub fn collect(&mut self, root: Value) -> Value {
        assert!(
            self.capacity() > 0,
            "collect called before any allocation"
        );
        let mut marks = MarkBitmap::new(self.capacity());
        mark::trace(self, root, &mut marks);
        let live = marks.count();
        let forwarding = compact::relocate(self, &marks, live);
        compact::rewrite_fields(self, &forwarding, live);
        let new_root = compact::forwarded(self, &forwarding, live, root);
        self.truncate_allocations(live);
        new_root
    }
}
