// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Reachability tracing.

use super::bitmap::MarkBitmap;
use crate::heap::Heap;
use crate::value::Value;
use alloc::vec;

/// Mark every cell reachable from `root`.
///
/// Tracing keeps an explicit work-list of pending values instead of
/// recursing, so list depth is bounded by heap memory rather than the call
/// stack. Atoms and nil carry no liveness state and are skipped. A marked
/// index is never pushed again, which terminates tracing on shared and
/// cyclic structure alike: each live cell is visited exactly once.
pub(super) fn trace(heap: &Heap, root: Value, marks: &mut MarkBitmap) {
    let mut pending = vec![root];
    while let Some(value) = pending.pop() {
        if !value.is_pair() {
            continue;
        }
        let index = heap.index_of(value);
        if marks.is_set(index) {
            continue;
        }
        marks.set(index);
        let cell = heap.cell(index);
        pending.push(cell.first);
        pending.push(cell.rest);
    }
}
