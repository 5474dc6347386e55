// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Two-finger compaction and pointer fix-up.
//!
//! With `live` marked cells, compaction moves every live cell into the
//! region `[0, live)`: the `free` finger ascends from the bottom looking for
//! dead slots, the `scan` finger descends from the top looking for live
//! cells, and each meeting pair is a relocation. Cells already inside the
//! live region are never touched, so they keep their relative order.
//!
//! Relocations are recorded in a forwarding table keyed by the old dense
//! index. The vacated cells themselves are left as-is; stashing the new
//! address inside dead cell storage would alias relocation metadata over
//! untyped words, and the table keeps that bookkeeping out of the heap
//! entirely.

use super::bitmap::MarkBitmap;
use crate::heap::Heap;
use crate::types::CellIndex;
use crate::value::{Pair, Value};
use alloc::vec;
use alloc::vec::Vec;

/// Relocate all live cells above the compaction boundary into dead slots
/// below it.
///
/// Returns the forwarding table: entry `i` holds the new index of the cell
/// that lived at dense index `i`, for exactly the relocated cells.
pub(super) fn relocate(
    heap: &mut Heap,
    marks: &MarkBitmap,
    live: usize,
) -> Vec<Option<CellIndex>> {
    let mut forwarding: Vec<Option<CellIndex>> = vec![None; heap.capacity()];
    if live == 0 {
        return forwarding;
    }

    let mut free = 0;
    let mut scan = heap.capacity() - 1;
    while free < scan {
        // Cells already live at the low end are in final position.
        while free < scan && marks.is_set(CellIndex::new(free)) {
            free += 1;
        }
        // Dead slots at the high end are abandoned.
        while free < scan && !marks.is_set(CellIndex::new(scan)) {
            scan -= 1;
        }
        if free >= scan {
            break;
        }

        let from = CellIndex::new(scan);
        let to = CellIndex::new(free);
        let moved = *heap.cell(from);
        *heap.cell_mut(to) = moved;
        forwarding[scan] = Some(to);

        free += 1;
        scan -= 1;
    }
    forwarding
}

/// Rewrite every cons-pointer field in the compacted region that still
/// references a vacated slot.
pub(super) fn rewrite_fields(
    heap: &mut Heap,
    forwarding: &[Option<CellIndex>],
    live: usize,
) {
    for i in 0..live {
        let index = CellIndex::new(i);
        let cell = *heap.cell(index);
        let first = forwarded(heap, forwarding, live, cell.first);
        let rest = forwarded(heap, forwarding, live, cell.rest);
        *heap.cell_mut(index) = Pair::new(first, rest);
    }
}

/// Redirect a value through the forwarding table.
///
/// Atoms and pointers into the compacted region pass through unchanged; a
/// pointer above the boundary is replaced with the relocated cell's new
/// address.
///
/// # Panics
///
/// Panics if a pointer above the boundary has no forwarding entry: the
/// referenced cell was never marked, which means the field escaped tracing
/// (heap corruption).
pub(super) fn forwarded(
    heap: &Heap,
    forwarding: &[Option<CellIndex>],
    live: usize,
    value: Value,
) -> Value {
    if !value.is_pair() {
        return value;
    }
    let old = heap.index_of(value).as_usize();
    if old < live {
        return value;
    }
    match forwarding[old] {
        Some(new_index) => Value::pair_at(heap.addr_of(new_index)),
        None => panic!("surviving field references unmarked cell {old}"),
    }
}
