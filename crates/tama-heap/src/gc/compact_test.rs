// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for two-finger relocation and pointer fix-up.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::bitmap::MarkBitmap;
use super::compact::{forwarded, relocate, rewrite_fields};
use super::mark::trace;
use crate::heap::Heap;
use crate::types::CellIndex;
use crate::value::Value;

/// Allocate `n` dead cells nobody references.
fn litter(heap: &mut Heap, n: usize) {
    for _ in 0..n {
        let _ = heap.alloc_pair(Value::int(-1), Value::nil());
    }
}

#[test]
fn relocates_high_live_cells_into_low_dead_slots() {
    let mut heap = Heap::new();
    litter(&mut heap, 5);
    let root = heap.alloc_pair(Value::int(42), Value::nil());
    let old_index = heap.index_of(root).as_usize();
    assert_eq!(old_index, 5);

    let mut marks = MarkBitmap::new(heap.capacity());
    trace(&heap, root, &mut marks);
    let live = marks.count();
    assert_eq!(live, 1);

    let forwarding = relocate(&mut heap, &marks, live);
    assert_eq!(forwarding[old_index], Some(CellIndex::new(0)));
    assert_eq!(heap.cell(CellIndex::new(0)).first.as_int(), 42);
}

#[test]
fn cells_in_final_position_are_untouched() {
    let mut heap = Heap::new();
    let tail = heap.alloc_pair(Value::int(2), Value::nil());
    let root = heap.alloc_pair(Value::int(1), tail);
    litter(&mut heap, 5);

    let mut marks = MarkBitmap::new(heap.capacity());
    trace(&heap, root, &mut marks);
    let live = marks.count();

    let forwarding = relocate(&mut heap, &marks, live);
    // Nothing above the boundary was live, so nothing moved.
    assert!(forwarding.iter().all(Option::is_none));
    // Relative order of the in-place cells is preserved.
    assert_eq!(heap.index_of(tail).as_usize(), 0);
    assert_eq!(heap.index_of(root).as_usize(), 1);
}

#[test]
fn rewrite_redirects_stale_fields() {
    let mut heap = Heap::new();
    litter(&mut heap, 3);
    let tail = heap.alloc_pair(Value::int(2), Value::nil());
    let root = heap.alloc_pair(Value::int(1), tail);

    let mut marks = MarkBitmap::new(heap.capacity());
    trace(&heap, root, &mut marks);
    let live = marks.count();
    assert_eq!(live, 2);

    let forwarding = relocate(&mut heap, &marks, live);
    rewrite_fields(&mut heap, &forwarding, live);
    let root = forwarded(&heap, &forwarding, live, root);

    // Both cells now sit inside the live region and the rest pointer of the
    // head references the relocated tail.
    let head_index = heap.index_of(root).as_usize();
    assert!(head_index < live);
    let rest = heap.rest(root);
    let rest_index = heap.index_of(rest).as_usize();
    assert!(rest_index < live);
    assert_eq!(heap.first(rest).as_int(), 2);
}

#[test]
fn forwarded_passes_atoms_through() {
    let mut heap = Heap::new();
    let _ = heap.alloc_pair(Value::nil(), Value::nil());
    let forwarding: std::vec::Vec<Option<CellIndex>> = std::vec![None; heap.capacity()];
    assert_eq!(forwarded(&heap, &forwarding, 0, Value::int(9)), Value::int(9));
    assert_eq!(forwarded(&heap, &forwarding, 0, Value::nil()), Value::nil());
}

#[test]
fn zero_live_cells_relocate_nothing() {
    let mut heap = Heap::new();
    litter(&mut heap, 8);
    let marks = MarkBitmap::new(heap.capacity());
    let forwarding = relocate(&mut heap, &marks, 0);
    assert!(forwarding.iter().all(Option::is_none));
}
