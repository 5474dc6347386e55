// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tama Heap demo driver.
//!
//! Walks through the memory core by hand: builds a few lists, prints them,
//! produces garbage, and runs a collection. Useful for eyeballing the
//! allocator and collector without the rest of the runtime.

use tama_heap::value::print_to_string;
use tama_heap::{Heap, Pair, Value};

fn show(label: &str, value: Value, heap: &Heap) {
    println!("{label}: {}", print_to_string(value, heap));
}

fn main() {
    println!("cell size = {} bytes", Pair::SIZE);

    let mut heap = Heap::new();

    // Build (1 2 3) back to front.
    let mut list = heap.alloc_pair(Value::int(3), Value::nil());
    list = heap.alloc_pair(Value::int(2), list);
    list = heap.alloc_pair(Value::int(1), list);
    show("list", list, &heap);

    // Large and negative integers round-trip through the tagged word.
    let big = heap.alloc_pair(Value::int(4_294_967_296 + 128), list);
    show("big", big, &heap);
    let negative = heap.alloc_pair(Value::int(-4_294_967_296), big);
    show("negative", negative, &heap);

    // An improper pair prints with a dotted tail.
    let dotted = heap.alloc_pair(Value::int(1), Value::int(2));
    show("dotted", dotted, &heap);

    // Symbols: short names pack into the word, long ones hit the store.
    let quote = heap.alloc_symbol("quote");
    show("symbol", quote, &heap);
    let long = heap.alloc_symbol("continuation");
    show("symbol", long, &heap);

    // Drop everything except the original list on the floor, then collect.
    for n in 0..1_000 {
        let cell = heap.alloc_pair(Value::int(n), Value::nil());
        let _ = heap.alloc_pair(cell, cell);
    }
    println!(
        "before collect: {} cells allocated, capacity {}",
        heap.allocated(),
        heap.capacity()
    );

    let list = heap.collect(list);
    println!(
        "after collect:  {} cells allocated, capacity {}",
        heap.allocated(),
        heap.capacity()
    );
    show("list survives", list, &heap);
}
