// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Tama Heap
//!
//! Memory core for the Tamala runtime: a tagged-word value representation
//! plus a stop-the-world mark-and-compact garbage collector over a
//! page-indexed cons-cell heap.
//!
//! This crate provides:
//! - The [`Value`] word: pointer, integer, or symbol behind a two-bit tag
//! - A paged, index-addressable arena of two-field cells with a bump
//!   allocator ([`Heap`])
//! - Reachability tracing and two-finger compaction with pointer fix-up
//!   ([`Heap::collect`])
//! - Structural printing of values ([`value::print_value`])
//!
//! The reader, evaluator, and REPL live elsewhere; they reach into this
//! crate only through [`Heap`]'s allocation entry points, the integer
//! encoding on [`Value`], and [`Heap::collect`]. The collector returns the
//! possibly-relocated root, which the caller must adopt as its new root
//! reference.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod gc;
pub mod heap;
pub mod types;
pub mod value;

// Re-export commonly used types at crate root
pub use heap::{Heap, PAGE_CAPACITY};
pub use types::{Addr, CellIndex};
pub use value::{Pair, SHORT_SYMBOL_MAX, Value, ValueKind};

/// Crate version.
pub const VERSION: &str = match option_env!("TAMA_VERSION") {
    Some(v) => v,
    None => "unknown",
};
