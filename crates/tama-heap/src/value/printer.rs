// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Printer for Tamala values.
//!
//! Renders a value's structure: `()` for nil, decimal integers, symbol
//! names, and parenthesized lists with ` . ` for improper tails.

use super::{Value, ValueKind};
use crate::heap::Heap;
use alloc::string::String;
use core::fmt;
use core::fmt::Write;

/// Print a value into a formatter sink.
///
/// Cyclic structure is not detected; printing a cyclic list does not
/// terminate.
pub fn print_value<W: Write>(value: Value, heap: &Heap, out: &mut W) -> fmt::Result {
    if value.is_nil() {
        return out.write_str("()");
    }
    match value.kind() {
        ValueKind::Pair => print_list(value, heap, out),
        ValueKind::Int => write!(out, "{}", value.as_int()),
        ValueKind::Symbol => out.write_str(&heap.symbol_name(value)),
    }
}

fn print_list<W: Write>(list: Value, heap: &Heap, out: &mut W) -> fmt::Result {
    out.write_char('(')?;

    let mut current = list;
    let mut is_first = true;

    loop {
        if current.is_nil() {
            break;
        }
        if current.is_pair() {
            if !is_first {
                out.write_char(' ')?;
            }
            is_first = false;

            let pair = heap.read_pair(current);
            print_value(pair.first, heap, out)?;
            current = pair.rest;
        } else {
            // Improper list (rest is neither nil nor a pair)
            out.write_str(" . ")?;
            print_value(current, heap, out)?;
            break;
        }
    }

    out.write_char(')')
}

/// Print a value to a freshly allocated string.
#[must_use]
pub fn print_to_string(value: Value, heap: &Heap) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = print_value(value, heap, &mut out);
    out
}
