//! More types: references, structs, sequences, maps and closures.
//!
//! Run with: cargo run --bin tour -- --section more-types

use std::io::{self, Write};

mod functions;
mod maps;
mod pointers;
mod sequences;
mod structs;

pub use functions::{
    adder, closures, compute, fibonacci, fibonacci_demo, fibonacci_iter, function_values,
};
pub use maps::{maps, mutating_maps, word_count, Location};
pub use pointers::{pointers, PointerTrace};
pub use sequences::{
    appending_slices, array_basics, format_slice, making_slices, nil_slices, powers_of_two,
    range_slices, slice_defaults, slice_literals, slices_basics, Flagged,
};
pub use structs::{pointer_to_struct, struct_equality, struct_literals, struct_printing, Vertex};

use crate::wc;

pub fn word_count_check(out: &mut dyn Write) -> io::Result<()> {
    wc::verify(out, word_count).map(drop)
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    pointers(out)?;
    struct_printing(out)?;
    struct_equality(out)?;
    pointer_to_struct(out)?;
    struct_literals(out)?;
    array_basics(out)?;
    slices_basics(out)?;
    slice_literals(out)?;
    slice_defaults(out)?;
    nil_slices(out)?;
    making_slices(out)?;
    appending_slices(out)?;
    range_slices(out)?;
    maps(out)?;
    mutating_maps(out)?;
    word_count_check(out)?;
    function_values(out)?;
    closures(out)?;
    fibonacci_demo(out)
}
