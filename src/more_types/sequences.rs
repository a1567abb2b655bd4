//! Arrays, vectors and slice views.
//!
//! Plain `[T; N]`, `Vec<T>` and `&[T]` cover most of the ground. The
//! aliasing demos use [`SliceView`], which shares one backing buffer
//! between every view cut from it.

use std::io::{self, Write};

use crate::slice::SliceView;

pub fn array_basics(out: &mut dyn Write) -> io::Result<()> {
    let mut a: [String; 2] = Default::default();
    a[0] = "hello".to_string();
    a[1] = "world".to_string();
    writeln!(out, "{} {}", a[0], a[1])?;
    writeln!(out, "{:?}", a)?;

    let b = vec!["foo", "bar", "baz"];
    writeln!(out, "{:?}", b)
}

pub fn slices_basics(out: &mut dyn Write) -> io::Result<()> {
    let primes = [2, 3, 5, 7, 11, 13];
    let s: &[i32] = &primes[1..4];
    writeln!(out, "{:?}", s)?;

    let names = SliceView::from_vec(
        ["John", "Paul", "George", "Ringo"]
            .into_iter()
            .map(String::from)
            .collect(),
    );
    writeln!(out, "{}", names)?;

    let a = names.slice(0, 2);
    let b = names.slice(1, 3);
    writeln!(out, "{} {}", a, b)?;

    b.set(0, "XXX".to_string());
    writeln!(out, "{} {}", a, b)?;
    writeln!(out, "{}", names)
}

#[derive(Debug, Clone, Copy)]
pub struct Flagged {
    pub i: i32,
    pub b: bool,
}

pub fn slice_literals(out: &mut dyn Write) -> io::Result<()> {
    let s = [
        Flagged { i: 2, b: true },
        Flagged { i: 3, b: false },
        Flagged { i: 5, b: true },
        Flagged { i: 7, b: true },
        Flagged { i: 11, b: false },
        Flagged { i: 13, b: true },
    ];
    writeln!(out, "{:?}", s)
}

pub fn slice_defaults(out: &mut dyn Write) -> io::Result<()> {
    let s = vec![2, 3, 5, 7, 11, 13];

    writeln!(out, "{:?}", &s[1..4])?;
    writeln!(out, "{:?}", &s[..2])?;
    writeln!(out, "{:?}", &s[1..])?;
    writeln!(out, "{:?}", &s[..])
}

pub fn nil_slices(out: &mut dyn Write) -> io::Result<()> {
    let s: SliceView<i32> = SliceView::nil();
    writeln!(out, "{} {} {}", s, s.len(), s.cap())?;
    if s.is_nil() {
        writeln!(out, "nil!")?;
    }
    Ok(())
}

pub fn format_slice(name: &str, x: &SliceView<i32>) -> String {
    format!("{} len={} cap={} {}", name, x.len(), x.cap(), x)
}

pub fn making_slices(out: &mut dyn Write) -> io::Result<()> {
    let a = SliceView::make(5, 5);
    writeln!(out, "{}", format_slice("a", &a))?;

    let b = SliceView::make(0, 5);
    // bb fills b's spare capacity in place
    let bb = b.append(&[1, 2, 3, 4, 5]);
    writeln!(out, "{}", format_slice("b", &b))?;
    writeln!(out, "{}", format_slice("bb", &bb))?;

    let c = b.slice(0, 2);
    writeln!(out, "{}", format_slice("c", &c))?;

    let d = c.slice(2, 5);
    writeln!(out, "{}", format_slice("d", &d))
}

pub fn appending_slices(out: &mut dyn Write) -> io::Result<()> {
    let mut s: SliceView<i32> = SliceView::nil();
    writeln!(out, "{}", format_slice("s", &s))?;

    // append works on nil views
    s = s.append(&[0]);
    writeln!(out, "{}", format_slice("s", &s))?;

    s = s.append(&[1]);
    writeln!(out, "{}", format_slice("s", &s))?;

    s = s.append(&[2, 3, 4, 5, 6, 7, 9]);
    writeln!(out, "{}", format_slice("s", &s))
}

/// `2^i` for each index; shifts past the bit width give 0.
pub fn powers_of_two(n: usize) -> Vec<u32> {
    let mut pow = vec![0u32; n];
    for (i, value) in pow.iter_mut().enumerate() {
        *value = u32::try_from(i)
            .ok()
            .and_then(|shift| 1u32.checked_shl(shift))
            .unwrap_or(0);
    }
    pow
}

pub fn range_slices(out: &mut dyn Write) -> io::Result<()> {
    for value in powers_of_two(10) {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}
