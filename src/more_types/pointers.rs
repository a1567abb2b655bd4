//! References as pointers: reading and writing through one or two levels
//! of indirection.

use std::io::{self, Write};

/// Values of `i` and `j` observed after each write through a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerTrace {
    pub i_after_ref: i32,
    pub i_after_ref_ref: i32,
    pub j: i32,
}

pub fn pointers(out: &mut dyn Write) -> io::Result<PointerTrace> {
    let mut i = 42;
    let mut j = 2701;

    let p = &mut i;
    writeln!(out, "{:p}", p)?; // the address p holds
    let pp = &p;
    writeln!(out, "{}", **pp)?; // read i through the reference to the reference
    *p = 21;
    writeln!(out, "{}", i)?;
    let i_after_ref = i;

    let mut p = &mut i;
    let pp = &mut p;
    **pp = 24; // write i through two levels
    writeln!(out, "{}", i)?;
    let i_after_ref_ref = i;

    let p = &mut j;
    *p /= 37;
    writeln!(out, "{}", j)?;

    Ok(PointerTrace {
        i_after_ref,
        i_after_ref_ref,
        j,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_seen_by_the_owner() {
        let mut buf = Vec::new();
        let trace = pointers(&mut buf).unwrap();
        assert_eq!(
            trace,
            PointerTrace {
                i_after_ref: 21,
                i_after_ref_ref: 24,
                j: 73,
            }
        );

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("0x"));
        assert_eq!(&lines[1..], ["42", "21", "24", "73"]);
    }
}
