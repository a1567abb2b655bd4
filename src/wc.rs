//! Checks a word-counting function against a fixed set of sentences.
//!
//! Each case prints a PASS block with the counts it got. The first
//! mismatch prints a FAIL block with both maps and stops the check.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};

pub struct Case {
    pub input: &'static str,
    pub want: &'static [(&'static str, usize)],
}

pub const CASES: &[Case] = &[
    Case {
        input: "I am learning Go!",
        want: &[("I", 1), ("am", 1), ("learning", 1), ("Go!", 1)],
    },
    Case {
        input: "The quick brown fox jumped over the lazy dog.",
        want: &[
            ("The", 1),
            ("quick", 1),
            ("brown", 1),
            ("fox", 1),
            ("jumped", 1),
            ("over", 1),
            ("the", 1),
            ("lazy", 1),
            ("dog.", 1),
        ],
    },
    Case {
        input: "I ate a donut. Then I ate another donut.",
        want: &[
            ("I", 2),
            ("ate", 2),
            ("a", 1),
            ("donut.", 2),
            ("Then", 1),
            ("another", 1),
        ],
    },
    Case {
        input: "A man a plan a canal panama.",
        want: &[
            ("A", 1),
            ("man", 1),
            ("a", 2),
            ("plan", 1),
            ("canal", 1),
            ("panama.", 1),
        ],
    },
];

impl Case {
    fn expected(&self) -> HashMap<String, usize> {
        self.want.iter().map(|&(w, n)| (w.to_string(), n)).collect()
    }
}

fn render(counts: &HashMap<String, usize>) -> io::Result<String> {
    let sorted: BTreeMap<&String, &usize> = counts.iter().collect();
    Ok(serde_json::to_string(&sorted)?)
}

/// Returns true when `f` agrees with every case.
pub fn verify<F>(out: &mut dyn Write, f: F) -> io::Result<bool>
where
    F: Fn(&str) -> HashMap<String, usize>,
{
    for case in CASES {
        let got = f(case.input);
        let want = case.expected();
        if got != want {
            tracing::warn!(input = case.input, "word count mismatch");
            writeln!(out, "FAIL")?;
            writeln!(out, " f({:?}) =", case.input)?;
            writeln!(out, "  {}", render(&got)?)?;
            writeln!(out, " want:")?;
            writeln!(out, "  {}", render(&want)?)?;
            return Ok(false);
        }
        writeln!(out, "PASS")?;
        writeln!(out, " f({:?}) =", case.input)?;
        writeln!(out, "  {}", render(&got)?)?;
    }
    Ok(true)
}
