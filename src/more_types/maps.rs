//! Maps: literals, insert/overwrite/remove, and word counting.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
}

pub fn maps(out: &mut dyn Write) -> io::Result<()> {
    // BTreeMap so the printed order is stable
    let m = BTreeMap::from([
        (
            "Bell Labs".to_string(),
            Location {
                lat: 40.68433,
                long: -74.39967,
            },
        ),
        (
            "Google".to_string(),
            Location {
                lat: 37.42202,
                long: -122.08408,
            },
        ),
    ]);

    writeln!(out, "{:?}", m)
}

/// Reads `key` the way an indexing lookup with a zero default would.
fn value_or_zero(m: &HashMap<String, i32>, key: &str) -> i32 {
    m.get(key).copied().unwrap_or_default()
}

/// Returns every `(value, present)` pair observed along the way.
pub fn mutating_maps(out: &mut dyn Write) -> io::Result<Vec<(i32, bool)>> {
    let mut m: HashMap<String, i32> = HashMap::new();
    let mut seen = Vec::new();

    m.insert("Answer".to_string(), 42);
    let v = value_or_zero(&m, "Answer");
    writeln!(out, "The value: {}", v)?;
    seen.push((v, m.contains_key("Answer")));

    m.insert("Answer".to_string(), 48);
    let v = value_or_zero(&m, "Answer");
    writeln!(out, "The value: {}", v)?;
    seen.push((v, m.contains_key("Answer")));

    m.remove("Answer");
    let v = value_or_zero(&m, "Answer");
    writeln!(out, "The value: {}", v)?;
    seen.push((v, m.contains_key("Answer")));

    let (v, ok) = match m.get("Answer") {
        Some(&v) => (v, true),
        None => (0, false),
    };
    writeln!(out, "The value: {} Present? {}", v, ok)?;
    seen.push((v, ok));

    Ok(seen)
}

/// Counts tokens separated by single spaces. Tokens match exactly, so
/// case, punctuation and empty tokens from doubled spaces all count
/// separately.
pub fn word_count(s: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in s.split(' ') {
        *counts.entry(word.to_string()).or_insert(0) += 1;
        tracing::debug!(word, "counted");
    }
    counts
}
