//! Functions as values, and closures that carry their own state.

use std::io::{self, Write};

/// Calls `f` with the fixed arguments 3 and 4.
pub fn compute<F>(f: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    f(3.0, 4.0)
}

pub fn function_values(out: &mut dyn Write) -> io::Result<()> {
    let hypot = |x: f64, y: f64| (x * x + y * y).sqrt();
    writeln!(out, "{}", hypot(5.0, 12.0))?;

    writeln!(out, "{}", compute(hypot))?;
    writeln!(out, "{}", compute(f64::powf))
}

/// Each call returns a fresh running sum that only that closure can see.
pub fn adder() -> impl FnMut(i64) -> i64 {
    let mut sum = 0;
    move |x| {
        sum += x;
        sum
    }
}

pub fn closures(out: &mut dyn Write) -> io::Result<()> {
    let (mut pos, mut neg) = (adder(), adder());
    for i in 0..10 {
        writeln!(out, "{} {}", pos(i), neg(-2 * i))?;
    }
    Ok(())
}

/// Returns 1, 2, 3, 5, 8, ... one term per call. There is no reset; make
/// a new closure to start over. Terms past the 92nd wrap around `u64`.
pub fn fibonacci() -> impl FnMut() -> u64 {
    let (mut prev, mut current) = (0u64, 1u64);
    move || {
        let next = prev.wrapping_add(current);
        prev = current;
        current = next;
        next
    }
}

pub fn fibonacci_iter() -> impl Iterator<Item = u64> {
    let mut next = fibonacci();
    std::iter::from_fn(move || Some(next()))
}

pub fn fibonacci_demo(out: &mut dyn Write) -> io::Result<()> {
    let mut f = fibonacci();
    for _ in 0..10 {
        writeln!(out, "{}", f())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_values() {
        let mut buf = Vec::new();
        function_values(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "13\n5\n81\n");
    }

    #[test]
    fn test_compute_accepts_closures_and_fn_items() {
        assert_eq!(compute(|a, b| a + b), 7.0);
        assert_eq!(compute(f64::max), 4.0);
    }

    #[test]
    fn test_adders_are_independent() {
        let mut a = adder();
        let mut b = adder();
        assert_eq!(a(5), 5);
        assert_eq!(b(1), 1);
        assert_eq!(a(5), 10);
        assert_eq!(b(-3), -2);
        assert_eq!(a(0), 10);
    }

    #[test]
    fn test_closures_output() {
        let mut buf = Vec::new();
        closures(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0 0");
        assert_eq!(lines[3], "6 -12");
        assert_eq!(lines[9], "45 -90");
    }

    #[test]
    fn test_fibonacci_terms() {
        let mut buf = Vec::new();
        fibonacci_demo(&mut buf).unwrap();
        let printed: Vec<u64> = String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(printed, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
        assert_eq!(fibonacci_iter().take(10).collect::<Vec<_>>(), printed);
    }

    #[test]
    fn test_fibonacci_iter_runs_past_u64_range() {
        let terms: Vec<u64> = fibonacci_iter().take(100).collect();
        assert_eq!(terms.len(), 100);
        assert_eq!(terms[91], 12_200_160_415_121_876_738);
        assert_eq!(terms[92], terms[90].wrapping_add(terms[91]));
        assert!(terms[92] < terms[91]);
    }

    #[test]
    fn test_fibonacci_instances_do_not_share_state() {
        let mut f = fibonacci();
        f();
        f();
        let mut g = fibonacci();
        assert_eq!(g(), 1);
        assert_eq!(f(), 3);
    }
}
