//! Flow control: loops, `if`, `match`, and deferred actions.
//!
//! Run with: cargo run --bin tour -- --section flow-control

use std::io::{self, Write};

use chrono::Weekday;

use crate::defer::DeferStack;
use crate::host::Host;

/// Square root as text, with an `i` suffix for negative input.
pub fn sqrt(x: f64) -> String {
    if x < 0.0 {
        return sqrt(-x) + "i";
    }
    x.sqrt().to_string()
}

/// `x^n`, or `lim` once the power reaches it.
pub fn pow(x: f64, n: f64, lim: f64) -> f64 {
    let v = x.powf(n);
    if v < lim {
        return v;
    }
    lim
}

pub fn sum_below(n: i32) -> i32 {
    let mut sum = 0;
    for i in 0..n {
        sum += i;
    }
    sum
}

/// Doubles from 1 while the value stays under `limit`.
pub fn double_until(limit: i32) -> i32 {
    let mut sum = 1;
    while sum < limit {
        sum += sum;
    }
    sum
}

pub fn loops(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", sum_below(10))?;
    writeln!(out, "{}", double_until(1000))?;
    // Same loop again, written with `loop` and an explicit break.
    let mut sum = 1;
    loop {
        if sum >= 1000 {
            break;
        }
        sum += sum;
    }
    writeln!(out, "{}", sum)
}

pub fn if_else(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} {}", sqrt(2.0), sqrt(-4.0))?;
    writeln!(out, "{} {}", pow(3.0, 2.0, 10.0), pow(3.0, 3.0, 20.0))
}

pub fn platform_switch(out: &mut dyn Write, os: &str) -> io::Result<()> {
    write!(out, "Rust runs on ")?;
    match os {
        "macos" => writeln!(out, "OS X."),
        "linux" => writeln!(out, "Linux."),
        // freebsd, openbsd, windows...
        other => writeln!(out, "{}.", other),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaturdayDistance {
    Today,
    Tomorrow,
    InTwoDays,
    TooFarAway,
}

impl SaturdayDistance {
    pub fn message(self) -> &'static str {
        match self {
            SaturdayDistance::Today => "Today.",
            SaturdayDistance::Tomorrow => "Tomorrow.",
            SaturdayDistance::InTwoDays => "In two days.",
            SaturdayDistance::TooFarAway => "Too far away.",
        }
    }
}

/// Arms are tried top to bottom; the first guard that holds wins.
/// Offsets count forward from Sunday and never wrap into the next week.
pub fn saturday_distance(today: Weekday) -> SaturdayDistance {
    let today = today.num_days_from_sunday();
    match Weekday::Sat.num_days_from_sunday() {
        sat if sat == today => SaturdayDistance::Today,
        sat if sat == today + 1 => SaturdayDistance::Tomorrow,
        sat if sat == today + 2 => SaturdayDistance::InTwoDays,
        _ => SaturdayDistance::TooFarAway,
    }
}

pub fn weekday_switch(out: &mut dyn Write, today: Weekday) -> io::Result<()> {
    writeln!(out, "When's Saturday?")?;
    writeln!(out, "{}", saturday_distance(today).message())
}

pub fn defer_stacking(out: &mut dyn Write) -> io::Result<()> {
    let mut scope = DeferStack::new(out);
    writeln!(scope.out(), "counting")?;

    for i in 0..10 {
        scope.defer(move |w| writeln!(w, "{}", i));
    }

    writeln!(scope.out(), "done")?;
    scope.finish()
}

pub fn run(out: &mut dyn Write, host: &Host) -> io::Result<()> {
    loops(out)?;
    if_else(out)?;
    platform_switch(out, &host.platform)?;
    weekday_switch(out, host.today)?;
    defer_stacking(out)
}
