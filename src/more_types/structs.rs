//! Structs: copy semantics, mutation through `&mut`, literals and equality.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex x: {}, y: {}", self.x, self.y)
    }
}

pub fn struct_printing(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", Vertex::new(1, 2))
}

pub fn struct_equality(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", Vertex::new(1, 2) == Vertex::new(1, 2))
}

pub fn pointer_to_struct(out: &mut dyn Write) -> io::Result<Vertex> {
    let mut v = Vertex::new(10, 20);
    let p = &mut v;
    p.x = 1_000; // field access auto-derefs
    writeln!(out, "{}", v)?;
    Ok(v)
}

pub fn struct_literals(out: &mut dyn Write) -> io::Result<()> {
    let v1 = Vertex { x: 1, y: 2 };
    let v2 = Vertex {
        x: 1,
        ..Default::default()
    };
    let v3 = Vertex::default();
    let p = Box::new(Vertex { x: 1, y: 2 });
    writeln!(out, "{} | {} | {} | {}", v1, p, v2, v3)
}
