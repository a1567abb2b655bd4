//! Deferred actions that run when a scope exits, last registered first.
//!
//! The stack holds the console sink for the whole scope. Immediate output
//! goes through [`DeferStack::out`]; deferred output is registered with
//! [`DeferStack::defer`] and replayed in reverse on [`DeferStack::finish`]
//! or, if the scope is left early (a `?`, a `return`, a panic), on drop.

use std::io::{self, Write};

pub struct DeferStack<'w, W: Write + ?Sized> {
    out: &'w mut W,
    actions: Vec<Box<dyn FnOnce(&mut W) -> io::Result<()> + 'w>>,
}

impl<'w, W: Write + ?Sized> DeferStack<'w, W> {
    pub fn new(out: &'w mut W) -> Self {
        DeferStack {
            out,
            actions: Vec::new(),
        }
    }

    /// The sink, for output that should happen right away.
    pub fn out(&mut self) -> &mut W {
        &mut *self.out
    }

    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce(&mut W) -> io::Result<()> + 'w,
    {
        self.actions.push(Box::new(action));
        tracing::trace!(pending = self.actions.len(), "deferred action registered");
    }

    pub fn pending(&self) -> usize {
        self.actions.len()
    }

    /// Runs every pending action and reports the first failure.
    pub fn finish(mut self) -> io::Result<()> {
        self.unwind()
    }

    // Keeps going after a failed action so every registered action runs.
    fn unwind(&mut self) -> io::Result<()> {
        let mut first_err = None;
        while let Some(action) = self.actions.pop() {
            if let Err(err) = action(&mut *self.out) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<'w, W: Write + ?Sized> Drop for DeferStack<'w, W> {
    fn drop(&mut self) {
        if self.actions.is_empty() {
            return;
        }
        if let Err(err) = self.unwind() {
            tracing::warn!(error = %err, "deferred action failed while leaving scope");
        }
    }
}
