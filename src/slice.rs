//! Growable sequence views over shared storage.
//!
//! A `SliceView` is a small header (offset, length) over a reference-counted
//! backing buffer. Re-slicing copies the header, not the elements, so a
//! write through any view is visible through every other view of the same
//! buffer. Appending stays in the buffer while the view has spare capacity;
//! past that a fresh buffer is allocated and the new view no longer aliases
//! the old ones.
//!
//! Native Rust slices cannot express this (two live `&mut [T]` may not
//! overlap), so the buffer lives in an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use itertools::Itertools;

use crate::error::{Result, TourError};

#[derive(Clone)]
pub struct SliceView<T> {
    buf: Option<Rc<RefCell<Vec<T>>>>,
    offset: usize,
    len: usize,
}

impl<T: Clone + Default> SliceView<T> {
    /// A view with no backing buffer at all.
    pub fn nil() -> Self {
        SliceView {
            buf: None,
            offset: 0,
            len: 0,
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        let len = items.len();
        SliceView {
            buf: Some(Rc::new(RefCell::new(items))),
            offset: 0,
            len,
        }
    }

    /// `len` default elements with room for `cap` before reallocating.
    pub fn make(len: usize, cap: usize) -> Self {
        assert!(len <= cap, "makeslice: len {} out of range (cap {})", len, cap);
        SliceView {
            buf: Some(Rc::new(RefCell::new(vec![T::default(); cap]))),
            offset: 0,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cap(&self) -> usize {
        match &self.buf {
            Some(buf) => buf.borrow().len() - self.offset,
            None => 0,
        }
    }

    pub fn is_nil(&self) -> bool {
        self.buf.is_none()
    }

    /// True when both views read and write the same backing buffer.
    pub fn shares_storage(&self, other: &SliceView<T>) -> bool {
        match (&self.buf, &other.buf) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> T {
        self.check_index(index);
        self.backing().borrow()[self.offset + index].clone()
    }

    pub fn set(&self, index: usize, value: T) {
        self.check_index(index);
        self.backing().borrow_mut()[self.offset + index] = value;
    }

    /// The `[lo:hi]` view. Panics unless `lo <= hi <= cap`.
    pub fn slice(&self, lo: usize, hi: usize) -> SliceView<T> {
        match self.try_slice(lo, hi) {
            Ok(view) => view,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_slice(&self, lo: usize, hi: usize) -> Result<SliceView<T>> {
        let cap = self.cap();
        if lo > hi || hi > cap {
            return Err(TourError::SliceBounds { lo, hi, cap });
        }
        Ok(SliceView {
            buf: self.buf.clone(),
            offset: self.offset + lo,
            len: hi - lo,
        })
    }

    /// `[lo:]`, which keeps the current length as the upper bound.
    pub fn slice_from(&self, lo: usize) -> SliceView<T> {
        self.slice(lo, self.len)
    }

    /// Returns the extended view, like assigning the result of an append.
    pub fn append(&self, items: &[T]) -> SliceView<T> {
        let needed = self.len + items.len();
        if needed <= self.cap() {
            if let Some(buf) = &self.buf {
                let start = self.offset + self.len;
                buf.borrow_mut()[start..start + items.len()].clone_from_slice(items);
            }
            return SliceView {
                buf: self.buf.clone(),
                offset: self.offset,
                len: needed,
            };
        }

        let new_cap = needed.max(self.cap() * 2);
        tracing::trace!(old_cap = self.cap(), new_cap, "append outgrew capacity, reallocating");
        let mut fresh = Vec::with_capacity(new_cap);
        fresh.extend(self.to_vec());
        fresh.extend_from_slice(items);
        fresh.resize(new_cap, T::default());
        SliceView {
            buf: Some(Rc::new(RefCell::new(fresh))),
            offset: 0,
            len: needed,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        match &self.buf {
            Some(buf) => buf.borrow()[self.offset..self.offset + self.len].to_vec(),
            None => Vec::new(),
        }
    }

    fn check_index(&self, index: usize) {
        if index >= self.len {
            panic!("index out of range [{}] with length {}", index, self.len);
        }
    }

    fn backing(&self) -> &Rc<RefCell<Vec<T>>> {
        // len > 0 was checked by the caller, so a buffer exists
        match &self.buf {
            Some(buf) => buf,
            None => unreachable!("non-empty view without a buffer"),
        }
    }
}

impl<T: Clone + Default + fmt::Display> fmt::Display for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.to_vec().iter().join(" "))
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for SliceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceView")
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("items", &self.to_vec())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names() -> SliceView<String> {
        SliceView::from_vec(
            ["John", "Paul", "George", "Ringo"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn test_primes_view() {
        let primes = SliceView::from_vec(vec![2, 3, 5, 7, 11, 13]);
        let s = primes.slice(1, 4);
        assert_eq!(s.to_vec(), vec![3, 5, 7]);
        assert_eq!(s.cap(), 5);
        assert_eq!(s.to_string(), "[3 5 7]");
    }

    #[test]
    fn test_write_through_view_is_shared() {
        let names = names();
        let a = names.slice(0, 2);
        let b = names.slice(1, 3);

        b.set(0, "XXX".to_string());

        assert_eq!(a.to_string(), "[John XXX]");
        assert_eq!(b.to_string(), "[XXX George]");
        assert_eq!(names.to_string(), "[John XXX George Ringo]");
    }

    #[test]
    fn test_append_within_capacity_writes_parent() {
        let parent = SliceView::from_vec(vec![1, 2, 3, 4]);
        let head = parent.slice(0, 2);
        let grown = head.append(&[9]);

        assert!(grown.shares_storage(&parent));
        assert_eq!(parent.to_vec(), vec![1, 2, 9, 4]);
    }

    #[test]
    fn test_append_past_capacity_breaks_aliasing() {
        let parent = SliceView::from_vec(vec![1, 2, 3]);
        let view = parent.slice(0, 3);
        let grown = view.append(&[4]);

        assert!(!grown.shares_storage(&parent));
        grown.set(0, 100);
        assert_eq!(parent.get(0), 1);
        assert_eq!(view.get(0), 1);
        assert_eq!(grown.to_vec(), vec![100, 2, 3, 4]);
        assert_eq!(grown.cap(), 6);
    }

    #[test]
    fn test_nil_view() {
        let s: SliceView<i32> = SliceView::nil();
        assert!(s.is_nil());
        assert_eq!((s.len(), s.cap()), (0, 0));
        assert_eq!(s.to_string(), "[]");

        let s = s.append(&[0]);
        assert!(!s.is_nil());
        assert_eq!((s.len(), s.cap()), (1, 1));
    }

    #[test]
    fn test_growth_sequence() {
        let mut s: SliceView<i32> = SliceView::nil();
        let mut caps = Vec::new();
        for i in 0..5 {
            s = s.append(&[i]);
            caps.push(s.cap());
        }
        assert_eq!(caps, vec![1, 2, 4, 4, 8]);
    }

    #[test]
    fn test_reslice_up_to_capacity() {
        let b: SliceView<i32> = SliceView::make(0, 5);
        let _filled = b.append(&[1, 2, 3, 4, 5]);
        let c = b.slice(0, 2);
        let d = c.slice(2, 5);

        assert_eq!(c.to_vec(), vec![1, 2]);
        assert_eq!(d.to_vec(), vec![3, 4, 5]);
        assert_eq!((d.len(), d.cap()), (3, 3));
    }

    #[test]
    fn test_try_slice_reports_bounds() {
        let s = SliceView::from_vec(vec![1, 2, 3]);
        let err = s.try_slice(1, 4).unwrap_err();
        assert!(matches!(err, TourError::SliceBounds { lo: 1, hi: 4, cap: 3 }));
        assert!(s.try_slice(2, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "slice bounds out of range")]
    fn test_slice_past_capacity_panics() {
        SliceView::from_vec(vec![1, 2, 3]).slice(0, 4);
    }

    #[test]
    #[should_panic(expected = "index out of range [3] with length 3")]
    fn test_index_past_len_panics() {
        SliceView::from_vec(vec![1, 2, 3]).get(3);
    }

    proptest! {
        #[test]
        fn prop_try_slice_matches_bounds(len in 0usize..20, lo in 0usize..25, hi in 0usize..25) {
            let s = SliceView::from_vec(vec![0u8; len]);
            prop_assert_eq!(s.try_slice(lo, hi).is_ok(), lo <= hi && hi <= len);
        }

        #[test]
        fn prop_overlapping_views_alias(
            items in prop::collection::vec(any::<i32>(), 2..30),
            value in any::<i32>(),
        ) {
            let parent = SliceView::from_vec(items.clone());
            let mid = items.len() / 2;
            let left = parent.slice(0, mid + 1);
            let right = parent.slice(mid, items.len());

            right.set(0, value);

            prop_assert_eq!(left.get(mid), value);
            prop_assert_eq!(parent.get(mid), value);
        }
    }
}
