//! Traversal of a view's filtered bytes.
//!
//! [`Iter`] is the ordinary double-ended iterator. [`Cursor`] exposes the raw
//! position directly and moves one accepted byte at a time in either
//! direction, which is what you want when the raw offset matters.

use core::{fmt, iter::FusedIterator, ptr};

use crate::{FilteredStringView, Predicate};

/// Iterator over the accepted bytes of a view.
///
/// Yields references into the backing buffer. Stepping is O(skip distance):
/// every rejected byte between two accepted ones is visited once.
#[derive(Clone)]
pub struct Iter<'v, 'a> {
    data: &'a [u8],
    predicate: &'v Predicate<'a>,
    front: usize,
    back: usize,
}

impl<'v, 'a> Iter<'v, 'a> {
    pub(crate) fn new(data: &'a [u8], predicate: &'v Predicate<'a>) -> Self {
        Iter {
            data,
            predicate,
            front: 0,
            back: data.len(),
        }
    }
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<&'a u8> {
        while self.front < self.back {
            let c = &self.data[self.front];
            self.front += 1;
            if self.predicate.test(c) {
                return Some(c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl<'a> DoubleEndedIterator for Iter<'_, 'a> {
    fn next_back(&mut self) -> Option<&'a u8> {
        while self.front < self.back {
            self.back -= 1;
            let c = &self.data[self.back];
            if self.predicate.test(c) {
                return Some(c);
            }
        }
        None
    }
}

impl FusedIterator for Iter<'_, '_> {}

impl fmt::Debug for Iter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

/// A position in a view, expressed as a raw offset.
///
/// A cursor always rests either on an accepted byte or at the end position
/// (`raw_len`). Two cursors are equal when they belong to the same view
/// instance and sit at the same raw offset; cursors from two equal views are
/// never equal to each other.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'v, 'a> {
    view: &'v FilteredStringView<'a>,
    pos: usize,
}

impl<'v, 'a> Cursor<'v, 'a> {
    pub(crate) fn new(view: &'v FilteredStringView<'a>, pos: usize) -> Self {
        Cursor { view, pos }
    }

    /// The view this cursor walks.
    pub fn view(&self) -> &'v FilteredStringView<'a> {
        self.view
    }

    /// Raw offset into the backing buffer.
    pub fn raw_position(&self) -> usize {
        self.pos
    }

    /// `true` once the cursor is past the last raw byte.
    pub fn is_end(&self) -> bool {
        self.pos >= self.view.raw_len()
    }

    /// The byte under the cursor, `None` at the end.
    pub fn current(&self) -> Option<&'a u8> {
        self.view.data().get(self.pos)
    }

    /// Advances to the next accepted byte, or to the end. Does nothing when
    /// already at the end.
    pub fn move_next(&mut self) {
        if !self.is_end() {
            self.pos = self.view.first_accepted(self.pos + 1);
        }
    }

    /// Retreats to the previous accepted byte.
    ///
    /// Returns `false` and leaves the cursor in place when there is no
    /// accepted byte before it.
    pub fn move_prev(&mut self) -> bool {
        match (0..self.pos).rev().find(|&raw| self.view.accepts(raw)) {
            Some(raw) => {
                self.pos = raw;
                true
            }
            None => false,
        }
    }
}

impl PartialEq for Cursor<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.view, other.view) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_, '_> {}
