//! fsv - zero-copy filtered views over byte strings
//!
//! # Overview
//!
//! A [`FilteredStringView`] borrows a buffer owned by someone else and shows
//! only the bytes a [`Predicate`] accepts. Views are cheap to clone, never copy
//! the underlying bytes, and can be re-sliced and split while keeping their
//! filtering intact.
//!
//! # Quick Start
//!
//! ```
//! use fsv::{FilteredStringView, Predicate, compose, split, substr};
//!
//! let text = String::from("Malcom? Bligh? Turnbull");
//!
//! // Hide every '?' without touching the buffer.
//! let names = FilteredStringView::with_predicate(&text, |c: &u8| *c != b'?');
//! assert_eq!(names.len(), 21);
//! assert_eq!(names.raw_len(), text.len());
//!
//! // Logical offsets count only visible bytes.
//! let bligh = substr(&names, 7, Some(5)).unwrap();
//! assert_eq!(bligh, "Bligh");
//!
//! // Split on the filtered content of another view.
//! let parts = split(&names, &FilteredStringView::new(" "));
//! assert_eq!(parts, ["Malcom", "Bligh", "Turnbull"]);
//!
//! // Swap the predicate for a new set of conditions.
//! let capitals = compose(&names, [Predicate::new(|c: &u8| c.is_ascii_uppercase())]);
//! assert_eq!(capitals.to_string(), "MBT");
//! ```
//!
//! # Index Spaces
//!
//! - **Raw offsets** index the backing buffer: `0..view.raw_len()`.
//! - **Logical offsets** index the filtered bytes: `0..view.len()`.
//!
//! [`FilteredStringView::raw_positions`] maps one to the other.
//!
//! # Errors
//!
//! The checked operations ([`FilteredStringView::at`] and [`substr`]) return
//! [`Error`] for out-of-range positions. Indexing with `view[n]` panics
//! instead.

pub use fsv_core::{
    Cursor, Error, FilteredStringView, Iter, Predicate, compose, error, iter, ops, predicate,
    split, substr, view,
};
