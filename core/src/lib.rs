#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Non-owning filtered views over byte strings.
//!
//! A [`FilteredStringView`] borrows a buffer it does not own and pairs it with
//! a [`Predicate`]. Only the bytes for which the predicate holds are visible
//! through the view; nothing is copied until [`FilteredStringView::to_bytes`]
//! (or `to_string`) is called.
//!
//! Two index spaces are in play everywhere:
//!
//! - **raw offsets** index the backing buffer (`0..view.raw_len()`)
//! - **logical offsets** index the filtered sequence (`0..view.len()`)
//!
//! [`FilteredStringView::raw_positions`] is the translation table between the
//! two, and it is what [`substr`] and [`split`] are built on.
//!
//! # Example
//!
//! ```
//! use fsv_core::{FilteredStringView, split, substr};
//!
//! let names = FilteredStringView::with_predicate("Malcom? Bligh? Turnbull", |c: &u8| *c != b'?');
//! assert_eq!(names.to_string(), "Malcom Bligh Turnbull");
//!
//! let middle = substr(&names, 7, Some(5)).unwrap();
//! assert_eq!(middle, "Bligh");
//!
//! let parts = split(&names, &FilteredStringView::new(" "));
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts[2], "Turnbull");
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, format, string::String, string::ToString, sync::Arc, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod error;
pub mod iter;
pub mod ops;
pub mod predicate;
pub mod view;

pub use error::Error;
pub use iter::{Cursor, Iter};
pub use ops::{compose, split, substr};
pub use predicate::Predicate;
pub use view::FilteredStringView;
