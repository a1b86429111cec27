//! Errors reported by the checked accessors.
//!
//! Only out-of-range requests are recoverable. Unchecked indexing
//! (`view[n]`) panics instead of returning one of these.

use thiserror::Error;

/// A logical position outside the filtered sequence.
///
/// Both variants carry the offending position and the filtered size of the
/// view at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised by [`FilteredStringView::at`](crate::FilteredStringView::at)
    /// when `index >= size`.
    #[error("at({index}): index out of range for filtered view of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Raised by [`substr`](crate::substr) when `pos > size`.
    #[error("substr({pos}): position out of range for filtered view of size {size}")]
    PositionOutOfRange { pos: usize, size: usize },
}

impl Error {
    /// The requested logical index or position.
    pub fn index(&self) -> usize {
        match *self {
            Error::IndexOutOfRange { index, .. } => index,
            Error::PositionOutOfRange { pos, .. } => pos,
        }
    }

    /// Filtered size of the view that rejected the request.
    pub fn size(&self) -> usize {
        match *self {
            Error::IndexOutOfRange { size, .. } | Error::PositionOutOfRange { size, .. } => size,
        }
    }
}
