//! Operations that derive new views from existing ones.
//!
//! None of these copy the backing bytes. A derived view borrows the same
//! buffer as its source and differs only in its predicate.

use core::ptr;

use memchr::memmem;

use crate::{Error, FilteredStringView, Predicate, Vec, vec};

/// Replaces the predicate of `view` with the conjunction of `predicates`.
///
/// The predicates are evaluated in order and evaluation stops at the first
/// rejection. The original predicate of `view` is **not** part of the result;
/// use [`FilteredStringView::refine`] to keep it. An empty list exposes every
/// byte of the buffer.
///
/// ```
/// use fsv_core::{FilteredStringView, Predicate, compose};
///
/// let base = FilteredStringView::new("c / c++");
/// let view = compose(&base, [
///     Predicate::new(|c: &u8| matches!(c, b'c' | b'+' | b'/')),
///     Predicate::new(|c: &u8| *c > b' '),
/// ]);
/// assert_eq!(view, "c/c++");
/// ```
pub fn compose<'a, I>(view: &FilteredStringView<'a>, predicates: I) -> FilteredStringView<'a>
where
    I: IntoIterator<Item = Predicate<'a>>,
{
    FilteredStringView::from_parts(view.data(), Predicate::all(predicates))
}

/// The filtered bytes `[pos, pos + count)` of `view`, or `[pos, len)` when
/// `count` is `None`.
///
/// `count` is clamped to what is left after `pos`. When the range is empty
/// the result is an empty view over the same buffer.
///
/// # Errors
///
/// [`Error::PositionOutOfRange`] when `pos > view.len()`.
///
/// ```
/// use fsv_core::{FilteredStringView, substr};
///
/// let city = FilteredStringView::new("new york city");
/// assert_eq!(substr(&city, 4, Some(4)).unwrap(), "york");
/// assert_eq!(substr(&city, 9, None).unwrap(), "city");
/// assert!(substr(&city, 14, None).is_err());
/// ```
pub fn substr<'a>(
    view: &FilteredStringView<'a>,
    pos: usize,
    count: Option<usize>,
) -> Result<FilteredStringView<'a>, Error> {
    let table = view.raw_positions();
    let size = table.len();
    if pos > size {
        return Err(Error::PositionOutOfRange { pos, size });
    }
    let end = match count {
        Some(count) => pos.saturating_add(count).min(size),
        None => size,
    };
    Ok(window(view, &table, pos, end))
}

/// Splits the filtered bytes of `view` on each occurrence of the filtered
/// bytes of `token`.
///
/// Occurrences are matched left to right without overlap. Every gap becomes
/// one segment, including the ones before the first and after the last
/// occurrence, so `n` occurrences always produce `n + 1` segments, empty ones
/// included. When either side has no filtered bytes the result is a single
/// segment equal to `view`.
///
/// ```
/// use fsv_core::{FilteredStringView, split};
///
/// let parts = split(&FilteredStringView::new("xax"), &FilteredStringView::new("x"));
/// assert_eq!(parts, ["", "a", ""]);
/// ```
pub fn split<'a>(
    view: &FilteredStringView<'a>,
    token: &FilteredStringView<'_>,
) -> Vec<FilteredStringView<'a>> {
    let table = view.raw_positions();
    let needle = token.to_bytes();
    if table.is_empty() || needle.is_empty() {
        tracing::trace!(
            size = table.len(),
            token_size = needle.len(),
            "split: nothing to split"
        );
        return vec![view.clone()];
    }

    let data = view.data();
    let text: Vec<u8> = table.iter().map(|&raw| data[raw]).collect();

    let mut segments = Vec::new();
    let mut start = 0;
    for hit in memmem::find_iter(&text, &needle) {
        segments.push(window(view, &table, start, hit));
        start = hit + needle.len();
    }
    segments.push(window(view, &table, start, text.len()));

    tracing::debug!(
        size = text.len(),
        token_size = needle.len(),
        segments = segments.len(),
        "split"
    );
    segments
}

/// View over logical bytes `[start, end)` of `view`, given its translation
/// table. Requires `start <= end <= table.len()`.
fn window<'a>(
    view: &FilteredStringView<'a>,
    table: &[usize],
    start: usize,
    end: usize,
) -> FilteredStringView<'a> {
    debug_assert!(start <= end && end <= table.len());
    if start == end {
        return FilteredStringView::from_parts(view.data(), Predicate::reject_all());
    }

    let raw_start = table[start];
    let raw_end = table[end - 1] + 1;
    tracing::trace!(start, end, raw_start, raw_end, "window");

    // Bytes are handed to predicates by reference into the buffer, so the
    // raw offset check is an address check against this subslice.
    let bounds = &view.data()[raw_start..raw_end];
    let predicate = view.predicate().clone();
    FilteredStringView::from_parts(
        view.data(),
        Predicate::new(move |c: &u8| {
            bounds.as_ptr_range().contains(&ptr::from_ref(c)) && predicate.test(c)
        }),
    )
}

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;
