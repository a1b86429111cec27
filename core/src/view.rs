//! The filtered view itself.

use core::{
    cmp::Ordering,
    ffi::CStr,
    fmt::{self, Write},
    hash::{Hash, Hasher},
    ops::Index,
};

use crate::{Cursor, Error, Iter, Predicate, String, Vec};

/// A borrowed byte string seen through a [`Predicate`].
///
/// The view stores the backing slice and the predicate, nothing else. Every
/// query walks the raw bytes and evaluates the predicate again, so `len()` is
/// O(raw length) and no count is ever cached.
///
/// Cloning is shallow: the clone borrows the same buffer and shares the same
/// predicate.
///
/// Equality, ordering and hashing are defined on the *filtered* bytes only.
/// Two views over different buffers with different predicates are equal when
/// they expose the same sequence.
///
/// ```
/// use fsv_core::FilteredStringView;
///
/// let text = String::from("only 90s kids understand");
/// let digits = FilteredStringView::with_predicate(&text, |c: &u8| c.is_ascii_digit());
///
/// assert_eq!(digits.len(), 2);
/// assert_eq!(digits.raw_len(), text.len());
/// assert_eq!(digits[1], b'0');
/// assert_eq!(digits, "90");
/// ```
#[derive(Clone)]
pub struct FilteredStringView<'a> {
    data: &'a [u8],
    predicate: Predicate<'a>,
}

static_assertions::assert_impl_all!(FilteredStringView<'static>: Send, Sync, Clone, Default);

impl<'a> FilteredStringView<'a> {
    /// An empty view with no backing bytes and the accept-all predicate.
    pub fn empty() -> Self {
        FilteredStringView {
            data: &[],
            predicate: Predicate::accept_all(),
        }
    }

    /// A view over `data` that exposes every byte.
    pub fn new<T>(data: &'a T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Self::from_parts(data.as_ref(), Predicate::accept_all())
    }

    /// A view over `data` that exposes the bytes accepted by `predicate`.
    pub fn with_predicate<T, F>(data: &'a T, predicate: F) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
        F: Fn(&u8) -> bool + Send + Sync + 'a,
    {
        Self::from_parts(data.as_ref(), Predicate::new(predicate))
    }

    /// A view from an already built predicate.
    pub fn from_parts(data: &'a [u8], predicate: Predicate<'a>) -> Self {
        FilteredStringView { data, predicate }
    }

    /// A view over the bytes of a C string, excluding the terminator.
    pub fn from_c_str(s: &'a CStr) -> Self {
        Self::from_parts(s.to_bytes(), Predicate::accept_all())
    }

    /// Like [`from_c_str`](Self::from_c_str), with a predicate.
    pub fn from_c_str_with_predicate<F>(s: &'a CStr, predicate: F) -> Self
    where
        F: Fn(&u8) -> bool + Send + Sync + 'a,
    {
        Self::from_parts(s.to_bytes(), Predicate::new(predicate))
    }

    /// A view that stops at the first NUL byte of `bytes`, or covers the
    /// whole slice when there is none.
    pub fn from_nul_terminated(bytes: &'a [u8]) -> Self {
        let end = memchr::memchr(0, bytes).unwrap_or(bytes.len());
        Self::from_parts(&bytes[..end], Predicate::accept_all())
    }

    /// Number of bytes accepted by the predicate.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.data.iter().filter(|&c| self.predicate.test(c)).count()
    }

    /// `true` when no byte is accepted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the backing buffer, ignoring the predicate.
    pub fn raw_len(&self) -> usize {
        self.data.len()
    }

    /// The whole backing buffer, *unfiltered*.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The predicate deciding which bytes are visible.
    pub fn predicate(&self) -> &Predicate<'a> {
        &self.predicate
    }

    /// Raw offsets of the accepted bytes, in ascending order.
    ///
    /// Entry `k` is the raw offset of logical byte `k`, so this is the
    /// logical-to-raw translation table of the view.
    ///
    /// ```
    /// use fsv_core::FilteredStringView;
    ///
    /// let view = FilteredStringView::with_predicate("a-b--c", |c: &u8| *c != b'-');
    /// assert_eq!(view.raw_positions(), vec![0, 2, 5]);
    /// ```
    pub fn raw_positions(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, c)| self.predicate.test(c))
            .map(|(i, _)| i)
            .collect()
    }

    /// Raw offset of logical byte `index`.
    pub fn raw_position(&self, index: usize) -> Option<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, c)| self.predicate.test(c))
            .nth(index)
            .map(|(i, _)| i)
    }

    /// Logical byte `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a u8> {
        self.raw_position(index).map(|raw| &self.data[raw])
    }

    /// Checked access to logical byte `index`.
    ///
    /// ```
    /// use fsv_core::{Error, FilteredStringView};
    ///
    /// let view = FilteredStringView::new("cat");
    /// assert_eq!(view.at(2), Ok(&b't'));
    /// assert_eq!(view.at(3), Err(Error::IndexOutOfRange { index: 3, size: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&'a u8, Error> {
        self.get(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            size: self.len(),
        })
    }

    /// Copies the accepted bytes into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.iter().copied().collect()
    }

    /// Iterates over the accepted bytes, front to back or back to front.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter::new(self.data, &self.predicate)
    }

    /// Cursor at the first accepted byte, or at the end when there is none.
    pub fn cursor_front(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, self.first_accepted(0))
    }

    /// Cursor one past the last raw byte.
    pub fn cursor_end(&self) -> Cursor<'_, 'a> {
        Cursor::new(self, self.data.len())
    }

    /// A view over the same buffer that keeps the current predicate and
    /// additionally requires `predicate`.
    ///
    /// This is the conjoining counterpart of [`compose`](crate::compose),
    /// which drops the current predicate.
    pub fn refine<F>(&self, predicate: F) -> Self
    where
        F: Fn(&u8) -> bool + Send + Sync + 'a,
    {
        Self::from_parts(
            self.data,
            self.predicate.clone().and(Predicate::new(predicate)),
        )
    }

    /// Moves the view out, leaving an empty one in its place.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    pub(crate) fn accepts(&self, raw: usize) -> bool {
        self.predicate.test(&self.data[raw])
    }

    /// First raw offset `>= start` that the predicate accepts, or the raw
    /// length.
    pub(crate) fn first_accepted(&self, start: usize) -> usize {
        (start..self.data.len())
            .find(|&raw| self.accepts(raw))
            .unwrap_or(self.data.len())
    }
}

impl Default for FilteredStringView<'_> {
    fn default() -> Self {
        FilteredStringView::empty()
    }
}

impl Index<usize> for FilteredStringView<'_> {
    type Output = u8;

    /// Logical byte `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.len()`. Use [`at`](FilteredStringView::at)
    /// or [`get`](FilteredStringView::get) for checked access.
    fn index(&self, index: usize) -> &u8 {
        match self.get(index) {
            Some(c) => c,
            None => panic!(
                "index out of bounds: the filtered size is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<'v, 'a> IntoIterator for &'v FilteredStringView<'a> {
    type Item = &'a u8;
    type IntoIter = Iter<'v, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for FilteredStringView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for FilteredStringView<'_> {}

impl PartialOrd for FilteredStringView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilteredStringView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl Hash for FilteredStringView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut n = 0usize;
        for c in self {
            state.write_u8(*c);
            n += 1;
        }
        state.write_usize(n);
    }
}

impl PartialEq<[u8]> for FilteredStringView<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.iter().eq(other.iter())
    }
}

impl PartialEq<str> for FilteredStringView<'_> {
    fn eq(&self, other: &str) -> bool {
        *self == *other.as_bytes()
    }
}

impl PartialEq<&str> for FilteredStringView<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == *other.as_bytes()
    }
}

impl PartialEq<FilteredStringView<'_>> for str {
    fn eq(&self, other: &FilteredStringView<'_>) -> bool {
        other == self
    }
}

impl PartialEq<FilteredStringView<'_>> for &str {
    fn eq(&self, other: &FilteredStringView<'_>) -> bool {
        other == self
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Writes the accepted bytes in order. Valid UTF-8 runs pass through
/// unchanged; each invalid sequence becomes U+FFFD.
impl fmt::Display for FilteredStringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        for chunk in bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FilteredStringView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self {
            write!(f, "{}", c.escape_ascii())?;
        }
        f.write_char('"')
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<'a> From<&'a str> for FilteredStringView<'a> {
    fn from(s: &'a str) -> Self {
        FilteredStringView::new(s)
    }
}

impl<'a> From<&'a String> for FilteredStringView<'a> {
    fn from(s: &'a String) -> Self {
        FilteredStringView::new(s)
    }
}

impl<'a> From<&'a [u8]> for FilteredStringView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        FilteredStringView::new(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FilteredStringView<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        FilteredStringView::new(bytes)
    }
}

impl<'a> From<&'a CStr> for FilteredStringView<'a> {
    fn from(s: &'a CStr) -> Self {
        FilteredStringView::from_c_str(s)
    }
}

impl From<&FilteredStringView<'_>> for Vec<u8> {
    fn from(view: &FilteredStringView<'_>) -> Self {
        view.to_bytes()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
