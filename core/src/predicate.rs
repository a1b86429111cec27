//! Byte predicates that decide what a view exposes.

use core::{fmt, ops::Not};

use crate::{Arc, Vec};

type PredicateFn<'a> = dyn Fn(&u8) -> bool + Send + Sync + 'a;

/// A shared, immutable selection function over single bytes.
///
/// Cloning a `Predicate` only bumps a reference count, so views holding one
/// stay cheap to copy.
///
/// The byte is passed by reference and, when a view evaluates the predicate,
/// that reference points into the view's backing buffer. Predicates derived by
/// [`substr`](crate::substr) rely on this to recover the raw offset of the
/// byte, which means they reject bytes that live anywhere else.
#[derive(Clone)]
pub struct Predicate<'a> {
    inner: Arc<PredicateFn<'a>>,
}

impl<'a> Predicate<'a> {
    /// Wraps a closure.
    ///
    /// ```
    /// use fsv_core::Predicate;
    ///
    /// let vowel = Predicate::new(|c: &u8| b"aeiou".contains(c));
    /// assert!(vowel.test(&b'e'));
    /// assert!(!vowel.test(&b'x'));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&u8) -> bool + Send + Sync + 'a,
    {
        Predicate { inner: Arc::new(f) }
    }

    /// Accepts every byte. This is the default.
    pub fn accept_all() -> Self {
        Predicate::new(|_: &u8| true)
    }

    /// Rejects every byte.
    pub fn reject_all() -> Self {
        Predicate::new(|_: &u8| false)
    }

    /// Conjunction of `predicates`, evaluated in order and stopping at the
    /// first rejection. An empty list accepts everything.
    pub fn all<I>(predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a>>,
    {
        let predicates: Vec<Predicate<'a>> = predicates.into_iter().collect();
        Predicate::new(move |c: &u8| predicates.iter().all(|p| p.test(c)))
    }

    /// Accepts a byte when both `self` and `other` do. `other` is only
    /// consulted when `self` accepts.
    pub fn and(self, other: Predicate<'a>) -> Self {
        Predicate::new(move |c: &u8| self.test(c) && other.test(c))
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn test(&self, c: &u8) -> bool {
        (self.inner)(c)
    }

    /// Returns `true` when both handles share the same closure.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for Predicate<'_> {
    fn default() -> Self {
        Predicate::accept_all()
    }
}

impl<'a> Not for Predicate<'a> {
    type Output = Predicate<'a>;

    fn not(self) -> Self::Output {
        Predicate::new(move |c: &u8| !self.test(c))
    }
}

impl fmt::Debug for Predicate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

static_assertions::assert_impl_all!(Predicate<'static>: Send, Sync, Clone);
