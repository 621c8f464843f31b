//! The specification capability.
//!
//! [`Specification`] is the one thing [`Filter`](crate::Filter) needs from a
//! condition: whether a single item satisfies it. [`Predicate`](crate::Predicate)
//! is the main implementor; [`Not`] inverts any specification without adding a
//! variant to the predicate tree.

/// A condition that can be checked against a single item.
///
/// Implementations must be pure: checking the same item twice gives the same
/// answer.
///
/// # Manual Implementation
///
/// ```
/// use sift::{Filter, Specification};
///
/// struct Even;
///
/// impl Specification<u32> for Even {
///     fn is_satisfied(&self, item: &u32) -> bool {
///         item % 2 == 0
///     }
/// }
///
/// let numbers: [u32; 4] = [1, 2, 3, 4];
/// assert_eq!(Filter::new().apply(&numbers, &Even), vec![&2, &4]);
/// assert_eq!(Filter::new().apply(&numbers, &Even.negate()), vec![&1, &3]);
/// ```
pub trait Specification<T> {
    /// Returns `true` if `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Wraps this specification so it holds exactly when this one does not.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Negation of another specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    /// Creates the negation of `inner`.
    pub fn new(inner: S) -> Self {
        Not { inner }
    }

    /// The negated specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the negated specification.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S> Specification<T> for Not<S>
where
    S: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}
