//! Applying specifications to collections.
//!
//! [`Filter`] is stateless. Every method borrows the collection and the
//! specification, never mutates either, and keeps the input's order.

use log::trace;

use crate::specification::Specification;

/// Selects the items of a collection that satisfy a specification.
///
/// # Example
///
/// ```
/// use sift::{Color, Filter, Predicate, Product, Size};
///
/// let products = vec![
///     Product::new("red lg tshirt", Color::Red, Size::Large),
///     Product::new("blue md tshirt", Color::Blue, Size::Medium),
///     Product::new("blue lg tshirt", Color::Blue, Size::Large),
/// ];
///
/// let blue_or_large = Predicate::or([
///     Product::COLOR.equals(Color::Blue),
///     Product::SIZE.equals(Size::Large),
/// ]);
///
/// let filter = Filter::new();
/// assert_eq!(filter.count(&products, &blue_or_large), 3);
///
/// let green = Product::COLOR.equals(Color::Green);
/// assert!(filter.apply(&products, &green).is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter;

impl Filter {
    /// Creates a filter.
    pub fn new() -> Self {
        Filter
    }

    /// Returns references to the items satisfying `spec`, in input order.
    pub fn apply<'a, T, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let matched: Vec<&'a T> = items
            .iter()
            .filter(|item| spec.is_satisfied(item))
            .collect();

        trace!("filter matched {} of {} items", matched.len(), items.len());
        matched
    }

    /// Returns clones of the items satisfying `spec`, in input order.
    pub fn apply_cloned<T, S>(&self, items: &[T], spec: &S) -> Vec<T>
    where
        T: Clone,
        S: Specification<T> + ?Sized,
    {
        self.apply(items, spec).into_iter().cloned().collect()
    }

    /// Lazily yields the items satisfying `spec`.
    ///
    /// Accepts any iterator of references, so it also works over maps,
    /// chained slices and other filters.
    pub fn iter<'a, 's, T, I, S>(&self, items: I, spec: &'s S) -> FilterIter<'s, I::IntoIter, S>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
    {
        FilterIter {
            items: items.into_iter(),
            spec,
        }
    }

    /// Counts the items satisfying `spec`.
    pub fn count<T, S>(&self, items: &[T], spec: &S) -> usize
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().filter(|item| spec.is_satisfied(item)).count()
    }

    /// Returns `true` if any item satisfies `spec`.
    pub fn any<T, S>(&self, items: &[T], spec: &S) -> bool
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().any(|item| spec.is_satisfied(item))
    }

    /// Returns `true` if every item satisfies `spec`.
    ///
    /// An empty collection trivially satisfies any specification.
    pub fn all<T, S>(&self, items: &[T], spec: &S) -> bool
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().all(|item| spec.is_satisfied(item))
    }

    /// Returns the first item satisfying `spec`.
    pub fn first<'a, T, S>(&self, items: &'a [T], spec: &S) -> Option<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().find(|item| spec.is_satisfied(item))
    }
}

/// Lazy iterator returned by [`Filter::iter`].
pub struct FilterIter<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<I: Clone, S: ?Sized> Clone for FilterIter<'_, I, S> {
    fn clone(&self) -> Self {
        FilterIter {
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<'a, 's, T, I, S> Iterator for FilterIter<'s, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
