//! Predicate trees.
//!
//! A [`Predicate`] is an immutable tree of conditions over one item type.
//! Leaves compare a single field against an expected value; `And` and `Or`
//! combine an ordered list of children.
//!
//! # Empty composites
//!
//! An `And` with no children is always satisfied and an `Or` with no children
//! never is. These are the identities of the two operators, so adding a child
//! to an empty composite behaves exactly like that child on its own.

use std::fmt;
use std::sync::Arc;

use crate::field::Field;
use crate::specification::Specification;

/// A leaf predicate: one field compared for equality with an expected value.
///
/// The field's value type is fixed when the leaf is built and erased
/// afterwards, so leaves over different fields can live in the same tree.
pub struct FieldEquals<T> {
    field: &'static str,
    expected: String,
    matcher: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: 'static> FieldEquals<T> {
    /// Creates a leaf that holds when `field` equals `expected`.
    pub fn new<V>(field: Field<T, V>, expected: impl Into<V>) -> Self
    where
        V: PartialEq + fmt::Debug + Send + Sync + 'static,
    {
        let expected = expected.into();
        let rendered = format!("{:?}", expected);
        FieldEquals {
            field: field.name(),
            expected: rendered,
            matcher: Arc::new(move |item: &T| *field.get(item) == expected),
        }
    }
}

impl<T> FieldEquals<T> {
    /// Name of the compared field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Debug rendering of the expected value.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns `true` if the item's field equals the expected value.
    pub fn matches(&self, item: &T) -> bool {
        (self.matcher)(item)
    }
}

impl<T> Clone for FieldEquals<T> {
    fn clone(&self) -> Self {
        FieldEquals {
            field: self.field,
            expected: self.expected.clone(),
            matcher: Arc::clone(&self.matcher),
        }
    }
}

impl<T> fmt::Debug for FieldEquals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEquals")
            .field("field", &self.field)
            .field("expected", &self.expected)
            .finish()
    }
}

impl<T> fmt::Display for FieldEquals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.expected)
    }
}

/// A condition over items of type `T`.
///
/// # Example
///
/// ```
/// use sift::{Color, Predicate, Product, Size};
///
/// let blue_and_large = Predicate::and([
///     Product::COLOR.equals(Color::Blue),
///     Product::SIZE.equals(Size::Large),
/// ]);
///
/// let shirt = Product::new("blue lg tshirt", Color::Blue, Size::Large);
/// assert!(blue_and_large.evaluate(&shirt));
/// assert_eq!(blue_and_large.to_string(), "(color = Blue AND size = Large)");
/// ```
pub enum Predicate<T> {
    /// Holds when one field equals an expected value.
    FieldEquals(FieldEquals<T>),
    /// Holds when every child holds. Empty is always satisfied.
    And(Vec<Predicate<T>>),
    /// Holds when at least one child holds. Empty is never satisfied.
    Or(Vec<Predicate<T>>),
}

impl<T: 'static> Predicate<T> {
    /// Creates a leaf predicate comparing `field` with `expected`.
    pub fn field_equals<V>(field: Field<T, V>, expected: impl Into<V>) -> Self
    where
        V: PartialEq + fmt::Debug + Send + Sync + 'static,
    {
        Predicate::FieldEquals(FieldEquals::new(field, expected))
    }
}

impl<T> Predicate<T> {
    /// Creates a conjunction of `children`, in order.
    pub fn and<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        Predicate::And(children.into_iter().collect())
    }

    /// Creates a disjunction of `children`, in order.
    pub fn or<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Predicate<T>>,
    {
        Predicate::Or(children.into_iter().collect())
    }

    /// A predicate every item satisfies (the empty `And`).
    pub fn always() -> Self {
        Predicate::And(Vec::new())
    }

    /// A predicate no item satisfies (the empty `Or`).
    pub fn never() -> Self {
        Predicate::Or(Vec::new())
    }

    /// Evaluates this predicate against `item`.
    ///
    /// `And` stops at the first child that fails and `Or` at the first that
    /// holds.
    pub fn evaluate(&self, item: &T) -> bool {
        match self {
            Predicate::FieldEquals(leaf) => leaf.matches(item),
            Predicate::And(children) => children.iter().all(|child| child.evaluate(item)),
            Predicate::Or(children) => children.iter().any(|child| child.evaluate(item)),
        }
    }

    /// Returns the direct children. A leaf has none.
    pub fn children(&self) -> &[Predicate<T>] {
        match self {
            Predicate::FieldEquals(_) => &[],
            Predicate::And(children) | Predicate::Or(children) => children,
        }
    }

    /// Returns `true` for a `FieldEquals` leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Predicate::FieldEquals(_))
    }

    /// Total number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::FieldEquals(_) => 1,
            Predicate::And(children) | Predicate::Or(children) => {
                children.iter().map(Predicate::leaf_count).sum()
            }
        }
    }

    /// Height of the tree. A leaf or an empty composite has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Predicate::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<T> Specification<T> for Predicate<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.evaluate(item)
    }
}

impl<T> From<FieldEquals<T>> for Predicate<T> {
    fn from(leaf: FieldEquals<T>) -> Self {
        Predicate::FieldEquals(leaf)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        match self {
            Predicate::FieldEquals(leaf) => Predicate::FieldEquals(leaf.clone()),
            Predicate::And(children) => Predicate::And(children.clone()),
            Predicate::Or(children) => Predicate::Or(children.clone()),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::FieldEquals(leaf) => f.debug_tuple("FieldEquals").field(leaf).finish(),
            Predicate::And(children) => f.debug_tuple("And").field(children).finish(),
            Predicate::Or(children) => f.debug_tuple("Or").field(children).finish(),
        }
    }
}

impl<T> fmt::Display for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (children, joiner) = match self {
            Predicate::FieldEquals(leaf) => return write!(f, "{}", leaf),
            Predicate::And(children) if children.is_empty() => return f.write_str("TRUE"),
            Predicate::Or(children) if children.is_empty() => return f.write_str("FALSE"),
            Predicate::And(children) => (children, " AND "),
            Predicate::Or(children) => (children, " OR "),
        };

        f.write_str("(")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(joiner)?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str(")")
    }
}
