//! Typed field accessors.
//!
//! A [`Field`] pairs a field name with a plain function that borrows the
//! field out of an item. Predicates hold the accessor itself rather than the
//! name, so a predicate can only ever reference a field the item type has.

use std::fmt;

use crate::predicate::Predicate;

/// A named, typed accessor for one field of `T`.
///
/// `Field::new` is `const`, so item types usually expose their fields as
/// associated constants:
///
/// ```
/// use sift::Field;
///
/// struct Task {
///     title: String,
///     done: bool,
/// }
///
/// fn title(task: &Task) -> &String {
///     &task.title
/// }
///
/// fn done(task: &Task) -> &bool {
///     &task.done
/// }
///
/// impl Task {
///     const TITLE: Field<Task, String> = Field::new("title", title);
///     const DONE: Field<Task, bool> = Field::new("done", done);
/// }
///
/// let task = Task { title: "Write docs".into(), done: false };
/// assert_eq!(Task::TITLE.get(&task), "Write docs");
/// assert!(!Task::DONE.get(&task));
/// assert_eq!(Task::DONE.name(), "done");
/// ```
pub struct Field<T, V> {
    name: &'static str,
    get: fn(&T) -> &V,
}

impl<T, V> Field<T, V> {
    /// Creates a field from its name and accessor.
    pub const fn new(name: &'static str, get: fn(&T) -> &V) -> Self {
        Field { name, get }
    }

    /// The field's name, used when rendering predicates.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Borrows this field's value out of `item`.
    pub fn get<'a>(&self, item: &'a T) -> &'a V {
        (self.get)(item)
    }
}

impl<T, V> Field<T, V>
where
    T: 'static,
    V: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Builds a predicate that holds when this field equals `expected`.
    pub fn equals(self, expected: impl Into<V>) -> Predicate<T> {
        Predicate::field_equals(self, expected)
    }
}

// Manual impls: derives would require `T: Clone` and `V: Clone`.
impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}
