//! String-keyed predicate construction.
//!
//! Typed predicates reference fields through [`Field`](crate::Field)
//! accessors and cannot name a field that does not exist. Input that arrives
//! as text (command-line flags, query strings, config) goes through
//! [`Schema`] instead, which resolves names and parses values once, while the
//! predicate is being built. Anything that does not fit the item type is
//! rejected here with a [`SiftError`], so evaluation itself stays infallible.

use log::debug;

use crate::error::{Result, SiftError};
use crate::predicate::Predicate;

/// An item type whose fields can be addressed by name.
///
/// # Example
///
/// ```
/// use sift::{Filter, Product, Schema, Color, Size};
///
/// let products = vec![
///     Product::new("red lg tshirt", Color::Red, Size::Large),
///     Product::new("blue lg tshirt", Color::Blue, Size::Large),
/// ];
///
/// let spec = Product::all_of(["color=blue", "size=large"]).unwrap();
/// let found = Filter::new().apply(&products, &spec);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "blue lg tshirt");
///
/// assert!(Product::parse_condition("weight=10").is_err());
/// ```
pub trait Schema: Sized + 'static {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Names of the addressable fields, in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Builds a leaf predicate for `field` equal to the parsed `value`.
    ///
    /// Fails with [`SiftError::UnknownField`] if the field does not exist and
    /// [`SiftError::InvalidValue`] if the value does not parse.
    fn field_equals(field: &str, value: &str) -> Result<Predicate<Self>>;

    /// Parses a single `field=value` condition.
    ///
    /// Splits on the first `=`; whitespace around either side is ignored.
    fn parse_condition(condition: &str) -> Result<Predicate<Self>> {
        let Some((field, value)) = condition.split_once('=') else {
            debug!("rejecting condition without '=': {:?}", condition);
            return Err(SiftError::MalformedCondition(condition.to_string()));
        };
        Self::field_equals(field.trim(), value.trim())
    }

    /// Parses every condition and joins them with `And`.
    ///
    /// No conditions yields the empty `And`, which matches everything.
    fn all_of<'c, I>(conditions: I) -> Result<Predicate<Self>>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let children = conditions
            .into_iter()
            .map(Self::parse_condition)
            .collect::<Result<Vec<_>>>()?;
        Ok(Predicate::And(children))
    }

    /// Parses every condition and joins them with `Or`.
    ///
    /// No conditions yields the empty `Or`, which matches nothing.
    fn any_of<'c, I>(conditions: I) -> Result<Predicate<Self>>
    where
        I: IntoIterator<Item = &'c str>,
    {
        let children = conditions
            .into_iter()
            .map(Self::parse_condition)
            .collect::<Result<Vec<_>>>()?;
        Ok(Predicate::Or(children))
    }
}

/// Builds the error for a field name `S` does not have.
pub fn unknown_field<S: Schema>(field: &str) -> SiftError {
    debug!(
        "{} has no field {:?}; known fields: {:?}",
        S::TYPE_NAME,
        field,
        S::field_names()
    );
    SiftError::UnknownField {
        type_name: S::TYPE_NAME,
        field: field.to_string(),
    }
}
