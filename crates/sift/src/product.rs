//! A small product catalog item.
//!
//! [`Product`] is the stock item type: a name plus a [`Color`] and a
//! [`Size`] drawn from fixed sets. It exposes its fields as [`Field`]
//! constants for typed predicates and implements [`Schema`] for predicates
//! built from text.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SiftError};
use crate::field::Field;
use crate::predicate::Predicate;
use crate::schema::{unknown_field, Schema};

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            _ => Err(SiftError::InvalidValue {
                field: "color",
                value: s.to_string(),
            }),
        }
    }
}

/// Product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = SiftError;

    /// Accepts full names and the `s`/`m`/`l` and `sm`/`md`/`lg` shorthands,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "sm" | "s" => Ok(Size::Small),
            "medium" | "md" | "m" => Ok(Size::Medium),
            "large" | "lg" | "l" => Ok(Size::Large),
            _ => Err(SiftError::InvalidValue {
                field: "size",
                value: s.to_string(),
            }),
        }
    }
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

fn name_of(product: &Product) -> &String {
    &product.name
}

fn color_of(product: &Product) -> &Color {
    &product.color
}

fn size_of(product: &Product) -> &Size {
    &product.size
}

impl Product {
    pub const NAME: Field<Product, String> = Field::new("name", name_of);
    pub const COLOR: Field<Product, Color> = Field::new("color", color_of);
    pub const SIZE: Field<Product, Size> = Field::new("size", size_of);

    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

impl Schema for Product {
    const TYPE_NAME: &'static str = "Product";

    fn field_names() -> &'static [&'static str] {
        &["name", "color", "size"]
    }

    fn field_equals(field: &str, value: &str) -> Result<Predicate<Self>> {
        match field {
            "name" => Ok(Product::NAME.equals(value)),
            "color" => Ok(Product::COLOR.equals(value.parse::<Color>()?)),
            "size" => Ok(Product::SIZE.equals(value.parse::<Size>()?)),
            other => Err(unknown_field::<Self>(other)),
        }
    }
}
