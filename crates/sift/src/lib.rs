//! Sift - composable specifications for filtering in-memory collections.
//!
//! Sift selects the items of a slice that satisfy a condition. Conditions are
//! small immutable trees:
//!
//! - **Leaves** compare one field of the item with an expected value
//! - **`And`** holds when every child holds (empty = always holds)
//! - **`Or`** holds when any child holds (empty = never holds)
//!
//! Fields are referenced through typed accessors, so a predicate cannot name
//! a field the item does not have or compare it with a value of the wrong
//! type. Evaluation and filtering never fail.
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{Color, Filter, Predicate, Product, Size};
//!
//! let products = vec![
//!     Product::new("red lg tshirt", Color::Red, Size::Large),
//!     Product::new("green sm tshirt", Color::Green, Size::Small),
//!     Product::new("blue md tshirt", Color::Blue, Size::Medium),
//!     Product::new("blue lg tshirt", Color::Blue, Size::Large),
//! ];
//!
//! let filter = Filter::new();
//!
//! let blue_and_large = Predicate::and([
//!     Product::COLOR.equals(Color::Blue),
//!     Product::SIZE.equals(Size::Large),
//! ]);
//! let found = filter.apply(&products, &blue_and_large);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name(), "blue lg tshirt");
//!
//! let blue_or_large = Predicate::or([
//!     Product::COLOR.equals(Color::Blue),
//!     Product::SIZE.equals(Size::Large),
//! ]);
//! assert_eq!(filter.count(&products, &blue_or_large), 3);
//! ```
//!
//! # Your Own Item Types
//!
//! Declare a [`Field`] per queryable field and build predicates from it:
//!
//! ```rust
//! use sift::{Field, Filter, Predicate, Specification};
//!
//! struct Task {
//!     title: String,
//!     priority: u8,
//!     done: bool,
//! }
//!
//! fn priority(task: &Task) -> &u8 {
//!     &task.priority
//! }
//!
//! fn done(task: &Task) -> &bool {
//!     &task.done
//! }
//!
//! impl Task {
//!     const PRIORITY: Field<Task, u8> = Field::new("priority", priority);
//!     const DONE: Field<Task, bool> = Field::new("done", done);
//! }
//!
//! let tasks = vec![
//!     Task { title: "Write docs".into(), priority: 3, done: false },
//!     Task { title: "Fix bug".into(), priority: 5, done: true },
//! ];
//!
//! let open = Task::DONE.equals(true).negate();
//! let open_titles: Vec<&str> = Filter::new()
//!     .iter(&tasks, &open)
//!     .map(|t| t.title.as_str())
//!     .collect();
//! assert_eq!(open_titles, vec!["Write docs"]);
//!
//! let urgent = Predicate::or([Task::PRIORITY.equals(5u8), Task::PRIORITY.equals(4u8)]);
//! assert!(Filter::new().any(&tasks, &urgent));
//! ```
//!
//! # Fields by Name
//!
//! When field names and values arrive as text, implement [`Schema`] to
//! resolve them while the predicate is built. Mismatches surface as
//! [`SiftError`] there and nowhere else.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Product`], [`Color`] and [`Size`]

mod error;
mod field;
mod filter;
mod predicate;
mod product;
mod schema;
mod specification;

// Re-export public API
pub use error::{Result, SiftError};
pub use field::Field;
pub use filter::{Filter, FilterIter};
pub use predicate::{FieldEquals, Predicate};
pub use product::{Color, Product, Size};
pub use schema::{unknown_field, Schema};
pub use specification::{Not, Specification};
