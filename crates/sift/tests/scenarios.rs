//! End-to-end filtering scenarios over product catalogs.

use sift::{Color, Filter, Predicate, Product, Schema, SiftError, Size, Specification};

// ============================================================================
// Fixtures
// ============================================================================

/// Three items: A (red, L), B (blue, L), C (blue, M).
fn abc() -> Vec<Product> {
    vec![
        Product::new("A", Color::Red, Size::Large),
        Product::new("B", Color::Blue, Size::Large),
        Product::new("C", Color::Blue, Size::Medium),
    ]
}

/// The four-shirt catalog.
fn shirts() -> Vec<Product> {
    vec![
        Product::new("red lg tshirt", Color::Red, Size::Large),
        Product::new("green sm tshirt", Color::Green, Size::Small),
        Product::new("blue md tshirt", Color::Blue, Size::Medium),
        Product::new("blue lg tshirt", Color::Blue, Size::Large),
    ]
}

fn names<'a>(found: &[&'a Product]) -> Vec<&'a str> {
    found.iter().map(|p| p.name()).collect()
}

// ============================================================================
// Typed predicates
// ============================================================================

#[test]
fn blue_and_large() {
    let items = abc();
    let spec = Predicate::and([
        Product::COLOR.equals(Color::Blue),
        Product::SIZE.equals(Size::Large),
    ]);
    assert_eq!(names(&Filter::new().apply(&items, &spec)), vec!["B"]);
}

#[test]
fn blue_or_large() {
    let items = abc();
    let spec = Predicate::or([
        Product::COLOR.equals(Color::Blue),
        Product::SIZE.equals(Size::Large),
    ]);
    assert_eq!(
        names(&Filter::new().apply(&items, &spec)),
        vec!["A", "B", "C"]
    );
}

#[test]
fn green_matches_nothing() {
    let items = abc();
    let spec = Product::COLOR.equals(Color::Green);
    assert!(Filter::new().apply(&items, &spec).is_empty());
}

#[test]
fn shirt_catalog() {
    let items = shirts();
    let filter = Filter::new();

    let green = Product::COLOR.equals(Color::Green);
    assert_eq!(
        names(&filter.apply(&items, &green)),
        vec!["green sm tshirt"]
    );

    let blue_and_large = Predicate::and([
        Product::COLOR.equals(Color::Blue),
        Product::SIZE.equals(Size::Large),
    ]);
    assert_eq!(
        names(&filter.apply(&items, &blue_and_large)),
        vec!["blue lg tshirt"]
    );

    let blue_or_large = Predicate::or([
        Product::COLOR.equals(Color::Blue),
        Product::SIZE.equals(Size::Large),
    ]);
    assert_eq!(
        names(&filter.apply(&items, &blue_or_large)),
        vec!["red lg tshirt", "blue md tshirt", "blue lg tshirt"]
    );
}

#[test]
fn nested_three_levels() {
    let items = shirts();

    // (blue AND (medium OR small)) OR name = "red lg tshirt"
    let spec = Predicate::or([
        Predicate::and([
            Product::COLOR.equals(Color::Blue),
            Predicate::or([
                Product::SIZE.equals(Size::Medium),
                Product::SIZE.equals(Size::Small),
            ]),
        ]),
        Product::NAME.equals("red lg tshirt"),
    ]);

    assert_eq!(spec.depth(), 4);
    assert_eq!(
        names(&Filter::new().apply(&items, &spec)),
        vec!["red lg tshirt", "blue md tshirt"]
    );
}

#[test]
fn negated_color() {
    let items = shirts();
    let not_blue = Product::COLOR.equals(Color::Blue).negate();
    assert_eq!(
        names(&Filter::new().apply(&items, &not_blue)),
        vec!["red lg tshirt", "green sm tshirt"]
    );
}

#[test]
fn cloned_results_are_owned() {
    let items = shirts();
    let large = Product::SIZE.equals(Size::Large);
    let owned = Filter::new().apply_cloned(&items, &large);
    drop(items);
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[1].name(), "blue lg tshirt");
}

// ============================================================================
// Schema (string-keyed) predicates
// ============================================================================

#[test]
fn schema_conditions_match_typed_predicates() {
    let items = abc();
    let filter = Filter::new();

    let and = Product::all_of(["color=blue", "size=L"]).unwrap();
    assert_eq!(names(&filter.apply(&items, &and)), vec!["B"]);

    let or = Product::any_of(["color=blue", "size=L"]).unwrap();
    assert_eq!(names(&filter.apply(&items, &or)), vec!["A", "B", "C"]);

    let green = Product::parse_condition("color = green").unwrap();
    assert!(filter.apply(&items, &green).is_empty());
}

#[test]
fn schema_rejects_bad_input_before_filtering() {
    assert_eq!(
        Product::parse_condition("price=10").unwrap_err(),
        SiftError::UnknownField {
            type_name: "Product",
            field: "price".to_string(),
        }
    );
    assert_eq!(
        Product::parse_condition("size=XXL").unwrap_err().to_string(),
        "schema mismatch: 'XXL' is not a valid size"
    );
    assert!(matches!(
        Product::all_of(["color=blue", "blue"]),
        Err(SiftError::MalformedCondition(_))
    ));
}

#[test]
fn rendered_predicates() {
    let spec = Product::all_of(["color=blue", "size=L"]).unwrap();
    assert_eq!(spec.to_string(), "(color = Blue AND size = Large)");

    let spec = Product::any_of(["name=A", "color=red"]).unwrap();
    assert_eq!(spec.to_string(), "(name = \"A\" OR color = Red)");
}

// ============================================================================
// Sharing across threads
// ============================================================================

#[test]
fn concurrent_readers_agree() {
    let items = shirts();
    let spec = Predicate::or([
        Product::COLOR.equals(Color::Blue),
        Product::SIZE.equals(Size::Large),
    ]);

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Filter::new().count(&items, &spec)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("reader thread panicked"))
            .collect()
    });

    assert_eq!(counts, vec![3, 3, 3, 3]);
}
