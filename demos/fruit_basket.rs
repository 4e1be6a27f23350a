//! Fruit Basket
//!
//! This example walks through the life of a literal set built from models.
//!
//! Key concepts:
//! - Accessors derived from values and explicit hints
//! - Parsing untrusted input with default and custom messages
//! - Attribute lookup on models
//! - Deriving subsets with `pick` and `omit`
//!
//! Run with: cargo run --example fruit_basket

use enumerated_literals::core::{AccessorCase, EnumeratedLiteralsOptions, LiteralModel};
use enumerated_literals::enumerated_literals;
use enumerated_literals::formatters::HumanizeListOptions;
use enumerated_literals::literals::EnumeratedLiterals;

fn main() {
    println!("=== Fruit Basket ===\n");

    let fruits = EnumeratedLiterals::new(
        [
            LiteralModel::new("apple").with_attribute("color", "red"),
            LiteralModel::new("banana").with_attribute("color", "yellow"),
            LiteralModel::new("blue berry")
                .with_accessor("Blueberry")
                .with_attribute("color", "blue"),
            LiteralModel::new("orange").with_attribute("color", "orange"),
        ],
        EnumeratedLiteralsOptions::new().with_accessor_case(AccessorCase::Upper),
    )
    .unwrap();

    println!("Basket holds {} fruits: {}", fruits.len(), fruits);
    println!("Accessors:");
    for (accessor, value) in fruits.accessors().iter() {
        println!("  {accessor:<10} -> {value}");
    }

    println!("\nParsing input:");
    for input in ["banana", "cucumber"] {
        match fruits.parse(input, None) {
            Ok(fruit) => println!("  accepted '{fruit}'"),
            Err(err) => println!("  rejected: {err}"),
        }
    }
    match fruits.parse_multiple(&["apple", "kiwi", "grape"], Some("only basket fruit allowed")) {
        Ok(all) => println!("  accepted {all:?}"),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\nColors:");
    for (value, color) in fruits.values().iter().zip(fruits.get_attributes("color")) {
        println!("  {value}: {}", color.unwrap_or_default());
    }

    let berries = fruits
        .pick(&["blue berry"], EnumeratedLiteralsOptions::new())
        .unwrap();
    println!("\nPicked: {}", berries);

    let citrus_free = fruits
        .omit(&["orange"], EnumeratedLiteralsOptions::new())
        .unwrap();
    println!(
        "Without citrus: {}",
        citrus_free.humanize(&HumanizeListOptions::new().conjunction("or"))
    );

    println!("\nValue sets work the same way:");
    let sizes = enumerated_literals!(
        ["small", "extra large"],
        EnumeratedLiteralsOptions::new().with_invalid_value_error_message(|ctx| {
            format!("choose from {} sizes", ctx.expected.len())
        }),
    )
    .unwrap();
    println!("  EXTRA_LARGE -> {:?}", sizes.accessor("EXTRA_LARGE"));
    if let Err(err) = sizes.parse("huge", None) {
        println!("  rejected: {err}");
    }

    println!("\n=== Example Complete ===");
}
