//! Joining conditional class names.
//!
//! Strings, numbers, nested lists and dictionaries of conditions are
//! flattened into one space separated string. Falsy values are skipped.

use utilkit::{class_names, join_class_names, ClassDictionary, ClassValue};

fn main() {
    println!("=== Class Names Example ===\n");

    let is_active = true;
    let is_disabled = false;

    let button = class_names!(
        "btn",
        ClassDictionary::new()
            .with("btn-active", is_active)
            .with("btn-disabled", is_disabled),
    );
    println!("Button:        {:?}", button);

    let nested = class_names!("a", vec!["b", ""], ["c", "d"], None::<&str>, false);
    println!("Nested lists:  {:?}", nested);

    let numbers = class_names!(0, 1, 2.5, 1e21, 9_007_199_254_740_993u64);
    println!("Numbers:       {:?}", numbers);

    // Re-inserting a key replaces the condition but keeps its position
    let mut flags = ClassDictionary::new();
    flags.insert("first", true);
    flags.insert("second", true);
    flags.insert("first", 0);
    println!("Dictionary:    {:?}", class_names!(flags));

    // Descriptors can also be built at runtime
    let descriptors: Vec<ClassValue> = ["card", "", "card-wide"]
        .iter()
        .map(|name| ClassValue::from(*name))
        .collect();
    println!("From iterator: {:?}", join_class_names(descriptors));

    println!("\n=== Example Complete ===");
}
