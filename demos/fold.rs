//! Indexed folds with and without a seed.
//!
//! The combiner sees the accumulator, the element, its index and the whole
//! sequence. Without a seed the first element seeds the fold and the combiner
//! starts at index 1.

use utilkit::{fold, fold_seeded, reduce, SequenceFold};

fn main() {
    println!("=== Fold Example ===\n");

    let numbers = [3, 1, 4, 1, 5];
    println!("Sequence: {:?}\n", numbers);

    let sum = fold(&numbers, |acc, n, _, _| acc + n, None);
    println!("Sum without seed:    {:?}", sum);

    let seeded = fold(&numbers, |acc, n, _, _| acc + n, Some(100));
    println!("Sum seeded with 100: {:?}", seeded);

    println!("\nIndices seen by the combiner:");
    let _ = reduce(&numbers, |acc, n, index, all| {
        println!("  index {} of {}: {} + {}", index, all.len(), acc, n);
        acc + n
    });

    // The accumulator type may differ from the element type with a seed
    let weighted = fold_seeded(&numbers, 0usize, |acc, n, index, _| acc + *n as usize * index);
    println!("\nIndex-weighted sum: {}", weighted);

    let labels = ["alpha", "beta", "gamma"].fold_indexed(String::new(), |mut acc, word, index, all| {
        acc.push_str(word);
        if index + 1 < all.len() {
            acc.push_str(", ");
        }
        acc
    });
    println!("Joined labels: {}", labels);

    println!("\nEmpty input:");
    let empty: [i32; 0] = [];
    println!("  reduce:        {:?}", empty.reduce_indexed(|acc, n, _, _| acc + n));
    match reduce(&empty, |acc, n, _, _| acc + n) {
        Ok(total) => println!("  total: {}", total),
        Err(err) => println!("  error: {}", err),
    }
    println!("  fold seeded 7: {:?}", fold(&empty, |acc, n, _, _| acc + n, Some(7)));

    println!("\n=== Example Complete ===");
}
