//! Set operation examples for `MutableBitVector`

use dense_bitvector::{BitVector, MutableBitVector, bits};

fn main() {
    println!("=== MutableBitVector Set Operations ===\n");

    let a = bits![1, 2, 3, 5, 8];
    let b = bits![2, 3, 5, 7, 11];

    println!("Set A: {a}");
    println!("Set B: {b}\n");

    // Copying operations leave both operands untouched
    println!("Union (A | B): {}", a.union(&b));
    println!("Intersection (A & B): {}", a.intersection(&b));
    println!("Difference (A - B): {}", a.difference(&b));
    println!("Symmetric difference (A ^ B): {}\n", a.symmetric_difference(&b));

    // Operators
    println!("Operators:");
    println!("  &a | &b = {}", &a | &b);
    println!("  &a & &b = {}", &a & &b);
    println!("  &a - &b = {}", &a - &b);
    println!("  &a ^ &b = {}\n", &a ^ &b);

    // Relations
    let small = bits![2, 3];
    println!("Relations:");
    println!("  A contains {small}? {}", a.contains(&small));
    println!("  B contains A? {}", b.contains(&a));
    println!("  A intersects B? {}", a.intersects(&b));
    println!("  A intersects [100]? {}\n", a.intersects(&bits![100]));

    // In-place operations
    println!("In-place operations:");
    let mut c = a.clone();
    c.or(&b);
    println!("  A.or(B): {c}");

    let mut c = a.clone();
    c.and(&b);
    println!("  A.and(B): {c}");

    let mut c = a.clone();
    c.and_not(&b);
    println!("  A.and_not(B): {c}");

    let mut c = a.clone();
    c.xor(&b);
    println!("  A.xor(B): {c}\n");

    // Complement of a prefix
    let mut odd: MutableBitVector = [1, 3, 5].into_iter().collect();
    println!("Before invert(8): {odd}");
    odd.invert(8);
    println!("After invert(8): {odd}");
    println!("  Set bits: {:?}", odd.iter().collect::<Vec<_>>());
}
