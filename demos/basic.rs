//! Basic usage examples for `MutableBitVector`

use dense_bitvector::{BitVector, MutableBitVector};

fn main() {
    println!("=== MutableBitVector Basic Usage ===\n");

    // Create a new empty bit vector
    let mut bv = MutableBitVector::new();
    println!("Created new bit vector");
    println!("Initial capacity: {} bits", bv.capacity());
    println!("Stored words: {}\n", bv.word_count());

    // Set some bits; storage grows as needed
    bv.set(5);
    bv.set(10);
    bv.set(15);
    bv.set(100);

    println!("Set bits at positions: 5, 10, 15, 100");
    println!("Number of set bits: {}", bv.cardinality());
    println!("Capacity after growing: {} bits\n", bv.capacity());

    // Check if specific bits are set
    println!("Checking individual bits:");
    for i in &[0, 5, 10, 15, 20, 100, 150] {
        println!(
            "  Bit {}: {}",
            i,
            if bv.get(*i) { "set" } else { "unset" }
        );
    }

    // Iterate over set bits
    println!("\nIterating over set bits:");
    print!("  Set bits: ");
    for bit in &bv {
        print!("{bit} ");
    }
    println!("\n");

    // Flip and put
    println!("Flipping bit 10 and putting bit 20:");
    bv.flip(10);
    let was_set = bv.put(20, true);
    println!("  Bit 10 after flip: {}", bv.get(10));
    println!("  Bit 20 was set before put? {was_set}");
    println!("  Bit vector: {bv}\n");

    // Search
    println!("Searching:");
    println!("  First set bit: {:?}", bv.first(true));
    println!("  First zero bit: {:?}", bv.first_zero());
    println!("  Last set bit: {:?}", bv.last());
    println!("  First set bit in 16..: {:?}", bv.first_in(16.., true));
    println!("  Logical length: {}\n", bv.len());

    // Range operations
    println!("Range operations:");
    if let Err(err) = bv.fill(40..48) {
        println!("  fill failed: {err}");
    }
    println!("  After fill(40..48): {bv}");
    if let Err(err) = bv.clear(42..46) {
        println!("  clear failed: {err}");
    }
    println!("  After clear(42..46): {bv}");
    if let Err(err) = bv.fill(50..) {
        println!("  fill(50..) rejected: {err}");
    }
    println!();

    // Clear everything
    bv.clear_all();
    println!("After clear_all:");
    println!("  Is empty? {}", bv.is_empty());
    println!("  Stored words kept: {}", bv.word_count());
    bv.shrink_to_fit();
    println!("  Stored words after shrink_to_fit: {}", bv.word_count());
}
