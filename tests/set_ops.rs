use std::hash::{DefaultHasher, Hash, Hasher};

use dense_bitvector::{
    BitVector, BitVectorView, EMPTY, FrozenBitVector, MutableBitVector, ParseBitVectorError, bits,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_bitwise_operations() {
    let a = bits![0, 1, 2, 3, 120, 130];
    let b = bits![0, 1, 2, 120, 121, 122, 123, 130];

    let mut and = a.clone();
    and.and(&b);
    assert_eq!(and, bits![0, 1, 2, 120, 130]);

    let mut and_not = a.clone();
    and_not.and_not(&b);
    assert_eq!(and_not, bits![3]);

    let mut or = a.clone();
    or.or(&b);
    assert_eq!(or, bits![0, 1, 2, 3, 120, 121, 122, 123, 130]);

    let mut xor = a.clone();
    xor.xor(&b);
    assert_eq!(xor, bits![3, 121, 122, 123]);
}

#[test]
fn test_and_with_shorter_operand_zeroes_tail() {
    let mut a = bits![1, 100, 200];
    a.and(&bits![1]);
    assert_eq!(a, bits![1]);
    assert_eq!(a.word_count(), 7);

    let mut a = bits![1, 100];
    a.and(&EMPTY);
    assert!(a.is_empty());
}

#[test]
fn test_and_not_with_longer_operand_does_not_grow() {
    let mut a = bits![1];
    a.and_not(&bits![1, 500]);
    assert!(a.is_empty());
    assert_eq!(a.word_count(), 1);
}

#[test]
fn test_or_and_xor_grow_to_operand() {
    let mut a = bits![1];
    a.or(&bits![300]);
    assert_eq!(a.word_count(), 10);
    assert_eq!(a, bits![1, 300]);

    let mut a = bits![1];
    a.xor(&bits![1, 300]);
    assert_eq!(a, bits![300]);
    assert_eq!(a.word_count(), 10);

    // Operands that are longer only in zero words still grow storage.
    let mut a = bits![1];
    a.or(&MutableBitVector::with_capacity(128));
    assert_eq!(a.word_count(), 4);
    assert_eq!(a, bits![1]);
}

#[test]
fn test_self_operations() {
    let a = bits![4, 8, 15, 16, 23, 42];

    let mut x = a.clone();
    x.and(&a.clone());
    assert_eq!(x, a);

    let mut x = a.clone();
    x.or(&a.clone());
    assert_eq!(x, a);

    let mut x = a.clone();
    x.xor(&a.clone());
    assert!(x.is_empty());

    let mut x = a.clone();
    x.and_not(&a.clone());
    assert!(x.is_empty());
}

#[test]
fn test_operations_accept_every_kind() {
    let snapshot: FrozenBitVector = bits![2, 64].snapshot();
    let words = [0b100_u32, 0, 1];
    let view = BitVectorView::new(&words);

    let mut a = bits![2, 3];
    a.or(&snapshot);
    a.and(&view);
    assert_eq!(a, bits![2, 64]);
}

#[test]
fn test_copying_operations() {
    let a = bits![0, 1, 2, 3, 120, 130];
    let b = bits![0, 1, 2, 120, 121, 122, 123, 130];

    assert_eq!(a.intersection(&b), bits![0, 1, 2, 120, 130]);
    assert_eq!(a.difference(&b), bits![3]);
    assert_eq!(
        a.union(&b),
        bits![0, 1, 2, 3, 120, 121, 122, 123, 130]
    );
    assert_eq!(a.symmetric_difference(&b), bits![3, 121, 122, 123]);

    // Operands are untouched.
    assert_eq!(a, bits![0, 1, 2, 3, 120, 130]);
    assert_eq!(b.cardinality(), 8);
}

#[test]
fn test_operators() {
    let a = bits![0, 1, 2, 3, 120, 130];
    let b = bits![0, 1, 2, 120, 121, 122, 123, 130];

    assert_eq!(&a & &b, bits![0, 1, 2, 120, 130]);
    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a ^ &b, bits![3, 121, 122, 123]);
    assert_eq!(&a - &b, bits![3]);

    let mut c = a.clone();
    c &= &b;
    c |= &bits![500];
    c ^= &bits![0, 501];
    c -= &bits![1];
    assert_eq!(c, bits![2, 120, 130, 500, 501]);
}

#[test]
fn test_fundamental_relations() {
    let bv = bits![0, 1, 2, 3, 7, 8, 9];

    assert!(bv.contains(&bits![1, 8, 9]));
    assert!(!bits![1, 8, 9].contains(&bv));
    assert!(bv.intersects(&bits![3, 4, 5, 6, 7]));
    assert!(!bv.intersects(&bits![4, 5, 6]));

    assert!(!bv.contains(&bits![100]));
    assert!(!bv.get(100));
}

#[test]
fn test_contains_ignores_trailing_zero_words() {
    let bv = bits![1, 2];
    let mut other = bits![2, 900];
    other.unset(900);
    assert!(bv.contains(&other));
    assert!(bv.contains(&EMPTY));
    assert!(EMPTY.contains(&EMPTY));
    assert!(!EMPTY.contains(&bv));
}

#[test]
fn test_intersects_empty() {
    assert!(!EMPTY.intersects(&bits![1]));
    assert!(!bits![1].intersects(&EMPTY));
    assert!(!bits![].intersects(&bits![]));
}

#[test]
fn test_equality() {
    assert_eq!(
        bits![1, 2, 4, 1230, 1323, 1324],
        bits![1, 2, 4, 1230, 1323, 1324]
    );

    let mut bv = bits![0, 1, 2, 120, 420];
    bv.set_value(120, false);
    assert_eq!(bv, bits![0, 1, 2, 420]);
    assert_ne!(bv, bits![0, 1, 2]);
}

#[test]
fn test_equality_ignores_storage_length() {
    let small = bits![5];
    let mut large = MutableBitVector::with_capacity(1024);
    large.set(5);
    assert_eq!(small, large);
    assert_eq!(large, small);
    assert_eq!(small.view(), large.snapshot());

    assert_eq!(MutableBitVector::with_capacity(96), EMPTY);
    assert_ne!(large, bits![5, 1000]);
}

#[test]
fn test_hash_matches_equality() {
    let ascending: MutableBitVector = (0..200).step_by(3).collect();
    let descending: MutableBitVector = (0..200).step_by(3).rev().collect();
    assert_eq!(ascending, descending);
    assert_eq!(hash_of(&ascending), hash_of(&descending));
    assert_eq!(ascending.hash_code(), descending.hash_code());

    let mut padded = ascending.clone();
    padded.ensure_capacity(5000);
    assert_ne!(padded.word_count(), ascending.word_count());
    assert_eq!(hash_of(&padded), hash_of(&ascending));
    assert_eq!(padded.hash_code(), ascending.hash_code());

    let frozen = padded.snapshot();
    assert_eq!(hash_of(&frozen), hash_of(&ascending.view()));
}

#[test]
fn test_hash_code_values() {
    assert_eq!(EMPTY.hash_code(), 0);
    assert_eq!(bits![0].hash_code(), 1);
    assert_eq!(bits![0, 32].hash_code(), 127 + 1);
    // Word-aligned length: the last word is full.
    assert_eq!(
        MutableBitVector::from([u32::MAX]).hash_code(),
        u32::MAX
    );
    assert_eq!(
        MutableBitVector::from([u32::MAX, 0, 0]).hash_code(),
        u32::MAX
    );
}

#[test]
fn test_display_and_parse() {
    let bv = bits![1, 2, 4];
    assert_eq!(bv.to_string(), "[1, 2, 4]");
    assert_eq!(EMPTY.to_string(), "[]");
    assert_eq!(format!("{:?}", bits![3, 70]), "{3, 70}");

    let parsed: MutableBitVector = "[4, 2, 1, 2]".parse().unwrap();
    assert_eq!(parsed, bv);
    let parsed: MutableBitVector = " [ ] ".parse().unwrap();
    assert!(parsed.is_empty());

    assert_eq!(
        "1, 2".parse::<MutableBitVector>().unwrap_err(),
        ParseBitVectorError::MissingBrackets
    );
    assert_eq!(
        "[1, x]".parse::<MutableBitVector>().unwrap_err(),
        ParseBitVectorError::InvalidIndex {
            token: "x".into(),
            pos: 1
        }
    );
    assert!("[1,]".parse::<MutableBitVector>().is_err());
}

#[test]
fn test_display_round_trips() {
    let bv: MutableBitVector = (0..300).filter(|i| i % 7 == 3).collect();
    let parsed: MutableBitVector = bv.to_string().parse().unwrap();
    assert_eq!(parsed, bv);
}
