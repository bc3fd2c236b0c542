use dense_bitvector::{BitVector, EMPTY, FrozenBitVector, MutableBitVector, bits};

#[test]
fn test_new() {
    let bv = MutableBitVector::new();
    assert_eq!(bv.word_count(), 1);
    assert_eq!(bv.capacity(), 32);
    assert!(bv.is_empty());
    assert_eq!(bv.len(), 0);
}

#[test]
fn test_fresh_vectors_hold_one_word() {
    for bv in [
        MutableBitVector::new(),
        MutableBitVector::default(),
        MutableBitVector::with_capacity(0),
        bits![],
    ] {
        assert_eq!(bv.word_count(), 1);
        assert_eq!(bv.first_zero_in(5..), Some(5));
        assert_eq!(bv.zeros().count(), 32);
        assert_eq!(bv, EMPTY);
    }
}

#[test]
fn test_basic_operations() {
    let mut bv = MutableBitVector::new();

    bv.set(0);
    bv.set(2);
    bv.set(49);

    assert!(bv.get(0));
    assert!(!bv.get(1));
    assert!(bv.get(2));
    assert!(bv.get(49));
    assert!(!bv.get(128));

    assert_eq!(bv.cardinality(), 3);
    assert_eq!(bv.len(), 50);
    assert!(!bv.is_empty());
}

#[test]
fn test_set_then_unset() {
    let mut bv = MutableBitVector::new();
    for i in [0, 31, 32, 63, 64, 1000] {
        bv.set(i);
        assert!(bv.get(i), "bit {i} should be set");
        bv.unset(i);
        assert!(!bv.get(i), "bit {i} should be clear");
    }
    assert!(bv.is_empty());
}

#[test]
fn test_set_value() {
    let mut bv = bits![0, 1, 2, 120, 420];
    bv.set_value(120, false);
    bv.set_value(7, true);
    assert_eq!(bv, bits![0, 1, 2, 7, 420]);
}

#[test]
fn test_flip() {
    let mut bv = MutableBitVector::new();
    bv.flip(70);
    assert!(bv.get(70));
    assert_eq!(bv.word_count(), 3);
    bv.flip(70);
    assert!(!bv.get(70));
    assert!(bv.is_empty());
}

#[test]
fn test_put_returns_previous() {
    let mut bv = MutableBitVector::new();
    assert!(!bv.put(10, true));
    assert!(bv.put(10, true));
    assert!(bv.put(10, false));
    assert!(!bv.put(10, false));
    assert!(!bv.get(10));
}

#[test]
fn test_put_false_grows_storage() {
    let mut bv = bits![1];
    assert!(!bv.put(100, false));
    assert_eq!(bv.word_count(), 4);
    assert_eq!(bv.zeros().count(), 127);
    assert_eq!(bv.iter().collect::<Vec<_>>(), [1]);
}

#[test]
fn test_unchecked_within_capacity() {
    let mut bv = MutableBitVector::new();
    bv.ensure_capacity(99);
    assert_eq!(bv.capacity(), 128);

    bv.set_unchecked(99);
    assert!(bv.get_unchecked(99));
    bv.unset_unchecked(99);
    assert!(!bv.get_unchecked(99));

    bv.flip_unchecked(64);
    assert!(bv.get_unchecked(64));
    bv.flip_unchecked(64);
    assert!(!bv.get_unchecked(64));

    bv.set_value_unchecked(40, true);
    assert!(bv.get_unchecked(40));
    bv.set_value_unchecked(40, false);
    assert!(!bv.get_unchecked(40));

    assert!(!bv.get_and_set_unchecked(7));
    assert!(bv.get_and_set_unchecked(7));
    assert!(bv.get_unchecked(7));
    assert!(bv.get_and_unset_unchecked(7));
    assert!(!bv.get_and_unset_unchecked(7));
    assert!(!bv.get_unchecked(7));

    assert!(bv.is_empty());
    assert_eq!(bv.word_count(), 4);
}

#[test]
#[should_panic]
fn test_set_unchecked_past_capacity() {
    let mut bv = MutableBitVector::with_capacity(32);
    bv.set_unchecked(32);
}

#[test]
#[should_panic]
fn test_get_unchecked_past_capacity() {
    let bv = bits![3];
    let _ = bv.get_unchecked(64);
}

#[test]
fn test_clear_all_keeps_storage() {
    let mut bv = bits![23, 4, 5, 123, 467, 10];
    let words = bv.word_count();
    assert!(!bv.is_empty());

    bv.clear_all();
    assert!(bv.is_empty());
    assert_eq!(bv.word_count(), words);
    assert_eq!(bv.iter().next(), None);
}

#[test]
fn test_cardinality_matches_get() {
    let mut bv = MutableBitVector::new();
    for i in (0..500).step_by(7) {
        bv.set(i);
    }
    for i in (0..500).step_by(21) {
        bv.unset(i);
    }
    let counted = (0..bv.capacity()).filter(|&i| bv.get(i)).count();
    assert_eq!(bv.cardinality(), counted);
}

#[test]
fn test_iterators() {
    let bv = bits![1, 2, 56, 64, 128, 129, 130, 131, 420];

    let bits: Vec<usize> = bv.iter().collect();
    assert_eq!(bits, [1, 2, 56, 64, 128, 129, 130, 131, 420]);

    let mut other = MutableBitVector::new();
    bv.for_each_bit(|i| other.set(i));
    assert_eq!(other, bv);
}

#[test]
fn test_zero_iteration_bounded_by_storage() {
    let mut bv = MutableBitVector::with_capacity(64);
    bv.fill(0..62).unwrap();

    let zeros: Vec<usize> = bv.zeros().collect();
    assert_eq!(zeros, [62, 63]);

    let mut visited = Vec::new();
    bv.for_each_zero_bit(|i| visited.push(i));
    assert_eq!(visited, zeros);
}

#[test]
fn test_into_iterator() {
    let bv = bits![2, 7, 300];

    let borrowed: Vec<usize> = (&bv).into_iter().collect();
    assert_eq!(borrowed, [2, 7, 300]);

    let owned: Vec<usize> = bv.into_iter().collect();
    assert_eq!(owned, [2, 7, 300]);
}

#[test]
fn test_from_iterator() {
    let bv: MutableBitVector = [7, 1, 5, 3, 5].into_iter().collect();
    assert_eq!(bv.iter().collect::<Vec<_>>(), [1, 3, 5, 7]);

    let mut bv = bv;
    bv.extend(&[40, 41]);
    assert_eq!(bv.cardinality(), 6);
}

#[test]
fn test_exact_size_iterator() {
    let bv = bits![0, 31, 32, 95];
    let mut iter = bv.iter();
    assert_eq!(iter.len(), 4);
    iter.next();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.size_hint(), (3, Some(3)));
    assert_eq!(iter.by_ref().count(), 3);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_empty_singleton() {
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.first(true), None);
    assert_eq!(EMPTY.first(false), Some(0));
    assert_eq!(EMPTY.last(), None);
    assert_eq!(EMPTY, MutableBitVector::new());
    assert_eq!(EMPTY, MutableBitVector::with_capacity(256));

    let mut copy = MutableBitVector::copy_of(&EMPTY);
    copy.set(5);
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.word_count(), 0);
}

#[test]
fn test_views_and_snapshots() {
    let mut bv = bits![3, 33];

    {
        let view = bv.view();
        assert!(view.get(33));
        assert_eq!(view.cardinality(), 2);
        assert_eq!(view, bv);
    }

    let snapshot = bv.snapshot();
    bv.set(4);
    assert!(!snapshot.get(4));
    assert_eq!(snapshot, bits![3, 33]);

    let copy = MutableBitVector::copy_of(&snapshot);
    assert_eq!(copy.words(), snapshot.words());

    let frozen = FrozenBitVector::from(bv.clone());
    let thawed = frozen.thaw();
    assert_eq!(thawed, bv);
}

#[test]
fn test_copy_is_deep() {
    let original = bits![1, 100];
    let mut copy = MutableBitVector::copy_of(&original);
    copy.set(2);
    copy.unset(100);
    assert_eq!(original, bits![1, 100]);
    assert_eq!(copy, bits![1, 2]);
}
