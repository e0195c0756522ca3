use super::*;

fn vector(bits: &str) -> FixedBitVector {
    bits.chars().map(|c| c == '1').collect()
}

#[test]
fn test_new_is_all_zero() {
    let v = FixedBitVector::new(10);
    assert_eq!(v.len(), 10);
    assert_eq!(v.count_ones(), 0);
    assert!((0..10).all(|i| v.get(i) == Some(false)));
}

#[test]
fn test_declared_length_below_word_size() {
    let mut v = FixedBitVector::new(3);

    assert_eq!(v.len(), 3);
    assert_eq!(v.storage_words(), 1);
    assert_eq!(v.get(3), None);

    v.set(0, true);
    v.set(2, true);
    assert_eq!(v.to_string(), "101");
}

#[test]
fn test_storage_words_track_declared_length() {
    for len in [1, 63, 64, 65, 200] {
        let v = FixedBitVector::new(len);
        assert_eq!(v.len(), len);
        assert_eq!(v.storage_words(), len.div_ceil(BitWord::BITS as usize));
    }
}

#[test]
fn test_zero_length_vector() {
    let v = FixedBitVector::new(0);
    assert!(v.is_empty());
    assert_eq!(v.count_ones(), 0);
    assert_eq!(v.to_string(), "");
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_past_declared_length_panics() {
    let mut v = FixedBitVector::new(3);
    v.set(3, true);
}

#[test]
fn test_clone_is_independent() {
    let original = vector("1100101");
    let mut copy = original.clone();

    copy.set(0, false);
    copy.set(6, false);
    copy.xor_assign(&vector("1111111")).expect("same length");

    assert_eq!(original.to_string(), "1100101");
    assert_ne!(original, copy);
}

#[test]
fn test_bitwise_ops() {
    let a = vector("1100");
    let b = vector("1010");

    assert_eq!(a.and(&b).expect("same length").to_string(), "1000");
    assert_eq!(a.or(&b).expect("same length").to_string(), "1110");
    assert_eq!(a.xor(&b).expect("same length").to_string(), "0110");

    assert_eq!(a.to_string(), "1100");
    assert_eq!(b.to_string(), "1010");
}

#[test]
fn test_bitwise_ops_across_word_boundary() {
    let mut a = FixedBitVector::new(130);
    let mut b = FixedBitVector::new(130);
    a.set(0, true);
    a.set(64, true);
    a.set(129, true);
    b.set(64, true);
    b.set(128, true);

    assert_eq!(a.and(&b).expect("same length").count_ones(), 1);
    assert_eq!(a.or(&b).expect("same length").count_ones(), 4);
    assert_eq!(
        a.xor(&b).expect("same length").iter_ones().collect::<Vec<_>>(),
        vec![0, 128, 129]
    );
}

#[test]
fn test_length_mismatch() {
    let mut a = FixedBitVector::new(8);
    let b = FixedBitVector::new(9);

    let err = a.and_assign(&b).unwrap_err();
    assert_eq!(err, LengthMismatch { left: 8, right: 9 });
    assert!(a.or(&b).is_err());
    assert!(a.xor(&b).is_err());
}

#[test]
fn test_complement_stays_within_declared_length() {
    let v = vector("101");
    let inverted = v.complement();

    assert_eq!(inverted.len(), 3);
    assert_eq!(inverted.to_string(), "010");
    assert_eq!(inverted.count_ones(), 1);
    assert_eq!(FixedBitVector::new(5).complement().count_ones(), 5);
}

#[test]
fn test_from_bools_and_iter() {
    let v = FixedBitVector::from_bools(&[true, false, true, true]);
    assert_eq!(v.iter().collect::<Vec<_>>(), vec![true, false, true, true]);
    assert_eq!(v.iter_ones().collect::<Vec<_>>(), vec![0, 2, 3]);
}

#[test]
fn test_debug_includes_length_and_bits() {
    let debug = format!("{:?}", vector("011"));
    assert!(debug.contains("len: 3"));
    assert!(debug.contains("011"));
}
