use types::{present_values, Optional, PresentValuesExt};

use Optional::{Absent, Present};

#[test]
fn keeps_present_values_in_order() {
    let seq = [Absent, Present(2), Present(3), Absent, Present(5)];
    let values: Vec<i32> = present_values(seq).collect();
    assert_eq!(values, vec![2, 3, 5]);
}

#[test]
fn empty_sequence_yields_nothing() {
    let seq: Vec<Optional<i32>> = Vec::new();
    assert_eq!(present_values(seq).next(), None);
}

#[test]
fn all_absent_yields_nothing() {
    for len in [1usize, 2, 17, 256] {
        let seq = vec![Optional::<u64>::Absent; len];
        assert_eq!(present_values(seq).count(), 0, "len {len}");
    }
}

#[test]
fn is_lazy() {
    let mut pulled = 0;
    let mut values = [Present(1), Absent, Present(2), Present(3)]
        .into_iter()
        .inspect(|_| pulled += 1)
        .present_values();

    assert_eq!(values.next(), Some(1));
    assert_eq!(values.next(), Some(2));
    drop(values);
    assert_eq!(pulled, 3);
}

#[test]
fn can_restart_from_a_clone() {
    let seq = [Present('a'), Absent, Present('b')];
    let values = present_values(seq.iter().copied());
    let first: String = values.clone().collect();
    let second: String = values.collect();
    assert_eq!(first, "ab");
    assert_eq!(first, second);
}

#[test]
fn works_on_borrowed_elements() {
    let seq = vec![Present(String::from("x")), Absent, Present(String::from("y"))];
    let joined: Vec<&str> = seq
        .iter()
        .map(Optional::as_ref)
        .present_values()
        .map(String::as_str)
        .collect();
    assert_eq!(joined, vec!["x", "y"]);
    assert_eq!(seq.len(), 3);
}

#[test]
fn runs_backwards() {
    let seq = [Absent, Present(2), Present(3), Absent, Present(5)];
    let reversed: Vec<i32> = present_values(seq).rev().collect();
    assert_eq!(reversed, vec![5, 3, 2]);
}

#[test]
fn size_hint_has_zero_lower_bound() {
    let seq = [Present(1), Present(2)];
    assert_eq!(present_values(seq).size_hint(), (0, Some(2)));
}

#[test]
fn stays_exhausted() {
    let mut values = present_values([Present(1)]);
    assert_eq!(values.next(), Some(1));
    assert_eq!(values.next(), None);
    assert_eq!(values.next(), None);
}
