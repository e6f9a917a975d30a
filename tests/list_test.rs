/*!
 * List Contract Tests
 * End-to-end coverage of copy discipline, the immutability gate, and helpers
 */

use pretty_assertions::assert_eq;
use seqlist::{ListError, SampleSource, SeqList, Value};

#[test]
fn test_nested_copy_independence_both_directions() {
    let nested = Value::list(vec![Value::Int(1), Value::Int(2)]);
    let list = SeqList::from(vec![Value::Int(0), nested.clone()]);

    // External mutation is invisible inside the container
    if let Value::List(handle) = &nested {
        handle.write().push(Value::Int(3));
    }
    if let Value::List(handle) = &list[1] {
        assert_eq!(handle.read().len(), 2);
    } else {
        panic!("expected nested list");
    }

    // Container mutation is invisible outside
    if let Value::List(handle) = &list[1] {
        handle.write().clear();
    }
    if let Value::List(handle) = &nested {
        assert_eq!(handle.read().len(), 3);
    }
}

#[test]
fn test_immutable_gate_is_assignment_only() {
    let mut list = SeqList::from(vec![Value::Int(1), Value::Int(2)]);
    list.set_immutable(true);

    for index in 0..list.len() {
        assert_eq!(
            list.set(index, Value::Null).unwrap_err(),
            ListError::Immutable
        );
    }

    // Growth operations are never gated
    list.push(Value::Int(3));
    list.insert(0, Value::Int(0));
    assert_eq!(list.len(), 4);

    // In-place rewrites go through assignment and are gated
    assert_eq!(
        list.add_each(&Value::Int(1)).unwrap_err(),
        ListError::Immutable
    );
    assert_eq!(list.apply(|v| v.clone()).unwrap_err(), ListError::Immutable);
}

#[test]
fn test_filter_identity_idempotent_and_ordered() {
    let list = SeqList::from(vec![
        Value::Int(5),
        Value::from("a"),
        Value::Null,
        Value::Int(1),
    ]);
    let once = list.filter(|_| true);
    let twice = once.filter(|_| true);
    assert_eq!(once, twice);
    assert_eq!(twice.as_slice(), list.as_slice());
}

#[test]
fn test_chunks_concatenate_back_to_source() {
    let list: SeqList = (0..10i64).map(Value::Int).collect();
    for k in 1..=11 {
        let rebuilt: Vec<Value> = list
            .split_to_chunks(k)
            .flat_map(|chunk| chunk.as_slice().to_vec())
            .collect();
        assert_eq!(rebuilt, list.as_slice());
    }
}

#[test]
fn test_find_sentinel_contract() {
    let list = SeqList::from(vec![Value::Int(1), Value::Int(2), Value::Int(1)]);
    assert_eq!(list.find(&Value::Int(1)), Some(0));
    assert_eq!(list.find(&Value::Int(2)), Some(1));
    assert_eq!(list.find(&Value::Int(9)), None);
    assert_eq!(SeqList::new().find(&Value::Null), None);
}

#[test]
fn test_average_contract() {
    let list = SeqList::from(vec![
        Value::Int(1),
        Value::Int(2),
        Value::Int(3),
        Value::from("x"),
        Value::Null,
    ]);
    assert_eq!(list.average(), Some(Value::Float(2.0)));

    assert_eq!(SeqList::new().average(), None);
    let strings = SeqList::from(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(strings.average(), None);
}

#[test]
fn test_remap_contract() {
    let mut list = SeqList::from(vec![Value::Int(0), Value::Int(5), Value::Int(10)]);
    list.remap(0.0, 10.0, 0.0, 1.0).unwrap();
    assert_eq!(
        list.as_slice(),
        &[Value::Float(0.0), Value::Float(0.5), Value::Float(1.0)]
    );
}

#[test]
fn test_inclusive_sampling_off_by_one() {
    struct Fixed(usize);
    impl SampleSource for Fixed {
        fn draw(&mut self, _upper: usize) -> usize {
            self.0
        }
    }

    let list = SeqList::from(vec![Value::Int(10), Value::Int(20), Value::Int(30)]);

    assert_eq!(
        list.random_sample_inclusive_with(&mut Fixed(3)).unwrap_err(),
        ListError::OutOfBounds { index: 3, len: 3 }
    );
    for index in 0..3usize {
        let expected = list[index].clone();
        assert_eq!(
            list.random_sample_inclusive_with(&mut Fixed(index)).unwrap(),
            expected
        );
    }
}

#[test]
fn test_chained_pipeline() {
    let mut list = SeqList::from(vec![
        Value::Int(1),
        Value::Null,
        Value::Int(2),
        Value::Null,
        Value::Int(3),
    ]);

    list.remove_nones()
        .mul_each(&Value::Int(10))
        .unwrap()
        .add_each(&Value::Int(5))
        .unwrap();
    assert_eq!(
        list.as_slice(),
        &[Value::Int(15), Value::Int(25), Value::Int(35)]
    );

    let big = list.filter(|v| matches!(v, Value::Int(i) if *i > 20));
    assert_eq!(big.as_slice(), &[Value::Int(25), Value::Int(35)]);
    assert_eq!(big.min().unwrap(), Value::Int(25));
    assert_eq!(big.max().unwrap(), Value::Int(35));
    assert_eq!(big.average(), Some(Value::Float(30.0)));
}

#[test]
fn test_extend_copies_nested_elements() {
    let nested = Value::list(vec![Value::Int(1)]);
    let mut list = SeqList::new();
    list.extend(vec![Value::Int(0), nested.clone()]);

    if let Value::List(handle) = &nested {
        handle.write().push(Value::Int(2));
    }
    if let Value::List(handle) = &list[1] {
        assert_eq!(handle.read().len(), 1);
    } else {
        panic!("expected nested list");
    }
}

#[test]
fn test_construction_from_string_value() {
    let list = SeqList::try_from(Value::from("hey")).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.find(&Value::from("e")), Some(1));
}
