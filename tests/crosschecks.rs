use proptest::prelude::*;
use strict_avl::AvlTree;

mod common;
use common::*;

fn check_ops(ops: Vec<Op>) {
    let mut t = AvlTree::new();
    let mut model = Model::default();

    for op in ops {
        match op {
            Op::Insert(k) => {
                t.insert(k);
                model.insert(k);
            }

            Op::Remove(k) => assert_eq!(t.remove(&k), model.remove(&k)),
        }

        assert_eq!(t.len(), model.len());
        assert_eq_iters(t.iter(), model.iter());
        t.check().unwrap();
    }

    for k in 0..64 {
        assert_eq!(t.count(&k), model.count(&k));
        assert_eq!(t.contains(&k), model.count(&k) > 0);
    }
}

fn check_height_bound(v: Vec<u32>) {
    let mut t = AvlTree::new();
    for (i, k) in v.into_iter().enumerate() {
        t.insert(k);
        if i % 128 == 0 {
            assert!((t.height() as f64) <= avl_height_bound(t.len()));
        }
    }
    assert!((t.height() as f64) <= avl_height_bound(t.len()));
    t.check().unwrap();
}

fn check_round_trip(v: U16Seq, k: u16) {
    let mut t: AvlTree<_> = v.into_iter().collect();
    let before: Vec<u16> = t.iter().copied().collect();
    let cnt = t.count(&k);

    t.insert(k);
    assert_eq!(t.count(&k), cnt + 1);
    assert_eq!(t.remove(&k), Some(k));

    assert_eq!(t.count(&k), cnt);
    assert_eq_iters(t.iter().copied(), before.into_iter());
    t.check().unwrap();
}

fn check_absent_remove(v: U16Seq) {
    // small_int_seq never produces 1024
    let mut t: AvlTree<_> = v.into_iter().collect();
    let before = format!("{:?}", t);
    assert_eq!(t.remove(&1024), None);
    assert_eq!(format!("{:?}", t), before);
}

fn check_drain(v: U16Seq, order: U16Seq) {
    let mut t: AvlTree<_> = v.iter().copied().collect();
    for k in order.iter() {
        assert_eq!(t.remove(k), Some(*k));
        t.check().unwrap();
    }
    assert!(t.is_empty());
    assert_eq!(t.height(), 0);
}

fn check_strings(v: Vec<String>) {
    let mut t = AvlTree::new();
    let mut model = Model::default();
    for (i, s) in v.into_iter().enumerate() {
        if i % 3 == 2 {
            assert_eq!(t.remove(&s), model.remove(&s));
        } else {
            t.insert(s.clone());
            model.insert(s);
        }
    }
    assert_eq_iters(t.iter(), model.iter());
    t.check().unwrap();
}

#[test]
fn ops_regr1() {
    use Op::*;
    check_ops(vec![Insert(3), Insert(3), Insert(1), Remove(3), Insert(2), Remove(3)]);
}

#[test]
fn height_bound_descending() {
    check_height_bound((0..4000).rev().collect());
}

proptest! {
    #[test]
    fn test_ops(ops in ops()) {
        check_ops(ops);
    }

    #[test]
    fn test_round_trip(v in small_int_seq(), k in 0u16..1024) {
        check_round_trip(v, k);
    }

    #[test]
    fn test_absent_remove(v in small_int_seq()) {
        check_absent_remove(v);
    }

    #[test]
    fn test_drain((v, order) in small_int_seq().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))) {
        check_drain(v, order);
    }

    #[test]
    fn test_strings(v in short_strings()) {
        check_strings(v);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_height_bound(v in prop::collection::vec(any::<u32>(), 1000..4000)) {
        check_height_bound(v);
    }
}
