use crate::internal::utils::HEIGHT;
use crate::{Error, SkipList};

use proptest::prelude::*;
use rand::{rngs::SmallRng, RngCore, SeedableRng};
use std::collections::BTreeMap;

fn validate_list<R: RngCore>(list: &SkipList<R>) {
    let mut below = Vec::new();
    let mut prev: Option<Vec<u8>> = None;

    list.traverse_level_with(0, |id, node| {
        if let Some(prev) = &prev {
            assert!(
                prev.as_slice() < node.key.as_slice(),
                "level 0 must be strictly increasing"
            );
        }
        assert!(
            (1..HEIGHT).contains(&node.height()),
            "invalid height: {}",
            node.height()
        );
        prev = Some(node.key.clone());
        below.push(id);
    });
    assert_eq!(below.len(), list.len(), "level 0 must hold every key");

    for level in 1..HEIGHT {
        let mut here = Vec::new();
        list.traverse_level_with(level, |id, node| {
            assert!(node.height() > level, "node linked above its height");
            here.push(id);
        });

        let mut rest = below.iter();
        assert!(
            here.iter().all(|id| rest.any(|other| other == id)),
            "level {} is not a subsequence of level {}",
            level,
            level - 1
        );

        below = here;
    }
}

#[derive(Debug, Clone)]
enum Op {
    Insert(Vec<u8>, Vec<u8>),
    Find(Vec<u8>),
}

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // a narrow alphabet makes repeated keys and shared prefixes common
    prop::collection::vec(prop_oneof![Just(0u8), Just(1u8), Just(0x7f), Just(0xff)], 0..=6)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        60 => (key.clone(), prop::collection::vec(any::<u8>(), 0..=8))
            .prop_map(|(k, v)| Op::Insert(k, v)),
        40 => key.prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=1000)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy(), seed in any::<u64>()) {
        let mut list = SkipList::with_rng(SmallRng::seed_from_u64(seed));
        let mut model: BTreeMap<Vec<u8>, Vec<u8>> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_list = list.insert(key.clone(), value.clone());
                    let old_model = model.insert(key, value);
                    prop_assert_eq!(old_list, old_model);
                }
                Op::Find(key) => {
                    let got = list.find(&key).map(|entry| entry.val().to_vec());
                    let expected = model.get(&key).cloned().ok_or(Error::NotFound);
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(list.len(), model.len());
        }

        validate_list(&list);

        let mut got = Vec::new();
        list.traverse_with(|key, val| got.push((key.to_vec(), val.to_vec())));
        let expected: Vec<(Vec<u8>, Vec<u8>)> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_last_write_wins(key in key_strategy(), values in prop::collection::vec(any::<Vec<u8>>(), 1..20)) {
        let mut list = SkipList::new();

        for value in &values {
            list.insert(key.clone(), value.clone());
        }

        prop_assert_eq!(list.len(), 1);
        prop_assert_eq!(list.get(&key), values.last().map(Vec::as_slice));
    }

    #[test]
    fn prop_height_bound(keys in prop::collection::btree_set(any::<Vec<u8>>(), 0..500)) {
        let mut list = SkipList::new();

        for key in &keys {
            list.insert(key.clone(), Vec::new());
        }

        prop_assert!(list.height() >= 1 && list.height() < HEIGHT);
        prop_assert_eq!(list.len(), keys.len());

        for key in &keys {
            let entry = list.find(key);
            prop_assert!(entry.is_ok());
            prop_assert!(entry.map(|entry| entry.height() <= list.height()).unwrap_or(false));
        }
    }
}

#[test]
fn validate_after_sequential_inserts() {
    let mut list = SkipList::with_rng(SmallRng::seed_from_u64(1));

    for i in 0u32..5_000 {
        list.insert(i.to_be_bytes(), i.to_le_bytes());
    }
    for i in (0u32..5_000).rev() {
        list.insert(i.to_be_bytes(), i.to_be_bytes());
    }

    validate_list(&list);
    assert_eq!(list.len(), 5_000);
    assert_eq!(list.get(&7u32.to_be_bytes()), Some(&7u32.to_be_bytes()[..]));
}
