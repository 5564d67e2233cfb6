#![no_main]

use libfuzzer_sys::fuzz_target;
use skippy_map::SkipList;
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    let mut list = SkipList::new();
    let mut model = BTreeMap::new();

    // every chunk is an op byte followed by a short key
    for chunk in data.chunks(4) {
        let (op, key) = chunk.split_first().unwrap();

        if op % 5 == 0 {
            assert_eq!(
                list.find(key).ok().map(|entry| entry.val().to_vec()),
                model.get(key).cloned()
            );
        } else {
            assert_eq!(
                list.insert(key, [*op]),
                model.insert(key.to_vec(), vec![*op])
            );
        }
    }

    assert_eq!(list.len(), model.len());
});
