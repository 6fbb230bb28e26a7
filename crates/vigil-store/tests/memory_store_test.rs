use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use vigil_core::IStateStore;
use vigil_store::InMemoryStateStore;

#[test]
fn concurrent_keyword_increments_are_not_lost() {
    let store = Arc::new(InMemoryStateStore::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..250 {
                    s.increment_keyword("u1", "work", 1.0).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let top = store.get_top_keywords("u1", 1).unwrap();
    assert_eq!(top[0].weight, 2000.0);
}

#[test]
fn retention_is_at_least_one() {
    let store = InMemoryStateStore::with_spike_retention(0);
    let spike = vigil_core::SpikeRecord {
        timestamp: chrono::Utc::now(),
        zv: 1.6,
        za: 0.0,
        risk_momentum: 0.1,
    };
    store.log_spike("u1", &spike).unwrap();
    store.log_spike("u1", &spike).unwrap();
    assert_eq!(store.spike_count("u1"), 1);
}

proptest! {
    #[test]
    fn top_keywords_are_sorted_descending(
        increments in proptest::collection::vec((0usize..6, 0.1f64..5.0), 1..60),
        limit in 1usize..8,
    ) {
        let store = InMemoryStateStore::new();
        for (idx, amount) in &increments {
            store.increment_keyword("u", &format!("kw{idx}"), *amount).unwrap();
        }
        let top = store.get_top_keywords("u", limit).unwrap();
        prop_assert!(top.len() <= limit);
        for pair in top.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }
}
