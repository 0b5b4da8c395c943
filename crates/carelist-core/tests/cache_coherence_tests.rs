//! Cache coherence property tests.
//!
//! For any sequence of create/update/delete success callbacks, the
//! list cache and the detail cache must agree on every id they both
//! hold, and list ids must stay unique.

use std::collections::HashSet;

use carelist_core::{Patient, PatientCache};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create(u8),
    Update(u8),
    Delete(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6).prop_map(Op::Create),
        (0u8..6).prop_map(Op::Update),
        (0u8..6).prop_map(Op::Delete),
    ]
}

fn make_patient(id: u8, revision: usize) -> Patient {
    Patient {
        id: format!("patient-{id}"),
        created_at: "2024-01-01T00:00:00.000Z".into(),
        name: format!("Patient {id}"),
        description: format!("revision {revision}"),
        avatar: None,
        website: None,
        blood_type: None,
        birth_date: None,
        insurance_number: None,
        phone: None,
        email: None,
        updated_at: if revision > 0 {
            Some("2024-02-01T00:00:00.000Z".into())
        } else {
            None
        },
        is_deleted: false,
    }
}

fn assert_coherent(cache: &PatientCache) {
    let mut seen = HashSet::new();
    for entry in cache.list() {
        assert!(seen.insert(entry.id.clone()), "duplicate list id {}", entry.id);
        if let Some(detail) = cache.detail(&entry.id) {
            assert_eq!(entry, detail, "list/detail diverged for {}", entry.id);
        }
    }
}

proptest! {
    #[test]
    fn list_and_detail_never_diverge(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut cache = PatientCache::new();
        cache.set_list(Vec::new());

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Create(id) => cache.on_create_success(make_patient(id, step)),
                Op::Update(id) => cache.on_update_success(make_patient(id, step)),
                Op::Delete(id) => cache.on_delete_success(&format!("patient-{id}")),
            }
            assert_coherent(&cache);
        }
    }

    #[test]
    fn delete_always_evicts_both_views(id in 0u8..6, ops in proptest::collection::vec(op_strategy(), 0..20)) {
        let mut cache = PatientCache::new();
        cache.set_list(Vec::new());
        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Create(id) => cache.on_create_success(make_patient(id, step)),
                Op::Update(id) => cache.on_update_success(make_patient(id, step)),
                Op::Delete(id) => cache.on_delete_success(&format!("patient-{id}")),
            }
        }

        let target = format!("patient-{id}");
        cache.on_delete_success(&target);

        assert!(cache.detail(&target).is_none());
        assert!(cache.list().iter().all(|p| p.id != target));
    }
}

#[test]
fn create_after_orphan_detail_stays_coherent() {
    // An update for an id the list lacks leaves a detail-only entry;
    // creating that id afterwards must bring both views into step.
    let mut cache = PatientCache::new();
    cache.set_list(Vec::new());

    cache.on_update_success(make_patient(3, 1));
    cache.on_create_success(make_patient(3, 2));

    assert_coherent(&cache);
    assert_eq!(cache.detail("patient-3").unwrap().description, "revision 2");
}

#[test]
fn delete_sequence_scenario() {
    // list [{id:"1"},{id:"2"}] → delete "1" → list [{id:"2"}], no detail "1"
    let mut one = make_patient(1, 0);
    one.id = "1".into();
    let mut two = make_patient(2, 0);
    two.id = "2".into();

    let mut cache = PatientCache::new();
    cache.set_list(vec![one.clone(), two.clone()]);
    cache.on_update_success(one);

    cache.on_delete_success("1");

    assert_eq!(cache.list().len(), 1);
    assert_eq!(cache.list()[0].id, "2");
    assert!(cache.detail("1").is_none());
}
