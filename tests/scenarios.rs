use std::sync::Arc;

use boxbook::config::default_boxes;
use boxbook::{Booking, Ms, ReservationStore, StoreError};

const H: Ms = 3_600_000; // 1 hour in ms
const M: Ms = 60_000; // 1 minute in ms
const DAY: Ms = 1_672_531_200_000; // 2023-01-01T00:00:00Z

fn at(hour: Ms, minute: Ms) -> Ms {
    DAY + hour * H + minute * M
}

#[test]
fn conflict_then_cancel_then_retry() {
    let store = ReservationStore::new(["Box 1"]);

    let alice = store.reserve("alice", "Box 1", at(10, 0), at(11, 0)).unwrap();
    let blocked = store.reserve("bob", "Box 1", at(10, 30), at(11, 30));
    assert_eq!(blocked, Err(StoreError::SlotConflict(alice.clone())));

    store.cancel(&alice, "Box 1").unwrap();

    let bob = store.reserve("bob", "Box 1", at(10, 30), at(11, 30)).unwrap();
    assert_eq!(store.schedule_for_resource("Box 1").unwrap(), vec![bob]);
}

#[test]
fn unconfigured_box_is_rejected() {
    let store = ReservationStore::new(default_boxes());
    let result = store.reserve("alice", "Box 99", at(10, 0), at(11, 0));
    assert!(matches!(result, Err(StoreError::UnknownResource(name)) if name == "Box 99"));
}

#[test]
fn back_to_back_bookings_on_default_boxes() {
    let store = ReservationStore::new(default_boxes());
    let first = store.reserve("alice", "Box 3", at(10, 0), at(11, 0)).unwrap();
    let second = store.reserve("bob", "Box 3", at(11, 0), at(12, 0)).unwrap();
    assert_eq!(store.schedule_for_resource("Box 3").unwrap(), vec![first, second]);
    for other in ["Box 1", "Box 8"] {
        assert!(store.schedule_for_resource(other).unwrap().is_empty());
    }
}

#[test]
fn booking_survives_json_roundtrip_and_still_cancels() {
    let store = ReservationStore::new(["Box 1"]);
    let booking = store.reserve("alice", "Box 1", at(10, 0), at(11, 0)).unwrap();

    let json = serde_json::to_string(&booking).unwrap();
    let decoded: Booking = serde_json::from_str(&json).unwrap();
    store.cancel(&decoded, "Box 1").unwrap();
    assert_eq!(store.booking_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reservations_of_same_slot_admit_one() {
    let store = Arc::new(ReservationStore::new(["Box 1"]));

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.reserve(format!("user{i}"), "Box 1", at(10, 0), at(11, 0))
        }));
    }

    let mut ok = 0;
    let mut conflicts = 0;
    for h in handles {
        match h.await.unwrap() {
            Ok(_) => ok += 1,
            Err(StoreError::SlotConflict(_)) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(conflicts, 31);
    assert_eq!(store.schedule_for_resource("Box 1").unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_disjoint_slots_all_succeed() {
    let store = Arc::new(ReservationStore::new(["Box 1", "Box 2"]));

    let mut handles = Vec::new();
    for i in 0..24 {
        let store = store.clone();
        let resource = if i % 2 == 0 { "Box 1" } else { "Box 2" };
        let hour = i / 2;
        handles.push(tokio::spawn(async move {
            store.reserve(format!("user{i}"), resource, at(hour, 0), at(hour + 1, 0))
        }));
    }
    for h in handles {
        h.await.unwrap().unwrap();
    }

    for resource in ["Box 1", "Box 2"] {
        let schedule = store.schedule_for_resource(resource).unwrap();
        assert_eq!(schedule.len(), 12);
        assert!(schedule.windows(2).all(|w| w[0].end <= w[1].start));
    }
}

#[test]
fn overlapping_and_empty_intervals_never_reach_a_schedule() {
    let store = ReservationStore::new(["Box 1"]);
    store.reserve("a", "Box 1", 100, 200).unwrap();
    assert!(matches!(store.reserve("b", "Box 1", 150, 250), Err(StoreError::SlotConflict(_))));
    assert!(matches!(store.reserve("c", "Box 1", 300, 300), Err(StoreError::InvalidInterval { .. })));

    let schedule = store.schedule_for_resource("Box 1").unwrap();
    assert_eq!(schedule, vec![Booking::new("a", 100, 200)]);
    assert_eq!(store.schedule_between("Box 1", 150, 160).unwrap().len(), 1);
}
