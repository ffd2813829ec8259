//! Unit tests for the request lifecycle.

#[cfg(test)]
mod lifecycle_table {
    use crate::RequestState::{self, *};

    fn expected_targets(from: RequestState) -> Vec<RequestState> {
        match from {
            Created => vec![Queued],
            Queued => vec![Assigned, Cancelled],
            Assigned => vec![Serving, Queued, Cancelled],
            Serving => vec![Completed, Cancelled],
            Completed | Cancelled => vec![],
        }
    }

    #[test]
    fn full_pairwise_enumeration() {
        for &from in &RequestState::ALL {
            let expected = expected_targets(from);
            for &to in &RequestState::ALL {
                assert_eq!(
                    RequestState::can_transition(from, to),
                    expected.contains(&to),
                    "table mismatch for {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for &terminal in &[Completed, Cancelled] {
            assert!(terminal.is_terminal());
            for &to in &RequestState::ALL {
                assert!(!RequestState::can_transition(terminal, to));
            }
        }
    }

    #[test]
    fn self_transitions_rejected() {
        for &s in &RequestState::ALL {
            assert!(!RequestState::can_transition(s, s), "{s} -> {s}");
        }
    }
}

#[cfg(test)]
mod entity {
    use lift_core::{Direction, RequestId};

    use crate::{RequestError, RequestFactory, RequestState};

    #[test]
    fn factory_ids_are_monotonic() {
        let mut factory = RequestFactory::new();
        let a = factory.hall_call(2, Direction::Up);
        let b = factory.car_call(5);
        let c = factory.hall_call(3, Direction::Down);
        assert!(a.id() < b.id());
        assert!(b.id() < c.id());
        assert_eq!(a.state(), RequestState::Created);
    }

    #[test]
    fn equality_is_by_id_not_structure() {
        let mut factory = RequestFactory::new();
        let a = factory.car_call(4);
        let b = factory.car_call(4); // same floor, different call
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn hall_call_carries_direction_car_call_does_not() {
        let mut factory = RequestFactory::new();
        let hall = factory.hall_call(1, Direction::Down);
        let car = factory.car_call(6);
        assert_eq!(hall.direction(), Some(Direction::Down));
        assert_eq!(car.direction(), None);
    }

    #[test]
    fn transition_rejects_illegal_edge() {
        let mut factory = RequestFactory::new();
        let mut req = factory.car_call(3);
        let err = req.transition_to(RequestState::Serving).unwrap_err();
        match err {
            RequestError::InvalidTransition { id, from, to } => {
                assert_eq!(id, RequestId(0));
                assert_eq!(from, RequestState::Created);
                assert_eq!(to, RequestState::Serving);
            }
            other => panic!("unexpected error {other:?}"),
        }
        // State unchanged after a rejected transition.
        assert_eq!(req.state(), RequestState::Created);
    }

    #[test]
    fn legal_chain_walks_to_completed() {
        let mut factory = RequestFactory::new();
        let mut req = factory.hall_call(7, Direction::Up);
        for to in [
            RequestState::Queued,
            RequestState::Assigned,
            RequestState::Serving,
            RequestState::Completed,
        ] {
            req.transition_to(to).unwrap();
        }
        assert!(req.is_terminal());
        assert!(req.transition_to(RequestState::Queued).is_err());
    }
}

#[cfg(test)]
mod store {
    use lift_core::{Direction, RequestId, Tick};

    use crate::{RequestFactory, RequestState, RequestStore};

    fn store_with(n: usize) -> (RequestStore, Vec<RequestId>) {
        let mut factory = RequestFactory::new();
        let mut store = RequestStore::new();
        let ids = (0..n)
            .map(|i| {
                store
                    .insert(factory.car_call(i as i32), Tick(0))
                    .unwrap()
            })
            .collect();
        (store, ids)
    }

    #[test]
    fn insert_advances_to_queued_and_emits_event() {
        let (mut store, ids) = store_with(1);
        assert_eq!(store.get(ids[0]).unwrap().state(), RequestState::Queued);
        let events = store.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].from, RequestState::Created);
        assert_eq!(events[0].to, RequestState::Queued);
        // Drain empties the buffer.
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn cancel_unknown_or_terminal_returns_false() {
        let (mut store, ids) = store_with(1);
        assert!(!store.cancel(RequestId(99), Tick(1)));
        assert!(store.cancel(ids[0], Tick(1)));
        // Idempotent: second cancel of the same id is a no-op.
        assert!(!store.cancel(ids[0], Tick(2)));
    }

    #[test]
    fn terminal_requests_move_to_history() {
        let (mut store, ids) = store_with(2);
        store.cancel(ids[0], Tick(1));
        store.complete(ids[1], Tick(2)).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.history().len(), 2);
        assert!(store.get(ids[0]).is_none());
        assert!(store.history().iter().all(|r| r.is_terminal()));
    }

    #[test]
    fn complete_walks_full_chain_with_events() {
        let (mut store, ids) = store_with(1);
        store.drain_events();
        store.complete(ids[0], Tick(5)).unwrap();
        let states: Vec<_> = store.drain_events().iter().map(|e| e.to).collect();
        assert_eq!(
            states,
            vec![
                RequestState::Assigned,
                RequestState::Serving,
                RequestState::Completed
            ]
        );
    }

    #[test]
    fn complete_from_serving_is_single_edge() {
        let (mut store, ids) = store_with(1);
        store.transition(ids[0], RequestState::Assigned, Tick(1)).unwrap();
        store.transition(ids[0], RequestState::Serving, Tick(2)).unwrap();
        store.drain_events();
        store.complete(ids[0], Tick(3)).unwrap();
        assert_eq!(store.drain_events().len(), 1);
    }

    #[test]
    fn ids_at_floor_filters() {
        let mut factory = RequestFactory::new();
        let mut store = RequestStore::new();
        let a = store.insert(factory.car_call(3), Tick(0)).unwrap();
        let _b = store.insert(factory.car_call(5), Tick(0)).unwrap();
        let c = store
            .insert(factory.hall_call(3, Direction::Up), Tick(0))
            .unwrap();
        assert_eq!(store.ids_at_floor(3), vec![a, c]);
        assert!(store.ids_at_floor(7).is_empty());
    }

    #[test]
    fn cancel_all_empties_active_index() {
        let (mut store, _ids) = store_with(4);
        store.cancel_all(Tick(9));
        assert!(store.is_empty());
        assert_eq!(store.history().len(), 4);
    }

    #[test]
    fn snapshot_is_ascending_by_id() {
        let (store, ids) = store_with(3);
        let snapshot = store.snapshot();
        let got: Vec<_> = snapshot.iter().map(|r| r.id()).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn requeue_edge_round_trips() {
        let (mut store, ids) = store_with(1);
        store.transition(ids[0], RequestState::Assigned, Tick(1)).unwrap();
        store.transition(ids[0], RequestState::Queued, Tick(2)).unwrap();
        assert_eq!(store.get(ids[0]).unwrap().state(), RequestState::Queued);
    }
}
