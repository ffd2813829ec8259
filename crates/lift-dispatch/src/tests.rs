use lift_core::{Direction, LiftState, LiftStatus, Tick};
use lift_request::RequestState;

use crate::naive::{IdleParkingMode, NaiveLiftController};
use crate::scan::DirectionalScanLiftController;
use crate::strategy::{ControllerParams, Strategy, make_controller};
use crate::{Action, LiftController};

fn idle_at(floor: i32) -> LiftState {
    LiftState::new(floor, LiftStatus::Idle)
}

mod naive {
    use super::*;

    fn controller() -> NaiveLiftController {
        NaiveLiftController::new(0, 10, IdleParkingMode::StayPut)
    }

    #[test]
    fn no_requests_stays_idle() {
        let mut c = controller();
        assert_eq!(c.decide(&idle_at(3), Tick::ZERO), Action::Idle);
    }

    #[test]
    fn same_floor_call_opens_doors() {
        let mut c = controller();
        c.add_car_call(3, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(3), Tick::ZERO), Action::OpenDoor);
    }

    #[test]
    fn moves_toward_nearest_request() {
        let mut c = controller();
        c.add_car_call(7, Tick::ZERO).unwrap();
        c.add_car_call(4, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(3), Tick::ZERO), Action::MoveUp);
    }

    #[test]
    fn equidistant_tie_breaks_toward_lower_floor() {
        let mut c = controller();
        c.add_car_call(7, Tick::ZERO).unwrap();
        c.add_car_call(3, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(5), Tick::ZERO), Action::MoveDown);
    }

    #[test]
    fn nearest_request_becomes_assigned() {
        let mut c = controller();
        let far = c.add_car_call(9, Tick::ZERO).unwrap();
        let near = c.add_car_call(4, Tick::ZERO).unwrap();
        c.decide(&idle_at(3), Tick::ZERO);
        let states: Vec<_> = c
            .active_requests()
            .iter()
            .map(|r| (r.id(), r.state()))
            .collect();
        assert!(states.contains(&(near, RequestState::Assigned)));
        assert!(states.contains(&(far, RequestState::Queued)));
    }

    #[test]
    fn retarget_requeues_previous_assignment() {
        let mut c = controller();
        let first = c.add_car_call(8, Tick::ZERO).unwrap();
        c.decide(&idle_at(3), Tick::ZERO);
        // A closer call arrives; the old target goes back to Queued.
        let second = c.add_car_call(4, Tick(1)).unwrap();
        c.decide(&idle_at(3), Tick(1));
        let state_of = |id| {
            c.active_requests()
                .iter()
                .find(|r| r.id() == id)
                .map(|r| r.state())
        };
        assert_eq!(state_of(first), Some(RequestState::Queued));
        assert_eq!(state_of(second), Some(RequestState::Assigned));
    }

    #[test]
    fn no_movement_while_doors_cycle() {
        let mut c = controller();
        c.add_car_call(7, Tick::ZERO).unwrap();
        for status in [
            LiftStatus::DoorsOpening,
            LiftStatus::DoorsOpen,
            LiftStatus::DoorsClosing,
        ] {
            let state = LiftState::new(3, status);
            assert_eq!(c.decide(&state, Tick::ZERO), Action::Idle, "{status}");
        }
    }

    #[test]
    fn same_floor_call_during_closing_requests_reopen() {
        let mut c = controller();
        c.add_car_call(3, Tick::ZERO).unwrap();
        let state = LiftState::new(3, LiftStatus::DoorsClosing);
        assert_eq!(c.decide(&state, Tick::ZERO), Action::OpenDoor);
    }

    #[test]
    fn arrival_then_open_completes_the_travelled_for_call() {
        let mut c = controller();
        let id = c.add_car_call(5, Tick::ZERO).unwrap();
        c.decide(&idle_at(3), Tick::ZERO);
        c.on_arrival(5, Tick(2));
        c.on_doors_open(5, Tick(4));
        assert!(c.active_requests().is_empty());
        let done = c.history();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id(), id);
        assert_eq!(done[0].state(), RequestState::Completed);
    }

    #[test]
    fn doors_opening_completes_only_same_floor_calls() {
        let mut c = controller();
        let travelled = c.add_car_call(5, Tick::ZERO).unwrap();
        c.decide(&idle_at(3), Tick::ZERO);
        c.on_arrival(5, Tick(2));
        // `travelled` is Serving now; a fresh call lands at the same floor.
        let fresh = c.add_car_call(5, Tick(3)).unwrap();
        c.on_doors_opening(5, Tick(3));
        let active: Vec<_> = c.active_requests().iter().map(|r| r.id()).collect();
        assert_eq!(active, vec![travelled]);
        assert_eq!(c.history()[0].id(), fresh);
    }

    mod parking {
        use super::*;

        fn parking_controller() -> NaiveLiftController {
            NaiveLiftController::new(0, 3, IdleParkingMode::ParkToHomeFloor)
        }

        #[test]
        fn parks_after_idle_timeout() {
            let mut c = parking_controller();
            for t in 0..3 {
                assert_eq!(c.decide(&idle_at(5), Tick(t)), Action::Idle);
            }
            assert_eq!(c.decide(&idle_at(5), Tick(3)), Action::MoveDown);
        }

        #[test]
        fn already_home_never_moves() {
            let mut c = parking_controller();
            for t in 0..10 {
                assert_eq!(c.decide(&idle_at(0), Tick(t)), Action::Idle);
            }
        }

        #[test]
        fn new_request_preempts_parking() {
            let mut c = parking_controller();
            for t in 0..5 {
                c.decide(&idle_at(5), Tick(t));
            }
            c.add_car_call(8, Tick(5)).unwrap();
            assert_eq!(c.decide(&idle_at(5), Tick(5)), Action::MoveUp);
        }

        #[test]
        fn timeout_restarts_after_activity() {
            let mut c = parking_controller();
            for t in 0..4 {
                c.decide(&idle_at(5), Tick(t));
            }
            let id = c.add_car_call(5, Tick(4)).unwrap();
            c.decide(&idle_at(5), Tick(4));
            c.cancel_request(id, Tick(5));
            // Idle stretch starts over from tick 5.
            assert_eq!(c.decide(&idle_at(5), Tick(5)), Action::Idle);
            assert_eq!(c.decide(&idle_at(5), Tick(7)), Action::Idle);
            assert_eq!(c.decide(&idle_at(5), Tick(8)), Action::MoveDown);
        }
    }

    #[test]
    fn cancel_clears_target() {
        let mut c = controller();
        let id = c.add_car_call(7, Tick::ZERO).unwrap();
        c.decide(&idle_at(3), Tick::ZERO);
        assert!(c.cancel_request(id, Tick(1)));
        assert!(!c.cancel_request(id, Tick(1)));
        assert_eq!(c.decide(&idle_at(3), Tick(1)), Action::Idle);
    }

    #[test]
    fn out_of_service_cancels_everything() {
        let mut c = controller();
        c.add_car_call(7, Tick::ZERO).unwrap();
        c.add_hall_call(2, Direction::Up, Tick::ZERO).unwrap();
        c.take_out_of_service(Tick(1));
        assert!(c.active_requests().is_empty());
        assert!(
            c.history()
                .iter()
                .all(|r| r.state() == RequestState::Cancelled)
        );
    }
}

mod scan {
    use super::*;

    fn controller() -> DirectionalScanLiftController {
        DirectionalScanLiftController::new()
    }

    #[test]
    fn no_requests_stays_idle() {
        let mut c = controller();
        assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::Idle);
    }

    #[test]
    fn commits_toward_nearest_and_sweeps() {
        let mut c = controller();
        c.add_car_call(2, Tick::ZERO).unwrap();
        c.add_car_call(5, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::MoveUp);
    }

    #[test]
    fn equidistant_tie_breaks_toward_lower_floor() {
        let mut c = controller();
        c.add_car_call(3, Tick::ZERO).unwrap();
        c.add_car_call(7, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(5), Tick::ZERO), Action::MoveDown);
    }

    #[test]
    fn serves_same_floor_call_in_place() {
        let mut c = controller();
        c.add_car_call(4, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(4), Tick::ZERO), Action::OpenDoor);
    }

    #[test]
    fn matching_hall_call_is_served_during_sweep() {
        let mut c = controller();
        c.add_car_call(6, Tick::ZERO).unwrap();
        c.add_hall_call(3, Direction::Up, Tick::ZERO).unwrap();
        // Commit upward, arrive at 3: the up hall call stops the car.
        assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::MoveUp);
        c.on_arrival(3, Tick(3));
        assert_eq!(c.decide(&idle_at(3), Tick(3)), Action::OpenDoor);
    }

    #[test]
    fn opposite_hall_call_is_passed_then_served_after_reversal() {
        let mut c = controller();
        c.add_car_call(6, Tick::ZERO).unwrap();
        let down = c.add_hall_call(3, Direction::Down, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::MoveUp);
        // Passing floor 3 going up: the down call is not eligible.
        c.on_arrival(3, Tick(3));
        assert_eq!(c.decide(&idle_at(3), Tick(3)), Action::MoveUp);
        // Serve floor 6, then reverse; the down call becomes eligible.
        c.on_arrival(6, Tick(6));
        assert_eq!(c.decide(&idle_at(6), Tick(6)), Action::OpenDoor);
        c.on_doors_opening(6, Tick(7));
        c.on_doors_open(6, Tick(8));
        assert_eq!(c.decide(&idle_at(6), Tick(12)), Action::MoveDown);
        c.on_arrival(3, Tick(15));
        assert_eq!(c.decide(&idle_at(3), Tick(15)), Action::OpenDoor);
        c.on_doors_opening(3, Tick(16));
        c.on_doors_open(3, Tick(17));
        assert!(c.active_requests().is_empty());
        assert!(c.history().iter().any(|r| r.id() == down
            && r.state() == RequestState::Completed));
    }

    #[test]
    fn opposite_hall_call_alone_ahead_is_still_travelled_to() {
        // Only a down hall call above: the car must go up to its turning
        // point, reverse, and serve it.
        let mut c = controller();
        c.add_hall_call(8, Direction::Down, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(5), Tick::ZERO), Action::MoveUp);
        c.on_arrival(8, Tick(3));
        // Nothing further ahead: reverse, and the call is now eligible here.
        assert_eq!(c.decide(&idle_at(8), Tick(3)), Action::OpenDoor);
    }

    #[test]
    fn direction_agnostic_hall_call_is_always_eligible() {
        let mut c = controller();
        c.add_car_call(6, Tick::ZERO).unwrap();
        c.add_hall_call(3, Direction::Idle, Tick::ZERO).unwrap();
        assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::MoveUp);
        c.on_arrival(3, Tick(3));
        assert_eq!(c.decide(&idle_at(3), Tick(3)), Action::OpenDoor);
    }

    #[test]
    fn sweep_collects_calls_in_floor_order_not_arrival_order() {
        // Arrival order 2, 5, 3 from floor 0: the sweep serves 2, 3, 5.
        let mut c = controller();
        c.add_car_call(2, Tick::ZERO).unwrap();
        c.add_car_call(5, Tick::ZERO).unwrap();
        c.add_car_call(3, Tick::ZERO).unwrap();
        let mut served = Vec::new();
        let mut floor = 0;
        for t in 0..40u64 {
            let tick = Tick(t);
            match c.decide(&idle_at(floor), tick) {
                Action::MoveUp => {
                    floor += 1;
                    c.on_arrival(floor, tick);
                }
                Action::MoveDown => {
                    floor -= 1;
                    c.on_arrival(floor, tick);
                }
                Action::OpenDoor => {
                    served.push(floor);
                    c.on_doors_opening(floor, tick);
                    c.on_doors_open(floor, tick);
                }
                Action::CloseDoor | Action::Idle => {}
            }
            if c.active_requests().is_empty() {
                break;
            }
        }
        assert_eq!(served, vec![2, 3, 5]);
    }

    #[test]
    fn eligible_requests_ahead_are_assigned_on_sweep() {
        let mut c = controller();
        let up = c.add_hall_call(4, Direction::Up, Tick::ZERO).unwrap();
        let down = c.add_hall_call(6, Direction::Down, Tick::ZERO).unwrap();
        c.decide(&idle_at(0), Tick::ZERO);
        let state_of = |c: &DirectionalScanLiftController, id| {
            c.active_requests()
                .iter()
                .find(|r| r.id() == id)
                .map(|r| r.state())
        };
        assert_eq!(state_of(&c, up), Some(RequestState::Assigned));
        assert_eq!(state_of(&c, down), Some(RequestState::Queued));
    }

    #[test]
    fn movement_leg_is_never_interrupted() {
        let mut c = controller();
        c.add_car_call(6, Tick::ZERO).unwrap();
        c.decide(&idle_at(0), Tick::ZERO);
        c.add_car_call(1, Tick(1)).unwrap();
        let moving = LiftState::new(0, LiftStatus::MovingUp);
        assert_eq!(c.decide(&moving, Tick(1)), Action::Idle);
    }

    #[test]
    fn out_of_service_cancels_and_clears_commitment() {
        let mut c = controller();
        c.add_car_call(6, Tick::ZERO).unwrap();
        c.decide(&idle_at(0), Tick::ZERO);
        c.take_out_of_service(Tick(1));
        assert!(c.active_requests().is_empty());
        c.return_to_service();
        assert_eq!(c.decide(&idle_at(0), Tick(2)), Action::Idle);
    }
}

mod strategy {
    use super::*;

    #[test]
    fn factory_builds_each_variant() {
        let params = ControllerParams::default();
        for (strategy, name) in [
            (Strategy::Naive, "naive"),
            (Strategy::DirectionalScan, "directional_scan"),
        ] {
            assert_eq!(strategy.as_str(), name);
            let mut c = make_controller(strategy, &params);
            c.add_car_call(3, Tick::ZERO).unwrap();
            assert_eq!(c.decide(&idle_at(0), Tick::ZERO), Action::MoveUp);
        }
    }

    #[test]
    fn boxed_controller_forwards_everything() {
        let mut c = make_controller(Strategy::Naive, &ControllerParams::default());
        let id = c.add_hall_call(2, Direction::Up, Tick::ZERO).unwrap();
        assert_eq!(c.active_requests().len(), 1);
        assert!(c.cancel_request(id, Tick(1)));
        assert_eq!(c.history().len(), 1);
        assert!(!c.drain_events().is_empty());
    }
}
