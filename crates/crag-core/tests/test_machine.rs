use crag_core::machine::{IgnoreReason, InteractionStateMachine, SessionMode, Transition};

#[test]
fn test_initial_state_is_viewing() {
    let m = InteractionStateMachine::new();
    assert_eq!(m.mode(), SessionMode::Viewing);
    assert_eq!(m.selected_index(), None);
    assert!(!m.is_edit_mode());
}

#[test]
fn test_edit_round_trip_preserves_index() {
    for i in 0..5 {
        let mut m = InteractionStateMachine::new();
        assert!(m.select_route(i, 5).is_applied());
        assert_eq!(m.enter_edit_mode(), Transition::Applied {
            from: SessionMode::RouteSelected(i),
            to: SessionMode::EditRoute(i),
        });
        assert!(m.exit_edit_mode().is_applied());
        assert_eq!(m.mode(), SessionMode::RouteSelected(i));
    }
}

#[test]
fn test_enter_edit_from_viewing_is_noop() {
    let mut m = InteractionStateMachine::new();
    let t = m.enter_edit_mode();
    assert_eq!(t, Transition::Ignored(IgnoreReason::InvalidFrom(SessionMode::Viewing)));
    assert_eq!(m.mode(), SessionMode::Viewing);
    assert_eq!(m.selected_index(), None);
}

#[test]
fn test_select_out_of_range_is_noop() {
    let mut m = InteractionStateMachine::new();
    m.select_route(1, 3);
    let t = m.select_route(3, 3);
    assert_eq!(t, Transition::Ignored(IgnoreReason::OutOfRange { index: 3, total: 3 }));
    assert_eq!(m.mode(), SessionMode::RouteSelected(1));
}

#[test]
fn test_select_another_route() {
    let mut m = InteractionStateMachine::new();
    m.select_route(0, 3);
    let t = m.select_route(2, 3);
    assert!(t.changes_selection());
    assert_eq!(m.selected_index(), Some(2));
}

#[test]
fn test_reselect_same_route_is_noop() {
    let mut m = InteractionStateMachine::new();
    m.select_route(1, 3);
    let t = m.select_route(1, 3);
    assert_eq!(t, Transition::Ignored(IgnoreReason::AlreadyThere));
    assert!(!t.changes_selection());
}

#[test]
fn test_select_ignored_in_edit_mode() {
    let mut m = InteractionStateMachine::new();
    m.select_route(0, 3);
    m.enter_edit_mode();
    let t = m.select_route(2, 3);
    assert!(!t.is_applied());
    assert_eq!(m.mode(), SessionMode::EditRoute(0));
}

#[test]
fn test_clear_selection_is_idempotent() {
    let mut m = InteractionStateMachine::new();
    m.select_route(2, 3);
    m.enter_edit_mode();
    assert!(m.clear_selection().is_applied());
    let once = m.mode();
    assert_eq!(m.clear_selection(), Transition::Ignored(IgnoreReason::AlreadyThere));
    assert_eq!(m.mode(), once);
    assert_eq!(m.mode(), SessionMode::Viewing);
}

#[test]
fn test_exit_edit_outside_edit_is_noop() {
    let mut m = InteractionStateMachine::new();
    m.select_route(0, 1);
    assert!(!m.exit_edit_mode().is_applied());
    assert_eq!(m.mode(), SessionMode::RouteSelected(0));
}

#[test]
fn test_edit_flag_enters_and_exits_edit() {
    let mut m = InteractionStateMachine::new();
    m.select_route(1, 2);
    assert!(m.reconcile_edit_flag(true).is_applied());
    assert_eq!(m.mode(), SessionMode::EditRoute(1));
    assert!(m.reconcile_edit_flag(false).is_applied());
    assert_eq!(m.mode(), SessionMode::RouteSelected(1));
}

#[test]
fn test_edit_flag_repeat_is_noop() {
    let mut m = InteractionStateMachine::new();
    m.select_route(0, 2);
    m.reconcile_edit_flag(true);
    let t = m.reconcile_edit_flag(true);
    assert_eq!(t, Transition::Ignored(IgnoreReason::FlagUnchanged));
    assert_eq!(m.mode(), SessionMode::EditRoute(0));
}

#[test]
fn test_edit_flag_without_selection_does_nothing() {
    let mut m = InteractionStateMachine::new();
    assert!(!m.reconcile_edit_flag(true).is_applied());
    assert_eq!(m.mode(), SessionMode::Viewing);

    // Selecting afterwards does not replay the flag change.
    m.select_route(0, 1);
    assert_eq!(m.mode(), SessionMode::RouteSelected(0));
}

#[test]
fn test_mode_display() {
    assert_eq!(SessionMode::Viewing.to_string(), "viewing");
    assert_eq!(SessionMode::RouteSelected(3).to_string(), "routeSelected(3)");
    assert_eq!(SessionMode::EditRoute(0).to_string(), "editRoute(0)");
}
