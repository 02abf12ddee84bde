//! Property-based tests for the dual-pane split view
//!
//! These drive `SplitView` and `DualPaneModel` through random operation
//! sequences and check the state machine laws: active pane idempotence,
//! active slot resolution, divider persistence and slot ownership.

use duopane_core::split::{
    ContentSlot, DualPaneModel, Location, PaneSide, SplitContainer, SplitEvent, SplitProperty,
    SplitView,
};
use duopane_core::testing::{EventLog, RecordingContainer, RecordingSlot, RegionChild};
use proptest::prelude::*;

// ============================================================================
// Test Strategies
// ============================================================================

/// Strategy for generating container widths, including "not laid out yet"
fn width_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), 1i32..4000]
}

/// Strategy for generating locations
fn location_strategy() -> impl Strategy<Value = Location> {
    "[a-z]{1,8}(/[a-z]{1,8}){0,3}".prop_map(|path| {
        Location::parse(&format!("file:///{path}")).expect("generated URI is valid")
    })
}

fn side_strategy() -> impl Strategy<Value = PaneSide> {
    prop_oneof![Just(PaneSide::Left), Just(PaneSide::Right)]
}

/// Operations a window, a focus observer or the user can perform
#[derive(Debug, Clone)]
enum ViewOperation {
    SetActivePane(bool),
    FocusEntered(PaneSide),
    Enable(Option<Location>),
    Disable,
    ClosePane,
    CloseRequested,
    Toggle(Option<Location>),
    /// User drags the divider
    DragDivider(i32),
    Resize(i32),
    BindLeft,
    BindRight,
    ClearRight,
}

fn operation_strategy() -> impl Strategy<Value = ViewOperation> {
    prop_oneof![
        any::<bool>().prop_map(ViewOperation::SetActivePane),
        side_strategy().prop_map(ViewOperation::FocusEntered),
        proptest::option::of(location_strategy()).prop_map(ViewOperation::Enable),
        Just(ViewOperation::Disable),
        Just(ViewOperation::ClosePane),
        Just(ViewOperation::CloseRequested),
        proptest::option::of(location_strategy()).prop_map(ViewOperation::Toggle),
        (1i32..2000).prop_map(ViewOperation::DragDivider),
        width_strategy().prop_map(ViewOperation::Resize),
        Just(ViewOperation::BindLeft),
        Just(ViewOperation::BindRight),
        Just(ViewOperation::ClearRight),
    ]
}

fn operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ViewOperation>> {
    proptest::collection::vec(operation_strategy(), 0..=max_ops)
}

/// Applies an operation the way a window would, including container
/// changes the view does not make itself
fn apply_operation(view: &mut DualPaneModel<RecordingContainer>, op: &ViewOperation) {
    match op {
        ViewOperation::SetActivePane(is_right) => {
            view.set_active_pane(*is_right);
        }
        ViewOperation::FocusEntered(side) => {
            view.focus_entered(*side);
        }
        ViewOperation::Enable(location) => {
            view.enable(location.as_ref());
        }
        ViewOperation::Disable => {
            view.disable();
        }
        ViewOperation::ClosePane => {
            view.close_pane();
        }
        ViewOperation::CloseRequested => {
            view.close_requested();
        }
        ViewOperation::Toggle(location) => {
            view.toggle(location.as_ref());
        }
        ViewOperation::DragDivider(position) => {
            if view.is_active() {
                view.container_mut().set_divider_position(*position);
            }
        }
        ViewOperation::Resize(width) => {
            view.container_mut().set_width(*width);
            view.container_resized(*width);
        }
        ViewOperation::BindLeft => {
            view.set_left_slot(Some(RecordingSlot::new()));
        }
        ViewOperation::BindRight => {
            view.set_right_slot(Some(RecordingSlot::new()));
        }
        ViewOperation::ClearRight => {
            view.set_right_slot(None);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The active pane reflects the latest value and notifications fire
    /// exactly when the value changes
    #[test]
    fn prop_set_active_pane_idempotence(values in proptest::collection::vec(any::<bool>(), 0..40)) {
        let mut view = SplitView::new(RecordingContainer::with_width(800));
        let log = EventLog::attach(&view.signals());

        let mut previous = false;
        for value in values {
            log.clear();
            view.set_active_pane(value);

            prop_assert_eq!(view.active_pane(), value);
            let changed = value != previous;
            prop_assert_eq!(
                log.count_of(&SplitEvent::PropertyChanged(SplitProperty::ActivePane)),
                usize::from(changed)
            );
            prop_assert_eq!(
                log.count_of(&SplitEvent::ActivePaneChanged { is_right: value }),
                usize::from(changed)
            );
            previous = value;
        }
    }

    /// Disable always leaves the left pane active, and only notifies when
    /// it actually leaves split mode
    #[test]
    fn prop_disable_resets_active_pane(ops in operations_strategy(30)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(900));
        for op in &ops {
            apply_operation(&mut model, op);
        }
        let was_active = model.is_active();
        let events = model.disable();
        prop_assert_eq!(model.active_pane(), PaneSide::Left);
        prop_assert_eq!(model.container().active_style(), Some(PaneSide::Left));
        prop_assert!(!model.is_active());
        prop_assert_eq!(events.is_empty(), !was_active);
    }

    /// Whenever the split is inactive the active slot is the left slot
    #[test]
    fn prop_inactive_active_slot_is_left(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(900));
        for op in &ops {
            apply_operation(&mut model, op);
            if !model.is_active() {
                prop_assert_eq!(model.active_slot(), model.left_slot());
            } else {
                let expected = match model.active_pane() {
                    PaneSide::Left => model.left_slot(),
                    PaneSide::Right => model.right_slot(),
                };
                prop_assert_eq!(model.active_slot(), expected);
            }
        }
    }

    /// The split flag, right region visibility and active styling agree
    /// after every operation
    #[test]
    fn prop_container_mirrors_state(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(700));
        for op in &ops {
            apply_operation(&mut model, op);
            prop_assert_eq!(model.container().right_visible(), model.is_active());
            prop_assert_eq!(model.container().active_style(), Some(model.active_pane()));
        }
    }

    /// Once recorded, the saved divider position is never cleared
    #[test]
    fn prop_saved_position_never_cleared(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(1024));
        let mut ever_saved = false;
        for op in &ops {
            apply_operation(&mut model, op);
            ever_saved |= model.saved_divider_position().is_some();
            if ever_saved {
                prop_assert!(model.saved_divider_position().is_some());
            }
        }
    }

    /// Split transitions notify exactly once per real transition
    #[test]
    fn prop_split_notifications_match_transitions(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(640));
        let mut log = Vec::new();
        let mut transitions = (0usize, 0usize);

        for op in &ops {
            let was_active = model.is_active();
            let events = match op {
                ViewOperation::Enable(location) => model.enable(location.as_ref()),
                ViewOperation::Disable => model.disable(),
                ViewOperation::ClosePane => model.close_pane(),
                ViewOperation::CloseRequested => model.close_requested(),
                ViewOperation::Toggle(location) => model.toggle(location.as_ref()),
                other => {
                    apply_operation(&mut model, other);
                    Vec::new()
                }
            };
            match (was_active, model.is_active()) {
                (false, true) => transitions.0 += 1,
                (true, false) => transitions.1 += 1,
                _ => {}
            }
            log.extend(events);
        }

        let enabled = log.iter().filter(|e| **e == SplitEvent::SplitEnabled).count();
        let disabled = log.iter().filter(|e| **e == SplitEvent::SplitDisabled).count();
        let notified = log
            .iter()
            .filter(|e| **e == SplitEvent::PropertyChanged(SplitProperty::IsSplitActive))
            .count();
        prop_assert_eq!(enabled, transitions.0);
        prop_assert_eq!(disabled, transitions.1);
        prop_assert_eq!(notified, transitions.0 + transitions.1);
    }

    /// First-ever enable puts the divider at floor(width / 2)
    #[test]
    fn prop_first_enable_halves_width(width in 1i32..10_000) {
        let mut view = SplitView::new(RecordingContainer::with_width(width));
        view.enable(None);
        prop_assert_eq!(view.container().divider_position(), width / 2);
    }

    /// A divider offset observed before disable is restored by the next
    /// enable, even if the container was resized in between
    #[test]
    fn prop_divider_round_trip(
        width in 2i32..4000,
        dragged in proptest::option::of(1i32..4000),
        new_width in 1i32..4000,
    ) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(width));
        model.enable(None);
        if let Some(position) = dragged {
            model.container_mut().set_divider_position(position);
        }
        let recorded = model.container().divider_position();

        model.disable();
        model.container_mut().set_width(new_width);
        model.enable(None);

        prop_assert_eq!(model.container().divider_position(), recorded);
        prop_assert_eq!(model.saved_divider_position(), Some(recorded));
    }

    /// Enabling twice: the first call transitions and navigates to A, the
    /// second only navigates to B
    #[test]
    fn prop_enable_twice_navigates_only(a in location_strategy(), b in location_strategy()) {
        let mut view = SplitView::new(RecordingContainer::with_width(1000));
        let right = RecordingSlot::new();
        view.set_right_slot(Some(right.clone()));
        let log = EventLog::attach(&view.signals());

        view.enable(Some(&a));
        let after_first = log.events().len();
        let position = view.container().divider_position();

        view.enable(Some(&b));
        prop_assert!(view.is_active());
        prop_assert_eq!(log.events().len(), after_first);
        prop_assert_eq!(view.container().divider_position(), position);
        prop_assert_eq!(right.opened(), vec![a, b]);
    }

    /// Each region displays only its current occupant, and the right
    /// region keeps its close header first
    #[test]
    fn prop_regions_show_only_current_slot(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(800));
        for op in &ops {
            apply_operation(&mut model, op);

            let left: Vec<_> = model.left_slot().map(ContentSlot::slot_id).into_iter().collect();
            prop_assert_eq!(model.container().region_children(PaneSide::Left), left);

            let mut expected_right = vec![RegionChild::CloseHeader];
            expected_right.extend(model.right_slot().map(|s| RegionChild::Slot(s.slot_id())));
            prop_assert_eq!(model.container().right_region_layout(), expected_right);
        }
    }

    /// Slots are only ever navigated through the right pane, and only by
    /// enable
    #[test]
    fn prop_left_slot_never_navigated(ops in operations_strategy(40)) {
        let mut model = DualPaneModel::new(RecordingContainer::with_width(800));
        let left = RecordingSlot::new();
        model.set_left_slot(Some(left.clone()));
        for op in ops.iter().filter(|op| !matches!(op, ViewOperation::BindLeft)) {
            apply_operation(&mut model, op);
        }
        prop_assert!(left.opened().is_empty());
    }
}

#[test]
fn replaced_slot_is_released() {
    let mut view = SplitView::new(RecordingContainer::with_width(800));
    let first = RecordingSlot::new();
    view.set_left_slot(Some(first.clone()));
    // One handle here, one in the holder, one in the container
    assert_eq!(first.handle_count(), 3);

    view.set_left_slot(Some(RecordingSlot::new()));
    assert_eq!(first.handle_count(), 1);
}

#[test]
fn dropping_view_releases_slots() {
    let left = RecordingSlot::new();
    let right = RecordingSlot::new();
    {
        let mut view = SplitView::new(RecordingContainer::with_width(800));
        view.set_left_slot(Some(left.clone()));
        view.set_right_slot(Some(right.clone()));
    }
    assert_eq!(left.handle_count(), 1);
    assert_eq!(right.handle_count(), 1);
}
