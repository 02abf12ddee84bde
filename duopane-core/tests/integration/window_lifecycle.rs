//! A window's split view from creation to teardown

use std::cell::RefCell;
use std::rc::Rc;

use duopane_core::split::{
    Location, OpenFlags, PaneSide, SplitContainer, SplitEvent, SplitProperty, SplitView,
};
use duopane_core::testing::{EventLog, RecordingContainer, RecordingSlot};

fn location(uri: &str) -> Location {
    Location::parse(uri).expect("valid test URI")
}

#[test]
fn toolbar_tracks_split_state_through_notifications() {
    let mut view = SplitView::new(RecordingContainer::with_width(1280));
    let toolbar_toggled = Rc::new(RefCell::new(false));

    // Toolbar keeps its toggle in sync with the split-active property
    let toggled = Rc::clone(&toolbar_toggled);
    view.connect(move |event| match event {
        SplitEvent::SplitEnabled => *toggled.borrow_mut() = true,
        SplitEvent::SplitDisabled => *toggled.borrow_mut() = false,
        _ => {}
    });

    assert!(!view.is_active());
    view.enable(None);
    assert!(*toolbar_toggled.borrow());
    view.close_pane();
    assert!(!*toolbar_toggled.borrow());
}

#[test]
fn full_session_with_focus_changes() {
    let mut view = SplitView::new(RecordingContainer::with_width(1000));
    let log = EventLog::attach(&view.signals());

    let left = RecordingSlot::new();
    let right = RecordingSlot::new();
    view.set_left_slot(Some(left.clone()));
    // Bound while hidden; becomes visible on enable
    view.set_right_slot(Some(right.clone()));
    assert!(!view.container().right_visible());

    view.enable(Some(&location("file:///home/user/Downloads")));
    assert!(view.container().right_visible());
    assert_eq!(view.container().divider_position(), 500);
    assert_eq!(
        right.requests(),
        vec![(location("file:///home/user/Downloads"), OpenFlags::NONE)]
    );

    // Focus moves into the right pane
    view.focus_entered(PaneSide::Right);
    assert_eq!(view.active_slot(), Some(&right));
    // Entering it again is silent
    let before = log.events().len();
    view.focus_entered(PaneSide::Right);
    assert_eq!(log.events().len(), before);

    // User drags the divider, then closes the pane via the close control
    view.container_mut().set_divider_position(620);
    view.close_requested();
    assert!(!view.is_active());
    assert!(!view.active_pane());
    assert_eq!(view.active_slot(), Some(&left));
    assert_eq!(view.saved_divider_position(), Some(620));

    assert_eq!(
        log.events(),
        vec![
            SplitEvent::PropertyChanged(SplitProperty::IsSplitActive),
            SplitEvent::SplitEnabled,
            SplitEvent::PropertyChanged(SplitProperty::ActivePane),
            SplitEvent::ActivePaneChanged { is_right: true },
            SplitEvent::PropertyChanged(SplitProperty::IsSplitActive),
            SplitEvent::SplitDisabled,
        ]
    );

    // Re-enabling restores the dragged position
    view.enable(None);
    assert_eq!(view.container().divider_position(), 620);
}

#[test]
fn observer_derives_title_from_active_pane_changes() {
    let mut view = SplitView::new(RecordingContainer::with_width(800));
    let titles = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&titles);
    view.connect(move |event| {
        if let SplitEvent::ActivePaneChanged { is_right } = event {
            sink.borrow_mut()
                .push(if *is_right { "Right pane" } else { "Left pane" });
        }
    });

    view.enable(None);
    view.set_active_pane(true);
    view.set_active_pane(false);
    assert_eq!(*titles.borrow(), vec!["Right pane", "Left pane"]);
}

#[test]
fn enable_before_layout_halves_on_first_allocation() {
    let mut view = SplitView::new(RecordingContainer::with_width(0));
    view.enable(None);
    assert!(view.model().has_pending_layout());

    view.container_mut().set_width(1440);
    view.container_resized(1440);
    assert_eq!(view.container().divider_position(), 720);
}

#[test]
fn rebinding_right_slot_while_active_keeps_header_first() {
    use duopane_core::split::ContentSlot;
    use duopane_core::testing::RegionChild;

    let mut view = SplitView::new(RecordingContainer::with_width(800));
    view.enable(None);

    let first = RecordingSlot::new();
    let second = RecordingSlot::new();
    view.set_right_slot(Some(first));
    view.set_right_slot(Some(second.clone()));

    assert_eq!(
        view.container().right_region_layout(),
        vec![RegionChild::CloseHeader, RegionChild::Slot(second.slot_id())]
    );
}
