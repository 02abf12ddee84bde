//! Recording test doubles for the split view.
//!
//! These stand in for the toolkit container and the window's content slots
//! so the state machine can be exercised without a display. They are used
//! by the unit, property and integration tests and by the doc examples.

use std::cell::RefCell;
use std::rc::Rc;

use crate::split::{
    ContentSlot, Location, OpenFlags, PaneSide, SignalHub, SlotId, SplitContainer, SplitEvent,
};

#[derive(Debug)]
struct SlotState {
    id: SlotId,
    opened: RefCell<Vec<(Location, OpenFlags)>>,
}

/// A content slot that records every navigation request.
///
/// Clones share the same slot; equality is identity.
#[derive(Debug, Clone)]
pub struct RecordingSlot {
    state: Rc<SlotState>,
}

impl RecordingSlot {
    /// Creates a new slot with a random id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(SlotState {
                id: SlotId::new(),
                opened: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Locations this slot was asked to open, oldest first.
    #[must_use]
    pub fn opened(&self) -> Vec<Location> {
        self.state
            .opened
            .borrow()
            .iter()
            .map(|(location, _)| location.clone())
            .collect()
    }

    /// Navigation requests including their flags.
    #[must_use]
    pub fn requests(&self) -> Vec<(Location, OpenFlags)> {
        self.state.opened.borrow().clone()
    }

    /// Number of live handles to this slot, including this one.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.state)
    }
}

impl Default for RecordingSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RecordingSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for RecordingSlot {}

impl ContentSlot for RecordingSlot {
    fn slot_id(&self) -> SlotId {
        self.state.id
    }

    fn open_location(&self, location: &Location, flags: OpenFlags) {
        self.state
            .opened
            .borrow_mut()
            .push((location.clone(), flags));
    }
}

/// A call made on a [`RecordingContainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerCall {
    /// `set_divider_position`
    SetDividerPosition(i32),
    /// `set_right_visible`
    SetRightVisible(bool),
    /// `apply_active_style`
    ApplyActiveStyle(PaneSide),
    /// `attach_slot`
    Attach(PaneSide, SlotId),
    /// `detach_slot`
    Detach(PaneSide, SlotId),
}

/// One child of a region's display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChild {
    /// The close-control header of the right region.
    CloseHeader,
    /// A bound content slot.
    Slot(SlotId),
}

#[derive(Debug, Clone)]
enum Child {
    CloseHeader,
    Slot(RecordingSlot),
}

impl Child {
    fn slot(&self) -> Option<&RecordingSlot> {
        match self {
            Self::CloseHeader => None,
            Self::Slot(slot) => Some(slot),
        }
    }
}

/// A divider container that records calls and keeps a simple layout.
///
/// Like the toolkit container, the right region starts out holding its
/// close header and slots are appended after whatever is already there.
#[derive(Debug)]
pub struct RecordingContainer {
    width: i32,
    position: i32,
    right_visible: bool,
    active_style: Option<PaneSide>,
    left_children: Vec<Child>,
    right_children: Vec<Child>,
    calls: Vec<ContainerCall>,
}

impl Default for RecordingContainer {
    fn default() -> Self {
        Self {
            width: 0,
            position: 0,
            right_visible: false,
            active_style: None,
            left_children: Vec::new(),
            right_children: vec![Child::CloseHeader],
            calls: Vec::new(),
        }
    }
}

impl RecordingContainer {
    /// Creates a container that reports `width` as its allocation.
    #[must_use]
    pub fn with_width(width: i32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Simulates a new allocation.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    /// Returns true if the right region is shown.
    #[must_use]
    pub fn right_visible(&self) -> bool {
        self.right_visible
    }

    /// Returns the region currently styled active.
    #[must_use]
    pub fn active_style(&self) -> Option<PaneSide> {
        self.active_style
    }

    /// Slots currently displayed in a region, in append order.
    #[must_use]
    pub fn region_children(&self, side: PaneSide) -> Vec<SlotId> {
        self.children(side)
            .iter()
            .filter_map(Child::slot)
            .map(ContentSlot::slot_id)
            .collect()
    }

    /// Full child list of the right region, header included.
    #[must_use]
    pub fn right_region_layout(&self) -> Vec<RegionChild> {
        self.right_children
            .iter()
            .map(|child| match child {
                Child::CloseHeader => RegionChild::CloseHeader,
                Child::Slot(slot) => RegionChild::Slot(slot.slot_id()),
            })
            .collect()
    }

    /// Every call received, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[ContainerCall] {
        &self.calls
    }

    fn children(&self, side: PaneSide) -> &Vec<Child> {
        match side {
            PaneSide::Left => &self.left_children,
            PaneSide::Right => &self.right_children,
        }
    }

    fn children_mut(&mut self, side: PaneSide) -> &mut Vec<Child> {
        match side {
            PaneSide::Left => &mut self.left_children,
            PaneSide::Right => &mut self.right_children,
        }
    }
}

impl SplitContainer for RecordingContainer {
    type Slot = RecordingSlot;

    fn width(&self) -> i32 {
        self.width
    }

    fn divider_position(&self) -> i32 {
        self.position
    }

    fn set_divider_position(&mut self, position: i32) {
        self.calls.push(ContainerCall::SetDividerPosition(position));
        self.position = position;
    }

    fn set_right_visible(&mut self, visible: bool) {
        self.calls.push(ContainerCall::SetRightVisible(visible));
        self.right_visible = visible;
    }

    fn apply_active_style(&mut self, active: PaneSide) {
        self.calls.push(ContainerCall::ApplyActiveStyle(active));
        self.active_style = Some(active);
    }

    fn attach_slot(&mut self, side: PaneSide, slot: &RecordingSlot) {
        self.calls.push(ContainerCall::Attach(side, slot.slot_id()));
        self.children_mut(side).push(Child::Slot(slot.clone()));
    }

    fn detach_slot(&mut self, side: PaneSide, slot: &RecordingSlot) {
        self.calls.push(ContainerCall::Detach(side, slot.slot_id()));
        self.children_mut(side)
            .retain(|child| child.slot() != Some(slot));
    }
}

/// Collects split view notifications for assertions.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<SplitEvent>>>,
}

impl EventLog {
    /// Creates an empty, unattached log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log that records everything emitted on `hub`.
    #[must_use]
    pub fn attach(hub: &SignalHub) -> Self {
        let log = Self::new();
        let sink = log.clone();
        hub.connect(move |event| sink.push(*event));
        log
    }

    /// Appends an event.
    pub fn push(&self, event: SplitEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<SplitEvent> {
        self.events.borrow().clone()
    }

    /// Number of times `event` was recorded.
    #[must_use]
    pub fn count_of(&self, event: &SplitEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == event).count()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
