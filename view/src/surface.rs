//! Contract between the question view and whatever draws it.
//!
//! The view never builds markup or touches a screen; it manipulates controls
//! through this trait and receives their events back through
//! [`ControlEvent`]. A surface implementation owns identifier generation, so
//! two views on two surfaces never share counter state.

/// Whether a group's toggles behave as exclusive radios or independent
/// checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exclusive group: the surface itself guarantees that checking one
    /// toggle unchecks its group siblings.
    Single,
    /// Independent toggles; any number may be checked.
    Multi,
}

/// Handle for a control created on a render surface.
///
/// Issued by the surface and only meaningful to the surface that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u32);

impl ControlId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Handle for a group of controls created on a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u32);

impl GroupId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Handle for one event subscription, released exactly once at teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Control events a subscriber can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEventKind {
    /// A toggle's checked state changed through user interaction.
    Changed,
    /// A text input lost input focus.
    Blurred,
}

/// One event delivered by the render surface.
///
/// Surfaces deliver events one at a time and only for subscribed controls;
/// the host feeds each event to the view synchronously, so all dependent
/// state settles before the surface produces the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEvent {
    pub control: ControlId,
    pub kind: ControlEventKind,
}

/// Creation parameters for a primary toggle control.
#[derive(Debug, Clone)]
pub struct ToggleSpec {
    /// Answer value the toggle stands for.
    pub value: String,
    /// Label text bound to the toggle.
    pub label: String,
}

/// Creation parameters for a secondary text input.
#[derive(Debug, Clone)]
pub struct TextInputSpec {
    pub placeholder: String,
    pub value: String,
    pub enabled: bool,
}

/// The primitives a host UI must provide to render one question.
pub trait RenderSurface {
    /// Create a labeled group of selectable controls. For
    /// [`SelectionMode::Single`] the group is exclusive: checking any toggle
    /// in it — through user interaction or [`RenderSurface::set_checked`] —
    /// unchecks its siblings. The view relies on this capability instead of
    /// reimplementing it.
    fn create_group(&mut self, label: &str, mode: SelectionMode) -> GroupId;

    /// Create a toggle in the given group. Starts unchecked.
    fn create_toggle(&mut self, group: GroupId, spec: ToggleSpec) -> ControlId;

    /// Create a text input in the given group.
    fn create_text_input(&mut self, group: GroupId, spec: TextInputSpec) -> ControlId;

    /// Ask for `kind` events on `control` to be delivered to the component.
    fn subscribe(&mut self, control: ControlId, kind: ControlEventKind) -> SubscriptionId;

    /// Stop delivery for a previously registered subscription.
    fn unsubscribe(&mut self, subscription: SubscriptionId);

    fn is_checked(&self, control: ControlId) -> bool;

    /// Set a toggle's checked state. Does not emit a `Changed` event;
    /// programmatic writes are not echoed back to the component.
    fn set_checked(&mut self, control: ControlId, checked: bool);

    fn set_enabled(&mut self, control: ControlId, enabled: bool);

    /// Current text of a text input.
    fn text(&self, control: ControlId) -> String;

    /// Give a control input focus. No effect on disabled controls.
    fn focus(&mut self, control: ControlId);

    /// Select the character range `start..end` of a text input's content.
    fn select_text_range(&mut self, control: ControlId, start: usize, end: usize);
}
