//! In-memory render surface.
//!
//! Stands in for a real UI: it stores control state, enforces
//! exclusive-group semantics for single-select groups, and queues events for
//! subscribed controls. The test suites drive it as the "user"; a host
//! without a screen can use it the same way to compute selections.

use std::collections::VecDeque;
use std::ops::Range;

use crate::surface::ControlEvent;
use crate::surface::ControlEventKind;
use crate::surface::ControlId;
use crate::surface::GroupId;
use crate::surface::RenderSurface;
use crate::surface::SelectionMode;
use crate::surface::SubscriptionId;
use crate::surface::TextInputSpec;
use crate::surface::ToggleSpec;

#[derive(Debug)]
struct GroupState {
    label: String,
    mode: SelectionMode,
}

#[derive(Debug)]
enum ControlState {
    Toggle {
        group: GroupId,
        value: String,
        label: String,
        checked: bool,
    },
    Text {
        placeholder: String,
        text: String,
        enabled: bool,
        selected_range: Option<Range<usize>>,
    },
}

#[derive(Debug)]
struct SubscriptionState {
    control: ControlId,
    kind: ControlEventKind,
    active: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    groups: Vec<GroupState>,
    controls: Vec<ControlState>,
    subscriptions: Vec<SubscriptionState>,
    events: VecDeque<ControlEvent>,
    focused: Option<ControlId>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a user click on a toggle.
    ///
    /// A radio that is already checked stays checked and emits nothing (no
    /// state change); a checkbox always flips. Sibling radios unchecked by
    /// an exclusive group do not emit events of their own, matching how real
    /// surfaces report only the interacted control.
    pub fn click_toggle(&mut self, control: ControlId) {
        let Some(ControlState::Toggle { group, checked, .. }) = self.control(control) else {
            return;
        };
        let (group, was_checked) = (*group, *checked);
        match self.group_mode(group) {
            Some(SelectionMode::Single) => {
                if was_checked {
                    return;
                }
                self.check_exclusive(control, group);
            }
            Some(SelectionMode::Multi) => {
                if let Some(ControlState::Toggle { checked, .. }) = self.control_mut(control) {
                    *checked = !*checked;
                }
            }
            None => return,
        }
        self.push_event(control, ControlEventKind::Changed);
    }

    /// Replace a text input's content, as if the user typed into it.
    /// Ignored while the input is disabled. Typing discards any pending
    /// select-all range.
    pub fn edit_text(&mut self, control: ControlId, text: &str) {
        if let Some(ControlState::Text {
            text: current,
            enabled: true,
            selected_range,
            ..
        }) = self.control_mut(control)
        {
            *current = text.to_string();
            *selected_range = None;
        }
    }

    /// Simulate a text input losing input focus.
    pub fn blur_text(&mut self, control: ControlId) {
        if !matches!(self.control(control), Some(ControlState::Text { .. })) {
            return;
        }
        if self.focused == Some(control) {
            self.focused = None;
        }
        self.push_event(control, ControlEventKind::Blurred);
    }

    /// Drain the events queued for subscribed controls, oldest first.
    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_enabled(&self, control: ControlId) -> bool {
        matches!(
            self.control(control),
            Some(ControlState::Text { enabled: true, .. })
        )
    }

    pub fn is_focused(&self, control: ControlId) -> bool {
        self.focused == Some(control)
    }

    pub fn selected_range(&self, control: ControlId) -> Option<Range<usize>> {
        match self.control(control) {
            Some(ControlState::Text { selected_range, .. }) => selected_range.clone(),
            _ => None,
        }
    }

    pub fn placeholder(&self, control: ControlId) -> Option<&str> {
        match self.control(control) {
            Some(ControlState::Text { placeholder, .. }) => Some(placeholder.as_str()),
            _ => None,
        }
    }

    pub fn toggle_value(&self, control: ControlId) -> Option<&str> {
        match self.control(control) {
            Some(ControlState::Toggle { value, .. }) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn toggle_label(&self, control: ControlId) -> Option<&str> {
        match self.control(control) {
            Some(ControlState::Toggle { label, .. }) => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn group_label(&self, group: GroupId) -> Option<&str> {
        self.groups
            .get(group.raw() as usize)
            .map(|state| state.label.as_str())
    }

    /// Toggle controls in creation (display) order.
    pub fn toggle_ids(&self) -> Vec<ControlId> {
        self.control_ids(|state| matches!(state, ControlState::Toggle { .. }))
    }

    /// Text inputs in creation (display) order.
    pub fn text_input_ids(&self) -> Vec<ControlId> {
        self.control_ids(|state| matches!(state, ControlState::Text { .. }))
    }

    /// Number of subscriptions that have not been released.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.iter().filter(|sub| sub.active).count()
    }

    fn control_ids(&self, mut keep: impl FnMut(&ControlState) -> bool) -> Vec<ControlId> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(_, state)| keep(state))
            .map(|(raw, _)| ControlId::new(raw as u32))
            .collect()
    }

    fn control(&self, control: ControlId) -> Option<&ControlState> {
        self.controls.get(control.raw() as usize)
    }

    fn control_mut(&mut self, control: ControlId) -> Option<&mut ControlState> {
        self.controls.get_mut(control.raw() as usize)
    }

    fn group_mode(&self, group: GroupId) -> Option<SelectionMode> {
        self.groups.get(group.raw() as usize).map(|state| state.mode)
    }

    /// Check one toggle and uncheck its siblings in the same group.
    fn check_exclusive(&mut self, control: ControlId, group: GroupId) {
        for (raw, state) in self.controls.iter_mut().enumerate() {
            if let ControlState::Toggle {
                group: toggle_group,
                checked,
                ..
            } = state
                && *toggle_group == group
            {
                *checked = raw as u32 == control.raw();
            }
        }
    }

    fn push_event(&mut self, control: ControlId, kind: ControlEventKind) {
        let subscribed = self
            .subscriptions
            .iter()
            .any(|sub| sub.active && sub.control == control && sub.kind == kind);
        if subscribed {
            self.events.push_back(ControlEvent { control, kind });
        }
    }
}

impl RenderSurface for HeadlessSurface {
    fn create_group(&mut self, label: &str, mode: SelectionMode) -> GroupId {
        let id = GroupId::new(self.groups.len() as u32);
        self.groups.push(GroupState {
            label: label.to_string(),
            mode,
        });
        id
    }

    fn create_toggle(&mut self, group: GroupId, spec: ToggleSpec) -> ControlId {
        let id = ControlId::new(self.controls.len() as u32);
        self.controls.push(ControlState::Toggle {
            group,
            value: spec.value,
            label: spec.label,
            checked: false,
        });
        id
    }

    fn create_text_input(&mut self, _group: GroupId, spec: TextInputSpec) -> ControlId {
        let id = ControlId::new(self.controls.len() as u32);
        self.controls.push(ControlState::Text {
            placeholder: spec.placeholder,
            text: spec.value,
            enabled: spec.enabled,
            selected_range: None,
        });
        id
    }

    fn subscribe(&mut self, control: ControlId, kind: ControlEventKind) -> SubscriptionId {
        let id = SubscriptionId::new(self.subscriptions.len() as u32);
        self.subscriptions.push(SubscriptionState {
            control,
            kind,
            active: true,
        });
        id
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        if let Some(state) = self.subscriptions.get_mut(subscription.raw() as usize) {
            state.active = false;
        }
    }

    fn is_checked(&self, control: ControlId) -> bool {
        matches!(
            self.control(control),
            Some(ControlState::Toggle { checked: true, .. })
        )
    }

    fn set_checked(&mut self, control: ControlId, checked: bool) {
        let Some(ControlState::Toggle { group, .. }) = self.control(control) else {
            return;
        };
        let group = *group;
        if checked && self.group_mode(group) == Some(SelectionMode::Single) {
            // Programmatic checks go through the same exclusive-group rule
            // as clicks; only event emission differs.
            self.check_exclusive(control, group);
            return;
        }
        if let Some(ControlState::Toggle { checked: current, .. }) = self.control_mut(control) {
            *current = checked;
        }
    }

    fn set_enabled(&mut self, control: ControlId, enabled: bool) {
        if let Some(ControlState::Text {
            enabled: current, ..
        }) = self.control_mut(control)
        {
            *current = enabled;
            if !enabled && self.focused == Some(control) {
                self.focused = None;
            }
        }
    }

    fn text(&self, control: ControlId) -> String {
        match self.control(control) {
            Some(ControlState::Text { text, .. }) => text.clone(),
            _ => String::new(),
        }
    }

    fn focus(&mut self, control: ControlId) {
        if matches!(
            self.control(control),
            Some(ControlState::Text { enabled: true, .. })
        ) {
            self.focused = Some(control);
        }
    }

    fn select_text_range(&mut self, control: ControlId, start: usize, end: usize) {
        if let Some(ControlState::Text { selected_range, .. }) = self.control_mut(control) {
            *selected_range = Some(start..end);
        }
    }
}
