//! Question view state machine.
//!
//! Core behaviors:
//! - One primary toggle per candidate answer, exclusive in single-select
//!   mode, independent in multi-select mode.
//! - Answers with an "other" prompt get a paired text input whose enabled
//!   state always follows its own toggle's checked state.
//! - A primary change re-syncs every paired input in the same turn, because
//!   an exclusive group unchecks siblings without telling the component.
//! - The host is signaled on user-driven changes only and reads the current
//!   selection back through [`QuestionView::selection`].

use pollbox_protocol::AnswerDefinition;
use pollbox_protocol::AnswerSelector;
use pollbox_protocol::QuestionConfig;
use pollbox_protocol::SelectedAnswer;
use pollbox_protocol::Selection;

use crate::error::QuestionViewError;
use crate::error::Result;
use crate::event::QuestionEvent;
use crate::event_sender::QuestionEventSender;
use crate::registry::AnswerRegistry;
use crate::surface::ControlEvent;
use crate::surface::ControlEventKind;
use crate::surface::ControlId;
use crate::surface::GroupId;
use crate::surface::RenderSurface;
use crate::surface::SelectionMode;
use crate::surface::SubscriptionId;
use crate::surface::TextInputSpec;
use crate::surface::ToggleSpec;

/// Live controls for one answer row.
struct RenderedAnswerRow {
    primary: ControlId,
    primary_subscription: SubscriptionId,
    secondary: Option<SecondaryControl>,
}

struct SecondaryControl {
    control: ControlId,
    subscription: SubscriptionId,
    /// Text as of the last committed edit. Compared on blur so a focus
    /// round-trip without an edit does not signal the host.
    committed_text: String,
}

/// One question with a fixed set of candidate answers rendered on a host
/// surface.
///
/// The view owns the surface for its lifetime and mediates every read and
/// write of selection state. Selection snapshots are recomputed from live
/// control state on demand and never cached.
pub struct QuestionView<S: RenderSurface> {
    surface: S,
    registry: AnswerRegistry,
    rows: Vec<RenderedAnswerRow>,
    group: GroupId,
    multi_select: bool,
    label: String,
    event_tx: QuestionEventSender,
    torn_down: bool,
}

impl<S: RenderSurface> QuestionView<S> {
    /// Build the view on the given surface and apply the initial selection.
    ///
    /// Fails fast with [`QuestionViewError::InvalidConfiguration`] when an
    /// answer entry carries an empty value or label.
    pub fn new(
        mut surface: S,
        config: QuestionConfig,
        event_tx: QuestionEventSender,
    ) -> Result<Self> {
        let QuestionConfig {
            label,
            multi_select,
            selected_answer,
            answers,
        } = config;
        let answers = answers.unwrap_or_default();
        validate_answers(&answers)?;

        let mode = if multi_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        };
        let registry = AnswerRegistry::build(answers);
        let group = surface.create_group(&label, mode);
        let mut rows = Vec::with_capacity(registry.len());
        for answer in registry.iter() {
            rows.push(bind_row(&mut surface, group, answer));
        }

        let mut view = Self {
            surface,
            registry,
            rows,
            group,
            multi_select,
            label,
            event_tx,
            torn_down: false,
        };
        view.apply_selection(selected_answer.as_ref());
        Ok(view)
    }

    /// The question being asked.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    /// The surface group holding this question's controls.
    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Feed one surface-delivered event into the controller.
    ///
    /// This is the single re-entrant point that re-derives dependent state:
    /// the surface reports one control at a time, so a primary change must
    /// settle every row's paired input before control returns to the
    /// surface. Events for controls the view does not own are ignored.
    pub fn handle_control_event(&mut self, event: ControlEvent) -> Result<()> {
        self.ensure_live()?;
        match event.kind {
            ControlEventKind::Changed => match self.row_for_primary(event.control) {
                Some(row_idx) => self.on_primary_changed(row_idx),
                None => {
                    tracing::debug!("change event for unknown control {:?}", event.control);
                }
            },
            ControlEventKind::Blurred => match self.row_for_secondary(event.control) {
                Some(row_idx) => self.on_secondary_blurred(row_idx),
                None => {
                    tracing::debug!("blur event for unknown control {:?}", event.control);
                }
            },
        }
        Ok(())
    }

    /// Snapshot of the current selection, read live from the surface at
    /// call time (mid-edit "other" text is observable).
    ///
    /// `None` when nothing is checked. Single-select questions report
    /// [`Selection::One`] for the first checked row; multi-select questions
    /// always report [`Selection::Many`], even for a single checked row.
    pub fn selection(&self) -> Result<Option<Selection>> {
        self.ensure_live()?;
        let mut records = Vec::new();
        for (position, row) in self.rows.iter().enumerate() {
            if !self.surface.is_checked(row.primary) {
                continue;
            }
            let Some(answer) = self.registry.get(position) else {
                continue;
            };
            records.push(SelectedAnswer {
                value: answer.value.clone(),
                label: answer.label.clone(),
                other_value: row
                    .secondary
                    .as_ref()
                    .map(|secondary| self.surface.text(secondary.control)),
                other_label: answer.other_label.clone(),
            });
        }
        if records.is_empty() {
            return Ok(None);
        }
        if self.multi_select {
            return Ok(Some(Selection::Many(records)));
        }
        Ok(records.into_iter().next().map(Selection::One))
    }

    /// Replace the current selection.
    ///
    /// Every row is cleared first so the call is idempotent and order
    /// independent, then each requested value's row is checked and its
    /// paired input enabled. Values missing from the registry are ignored;
    /// host-supplied selections are best-effort hints, not validated input.
    pub fn set_selection(&mut self, selector: Option<AnswerSelector>) -> Result<()> {
        self.ensure_live()?;
        self.apply_selection(selector.as_ref());
        Ok(())
    }

    /// Uncheck every primary toggle and disable every paired input.
    /// "Other" text is left as typed. Idempotent.
    pub fn clear_selection(&mut self) -> Result<()> {
        self.ensure_live()?;
        self.reset_rows();
        Ok(())
    }

    /// Release every subscription registered at bind time and drop the row
    /// state. Safe to call twice; hosts run teardown defensively from their
    /// own cleanup paths. Every other method fails with
    /// [`QuestionViewError::UseAfterTeardown`] afterwards.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        for row in self.rows.drain(..) {
            self.surface.unsubscribe(row.primary_subscription);
            if let Some(secondary) = row.secondary {
                self.surface.unsubscribe(secondary.subscription);
            }
        }
        tracing::debug!("question view torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn ensure_live(&self) -> Result<()> {
        if self.torn_down {
            return Err(QuestionViewError::UseAfterTeardown);
        }
        Ok(())
    }

    fn row_for_primary(&self, control: ControlId) -> Option<usize> {
        self.rows.iter().position(|row| row.primary == control)
    }

    fn row_for_secondary(&self, control: ControlId) -> Option<usize> {
        self.rows.iter().position(|row| {
            row.secondary
                .as_ref()
                .is_some_and(|secondary| secondary.control == control)
        })
    }

    fn on_primary_changed(&mut self, trigger_idx: usize) {
        // An exclusive group just unchecked the siblings without telling
        // anyone, so every paired input re-syncs, not only the trigger's.
        for row in &self.rows {
            if let Some(secondary) = &row.secondary {
                let checked = self.surface.is_checked(row.primary);
                self.surface.set_enabled(secondary.control, checked);
            }
        }
        let row = &self.rows[trigger_idx];
        if self.surface.is_checked(row.primary)
            && let Some(secondary) = &row.secondary
        {
            // Focus with the full text selected so typing replaces it.
            let text = self.surface.text(secondary.control);
            self.surface.focus(secondary.control);
            self.surface
                .select_text_range(secondary.control, 0, text.chars().count());
        }
        self.event_tx.send(QuestionEvent::SelectionChanged);
    }

    fn on_secondary_blurred(&mut self, row_idx: usize) {
        let Some(row) = self.rows.get_mut(row_idx) else {
            return;
        };
        let Some(secondary) = row.secondary.as_mut() else {
            return;
        };
        let text = self.surface.text(secondary.control);
        if text == secondary.committed_text {
            // Focus round-trip without an edit; stay quiet.
            return;
        }
        secondary.committed_text = text;
        self.event_tx.send(QuestionEvent::SelectionChanged);
    }

    fn apply_selection(&mut self, selector: Option<&AnswerSelector>) {
        self.reset_rows();
        let Some(selector) = selector else {
            return;
        };
        for value in selector.values() {
            let Some(position) = self.registry.position(value) else {
                tracing::warn!("ignoring unknown answer value {value:?}");
                continue;
            };
            let row = &self.rows[position];
            self.surface.set_checked(row.primary, true);
            if let Some(secondary) = &row.secondary {
                self.surface.set_enabled(secondary.control, true);
            }
        }
    }

    fn reset_rows(&mut self) {
        for row in &self.rows {
            self.surface.set_checked(row.primary, false);
            if let Some(secondary) = &row.secondary {
                self.surface.set_enabled(secondary.control, false);
            }
        }
    }
}

fn validate_answers(answers: &[AnswerDefinition]) -> Result<()> {
    for (position, answer) in answers.iter().enumerate() {
        if answer.value.is_empty() {
            return Err(QuestionViewError::InvalidConfiguration(format!(
                "answer at position {position} has an empty value"
            )));
        }
        if answer.label.is_empty() {
            return Err(QuestionViewError::InvalidConfiguration(format!(
                "answer {:?} has an empty label",
                answer.value
            )));
        }
    }
    Ok(())
}

fn bind_row<S: RenderSurface>(
    surface: &mut S,
    group: GroupId,
    answer: &AnswerDefinition,
) -> RenderedAnswerRow {
    let primary = surface.create_toggle(
        group,
        ToggleSpec {
            value: answer.value.clone(),
            label: answer.label.clone(),
        },
    );
    let primary_subscription = surface.subscribe(primary, ControlEventKind::Changed);
    let secondary = answer.other_label.as_ref().map(|other_label| {
        let prefill = answer.other_value.clone().unwrap_or_default();
        let control = surface.create_text_input(
            group,
            TextInputSpec {
                placeholder: other_label.clone(),
                value: prefill.clone(),
                // The initial selection pass enables inputs on checked rows.
                enabled: false,
            },
        );
        let subscription = surface.subscribe(control, ControlEventKind::Blurred);
        SecondaryControl {
            control,
            subscription,
            committed_text: prefill,
        }
    });
    RenderedAnswerRow {
        primary,
        primary_subscription,
        secondary,
    }
}
