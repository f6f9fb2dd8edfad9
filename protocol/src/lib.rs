//! Host-facing data model for the pollbox question component.
//!
//! These types cross the boundary between a host application and the view
//! crate: the host hands over a [`QuestionConfig`] and later reads back a
//! [`Selection`]. Everything here is plain serde-ready data; the selection
//! logic itself lives in `pollbox-view`.

use serde::Deserialize;
use serde::Serialize;

/// One candidate answer offered by a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDefinition {
    /// Unique key reported back to the host when this answer is selected.
    pub value: String,
    /// Display text for the answer row.
    pub label: String,
    /// Pre-filled text for the paired "other" input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_value: Option<String>,
    /// Prompt/placeholder for the paired "other" input. Presence of this
    /// field marks the answer as augmentable; an empty string still counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_label: Option<String>,
}

impl AnswerDefinition {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            other_value: None,
            other_label: None,
        }
    }

    /// Attach an "other" input with the given prompt to this answer.
    pub fn with_other_label(mut self, other_label: impl Into<String>) -> Self {
        self.other_label = Some(other_label.into());
        self
    }

    /// Pre-fill the "other" input.
    pub fn with_other_value(mut self, other_value: impl Into<String>) -> Self {
        self.other_value = Some(other_value.into());
        self
    }

    /// Whether this answer carries a paired "other" text input.
    pub fn is_augmentable(&self) -> bool {
        self.other_label.is_some()
    }
}

/// Initial or requested selection, as supplied by the host.
///
/// Hosts express a selection either as one answer value or as a list of
/// values; both forms deserialize from the natural JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerSelector {
    One(String),
    Many(Vec<String>),
}

impl AnswerSelector {
    /// The requested values in host-supplied order.
    pub fn values(&self) -> &[String] {
        match self {
            AnswerSelector::One(value) => std::slice::from_ref(value),
            AnswerSelector::Many(values) => values,
        }
    }
}

impl From<&str> for AnswerSelector {
    fn from(value: &str) -> Self {
        AnswerSelector::One(value.to_string())
    }
}

impl From<String> for AnswerSelector {
    fn from(value: String) -> Self {
        AnswerSelector::One(value)
    }
}

impl From<Vec<String>> for AnswerSelector {
    fn from(values: Vec<String>) -> Self {
        AnswerSelector::Many(values)
    }
}

impl From<Vec<&str>> for AnswerSelector {
    fn from(values: Vec<&str>) -> Self {
        AnswerSelector::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Configuration a host passes when constructing a question view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionConfig {
    /// The question being asked.
    pub label: String,
    /// `false` renders an exclusive radio group, `true` independent
    /// checkboxes.
    #[serde(default)]
    pub multi_select: bool,
    /// Answer values that should be checked when the component comes up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<AnswerSelector>,
    /// Candidate answers in display order. `None` renders no answer rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerDefinition>>,
}

impl QuestionConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            multi_select: false,
            selected_answer: None,
            answers: None,
        }
    }
}

/// One record of the canonical selection snapshot.
///
/// `other_value`/`other_label` are present iff the answer row carries an
/// "other" input, so an untouched empty input reports `Some("")` rather
/// than `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAnswer {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_label: Option<String>,
}

/// Canonical snapshot of which answers are currently checked.
///
/// Single-select questions always report the `One` form (the first checked
/// row). Multi-select questions always report the `Many` form, even when
/// exactly one row is checked. "Nothing selected" is the absent `Option` at
/// the API boundary and serializes to `null`; the variants serialize
/// untagged to a single object or an array of objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    One(SelectedAnswer),
    Many(Vec<SelectedAnswer>),
}

impl Selection {
    /// The selected records in display order, regardless of form.
    pub fn records(&self) -> &[SelectedAnswer] {
        match self {
            Selection::One(record) => std::slice::from_ref(record),
            Selection::Many(records) => records,
        }
    }

    /// The selected answer values in display order.
    pub fn values(&self) -> Vec<&str> {
        self.records()
            .iter()
            .map(|record| record.value.as_str())
            .collect()
    }
}
