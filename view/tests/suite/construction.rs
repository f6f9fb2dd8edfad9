use pollbox_protocol::AnswerDefinition;
use pollbox_protocol::AnswerSelector;
use pollbox_protocol::QuestionConfig;
use pollbox_protocol::SelectedAnswer;
use pollbox_protocol::Selection;
use pollbox_view::QuestionEventSender;
use pollbox_view::QuestionView;
use pollbox_view::QuestionViewError;
use pollbox_view::headless::HeadlessSurface;
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::mpsc::unbounded_channel;

use super::alpha_beta;
use super::build;
use super::multi_xy_config;
use super::pump;
use super::selection_values;
use super::single_select_config;

#[test]
fn fresh_view_reports_no_selection() {
    let (view, _rx) = build(single_select_config(alpha_beta()));
    assert_eq!(view.selection().expect("live view"), None);
}

#[test]
fn preselected_augmented_row_reports_empty_other_text() {
    let mut config = single_select_config(alpha_beta());
    config.selected_answer = Some(AnswerSelector::from("b"));
    let (mut view, _rx) = build(config);

    assert_eq!(
        view.selection().expect("live view"),
        Some(Selection::One(SelectedAnswer {
            value: "b".to_string(),
            label: "Beta".to_string(),
            other_value: Some(String::new()),
            other_label: Some("Specify".to_string()),
        }))
    );

    // Checking the plain answer moves the selection over wholesale.
    let toggles = view.surface().toggle_ids();
    view.surface_mut().click_toggle(toggles[0]);
    pump(&mut view);
    assert_eq!(
        view.selection().expect("live view"),
        Some(Selection::One(SelectedAnswer {
            value: "a".to_string(),
            label: "Alpha".to_string(),
            other_value: None,
            other_label: None,
        }))
    );
}

#[test]
fn initial_sequence_selection_normalizes_to_registry_order() {
    let mut config = multi_xy_config();
    config.selected_answer = Some(AnswerSelector::from(vec!["y", "x"]));
    let (view, _rx) = build(config);

    assert_eq!(selection_values(&view), ["x", "y"]);
}

#[test]
fn preselection_enables_the_paired_input() {
    let mut config = single_select_config(alpha_beta());
    config.selected_answer = Some(AnswerSelector::from("b"));
    let (view, _rx) = build(config);

    let input = view.surface().text_input_ids()[0];
    assert!(view.surface().is_enabled(input));

    let (unselected, _rx) = build(single_select_config(alpha_beta()));
    let input = unselected.surface().text_input_ids()[0];
    assert!(!unselected.surface().is_enabled(input));
}

#[test]
fn absent_answers_render_no_rows() {
    let (mut view, _rx) = build(QuestionConfig::new("Anything to add?"));

    assert_eq!(view.surface().toggle_ids(), Vec::new());
    assert_eq!(view.selection().expect("live view"), None);
    view.set_selection(Some(AnswerSelector::from("anything")))
        .expect("tolerated");
    assert_eq!(view.selection().expect("live view"), None);
}

#[test]
fn empty_other_label_still_creates_an_input() {
    let answers = vec![AnswerDefinition::new("other", "Other").with_other_label("")];
    let (view, _rx) = build(single_select_config(answers));

    let inputs = view.surface().text_input_ids();
    assert_eq!(inputs.len(), 1);
    assert_eq!(view.surface().placeholder(inputs[0]), Some(""));
}

#[test]
fn one_change_subscription_per_row_plus_one_blur_per_augmented_row() {
    let (view, _rx) = build(single_select_config(alpha_beta()));
    assert_eq!(view.surface().active_subscriptions(), 3);
}

#[test]
fn empty_answer_label_fails_fast() {
    let (tx, _rx) = unbounded_channel();
    let config = single_select_config(vec![AnswerDefinition::new("a", "")]);
    let result = QuestionView::new(
        HeadlessSurface::new(),
        config,
        QuestionEventSender::new(tx),
    );
    assert!(matches!(
        result.err(),
        Some(QuestionViewError::InvalidConfiguration(_))
    ));
}

#[test]
fn selection_serializes_to_null_object_or_array() {
    let (view, _rx) = build(single_select_config(alpha_beta()));
    assert_eq!(
        serde_json::to_value(view.selection().expect("live view")).expect("serializable"),
        json!(null)
    );

    let mut config = single_select_config(alpha_beta());
    config.selected_answer = Some(AnswerSelector::from("a"));
    let (view, _rx) = build(config);
    assert_eq!(
        serde_json::to_value(view.selection().expect("live view")).expect("serializable"),
        json!({ "value": "a", "label": "Alpha" })
    );

    let mut config = multi_xy_config();
    config.selected_answer = Some(AnswerSelector::from("x"));
    let (view, _rx) = build(config);
    assert_eq!(
        serde_json::to_value(view.selection().expect("live view")).expect("serializable"),
        json!([{ "value": "x", "label": "X" }])
    );
}
