use pollbox_protocol::AnswerDefinition;
use pollbox_protocol::AnswerSelector;
use pollbox_protocol::Selection;
use pollbox_view::surface::RenderSurface;
use pretty_assertions::assert_eq;

use super::alpha_beta;
use super::build;
use super::multi_xy_config;
use super::pump;
use super::selection_values;
use super::single_select_config;

#[test]
fn clear_selection_always_yields_none() {
    let mut config = multi_xy_config();
    config.selected_answer = Some(AnswerSelector::from(vec!["x", "y"]));
    let (mut view, _rx) = build(config);

    view.clear_selection().expect("live view");
    assert_eq!(view.selection().expect("live view"), None);

    // Idempotent.
    view.clear_selection().expect("live view");
    assert_eq!(view.selection().expect("live view"), None);
}

#[test]
fn set_selection_keeps_the_known_subset_in_registry_order() {
    let (mut view, _rx) = build(multi_xy_config());

    view.set_selection(Some(AnswerSelector::from(vec!["y", "missing", "x"])))
        .expect("live view");
    assert_eq!(selection_values(&view), ["x", "y"]);
}

#[test]
fn set_selection_is_idempotent() {
    let (mut view, _rx) = build(multi_xy_config());
    let selector = AnswerSelector::from(vec!["y", "x"]);

    view.set_selection(Some(selector.clone())).expect("live view");
    let first = view.selection().expect("live view");
    view.set_selection(Some(selector)).expect("live view");
    assert_eq!(view.selection().expect("live view"), first);
}

#[test]
fn set_selection_with_none_clears() {
    let mut config = multi_xy_config();
    config.selected_answer = Some(AnswerSelector::from("x"));
    let (mut view, _rx) = build(config);

    view.set_selection(None).expect("live view");
    assert_eq!(view.selection().expect("live view"), None);
}

#[test]
fn unknown_values_are_silently_ignored() {
    let (mut view, _rx) = build(multi_xy_config());

    view.set_selection(Some(AnswerSelector::from("zzz")))
        .expect("tolerated");
    assert_eq!(view.selection().expect("live view"), None);
}

#[test]
fn single_select_caps_at_one_even_for_a_valid_sequence() {
    let (mut view, _rx) = build(single_select_config(alpha_beta()));

    view.set_selection(Some(AnswerSelector::from(vec!["a", "b"])))
        .expect("live view");
    // The exclusive group keeps only the last checked value.
    assert_eq!(selection_values(&view), ["b"]);
    assert!(matches!(
        view.selection().expect("live view"),
        Some(Selection::One(_))
    ));
}

#[test]
fn multi_select_reports_the_sequence_form_for_a_single_row() {
    // Multi-select results are always the sequence form, even when exactly
    // one row is checked; single-record results are a single-select shape.
    let mut config = multi_xy_config();
    config.selected_answer = Some(AnswerSelector::from(vec!["x", "y"]));
    let (mut view, _rx) = build(config);
    assert_eq!(selection_values(&view), ["x", "y"]);

    view.set_selection(Some(AnswerSelector::from(vec!["y".to_string()])))
        .expect("live view");
    match view.selection().expect("live view") {
        Some(Selection::Many(records)) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].value, "y");
        }
        other => panic!("expected the sequence form, got {other:?}"),
    }
}

#[test]
fn checking_b_after_a_swaps_the_enabled_input() {
    let answers = vec![
        AnswerDefinition::new("a", "Alpha").with_other_label("More about A"),
        AnswerDefinition::new("b", "Beta").with_other_label("More about B"),
    ];
    let (mut view, _rx) = build(single_select_config(answers));
    let toggles = view.surface().toggle_ids();
    let inputs = view.surface().text_input_ids();

    view.surface_mut().click_toggle(toggles[0]);
    pump(&mut view);
    assert!(view.surface().is_enabled(inputs[0]));
    assert!(!view.surface().is_enabled(inputs[1]));

    view.surface_mut().click_toggle(toggles[1]);
    pump(&mut view);
    assert!(!view.surface().is_enabled(inputs[0]));
    assert!(view.surface().is_enabled(inputs[1]));
    assert_eq!(selection_values(&view), ["b"]);
}

#[test]
fn duplicate_values_render_both_rows_but_index_the_later_one() {
    let answers = vec![
        AnswerDefinition::new("dup", "First"),
        AnswerDefinition::new("dup", "Second"),
    ];
    let mut config = multi_xy_config();
    config.answers = Some(answers);
    let (mut view, _rx) = build(config);

    let toggles = view.surface().toggle_ids();
    assert_eq!(toggles.len(), 2);

    view.set_selection(Some(AnswerSelector::from("dup")))
        .expect("live view");
    assert!(!view.surface().is_checked(toggles[0]));
    assert!(view.surface().is_checked(toggles[1]));

    // Both rows stay individually clickable.
    view.surface_mut().click_toggle(toggles[0]);
    pump(&mut view);
    assert_eq!(selection_values(&view), ["dup", "dup"]);
}
