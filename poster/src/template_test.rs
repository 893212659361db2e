use super::*;

// =============================================================
// Declarations
// =============================================================

#[test]
fn template_dom_id_joins_prefix_and_value() {
    assert_eq!(template_dom_id("2"), "poster-2");
    assert_eq!(TEMPLATES[0].dom_id(), "poster-1");
}

#[test]
fn template_values_are_unique() {
    let mut values: Vec<&str> = TEMPLATES.iter().map(|t| t.value).collect();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), TEMPLATES.len());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn default_selection_activates_first_template() {
    let selection = TemplateSelection::default();
    assert!(selection.is_active("1"));
    assert_eq!(selection.active_count(), 1);
}

#[test]
fn select_known_value_activates_exactly_that_template() {
    let mut selection = TemplateSelection::default();
    assert!(selection.select("3"));
    assert!(selection.is_active("3"));
    assert!(!selection.is_active("1"));
    assert!(!selection.is_active("2"));
    assert_eq!(selection.active_count(), 1);
    assert_eq!(selection.active().map(TemplateSpec::dom_id), Some("poster-3".to_owned()));
}

#[test]
fn select_unknown_value_leaves_none_active() {
    let mut selection = TemplateSelection::default();
    assert!(!selection.select("9"));
    assert_eq!(selection.active_count(), 0);
    assert!(selection.active().is_none());
}

#[test]
fn select_after_unknown_recovers() {
    let mut selection = TemplateSelection::default();
    selection.select("missing");
    assert!(selection.select("2"));
    assert!(selection.is_active("2"));
}

#[test]
fn empty_selection_has_nothing_active() {
    let mut selection = TemplateSelection::new(Vec::new());
    assert_eq!(selection.active_count(), 0);
    assert!(!selection.select("1"));
}

#[test]
fn slot_role_classes_are_distinct() {
    let roles = [SlotRole::Heading, SlotRole::Subheading, SlotRole::Body, SlotRole::Detail, SlotRole::Footer];
    for (i, a) in roles.iter().enumerate() {
        for (j, b) in roles.iter().enumerate() {
            if i != j {
                assert_ne!(a.class_name(), b.class_name());
            }
        }
    }
}
