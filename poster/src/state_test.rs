use super::*;

#[test]
fn new_state_shows_placeholders_and_first_template() {
    let state = PosterState::new();
    assert_eq!(state.display_value(FieldId::SubjectName), "Algebra II");
    assert!(state.templates.is_active("1"));
    assert!(state.photo.asset.is_none());
    assert!(!state.export_button.disabled);
}

#[test]
fn set_field_changes_display_value() {
    let mut state = PosterState::new();
    state.set_field(FieldId::TeacherName, "Mr. Okafor ");
    assert_eq!(state.display_value(FieldId::TeacherName), "Mr. Okafor");
}

#[test]
fn select_template_delegates_to_selection() {
    let mut state = PosterState::new();
    assert!(state.select_template("2"));
    assert!(state.templates.is_active("2"));
    assert!(!state.select_template("nope"));
    assert_eq!(state.templates.active_count(), 0);
}

#[test]
fn refcell_host_reads_and_updates() {
    let host = RefCell::new(PosterState::new());
    host.update(|s| s.set_field(FieldId::ClassTime, "9 AM"));
    let shown = host.read(|s| s.display_value(FieldId::ClassTime));
    assert_eq!(shown, "9 AM");
}
