use poster::template::TEMPLATES;

use super::*;

#[test]
fn one_entry_per_template_in_order() {
    let refs = TemplateRefs::new(&TEMPLATES);
    let values: Vec<&str> = refs.entries().iter().map(|(spec, _)| spec.value).collect();
    assert_eq!(values, vec!["1", "2", "3"]);
}

#[test]
fn node_ref_lookup_by_value() {
    let refs = TemplateRefs::new(&TEMPLATES);
    assert!(refs.node_ref("2").is_some());
    assert!(refs.node_ref("7").is_none());
}
