//! Element handles for the rendered templates.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use leptos::html::Div;
use leptos::prelude::*;
use poster::template::TemplateSpec;

/// One `NodeRef` per template, created once when the page mounts.
///
/// The rasterizer captures through these handles instead of looking
/// elements up by id.
#[derive(Clone)]
pub struct TemplateRefs {
    entries: Vec<(TemplateSpec, NodeRef<Div>)>,
}

impl TemplateRefs {
    pub fn new(templates: &[TemplateSpec]) -> Self {
        Self { entries: templates.iter().map(|spec| (*spec, NodeRef::new())).collect() }
    }

    pub fn entries(&self) -> &[(TemplateSpec, NodeRef<Div>)] {
        &self.entries
    }

    pub fn node_ref(&self, value: &str) -> Option<NodeRef<Div>> {
        self.entries
            .iter()
            .find(|(spec, _)| spec.value == value)
            .map(|(_, node_ref)| *node_ref)
    }

    /// Mounted element for the template with selector `value`.
    #[cfg(feature = "hydrate")]
    pub fn element(&self, value: &str) -> Option<web_sys::HtmlDivElement> {
        self.node_ref(value).and_then(|node_ref| node_ref.get_untracked())
    }
}
