//! Poster template declarations and exclusive template selection.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use crate::consts::TEMPLATE_ID_PREFIX;
use crate::field::FieldId;

/// Layout hint for a field slot; drives styling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Heading,
    Subheading,
    Body,
    Detail,
    Footer,
}

impl SlotRole {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            SlotRole::Heading => "slot--heading",
            SlotRole::Subheading => "slot--subheading",
            SlotRole::Body => "slot--body",
            SlotRole::Detail => "slot--detail",
            SlotRole::Footer => "slot--footer",
        }
    }
}

/// One field placement inside a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub field: FieldId,
    pub role: SlotRole,
}

const fn slot(field: FieldId, role: SlotRole) -> Slot {
    Slot { field, role }
}

/// Static description of one poster layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Value carried by the template's radio option.
    pub value: &'static str,
    pub label: &'static str,
    pub slots: &'static [Slot],
    pub shows_photo: bool,
}

impl TemplateSpec {
    /// DOM id of the template element, e.g. `poster-1`.
    #[must_use]
    pub fn dom_id(&self) -> String {
        template_dom_id(self.value)
    }
}

/// Derive a template element id from a selector value.
#[must_use]
pub fn template_dom_id(value: &str) -> String {
    format!("{TEMPLATE_ID_PREFIX}{value}")
}

pub const TEMPLATES: [TemplateSpec; 3] = [
    TemplateSpec {
        value: "1",
        label: "Gradient",
        slots: &[
            slot(FieldId::YearGrade, SlotRole::Subheading),
            slot(FieldId::SubjectName, SlotRole::Heading),
            slot(FieldId::TeacherName, SlotRole::Body),
            slot(FieldId::Qualifications, SlotRole::Detail),
            slot(FieldId::Institution, SlotRole::Detail),
            slot(FieldId::ClassDays, SlotRole::Body),
            slot(FieldId::ClassTime, SlotRole::Body),
            slot(FieldId::ContactInfo, SlotRole::Footer),
        ],
        shows_photo: true,
    },
    TemplateSpec {
        value: "2",
        label: "Classic",
        slots: &[
            slot(FieldId::Institution, SlotRole::Subheading),
            slot(FieldId::SubjectName, SlotRole::Heading),
            slot(FieldId::YearGrade, SlotRole::Body),
            slot(FieldId::TeacherName, SlotRole::Body),
            slot(FieldId::Qualifications, SlotRole::Detail),
            slot(FieldId::ClassDays, SlotRole::Detail),
            slot(FieldId::ClassTime, SlotRole::Detail),
            slot(FieldId::ContactInfo, SlotRole::Footer),
        ],
        shows_photo: true,
    },
    TemplateSpec {
        value: "3",
        label: "Minimal",
        slots: &[
            slot(FieldId::SubjectName, SlotRole::Heading),
            slot(FieldId::YearGrade, SlotRole::Subheading),
            slot(FieldId::TeacherName, SlotRole::Body),
            slot(FieldId::ClassDays, SlotRole::Detail),
            slot(FieldId::ClassTime, SlotRole::Detail),
            slot(FieldId::ContactInfo, SlotRole::Footer),
        ],
        shows_photo: false,
    },
];

/// The ordered set of templates and which one, if any, is active.
///
/// At most one template is active. Selecting an unknown value leaves none
/// active rather than falling back to a default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSelection {
    templates: Vec<TemplateSpec>,
    active: Option<usize>,
}

impl Default for TemplateSelection {
    fn default() -> Self {
        Self::new(TEMPLATES.to_vec())
    }
}

impl TemplateSelection {
    /// Build a selection with the first template active.
    #[must_use]
    pub fn new(templates: Vec<TemplateSpec>) -> Self {
        let active = if templates.is_empty() { None } else { Some(0) };
        Self { templates, active }
    }

    #[must_use]
    pub fn templates(&self) -> &[TemplateSpec] {
        &self.templates
    }

    /// Deactivate every template, then activate the one whose DOM id is
    /// `poster-<value>`. Returns whether a template was activated.
    pub fn select(&mut self, value: &str) -> bool {
        let wanted = template_dom_id(value);
        self.active = self.templates.iter().position(|t| t.dom_id() == wanted);
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&TemplateSpec> {
        self.active.and_then(|idx| self.templates.get(idx))
    }

    #[must_use]
    pub fn is_active(&self, value: &str) -> bool {
        self.active().is_some_and(|t| t.value == value)
    }

    /// Number of active templates; always zero or one.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }
}
