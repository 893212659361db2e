//! Field identifiers and the explicit field-to-display-target registry.
//!
//! Every form field is mirrored into zero or more slots across the poster
//! templates. [`FieldRegistry`] is built once from the template declarations
//! so the page never has to derive element lookups from strings.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::collections::HashMap;

use crate::template::{SlotRole, TemplateSpec};

/// The fixed set of bindable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    YearGrade,
    SubjectName,
    TeacherName,
    Qualifications,
    Institution,
    ClassDays,
    ClassTime,
    ContactInfo,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 8] = [
        FieldId::YearGrade,
        FieldId::SubjectName,
        FieldId::TeacherName,
        FieldId::Qualifications,
        FieldId::Institution,
        FieldId::ClassDays,
        FieldId::ClassTime,
        FieldId::ContactInfo,
    ];

    /// Stable key used for the input control's DOM id and the `out-*` class
    /// carried by each display target.
    #[must_use]
    pub fn dom_key(self) -> &'static str {
        match self {
            FieldId::YearGrade => "yearGrade",
            FieldId::SubjectName => "subjectName",
            FieldId::TeacherName => "teacherName",
            FieldId::Qualifications => "qualifications",
            FieldId::Institution => "institution",
            FieldId::ClassDays => "classDays",
            FieldId::ClassTime => "classTime",
            FieldId::ContactInfo => "contactInfo",
        }
    }

    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        // FIELDS is declared in the same order as FieldId::ALL.
        &FIELDS[self as usize]
    }
}

/// Static description of one form field.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
}

pub static FIELDS: [FieldSpec; 8] = [
    FieldSpec { id: FieldId::YearGrade, label: "Year / Grade", placeholder: "e.g., 10th Grade" },
    FieldSpec { id: FieldId::SubjectName, label: "Subject", placeholder: "e.g., Algebra II" },
    FieldSpec { id: FieldId::TeacherName, label: "Teacher Name", placeholder: "e.g., Ms. Rivera" },
    FieldSpec {
        id: FieldId::Qualifications,
        label: "Qualifications",
        placeholder: "e.g., M.Sc. Mathematics, 8 years teaching",
    },
    FieldSpec { id: FieldId::Institution, label: "Institution", placeholder: "e.g., Westbrook High School" },
    FieldSpec { id: FieldId::ClassDays, label: "Class Days", placeholder: "e.g., Mon, Wed, Fri" },
    FieldSpec { id: FieldId::ClassTime, label: "Class Time", placeholder: "e.g., 4:00 PM - 5:30 PM" },
    FieldSpec { id: FieldId::ContactInfo, label: "Contact", placeholder: "e.g., +1 555 0100" },
];

/// One mirror of a field inside one template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayTarget {
    /// Selector value of the owning template.
    pub template: &'static str,
    pub field: FieldId,
    pub role: SlotRole,
}

impl DisplayTarget {
    /// Class shared by every target of the same field, e.g. `out-subjectName`.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("out-{}", self.field.dom_key())
    }
}

/// Explicit mapping from each field to its input control and display targets.
#[derive(Clone, Debug, Default)]
pub struct FieldRegistry {
    targets: HashMap<FieldId, Vec<DisplayTarget>>,
    in_order: Vec<DisplayTarget>,
    photo_targets: Vec<&'static str>,
}

impl FieldRegistry {
    /// Build the registry from template declarations, in template then slot order.
    #[must_use]
    pub fn from_templates(templates: &[TemplateSpec]) -> Self {
        let mut targets: HashMap<FieldId, Vec<DisplayTarget>> = HashMap::new();
        let mut in_order = Vec::new();
        let mut photo_targets = Vec::new();
        for template in templates {
            if template.shows_photo {
                photo_targets.push(template.value);
            }
            for slot in template.slots {
                let target = DisplayTarget { template: template.value, field: slot.field, role: slot.role };
                targets.entry(slot.field).or_default().push(target);
                in_order.push(target);
            }
        }
        Self { targets, in_order, photo_targets }
    }

    /// Display targets for `field`; empty when no template shows it.
    #[must_use]
    pub fn targets(&self, field: FieldId) -> &[DisplayTarget] {
        self.targets.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Display targets inside one template, in slot order.
    #[must_use]
    pub fn targets_in(&self, template: &str) -> Vec<DisplayTarget> {
        self.in_order.iter().filter(|t| t.template == template).copied().collect()
    }

    /// Template values whose layout carries a photo display target.
    #[must_use]
    pub fn photo_targets(&self) -> &[&'static str] {
        &self.photo_targets
    }

    /// DOM id of the field's input control.
    #[must_use]
    pub fn input_id(&self, field: FieldId) -> &'static str {
        field.dom_key()
    }

    /// Total number of display targets across all fields.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }
}
