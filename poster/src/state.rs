//! Aggregate page state and the host seam the pipelines work through.
//!
//! DESIGN
//! ======
//! The page owns exactly one [`PosterState`]. Event handlers and pipelines
//! never touch the UI tree directly: they update this value through a
//! [`PosterHost`], and the UI layer re-renders from it. In the browser the
//! host wraps a Leptos signal; tests and server rendering use a `RefCell`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;

use crate::binding::FormValues;
use crate::export::ExportButton;
use crate::field::FieldId;
use crate::photo::PhotoState;
use crate::tabs::NavTabs;
use crate::template::TemplateSelection;

/// Everything the poster page displays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PosterState {
    pub form: FormValues,
    pub templates: TemplateSelection,
    pub photo: PhotoState,
    pub export_button: ExportButton,
    pub tabs: NavTabs,
}

impl PosterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw input value for `field`.
    pub fn set_field(&mut self, field: FieldId, raw: impl Into<String>) {
        self.form.set(field, raw);
    }

    /// Effective display text for `field`.
    #[must_use]
    pub fn display_value(&self, field: FieldId) -> String {
        self.form.display(field)
    }

    /// Handle a template radio change.
    pub fn select_template(&mut self, value: &str) -> bool {
        self.templates.select(value)
    }
}

/// Read and write access to the page's [`PosterState`].
///
/// Closures passed to either method must not call back into the host.
pub trait PosterHost {
    fn read<R>(&self, f: impl FnOnce(&PosterState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut PosterState));
}

impl PosterHost for RefCell<PosterState> {
    fn read<R>(&self, f: impl FnOnce(&PosterState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut PosterState)) {
        f(&mut self.borrow_mut());
    }
}
