//! Scoped busy states.
//!
//! A guard marks its control busy on entry and restores it when dropped, so
//! the release runs on success, failure, and early return alike. Disabling
//! the control is the only thing keeping a pipeline from running twice.

#[cfg(test)]
#[path = "busy_test.rs"]
mod busy_test;

use crate::consts::{EXPORT_BUSY_LABEL, EXPORT_BUSY_OPACITY, STATUS_PROCESSING};
use crate::export::ExportButton;
use crate::photo::PhotoPhase;
use crate::state::PosterHost;

/// Upload control held disabled while a photo is processed.
pub struct UploadBusy<'a, H: PosterHost> {
    host: &'a H,
}

impl<'a, H: PosterHost> UploadBusy<'a, H> {
    #[must_use]
    pub fn enter(host: &'a H) -> Self {
        host.update(|s| {
            s.photo.phase = PhotoPhase::Processing;
            s.photo.status = STATUS_PROCESSING.to_owned();
            s.photo.upload_disabled = true;
        });
        Self { host }
    }
}

impl<H: PosterHost> Drop for UploadBusy<'_, H> {
    fn drop(&mut self) {
        self.host.update(|s| {
            s.photo.upload_disabled = false;
            s.photo.phase = PhotoPhase::Idle;
        });
    }
}

/// Download button held in its "Generating..." state during an export.
pub struct ExportBusy<'a, H: PosterHost> {
    host: &'a H,
    prior: ExportButton,
}

impl<'a, H: PosterHost> ExportBusy<'a, H> {
    #[must_use]
    pub fn enter(host: &'a H) -> Self {
        let prior = host.read(|s| s.export_button.clone());
        host.update(|s| {
            s.export_button = ExportButton {
                label: EXPORT_BUSY_LABEL.to_owned(),
                opacity: EXPORT_BUSY_OPACITY,
                disabled: true,
            };
        });
        Self { host, prior }
    }
}

impl<H: PosterHost> Drop for ExportBusy<'_, H> {
    fn drop(&mut self) {
        let prior = self.prior.clone();
        self.host.update(|s| s.export_button = prior);
    }
}
