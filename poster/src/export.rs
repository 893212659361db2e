//! Poster export: capture the active template and download it as a PNG.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use async_trait::async_trait;

use crate::busy::ExportBusy;
use crate::consts::{
    EXPORT_FAILED_MESSAGE, EXPORT_FILE_SUFFIX, EXPORT_LABEL, EXPORT_SCALE, EXPORT_SUBJECT_FALLBACK,
    EXPORT_YEAR_FALLBACK,
};
use crate::error::CapabilityError;
use crate::field::FieldId;
use crate::state::PosterHost;
use crate::template::TemplateSpec;

/// Visual state of the download button.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportButton {
    pub label: String,
    pub opacity: f32,
    pub disabled: bool,
}

impl Default for ExportButton {
    fn default() -> Self {
        Self { label: EXPORT_LABEL.to_owned(), opacity: 1.0, disabled: false }
    }
}

/// Options handed to the rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub scale: f64,
    /// Load cross-origin images with CORS so they can be drawn.
    pub use_cors: bool,
    /// Fill color behind the capture; `None` keeps it transparent.
    pub background: Option<String>,
    pub logging: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: EXPORT_SCALE, use_cors: true, background: None, logging: false }
    }
}

/// Style overrides applied to the cloned template right before capture.
///
/// The live element stays untouched; only the clone loses its preview
/// transform and drop shadow and is pinned to the live element's size.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureOverrides {
    pub width_px: f64,
    pub height_px: f64,
}

impl CaptureOverrides {
    #[must_use]
    pub fn for_size(width_px: f64, height_px: f64) -> Self {
        Self { width_px, height_px }
    }

    /// CSS `(property, value)` pairs to set on the clone.
    #[must_use]
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("transform", "none".to_owned()),
            ("box-shadow", "none".to_owned()),
            ("width", format!("{}px", self.width_px)),
            ("height", format!("{}px", self.height_px)),
        ]
    }
}

/// Everything the rasterizer needs to capture one template.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureRequest {
    pub template_value: &'static str,
    pub dom_id: String,
    pub options: RenderOptions,
}

impl CaptureRequest {
    #[must_use]
    pub fn for_template(template: &TemplateSpec) -> Self {
        Self { template_value: template.value, dom_id: template.dom_id(), options: RenderOptions::default() }
    }
}

/// Opaque element-to-image capability.
#[async_trait(?Send)]
pub trait Rasterizer {
    /// Capture the requested template and return a `data:image/png` URL.
    async fn render(&self, request: &CaptureRequest) -> Result<String, CapabilityError>;
}

/// Saves a named file in the host environment.
pub trait Downloader {
    fn download(&self, filename: &str, data_url: &str) -> Result<(), CapabilityError>;
}

/// Blocking user-facing message.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Terminal result of one export click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    NoActiveTemplate,
    Downloaded { filename: String },
    Failed(CapabilityError),
}

/// Download filename built from the subject and year/grade fields.
///
/// Blank values fall back to `Class` and `Poster`; whitespace runs become a
/// single hyphen.
#[must_use]
pub fn export_filename(subject: &str, year: &str) -> String {
    let subject = hyphenate_or(subject, EXPORT_SUBJECT_FALLBACK);
    let year = hyphenate_or(year, EXPORT_YEAR_FALLBACK);
    format!("{year}-{subject}{EXPORT_FILE_SUFFIX}")
}

fn hyphenate_or(raw: &str, fallback: &str) -> String {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.is_empty() { fallback.to_owned() } else { words.join("-") }
}

/// Handle one download-button click.
pub async fn run_export<H, R, D, N>(host: &H, rasterizer: &R, downloader: &D, notifier: &N) -> ExportOutcome
where
    H: PosterHost,
    R: Rasterizer,
    D: Downloader,
    N: Notifier,
{
    let Some(template) = host.read(|s| s.templates.active().copied()) else {
        log::debug!("export requested with no active template");
        return ExportOutcome::NoActiveTemplate;
    };

    let _busy = ExportBusy::enter(host);
    let request = CaptureRequest::for_template(&template);

    let result = match rasterizer.render(&request).await {
        Ok(data_url) => {
            let filename = host.read(|s| {
                export_filename(s.form.raw(FieldId::SubjectName), s.form.raw(FieldId::YearGrade))
            });
            downloader.download(&filename, &data_url).map(|()| filename)
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(filename) => {
            log::debug!("exported {} as {filename}", request.dom_id);
            ExportOutcome::Downloaded { filename }
        }
        Err(err) => {
            log::error!("error generating poster image: {err}");
            notifier.alert(EXPORT_FAILED_MESSAGE);
            ExportOutcome::Failed(err)
        }
    }
}
