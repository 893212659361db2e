use std::cell::RefCell;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::state::PosterState;

// =============================================================
// Fakes
// =============================================================

struct FakeRasterizer<'a> {
    host: &'a RefCell<PosterState>,
    result: Result<String, CapabilityError>,
    requests: RefCell<Vec<CaptureRequest>>,
    button_during: RefCell<Option<ExportButton>>,
}

impl<'a> FakeRasterizer<'a> {
    fn new(host: &'a RefCell<PosterState>, result: Result<String, CapabilityError>) -> Self {
        Self { host, result, requests: RefCell::new(Vec::new()), button_during: RefCell::new(None) }
    }
}

#[async_trait(?Send)]
impl Rasterizer for FakeRasterizer<'_> {
    async fn render(&self, request: &CaptureRequest) -> Result<String, CapabilityError> {
        *self.button_during.borrow_mut() = Some(self.host.borrow().export_button.clone());
        self.requests.borrow_mut().push(request.clone());
        self.result.clone()
    }
}

#[derive(Default)]
struct FakeDownloader {
    fail: bool,
    saved: RefCell<Vec<(String, String)>>,
}

impl Downloader for FakeDownloader {
    fn download(&self, filename: &str, data_url: &str) -> Result<(), CapabilityError> {
        if self.fail {
            return Err(CapabilityError::Download("anchor click blocked".to_owned()));
        }
        self.saved.borrow_mut().push((filename.to_owned(), data_url.to_owned()));
        Ok(())
    }
}

#[derive(Default)]
struct FakeNotifier {
    alerts: RefCell<Vec<String>>,
}

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

const PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

// =============================================================
// Filenames
// =============================================================

#[test]
fn filename_hyphenates_subject_and_year() {
    assert_eq!(export_filename("Algebra II", "10th Grade"), "10th-Grade-Algebra-II-Poster.png");
}

#[test]
fn filename_falls_back_when_empty() {
    assert_eq!(export_filename("", ""), "Poster-Class-Poster.png");
}

#[test]
fn filename_collapses_whitespace_runs() {
    assert_eq!(export_filename("  World   History ", "Year\t9"), "Year-9-World-History-Poster.png");
}

#[test]
fn filename_treats_whitespace_only_as_empty() {
    assert_eq!(export_filename("   ", "12"), "12-Class-Poster.png");
}

// =============================================================
// Options and overrides
// =============================================================

#[test]
fn render_options_default_to_double_scale_transparent() {
    let options = RenderOptions::default();
    assert!((options.scale - 2.0).abs() < f64::EPSILON);
    assert!(options.use_cors);
    assert!(options.background.is_none());
    assert!(!options.logging);
}

#[test]
fn capture_overrides_strip_transform_and_shadow_and_pin_size() {
    let props = CaptureOverrides::for_size(600.0, 848.5).style_properties();
    assert_eq!(
        props,
        vec![
            ("transform", "none".to_owned()),
            ("box-shadow", "none".to_owned()),
            ("width", "600px".to_owned()),
            ("height", "848.5px".to_owned()),
        ]
    );
}

// =============================================================
// run_export
// =============================================================

#[test]
fn export_downloads_active_template_with_generated_name() {
    let host = RefCell::new(PosterState::new());
    host.update(|s| {
        s.set_field(FieldId::SubjectName, "Algebra II");
        s.set_field(FieldId::YearGrade, "10th Grade");
        s.select_template("2");
    });
    let rasterizer = FakeRasterizer::new(&host, Ok(PNG.to_owned()));
    let downloader = FakeDownloader::default();
    let notifier = FakeNotifier::default();

    let outcome = block_on(run_export(&host, &rasterizer, &downloader, &notifier));

    assert_eq!(outcome, ExportOutcome::Downloaded { filename: "10th-Grade-Algebra-II-Poster.png".to_owned() });
    assert_eq!(
        *downloader.saved.borrow(),
        vec![("10th-Grade-Algebra-II-Poster.png".to_owned(), PNG.to_owned())]
    );
    let requests = rasterizer.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].dom_id, "poster-2");
    assert_eq!(requests[0].options, RenderOptions::default());
    assert!(notifier.alerts.borrow().is_empty());
}

#[test]
fn export_with_empty_fields_uses_fallback_name() {
    let host = RefCell::new(PosterState::new());
    let rasterizer = FakeRasterizer::new(&host, Ok(PNG.to_owned()));
    let downloader = FakeDownloader::default();
    let notifier = FakeNotifier::default();

    let outcome = block_on(run_export(&host, &rasterizer, &downloader, &notifier));

    assert_eq!(outcome, ExportOutcome::Downloaded { filename: "Poster-Class-Poster.png".to_owned() });
}

#[test]
fn export_without_active_template_is_noop() {
    let host = RefCell::new(PosterState::new());
    host.update(|s| {
        s.select_template("missing");
    });
    let before = host.borrow().clone();
    let rasterizer = FakeRasterizer::new(&host, Ok(PNG.to_owned()));
    let downloader = FakeDownloader::default();
    let notifier = FakeNotifier::default();

    let outcome = block_on(run_export(&host, &rasterizer, &downloader, &notifier));

    assert_eq!(outcome, ExportOutcome::NoActiveTemplate);
    assert!(rasterizer.requests.borrow().is_empty());
    assert!(downloader.saved.borrow().is_empty());
    assert_eq!(*host.borrow(), before);
}

#[test]
fn button_is_busy_during_render() {
    let host = RefCell::new(PosterState::new());
    let rasterizer = FakeRasterizer::new(&host, Ok(PNG.to_owned()));

    block_on(run_export(&host, &rasterizer, &FakeDownloader::default(), &FakeNotifier::default()));

    let during = rasterizer.button_during.borrow().clone();
    assert_eq!(
        during,
        Some(ExportButton { label: "Generating...".to_owned(), opacity: 0.8, disabled: true })
    );
}

#[test]
fn failed_render_alerts_and_restores_button() {
    let host = RefCell::new(PosterState::new());
    let before = host.borrow().export_button.clone();
    let rasterizer = FakeRasterizer::new(&host, Err(CapabilityError::Render("tainted canvas".to_owned())));
    let downloader = FakeDownloader::default();
    let notifier = FakeNotifier::default();

    let outcome = block_on(run_export(&host, &rasterizer, &downloader, &notifier));

    assert_eq!(outcome, ExportOutcome::Failed(CapabilityError::Render("tainted canvas".to_owned())));
    assert!(downloader.saved.borrow().is_empty());
    assert_eq!(*notifier.alerts.borrow(), vec![EXPORT_FAILED_MESSAGE.to_owned()]);
    assert_eq!(host.borrow().export_button, before);
}

#[test]
fn failed_download_is_surfaced() {
    let host = RefCell::new(PosterState::new());
    let rasterizer = FakeRasterizer::new(&host, Ok(PNG.to_owned()));
    let downloader = FakeDownloader { fail: true, ..FakeDownloader::default() };
    let notifier = FakeNotifier::default();

    let outcome = block_on(run_export(&host, &rasterizer, &downloader, &notifier));

    assert!(matches!(outcome, ExportOutcome::Failed(CapabilityError::Download(_))));
    assert_eq!(notifier.alerts.borrow().len(), 1);
    assert_eq!(host.borrow().export_button, ExportButton::default());
}
