//! Photo upload pipeline: background removal with a raw-image fallback.
//!
//! ```text
//! Idle --file--> Processing --removed--> Ready ---------\
//!                     \------failed----> FallbackReady --+--> Idle (upload re-enabled)
//! ```
//!
//! The upload control is disabled for the whole of `Processing` by an
//! [`UploadBusy`] guard, released on every exit path.

#[cfg(test)]
#[path = "photo_test.rs"]
mod photo_test;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::busy::UploadBusy;
use crate::consts::{REMOVAL_PUBLIC_PATH, STATUS_NO_FILE, STATUS_SUFFIX_FALLBACK, STATUS_SUFFIX_REMOVED};
use crate::error::CapabilityError;
use crate::field::FieldRegistry;
use crate::state::{PosterHost, PosterState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoPhase {
    #[default]
    Idle,
    Processing,
    Ready,
    FallbackReady,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhotoAssetKind {
    /// Object URL of the background-removed image.
    BackgroundRemoved,
    /// Data URL of the file as uploaded.
    Original,
}

/// The image every photo display target currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoAsset {
    pub url: String,
    pub kind: PhotoAssetKind,
}

/// Upload control and current photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoState {
    pub phase: PhotoPhase,
    pub status: String,
    pub upload_disabled: bool,
    pub asset: Option<PhotoAsset>,
}

impl Default for PhotoState {
    fn default() -> Self {
        Self {
            phase: PhotoPhase::Idle,
            status: STATUS_NO_FILE.to_owned(),
            upload_disabled: false,
            asset: None,
        }
    }
}

impl PhotoState {
    /// Source for every photo display target, if a photo was chosen.
    #[must_use]
    pub fn display_src(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.url.as_str())
    }
}

/// Configuration handed through to the background-removal library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalConfig {
    pub public_path: String,
}

impl Default for RemovalConfig {
    fn default() -> Self {
        Self { public_path: REMOVAL_PUBLIC_PATH.to_owned() }
    }
}

/// A user-selected image file.
#[async_trait(?Send)]
pub trait PhotoFile {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
    async fn read_bytes(&self) -> Result<Vec<u8>, CapabilityError>;
}

/// Opaque background-removal capability.
#[async_trait(?Send)]
pub trait BackgroundRemover<F: PhotoFile> {
    /// Remove the background and return a referenceable URL for the result.
    async fn remove_background(&self, file: &F, config: &RemovalConfig) -> Result<String, CapabilityError>;

    /// Release a URL previously returned by [`Self::remove_background`].
    fn revoke_object_url(&self, url: &str);
}

/// Terminal result of one upload event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoOutcome {
    NoFile,
    Removed,
    Fallback,
    /// Removal failed and the original could not be read either; the
    /// previous photo stays in place.
    Unreadable(CapabilityError),
}

/// Embeddable `data:` URL for raw file bytes.
#[must_use]
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() { "application/octet-stream" } else { mime_type };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// `(template value, src)` for every photo display target.
#[must_use]
pub fn reconcile_photo<'s>(state: &'s PosterState, registry: &FieldRegistry) -> Vec<(&'static str, Option<&'s str>)> {
    let src = state.photo.display_src();
    registry.photo_targets().iter().map(|template| (*template, src)).collect()
}

/// Handle one file-input change event.
pub async fn run_photo_upload<H, F, R>(host: &H, remover: &R, config: &RemovalConfig, file: Option<F>) -> PhotoOutcome
where
    H: PosterHost,
    F: PhotoFile,
    R: BackgroundRemover<F>,
{
    let Some(file) = file else {
        host.update(|s| s.photo.status = STATUS_NO_FILE.to_owned());
        return PhotoOutcome::NoFile;
    };

    let name = file.name();
    let _busy = UploadBusy::enter(host);

    match remover.remove_background(&file, config).await {
        Ok(url) => {
            publish(host, PhotoAsset { url, kind: PhotoAssetKind::BackgroundRemoved }, |old| {
                remover.revoke_object_url(old);
            });
            host.update(|s| {
                s.photo.status = format!("{name}{STATUS_SUFFIX_REMOVED}");
                s.photo.phase = PhotoPhase::Ready;
            });
            PhotoOutcome::Removed
        }
        Err(err) => {
            log::warn!("background removal failed for {name}, using original: {err}");
            host.update(|s| s.photo.status = format!("{name}{STATUS_SUFFIX_FALLBACK}"));
            match file.read_bytes().await {
                Ok(bytes) => {
                    let url = data_url(&file.mime_type(), &bytes);
                    publish(host, PhotoAsset { url, kind: PhotoAssetKind::Original }, |old| {
                        remover.revoke_object_url(old);
                    });
                    host.update(|s| s.photo.phase = PhotoPhase::FallbackReady);
                    PhotoOutcome::Fallback
                }
                Err(read_err) => {
                    log::error!("could not read {name} for fallback: {read_err}");
                    PhotoOutcome::Unreadable(read_err)
                }
            }
        }
    }
}

/// Make `asset` current, revoking a superseded object URL.
fn publish<H: PosterHost>(host: &H, asset: PhotoAsset, revoke: impl FnOnce(&str)) {
    let superseded = host.read(|s| {
        s.photo
            .asset
            .as_ref()
            .filter(|prev| prev.kind == PhotoAssetKind::BackgroundRemoved && prev.url != asset.url)
            .map(|prev| prev.url.clone())
    });
    if let Some(url) = superseded {
        revoke(&url);
    }
    host.update(|s| s.photo.asset = Some(asset));
}
