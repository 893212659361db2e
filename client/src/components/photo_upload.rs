//! Profile photo picker with in-browser background removal.

use leptos::prelude::*;
use poster::state::PosterState;

/// File input plus its status line.
///
/// The input stays disabled while a photo is processed; the status shows
/// progress, then the file name with a success or fallback marker.
#[component]
pub fn PhotoUpload() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();

    let disabled = move || poster.with(|s| s.photo.upload_disabled);
    let status = move || poster.with(|s| s.photo.status.clone());

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use poster::photo::{RemovalConfig, run_photo_upload};
            use wasm_bindgen::JsCast;

            use crate::state::host::SignalHost;
            use crate::util::bg_removal::{BrowserFile, ImglyRemover};

            let file = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(BrowserFile);

            leptos::task::spawn_local(async move {
                let host = SignalHost::new(poster);
                let outcome = run_photo_upload(&host, &ImglyRemover, &RemovalConfig::default(), file).await;
                log::debug!("photo upload finished: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="photo-upload">
            <label class="photo-upload__button" for="photoUpload">
                "Choose Photo"
            </label>
            <input
                id="photoUpload"
                class="photo-upload__input"
                type="file"
                accept="image/*"
                disabled=disabled
                on:change=on_change
            />
            <span id="fileName" class="photo-upload__status">
                {status}
            </span>
        </div>
    }
}
