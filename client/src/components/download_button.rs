//! Button exporting the active poster as a PNG download.

use leptos::prelude::*;
use poster::state::PosterState;

use crate::util::view::opacity_style;

/// Download button. Label, opacity, and disabled state all come from
/// `PosterState.export_button`, which the export pipeline marks busy.
#[component]
pub fn DownloadButton() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    #[cfg(feature = "hydrate")]
    let refs = expect_context::<crate::state::templates::TemplateRefs>();

    let label = move || poster.with(|s| s.export_button.label.clone());
    let opacity = move || poster.with(|s| opacity_style(s.export_button.opacity));
    let disabled = move || poster.with(|s| s.export_button.disabled);

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use poster::export::run_export;

            use crate::state::host::SignalHost;
            use crate::util::browser::{AnchorDownloader, WindowNotifier};
            use crate::util::rasterize::Html2Canvas;

            let rasterizer = Html2Canvas::new(refs.clone());
            leptos::task::spawn_local(async move {
                let host = SignalHost::new(poster);
                let outcome = run_export(&host, &rasterizer, &AnchorDownloader, &WindowNotifier).await;
                log::debug!("export finished: {outcome:?}");
            });
        }
    };

    view! {
        <button
            id="downloadBtn"
            class="btn btn--primary download-btn"
            style:opacity=opacity
            disabled=disabled
            on:click=on_click
        >
            {label}
        </button>
    }
}
