//! The poster studio: form on the left, live previews on the right.

use leptos::prelude::*;
use poster::field::FieldRegistry;
use poster::state::PosterState;

use crate::components::download_button::DownloadButton;
use crate::components::field_form::FieldForm;
use crate::components::nav_bar::NavBar;
use crate::components::photo_upload::PhotoUpload;
use crate::components::poster_gallery::PosterGallery;
use crate::components::template_picker::TemplatePicker;
use crate::state::templates::TemplateRefs;

/// Studio page.
///
/// Builds the field registry and the template element handles once on
/// mount; both live as long as the page.
#[component]
pub fn StudioPage() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let templates = poster.with_untracked(|s| s.templates.templates().to_vec());

    let registry = FieldRegistry::from_templates(&templates);
    provide_context(TemplateRefs::new(&templates));

    view! {
        <div class="studio-page">
            <header class="studio-header">
                <h1 class="studio-header__title">"Poster Studio"</h1>
                <NavBar/>
            </header>
            <main class="studio">
                <aside class="studio__form">
                    <TemplatePicker/>
                    <FieldForm/>
                    <PhotoUpload/>
                    <DownloadButton/>
                </aside>
                <section class="studio__preview">
                    <PosterGallery registry/>
                </section>
            </main>
        </div>
    }
}
