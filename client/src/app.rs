//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use poster::state::PosterState;

use crate::pages::studio::StudioPage;

/// Global `html2canvas` build loaded before hydration.
const HTML2CANVAS_SRC: &str = "https://cdn.jsdelivr.net/npm/html2canvas@1.4.1/dist/html2canvas.min.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=HTML2CANVAS_SRC></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page's single [`PosterState`] signal to every component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let poster = RwSignal::new(PosterState::new());
    provide_context(poster);

    view! {
        <Stylesheet id="leptos" href="/pkg/poster-studio.css"/>
        <Title text="Poster Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudioPage/>
            </Routes>
        </Router>
    }
}
