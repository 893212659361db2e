//! Top navigation tabs. Highlighting only; tabs do not navigate.

use leptos::prelude::*;
use poster::state::PosterState;

#[component]
pub fn NavBar() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let labels = poster.with_untracked(|s| s.tabs.labels().to_vec());

    let tabs = labels
        .into_iter()
        .enumerate()
        .map(|(idx, label)| {
            let is_active = move || poster.with(|s| s.tabs.is_active(idx));
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                poster.update(|s| s.tabs.activate(idx));
            };
            view! {
                <a href="#" class="nav-tab" class:active=is_active on:click=on_click>
                    {label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class="nav-bar">{tabs}</nav> }
}
