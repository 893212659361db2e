//! Radio group choosing which poster template is visible.

use leptos::prelude::*;
use poster::state::PosterState;

#[component]
pub fn TemplatePicker() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let templates = poster.with_untracked(|s| s.templates.templates().to_vec());

    let options = templates
        .into_iter()
        .map(|spec| {
            let value = spec.value;
            let is_active = move || poster.with(|s| s.templates.is_active(value));
            let on_change = move |ev: leptos::ev::Event| {
                let selected = event_target_value(&ev);
                poster.update(|s| {
                    if !s.select_template(&selected) {
                        leptos::logging::warn!("no template for option {selected}");
                    }
                });
            };
            view! {
                <label class="template-picker__option" class:template-picker__option--active=is_active>
                    <input type="radio" name="template" value=value prop:checked=is_active on:change=on_change/>
                    <span>{spec.label}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <fieldset class="template-picker">
            <legend>"Template"</legend>
            {options}
        </fieldset>
    }
}
