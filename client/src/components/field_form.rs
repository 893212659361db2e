//! Text inputs for every poster field.

use leptos::prelude::*;
use poster::field::FIELDS;
use poster::state::PosterState;

/// One labelled input per field; each keystroke updates the poster state and
/// every template re-renders its mirrors of that field.
#[component]
pub fn FieldForm() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();

    let inputs = FIELDS
        .iter()
        .map(|spec| {
            let field = spec.id;
            let key = field.dom_key();
            view! {
                <label class="form-field" for=key>
                    <span class="form-field__label">{spec.label}</span>
                    <input
                        id=key
                        class="form-field__input"
                        type="text"
                        placeholder=spec.placeholder
                        prop:value=move || poster.with(|s| s.form.raw(field).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            poster.update(|s| s.set_field(field, value));
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="field-form">{inputs}</div> }
}
