//! Poster template previews.
//!
//! ARCHITECTURE
//! ============
//! Each template renders one span per display target from the
//! `FieldRegistry`, so a field's mirrors are exactly the registry's targets.
//! Only the active template carries `active-poster`; styling hides the rest.

use leptos::html::Div;
use leptos::prelude::*;
use poster::field::{DisplayTarget, FieldRegistry};
use poster::state::PosterState;
use poster::template::TemplateSpec;

use crate::state::templates::TemplateRefs;

/// All templates, stacked; visibility follows the active selection.
#[component]
pub fn PosterGallery(registry: FieldRegistry) -> impl IntoView {
    let refs = expect_context::<TemplateRefs>();

    refs.entries()
        .iter()
        .map(|(spec, node_ref)| {
            let targets = registry.targets_in(spec.value);
            view! { <PosterTemplate spec=*spec handle=*node_ref targets/> }
        })
        .collect::<Vec<_>>()
}

#[component]
fn PosterTemplate(spec: TemplateSpec, handle: NodeRef<Div>, targets: Vec<DisplayTarget>) -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let value = spec.value;
    let is_active = move || poster.with(|s| s.templates.is_active(value));

    let slots = targets
        .into_iter()
        .map(|target| view! { <FieldText target/> })
        .collect::<Vec<_>>();

    view! {
        <div
            id=spec.dom_id()
            class=format!("poster-canvas poster-canvas--{value}")
            class:active-poster=is_active
            node_ref=handle
        >
            {spec.shows_photo.then(|| view! { <PhotoFrame/> })}
            <div class="poster-canvas__body">{slots}</div>
        </div>
    }
}

/// One live mirror of a field.
#[component]
fn FieldText(target: DisplayTarget) -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let field = target.field;
    let text = move || poster.with(|s| s.display_value(field));

    view! { <span class=format!("{} {}", target.class_name(), target.role.class_name())>{text}</span> }
}

/// Photo display target; every frame shows the current photo asset.
#[component]
fn PhotoFrame() -> impl IntoView {
    let poster = expect_context::<RwSignal<PosterState>>();
    let src = move || poster.with(|s| s.photo.display_src().map(str::to_owned));
    let empty = move || src().is_none();

    view! {
        <div class="poster-canvas__photo">
            <img class="out-photo" class:out-photo--empty=empty src=src alt="Profile photo" crossorigin="anonymous"/>
        </div>
    }
}
