//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the studio's form, template previews, and controls while
//! reading/writing the shared `RwSignal<PosterState>` from context.

pub mod download_button;
pub mod field_form;
pub mod nav_bar;
pub mod photo_upload;
pub mod poster_gallery;
pub mod template_picker;
