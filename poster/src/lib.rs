//! Browser-free core of the poster studio.
//!
//! Every rule the page follows lives here: which fields exist and where they
//! are mirrored, how a field's display text is derived, which template is
//! active, and the photo and export pipelines with their busy states. The
//! `client` crate renders [`state::PosterState`] with Leptos and supplies
//! browser implementations of the capability traits (background removal,
//! rasterization, download, alert).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Field identifiers, specs, and the field-to-target registry |
//! | [`binding`] | Effective display values and per-field reconciliation |
//! | [`template`] | Template declarations and exclusive selection |
//! | [`photo`] | Photo upload state machine and fallback encoding |
//! | [`export`] | Render options, capture overrides, filenames, export run |
//! | [`busy`] | Scoped busy-state guards for upload and export |
//! | [`tabs`] | Cosmetic navigation tab highlighting |
//! | [`state`] | Aggregate [`state::PosterState`] and the [`state::PosterHost`] seam |
//! | [`error`] | Capability failure type |
//! | [`consts`] | Shared literal constants |

pub mod binding;
pub mod busy;
pub mod consts;
pub mod error;
pub mod export;
pub mod field;
pub mod photo;
pub mod state;
pub mod tabs;
pub mod template;
