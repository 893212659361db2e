//! Client-side state glue.
//!
//! DESIGN
//! ======
//! The poster model itself lives in the `poster` crate. This module only adapts
//! it to Leptos: a signal-backed [`host::SignalHost`] for the pipelines and the
//! per-template element handles the rasterizer captures.

pub mod host;
pub mod templates;
