//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser bridges implement the `poster` capability traits and are compiled
//! only for the `hydrate` build. `view` holds pure formatting helpers usable
//! from both builds.

#[cfg(feature = "hydrate")]
pub mod bg_removal;
#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(feature = "hydrate")]
pub mod rasterize;
pub mod view;
