//! Route-level page components.

pub mod studio;
