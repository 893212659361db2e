#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use leptos::prelude::*;
use poster::state::{PosterHost, PosterState};

/// [`PosterHost`] over the page's `RwSignal<PosterState>`.
///
/// Reads are untracked: pipelines run outside reactive scopes and must not
/// subscribe. Writes notify every view that renders from the signal.
#[derive(Clone, Copy)]
pub struct SignalHost(RwSignal<PosterState>);

impl SignalHost {
    pub fn new(signal: RwSignal<PosterState>) -> Self {
        Self(signal)
    }
}

impl PosterHost for SignalHost {
    fn read<R>(&self, f: impl FnOnce(&PosterState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut PosterState)) {
        self.0.update(f);
    }
}
