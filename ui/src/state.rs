use leptos::prelude::*;

use crate::outcome::Outcome;

#[derive(Clone, Copy)]
pub struct AnalystState {
    /// `None` until the first submission; the response box stays hidden.
    pub outcome: RwSignal<Option<Outcome>>,
}

impl AnalystState {
    pub fn new() -> Self {
        Self {
            outcome: RwSignal::new(None),
        }
    }

    pub fn start_loading(&self) {
        self.outcome.set(Some(Outcome::Loading));
    }

    pub fn finish(&self, outcome: Outcome) {
        self.outcome.set(Some(outcome));
    }

    pub fn is_visible(&self) -> bool {
        self.outcome.with(Option::is_some)
    }
}

impl Default for AnalystState {
    fn default() -> Self {
        Self::new()
    }
}
