//! Current Analysis Slot
//!
//! Holds the most recent check response for display. Writes are not
//! sequenced: whichever response arrives last is what the page shows.

use backend::models::CheckResponse;
use platform::observable::{Observable, Subscription};

#[derive(Debug, Clone)]
pub struct CurrentAnalysis {
    slot: Observable<Option<CheckResponse>>,
}

impl CurrentAnalysis {
    pub fn new() -> Self {
        Self {
            slot: Observable::new(None),
        }
    }

    pub fn get(&self) -> Option<CheckResponse> {
        self.slot.get()
    }

    pub fn set(&self, response: CheckResponse) {
        tracing::debug!(check_id = %response.id, "Current analysis replaced");
        self.slot.set(Some(response));
    }

    pub fn clear(&self) {
        self.slot.set(None);
    }

    pub fn subscribe(&self) -> Subscription<Option<CheckResponse>> {
        self.slot.subscribe()
    }
}

impl Default for CurrentAnalysis {
    fn default() -> Self {
        Self::new()
    }
}
