//! Loading/data/error triple for one fetched resource.
//!
//! DESIGN
//! ======
//! Views render skeleton, failure text, or content from this alone. An error
//! keeps the last good payload so a transient backend hiccup does not blank a
//! table that was already on screen.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use models::ApiError;

/// Which of the four list renderings applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// Skeleton: first response still pending.
    Pending,
    /// Inline failure text: fetch failed and nothing is cached.
    Failed,
    /// Explicit empty-state message.
    Empty,
    Ready,
}

/// Snapshot of a polled resource.
#[derive(Clone, Debug, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::loading()
    }
}

impl<T> Remote<T> {
    /// Nothing received yet; a fetch is expected.
    pub fn loading() -> Self {
        Self { data: None, loading: true, error: None }
    }

    /// Nothing to fetch (no key).
    pub fn idle() -> Self {
        Self { data: None, loading: false, error: None }
    }

    /// Fold a fetch result into the snapshot.
    pub fn apply(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }

    /// True while the first response is still pending.
    pub fn is_pending(&self) -> bool {
        self.loading && self.data.is_none()
    }

    /// True when the last fetch failed and there is nothing cached to show.
    pub fn failed(&self) -> bool {
        self.error.is_some() && self.data.is_none()
    }

    /// True when the last fetch reported the requested id as absent.
    pub fn not_found(&self) -> bool {
        self.error.as_ref().is_some_and(ApiError::is_unknown_id)
    }
}

impl<T> Remote<Vec<T>> {
    /// Items or an empty slice while nothing has arrived.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn phase(&self) -> ListPhase {
        if self.is_pending() {
            ListPhase::Pending
        } else if self.failed() {
            ListPhase::Failed
        } else if self.items().is_empty() {
            ListPhase::Empty
        } else {
            ListPhase::Ready
        }
    }
}
