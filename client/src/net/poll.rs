//! Keyed fetch-and-poll hook backing every data view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `use_polling` with a reactive key (an id from the route, a
//! filter value, or `()`), an optional refresh interval, and one of the
//! `net::api` fetchers. The hook owns a `Remote<T>` signal the view renders
//! from and exposes `refresh()` for use after user actions.
//!
//! DESIGN
//! ======
//! - Fetches on mount and whenever the key changes; a key change drops the
//!   old data and shows the loading state again. A `None` key is idle.
//! - A background loop re-fetches every `interval` until the owning view is
//!   cleaned up (shared `AtomicBool`, same pattern as the page-level pollers).
//! - Responses for a key that is no longer current are discarded; otherwise
//!   the most recent response to arrive wins.
//!
//! Effects and tasks only run in the browser, so on the server the view
//! renders its loading state and hydration picks up from there.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use models::ApiError;

use crate::state::remote::Remote;

pub const OVERVIEW_INTERVAL: Duration = Duration::from_secs(30);
pub const NODES_INTERVAL: Duration = Duration::from_secs(30);
pub const VMS_INTERVAL: Duration = Duration::from_secs(10);
pub const VM_METRICS_INTERVAL: Duration = Duration::from_secs(30);
pub const SERIES_INTERVAL: Duration = Duration::from_secs(30);
pub const ALERTS_INTERVAL: Duration = Duration::from_secs(30);

/// What a key update means for the current snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyTransition {
    /// No key: nothing to fetch.
    Idle,
    /// First run or a different key: discard data and fetch.
    Reset,
    /// Same key re-triggered (refresh): fetch, keep data.
    Refetch,
}

/// Classify a key update. `previous` is `None` on the first run.
pub fn key_transition<K: PartialEq>(previous: Option<&Option<K>>, current: &Option<K>) -> KeyTransition {
    match (previous, current) {
        (_, None) => KeyTransition::Idle,
        (Some(prev), Some(_)) if prev == current => KeyTransition::Refetch,
        _ => KeyTransition::Reset,
    }
}

/// Handle returned by `use_polling`.
pub struct Poll<T: Send + Sync + 'static> {
    pub state: RwSignal<Remote<T>>,
    trigger: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for Poll<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Poll<T> {}

impl<T: Send + Sync + 'static> Poll<T> {
    /// Re-fetch immediately, keeping current data on screen.
    pub fn refresh(&self) {
        self.trigger.update(|n| *n = n.wrapping_add(1));
    }
}

/// Fetch `fetch(key)` on mount, on key change, on `refresh()`, and every `interval`.
pub fn use_polling<K, T, F, Fut>(
    key: impl Fn() -> Option<K> + Send + Sync + 'static,
    interval: Option<Duration>,
    fetch: F,
) -> Poll<T>
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = RwSignal::new(Remote::<T>::loading());
    let trigger = RwSignal::new(0_u64);
    let key = Memo::new(move |_| key());

    let fetch_on_change = fetch.clone();
    Effect::new(move |previous: Option<Option<K>>| {
        trigger.track();
        let current = key.get();
        match key_transition(previous.as_ref(), &current) {
            KeyTransition::Idle => state.set(Remote::idle()),
            KeyTransition::Reset => state.set(Remote::loading()),
            KeyTransition::Refetch => state.update(|s| s.loading = true),
        }
        if let Some(k) = current.clone() {
            spawn_fetch(&fetch_on_change, k, key, state);
        }
        current
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(interval) = interval {
            let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            let poll_alive_task = poll_alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(interval).await;
                    if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    if let Some(Some(k)) = key.try_get_untracked() {
                        spawn_fetch(&fetch, k, key, state);
                    }
                }
            });
            on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (interval, fetch);

    Poll { state, trigger }
}

#[cfg(feature = "hydrate")]
fn spawn_fetch<K, T, F, Fut>(fetch: &F, k: K, key: Memo<Option<K>>, state: RwSignal<Remote<T>>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let request = fetch(k.clone());
    leptos::task::spawn_local(async move {
        let result = request.await;
        if key.try_get_untracked().flatten().as_ref() != Some(&k) {
            return;
        }
        if let Err(err) = &result {
            leptos::logging::warn!("fetch failed: {} ({})", err, err.code);
        }
        let _ = state.try_update(|s| s.apply(result));
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_fetch<K, T, F, Fut>(_fetch: &F, _k: K, _key: Memo<Option<K>>, _state: RwSignal<Remote<T>>)
where
    K: Clone + PartialEq + Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
}
