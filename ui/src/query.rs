//! Query-style data hook: a `use_resource` wrapper with a fixed retry
//! count and a staleness window.
//!
//! Pages call a service through [`use_query`], render from
//! [`QueryState`], and call [`Query::refetch`] after any mutation — the
//! client never derives a source of truth, it refetches.

use std::future::Future;

use dioxus::prelude::*;

use api::ApiError;

use crate::time::{now_ms, sleep_ms};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Extra attempts after a failed fetch. 401 is never retried.
    pub retries: u32,
    pub retry_delay_ms: u32,
    /// Window within which [`Query::revalidate`] is a no-op.
    pub stale_ms: f64,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retries: 2,
            retry_delay_ms: 500,
            stale_ms: 30_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

pub struct Query<T: 'static> {
    state: Signal<QueryState<T>>,
    version: Signal<u32>,
    force: Signal<bool>,
}

impl<T: 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Query<T> {}

impl<T: Clone + 'static> Query<T> {
    pub fn data(&self) -> Option<T> {
        self.state.read().data.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.read().error.clone()
    }

    /// Fetch again unconditionally. Use after a mutation.
    pub fn refetch(&mut self) {
        self.force.set(true);
        self.version += 1;
    }

    /// Fetch again unless the current data is still within the staleness
    /// window.
    pub fn revalidate(&mut self) {
        self.version += 1;
    }
}

pub fn use_query<T, F, Fut>(fetch: F) -> Query<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    use_query_with(QueryOptions::default(), fetch)
}

pub fn use_query_with<T, F, Fut>(options: QueryOptions, fetch: F) -> Query<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut state = use_signal(QueryState::<T>::default);
    let version = use_signal(|| 0u32);
    let mut force = use_signal(|| false);
    let mut fetched_at = use_signal(|| None::<f64>);

    let _ = use_resource(move || {
        let fetch = fetch.clone();
        async move {
            // Subscribe to explicit (re)fetch requests only.
            let _ = version();

            let forced = *force.peek();
            if forced {
                force.set(false);
            } else if let Some(at) = *fetched_at.peek() {
                let fresh = now_ms() - at < options.stale_ms;
                if fresh && state.peek().data.is_some() {
                    return;
                }
            }

            state.write().loading = true;
            let mut attempt = 0u32;
            loop {
                match fetch().await {
                    Ok(data) => {
                        fetched_at.set(Some(now_ms()));
                        state.set(QueryState {
                            data: Some(data),
                            loading: false,
                            error: None,
                        });
                        return;
                    }
                    Err(ApiError::Unauthorized) => {
                        state.set(QueryState {
                            data: None,
                            loading: false,
                            error: Some(ApiError::Unauthorized),
                        });
                        return;
                    }
                    Err(err) if attempt < options.retries => {
                        attempt += 1;
                        tracing::debug!("query attempt {attempt} failed, retrying: {err}");
                        sleep_ms(options.retry_delay_ms).await;
                    }
                    Err(err) => {
                        tracing::error!("query failed: {err}");
                        let mut s = state.write();
                        s.loading = false;
                        s.error = Some(err);
                        return;
                    }
                }
            }
        }
    });

    Query {
        state,
        version,
        force,
    }
}
