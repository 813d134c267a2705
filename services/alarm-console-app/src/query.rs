//! Query cache and the alarm list query built on it
//!
//! [`QueryCache`] owns one entry per parameter set and decides, for each
//! request, whether the network needs to be hit at all. It also keeps track
//! of which parameter set was requested last so that a slow response for an
//! older parameter set can never replace what the page is showing.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use crate::api::AlarmListResponse;
use crate::client::AlarmApiClient;
use crate::params::ListParams;
use crate::ApiError;

/// How long a successful result counts as fresh
pub const DEFAULT_STALE_TIME_SECS: i64 = 10;

/// How long an unused entry is kept before eviction
pub const DEFAULT_GC_TIME_SECS: i64 = 300;

/// Observable status of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data yet and no error
    Loading,
    /// The last fetch for the current parameters failed
    Error,
    /// Data present, possibly stale while a refetch runs
    Success,
}

/// What a consumer of the cache gets to see
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<V> {
    pub data: Option<V>,
    pub error: Option<ApiError>,
    pub is_fetching: bool,
}

impl<V> Default for QueryState<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_fetching: false,
        }
    }
}

impl<V> QueryState<V> {
    pub fn status(&self) -> QueryStatus {
        if self.error.is_some() {
            QueryStatus::Error
        } else if self.data.is_some() {
            QueryStatus::Success
        } else {
            QueryStatus::Loading
        }
    }
}

/// One cached parameter set
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub data: Option<V>,
    pub error: Option<ApiError>,
    pub updated_at: Option<DateTime<Utc>>,
    in_flight: Option<u64>,
    invalidated: bool,
}

impl<V> Default for CacheEntry<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            in_flight: None,
            invalidated: false,
        }
    }
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: DateTime<Utc>, stale_time: TimeDelta) -> bool {
        match (&self.data, self.updated_at) {
            (Some(_), Some(at)) => !self.invalidated && self.error.is_none() && now - at < stale_time,
            _ => false,
        }
    }
}

/// Handle for a fetch the caller has to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    id: u64,
}

/// Outcome of [`QueryCache::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin<K> {
    /// Cached data is fresh, nothing to fetch
    Fresh,
    /// An identical request is already in flight
    Pending,
    /// The caller must fetch and report back with [`QueryCache::complete`]
    Fetch(Ticket<K>),
}

/// Cache keyed by parameter set with stale-while-revalidate semantics
#[derive(Debug)]
pub struct QueryCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    current: Option<K>,
    shown: Option<V>,
    next_ticket: u64,
    stale_time: TimeDelta,
    gc_time: TimeDelta,
}

impl<K, V> Default for QueryCache<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new(
            TimeDelta::seconds(DEFAULT_STALE_TIME_SECS),
            TimeDelta::seconds(DEFAULT_GC_TIME_SECS),
        )
    }
}

impl<K, V> QueryCache<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    pub fn new(stale_time: TimeDelta, gc_time: TimeDelta) -> Self {
        Self {
            entries: HashMap::new(),
            current: None,
            shown: None,
            next_ticket: 0,
            stale_time,
            gc_time,
        }
    }

    /// Make `key` the current parameter set and decide whether to fetch.
    ///
    /// Cached data for `key`, fresh or stale, becomes visible right away.
    /// Without cached data the previously shown data stays visible until
    /// the fetch completes.
    pub fn begin(&mut self, key: K, now: DateTime<Utc>) -> Begin<K> {
        self.evict_expired(now);
        self.current = Some(key.clone());

        let stale_time = self.stale_time;
        let entry = self.entries.entry(key.clone()).or_default();
        if let Some(data) = &entry.data {
            self.shown = Some(data.clone());
        }
        if entry.in_flight.is_some() {
            return Begin::Pending;
        }
        if entry.is_fresh(now, stale_time) {
            return Begin::Fresh;
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        entry.in_flight = Some(id);
        Begin::Fetch(Ticket { key, id })
    }

    /// Record the result of the fetch behind `ticket`.
    ///
    /// Returns true when the result belongs to the current parameter set
    /// and is now what the consumer sees. Results for superseded parameter
    /// sets are cached but never shown.
    pub fn complete(
        &mut self,
        ticket: Ticket<K>,
        result: Result<V, ApiError>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            return false;
        };
        if entry.in_flight != Some(ticket.id) {
            return false;
        }
        entry.in_flight = None;

        let is_current = self.current.as_ref() == Some(&ticket.key);
        match result {
            Ok(data) => {
                if is_current {
                    self.shown = Some(data.clone());
                }
                entry.data = Some(data);
                entry.error = None;
                entry.updated_at = Some(now);
                entry.invalidated = false;
            }
            Err(e) => {
                entry.error = Some(e);
            }
        }
        is_current
    }

    /// Mark `key` stale so the next [`begin`](Self::begin) refetches it
    pub fn invalidate(&mut self, key: &K) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.invalidated = true;
        }
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    pub fn entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The state of the current parameter set as the consumer sees it
    pub fn snapshot(&self) -> QueryState<V> {
        let entry = self.current.as_ref().and_then(|k| self.entries.get(k));
        QueryState {
            data: self.shown.clone(),
            error: entry.and_then(|e| e.error.clone()),
            is_fetching: entry.is_some_and(|e| e.in_flight.is_some()),
        }
    }

    fn evict_expired(&mut self, now: DateTime<Utc>) {
        let gc_time = self.gc_time;
        let current = self.current.clone();
        self.entries.retain(|key, entry| {
            if entry.in_flight.is_some() || current.as_ref() == Some(key) {
                return true;
            }
            entry.updated_at.is_some_and(|at| now - at < gc_time)
        });
    }
}

/// The alarm list query: a [`QueryCache`] in front of [`AlarmApiClient::list_alarms`]
#[derive(Debug)]
pub struct AlarmsQuery {
    client: AlarmApiClient,
    cache: RwLock<QueryCache<ListParams, AlarmListResponse>>,
}

impl AlarmsQuery {
    pub fn new(client: AlarmApiClient) -> Self {
        Self::with_cache(client, QueryCache::default())
    }

    pub fn with_cache(
        client: AlarmApiClient,
        cache: QueryCache<ListParams, AlarmListResponse>,
    ) -> Self {
        Self {
            client,
            cache: RwLock::new(cache),
        }
    }

    /// Load `params`, reporting state changes through `publish`.
    ///
    /// `publish` is called once the request has been registered (so the
    /// consumer sees the loading or stale state) and again when this call's
    /// fetch finishes. A call that finds the data fresh, or an identical
    /// request in flight, publishes only once.
    pub async fn load<F>(&self, params: ListParams, publish: F)
    where
        F: Fn(QueryState<AlarmListResponse>),
    {
        let (begin, state) = {
            let mut cache = self.cache.write().await;
            let begin = cache.begin(params.clone(), Utc::now());
            (begin, cache.snapshot())
        };
        publish(state);

        let Begin::Fetch(ticket) = begin else {
            tracing::debug!("Alarm query served from cache: {:?}", params);
            return;
        };

        let result = self.client.list_alarms(&params).await;
        if let Err(e) = &result {
            tracing::warn!("Alarm query failed: {}", e);
        }

        let state = {
            let mut cache = self.cache.write().await;
            if !cache.complete(ticket, result, Utc::now()) {
                tracing::debug!("Discarding response for superseded params {:?}", params);
            }
            cache.snapshot()
        };
        publish(state);
    }

    /// Refetch the current parameter set even if its data is fresh
    pub async fn refresh<F>(&self, publish: F)
    where
        F: Fn(QueryState<AlarmListResponse>),
    {
        let current = {
            let mut cache = self.cache.write().await;
            let current = cache.current().cloned();
            if let Some(key) = &current {
                cache.invalidate(key);
            }
            current
        };
        if let Some(params) = current {
            self.load(params, publish).await;
        }
    }

    pub async fn snapshot(&self) -> QueryState<AlarmListResponse> {
        self.cache.read().await.snapshot()
    }
}
