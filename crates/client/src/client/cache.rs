//! Client-side query cache with in-flight deduplication.
//!
//! Purpose: Cache read query results in memory and collapse identical
//! concurrent fetches into a single backend request.
//! Responsibilities: Key results by canonical query string, apply per-query
//! TTL, invalidate after mutations, and expose hit/miss metrics.
//! Non-scope: Persistent storage, cross-process sharing, or background refresh.
//!
//! # Invariants
//! - Concurrent `get_or_fetch` calls for the same key run the fetch once; every
//!   waiter receives that fetch's outcome.
//! - Errors are never cached; the next call after a failure fetches again.
//! - TTL is enforced per entry, chosen by the query's [`FetchPolicy`].
//! - A disabled cache calls straight through and stores nothing.
//! - Dropping a waiter never cancels the fetch for the others.
//! - A fetch that overlaps an invalidation is returned to its callers but not
//!   kept, so a mutation is never followed by a pre-mutation read from cache.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;
use serde::Serialize;
use ticket_config::CacheConfig;
use ticket_config::constants::{
    ADVERTISED_TICKETS_RETRIES, DEFAULT_CACHE_SIZE, DEFAULT_CACHE_TTL_SECS,
};
use tracing::{debug, trace, warn};

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Cache key of the latest tickets query.
pub const LATEST_TICKETS_KEY: &str = "tickets/latest";

/// Cache key of the advertised tickets query.
pub const ADVERTISED_TICKETS_KEY: &str = "tickets/advertise/current";

/// Key prefix of single-ticket lookups, kept apart from the list keys.
pub const TICKET_BY_ID_KEY_PREFIX: &str = "tickets/id/";

/// Freshness and retry settings for one kind of query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Entry lifetime; `None` uses the cache's default TTL.
    pub ttl: Option<Duration>,
    /// Retries after the first attempt.
    pub retries: usize,
}

impl FetchPolicy {
    /// Ticket search: no retries.
    pub const TICKET_SEARCH: Self = Self::new(0);
    /// Latest tickets: no retries.
    pub const LATEST_TICKETS: Self = Self::new(0);
    /// Advertised tickets: retried twice.
    pub const ADVERTISED_TICKETS: Self = Self::new(ADVERTISED_TICKETS_RETRIES);

    pub const fn new(retries: usize) -> Self {
        Self { ttl: None, retries }
    }

    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

/// A cached query result with its own lifetime.
#[derive(Clone)]
struct CachedValue {
    value: Arc<dyn Any + Send + Sync>,
    ttl: Duration,
    cached_at: Instant,
    /// Invalidation generation observed before the fetch started.
    generation: u64,
}

/// Expires each entry after the TTL it was stored with.
struct PerEntryTtl;

impl Expiry<String, CachedValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entry_count: u64,
    pub enabled: bool,
}

/// In-memory query cache keyed by canonical query strings.
#[derive(Clone)]
pub struct QueryCache {
    inner: MokaCache<String, CachedValue>,
    default_ttl: Duration,
    enabled: bool,
    metrics: Option<MetricsCollector>,
    /// Bumped by every invalidation; shared between clones.
    generation: Arc<AtomicU64>,
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entry_count", &self.inner.entry_count())
            .field("default_ttl", &self.default_ttl)
            .field("enabled", &self.enabled)
            .field("generation", &self.generation.load(Ordering::Acquire))
            .finish()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE, Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl QueryCache {
    /// Create an enabled cache.
    pub fn new(capacity: u64, default_ttl: Duration) -> Self {
        let inner = MokaCache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .support_invalidation_closures()
            .build();

        Self {
            inner,
            default_ttl,
            enabled: true,
            metrics: None,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Create a cache that stores nothing and never deduplicates.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(1, Duration::ZERO)
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::new(config.capacity, config.ttl)
        } else {
            Self::disabled()
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Concurrent callers for the same key share one `fetch`. A failed fetch
    /// is reported to every waiter and leaves nothing cached.
    ///
    /// # Errors
    ///
    /// Returns the fetch's error. When other waiters still hold it, the error
    /// arrives as [`ClientError::Shared`].
    pub async fn get_or_fetch<T, F>(&self, key: &str, policy: FetchPolicy, fetch: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = Result<T>>,
    {
        if !self.enabled {
            return fetch.await;
        }

        let ttl = policy.ttl.unwrap_or(self.default_ttl);
        if ttl.is_zero() {
            trace!(key, "Zero TTL, bypassing cache");
            return fetch.await;
        }

        let generation = self.generation.load(Ordering::Acquire);
        let init = async {
            let value = fetch.await?;
            Ok::<_, ClientError>(CachedValue {
                value: Arc::new(value),
                ttl,
                cached_at: Instant::now(),
                generation,
            })
        };

        let entry = self
            .inner
            .entry_by_ref(key)
            .or_try_insert_with(init)
            .await
            .map_err(ClientError::from_shared)?;

        if entry.is_fresh() {
            trace!(key, "Cache miss");
            self.record_miss();
            if self.generation.load(Ordering::Acquire) != entry.value().generation {
                debug!(key, "Cache invalidated during fetch, not keeping result");
                self.inner.invalidate(key).await;
            }
        } else {
            let age_ms = entry.value().cached_at.elapsed().as_millis() as u64;
            trace!(key, age_ms, "Cache hit");
            self.record_hit();
        }

        match entry.into_value().value.downcast::<T>() {
            Ok(value) => Ok(T::clone(&value)),
            Err(_) => {
                warn!(key, "Cached value has an unexpected type, discarding entry");
                self.inner.invalidate(key).await;
                Err(ClientError::InvalidResponse(format!(
                    "cache entry '{key}' holds a different result type"
                )))
            }
        }
    }

    /// Cached value for `key`, if present and fresh.
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.enabled {
            return None;
        }
        let cached = self.inner.get(key).await?;
        cached.value.downcast::<T>().ok().map(|value| T::clone(&value))
    }

    /// Invalidate a single entry.
    pub async fn invalidate(&self, key: &str) {
        self.bump_generation();
        self.inner.invalidate(key).await;
        trace!(key, "Invalidated cache entry");
    }

    /// Invalidate every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        self.bump_generation();
        let prefix_owned = prefix.to_string();
        if let Err(e) = self
            .inner
            .invalidate_entries_if(move |key, _| key.starts_with(&prefix_owned))
        {
            warn!(prefix, error = %e, "Prefix invalidation unavailable, clearing cache");
            self.inner.invalidate_all();
            return;
        }
        debug!(prefix, "Invalidated cache entries by prefix");
    }

    /// Invalidate all entries.
    pub fn invalidate_all(&self) {
        self.bump_generation();
        self.inner.invalidate_all();
        debug!("Invalidated all cache entries");
    }

    /// Current statistics, after applying pending maintenance.
    pub async fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks().await;
        CacheStats {
            entry_count: self.inner.entry_count(),
            enabled: self.enabled,
        }
    }

    fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn record_hit(&self) {
        if let Some(m) = &self.metrics {
            m.record_cache_hit();
        }
    }

    fn record_miss(&self) {
        if let Some(m) = &self.metrics {
            m.record_cache_miss();
        }
    }
}
