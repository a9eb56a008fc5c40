//! Reusable HTTP client pool.
//!
//! One `ClientPool` is built per run and shared by every worker. Each worker
//! checks a client out for a single request and the guard puts it back when
//! dropped, so a client is returned on every exit path, including early
//! returns and panics.
//!
//! Acquisition never waits. An empty pool builds a fresh client; the number of
//! live clients is bounded indirectly by the number of concurrent callers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::debug;

use crate::config::{MAX_IDLE_CLIENTS, MAX_IDLE_CONNS_PER_HOST};
use crate::initialization::init_client;

/// Transport configuration shared by every client in a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    /// Idle clients retained for reuse; clients released beyond this are dropped
    pub max_idle_clients: usize,
    /// Idle keep-alive connections each client holds per host
    pub max_idle_conns_per_host: usize,
    /// Verify TLS certificates. Off by default: targets are often self-signed
    /// or misconfigured, and the status line is what is being measured.
    pub verify_tls: bool,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            max_idle_clients: MAX_IDLE_CLIENTS,
            max_idle_conns_per_host: MAX_IDLE_CONNS_PER_HOST,
            verify_tls: false,
        }
    }
}

/// Thread-safe pool of pre-configured HTTP clients.
pub struct ClientPool {
    settings: TransportSettings,
    idle: Mutex<Vec<reqwest::Client>>,
    created: AtomicUsize,
}

impl ClientPool {
    /// Creates an empty pool. Clients are built lazily on first acquisition.
    pub fn new(settings: TransportSettings) -> Self {
        Self {
            settings,
            idle: Mutex::new(Vec::new()),
            created: AtomicUsize::new(0),
        }
    }

    /// Transport settings every client in this pool is built with.
    pub fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    /// Checks a client out of the pool, building one if none is idle.
    ///
    /// `timeout` is applied to every request sent through the returned
    /// handle; `None` leaves requests without a deadline. It is set on each
    /// acquisition, so idle clients are interchangeable between callers.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if a new client has to be built and the TLS
    /// backend fails to initialize.
    pub fn acquire(&self, timeout: Option<Duration>) -> Result<PooledClient<'_>, reqwest::Error> {
        let reused = self.lock_idle().pop();
        let client = match reused {
            Some(client) => client,
            None => {
                let client = init_client(&self.settings)?;
                let total = self.created.fetch_add(1, Ordering::Relaxed) + 1;
                debug!("Client pool grew to {} clients", total);
                client
            }
        };
        Ok(PooledClient {
            pool: self,
            client,
            timeout,
        })
    }

    /// Returns a client to the pool. Equivalent to dropping the handle.
    pub fn release(&self, handle: PooledClient<'_>) {
        debug_assert!(std::ptr::eq(handle.pool, self));
        drop(handle);
    }

    /// Number of clients currently idle in the pool.
    pub fn idle_count(&self) -> usize {
        self.lock_idle().len()
    }

    /// Number of clients built over the pool's lifetime.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    fn put_back(&self, client: reqwest::Client) {
        let mut idle = self.lock_idle();
        if idle.len() < self.settings.max_idle_clients {
            idle.push(client);
        }
    }

    // A panic while holding the lock cannot leave the Vec half-modified
    fn lock_idle(&self) -> MutexGuard<'_, Vec<reqwest::Client>> {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ClientPool {
    fn default() -> Self {
        Self::new(TransportSettings::default())
    }
}

/// A client checked out of a `ClientPool`.
///
/// Dropping the handle returns the client to its pool.
pub struct PooledClient<'a> {
    pool: &'a ClientPool,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl PooledClient<'_> {
    /// Starts a request that carries this handle's timeout, if any.
    pub fn request(&self, method: reqwest::Method, url: reqwest::Url) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, url);
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Timeout applied to requests made through this handle.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Drop for PooledClient<'_> {
    fn drop(&mut self) {
        // Clones share the underlying connection pool
        self.pool.put_back(self.client.clone());
    }
}
