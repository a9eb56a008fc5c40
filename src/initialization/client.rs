//! HTTP client initialization.
//!
//! Builds the `reqwest::Client` instances handed out by the client pool.

use reqwest::ClientBuilder;

use crate::pool::TransportSettings;

/// Builds one HTTP client from the shared transport settings.
///
/// The client is configured with:
/// - Idle connection cap per host from `settings`
/// - Certificate verification off unless `settings.verify_tls` is set
/// - Default redirect policy (up to 10 hops)
///
/// No timeout is set here; the pool applies it per request so a client can
/// serve callers with different deadlines.
///
/// # Errors
///
/// Returns a `reqwest::Error` if the TLS backend cannot be initialized.
pub fn init_client(settings: &TransportSettings) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .pool_max_idle_per_host(settings.max_idle_conns_per_host)
        .danger_accept_invalid_certs(!settings.verify_tls)
        .build()
}
