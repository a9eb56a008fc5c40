//! Single-request execution.
//!
//! `Executor` sends one request for a (URL, method) pair through a pooled
//! client and reports the status code and body length. It never looks at the
//! body beyond counting its bytes.

mod request;


use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, trace};
use reqwest::Method;

use crate::error_handling::ProbeError;
use crate::models::{ProbeResponse, Target};
use crate::pool::ClientPool;

pub use request::{parse_header_line, RequestHeaders};

/// Something that can probe a target.
///
/// The dispatcher is written against this trait so the network layer can be
/// replaced in tests.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes `target`, giving up after `timeout` if one is set.
    async fn probe(
        &self,
        target: &Target,
        timeout: Option<Duration>,
    ) -> Result<ProbeResponse, ProbeError>;
}

/// Executes probes over HTTP using a shared client pool.
pub struct Executor {
    pool: Arc<ClientPool>,
    headers: RequestHeaders,
}

impl Executor {
    /// Creates an executor that sends `headers` with every request.
    pub fn new(pool: Arc<ClientPool>, headers: RequestHeaders) -> Self {
        Self { pool, headers }
    }

    /// The pool clients are drawn from.
    pub fn pool(&self) -> &Arc<ClientPool> {
        &self.pool
    }

    /// Sends one request and measures the response.
    ///
    /// The pooled client is returned on every path, since the handle is a
    /// guard that lives only for the duration of this call.
    ///
    /// # Errors
    ///
    /// - `ProbeError::Client` if no client could be built
    /// - `ProbeError::InvalidMethod` / `ProbeError::InvalidUrl` if the request
    ///   cannot be constructed
    /// - `ProbeError::Transport` for DNS, connect, TLS and timeout failures
    ///
    /// A body that fails mid-read is not an error: the status code is
    /// returned with a length of 0.
    pub async fn execute(
        &self,
        target: &Target,
        timeout: Option<Duration>,
    ) -> Result<ProbeResponse, ProbeError> {
        let client = self.pool.acquire(timeout).map_err(ProbeError::Client)?;

        let method = Method::from_bytes(target.method.as_bytes())
            .map_err(|_| ProbeError::InvalidMethod(target.method.clone()))?;
        let url = url::Url::parse(&target.host).map_err(|source| ProbeError::InvalidUrl {
            url: target.host.clone(),
            source,
        })?;

        trace!("{} {}", target.method, target.host);
        let response = client
            .request(method, url)
            .headers(self.headers.header_map().clone())
            .send()
            .await
            .map_err(ProbeError::Transport)?;

        let status = response.status().as_u16();
        let length = drain_body(response).await;
        Ok(ProbeResponse { status, length })
    }
}

#[async_trait]
impl Prober for Executor {
    async fn probe(
        &self,
        target: &Target,
        timeout: Option<Duration>,
    ) -> Result<ProbeResponse, ProbeError> {
        self.execute(target, timeout).await
    }
}

/// Reads the body to the end and returns its size in bytes.
///
/// Chunks are counted and discarded rather than buffered. Reading to the end
/// lets the connection go back to the keep-alive pool. Returns 0 if the body
/// cannot be read completely.
async fn drain_body(mut response: reqwest::Response) -> usize {
    let mut length = 0usize;
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => length += chunk.len(),
            Ok(None) => return length,
            Err(e) => {
                debug!("Body read failed for {}: {}", response.url(), e);
                return 0;
            }
        }
    }
}
