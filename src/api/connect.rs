// Daemon liveness probing and the connection handshake
//
// `is_running` turns any failed version probe into `false`; `connect` polls
// the probe until siad answers or the retry budget runs out, then hands back
// a `Siad` bound to the address.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use super::{ApiClient, RequestSpec};
use crate::error::{Error, Result};

/// Endpoint used as the liveness probe. Any successful reply counts.
pub const VERSION_ENDPOINT: &str = "/daemon/version";

/// Retry budget for `connect`. The default waits up to ten seconds, probing
/// every half second, which covers siad's normal startup time.
#[derive(Debug, Clone, Copy)]
pub struct ConnectPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for ConnectPolicy {
    fn default() -> Self {
        Self {
            attempts: 20,
            interval: Duration::from_millis(500),
        }
    }
}

async fn probe(client: &ApiClient) -> bool {
    match client.call(VERSION_ENDPOINT).await {
        Ok(_) => true,
        Err(err) => {
            debug!(address = client.address(), error = %err, "version probe failed");
            false
        }
    }
}

/// Whether siad is answering its API at `address`. Never errors; any
/// transport failure means "not running".
pub async fn is_running(address: &str) -> bool {
    probe(&ApiClient::new(address)).await
}

/// Wait for siad at `address` with the default retry budget.
pub async fn connect(address: &str) -> Result<Siad> {
    connect_with(address, ConnectPolicy::default()).await
}

/// Wait for siad at `address`, probing until it answers or `policy` is
/// exhausted. Fails with the [`Error::CouldNotConnect`] sentinel if the
/// daemon never becomes reachable.
pub async fn connect_with(address: &str, policy: ConnectPolicy) -> Result<Siad> {
    let client = ApiClient::new(address);
    for attempt in 0..policy.attempts {
        if probe(&client).await {
            info!(address, "connected to siad");
            return Ok(Siad { client });
        }
        debug!(address, attempt, "siad not reachable yet");
        if attempt + 1 < policy.attempts {
            tokio::time::sleep(policy.interval).await;
        }
    }
    Err(Error::CouldNotConnect)
}

/// Handle to a reachable daemon, bound to one address.
#[derive(Debug, Clone)]
pub struct Siad {
    client: ApiClient,
}

impl Siad {
    pub fn address(&self) -> &str {
        self.client.address()
    }

    /// Issue an API call against the bound address.
    pub async fn call(&self, spec: impl Into<RequestSpec>) -> Result<Value> {
        self.client.call(spec).await
    }

    /// Re-probe the bound address.
    pub async fn is_running(&self) -> bool {
        probe(&self.client).await
    }
}
