// siad-client - launch and API client wrapper for the Sia daemon
// Library exports

pub mod api;
pub mod error;
pub mod launch;
pub mod units;

pub use api::connect::{connect, connect_with, is_running, ConnectPolicy, Siad};
pub use api::{ApiClient, RequestSpec, SIA_AGENT};
pub use error::{Error, Result};
pub use launch::{launch, launch_with, FlagValue, LaunchConfig, ProcessSpawner, Spawner};
pub use units::{hastings_to_siacoins, siacoins_to_hastings, HASTINGS_PER_SIACOIN};
