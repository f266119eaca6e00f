// Copyright 2023 vinyldns-rs authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Client configuration and the `VINYLDNS_*` environment variables.

use std::sync::Arc;

use securefmt::Debug;
use tracing::debug;

use crate::utils::env::{EnvSource, ProcessEnv};
use crate::utils::request::{DefaultDnsClient, DnsHttpClient};
use crate::{CLIENT_NAME, VERSION};

/// Access key variable.
pub const ENV_ACCESS_KEY: &str = "VINYLDNS_ACCESS_KEY";
/// Secret key variable.
pub const ENV_SECRET_KEY: &str = "VINYLDNS_SECRET_KEY";
/// Base URL variable.
pub const ENV_HOST: &str = "VINYLDNS_HOST";
/// User agent override variable.
pub const ENV_USER_AGENT: &str = "VINYLDNS_USER_AGENT";
/// Request logging switch.
pub const ENV_LOG: &str = "VINYLDNS_LOG";

/// Settings a [`Client`](crate::Client) is built from.
///
/// Any field may be left empty. Nothing is validated here; a bad host or
/// missing credentials surface on the first request.
#[derive(Debug, Clone, Default)]
pub struct ClientConfiguration {
    /// VinylDNS access key.
    pub access_key: String,
    /// VinylDNS secret key.
    #[sensitive]
    pub secret_key: String,
    /// Base URL of the API, e.g. `https://vinyldns.example.com`.
    pub host: String,
    /// User agent header. Empty means [`default_user_agent`].
    pub user_agent: String,
    /// HTTP transport. `None` means a [`DefaultDnsClient`].
    pub http_client: Option<Arc<dyn DnsHttpClient>>,
}

impl ClientConfiguration {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_source(&ProcessEnv)
    }

    /// Builds a configuration from `env`.
    ///
    /// Credentials and host are taken verbatim, empty when unset. The user
    /// agent falls back to [`default_user_agent`] when unset or empty. A fresh
    /// default transport is always attached.
    pub fn from_env_source(env: &impl EnvSource) -> Self {
        let user_agent = env.get_non_empty(ENV_USER_AGENT).unwrap_or_else(|| {
            debug!("{ENV_USER_AGENT} not set, using default user agent");
            default_user_agent()
        });

        Self {
            access_key: env.get_or_empty(ENV_ACCESS_KEY),
            secret_key: env.get_or_empty(ENV_SECRET_KEY),
            host: env.get_or_empty(ENV_HOST),
            user_agent,
            http_client: Some(Arc::new(DefaultDnsClient::new())),
        }
    }
}

/// Same as [`ClientConfiguration::from_env`].
pub fn new_config_from_env() -> ClientConfiguration {
    ClientConfiguration::from_env()
}

/// `go-vinyldns/<VERSION>`
pub fn default_user_agent() -> String {
    format!("{CLIENT_NAME}/{VERSION}")
}

/// Whether request and response logging is switched on via `VINYLDNS_LOG`.
pub fn log_requests() -> bool {
    log_requests_from(&ProcessEnv)
}

/// Whether `env` sets `VINYLDNS_LOG` to a non-empty value.
pub fn log_requests_from(env: &impl EnvSource) -> bool {
    env.get_non_empty(ENV_LOG).is_some()
}
