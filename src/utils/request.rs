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

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::error::VinylDnsError;

/// HTTP transport used by a [`Client`](crate::Client) to reach the API.
#[async_trait]
pub trait DnsHttpClient: Debug + Send + Sync {
    /// Sends one request and decodes the JSON response.
    ///
    /// An empty response body decodes to [`Value::Null`].
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Value, VinylDnsError>;
}

/// Transport backed by a plain `reqwest::Client`.
///
/// No timeout or pool tuning is applied.
#[derive(Debug, Clone)]
pub struct DefaultDnsClient {
    inner: Client,
}

impl DefaultDnsClient {
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(inner: Client) -> Self {
        Self { inner }
    }
}

impl Default for DefaultDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsHttpClient for DefaultDnsClient {
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Value, VinylDnsError> {
        let mut req = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(VinylDnsError::Status { status, body: text });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Returns `transport`, or a fresh [`DefaultDnsClient`] when it is absent.
pub(crate) fn transport_or_default(
    transport: Option<Arc<dyn DnsHttpClient>>,
) -> Arc<dyn DnsHttpClient> {
    transport.unwrap_or_else(|| {
        debug!("no HTTP transport configured, using default");
        Arc::new(DefaultDnsClient::new())
    })
}
