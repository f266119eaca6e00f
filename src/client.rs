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

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use securefmt::Debug;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::{ClientConfiguration, default_user_agent, log_requests};
use crate::error::VinylDnsError;
use crate::utils::request::{DnsHttpClient, transport_or_default};

/// Handle used to talk to a VinylDNS API.
///
/// Built once from a [`ClientConfiguration`]; the user agent is never empty
/// and a transport is always present. Clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    access_key: String,
    #[sensitive]
    secret_key: String,
    host: String,
    http_client: Arc<dyn DnsHttpClient>,
    user_agent: String,
}

impl Client {
    /// Normalizes `config` into a client.
    ///
    /// An empty user agent becomes [`default_user_agent`] and a missing
    /// transport becomes a [`DefaultDnsClient`](crate::DefaultDnsClient).
    /// A supplied transport is kept as is.
    pub fn new(config: ClientConfiguration) -> Self {
        let user_agent = if config.user_agent.is_empty() {
            debug!("empty user agent, using default");
            default_user_agent()
        } else {
            config.user_agent
        };

        Self {
            access_key: config.access_key,
            secret_key: config.secret_key,
            host: config.host,
            http_client: transport_or_default(config.http_client),
            user_agent,
        }
    }

    /// Builds a client from the `VINYLDNS_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(ClientConfiguration::from_env())
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn http_client(&self) -> &Arc<dyn DnsHttpClient> {
        &self.http_client
    }

    /// Joins the host and `path` with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a request to `path` on the configured host.
    ///
    /// `headers` must already carry the request signature; the user agent is
    /// added here. When `VINYLDNS_LOG` is set the request and response are
    /// logged at info level.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        mut headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Value, VinylDnsError> {
        let url = self.url(path);
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        let logging = log_requests();
        if logging {
            info!(
                %method,
                %url,
                body = body.as_deref().unwrap_or_default(),
                "vinyldns request"
            );
        }

        let response = self.http_client.request(method, url, headers, body).await;

        if logging {
            match &response {
                Ok(value) => info!(response = %value, "vinyldns response"),
                Err(err) => info!(error = %err, "vinyldns request failed"),
            }
        }

        response
    }
}

/// Same as [`Client::new`].
pub fn new_client(config: ClientConfiguration) -> Client {
    Client::new(config)
}

/// Same as [`Client::from_env`].
pub fn new_client_from_env() -> Client {
    Client::from_env()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::VERSION;

    #[derive(std::fmt::Debug, Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<(Method, String, HeaderMap, Option<String>)>>,
    }

    #[async_trait]
    impl DnsHttpClient for RecordingTransport {
        async fn request(
            &self,
            method: Method,
            url: String,
            headers: HeaderMap,
            body: Option<String>,
        ) -> Result<Value, VinylDnsError> {
            self.calls.lock().unwrap().push((method, url, headers, body));
            Ok(serde_json::json!({ "zones": [] }))
        }
    }

    fn config() -> ClientConfiguration {
        ClientConfiguration {
            access_key: "ak1".into(),
            secret_key: "sk1".into(),
            host: "https://example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn fills_in_defaults() {
        let client = Client::new(config());
        assert_eq!(client.access_key(), "ak1");
        assert_eq!(client.secret_key(), "sk1");
        assert_eq!(client.host(), "https://example.com");
        assert_eq!(client.user_agent(), format!("go-vinyldns/{VERSION}"));
        assert!(format!("{:?}", client.http_client()).contains("DefaultDnsClient"));
    }

    #[test]
    fn keeps_explicit_user_agent() {
        let client = Client::new(ClientConfiguration {
            user_agent: "terraform-provider-vinyldns/1.0".into(),
            ..config()
        });
        assert_eq!(client.user_agent(), "terraform-provider-vinyldns/1.0");
    }

    #[test]
    fn keeps_supplied_transport() {
        let transport: Arc<dyn DnsHttpClient> = Arc::new(RecordingTransport::default());
        let client = Client::new(ClientConfiguration {
            http_client: Some(Arc::clone(&transport)),
            ..config()
        });
        assert!(Arc::ptr_eq(client.http_client(), &transport));
    }

    #[test]
    fn accepts_empty_configuration() {
        let client = new_client(ClientConfiguration::default());
        assert_eq!(client.host(), "");
        assert!(!client.user_agent().is_empty());
    }

    #[test]
    fn url_joins_host_and_path() {
        let client = Client::new(config());
        assert_eq!(client.url("/zones"), "https://example.com/zones");
        assert_eq!(client.url("zones"), "https://example.com/zones");

        let trailing = Client::new(ClientConfiguration {
            host: "https://example.com/".into(),
            ..config()
        });
        assert_eq!(trailing.url("/zones/123"), "https://example.com/zones/123");
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let out = format!("{:?}", Client::new(config()));
        assert!(out.contains("ak1"));
        assert!(!out.contains("sk1"));
    }

    #[tokio::test]
    async fn request_sets_user_agent_and_url() {
        let transport = Arc::new(RecordingTransport::default());
        let client = Client::new(ClientConfiguration {
            user_agent: "custom-ua".into(),
            http_client: Some(transport.clone()),
            ..config()
        });

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("signed"));
        let response = client
            .request(Method::POST, "/zones", headers, Some("{}".into()))
            .await
            .unwrap();
        assert_eq!(response["zones"], serde_json::json!([]));

        let calls = transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (method, url, headers, body) = &calls[0];
        assert_eq!(*method, Method::POST);
        assert_eq!(url, "https://example.com/zones");
        assert_eq!(headers[USER_AGENT], "custom-ua");
        assert_eq!(headers["Authorization"], "signed");
        assert_eq!(body.as_deref(), Some("{}"));
    }
}
