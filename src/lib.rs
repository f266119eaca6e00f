//! Client binding for the VinylDNS API
//!
//! Provides:
//! - Client configuration from explicit fields or `VINYLDNS_*` environment variables
//! - A client handle carrying credentials, host, user agent and HTTP transport
//! - A pluggable asynchronous HTTP transport
//!
//! # Example
//! ```no_run
//! use vinyldns::{Client, ClientConfiguration};
//!
//! let client = Client::new(ClientConfiguration {
//!     access_key: "your_access_key".into(),
//!     secret_key: "your_secret_key".into(),
//!     host: "https://vinyldns.example.com".into(),
//!     ..Default::default()
//! });
//! assert!(client.user_agent().starts_with("go-vinyldns/"));
//! ```

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

pub mod client;
pub mod config;
pub mod error;
pub(crate) mod utils;

pub use client::{Client, new_client, new_client_from_env};
pub use config::{ClientConfiguration, default_user_agent, log_requests, new_config_from_env};
pub use error::VinylDnsError;
pub use utils::env::{EnvSource, ProcessEnv};
pub use utils::request::{DefaultDnsClient, DnsHttpClient};

/// Product token sent in the default user agent.
pub const CLIENT_NAME: &str = "go-vinyldns";

/// Library version, reported in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
