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

//! Errors surfaced when a request reaches the VinylDNS API.
//!
//! Building a configuration or a client never fails; missing credentials or a
//! bad host only show up here, on the first request.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors returned by the transport and by [`Client::request`](crate::Client::request).
#[derive(Error, Debug)]
pub enum VinylDnsError {
    /// Connection, TLS or protocol failure in the HTTP transport.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A header value (usually the user agent) could not be encoded.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// The API answered with a non-success status.
    #[error("VinylDNS API returned {status}: {body}")]
    Status {
        /// Status code of the response.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },
}
