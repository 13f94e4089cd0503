//! Blocking API client for the eWarehousing WMS REST service.
//!
//! # Overview
//! `Client` builds authenticated requests, lazily logs in on the first call
//! that needs a token, dispatches through a `Transport` and classifies every
//! response. Resource endpoints (`client.orders()`, `client.articles()`, ...)
//! map a path and a payload onto that engine and decode the buffered body.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest`, `HttpResponse`),
//!   so the auth lifecycle is testable without a network.
//! - One `TokenState` per client: `Empty` until a login or an explicit token,
//!   then `Populated`. Expiry is never checked client-side; a stale token
//!   shows up as a 401 that the caller handles.
//! - The login exchange has its own auth-free request path.
//! - Any status of 300 or above becomes `ApiError::Http` with the raw body as
//!   `detail`. Nothing is retried.
//!
//! ```no_run
//! use ewhs_core::{Client, Config};
//!
//! let config = Config::new("user", "secret", "WMS01", "CUST01").testing();
//! let mut client = Client::new(config);
//! let order = client.orders().get("c9165f93-8301-4aaa-9f64-27f191c0c778")?;
//! println!("{:?}", order.external_reference);
//! # Ok::<(), ewhs_core::ApiError>(())
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod resources;
pub mod transport;
pub mod webhook;

pub use auth::{SessionToken, TokenState, LOGIN_PATH};
pub use client::{classify, Client, ClientBuilder};
pub use config::{Config, Environment};
pub use error::{ApiError, ErrorRecord, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{Direction, QueryParams};
pub use transport::{Transport, UreqTransport};
