//! Carelist Gateway Library
//!
//! Remote patient gateway and the service that keeps the client-side
//! cache synchronized with it.
//!
//! The gateway wraps four remote operations (list, create, update,
//! delete) behind a uniform result type. `list` talks to the real API
//! over HTTP; the write operations are simulated locally behind a
//! fixed configurable latency, as the backing mock API has no write
//! endpoints. Server responses are validated before being trusted.
//!
//! # Modules
//!
//! - [`config`]: Base URL + simulated latency configuration
//! - [`transport`]: HTTP seam (`Transport` trait, reqwest implementation)
//! - [`gateway`]: The four remote operations
//! - [`service`]: Gateway + cache wiring (read-merge-write updates)

pub mod config;
pub mod gateway;
pub mod service;
pub mod transport;

pub use config::{ConfigError, GatewayConfig, BASE_URL_ENV, DEFAULT_LATENCY};
pub use gateway::{ApiResult, GatewayError, PatientGateway};
pub use service::PatientService;
pub use transport::{HttpTransport, Transport, TransportError};
