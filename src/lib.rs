//! # cortex-client
//!
//! Async Rust bindings for the REST API of a locally running Cortex
//! model-serving daemon.
//!
//! ## Overview
//!
//! This crate is a thin, faithful binding: every method performs exactly one
//! HTTP request against the daemon and returns the decoded response. The
//! daemon owns all entities (models, threads, messages, files, engines,
//! hardware descriptors); payloads are carried as [`serde_json::Value`]
//! without local validation, so the crate stays compatible with whatever the
//! daemon version on the other side serves.
//!
//! ## Error semantics
//!
//! Status codes and error bodies are defined by the daemon, and the caller is
//! expected to interpret them. A non-2xx response with a decodable body is
//! therefore a *successful* call returning that body; only transport
//! failures, undecodable bodies, and local file I/O problems surface as
//! [`Error`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use cortex_client::CortexClient;
//!
//! #[tokio::main]
//! async fn main() -> cortex_client::Result<()> {
//!     let client = CortexClient::new()?;
//!
//!     let status = client.server_health().await?;
//!     println!("daemon health: {status}");
//!
//!     for model in client.models().await? {
//!         println!("{model}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client handle, builder, and endpoint bindings |
//! | [`transport`] | HTTP dispatch shared by all bindings |
//! | [`error`] | Error type for transport and decode failures |

pub mod client;
pub mod error;
pub mod transport;

pub use client::{CortexClient, CortexClientBuilder};
pub use error::Error;

// Several daemon endpoints answer with a bare status code or a
// status-and-body pair; re-export the status type so callers do not need a
// direct reqwest dependency.
pub use reqwest::StatusCode;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
