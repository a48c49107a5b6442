//! Client for the RunPod GPU pod lifecycle API.
//!
//! Pods are leased virtual machines with fixed GPU/CPU/memory/disk
//! allocations, managed through a single GraphQL endpoint. This crate
//! covers the full lifecycle: list, create, stop, terminate, and the
//! two resume paths (on-demand and spot bid).
//!
//! Every operation runs the same pipeline: encode the operation's
//! GraphQL document and variables, execute one HTTP round trip, then
//! classify the response in a fixed precedence order (transport
//! failure, bad status, unreadable body, malformed envelope, GraphQL
//! errors, missing data, shape mismatch) before extracting the typed
//! payload. See [`PodApiError`] for the failure kinds.
//!
//! ## Example
//!
//! ```ignore
//! use runpod_api::{CreatePodInput, PodClient};
//!
//! let client = PodClient::new(api_key)?;
//!
//! // List pods on the account
//! let pods = client.list_pods().await?;
//!
//! // Deploy an on-demand pod; name derived from the image reference
//! let pod = client.create_pod(CreatePodInput {
//!     cloud_type: "ALL".to_string(),
//!     gpu_count: 1,
//!     gpu_type_id: "NVIDIA RTX A5000".to_string(),
//!     image_name: "ghcr.io/org/inference:latest".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! // Stop it, then tear it down
//! client.stop_pod(&pod.id).await?;
//! client.remove_pod(&pod.id).await?;
//! ```

pub mod client;
pub mod error;
mod graphql;
pub mod models;

pub use client::PodClient;
pub use error::PodApiError;
pub use models::{CreatePodInput, Machine, Pod, PodEnv, PodUpdate};
