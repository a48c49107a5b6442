//! Pod API data models.
//!
//! Field names on the wire are camelCase and must match the service
//! schema exactly. Every value here is a snapshot of server state at
//! response time; the client never mutates a pod locally.

use serde::{Deserialize, Serialize};

/// A leased GPU compute instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    /// Server-assigned identifier, immutable.
    pub id: String,
    /// Pod name.
    pub name: String,
    /// Container image reference.
    pub image_name: String,
    /// Server-controlled status, e.g. `RUNNING` or `EXITED`.
    pub desired_status: String,
    /// Current cost per hour in USD. May change on resume.
    pub cost_per_hr: f64,
    /// Number of GPUs.
    pub gpu_count: u32,
    /// Number of virtual CPUs.
    pub vcpu_count: u32,
    /// RAM in GB.
    pub memory_in_gb: u32,
    /// Container disk size in GB.
    pub container_disk_in_gb: u32,
    /// Persistent volume size in GB.
    pub volume_in_gb: u32,
    /// Mount path of the persistent volume.
    #[serde(default)]
    pub volume_mount_path: Option<String>,
    /// Docker launch arguments.
    #[serde(default)]
    pub docker_args: String,
    /// Environment variables as `KEY=VALUE` strings, order preserved.
    #[serde(default)]
    pub env: Vec<String>,
    /// Exposed port spec, e.g. `8888/http,22/tcp`.
    #[serde(default)]
    pub ports: Option<String>,
    /// Pod type, e.g. `RESERVED` or `INTERRUPTABLE`.
    #[serde(default)]
    pub pod_type: Option<String>,
    /// Docker container ID, once assigned.
    #[serde(default)]
    pub docker_id: Option<String>,
    /// Human-readable description of the last status change.
    #[serde(default)]
    pub last_status_change: Option<String>,
    /// Identifier of the host machine.
    #[serde(default)]
    pub machine_id: Option<String>,
    /// Primary exposed port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Seconds the pod has been running.
    #[serde(default)]
    pub uptime_seconds: Option<u64>,
    /// Host machine details.
    #[serde(default)]
    pub machine: Option<Machine>,
}

/// Host machine details attached to a pod.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    /// GPU marketing name, e.g. `RTX A5000`.
    pub gpu_display_name: String,
}

/// Specification for provisioning a new pod.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePodInput {
    /// Cloud tier: `ALL`, `SECURE`, or `COMMUNITY`.
    pub cloud_type: String,
    /// Container disk size in GB.
    pub container_disk_in_gb: u32,
    /// Maximum acceptable cost per hour. Omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_cost: Option<f64>,
    /// Docker launch arguments.
    pub docker_args: String,
    /// Environment variables, passed through in order.
    pub env: Vec<PodEnv>,
    /// Number of GPUs to allocate.
    pub gpu_count: u32,
    /// GPU type identifier, e.g. `NVIDIA GeForce RTX 4090`.
    pub gpu_type_id: String,
    /// Container image reference.
    pub image_name: String,
    /// Minimum RAM in GB.
    pub min_memory_in_gb: u32,
    /// Minimum virtual CPU count.
    pub min_vcpu_count: u32,
    /// Pod name. Derived from the image reference when empty.
    pub name: String,
    /// Port spec, e.g. `8888/http,22/tcp`.
    pub ports: String,
    /// Template to deploy from, if any.
    pub template_id: String,
    /// Persistent volume size in GB.
    pub volume_in_gb: u32,
    /// Mount path for the persistent volume.
    pub volume_mount_path: String,
}

impl CreatePodInput {
    /// Fill in `name` from the image reference when the caller left it
    /// empty: the segment up to the first `:`, so `foo/bar:latest`
    /// becomes `foo/bar`.
    pub fn ensure_name(&mut self) {
        if self.name.is_empty() {
            self.name = self
                .image_name
                .split(':')
                .next()
                .unwrap_or_default()
                .to_string();
        }
    }
}

/// A single environment variable entry for pod creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodEnv {
    /// Variable name. Uniqueness is enforced server-side, if at all.
    pub key: String,
    /// Variable value.
    pub value: String,
}

/// Pod state snapshot returned by the lifecycle mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodUpdate {
    /// Pod identifier.
    pub id: String,
    /// Status the server is now driving the pod towards.
    pub desired_status: String,
    /// Cost per hour after the mutation. Not reported by `podStop`.
    #[serde(default)]
    pub cost_per_hr: Option<f64>,
    /// Human-readable description of the status change.
    #[serde(default)]
    pub last_status_change: Option<String>,
}
