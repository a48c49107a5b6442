//! GraphQL client for the pod lifecycle API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::PodApiError;
use crate::graphql::{decode_ack, decode_payload, GraphQLRequest};
use crate::models::{CreatePodInput, Pod, PodUpdate};

/// Production API endpoint.
const API_URL: &str = "https://api.runpod.io/graphql";

/// Request timeout. The only deadline at this layer; a slower policy
/// has to live in the caller.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the pod lifecycle API.
///
/// Stateless: each operation is one independent request/response round
/// trip, with no retries, caching, or shared mutable state. Cloning is
/// cheap and clones may be used concurrently.
#[derive(Debug, Clone)]
pub struct PodClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl PodClient {
    /// Create a new client authenticated with the given API key.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PodApiError> {
        Self::with_url(api_key, API_URL)
    }

    /// Create a client against a custom endpoint.
    ///
    /// Used by the integration tests; also useful for self-hosted API
    /// gateways.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_url(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, PodApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(PodApiError::Transport)?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Send one GraphQL request and return the raw response body.
    ///
    /// Covers the transport-level classification: send failure, non-200
    /// status (body attached best-effort), unreadable body. Envelope
    /// semantics are left to the decode step.
    async fn post<V: Serialize>(
        &self,
        query: &'static str,
        variables: V,
    ) -> Result<String, PodApiError> {
        let request = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("api_key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(PodApiError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(PodApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(PodApiError::BodyRead)
    }

    /// Execute an operation and deserialize the payload at `path`.
    async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: V,
        path: &[&str],
    ) -> Result<T, PodApiError> {
        let body = self.post(query, variables).await?;
        let payload: Value = decode_payload(&body, path)?;

        serde_json::from_value(payload).map_err(|source| PodApiError::ShapeMismatch {
            field: path.last().copied().unwrap_or_default().to_string(),
            source,
        })
    }

    /// List all pods on the account, including host machine details.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn list_pods(&self) -> Result<Vec<Pod>, PodApiError> {
        const QUERY: &str = r"
            query myPods {
                myself {
                    pods {
                        id
                        containerDiskInGb
                        costPerHr
                        desiredStatus
                        dockerArgs
                        dockerId
                        env
                        gpuCount
                        imageName
                        lastStatusChange
                        machineId
                        memoryInGb
                        name
                        podType
                        port
                        ports
                        uptimeSeconds
                        vcpuCount
                        volumeInGb
                        volumeMountPath
                        machine {
                            gpuDisplayName
                        }
                    }
                }
            }
        ";

        #[derive(Serialize)]
        struct EmptyVariables {}

        let pods: Vec<Pod> = self
            .execute(QUERY, EmptyVariables {}, &["myself", "pods"])
            .await?;
        debug!(count = pods.len(), "listed pods");
        Ok(pods)
    }

    /// Find a machine matching the input and deploy an on-demand pod
    /// on it.
    ///
    /// When `input.name` is empty, a name is derived from the image
    /// reference up to its first `:`.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn create_pod(&self, mut input: CreatePodInput) -> Result<PodUpdate, PodApiError> {
        input.ensure_name();

        const MUTATION: &str = r"
            mutation createPod($input: PodFindAndDeployOnDemandInput!) {
                podFindAndDeployOnDemand(input: $input) {
                    id
                    costPerHr
                    desiredStatus
                    lastStatusChange
                }
            }
        ";

        #[derive(Serialize)]
        struct Variables {
            input: CreatePodInput,
        }

        info!(name = %input.name, gpu_type_id = %input.gpu_type_id, "creating pod");
        let pod: PodUpdate = self
            .execute(MUTATION, Variables { input }, &["podFindAndDeployOnDemand"])
            .await?;
        info!(pod_id = %pod.id, status = %pod.desired_status, "pod created");
        Ok(pod)
    }

    /// Stop a running pod. Its volume is retained.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn stop_pod(&self, pod_id: &str) -> Result<PodUpdate, PodApiError> {
        const MUTATION: &str = r"
            mutation stopPod($podId: String!) {
                podStop(input: {podId: $podId}) {
                    id
                    desiredStatus
                    lastStatusChange
                }
            }
        ";

        info!(pod_id = %pod_id, "stopping pod");
        self.execute(MUTATION, PodIdVariables { pod_id }, &["podStop"])
            .await
    }

    /// Terminate a pod, destroying it and its volume.
    ///
    /// The mutation declares no return fields; success is signalled by
    /// the presence of the `podTerminate` key alone.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn remove_pod(&self, pod_id: &str) -> Result<(), PodApiError> {
        const MUTATION: &str = r"
            mutation terminatePod($podId: String!) {
                podTerminate(input: {podId: $podId})
            }
        ";

        info!(pod_id = %pod_id, "terminating pod");
        let body = self.post(MUTATION, PodIdVariables { pod_id }).await?;
        decode_ack(&body, "podTerminate")
    }

    /// Resume a stopped pod at the on-demand rate.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn start_on_demand_pod(&self, pod_id: &str) -> Result<PodUpdate, PodApiError> {
        const MUTATION: &str = r"
            mutation podResume($podId: String!) {
                podResume(input: {podId: $podId}) {
                    id
                    costPerHr
                    desiredStatus
                    lastStatusChange
                }
            }
        ";

        info!(pod_id = %pod_id, "resuming pod on-demand");
        self.execute(MUTATION, PodIdVariables { pod_id }, &["podResume"])
            .await
    }

    /// Resume a stopped pod as a spot instance at the given bid per
    /// GPU per hour.
    ///
    /// # Errors
    /// Returns the classified failure if the request or decode fails.
    pub async fn start_spot_pod(
        &self,
        pod_id: &str,
        bid_per_gpu: f64,
    ) -> Result<PodUpdate, PodApiError> {
        const MUTATION: &str = r"
            mutation bidResumePod($podId: String!, $bidPerGpu: Float!) {
                podBidResume(input: {podId: $podId, bidPerGpu: $bidPerGpu}) {
                    id
                    costPerHr
                    desiredStatus
                    lastStatusChange
                }
            }
        ";

        #[derive(Serialize)]
        struct Variables<'a> {
            #[serde(rename = "podId")]
            pod_id: &'a str,
            #[serde(rename = "bidPerGpu")]
            bid_per_gpu: f64,
        }

        info!(pod_id = %pod_id, bid_per_gpu, "resuming pod with spot bid");
        self.execute(
            MUTATION,
            Variables {
                pod_id,
                bid_per_gpu,
            },
            &["podBidResume"],
        )
        .await
    }
}

/// Variables shared by the single-pod mutations.
#[derive(Serialize)]
struct PodIdVariables<'a> {
    #[serde(rename = "podId")]
    pod_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(PodClient::new("test-key").is_ok());
    }

    #[test]
    fn test_pod_id_variables_serialization() {
        let json = serde_json::to_string(&PodIdVariables { pod_id: "pod-123" }).unwrap();
        assert_eq!(json, r#"{"podId":"pod-123"}"#);
    }
}
