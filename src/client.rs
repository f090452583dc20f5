use log::{debug, info, warn};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    config::Config,
    node::{CreateNodeRequest, Node},
};

const FALLBACK_CREATE_ERROR: &str = "Failed to create node";
const FETCH_NODES_ERROR: &str = "Failed to fetch nodes";
const RESOLVE_IP_ERROR: &str = "Failed to resolve your IP address";

/// Failure of an API call. `Display` is the text shown to the user, the
/// underlying http error is only reachable through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response, or the body could not be read.
    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A success response whose body is not the expected json.
    #[error("{message}")]
    Decode {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch nodes")]
    FetchNodes(StatusCode),

    #[error("IP lookup failed with status {0}")]
    ResolveIp(StatusCode),

    /// Creation rejected by the server, carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct IpBody {
    ip: String,
}

/// Thin client over the nodes HTTP API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Uses a preconfigured http client, e.g. one with custom proxy settings.
    pub fn with_http(config: Config, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches the full node list.
    ///
    /// # Errors
    ///
    /// [`ApiError::FetchNodes`] on a non-success status, [`ApiError::Transport`]
    /// if the request fails, [`ApiError::Decode`] if the body is not a node list.
    pub async fn list_nodes(&self) -> Result<Vec<Node>, ApiError> {
        let res = self
            .http
            .get(self.config.endpoint("nodes"))
            .send()
            .await
            .map_err(failure(FETCH_NODES_ERROR))?;
        if !res.status().is_success() {
            return Err(ApiError::FetchNodes(res.status()));
        }

        let nodes: Vec<Node> = res.json().await.map_err(failure(FETCH_NODES_ERROR))?;
        info!("fetched {} nodes", nodes.len());
        Ok(nodes)
    }

    /// Submits a new node.
    ///
    /// # Errors
    ///
    /// [`ApiError::Rejected`] with the server supplied `error` message (or a
    /// generic one) on a non-success status, [`ApiError::Transport`] if the
    /// request fails, [`ApiError::Decode`] if the created node does not decode.
    pub async fn create_node(&self, req: &CreateNodeRequest) -> Result<Node, ApiError> {
        let res = self
            .http
            .post(self.config.endpoint("nodes"))
            .json(req)
            .send()
            .await
            .map_err(failure(FALLBACK_CREATE_ERROR))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.map_err(failure(FALLBACK_CREATE_ERROR))?;
            debug!("create rejected with status {status}: {body}");
            return Err(ApiError::Rejected(rejection_message(&body)));
        }

        let node: Node = res.json().await.map_err(failure(FALLBACK_CREATE_ERROR))?;
        info!("created node {} ({}) for ip {}", node.id, node.name, node.ip);
        Ok(node)
    }

    /// Asks the server for the caller's public IP.
    ///
    /// # Errors
    ///
    /// [`ApiError::ResolveIp`] on a non-success status, [`ApiError::Transport`]
    /// if the request fails, [`ApiError::Decode`] if the body has no `ip`.
    pub async fn current_ip(&self) -> Result<String, ApiError> {
        let res = self
            .http
            .get(self.config.endpoint("ip"))
            .send()
            .await
            .map_err(failure(RESOLVE_IP_ERROR))?;
        if !res.status().is_success() {
            return Err(ApiError::ResolveIp(res.status()));
        }

        let body: IpBody = res.json().await.map_err(failure(RESOLVE_IP_ERROR))?;
        Ok(body.ip)
    }
}

/// Wraps a reqwest error under the generic `message` of the failed operation.
fn failure(message: &'static str) -> impl FnOnce(reqwest::Error) -> ApiError {
    move |source| {
        warn!("{message}: {source}");
        if source.is_decode() {
            ApiError::Decode { message, source }
        } else {
            ApiError::Transport { message, source }
        }
    }
}

/// Extracts the `error` field of a rejection body, falling back to a generic
/// message when the body is not json or has no usable message.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_CREATE_ERROR.to_string())
}
