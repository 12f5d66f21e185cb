//! Figma API client - retrieves the component index and node trees for a
//! design document.

use crate::error::{SyncError, SyncResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const API_BASE: &str = "https://api.figma.com";
const AUTH_HEADER: &str = "X-Figma-Token";
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const TOKEN_ENV: &str = "FIGMA_TOKEN";
pub const FILE_ID_ENV: &str = "FIGMA_FILE_ID";

/// One entry in the document's flat component index
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentRef {
    pub node_id: String,
    pub name: String,
}

/// One node in the document tree as returned by the nodes endpoint.
/// Measurements are absent when the design tool never set them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub node_type: Option<String>,

    #[serde(default)]
    pub children: Vec<DocumentNode>,

    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub item_spacing: Option<f64>,
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ComponentsResponse {
    meta: ComponentsMeta,
}

#[derive(Debug, Deserialize)]
struct ComponentsMeta {
    #[serde(default)]
    components: Vec<ComponentRef>,
}

#[derive(Debug, Deserialize)]
struct NodesResponse {
    nodes: HashMap<String, NodeWrapper>,
}

#[derive(Debug, Deserialize)]
struct NodeWrapper {
    document: DocumentNode,
}

/// HTTP client for one design document
pub struct FigmaClient {
    http: reqwest::Client,
    token: String,
    file_id: String,
}

impl FigmaClient {
    /// Build a client from `FIGMA_TOKEN` / `FIGMA_FILE_ID`
    pub fn from_env() -> SyncResult<Self> {
        let token =
            std::env::var(TOKEN_ENV).map_err(|_| SyncError::missing_credentials(TOKEN_ENV))?;
        let file_id =
            std::env::var(FILE_ID_ENV).map_err(|_| SyncError::missing_credentials(FILE_ID_ENV))?;
        Self::new(token, file_id)
    }

    pub fn new(token: String, file_id: String) -> SyncResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            token,
            file_id,
        })
    }

    /// List every component declared in the document
    pub async fn components(&self) -> SyncResult<Vec<ComponentRef>> {
        let response: ComponentsResponse = self
            .get_json(&format!("/v1/files/{}/components", self.file_id))
            .await?;
        Ok(response.meta.components)
    }

    /// Fetch the full node tree rooted at one node
    pub async fn node(&self, node_id: &str) -> SyncResult<DocumentNode> {
        let mut response: NodesResponse = self
            .get_json(&format!("/v1/files/{}/nodes?ids={}", self.file_id, node_id))
            .await?;

        response
            .nodes
            .remove(node_id)
            .map(|wrapper| wrapper.document)
            .ok_or_else(|| SyncError::node_not_found(node_id))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        let url = format!("{}{}", API_BASE, path);
        let response = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SyncError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::api(
                status.as_u16(),
                body.chars().take(200).collect::<String>(),
            ));
        }

        Ok(response.json().await?)
    }
}
