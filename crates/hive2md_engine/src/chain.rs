//! Read-only access to a Hive/Steem node through the condenser JSON-RPC API.

use chrono::{DateTime, NaiveDateTime, Utc};
use hive2md_core::{Post, PostMetadata};
use hive2md_logging::archive_debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::fetch::{map_reqwest_error, FetchSettings};

const GET_ACCOUNTS: &str = "condenser_api.get_accounts";
const GET_BLOG: &str = "condenser_api.get_blog";

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("invalid node url {url}: {message}")]
    InvalidNode { url: String, message: String },
    #[error("node request failed: {0}")]
    Transport(String),
    #[error("node answered with http status {0}")]
    HttpStatus(u16),
    #[error("node rejected {method} (code {code}): {message}")]
    Rpc {
        method: &'static str,
        code: i64,
        message: String,
    },
    #[error("malformed {method} response: {message}")]
    Decode {
        method: &'static str,
        message: String,
    },
    #[error("account @{0} does not exist")]
    UnknownAccount(String),
}

/// Source of blog entries for one account.
#[async_trait::async_trait]
pub trait ChainReader: Send + Sync {
    /// Up to `limit` entries, newest first. Reblogs are included.
    async fn blog_entries(&self, account: &str, limit: u32) -> Result<Vec<Post>, ChainError>;
}

/// JSON-RPC client for the `condenser_api` exposed by public Hive and Steem nodes.
#[derive(Debug, Clone)]
pub struct CondenserClient {
    node: reqwest::Url,
    client: reqwest::Client,
}

impl CondenserClient {
    pub fn new(node_url: &str, settings: &FetchSettings) -> Result<Self, ChainError> {
        let node = reqwest::Url::parse(node_url).map_err(|err| ChainError::InvalidNode {
            url: node_url.to_string(),
            message: err.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|err| ChainError::Transport(err.to_string()))?;
        Ok(Self { node, client })
    }

    async fn call<P, T>(&self, method: &'static str, params: P) -> Result<T, ChainError>
    where
        P: Serialize + Send,
        T: DeserializeOwned + Send,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };
        let payload = serde_json::to_vec(&request).map_err(|err| ChainError::Decode {
            method,
            message: err.to_string(),
        })?;
        archive_debug!("POST {} {method}", self.node);

        let response = self
            .client
            .post(self.node.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|err| ChainError::Transport(map_reqwest_error(err).to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::HttpStatus(status.as_u16()));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ChainError::Transport(map_reqwest_error(err).to_string()))?;

        let decoded: RpcResponse<T> =
            serde_json::from_slice(&bytes).map_err(|err| ChainError::Decode {
                method,
                message: err.to_string(),
            })?;
        if let Some(error) = decoded.error {
            return Err(ChainError::Rpc {
                method,
                code: error.code,
                message: error.message,
            });
        }
        decoded.result.ok_or_else(|| ChainError::Decode {
            method,
            message: "missing result".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ChainReader for CondenserClient {
    async fn blog_entries(&self, account: &str, limit: u32) -> Result<Vec<Post>, ChainError> {
        let accounts: Vec<Value> = self.call(GET_ACCOUNTS, [[account]]).await?;
        if accounts.is_empty() {
            return Err(ChainError::UnknownAccount(account.to_string()));
        }

        let mut entries: Vec<BlogEntry> = self.call(GET_BLOG, (account, 0u32, limit)).await?;
        entries.sort_by(|a, b| b.entry_id.cmp(&a.entry_id));
        entries.truncate(limit as usize);

        entries
            .into_iter()
            .map(|entry| entry.comment.into_post())
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct RpcRequest<P> {
    jsonrpc: &'static str,
    method: &'static str,
    params: P,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct BlogEntry {
    #[serde(default)]
    entry_id: u64,
    comment: RawComment,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    author: String,
    permlink: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
    created: String,
    #[serde(default)]
    json_metadata: Value,
}

impl RawComment {
    fn into_post(self) -> Result<Post, ChainError> {
        let created = parse_created(&self.created).ok_or_else(|| ChainError::Decode {
            method: GET_BLOG,
            message: format!("bad created timestamp {:?} on {}", self.created, self.permlink),
        })?;
        Ok(Post {
            metadata: PostMetadata::from_value(&self.json_metadata),
            author: self.author,
            permlink: self.permlink,
            title: self.title,
            body: self.body,
            created,
        })
    }
}

/// Nodes send `2024-05-10T14:05:09` without an offset; the value is UTC.
fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}
