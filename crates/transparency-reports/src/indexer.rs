//! Gating-token balance lookup via an Algorand indexer
//!
//! Indexer versions disagree on field names, so holdings are read from a
//! `serde_json::Value` by trying the candidate names in `constants` in order.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::constants;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("indexer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("indexer returned status {0}")]
    Status(u16),
}

/// Anything that can report the current gating-token balance (micro-units)
#[async_trait]
pub trait BalanceSource: Send + Sync {
    async fn fetch_balance(&self) -> Result<i64, FetchError>;
}

/// HTTP client for `/v2/accounts/{address}/assets`
pub struct IndexerClient {
    client: reqwest::Client,
    base_url: String,
    address: String,
    asset_id: u64,
}

impl IndexerClient {
    pub fn new(base_url: &str, address: &str, asset_id: u64, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            address: address.to_string(),
            asset_id,
        })
    }

    pub fn url(&self) -> String {
        format!(
            "{}/v2/accounts/{}/assets?asset-id={}",
            self.base_url, self.address, self.asset_id
        )
    }
}

#[async_trait]
impl BalanceSource for IndexerClient {
    async fn fetch_balance(&self) -> Result<i64, FetchError> {
        let response = self
            .client
            .get(self.url())
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await?;
        let amount = holding_amount(&body, self.asset_id).unwrap_or(0);
        debug!("Indexer reports {} micro-units of asset {}", amount, self.asset_id);

        Ok(amount)
    }
}

/// First of `candidates` present on a JSON object
pub fn first_field<'a>(object: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|name| object.get(*name))
}

/// Holdings list, from whichever known path the response uses
pub fn asset_list(body: &Value) -> Option<&Vec<Value>> {
    constants::ASSET_LIST_PATHS.iter().find_map(|path| {
        path.iter()
            .try_fold(body, |node, key| node.get(*key))
            .and_then(Value::as_array)
    })
}

/// Integer from a JSON number or numeric string
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| i64::try_from(v).unwrap_or(i64::MAX))),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Amount held of `asset_id`, or `None` when the response lists no such holding
pub fn holding_amount(body: &Value, asset_id: u64) -> Option<i64> {
    let wanted = i64::try_from(asset_id).ok()?;

    asset_list(body)?.iter().find_map(|holding| {
        let id = first_field(holding, constants::ASSET_ID_FIELDS).and_then(as_integer)?;
        if id != wanted {
            return None;
        }
        Some(
            first_field(holding, constants::ASSET_AMOUNT_FIELDS)
                .and_then(as_integer)
                .unwrap_or(0),
        )
    })
}
