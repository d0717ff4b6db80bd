use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::core::cache::CacheManager;
use crate::core::error::AppError;
use crate::core::http_client::{build_http_client, get_json};
use crate::features::congress::dto::{
    CongressDetailEnvelope, CongressListEnvelope, CongressSearchEnvelope, UpstreamPage,
};

const LIST_PATH: &str = "bill";
const SEARCH_PATH: &str = "search/bill";
const LIST_SORT: &str = "updateDate desc";

/// Client for the Congress.gov v3 bill endpoints.
pub struct CongressClient {
    config: Arc<AppConfig>,
    cache: CacheManager,
    http_client: reqwest::Client,
}

impl CongressClient {
    pub fn new(config: Arc<AppConfig>, cache: CacheManager) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.http_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            cache,
            http_client,
        })
    }

    pub async fn fetch_bills(&self, offset: u64, limit: u32) -> Result<UpstreamPage, AppError> {
        let mut url = self.endpoint(LIST_PATH)?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string())
            .append_pair("sort", LIST_SORT);

        let payload = self.execute_request(url, self.config.cache_ttl.bills).await?;
        let envelope: CongressListEnvelope = serde_json::from_value(payload).map_err(|err| {
            AppError::upstream(format!("unexpected bill listing envelope: {err}"))
        })?;

        Ok(UpstreamPage {
            records: envelope.bills,
            count: envelope.pagination.and_then(|pagination| pagination.count),
        })
    }

    pub async fn search_bills(
        &self,
        query: &str,
        offset: u64,
        limit: u32,
    ) -> Result<UpstreamPage, AppError> {
        let mut url = self.endpoint(SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());

        let payload = self.execute_request(url, self.config.cache_ttl.bills).await?;
        let envelope: CongressSearchEnvelope = serde_json::from_value(payload).map_err(|err| {
            AppError::upstream(format!("unexpected bill search envelope: {err}"))
        })?;

        Ok(UpstreamPage {
            records: envelope.results,
            count: envelope.pagination.and_then(|pagination| pagination.count),
        })
    }

    pub async fn fetch_bill(
        &self,
        congress: u32,
        bill_type: &str,
        number: &str,
    ) -> Result<Value, AppError> {
        let path = format!(
            "{LIST_PATH}/{congress}/{}/{}",
            urlencoding::encode(&bill_type.to_lowercase()),
            urlencoding::encode(number)
        );
        let url = self.endpoint(&path)?;

        let payload = self
            .execute_request(url, self.config.cache_ttl.bill_detail)
            .await?;
        let envelope: CongressDetailEnvelope = serde_json::from_value(payload).map_err(|err| {
            AppError::upstream(format!("unexpected bill detail envelope: {err}"))
        })?;

        Ok(envelope.bill)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let base = self.config.congress.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))
            .map_err(|err| AppError::internal(format!("invalid congress url: {err}")))?;
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }

    /// Cache keys and log labels use the URL before the API key is attached.
    async fn execute_request(&self, url: Url, ttl: u64) -> Result<Value, AppError> {
        let label = url.to_string();

        if let Some(cached) = self.cache.get(&label).await {
            debug!(target: "congress", url = %label, "cache hit");
            return Ok(cached);
        }

        let mut authed = url;
        authed
            .query_pairs_mut()
            .append_pair("api_key", &self.config.congress.api_key);

        debug!(target: "congress", url = %label, "requesting");
        let payload = get_json(
            &self.http_client,
            authed,
            &label,
            self.config.retry_attempts,
        )
        .await?;

        self.cache.insert(label, payload.clone(), ttl).await;
        Ok(payload)
    }
}
