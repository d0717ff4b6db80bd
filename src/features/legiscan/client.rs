use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::core::cache::CacheManager;
use crate::core::error::AppError;
use crate::core::http_client::{build_http_client, get_json};
use crate::features::legiscan::dto::LegiScanEnvelope;

const STATUS_OK: &str = "OK";

pub struct LegiScanClient {
    config: Arc<AppConfig>,
    cache: CacheManager,
    http_client: reqwest::Client,
}

impl LegiScanClient {
    pub fn new(config: Arc<AppConfig>, cache: CacheManager) -> Result<Self, AppError> {
        let http_client = build_http_client(config.disable_proxy, config.http_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            cache,
            http_client,
        })
    }

    /// `op=getBill`. Returns the raw `bill` object.
    pub async fn fetch_bill(&self, bill_id: u64) -> Result<Value, AppError> {
        let api_key = self.config.legiscan.api_key.as_deref().ok_or_else(|| {
            AppError::configuration("LEGISCAN_API_KEY is not configured".to_string())
        })?;

        let mut url = Url::parse(&self.config.legiscan.base_url)
            .map_err(|err| AppError::internal(format!("invalid legiscan url: {err}")))?;
        url.query_pairs_mut()
            .append_pair("op", "getBill")
            .append_pair("id", &bill_id.to_string());
        let label = url.to_string();

        let payload = match self.cache.get(&label).await {
            Some(cached) => cached,
            None => {
                url.query_pairs_mut().append_pair("key", api_key);
                debug!(target: "legiscan", url = %label, "requesting");
                let payload =
                    get_json(&self.http_client, url, &label, self.config.retry_attempts).await?;
                unwrap_envelope(bill_id, payload.clone())?;
                self.cache
                    .insert(label, payload.clone(), self.config.cache_ttl.bill_detail)
                    .await;
                payload
            }
        };

        unwrap_envelope(bill_id, payload)
    }
}

fn unwrap_envelope(bill_id: u64, payload: Value) -> Result<Value, AppError> {
    let envelope: LegiScanEnvelope = serde_json::from_value(payload)
        .map_err(|err| AppError::upstream(format!("unexpected legiscan envelope: {err}")))?;

    if !envelope.status.eq_ignore_ascii_case(STATUS_OK) {
        let message = envelope
            .alert
            .and_then(|alert| alert.message)
            .unwrap_or_else(|| "no detail provided".to_string());
        return Err(AppError::not_found(format!(
            "legiscan bill {bill_id} unavailable: {message}"
        )));
    }

    envelope
        .bill
        .ok_or_else(|| AppError::upstream(format!("legiscan response for {bill_id} has no bill")))
}
