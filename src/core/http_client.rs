use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tokio::time::sleep;
use tracing::warn;

use crate::core::error::AppError;

const RETRY_DELAY_MS: u64 = 500;
const BODY_SNIPPET_CHARS: usize = 256;

pub fn build_http_client(
    disable_proxy: bool,
    timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_secs.max(1)));

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}

/// GETs `url` and decodes the body as JSON, retrying failed attempts with a
/// linear back-off. `label` is used in errors and logs in place of the URL,
/// which may carry credentials. A 404 is returned immediately as
/// [`AppError::NotFound`].
pub async fn get_json(
    client: &Client,
    url: Url,
    label: &str,
    attempts: usize,
) -> Result<Value, AppError> {
    let attempts = attempts.max(1);
    let mut last_error: Option<AppError> = None;

    for attempt in 0..attempts {
        match client.get(url.clone()).send().await {
            Ok(resp) if resp.status().is_success() => {
                return resp
                    .json::<Value>()
                    .await
                    .map_err(|err| AppError::upstream(format!("failed to decode {label}: {err}")));
            }
            Ok(resp) if resp.status() == StatusCode::NOT_FOUND => {
                return Err(AppError::not_found(format!("{label} returned 404")));
            }
            Ok(resp) => {
                let status = resp.status();
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read body>".to_string());
                let snippet = text.chars().take(BODY_SNIPPET_CHARS).collect::<String>();
                let hint = if status == StatusCode::TOO_MANY_REQUESTS {
                    " (rate limited)"
                } else {
                    ""
                };
                last_error = Some(AppError::upstream(format!(
                    "request to {label} failed with {status}{hint}: {snippet}"
                )));
            }
            Err(err) => {
                last_error = Some(AppError::upstream(format!(
                    "network error contacting {label}: {}",
                    err.without_url()
                )));
            }
        }

        if attempt + 1 < attempts {
            warn!(target: "upstream", label, attempt = attempt + 1, "retrying upstream request");
            sleep(Duration::from_millis(RETRY_DELAY_MS * (attempt as u64 + 1))).await;
        }
    }

    Err(last_error.unwrap_or_else(|| AppError::internal("request failed".to_string())))
}
