use std::env;

use crate::config::dto::{
    AppConfig, CacheTtlConfig, CongressConfig, LegiScanConfig, PaginationConfig,
};
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 4100;
pub const DEFAULT_CONGRESS_API_BASE: &str = "https://api.congress.gov/v3";
pub const DEFAULT_LEGISCAN_API_BASE: &str = "https://api.legiscan.com/";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    load_config_from(|key| env::var(key).ok())
}

/// Builds the configuration from an arbitrary variable lookup.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("BILL_FEED_PORT").or_else(|| lookup("PORT")) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?,
        None => DEFAULT_PORT,
    };

    let congress_api_key = non_empty(lookup("CONGRESS_API_KEY"))
        .ok_or_else(|| AppError::configuration("CONGRESS_API_KEY is required".to_string()))?;

    let default_limit = page_size(&lookup, "DEFAULT_PAGE_SIZE", 20);
    let max_limit = page_size(&lookup, "MAX_PAGE_SIZE", 250);

    Ok(AppConfig {
        port,
        api_key: non_empty(lookup("SERVICE_API_KEY")),
        disable_proxy: parse_bool(&lookup, "DISABLE_PROXY", false),
        http_timeout_secs: parse_u64(&lookup, "HTTP_TIMEOUT_SECS", 10),
        retry_attempts: parse_u64(&lookup, "UPSTREAM_RETRY_ATTEMPTS", 2).max(1) as usize,
        cache_enabled: parse_bool(&lookup, "CACHE_ENABLED", false),
        cache_ttl: CacheTtlConfig {
            bills: parse_u64(&lookup, "CACHE_TTL_BILLS", 300),
            bill_detail: parse_u64(&lookup, "CACHE_TTL_BILL_DETAIL", 1800),
        },
        pagination: PaginationConfig {
            default_limit: default_limit.min(max_limit),
            max_limit,
        },
        congress: CongressConfig {
            base_url: non_empty(lookup("CONGRESS_API_BASE"))
                .unwrap_or_else(|| DEFAULT_CONGRESS_API_BASE.to_string()),
            api_key: congress_api_key,
        },
        legiscan: LegiScanConfig {
            base_url: non_empty(lookup("LEGISCAN_API_BASE"))
                .unwrap_or_else(|| DEFAULT_LEGISCAN_API_BASE.to_string()),
            api_key: non_empty(lookup("LEGISCAN_API_KEY")),
        },
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| matches!(value.trim(), "true" | "1" | "TRUE" | "True"))
        .unwrap_or(default)
}

fn page_size<F>(lookup: &F, key: &str, default: u64) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    parse_u64(lookup, key, default).clamp(1, u32::MAX as u64) as u32
}

fn parse_u64<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
