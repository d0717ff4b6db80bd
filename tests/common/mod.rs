#![allow(dead_code)]

pub mod fake_upstream;

use std::sync::Arc;

use bill_feed_server::config::{
    AppConfig, CacheTtlConfig, CongressConfig, LegiScanConfig, PaginationConfig,
};

pub const CONGRESS_KEY: &str = "congress-test-key";
pub const LEGISCAN_KEY: &str = "legiscan-test-key";

pub fn test_config(congress_base: &str, legiscan_base: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        port: 0,
        api_key: None,
        disable_proxy: true,
        http_timeout_secs: 5,
        retry_attempts: 1,
        cache_enabled: false,
        cache_ttl: CacheTtlConfig {
            bills: 60,
            bill_detail: 60,
        },
        pagination: PaginationConfig {
            default_limit: 20,
            max_limit: 250,
        },
        congress: CongressConfig {
            base_url: congress_base.to_string(),
            api_key: CONGRESS_KEY.to_string(),
        },
        legiscan: LegiScanConfig {
            base_url: legiscan_base.to_string(),
            api_key: Some(LEGISCAN_KEY.to_string()),
        },
    })
}

pub fn pagination() -> PaginationConfig {
    PaginationConfig {
        default_limit: 20,
        max_limit: 250,
    }
}
