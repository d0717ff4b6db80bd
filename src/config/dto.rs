use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub api_key: Option<String>,
    pub disable_proxy: bool,
    pub http_timeout_secs: u64,
    pub retry_attempts: usize,
    pub cache_enabled: bool,
    pub cache_ttl: CacheTtlConfig,
    pub pagination: PaginationConfig,
    pub congress: CongressConfig,
    pub legiscan: LegiScanConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheTtlConfig {
    pub bills: u64,
    pub bill_detail: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CongressConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegiScanConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}
