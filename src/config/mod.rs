pub mod dto;
pub mod loader;

pub use dto::{AppConfig, CacheTtlConfig, CongressConfig, LegiScanConfig, PaginationConfig};
pub use loader::load_config;
