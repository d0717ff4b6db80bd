pub mod client;
pub mod dto;

pub use client::LegiScanClient;
pub use dto::LegiScanBillRecord;
