pub mod client;
pub mod dto;

pub use client::CongressClient;
pub use dto::{CongressBillRecord, UpstreamPage};
