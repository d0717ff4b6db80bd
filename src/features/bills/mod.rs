pub mod constants;
pub mod dto;
pub mod handler;
pub mod normalizer;
pub mod service;

pub use dto::{Bill, BillPage, ListBillsArgs, SearchBillsArgs, Sponsor};
pub use handler::{
    handle_get_bill, handle_get_legiscan_bill, handle_list_bills, handle_search_bills,
};
pub use normalizer::{RawBill, ValidationError, aggregate, normalize};
pub use service::{BillService, CongressDataSource, LegiScanDataSource};
