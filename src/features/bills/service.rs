use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::PaginationConfig;
use crate::core::error::AppError;
use crate::features::bills::dto::{Bill, BillPage, ListBillsArgs, SearchBillsArgs};
use crate::features::bills::normalizer::{RawBill, aggregate, matches_status, normalize};
use crate::features::congress::{CongressClient, UpstreamPage};
use crate::features::legiscan::LegiScanClient;

#[async_trait]
pub trait CongressDataSource: Send + Sync {
    async fn list_bills(&self, offset: u64, limit: u32) -> Result<UpstreamPage, AppError>;
    async fn search_bills(
        &self,
        query: &str,
        offset: u64,
        limit: u32,
    ) -> Result<UpstreamPage, AppError>;
    async fn fetch_bill(
        &self,
        congress: u32,
        bill_type: &str,
        number: &str,
    ) -> Result<Value, AppError>;
}

#[async_trait]
pub trait LegiScanDataSource: Send + Sync {
    async fn fetch_bill(&self, bill_id: u64) -> Result<Value, AppError>;
}

#[async_trait]
impl CongressDataSource for CongressClient {
    async fn list_bills(&self, offset: u64, limit: u32) -> Result<UpstreamPage, AppError> {
        CongressClient::fetch_bills(self, offset, limit).await
    }

    async fn search_bills(
        &self,
        query: &str,
        offset: u64,
        limit: u32,
    ) -> Result<UpstreamPage, AppError> {
        CongressClient::search_bills(self, query, offset, limit).await
    }

    async fn fetch_bill(
        &self,
        congress: u32,
        bill_type: &str,
        number: &str,
    ) -> Result<Value, AppError> {
        CongressClient::fetch_bill(self, congress, bill_type, number).await
    }
}

#[async_trait]
impl LegiScanDataSource for LegiScanClient {
    async fn fetch_bill(&self, bill_id: u64) -> Result<Value, AppError> {
        LegiScanClient::fetch_bill(self, bill_id).await
    }
}

pub struct BillService {
    pagination: PaginationConfig,
    congress: Arc<dyn CongressDataSource>,
    legiscan: Arc<dyn LegiScanDataSource>,
}

impl BillService {
    pub fn new(
        pagination: PaginationConfig,
        congress: Arc<dyn CongressDataSource>,
        legiscan: Arc<dyn LegiScanDataSource>,
    ) -> Self {
        Self {
            pagination,
            congress,
            legiscan,
        }
    }

    /// Fetches one page from the listing endpoint, or the search endpoint
    /// when `query` is set. Upstream failures degrade to an empty page; only
    /// invalid paging arguments are reported as errors.
    ///
    /// `has_more` is true whenever the page came back full. It says nothing
    /// about whether the upstream really holds further records.
    pub async fn list_bills(&self, args: ListBillsArgs) -> Result<BillPage, AppError> {
        let page = args.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::bad_request("page must be at least 1".to_string()));
        }
        let limit = args.limit.unwrap_or(self.pagination.default_limit);
        if limit == 0 {
            return Err(AppError::bad_request("limit must be at least 1".to_string()));
        }
        let limit = limit.min(self.pagination.max_limit);
        let offset = u64::from(page - 1) * u64::from(limit);

        let query = sanitise_optional_text(args.query);
        let status_filter = sanitise_optional_text(args.status);

        let upstream = match &query {
            Some(query) => self.congress.search_bills(query, offset, limit).await,
            None => self.congress.list_bills(offset, limit).await,
        };

        let upstream = match upstream {
            Ok(upstream) => upstream,
            Err(error) => {
                warn!(
                    target: "bills",
                    %error,
                    page,
                    limit,
                    "upstream unavailable, returning empty page"
                );
                return Ok(BillPage::empty(page, limit));
            }
        };

        let mut bills = aggregate(upstream.records.into_iter().filter_map(|value| {
            RawBill::congress_from_value(value)
                .map_err(|error| warn!(target: "bills", %error, "skipping undecodable bill record"))
                .ok()
        }));

        if let Some(filter) = &status_filter {
            bills.retain(|bill| matches_status(bill, filter));
        }

        let total = upstream.count.unwrap_or(bills.len() as u64);
        let has_more = bills.len() == limit as usize;

        debug!(
            target: "bills",
            page,
            limit,
            offset,
            returned = bills.len(),
            search = query.is_some(),
            "bill page assembled"
        );

        Ok(BillPage {
            bills,
            total,
            page,
            limit,
            has_more,
        })
    }

    pub async fn search_bills(&self, args: SearchBillsArgs) -> Result<BillPage, AppError> {
        let query = sanitise_optional_text(args.q)
            .ok_or_else(|| AppError::bad_request("query parameter `q` is required".to_string()))?;

        self.list_bills(ListBillsArgs {
            page: args.page,
            limit: args.limit,
            query: Some(query),
            status: args.status,
        })
        .await
    }

    pub async fn get_bill(
        &self,
        congress: u32,
        bill_type: &str,
        number: &str,
    ) -> Result<Bill, AppError> {
        let bill_type = bill_type.trim();
        let number = number.trim();

        if bill_type.is_empty() || !bill_type.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(AppError::bad_request(format!(
                "invalid bill type: {bill_type:?}"
            )));
        }
        if number.is_empty() || !number.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(AppError::bad_request(format!(
                "invalid bill number: {number:?}"
            )));
        }

        let raw = self.congress.fetch_bill(congress, bill_type, number).await?;
        Ok(normalize(&RawBill::congress_from_value(raw)?)?)
    }

    pub async fn get_legiscan_bill(&self, bill_id: u64) -> Result<Bill, AppError> {
        let raw = self.legiscan.fetch_bill(bill_id).await?;
        Ok(normalize(&RawBill::legiscan_from_value(raw)?)?)
    }
}

fn sanitise_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
