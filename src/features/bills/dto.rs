use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub title: String,
    pub description: String,
    pub introduced_date: NaiveDate,
    pub sponsor_name: String,
    pub jurisdiction: String,
    pub bill_number: String,
    pub status: String,
    pub last_action_date: Option<NaiveDate>,
    pub subjects: Vec<String>,
    pub sponsors: Vec<Sponsor>,
}

impl Bill {
    /// Sort key: the latest action date, or the introduction date when no
    /// action has been recorded.
    pub fn effective_date(&self) -> NaiveDate {
        self.last_action_date.unwrap_or(self.introduced_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub party: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPage {
    pub bills: Vec<Bill>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl BillPage {
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            bills: Vec::new(),
            total: 0,
            page,
            limit,
            has_more: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBillsArgs {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub query: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBillsArgs {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
}
