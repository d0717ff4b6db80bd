use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One bill as returned by the Congress.gov listing, search and detail
/// endpoints. Identity fields stay loosely typed because the API mixes
/// numbers and strings for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongressBillRecord {
    pub congress: Option<Value>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub number: Option<Value>,
    pub title: Option<String>,
    pub latest_action: Option<LatestAction>,
    pub update_date: Option<String>,
    pub introduced_date: Option<String>,
    pub sponsors: Option<Vec<CongressSponsor>>,
    pub policy_area: Option<PolicyArea>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestAction {
    pub text: Option<String>,
    pub action_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongressSponsor {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub party: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyArea {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub count: Option<u64>,
}

/// `GET /bill`
#[derive(Debug, Default, Deserialize)]
pub struct CongressListEnvelope {
    #[serde(default)]
    pub bills: Vec<Value>,
    pub pagination: Option<Pagination>,
}

/// `GET /search/bill`
#[derive(Debug, Default, Deserialize)]
pub struct CongressSearchEnvelope {
    #[serde(default)]
    pub results: Vec<Value>,
    pub pagination: Option<Pagination>,
}

/// `GET /bill/{congress}/{type}/{number}`
#[derive(Debug, Deserialize)]
pub struct CongressDetailEnvelope {
    pub bill: Value,
}

/// Raw records of one upstream page, before normalization.
#[derive(Debug, Clone, Default)]
pub struct UpstreamPage {
    pub records: Vec<Value>,
    pub count: Option<u64>,
}
