use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegiScanBillRecord {
    pub bill_id: Option<Value>,
    pub bill_number: Option<String>,
    pub state: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub introduced: Option<String>,
    pub status_desc: Option<String>,
    pub status_date: Option<String>,
    pub sponsors: Option<Vec<LegiScanSponsor>>,
    pub subjects: Option<Vec<LegiScanSubject>>,
    pub history: Option<Vec<LegiScanHistoryEntry>>,
    pub texts: Option<Vec<Value>>,
    pub committee: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegiScanSponsor {
    pub name: Option<String>,
    pub party: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegiScanSubject {
    pub subject_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegiScanHistoryEntry {
    pub date: Option<String>,
    pub action: Option<String>,
}

/// `?op=getBill` response.
#[derive(Debug, Deserialize)]
pub struct LegiScanEnvelope {
    pub status: String,
    pub bill: Option<Value>,
    pub alert: Option<LegiScanAlert>,
}

#[derive(Debug, Deserialize)]
pub struct LegiScanAlert {
    pub message: Option<String>,
}
