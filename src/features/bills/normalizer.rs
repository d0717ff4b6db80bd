use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::features::bills::constants::{
    DEFAULT_JURISDICTION, DESCRIPTION_MAX_CHARS, ELLIPSIS, ID_SEPARATOR, LEGISCAN_ID_PREFIX,
    STATUS_MAX_CHARS, UNKNOWN_SPONSOR, UNKNOWN_STATUS, UNTITLED_BILL, fallback_introduced_date,
};
use crate::features::bills::dto::{Bill, Sponsor};
use crate::features::congress::dto::CongressBillRecord;
use crate::features::legiscan::dto::LegiScanBillRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing identity field `{0}`")]
    MissingField(&'static str),
    #[error("malformed {provider} record: {message}")]
    Malformed {
        provider: &'static str,
        message: String,
    },
}

/// A bill record in one of the upstream provider shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBill {
    Congress(CongressBillRecord),
    LegiScan(LegiScanBillRecord),
}

impl RawBill {
    pub fn congress_from_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map(Self::Congress)
            .map_err(|err| ValidationError::Malformed {
                provider: "congress",
                message: err.to_string(),
            })
    }

    pub fn legiscan_from_value(value: Value) -> Result<Self, ValidationError> {
        serde_json::from_value(value)
            .map(Self::LegiScan)
            .map_err(|err| ValidationError::Malformed {
                provider: "legiscan",
                message: err.to_string(),
            })
    }
}

pub fn normalize(raw: &RawBill) -> Result<Bill, ValidationError> {
    match raw {
        RawBill::Congress(record) => normalize_congress(record),
        RawBill::LegiScan(record) => normalize_legiscan(record),
    }
}

fn normalize_congress(record: &CongressBillRecord) -> Result<Bill, ValidationError> {
    let congress =
        value_to_string(record.congress.as_ref()).ok_or(ValidationError::MissingField("congress"))?;
    let bill_type =
        non_blank(record.bill_type.as_deref()).ok_or(ValidationError::MissingField("type"))?;
    let number =
        value_to_string(record.number.as_ref()).ok_or(ValidationError::MissingField("number"))?;

    let type_slug = bill_type.to_lowercase();
    let id = [congress.as_str(), type_slug.as_str(), number.as_str()].join(ID_SEPARATOR);
    let title = non_blank(record.title.as_deref()).unwrap_or_else(|| UNTITLED_BILL.to_string());

    let latest_action = record.latest_action.as_ref();
    let last_action_date = latest_action
        .and_then(|action| action.action_date.as_deref())
        .and_then(parse_date);
    let introduced_date = [
        record.introduced_date.as_deref(),
        record.update_date.as_deref(),
        latest_action.and_then(|action| action.action_date.as_deref()),
    ]
    .into_iter()
    .flatten()
    .find_map(parse_date)
    .unwrap_or_else(fallback_introduced_date);

    let sponsors: Vec<Sponsor> = record
        .sponsors
        .iter()
        .flatten()
        .filter_map(|sponsor| {
            let name = non_blank(sponsor.full_name.as_deref()).or_else(|| {
                let joined = [sponsor.first_name.as_deref(), sponsor.last_name.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                non_blank(Some(joined.as_str()))
            })?;
            Some(Sponsor {
                name,
                party: non_blank(sponsor.party.as_deref()),
            })
        })
        .collect();

    let subjects = record
        .policy_area
        .as_ref()
        .and_then(|area| non_blank(area.name.as_deref()))
        .into_iter()
        .collect();

    Ok(Bill {
        id,
        description: derive_description(&title),
        title,
        introduced_date,
        sponsor_name: primary_sponsor_name(&sponsors),
        jurisdiction: DEFAULT_JURISDICTION.to_string(),
        bill_number: format!("{} {}", bill_type.to_uppercase(), number),
        status: bounded_status(latest_action.and_then(|action| action.text.as_deref())),
        last_action_date,
        subjects,
        sponsors,
    })
}

fn normalize_legiscan(record: &LegiScanBillRecord) -> Result<Bill, ValidationError> {
    let bill_id =
        value_to_string(record.bill_id.as_ref()).ok_or(ValidationError::MissingField("bill_id"))?;

    let title = non_blank(record.title.as_deref()).unwrap_or_else(|| UNTITLED_BILL.to_string());
    let description =
        non_blank(record.description.as_deref()).unwrap_or_else(|| derive_description(&title));

    let history = record.history.as_deref().unwrap_or_default();
    let latest_history_date = history
        .iter()
        .rev()
        .find_map(|entry| entry.date.as_deref().and_then(parse_date));
    let latest_history_action = history
        .iter()
        .rev()
        .find_map(|entry| non_blank(entry.action.as_deref()));

    let introduced_date = record
        .introduced
        .as_deref()
        .and_then(parse_date)
        .or_else(|| {
            history
                .iter()
                .find_map(|entry| entry.date.as_deref().and_then(parse_date))
        })
        .or_else(|| record.status_date.as_deref().and_then(parse_date))
        .unwrap_or_else(fallback_introduced_date);
    let last_action_date = record
        .status_date
        .as_deref()
        .and_then(parse_date)
        .or(latest_history_date);

    let status_text = non_blank(record.status_desc.as_deref()).or(latest_history_action);

    let sponsors: Vec<Sponsor> = record
        .sponsors
        .iter()
        .flatten()
        .filter_map(|sponsor| {
            Some(Sponsor {
                name: non_blank(sponsor.name.as_deref())?,
                party: non_blank(sponsor.party.as_deref()),
            })
        })
        .collect();

    let subjects = record
        .subjects
        .iter()
        .flatten()
        .filter_map(|subject| non_blank(subject.subject_name.as_deref()))
        .collect();

    Ok(Bill {
        id: [LEGISCAN_ID_PREFIX, bill_id.as_str()].join(ID_SEPARATOR),
        title,
        description,
        introduced_date,
        sponsor_name: primary_sponsor_name(&sponsors),
        jurisdiction: non_blank(record.state.as_deref())
            .unwrap_or_else(|| DEFAULT_JURISDICTION.to_string()),
        bill_number: non_blank(record.bill_number.as_deref()).unwrap_or(bill_id),
        status: bounded_status(status_text.as_deref()),
        last_action_date,
        subjects,
        sponsors,
    })
}

/// Fallback description for providers without a summary: the leading
/// characters of the title followed by an ellipsis.
pub fn derive_description(title: &str) -> String {
    let mut description: String = title.chars().take(DESCRIPTION_MAX_CHARS).collect();
    description.push_str(ELLIPSIS);
    description
}

pub fn bounded_status(text: Option<&str>) -> String {
    match non_blank(text) {
        Some(text) => {
            let truncated: String = text.chars().take(STATUS_MAX_CHARS).collect();
            truncated.trim_end().to_string()
        }
        None => UNKNOWN_STATUS.to_string(),
    }
}

/// Normalizes a batch, skipping records that fail validation and dropping
/// repeated ids, then sorts newest first.
pub fn aggregate<I>(records: I) -> Vec<Bill>
where
    I: IntoIterator<Item = RawBill>,
{
    let mut seen = HashSet::new();
    let mut bills = Vec::new();

    for record in records {
        match normalize(&record) {
            Ok(bill) => {
                if seen.insert(bill.id.clone()) {
                    bills.push(bill);
                }
            }
            Err(error) => {
                warn!(target: "bills", %error, "skipping malformed bill record");
            }
        }
    }

    sort_bills(&mut bills);
    bills
}

pub fn sort_bills(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
}

pub fn matches_status(bill: &Bill, filter: &str) -> bool {
    bill.status.to_lowercase().contains(&filter.to_lowercase())
}

fn primary_sponsor_name(sponsors: &[Sponsor]) -> String {
    sponsors
        .first()
        .map(|sponsor| sponsor.name.clone())
        .unwrap_or_else(|| UNKNOWN_SPONSOR.to_string())
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let iso = trimmed.get(..10).unwrap_or(trimmed);

    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn value_to_string(value: Option<&Value>) -> Option<String> {
    value.and_then(|item| {
        if let Some(text) = item.as_str() {
            non_blank(Some(text))
        } else if let Some(number) = item.as_u64() {
            Some(number.to_string())
        } else {
            item.as_i64().map(|number| number.to_string())
        }
    })
}
