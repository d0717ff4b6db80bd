//! Default values substituted when upstream records omit data.

use chrono::NaiveDate;

pub const UNKNOWN_SPONSOR: &str = "Unknown Sponsor";
pub const UNKNOWN_STATUS: &str = "Unknown";
pub const UNTITLED_BILL: &str = "Untitled";
pub const DEFAULT_JURISDICTION: &str = "US";

pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const STATUS_MAX_CHARS: usize = 50;
pub const ELLIPSIS: &str = "...";

pub const ID_SEPARATOR: &str = "-";
pub const LEGISCAN_ID_PREFIX: &str = "legiscan";

/// Used for `introducedDate` when a record carries no parseable date at all.
pub fn fallback_introduced_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}
