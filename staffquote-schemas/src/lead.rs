use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contact details collected alongside a quote request. Email, company, and
/// consent gate submission; the start date is informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub consent: bool,
}
