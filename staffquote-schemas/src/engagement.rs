use serde::{Deserialize, Serialize};

/// Identifier for one of the two fixed engagement-fee structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKey {
    RecruitOnly,
    FullyManaged,
}

impl ModelKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKey::RecruitOnly => "recruit_only",
            ModelKey::FullyManaged => "fully_managed",
        }
    }
}

/// A fee structure applied on top of Latin America take-home compensation.
/// `fee_pct` is a fraction in (0, 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementModel {
    pub key: ModelKey,
    pub label: String,
    pub fee_note: String,
    pub fee_pct: f64,
}
