use crate::benchmark::CompRange;
use crate::engagement::ModelKey;
use serde::{Deserialize, Serialize};

/// The complete set of derived figures for a quote request. Never mutated
/// independently; always recomputed from the benchmark, seat count, and
/// engagement model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub role: String,
    pub seats: u32,
    pub model: ModelKey,
    pub us_range: CompRange,
    pub latin_range: CompRange,
    pub us_avg: f64,
    pub latin_avg: f64,
    /// Absolute savings vs the US average. Negative when the Latin America
    /// range exceeds the US range.
    pub savings: f64,
    /// Savings as a percentage of the US average, rounded to the nearest
    /// integer. Zero when the US average is zero.
    pub savings_pct: i64,
    /// Annual service fee per seat, rounded to whole dollars.
    pub annual_service: f64,
    /// Latin America average plus the rounded service fee. Not rounded again.
    pub total_per_seat: f64,
    pub team_annual: f64,
}
