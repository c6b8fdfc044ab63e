use crate::error::QuoteError;
use staffquote_schemas::{
    benchmark::{CompRange, RoleBenchmark},
    engagement::{EngagementModel, ModelKey},
};

/// The read-only reference tables behind every quote: role compensation
/// benchmarks and the two engagement-fee models.
///
/// A catalog is assembled once at startup (built-in tables, optionally
/// overlaid with file data) and treated as immutable afterwards, so repeated
/// quote computations never observe different reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    benchmarks: Vec<RoleBenchmark>,
    recruit_only: EngagementModel,
    fully_managed: EngagementModel,
}

impl Catalog {
    /// The built-in benchmark and fee tables.
    pub fn builtin() -> Self {
        Self {
            benchmarks: vec![
                bench("SDR / BDR", 60_000, 80_000, 28_000, 35_000),
                bench("Customer Support (Bilingual)", 50_000, 65_000, 24_000, 32_000),
                bench("RevOps Analyst", 85_000, 110_000, 42_000, 60_000),
                bench("AP/AR Specialist", 55_000, 70_000, 26_000, 36_000),
                bench("Data Analyst", 90_000, 120_000, 45_000, 65_000),
                bench("QA Tester", 80_000, 100_000, 38_000, 52_000),
                bench("Executive Assistant (EN/ES)", 65_000, 90_000, 30_000, 42_000),
                bench("Marketing Ops", 85_000, 110_000, 42_000, 60_000),
            ],
            recruit_only: EngagementModel {
                key: ModelKey::RecruitOnly,
                label: "Recruit-Only".to_string(),
                fee_note: "10% of annual comp (50% deposit)".to_string(),
                fee_pct: 0.10,
            },
            fully_managed: EngagementModel {
                key: ModelKey::FullyManaged,
                label: "Fully Managed".to_string(),
                fee_note: "+35% on contractor take-home".to_string(),
                fee_pct: 0.35,
            },
        }
    }

    pub fn benchmarks(&self) -> &[RoleBenchmark] {
        &self.benchmarks
    }

    pub fn models(&self) -> [&EngagementModel; 2] {
        [&self.recruit_only, &self.fully_managed]
    }

    /// Looks up a benchmark by its exact display name.
    pub fn benchmark(&self, role: &str) -> Option<&RoleBenchmark> {
        self.benchmarks.iter().find(|b| b.role == role)
    }

    /// The first catalog entry, used when no role has been selected.
    pub fn default_benchmark(&self) -> &RoleBenchmark {
        // builtin() seeds the table, and upserts never remove entries.
        &self.benchmarks[0]
    }

    /// Fee-model lookup is total over the closed key set.
    pub fn model(&self, key: ModelKey) -> &EngagementModel {
        match key {
            ModelKey::RecruitOnly => &self.recruit_only,
            ModelKey::FullyManaged => &self.fully_managed,
        }
    }

    /// Replaces a same-named benchmark or appends a new one. Rejects
    /// inverted ranges.
    pub fn upsert_benchmark(&mut self, benchmark: RoleBenchmark) -> Result<(), QuoteError> {
        if benchmark.us_range.min > benchmark.us_range.max
            || benchmark.latin_range.min > benchmark.latin_range.max
        {
            return Err(QuoteError::ConfigError(format!(
                "Benchmark '{}' has an inverted compensation range",
                benchmark.role
            )));
        }
        match self.benchmarks.iter_mut().find(|b| b.role == benchmark.role) {
            Some(existing) => *existing = benchmark,
            None => self.benchmarks.push(benchmark),
        }
        Ok(())
    }

    /// Replaces the fee model with the same key. Rejects fees outside (0, 1).
    pub fn upsert_model(&mut self, model: EngagementModel) -> Result<(), QuoteError> {
        if !(model.fee_pct > 0.0 && model.fee_pct < 1.0) {
            return Err(QuoteError::ConfigError(format!(
                "Engagement model '{}' has fee_pct {} outside (0, 1)",
                model.label, model.fee_pct
            )));
        }
        match model.key {
            ModelKey::RecruitOnly => self.recruit_only = model,
            ModelKey::FullyManaged => self.fully_managed = model,
        }
        Ok(())
    }
}

fn bench(role: &str, us_min: u32, us_max: u32, latin_min: u32, latin_max: u32) -> RoleBenchmark {
    RoleBenchmark {
        role: role.to_string(),
        us_range: CompRange::new(us_min, us_max),
        latin_range: CompRange::new(latin_min, latin_max),
    }
}
