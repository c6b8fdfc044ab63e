use serde::{Deserialize, Serialize};

/// An annual compensation range in whole US dollars. Catalog data satisfies
/// `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompRange {
    pub min: u32,
    pub max: u32,
}

impl CompRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Arithmetic mean of the two bounds.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// A role's paired compensation reference data: the US market range and the
/// Latin America labor-pool range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBenchmark {
    pub role: String,
    pub us_range: CompRange,
    pub latin_range: CompRange,
}
