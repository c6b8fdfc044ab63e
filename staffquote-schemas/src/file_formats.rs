use crate::{benchmark::RoleBenchmark, engagement::EngagementModel};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BenchmarkFile {
    pub schema_version: String,
    pub benchmarks: Vec<RoleBenchmark>,
}

#[derive(Debug, Deserialize)]
pub struct EngagementModelFile {
    pub schema_version: String,
    pub models: Vec<EngagementModel>,
}
