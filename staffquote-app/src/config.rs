use anyhow::{Context, Result};
use serde::Deserialize;
use staffquote_core::catalog::Catalog;
use staffquote_schemas::{
    engagement::ModelKey,
    file_formats::{BenchmarkFile, EngagementModelFile},
    lead::LeadForm,
};
use std::fs;

/// A quote request as read from the YAML request file.
#[derive(Debug, Deserialize)]
pub struct RequestFile {
    /// Catalog role to quote. Ignored when `custom_role` is non-blank.
    #[serde(default)]
    pub role: Option<String>,
    /// Free-text role; takes precedence over `role` when non-blank.
    #[serde(default)]
    pub custom_role: String,
    pub seats: i64,
    pub model: ModelKey,
    pub lead: LeadForm,
}

/// Builds the working catalog: built-in tables, optionally overlaid with
/// YAML files from a data directory. Overlay entries replace same-named
/// roles and same-keyed models; new roles are appended.
pub fn load_catalog(overlay_dir: Option<&str>) -> Result<Catalog> {
    let mut catalog = Catalog::builtin();
    let Some(dir) = overlay_dir else {
        return Ok(catalog);
    };

    println!("Loading catalog overlays from '{}'...", dir);
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir))?
    {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !path.extension().map_or(false, |s| s == "yaml" || s == "yml") {
            continue;
        }
        let content = fs::read_to_string(&path)?;
        apply_overlay(&mut catalog, &content)
            .with_context(|| format!("Failed to apply catalog overlay {:?}", path))?;
    }
    println!(
        "Catalog ready: {} roles, {} fee models.",
        catalog.benchmarks().len(),
        catalog.models().len()
    );
    Ok(catalog)
}

/// Each overlay file carries exactly one wrapper kind: a `benchmarks` table
/// or a `models` table.
fn apply_overlay(catalog: &mut Catalog, content: &str) -> Result<()> {
    if let Ok(file) = serde_yaml::from_str::<BenchmarkFile>(content) {
        for benchmark in file.benchmarks {
            catalog.upsert_benchmark(benchmark)?;
        }
        return Ok(());
    }
    let file: EngagementModelFile =
        serde_yaml::from_str(content).context("Expected a benchmarks or models table")?;
    for model in file.models {
        catalog.upsert_model(model)?;
    }
    Ok(())
}
