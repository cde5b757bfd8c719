//! Classification preview command

use anyhow::{Context, Result};
use fleetboard_lib::{classify, ResourceRecord};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::output::{print_rows, print_warning, OutputFormat};

/// Row for the classification summary table
#[derive(Tabled, Serialize)]
struct BucketRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Resources")]
    resources: usize,
}

/// Show how the resource dump buckets by region and service.
pub fn run(input: &Path, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read resource dump {}", input.display()))?;
    let resources: Vec<ResourceRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resource dump {}", input.display()))?;
    let total = resources.len();

    let buckets = classify(resources)?;

    let mut rows = Vec::new();
    for (region, services) in &buckets {
        for (kind, records) in services {
            rows.push(BucketRow {
                region: region.clone(),
                service: kind.label().to_string(),
                resources: records.len(),
            });
        }
    }
    let classified: usize = rows.iter().map(|r| r.resources).sum();

    print_rows(&rows, format);
    if classified < total {
        print_warning(&format!(
            "{} of {} resources did not match any known service",
            total - classified,
            total
        ));
    }
    Ok(())
}
