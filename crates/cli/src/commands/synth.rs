//! Dashboard synthesis command

use anyhow::{Context, Result};
use chrono::Utc;
use fleetboard_lib::{generate, GeneratorConfig, ResourceRecord};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tabled::Tabled;
use tracing::info;

use crate::output::{print_rows, print_success, OutputFormat};

/// Row for the synthesis summary table
#[derive(Tabled, Serialize)]
struct DashboardRow {
    #[tabled(rename = "Dashboard")]
    name: String,
    #[tabled(rename = "Widgets")]
    widgets: usize,
}

/// Generate dashboard bodies and alarms, writing one JSON file per
/// dashboard plus `alarms.json` and a `manifest.json` into `out_dir`.
pub fn run(
    input: &Path,
    out_dir: &Path,
    config: &GeneratorConfig,
    format: OutputFormat,
) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read resource dump {}", input.display()))?;
    let resources: Vec<ResourceRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse resource dump {}", input.display()))?;
    info!(resources = resources.len(), "Loaded resource dump");

    let plan = generate(resources, config)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut rows = Vec::new();
    for dashboard in &plan.dashboards {
        let path = out_dir.join(format!("{}.json", dashboard.name));
        let body = serde_json::to_string_pretty(&dashboard.to_body())?;
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        rows.push(DashboardRow {
            name: dashboard.name.clone(),
            widgets: dashboard.widget_count(),
        });
    }

    let alarms_path = out_dir.join("alarms.json");
    std::fs::write(&alarms_path, serde_json::to_string_pretty(&plan.alarms)?)
        .with_context(|| format!("Failed to write {}", alarms_path.display()))?;

    let manifest = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "base_name": config.base_name,
        "dashboards": plan.dashboards.iter().map(|d| &d.name).collect::<Vec<_>>(),
        "alarm_count": plan.alarms.len(),
    });
    let manifest_path = out_dir.join("manifest.json");
    std::fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    print_rows(&rows, format);
    print_success(&format!(
        "Wrote {} dashboards and {} alarms to {}",
        plan.dashboards.len(),
        plan.alarms.len(),
        out_dir.display()
    ));
    Ok(())
}
