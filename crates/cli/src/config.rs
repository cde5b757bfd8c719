//! Generator configuration loading
//!
//! The config file uses the same keys as the deployment config
//! (`BaseName`, `MaxWidgetsPerDashboard`, ...), so one JSON file drives
//! both. Values can be overridden through `FLEETBOARD_`-prefixed
//! environment variables (`FLEETBOARD_BASENAME`, `FLEETBOARD_COMPACT`,
//! ...). A file that fails to read or carries a malformed value aborts
//! the run rather than falling back to defaults.

use anyhow::{Context, Result};
use fleetboard_lib::GeneratorConfig;
use std::path::Path;

/// Load the generator config, falling back to defaults when no file and
/// no overrides are given.
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(
            config::File::from(path).format(config::FileFormat::Json),
        );
    }
    let settings = builder
        .add_source(
            config::Environment::with_prefix("FLEETBOARD").try_parsing(true),
        )
        .build()
        .context("Failed to load generator config")?;

    settings
        .try_deserialize()
        .with_context(|| match path {
            Some(path) => format!("Failed to parse generator config {}", path.display()),
            None => "Failed to parse generator config overrides".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_a_file() {
        let config = load(None).unwrap();
        assert_eq!(config.base_name, "Fleetboard");
        assert!(!config.compact);
    }

    #[test]
    fn reads_deployment_keys_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"BaseName": "Prod", "MaxWidgetsPerDashboard": 120, "Compact": true}}"#
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.base_name, "Prod");
        assert_eq!(config.max_widgets(), 120);
        assert!(config.compact);
    }

    #[test]
    fn environment_overrides_are_read() {
        std::env::set_var("FLEETBOARD_GROUPINGTAGKEY", "CostCenter");
        let config = load(None).unwrap();
        std::env::remove_var("FLEETBOARD_GROUPINGTAGKEY");
        assert_eq!(config.grouping_tag(), Some("CostCenter"));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"MaxWidgetsPerDashboard": "lots"}}"#).unwrap();

        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse generator config"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/fleetboard.json"))).unwrap_err();
        assert!(err.to_string().contains("generator config"));
    }
}
