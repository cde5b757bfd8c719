//! Generator configuration
//!
//! Field names match the deployment config file keys, so the same JSON
//! that drives a deployment deserializes directly. Each key is also
//! accepted in its all-lowercase form, which is what layered
//! configuration sources (files merged with environment overrides)
//! hand to serde.

use serde::{Deserialize, Serialize};

/// Capacity threshold applied when `MaxWidgetsPerDashboard` is absent or
/// zero.
pub const DEFAULT_MAX_WIDGETS: usize = 200;

/// Hard upper bound on resources aggregated into one compact widget.
pub const COMPACT_RESOURCE_CAP: usize = 100;

/// Options recognized by the dashboard generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Prefix for every generated dashboard and alarm name. Must be
    /// stable across runs so re-synthesis does not rename resources.
    #[serde(rename = "BaseName", alias = "basename", default = "default_base_name")]
    pub base_name: String,

    /// Capacity threshold for the packing engine; zero means unset.
    #[serde(
        rename = "MaxWidgetsPerDashboard",
        alias = "maxwidgetsperdashboard",
        default
    )]
    pub max_widgets_per_dashboard: usize,

    /// When non-empty, group-eligible resources get one dashboard per
    /// value of this tag.
    #[serde(rename = "GroupingTagKey", alias = "groupingtagkey", default)]
    pub grouping_tag_key: Option<String>,

    /// Batch/aggregate rendering for high-cardinality services.
    #[serde(rename = "Compact", alias = "compact", default)]
    pub compact: bool,

    /// Resources aggregated into one compact widget, capped at
    /// [`COMPACT_RESOURCE_CAP`].
    #[serde(
        rename = "CompactMaxResourcesPerWidget",
        alias = "compactmaxresourcesperwidget",
        default
    )]
    pub compact_max_resources_per_widget: usize,

    /// Tag keys whose values are appended to EC2 widget titles.
    #[serde(rename = "CustomEC2TagKeys", alias = "customec2tagkeys", default)]
    pub custom_ec2_tag_keys: Vec<String>,

    /// SNS topic ARN every generated alarm notifies, when set.
    #[serde(rename = "AlarmTopic", alias = "alarmtopic", default)]
    pub alarm_topic: Option<String>,
}

fn default_base_name() -> String {
    "Fleetboard".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_name: default_base_name(),
            max_widgets_per_dashboard: 0,
            grouping_tag_key: None,
            compact: false,
            compact_max_resources_per_widget: 0,
            custom_ec2_tag_keys: Vec::new(),
            alarm_topic: None,
        }
    }
}

impl GeneratorConfig {
    /// Effective packing threshold (absent or zero falls back to the
    /// default).
    pub fn max_widgets(&self) -> usize {
        if self.max_widgets_per_dashboard == 0 {
            DEFAULT_MAX_WIDGETS
        } else {
            self.max_widgets_per_dashboard
        }
    }

    /// Grouping tag key when grouping is enabled (non-empty key).
    pub fn grouping_tag(&self) -> Option<&str> {
        self.grouping_tag_key.as_deref().filter(|k| !k.is_empty())
    }

    /// Effective compact batch size: configured value capped at
    /// [`COMPACT_RESOURCE_CAP`], never below one.
    pub fn resources_per_widget(&self) -> usize {
        self.compact_max_resources_per_widget
            .clamp(1, COMPACT_RESOURCE_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_widgets_falls_back_to_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_widgets(), DEFAULT_MAX_WIDGETS);

        let config = GeneratorConfig {
            max_widgets_per_dashboard: 50,
            ..Default::default()
        };
        assert_eq!(config.max_widgets(), 50);
    }

    #[test]
    fn empty_grouping_key_disables_grouping() {
        let config = GeneratorConfig {
            grouping_tag_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.grouping_tag(), None);

        let config = GeneratorConfig {
            grouping_tag_key: Some("Service".into()),
            ..Default::default()
        };
        assert_eq!(config.grouping_tag(), Some("Service"));
    }

    #[test]
    fn compact_batch_size_is_capped() {
        let mut config = GeneratorConfig::default();
        config.compact_max_resources_per_widget = 500;
        assert_eq!(config.resources_per_widget(), COMPACT_RESOURCE_CAP);

        config.compact_max_resources_per_widget = 0;
        assert_eq!(config.resources_per_widget(), 1);

        config.compact_max_resources_per_widget = 25;
        assert_eq!(config.resources_per_widget(), 25);
    }

    #[test]
    fn deserializes_deployment_keys() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{
                "BaseName": "Prod",
                "MaxWidgetsPerDashboard": 120,
                "GroupingTagKey": "CostCenter",
                "Compact": true,
                "CompactMaxResourcesPerWidget": 40,
                "CustomEC2TagKeys": ["Team"],
                "AlarmTopic": "arn:aws:sns:eu-west-1:123456789012:alerts"
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_name, "Prod");
        assert_eq!(config.max_widgets(), 120);
        assert!(config.compact);
        assert_eq!(config.resources_per_widget(), 40);
        assert_eq!(config.custom_ec2_tag_keys, vec!["Team".to_string()]);
    }

    #[test]
    fn deserializes_lowercased_keys() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{
                "basename": "Prod",
                "maxwidgetsperdashboard": 120,
                "groupingtagkey": "CostCenter",
                "compact": true,
                "alarmtopic": "arn:aws:sns:eu-west-1:123456789012:alerts"
            }"#,
        )
        .unwrap();
        assert_eq!(config.base_name, "Prod");
        assert_eq!(config.max_widgets(), 120);
        assert_eq!(config.grouping_tag(), Some("CostCenter"));
        assert!(config.compact);
        assert_eq!(
            config.alarm_topic.as_deref(),
            Some("arn:aws:sns:eu-west-1:123456789012:alerts")
        );
    }
}
