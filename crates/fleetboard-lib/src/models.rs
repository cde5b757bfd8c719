//! Discovered resource records
//!
//! Input to the generator is a JSON array produced by an external
//! discovery collector. Records carry the identifying `ResourceARN`, an
//! optional tag list and arbitrary service-specific fields (instance
//! metadata, function configuration, cluster info). The service-specific
//! fields are kept as raw JSON and read through tolerant accessors so a
//! renderer can degrade when a field is absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resource tag as emitted by the tagging API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One discovered resource, owned by the discovery collaborator.
///
/// `resource_arn` is optional at parse time; classification rejects the
/// whole input when any record lacks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "ResourceARN", default, skip_serializing_if = "Option::is_none")]
    pub resource_arn: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Present on RDS/Aurora records; its presence disambiguates Aurora
    /// clusters from other `:rds:` ARNs.
    #[serde(rename = "Engine", default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Collector `type` discriminator: the protocol for API Gateway v2
    /// records (`WEBSOCKET`/`HTTP`), the billing mode for table records.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>,

    /// Everything else the collector attached (e.g. `Configuration`,
    /// `Instance`, `cluster`), kept verbatim.
    #[serde(flatten)]
    pub extras: serde_json::Map<String, Value>,
}

impl ResourceRecord {
    /// Bare record with only an ARN, the minimal valid input shape.
    pub fn from_arn(arn: impl Into<String>) -> Self {
        Self {
            resource_arn: Some(arn.into()),
            tags: Vec::new(),
            engine: None,
            api_type: None,
            extras: serde_json::Map::new(),
        }
    }

    /// The identifying ARN, empty when absent. Callers past
    /// classification can rely on it being non-empty.
    pub fn arn(&self) -> &str {
        self.resource_arn.as_deref().unwrap_or("")
    }

    /// Value of the tag with the given key, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// The conventional `Name` tag.
    pub fn name_tag(&self) -> Option<&str> {
        self.tag("Name")
    }

    /// Look up a dotted path in the service-specific extras, e.g.
    /// `Configuration.MemorySize` or `Instance.Placement.AvailabilityZone`.
    pub fn extra(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.extras.get(segments.next()?)?;
        for segment in segments {
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// String field from the extras, `None` when absent or not a string.
    pub fn extra_str(&self, path: &str) -> Option<&str> {
        self.extra(path).and_then(Value::as_str)
    }

    /// Numeric field from the extras.
    pub fn extra_u64(&self, path: &str) -> Option<u64> {
        self.extra(path).and_then(Value::as_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_collector_record() {
        let record: ResourceRecord = serde_json::from_str(
            r#"{
                "ResourceARN": "arn:aws:lambda:eu-west-1:123456789012:function:orders",
                "Tags": [{"Key": "Name", "Value": "orders"}],
                "Configuration": {"MemorySize": 512, "Runtime": "python3.12"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            record.arn(),
            "arn:aws:lambda:eu-west-1:123456789012:function:orders"
        );
        assert_eq!(record.name_tag(), Some("orders"));
        assert_eq!(record.extra_u64("Configuration.MemorySize"), Some(512));
        assert_eq!(
            record.extra_str("Configuration.Runtime"),
            Some("python3.12")
        );
    }

    #[test]
    fn missing_fields_are_tolerated() {
        let record: ResourceRecord = serde_json::from_str("{}").unwrap();
        assert!(record.resource_arn.is_none());
        assert!(record.tags.is_empty());
        assert_eq!(record.extra("Instance.InstanceType"), None);
        assert_eq!(record.tag("anything"), None);
    }

    #[test]
    fn extras_round_trip() {
        let record = ResourceRecord::from_arn("arn:aws:sqs:eu-west-1:123456789012:queue");
        let json = serde_json::to_string(&record).unwrap();
        let back: ResourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.arn(), record.arn());
    }
}
