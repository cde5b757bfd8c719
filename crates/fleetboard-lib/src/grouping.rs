//! Tag-based resource grouping
//!
//! When a grouping tag key is configured, group-eligible resources are
//! routed to one dashboard per tag value; everything else falls back to
//! the shared ungrouped dashboard for its service. Tag values are
//! normalized (whitespace stripped) before they become part of a
//! dashboard name.

use crate::classify::ServiceKind;
use crate::models::ResourceRecord;
use std::collections::BTreeMap;

/// Compact-mode bucket for resources with no matching grouping tag.
pub const DEFAULT_GROUP: &str = "default";

/// Services that participate in per-tag-value dashboards.
pub fn is_group_eligible(kind: ServiceKind) -> bool {
    matches!(kind, ServiceKind::Ec2Instance | ServiceKind::Lambda)
}

/// Strip all whitespace from a tag value so it is safe inside a
/// dashboard name.
pub fn normalize_group(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalized grouping value for a resource, `None` when it carries no
/// matching tag (or the tag value normalizes to nothing).
pub fn group_value(resource: &ResourceRecord, tag_key: &str) -> Option<String> {
    resource
        .tag(tag_key)
        .map(normalize_group)
        .filter(|v| !v.is_empty())
}

/// Partition records into compact-mode groups: by normalized tag value
/// when a grouping key is configured, otherwise everything lands in
/// [`DEFAULT_GROUP`]. Within each group, input order is preserved.
pub fn partition_by_group(
    records: Vec<ResourceRecord>,
    tag_key: Option<&str>,
) -> BTreeMap<String, Vec<ResourceRecord>> {
    let mut groups: BTreeMap<String, Vec<ResourceRecord>> = BTreeMap::new();
    for record in records {
        let group = tag_key
            .and_then(|key| group_value(&record, key))
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());
        groups.entry(group).or_default().push(record);
    }
    groups
}
