//! Category/group dashboard registry
//!
//! Some services get their own dashboard family instead of flowing into
//! the primary sequence: EC2 and Lambda (optionally split per grouping
//! tag value), Network (transit/NAT gateways), Edge (CloudFront, WAF)
//! and compact-mode groups. The registry hands out one capacity manager
//! per key with get-or-create semantics, so every family is subject to
//! the same packing rules as the primary sequence.
//!
//! Dashboard identity is a pure function of (base name, category, group):
//! repeated runs over unchanged input produce identical names.

use super::{Dashboard, DashboardManager};
use crate::widgets::Widget;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Identity of a registry dashboard family.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DashboardKey {
    /// Service category label, e.g. `EC2`, `Lambda`, `Network`, `Edge`.
    pub category: String,
    /// Grouping-tag value (or compact group id); `None` is the shared
    /// ungrouped dashboard for the category.
    pub group: Option<String>,
}

impl DashboardKey {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            group: None,
        }
    }

    pub fn grouped(category: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            group: Some(group.into()),
        }
    }
}

pub struct DashboardRegistry {
    base_name: String,
    max_widgets: usize,
    managers: BTreeMap<DashboardKey, DashboardManager>,
}

impl DashboardRegistry {
    pub fn new(base_name: impl Into<String>, max_widgets: usize) -> Self {
        Self {
            base_name: base_name.into(),
            max_widgets,
            managers: BTreeMap::new(),
        }
    }

    fn dashboard_name(&self, key: &DashboardKey) -> String {
        match &key.group {
            Some(group) => format!("{}-{}-Dashboard-{}", self.base_name, key.category, group),
            None => format!("{}-{}-Dashboard", self.base_name, key.category),
        }
    }

    /// Manager for `key`, created lazily. On creation the optional
    /// header widget is placed first, before any resource widgets.
    pub fn get_or_create(
        &mut self,
        key: DashboardKey,
        header: Option<Widget>,
    ) -> &mut DashboardManager {
        let name = self.dashboard_name(&key);
        match self.managers.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(dashboard = %name, "Creating dashboard");
                let mut manager = DashboardManager::new(name, self.max_widgets);
                if let Some(widget) = header {
                    manager.add_widget(widget);
                }
                entry.insert(manager)
            }
        }
    }

    pub fn contains(&self, key: &DashboardKey) -> bool {
        self.managers.contains_key(key)
    }

    /// All registry dashboards in key order (deterministic across runs).
    pub fn finish(self) -> Vec<Dashboard> {
        self.managers
            .into_values()
            .flat_map(DashboardManager::finish)
            .collect()
    }
}
