//! Widget capacity packing across a sequence of dashboards
//!
//! The manager streams widget sets into dashboard containers, opening a
//! new container whenever the next addition would push the current one
//! past the configured threshold. A widget set is never split: a set
//! larger than the threshold lands alone on a freshly opened dashboard
//! which then exceeds the cap, trading strict enforcement for placement
//! atomicity.

use super::Dashboard;
use crate::alarms::Alarm;
use crate::widgets::{Widget, WidgetSet};
use tracing::debug;

pub struct DashboardManager {
    base_name: String,
    max_widgets: usize,
    /// Dashboards already at capacity, in creation order.
    completed: Vec<Dashboard>,
    current: Dashboard,
    current_count: usize,
    sequence: usize,
}

impl DashboardManager {
    /// Opens the first dashboard (sequence 0) named `base_name`;
    /// overflow dashboards are named `{base_name}-{sequence}`.
    pub fn new(base_name: impl Into<String>, max_widgets: usize) -> Self {
        let base_name = base_name.into();
        let current = Dashboard::new(base_name.clone());
        Self {
            base_name,
            max_widgets,
            completed: Vec::new(),
            current,
            current_count: 0,
            sequence: 0,
        }
    }

    /// Open a new dashboard if the pending addition would exceed the
    /// threshold. Never splits the pending addition itself.
    fn ensure_capacity(&mut self, incoming: usize) {
        if self.current_count + incoming > self.max_widgets {
            self.sequence += 1;
            let name = format!("{}-{}", self.base_name, self.sequence);
            debug!(
                dashboard = %name,
                pending = incoming,
                placed = self.current_count,
                "Opening overflow dashboard"
            );
            let full = std::mem::replace(&mut self.current, Dashboard::new(name));
            self.completed.push(full);
            self.current_count = 0;
        }
    }

    /// Place a widget set whole on the current dashboard, overflowing
    /// first if needed. Returns the set's alarms for the caller's
    /// accumulator.
    pub fn add_widget_set(&mut self, widget_set: WidgetSet) -> Vec<Alarm> {
        self.ensure_capacity(widget_set.widget_count());
        self.current_count += widget_set.widget_count();
        for row in widget_set.rows {
            self.current.add_row(row);
        }
        widget_set.alarms
    }

    /// Place a single widget. Counts toward capacity exactly like the
    /// batch path.
    pub fn add_widget(&mut self, widget: impl Into<Widget>) {
        self.ensure_capacity(1);
        self.current_count += 1;
        self.current.add_widget(widget);
    }

    /// Index of the dashboard currently accepting widgets.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Widgets placed on the current dashboard since it was opened.
    pub fn current_widget_count(&self) -> usize {
        self.current_count
    }

    /// All dashboards in creation order, including the current one.
    /// The first dashboard is emitted even when empty; overflow
    /// dashboards only exist because something was placed on them.
    pub fn finish(self) -> Vec<Dashboard> {
        let mut dashboards = self.completed;
        dashboards.push(self.current);
        dashboards
    }
}
