//! Dashboard widget layout model
//!
//! Widgets live on a 24-column grid. A [`WidgetRow`] groups widgets
//! horizontally; renderers are responsible for keeping a row's widths
//! within the grid. A [`WidgetSet`] is the unit a renderer emits for one
//! resource (or one compact batch): ordered rows plus the alarms that
//! belong to them.

use crate::alarms::Alarm;
use serde::{Deserialize, Serialize};

/// Fixed dashboard grid width in columns.
pub const GRID_WIDTH: u32 = 24;

/// CloudWatch statistic applied to a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Sum,
    Average,
    Maximum,
    Minimum,
    SampleCount,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Sum => "Sum",
            Statistic::Average => "Average",
            Statistic::Maximum => "Maximum",
            Statistic::Minimum => "Minimum",
            Statistic::SampleCount => "SampleCount",
        }
    }
}

/// One metric dimension (name/value pair).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

/// A single metric series binding: namespace, name, dimensions,
/// statistic and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSpec {
    pub namespace: String,
    pub metric_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<Dimension>,
    pub statistic: Statistic,
    pub period_secs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MetricSpec {
    /// One-minute Sum series, the most common shape in the renderers.
    pub fn new(namespace: impl Into<String>, metric_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            metric_name: metric_name.into(),
            dimensions: Vec::new(),
            statistic: Statistic::Sum,
            period_secs: 60,
            label: None,
        }
    }

    pub fn dim(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.dimensions.push(Dimension {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn statistic(mut self, statistic: Statistic) -> Self {
        self.statistic = statistic;
        self
    }

    pub fn period_secs(mut self, period_secs: u32) -> Self {
        self.period_secs = period_secs;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A time-series graph panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphWidget {
    pub title: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left: Vec<MetricSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right: Vec<MetricSpec>,
    pub width: u32,
    pub height: u32,
    /// Optional fixed left y-axis maximum (e.g. 100 for percentages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_y_max: Option<f64>,
}

impl GraphWidget {
    pub fn new(title: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            region: region.into(),
            left: Vec::new(),
            right: Vec::new(),
            width: 6,
            height: 5,
            left_y_max: None,
        }
    }

    pub fn left(mut self, metrics: Vec<MetricSpec>) -> Self {
        self.left = metrics;
        self
    }

    pub fn right(mut self, metrics: Vec<MetricSpec>) -> Self {
        self.right = metrics;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn left_y_max(mut self, max: f64) -> Self {
        self.left_y_max = Some(max);
        self
    }
}

/// One visual element with a declared footprint on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Text {
        markdown: String,
        width: u32,
        height: u32,
    },
    Graph(GraphWidget),
    /// Status panel listing alarms by name.
    AlarmStatus {
        title: String,
        alarms: Vec<String>,
        width: u32,
        height: u32,
    },
    Spacer {
        width: u32,
        height: u32,
    },
}

impl Widget {
    /// Full-width, single-row markdown header.
    pub fn text(markdown: impl Into<String>) -> Self {
        Widget::Text {
            markdown: markdown.into(),
            width: GRID_WIDTH,
            height: 1,
        }
    }

    /// Markdown block with an explicit height.
    pub fn text_sized(markdown: impl Into<String>, height: u32) -> Self {
        Widget::Text {
            markdown: markdown.into(),
            width: GRID_WIDTH,
            height,
        }
    }

    pub fn spacer(height: u32) -> Self {
        Widget::Spacer {
            width: GRID_WIDTH,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Widget::Text { width, .. }
            | Widget::AlarmStatus { width, .. }
            | Widget::Spacer { width, .. } => *width,
            Widget::Graph(g) => g.width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Widget::Text { height, .. }
            | Widget::AlarmStatus { height, .. }
            | Widget::Spacer { height, .. } => *height,
            Widget::Graph(g) => g.height,
        }
    }
}

impl From<GraphWidget> for Widget {
    fn from(graph: GraphWidget) -> Self {
        Widget::Graph(graph)
    }
}

/// A horizontal group of widgets; widths should sum to at most
/// [`GRID_WIDTH`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetRow {
    pub widgets: Vec<Widget>,
}

impl WidgetRow {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self { widgets }
    }

    pub fn single(widget: impl Into<Widget>) -> Self {
        Self {
            widgets: vec![widget.into()],
        }
    }

    pub fn width(&self) -> u32 {
        self.widgets.iter().map(Widget::width).sum()
    }

    /// Row height is the tallest widget in the row.
    pub fn height(&self) -> u32 {
        self.widgets.iter().map(Widget::height).max().unwrap_or(0)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }
}

/// Renderer output for one resource or batch: ordered rows of widgets
/// plus the alarms created alongside them.
#[derive(Debug, Clone, Default)]
pub struct WidgetSet {
    /// Metrics namespace the set draws from, informational only.
    pub namespace: String,
    pub rows: Vec<WidgetRow>,
    pub alarms: Vec<Alarm>,
}

impl WidgetSet {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            rows: Vec::new(),
            alarms: Vec::new(),
        }
    }

    pub fn push_widget(&mut self, widget: impl Into<Widget>) {
        self.rows.push(WidgetRow::single(widget));
    }

    pub fn push_row(&mut self, row: WidgetRow) {
        self.rows.push(row);
    }

    pub fn push_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    /// Leaf widgets across all rows; the quantity the capacity manager
    /// counts against its threshold.
    pub fn widget_count(&self) -> usize {
        self.rows.iter().map(WidgetRow::widget_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_count_sums_leaf_widgets() {
        let mut ws = WidgetSet::new("AWS/Lambda");
        ws.push_widget(Widget::text("## header"));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new("a", "eu-west-1").into(),
            GraphWidget::new("b", "eu-west-1").into(),
            GraphWidget::new("c", "eu-west-1").into(),
        ]));
        assert_eq!(ws.widget_count(), 4);
    }

    #[test]
    fn row_geometry() {
        let row = WidgetRow::new(vec![
            GraphWidget::new("a", "eu-west-1").size(12, 5).into(),
            GraphWidget::new("b", "eu-west-1").size(12, 8).into(),
        ]);
        assert_eq!(row.width(), GRID_WIDTH);
        assert_eq!(row.height(), 8);
    }

    #[test]
    fn metric_builder_defaults() {
        let metric = MetricSpec::new("AWS/SQS", "NumberOfMessagesSent")
            .dim("QueueName", "orders")
            .statistic(Statistic::Average);
        assert_eq!(metric.period_secs, 60);
        assert_eq!(metric.statistic, Statistic::Average);
        assert_eq!(metric.dimensions.len(), 1);
    }
}
