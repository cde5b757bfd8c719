//! A named dashboard container and its CloudWatch body serialization

use crate::widgets::{Widget, WidgetRow};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A named ordered list of widget rows, the top-level deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub rows: Vec<WidgetRow>,
}

impl Dashboard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: WidgetRow) {
        self.rows.push(row);
    }

    pub fn add_widget(&mut self, widget: impl Into<Widget>) {
        self.rows.push(WidgetRow::single(widget));
    }

    /// Insert a row ahead of everything else (used for the alarm-status
    /// widget on the primary dashboard).
    pub fn prepend_row(&mut self, row: WidgetRow) {
        self.rows.insert(0, row);
    }

    pub fn widget_count(&self) -> usize {
        self.rows.iter().map(WidgetRow::widget_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the CloudWatch dashboard body: widgets flow left to right
    /// within a row, rows stack top to bottom, row height is the tallest
    /// widget in the row.
    pub fn to_body(&self) -> Value {
        let mut placed = Vec::new();
        let mut y = 0u32;
        for row in &self.rows {
            let mut x = 0u32;
            for widget in &row.widgets {
                placed.push(place_widget(widget, x, y));
                x += widget.width();
            }
            y += row.height();
        }
        json!({ "widgets": placed })
    }
}

fn place_widget(widget: &Widget, x: u32, y: u32) -> Value {
    let (kind, properties) = match widget {
        Widget::Text { markdown, .. } => ("text", json!({ "markdown": markdown })),
        Widget::Spacer { .. } => ("text", json!({ "markdown": "" })),
        Widget::AlarmStatus { title, alarms, .. } => (
            "alarm",
            json!({ "title": title, "alarms": alarms }),
        ),
        Widget::Graph(graph) => {
            let mut metrics = Vec::new();
            for metric in &graph.left {
                metrics.push(metric_entry(metric, None));
            }
            for metric in &graph.right {
                metrics.push(metric_entry(metric, Some("right")));
            }
            let mut properties = json!({
                "view": "timeSeries",
                "title": graph.title,
                "region": graph.region,
                "metrics": metrics,
            });
            if let Some(max) = graph.left_y_max {
                properties["yAxis"] = json!({ "left": { "min": 0, "max": max } });
            }
            ("metric", properties)
        }
    };
    json!({
        "type": kind,
        "x": x,
        "y": y,
        "width": widget.width(),
        "height": widget.height(),
        "properties": properties,
    })
}

/// One entry of the CloudWatch `metrics` array:
/// `[namespace, name, dim_name, dim_value, ..., {options}]`.
fn metric_entry(metric: &crate::widgets::MetricSpec, y_axis: Option<&str>) -> Value {
    let mut entry: Vec<Value> = vec![
        Value::String(metric.namespace.clone()),
        Value::String(metric.metric_name.clone()),
    ];
    for dim in &metric.dimensions {
        entry.push(Value::String(dim.name.clone()));
        entry.push(Value::String(dim.value.clone()));
    }
    let mut options = json!({
        "stat": metric.statistic.as_str(),
        "period": metric.period_secs,
    });
    if let Some(label) = &metric.label {
        options["label"] = Value::String(label.clone());
    }
    if let Some(axis) = y_axis {
        options["yAxis"] = Value::String(axis.to_string());
    }
    entry.push(options);
    Value::Array(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{GraphWidget, MetricSpec, Statistic};

    #[test]
    fn body_layout_stacks_rows() {
        let mut dashboard = Dashboard::new("test");
        dashboard.add_widget(Widget::text("# Region: eu-west-1"));
        dashboard.add_row(WidgetRow::new(vec![
            GraphWidget::new("a", "eu-west-1").size(12, 5).into(),
            GraphWidget::new("b", "eu-west-1").size(12, 8).into(),
        ]));
        dashboard.add_widget(Widget::text("## trailing"));

        let body = dashboard.to_body();
        let widgets = body["widgets"].as_array().unwrap();
        assert_eq!(widgets.len(), 4);
        // header at origin
        assert_eq!(widgets[0]["y"], 0);
        // second row starts below the 1-unit header
        assert_eq!(widgets[1]["x"], 0);
        assert_eq!(widgets[1]["y"], 1);
        assert_eq!(widgets[2]["x"], 12);
        // third row is pushed down by the tallest widget (8) in row two
        assert_eq!(widgets[3]["y"], 9);
    }

    #[test]
    fn graph_serializes_metric_entries() {
        let graph = GraphWidget::new("Invocations fn", "eu-west-1")
            .left(vec![MetricSpec::new("AWS/Lambda", "Invocations")
                .dim("FunctionName", "fn")])
            .right(vec![MetricSpec::new("AWS/Lambda", "Duration")
                .dim("FunctionName", "fn")
                .statistic(Statistic::Average)]);
        let mut dashboard = Dashboard::new("test");
        dashboard.add_widget(graph);

        let body = dashboard.to_body();
        let metrics = body["widgets"][0]["properties"]["metrics"]
            .as_array()
            .unwrap();
        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0][0], "AWS/Lambda");
        assert_eq!(metrics[0][2], "FunctionName");
        assert_eq!(metrics[1][4]["yAxis"], "right");
        assert_eq!(metrics[1][4]["stat"], "Average");
    }
}
