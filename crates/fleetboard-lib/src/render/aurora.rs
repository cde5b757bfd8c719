//! Aurora cluster widgets

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/RDS";

pub struct Aurora;

impl Renderer for Aurora {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let cluster_id = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());
        let engine = resource.engine.as_deref().unwrap_or("aurora");

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### Aurora [{cluster_id}](https://{region}.console.aws.amazon.com/rds/home?region={region}#database:id={cluster_id};is-cluster=true) {engine}"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("CPU {cluster_id}"), region)
                .left(vec![cluster_metric(cluster_id, "CPUUtilization", Statistic::Maximum)])
                .size(6, 5)
                .left_y_max(100.0)
                .into(),
            GraphWidget::new(format!("Connections {cluster_id}"), region)
                .left(vec![cluster_metric(
                    cluster_id,
                    "DatabaseConnections",
                    Statistic::Maximum,
                )])
                .size(6, 5)
                .into(),
            GraphWidget::new(format!("Latency {cluster_id}"), region)
                .left(vec![cluster_metric(cluster_id, "ReadLatency", Statistic::Average)])
                .right(vec![cluster_metric(cluster_id, "WriteLatency", Statistic::Average)])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn cluster_metric(cluster_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("DBClusterIdentifier", cluster_id)
        .statistic(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_three_graphs() {
        let mut record = ResourceRecord::from_arn(
            "arn:aws:rds:eu-west-1:123456789012:cluster:orders-db",
        );
        record.engine = Some("aurora-postgresql".into());
        let ws = Aurora.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 4);
        match &ws.rows[0].widgets[0] {
            Widget::Text { markdown, .. } => {
                assert!(markdown.contains("orders-db"));
                assert!(markdown.contains("aurora-postgresql"));
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
