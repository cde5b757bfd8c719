//! ECS cluster widgets

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/ECS";

pub struct Ecs;

impl Renderer for Ecs {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let cluster_name = resource
            .extra_str("cluster.clusterName")
            .unwrap_or_else(|| arn::resource_id(resource.arn()));
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### ECS [{cluster_name}](https://{region}.console.aws.amazon.com/ecs/v2/clusters/{cluster_name}/services?region={region})"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("CPU {cluster_name}"), region)
                .left(vec![
                    cluster_metric(cluster_name, "CPUUtilization", Statistic::Average),
                    cluster_metric(cluster_name, "CPUUtilization", Statistic::Maximum),
                ])
                .size(12, 5)
                .left_y_max(100.0)
                .into(),
            GraphWidget::new(format!("Memory {cluster_name}"), region)
                .left(vec![
                    cluster_metric(cluster_name, "MemoryUtilization", Statistic::Average),
                    cluster_metric(cluster_name, "MemoryUtilization", Statistic::Maximum),
                ])
                .size(12, 5)
                .left_y_max(100.0)
                .into(),
        ]));
        ws
    }
}

fn cluster_metric(cluster_name: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("ClusterName", cluster_name)
        .statistic(statistic)
        .label(statistic.as_str())
}
