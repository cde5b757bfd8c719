//! SQS queue widgets, per-queue and compact batch forms

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/SQS";

pub struct Sqs;

impl Renderer for Sqs {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let queue_name = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### Queue [{queue_name}](https://{region}.console.aws.amazon.com/sqs/v2/home?region={region}#/queues)"
        )));
        ws.push_row(queue_row(&[resource.clone()], region, 5));
        ws
    }
}

fn queue_metric(queue_name: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("QueueName", queue_name)
        .statistic(statistic)
}

fn series_for(resources: &[ResourceRecord], metric: &str, statistic: Statistic) -> Vec<MetricSpec> {
    resources
        .iter()
        .map(|r| {
            let name = arn::resource_name(r.arn());
            queue_metric(name, metric, statistic).label(name)
        })
        .collect()
}

fn queue_row(resources: &[ResourceRecord], region: &str, height: u32) -> WidgetRow {
    WidgetRow::new(vec![
        GraphWidget::new("Visible/NotVisible", region)
            .left(series_for(
                resources,
                "ApproximateNumberOfMessagesVisible",
                Statistic::Maximum,
            ))
            .right(series_for(
                resources,
                "ApproximateNumberOfMessagesNotVisible",
                Statistic::Maximum,
            ))
            .size(6, height)
            .into(),
        GraphWidget::new("Sent/Received", region)
            .left(series_for(resources, "NumberOfMessagesSent", Statistic::Sum))
            .right(series_for(
                resources,
                "NumberOfMessagesReceived",
                Statistic::Sum,
            ))
            .size(6, height)
            .into(),
        GraphWidget::new("Delayed/Age", region)
            .left(series_for(
                resources,
                "ApproximateNumberOfMessagesDelayed",
                Statistic::Maximum,
            ))
            .right(series_for(
                resources,
                "ApproximateAgeOfOldestMessage",
                Statistic::Maximum,
            ))
            .size(6, height)
            .into(),
        GraphWidget::new("Deleted/Empty receives", region)
            .left(series_for(resources, "NumberOfMessagesDeleted", Statistic::Sum))
            .right(series_for(resources, "NumberOfEmptyReceives", Statistic::Sum))
            .size(6, height)
            .into(),
    ])
}

/// Aggregated widget set for every queue in one region: a header plus
/// one multi-series row per batch of `resources_per_widget()` queues.
pub fn group_widget_set(resources: &[ResourceRecord], config: &GeneratorConfig) -> WidgetSet {
    let mut ws = WidgetSet::new(NAMESPACE);
    let Some(first) = resources.first() else {
        return ws;
    };
    let region = arn::region(first.arn());

    ws.push_widget(Widget::text(format!("**SQS queues in {region}**")));
    for chunk in resources.chunks(config.resources_per_widget()) {
        let height = if chunk.len() > 5 { 14 } else { 8 };
        ws.push_row(queue_row(chunk, region, height));
    }
    ws
}
