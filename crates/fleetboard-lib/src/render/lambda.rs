//! Lambda function widgets, per-function and compact batch forms

use super::Renderer;
use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/Lambda";

pub struct Lambda;

impl Renderer for Lambda {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let function_name = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());
        let display_name = resource.name_tag().unwrap_or(function_name);

        let mut header = format!(
            "### Lambda [{display_name}](https://{region}.console.aws.amazon.com/lambda/home?region={region}#/functions/{function_name}?tab=monitoring)"
        );
        if let Some(memory) = resource.extra_u64("Configuration.MemorySize") {
            header.push_str(&format!(" Mem:{memory}"));
        }
        if let Some(runtime) = resource.extra_str("Configuration.Runtime") {
            header.push_str(&format!(" RT:{runtime}"));
        }

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(header));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Invocations {function_name}"), region)
                .left(vec![function_metric(function_name, "Invocations", Statistic::Sum)])
                .right(vec![function_metric(function_name, "Duration", Statistic::Average)])
                .size(6, 5)
                .into(),
            GraphWidget::new(format!("Errors/Throttles {function_name}"), region)
                .left(vec![function_metric(function_name, "Errors", Statistic::Sum)])
                .right(vec![function_metric(function_name, "Throttles", Statistic::Sum)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Concurrency {function_name}"), region)
                .left(vec![function_metric(
                    function_name,
                    "ConcurrentExecutions",
                    Statistic::Maximum,
                )])
                .size(6, 5)
                .into(),
        ]));
        ws
    }
}

fn function_metric(function_name: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("FunctionName", function_name)
        .statistic(statistic)
}

fn series_for(resources: &[ResourceRecord], metric: &str, statistic: Statistic) -> Vec<MetricSpec> {
    resources
        .iter()
        .map(|r| {
            let name = arn::resource_name(r.arn());
            function_metric(name, metric, statistic).label(name)
        })
        .collect()
}

/// Aggregated widget set for one compact batch: one series per function
/// in shared graphs, plus one error-rate alarm per function.
pub fn group_widget_set(
    resources: &[ResourceRecord],
    batch_label: &str,
    config: &GeneratorConfig,
) -> WidgetSet {
    let mut ws = WidgetSet::new(NAMESPACE);
    let Some(first) = resources.first() else {
        return ws;
    };
    let region = arn::region(first.arn());

    ws.push_widget(Widget::text(format!(
        "**Lambdas in {region} {batch_label}**"
    )));
    ws.push_row(WidgetRow::new(vec![
        GraphWidget::new("Invocations/Duration", region)
            .left(series_for(resources, "Invocations", Statistic::Sum))
            .right(series_for(resources, "Duration", Statistic::Average))
            .size(6, 8)
            .into(),
        GraphWidget::new("Errors/Throttles", region)
            .left(series_for(resources, "Errors", Statistic::Sum))
            .right(series_for(resources, "Throttles", Statistic::Sum))
            .size(12, 8)
            .into(),
        GraphWidget::new("Concurrency", region)
            .left(series_for(resources, "ConcurrentExecutions", Statistic::Maximum))
            .size(6, 8)
            .into(),
    ]));

    for resource in resources {
        let function_name = arn::resource_name(resource.arn());
        ws.push_alarm(Alarm::threshold(
            format!("Errors-{function_name}-{region}-{}", config.base_name),
            region,
            function_metric(function_name, "Errors", Statistic::Sum),
            Comparison::GreaterThanThreshold,
            0.0,
        ));
    }
    ws
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(name: &str) -> ResourceRecord {
        ResourceRecord::from_arn(format!(
            "arn:aws:lambda:eu-west-1:123456789012:function:{name}"
        ))
    }

    #[test]
    fn per_function_set_has_header_and_one_row() {
        let ws = Lambda.render(&function("orders"), &GeneratorConfig::default());
        assert_eq!(ws.rows.len(), 2);
        assert_eq!(ws.widget_count(), 4);
        assert!(ws.alarms.is_empty());
    }

    #[test]
    fn header_degrades_without_configuration_block() {
        let ws = Lambda.render(&function("orders"), &GeneratorConfig::default());
        match &ws.rows[0].widgets[0] {
            Widget::Text { markdown, .. } => {
                assert!(markdown.contains("orders"));
                assert!(!markdown.contains("Mem:"));
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn group_set_has_one_series_per_function() {
        let resources = vec![function("a"), function("b"), function("c")];
        let config = GeneratorConfig::default();
        let ws = group_widget_set(&resources, "default-0", &config);
        // header + one row of three graphs
        assert_eq!(ws.widget_count(), 4);
        match &ws.rows[1].widgets[1] {
            Widget::Graph(g) => {
                assert_eq!(g.left.len(), 3);
                assert_eq!(g.left[0].label.as_deref(), Some("a"));
            }
            other => panic!("unexpected widget: {other:?}"),
        }
        // one alarm per function, deterministically named
        assert_eq!(ws.alarms.len(), 3);
        assert_eq!(ws.alarms[0].name, "Errors-a-eu-west-1-Fleetboard");
    }

    #[test]
    fn empty_batch_renders_nothing() {
        let ws = group_widget_set(&[], "default-0", &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 0);
    }
}
