//! Load balancer widgets (ALB/NLB and classic)

use super::Renderer;
use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

pub struct Elbv2;

impl Renderer for Elbv2 {
    fn namespace(&self) -> &'static str {
        "AWS/ApplicationELB"
    }

    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet {
        let arn = resource.arn();
        // The metric dimension is everything after "loadbalancer/", i.e.
        // "app/name/id" or "net/name/id".
        let lb_dimension = arn
            .split_once("loadbalancer/")
            .map(|(_, rest)| rest)
            .unwrap_or_else(|| arn::resource_id(arn));
        let network = arn.contains("/net/");
        let namespace = if network {
            "AWS/NetworkELB"
        } else {
            "AWS/ApplicationELB"
        };
        let region = arn::region(arn);
        let lb_name = lb_dimension.split('/').nth(1).unwrap_or(lb_dimension);

        let mut ws = WidgetSet::new(namespace);
        ws.push_widget(Widget::text(format!(
            "### {} [{lb_name}](https://{region}.console.aws.amazon.com/ec2/home?region={region}#LoadBalancers:)",
            if network { "NLB" } else { "ALB" }
        )));
        if network {
            ws.push_row(WidgetRow::new(vec![
                GraphWidget::new(format!("Flows {lb_name}"), region)
                    .left(vec![lb_metric(namespace, lb_dimension, "ActiveFlowCount", Statistic::Average)])
                    .right(vec![lb_metric(namespace, lb_dimension, "NewFlowCount", Statistic::Sum)])
                    .size(12, 5)
                    .into(),
                GraphWidget::new(format!("Processed bytes {lb_name}"), region)
                    .left(vec![lb_metric(namespace, lb_dimension, "ProcessedBytes", Statistic::Sum)])
                    .size(12, 5)
                    .into(),
            ]));
        } else {
            ws.push_row(WidgetRow::new(vec![
                GraphWidget::new(format!("Requests {lb_name}"), region)
                    .left(vec![lb_metric(namespace, lb_dimension, "RequestCount", Statistic::Sum)])
                    .right(vec![lb_metric(
                        namespace,
                        lb_dimension,
                        "TargetResponseTime",
                        Statistic::Average,
                    )])
                    .size(12, 5)
                    .into(),
                GraphWidget::new(format!("5XX {lb_name}"), region)
                    .left(vec![
                        lb_metric(namespace, lb_dimension, "HTTPCode_ELB_5XX_Count", Statistic::Sum),
                        lb_metric(
                            namespace,
                            lb_dimension,
                            "HTTPCode_Target_5XX_Count",
                            Statistic::Sum,
                        ),
                    ])
                    .size(12, 5)
                    .into(),
            ]));
            ws.push_alarm(Alarm::threshold(
                format!("ELB5XX-{lb_name}-{region}-{}", config.base_name),
                region,
                lb_metric(namespace, lb_dimension, "HTTPCode_ELB_5XX_Count", Statistic::Sum),
                Comparison::GreaterThanThreshold,
                10.0,
            ));
        }
        ws
    }
}

fn lb_metric(
    namespace: &str,
    lb_dimension: &str,
    metric: &str,
    statistic: Statistic,
) -> MetricSpec {
    MetricSpec::new(namespace, metric)
        .dim("LoadBalancer", lb_dimension)
        .statistic(statistic)
}

pub struct Elbv1;

impl Renderer for Elbv1 {
    fn namespace(&self) -> &'static str {
        "AWS/ELB"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let lb_name = resource
            .extra_str("Extras.LoadBalancerName")
            .unwrap_or_else(|| arn::resource_id(resource.arn()));
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### Classic ELB {lb_name}")));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Requests {lb_name}"), region)
                .left(vec![classic_metric(lb_name, "RequestCount", Statistic::Sum)])
                .right(vec![classic_metric(lb_name, "Latency", Statistic::Average)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Hosts {lb_name}"), region)
                .left(vec![
                    classic_metric(lb_name, "HealthyHostCount", Statistic::Minimum),
                    classic_metric(lb_name, "UnHealthyHostCount", Statistic::Maximum),
                ])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn classic_metric(lb_name: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new("AWS/ELB", metric)
        .dim("LoadBalancerName", lb_name)
        .statistic(statistic)
}
