//! Auto Scaling group widgets

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/AutoScaling";

pub struct AutoScalingGroup;

impl Renderer for AutoScalingGroup {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let group_name = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### ASG [{group_name}](https://{region}.console.aws.amazon.com/ec2/home?region={region}#AutoScalingGroupDetails:id={group_name})"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Capacity {group_name}"), region)
                .left(vec![
                    group_metric(group_name, "GroupInServiceInstances"),
                    group_metric(group_name, "GroupDesiredCapacity"),
                ])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Limits {group_name}"), region)
                .left(vec![
                    group_metric(group_name, "GroupMinSize"),
                    group_metric(group_name, "GroupMaxSize"),
                ])
                .right(vec![group_metric(group_name, "GroupPendingInstances")])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn group_metric(group_name: &str, metric: &str) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("AutoScalingGroupName", group_name)
        .statistic(Statistic::Maximum)
}
