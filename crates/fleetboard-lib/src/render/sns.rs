//! SNS topic widgets

use super::Renderer;
use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/SNS";

pub struct Sns;

impl Renderer for Sns {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet {
        let topic_name = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### Topic [{topic_name}](https://{region}.console.aws.amazon.com/sns/v3/home?region={region}#/topics)"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Messages {topic_name}"), region)
                .left(vec![
                    topic_metric(topic_name, "NumberOfMessagesPublished"),
                    topic_metric(topic_name, "NumberOfNotificationsDelivered"),
                ])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Failures {topic_name}"), region)
                .left(vec![topic_metric(topic_name, "NumberOfNotificationsFailed")])
                .size(12, 5)
                .into(),
        ]));

        ws.push_alarm(Alarm::threshold(
            format!("NotificationsFailed-{topic_name}-{region}-{}", config.base_name),
            region,
            topic_metric(topic_name, "NumberOfNotificationsFailed"),
            Comparison::GreaterThanThreshold,
            0.0,
        ));
        ws
    }
}

fn topic_metric(topic_name: &str, metric: &str) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("TopicName", topic_name)
        .statistic(Statistic::Sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_graphs_and_failure_alarm() {
        let record =
            ResourceRecord::from_arn("arn:aws:sns:eu-west-1:123456789012:order-events");
        let ws = Sns.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
        assert_eq!(ws.alarms.len(), 1);
        assert_eq!(
            ws.alarms[0].name,
            "NotificationsFailed-order-events-eu-west-1-Fleetboard"
        );
    }
}
