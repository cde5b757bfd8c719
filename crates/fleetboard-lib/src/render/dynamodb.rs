//! DynamoDB table widgets

use super::Renderer;
use crate::alarms::{Alarm, AlarmBinding, Comparison, NamedMetric, TreatMissingData};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/DynamoDB";

pub struct DynamoDb;

impl Renderer for DynamoDb {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet {
        let table_name = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());
        let billing = resource.api_type.as_deref().unwrap_or("PROVISIONED");

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Consumed RCU {table_name} ({billing})"), region)
                .left(vec![
                    table_metric(table_name, "ConsumedReadCapacityUnits"),
                    table_metric(table_name, "ProvisionedReadCapacityUnits"),
                ])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Consumed WCU {table_name} ({billing})"), region)
                .left(vec![
                    table_metric(table_name, "ConsumedWriteCapacityUnits"),
                    table_metric(table_name, "ProvisionedWriteCapacityUnits"),
                ])
                .size(12, 5)
                .into(),
        ]));

        // Account-level write headroom for this table's region.
        ws.push_alarm(Alarm {
            name: format!("Writes-{table_name}-{region}-{}", config.base_name),
            region: region.to_string(),
            binding: AlarmBinding::Expression {
                expression: "usedWrites/accountWrites*100".into(),
                label: "PercentageOfWrites".into(),
                using: vec![
                    NamedMetric {
                        id: "accountWrites".into(),
                        metric: MetricSpec::new(NAMESPACE, "AccountMaxTableLevelWrites")
                            .statistic(Statistic::Maximum),
                    },
                    NamedMetric {
                        id: "usedWrites".into(),
                        metric: MetricSpec::new(
                            NAMESPACE,
                            "MaxProvisionedTableWriteCapacityUtilization",
                        )
                        .statistic(Statistic::Maximum),
                    },
                ],
            },
            threshold: 90.0,
            comparison: Comparison::GreaterThanOrEqualToThreshold,
            evaluation_periods: 2,
            datapoints_to_alarm: 2,
            treat_missing_data: TreatMissingData::NotBreaching,
            alarm_actions: Vec::new(),
        });
        ws
    }
}

fn table_metric(table_name: &str, metric: &str) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("TableName", table_name)
        .statistic(Statistic::Average)
}

/// Region-wide capacity utilization widget, emitted once ahead of the
/// per-table rows.
pub fn overall_widget(region: &str) -> Widget {
    GraphWidget::new("Account RCU/WCU utilization", region)
        .left(vec![MetricSpec::new(
            NAMESPACE,
            "AccountProvisionedReadCapacityUtilization",
        )
        .statistic(Statistic::Average)])
        .right(vec![MetricSpec::new(
            NAMESPACE,
            "AccountProvisionedWriteCapacityUtilization",
        )
        .statistic(Statistic::Average)])
        .size(24, 5)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_capacity_row_and_writes_alarm() {
        let record =
            ResourceRecord::from_arn("arn:aws:dynamodb:eu-west-1:123456789012:table/orders");
        let ws = DynamoDb.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 2);
        assert_eq!(ws.alarms.len(), 1);
        assert_eq!(ws.alarms[0].name, "Writes-orders-eu-west-1-Fleetboard");
        match &ws.alarms[0].binding {
            AlarmBinding::Expression { using, .. } => assert_eq!(using.len(), 2),
            other => panic!("expected expression binding, got {other:?}"),
        }
    }

    #[test]
    fn overall_widget_spans_the_grid() {
        match overall_widget("eu-west-1") {
            Widget::Graph(g) => {
                assert_eq!(g.width, 24);
                assert_eq!(g.left.len(), 1);
                assert_eq!(g.right.len(), 1);
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
