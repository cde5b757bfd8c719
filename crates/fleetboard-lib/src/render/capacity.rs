//! On-demand capacity reservation widgets
//!
//! Reservations are only rendered per region as one aggregated widget
//! set; there is no per-resource renderer.

use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/EC2CapacityReservations";

fn reservation_metric(reservation_id: &str, metric: &str) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("CapacityReservationId", reservation_id)
        .statistic(Statistic::Maximum)
        .label(reservation_id)
}

/// Aggregated widget set for every reservation in one region.
pub fn group_widget_set(
    resources: &[crate::models::ResourceRecord],
    config: &GeneratorConfig,
) -> WidgetSet {
    let mut ws = WidgetSet::new(NAMESPACE);
    let Some(first) = resources.first() else {
        return ws;
    };
    let region = arn::region(first.arn());

    let ids: Vec<&str> = resources.iter().map(|r| arn::resource_id(r.arn())).collect();
    ws.push_widget(Widget::text(format!(
        "**Capacity reservations in {region}**"
    )));
    // Any available instance means reserved capacity is going unused.
    for id in &ids {
        ws.push_alarm(Alarm {
            evaluation_periods: 1,
            datapoints_to_alarm: 1,
            ..Alarm::threshold(
                format!("UnusedODCR-{id}-{region}-{}", config.base_name),
                region,
                reservation_metric(id, "AvailableInstanceCount"),
                Comparison::GreaterThanOrEqualToThreshold,
                1.0,
            )
        });
    }
    ws.push_row(WidgetRow::new(vec![
        GraphWidget::new("Utilization", region)
            .left(
                ids.iter()
                    .map(|id| reservation_metric(id, "InstanceUtilization"))
                    .collect(),
            )
            .size(12, 6)
            .left_y_max(100.0)
            .into(),
        GraphWidget::new("Available/Used instances", region)
            .left(
                ids.iter()
                    .map(|id| reservation_metric(id, "AvailableInstanceCount"))
                    .collect(),
            )
            .right(
                ids.iter()
                    .map(|id| reservation_metric(id, "UsedInstanceCount"))
                    .collect(),
            )
            .size(12, 6)
            .into(),
    ]));
    ws
}
