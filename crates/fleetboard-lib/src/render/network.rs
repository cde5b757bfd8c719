//! Network plumbing widgets (transit gateways and NAT gateways)

use super::Renderer;
use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

pub struct TransitGateway;

impl Renderer for TransitGateway {
    fn namespace(&self) -> &'static str {
        "AWS/TransitGateway"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let gateway_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### Transit gateway {gateway_id}")));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Throughput {gateway_id}"), region)
                .left(vec![tgw_metric(gateway_id, "BytesIn", Statistic::Sum)])
                .right(vec![tgw_metric(gateway_id, "BytesOut", Statistic::Sum)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Dropped packets {gateway_id}"), region)
                .left(vec![
                    tgw_metric(gateway_id, "PacketDropCountBlackhole", Statistic::Sum),
                    tgw_metric(gateway_id, "PacketDropCountNoRoute", Statistic::Sum),
                ])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn tgw_metric(gateway_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new("AWS/TransitGateway", metric)
        .dim("TransitGateway", gateway_id)
        .statistic(statistic)
}

pub struct NatGateway;

impl Renderer for NatGateway {
    fn namespace(&self) -> &'static str {
        "AWS/NATGateway"
    }

    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet {
        let gateway_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### NAT gateway {gateway_id}")));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Connections {gateway_id}"), region)
                .left(vec![nat_metric(gateway_id, "ActiveConnectionCount", Statistic::Maximum)])
                .right(vec![nat_metric(
                    gateway_id,
                    "ConnectionEstablishedCount",
                    Statistic::Sum,
                )])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Throughput {gateway_id}"), region)
                .left(vec![
                    nat_metric(gateway_id, "BytesInFromSource", Statistic::Sum),
                    nat_metric(gateway_id, "BytesOutToDestination", Statistic::Sum),
                ])
                .right(vec![nat_metric(gateway_id, "ErrorPortAllocation", Statistic::Sum)])
                .size(12, 5)
                .into(),
        ]));

        // Port allocation failures mean dropped outbound connections.
        ws.push_alarm(Alarm::threshold(
            format!("PortAllocation-{gateway_id}-{region}-{}", config.base_name),
            region,
            nat_metric(gateway_id, "ErrorPortAllocation", Statistic::Sum),
            Comparison::GreaterThanThreshold,
            0.0,
        ));
        ws
    }
}

fn nat_metric(gateway_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new("AWS/NATGateway", metric)
        .dim("NatGatewayId", gateway_id)
        .statistic(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transit_gateway_renders_two_graphs() {
        let record = ResourceRecord::from_arn(
            "arn:aws:ec2:eu-west-1:123456789012:transit-gateway/tgw-0abc",
        );
        let ws = TransitGateway.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
        assert!(ws.alarms.is_empty());
    }

    #[test]
    fn nat_gateway_gets_port_allocation_alarm() {
        let record = ResourceRecord::from_arn(
            "arn:aws:ec2:eu-west-1:123456789012:natgateway/nat-0abc",
        );
        let ws = NatGateway.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.alarms.len(), 1);
        assert_eq!(
            ws.alarms[0].name,
            "PortAllocation-nat-0abc-eu-west-1-Fleetboard"
        );
    }
}
