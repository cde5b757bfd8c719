//! EC2 instance widgets

use super::Renderer;
use crate::alarms::{Alarm, Comparison};
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/EC2";

pub struct Ec2Instance;

impl Renderer for Ec2Instance {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet {
        let instance_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());

        let instance_type = resource.extra_str("Instance.InstanceType").unwrap_or("");
        let burstable = ["t2", "t3", "t4"]
            .iter()
            .any(|family| instance_type.contains(family));
        let burst_label = if burstable {
            resource
                .extra_str("CPUCreditSpecs.CpuCredits")
                .map(|mode| format!(" ({mode})"))
                .unwrap_or_default()
        } else {
            String::new()
        };
        let az = resource
            .extra_str("Instance.Placement.AvailabilityZone")
            .unwrap_or("");
        let instance_name = resource.name_tag().unwrap_or("");

        // Extra context from operator-chosen tag keys.
        let mut auxdata = String::new();
        for tag in &resource.tags {
            if config.custom_ec2_tag_keys.contains(&tag.key) {
                auxdata.push_str(&format!(" {}={}", tag.key, tag.value));
            }
        }

        let mut header = format!(
            "### Instance{auxdata} [{instance_id}](https://{region}.console.aws.amazon.com/ec2/v2/home?region={region}#InstanceDetails:instanceId={instance_id}) {instance_name} {instance_type}{burst_label}"
        );
        if !az.is_empty() {
            header.push_str(&format!("/{az}"));
        }
        if let (Some(cores), Some(threads)) = (
            resource.extra_u64("Instance.CpuOptions.CoreCount"),
            resource.extra_u64("Instance.CpuOptions.ThreadsPerCore"),
        ) {
            header.push_str(&format!("/Cores:{cores}/ThreadsPC:{threads}"));
        }

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text_sized(header, 2));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Disk {instance_id}"), region)
                .left(vec![
                    instance_metric(instance_id, "EBSWriteBytes", Statistic::Sum),
                    instance_metric(instance_id, "EBSReadBytes", Statistic::Sum),
                ])
                .right(vec![
                    instance_metric(instance_id, "EBSWriteOps", Statistic::Sum),
                    instance_metric(instance_id, "EBSReadOps", Statistic::Sum),
                ])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("CPU {instance_id}"), region)
                .left(vec![instance_metric(
                    instance_id,
                    "CPUUtilization",
                    Statistic::Maximum,
                )])
                .size(6, 5)
                .left_y_max(100.0)
                .into(),
            GraphWidget::new(format!("Network {instance_id}"), region)
                .left(vec![instance_metric(instance_id, "NetworkIn", Statistic::Sum)])
                .right(vec![instance_metric(instance_id, "NetworkOut", Statistic::Sum)])
                .size(6, 5)
                .into(),
        ]));

        if burstable {
            ws.push_alarm(Alarm::threshold(
                format!("CPUCredits-{instance_id}-{region}-{}", config.base_name),
                region,
                instance_metric(instance_id, "CPUCreditBalance", Statistic::Minimum),
                Comparison::LessThanOrEqualToThreshold,
                5.0,
            ));
        }
        ws
    }
}

fn instance_metric(instance_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("InstanceId", instance_id)
        .statistic(statistic)
}
