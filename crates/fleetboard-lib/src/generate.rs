//! Dashboard plan generation
//!
//! Ties the pipeline together: classify records into (region, service)
//! buckets, walk the buckets in deterministic order, route each bucket
//! to its renderer and destination dashboard, then fold every alarm into
//! one status widget at the top of the primary dashboard.
//!
//! Destinations:
//! - most services flow into the primary capacity-packed sequence,
//!   under a per-region header and per-service headings;
//! - EC2 and Lambda get their own dashboard families through the
//!   registry, optionally split by grouping-tag value;
//! - transit/NAT gateways share a `Network` dashboard and CloudFront/WAF
//!   an `Edge` dashboard, across regions;
//! - in compact mode Lambda groups become multi-series batch dashboards
//!   and SQS queues collapse into per-region batch rows on the primary.

use crate::alarms::{status_widget, Alarm};
use crate::classify::{classify, ServiceKind};
use crate::config::GeneratorConfig;
use crate::dashboard::{Dashboard, DashboardKey, DashboardManager, DashboardRegistry};
use crate::error::GenerateError;
use crate::grouping::{group_value, is_group_eligible, partition_by_group};
use crate::models::ResourceRecord;
use crate::render::{self, renderer_for};
use crate::widgets::{Widget, WidgetRow};
use tracing::{debug, info};

/// Everything one synthesis run produces.
#[derive(Debug)]
pub struct DashboardPlan {
    /// Primary sequence first, then registry dashboards in key order.
    pub dashboards: Vec<Dashboard>,
    pub alarms: Vec<Alarm>,
}

/// Generate the full dashboard plan for a set of discovered resources.
pub fn generate(
    resources: Vec<ResourceRecord>,
    config: &GeneratorConfig,
) -> Result<DashboardPlan, GenerateError> {
    let buckets = classify(resources)?;
    let max_widgets = config.max_widgets();

    let mut primary = DashboardManager::new(format!("{}-dashboard", config.base_name), max_widgets);
    let mut registry = DashboardRegistry::new(config.base_name.clone(), max_widgets);
    let mut alarms: Vec<Alarm> = Vec::new();

    for (region, services) in buckets {
        primary.add_widget(Widget::text(format!("# Region: {region}")));
        for (kind, records) in services {
            debug!(region = %region, service = kind.label(), count = records.len(), "Rendering bucket");
            match kind {
                ServiceKind::Ec2Instance => {
                    route_grouped(&mut registry, "EC2", kind, &records, config, &mut alarms);
                }
                ServiceKind::Lambda if config.compact => {
                    compact_lambda(&mut registry, &region, records, config, &mut alarms);
                }
                ServiceKind::Lambda => {
                    route_grouped(&mut registry, "Lambda", kind, &records, config, &mut alarms);
                }
                ServiceKind::Sqs => {
                    primary.add_widget(Widget::text(kind.heading()));
                    if config.compact {
                        alarms.extend(
                            primary.add_widget_set(render::sqs::group_widget_set(&records, config)),
                        );
                    } else {
                        render_each(&mut primary, kind, &records, config, &mut alarms);
                    }
                }
                ServiceKind::DynamoDb => {
                    primary.add_widget(Widget::text(kind.heading()));
                    primary.add_widget(render::dynamodb::overall_widget(&region));
                    render_each(&mut primary, kind, &records, config, &mut alarms);
                    primary.add_widget(Widget::spacer(1));
                }
                ServiceKind::AppSync => {
                    primary.add_widget(Widget::text(kind.heading()));
                    primary.add_widget(render::appsync::regional_widget(&region));
                    render_each(&mut primary, kind, &records, config, &mut alarms);
                    primary.add_widget(Widget::spacer(1));
                }
                ServiceKind::CapacityReservation => {
                    primary.add_widget(Widget::text(kind.heading()));
                    alarms.extend(primary.add_widget_set(render::capacity::group_widget_set(
                        &records, config,
                    )));
                }
                ServiceKind::TransitGateway | ServiceKind::NatGateway => {
                    route_category(&mut registry, "Network", kind, &records, config, &mut alarms);
                }
                ServiceKind::Wafv2 | ServiceKind::CloudFront => {
                    route_category(&mut registry, "Edge", kind, &records, config, &mut alarms);
                }
                ServiceKind::AutoScalingGroup => {
                    primary.add_widget(Widget::text(kind.heading()));
                    render_each(&mut primary, kind, &records, config, &mut alarms);
                    primary.add_widget(Widget::spacer(1));
                }
                _ => {
                    primary.add_widget(Widget::text(kind.heading()));
                    render_each(&mut primary, kind, &records, config, &mut alarms);
                }
            }
        }
    }

    if let Some(topic) = config.alarm_topic.as_deref() {
        for alarm in &mut alarms {
            alarm.attach_topic(topic);
        }
    }

    let mut dashboards = primary.finish();
    if let Some(widget) = status_widget("Alarms", &alarms) {
        dashboards[0].prepend_row(WidgetRow::single(widget));
    }
    dashboards.extend(registry.finish());

    info!(
        dashboards = dashboards.len(),
        alarms = alarms.len(),
        "Generated dashboard plan"
    );
    Ok(DashboardPlan { dashboards, alarms })
}

/// Render every record of a bucket through its per-resource renderer
/// into the given capacity manager.
fn render_each(
    manager: &mut DashboardManager,
    kind: ServiceKind,
    records: &[ResourceRecord],
    config: &GeneratorConfig,
    alarms: &mut Vec<Alarm>,
) {
    let Some(renderer) = renderer_for(kind) else {
        return;
    };
    for record in records {
        alarms.extend(manager.add_widget_set(renderer.render(record, config)));
    }
}

/// Route a bucket to one shared registry dashboard (e.g. `Network`,
/// `Edge`), with the service heading emitted ahead of its records.
fn route_category(
    registry: &mut DashboardRegistry,
    category: &str,
    kind: ServiceKind,
    records: &[ResourceRecord],
    config: &GeneratorConfig,
    alarms: &mut Vec<Alarm>,
) {
    let Some(renderer) = renderer_for(kind) else {
        return;
    };
    let manager = registry.get_or_create(DashboardKey::category(category), None);
    manager.add_widget(Widget::text(kind.heading()));
    for record in records {
        alarms.extend(manager.add_widget_set(renderer.render(record, config)));
    }
}

/// Route EC2/Lambda records to their category dashboard, splitting by
/// grouping-tag value when grouping is on. Records without the tag fall
/// back to the shared ungrouped dashboard.
fn route_grouped(
    registry: &mut DashboardRegistry,
    category: &str,
    kind: ServiceKind,
    records: &[ResourceRecord],
    config: &GeneratorConfig,
    alarms: &mut Vec<Alarm>,
) {
    let Some(renderer) = renderer_for(kind) else {
        return;
    };
    for record in records {
        let group = config
            .grouping_tag()
            .filter(|_| is_group_eligible(kind))
            .and_then(|key| group_value(record, key));
        let (key, header) = match group {
            Some(group) => {
                let header = format!("{} - {group}", kind.heading());
                (DashboardKey::grouped(category, group), header)
            }
            None => (DashboardKey::category(category), kind.heading().to_string()),
        };
        let manager = registry.get_or_create(key, Some(Widget::text(header)));
        alarms.extend(manager.add_widget_set(renderer.render(record, config)));
    }
}

/// Compact Lambda path: partition the region's functions by group, chunk
/// each group, and emit multi-series batch sets onto a per-group
/// dashboard headed by that group's alarm-status widget.
fn compact_lambda(
    registry: &mut DashboardRegistry,
    region: &str,
    records: Vec<ResourceRecord>,
    config: &GeneratorConfig,
    alarms: &mut Vec<Alarm>,
) {
    let groups = partition_by_group(records, config.grouping_tag());
    for (group, members) in groups {
        let mut group_alarms = Vec::new();
        let mut sets = Vec::new();
        for (index, chunk) in members.chunks(config.resources_per_widget()).enumerate() {
            let mut ws =
                render::lambda::group_widget_set(chunk, &format!("{group}-{index}"), config);
            group_alarms.append(&mut ws.alarms);
            sets.push(ws);
        }

        let key = DashboardKey::grouped("Lambda", format!("{group}-{region}"));
        let manager = registry.get_or_create(key, None);
        if let Some(widget) = status_widget(&format!("Alarms {group}"), &group_alarms) {
            manager.add_widget(widget);
        }
        for ws in sets {
            manager.add_widget_set(ws);
        }
        alarms.append(&mut group_alarms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    fn lambda(name: &str) -> ResourceRecord {
        ResourceRecord::from_arn(format!(
            "arn:aws:lambda:eu-west-1:123456789012:function:{name}"
        ))
    }

    fn queue(name: &str) -> ResourceRecord {
        ResourceRecord::from_arn(format!("arn:aws:sqs:eu-west-1:123456789012:{name}"))
    }

    #[test]
    fn empty_input_yields_one_empty_dashboard() {
        let plan = generate(Vec::new(), &GeneratorConfig::default()).unwrap();
        assert_eq!(plan.dashboards.len(), 1);
        assert_eq!(plan.dashboards[0].name, "Fleetboard-dashboard");
        assert!(plan.dashboards[0].is_empty());
        assert!(plan.alarms.is_empty());
    }

    #[test]
    fn lambdas_land_on_the_lambda_dashboard() {
        let plan = generate(
            vec![lambda("orders"), lambda("billing")],
            &GeneratorConfig::default(),
        )
        .unwrap();
        let names: Vec<&str> = plan.dashboards.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Fleetboard-dashboard", "Fleetboard-Lambda-Dashboard"]
        );
        // region header only on the primary
        assert_eq!(plan.dashboards[0].widget_count(), 1);
        // heading + 2 * (header + 3 graphs)
        assert_eq!(plan.dashboards[1].widget_count(), 9);
    }

    #[test]
    fn grouping_splits_lambda_dashboards() {
        let mut tagged = lambda("orders");
        tagged.tags.push(Tag {
            key: "Service".into(),
            value: "payments".into(),
        });
        let config = GeneratorConfig {
            grouping_tag_key: Some("Service".into()),
            ..Default::default()
        };
        let plan = generate(vec![tagged, lambda("misc")], &config).unwrap();
        let names: Vec<&str> = plan.dashboards.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"Fleetboard-Lambda-Dashboard"));
        assert!(names.contains(&"Fleetboard-Lambda-Dashboard-payments"));
    }

    #[test]
    fn compact_mode_batches_lambdas_with_alarms() {
        let config = GeneratorConfig {
            compact: true,
            compact_max_resources_per_widget: 10,
            ..Default::default()
        };
        let resources: Vec<_> = (0..25).map(|i| lambda(&format!("fn{i}"))).collect();
        let plan = generate(resources, &config).unwrap();

        let batch = plan
            .dashboards
            .iter()
            .find(|d| d.name == "Fleetboard-Lambda-Dashboard-default-eu-west-1")
            .unwrap();
        // group status widget + 3 batches * (header + 3 graphs)
        assert_eq!(batch.widget_count(), 13);
        assert_eq!(plan.alarms.len(), 25);
        // primary carries the fleet-wide status widget up front
        match &plan.dashboards[0].rows[0].widgets[0] {
            Widget::AlarmStatus { alarms, .. } => assert_eq!(alarms.len(), 25),
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn compact_sqs_stays_on_the_primary() {
        let config = GeneratorConfig {
            compact: true,
            compact_max_resources_per_widget: 10,
            ..Default::default()
        };
        let plan = generate(vec![queue("a"), queue("b")], &config).unwrap();
        assert_eq!(plan.dashboards.len(), 1);
        // region header + heading + batch header + 4 graphs
        assert_eq!(plan.dashboards[0].widget_count(), 7);
    }

    #[test]
    fn alarm_topic_is_attached_to_every_alarm() {
        let config = GeneratorConfig {
            alarm_topic: Some("arn:aws:sns:eu-west-1:123456789012:alerts".into()),
            ..Default::default()
        };
        let plan = generate(
            vec![ResourceRecord::from_arn(
                "arn:aws:sns:eu-west-1:123456789012:orders",
            )],
            &config,
        )
        .unwrap();
        assert_eq!(plan.alarms.len(), 1);
        assert_eq!(
            plan.alarms[0].alarm_actions,
            vec!["arn:aws:sns:eu-west-1:123456789012:alerts".to_string()]
        );
    }

    #[test]
    fn network_services_share_one_dashboard() {
        let plan = generate(
            vec![
                ResourceRecord::from_arn(
                    "arn:aws:ec2:eu-west-1:123456789012:transit-gateway/tgw-1",
                ),
                ResourceRecord::from_arn("arn:aws:ec2:eu-west-1:123456789012:natgateway/nat-1"),
            ],
            &GeneratorConfig::default(),
        )
        .unwrap();
        let names: Vec<&str> = plan.dashboards.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Fleetboard-dashboard", "Fleetboard-Network-Dashboard"]
        );
        // two headings + two widget sets of (header + 2 graphs)
        assert_eq!(plan.dashboards[1].widget_count(), 8);
    }

    #[test]
    fn overflow_applies_to_the_primary_sequence() {
        let config = GeneratorConfig {
            max_widgets_per_dashboard: 10,
            ..Default::default()
        };
        // each queue set is header + 4 graphs = 5 widgets
        let resources: Vec<_> = (0..5).map(|i| queue(&format!("q{i}"))).collect();
        let plan = generate(resources, &config).unwrap();
        let primary: Vec<&Dashboard> = plan
            .dashboards
            .iter()
            .filter(|d| d.name.starts_with("Fleetboard-dashboard"))
            .collect();
        assert!(primary.len() > 1);
        for dashboard in &primary {
            assert!(dashboard.widget_count() <= 10, "{}", dashboard.name);
        }
    }
}
