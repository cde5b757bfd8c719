//! Edge service widgets (WAFv2 web ACLs and CloudFront distributions)

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

pub struct Wafv2;

impl Renderer for Wafv2 {
    fn namespace(&self) -> &'static str {
        "AWS/WAFV2"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        // .../webacl/{name}/{id} -> the name is the second-to-last segment.
        let arn = resource.arn();
        let mut segments = arn.rsplit('/');
        segments.next();
        let acl_name = segments.next().unwrap_or_else(|| arn::resource_id(arn));
        let region = arn::region(arn);

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### Web ACL {acl_name}")));
        ws.push_row(WidgetRow::single(
            GraphWidget::new(format!("Requests {acl_name}"), region)
                .left(vec![
                    acl_metric(acl_name, "AllowedRequests"),
                    acl_metric(acl_name, "BlockedRequests"),
                ])
                .size(24, 5),
        ));
        ws
    }
}

fn acl_metric(acl_name: &str, metric: &str) -> MetricSpec {
    MetricSpec::new("AWS/WAFV2", metric)
        .dim("WebACL", acl_name)
        .dim("Rule", "ALL")
        .statistic(Statistic::Sum)
}

pub struct CloudFront;

impl Renderer for CloudFront {
    fn namespace(&self) -> &'static str {
        "AWS/CloudFront"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let distribution_id = arn::resource_id(resource.arn());
        // CloudFront metrics only exist in us-east-1.
        let region = "us-east-1";

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!(
            "### Distribution [{distribution_id}](https://us-east-1.console.aws.amazon.com/cloudfront/v4/home#/distributions/{distribution_id})"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Requests {distribution_id}"), region)
                .left(vec![distribution_metric(distribution_id, "Requests", Statistic::Sum)])
                .right(vec![distribution_metric(
                    distribution_id,
                    "BytesDownloaded",
                    Statistic::Sum,
                )])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Error rates {distribution_id}"), region)
                .left(vec![
                    distribution_metric(distribution_id, "4xxErrorRate", Statistic::Average),
                    distribution_metric(distribution_id, "5xxErrorRate", Statistic::Average),
                ])
                .size(12, 5)
                .left_y_max(100.0)
                .into(),
        ]));
        ws
    }
}

fn distribution_metric(
    distribution_id: &str,
    metric: &str,
    statistic: Statistic,
) -> MetricSpec {
    MetricSpec::new("AWS/CloudFront", metric)
        .dim("DistributionId", distribution_id)
        .dim("Region", "Global")
        .statistic(statistic)
}
