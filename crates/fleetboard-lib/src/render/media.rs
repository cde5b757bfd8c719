//! Media service widgets (MediaPackage and MediaLive)

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

pub struct MediaPackage;

impl Renderer for MediaPackage {
    fn namespace(&self) -> &'static str {
        "AWS/MediaPackage"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let channel_id = resource
            .extra_str("Id")
            .unwrap_or_else(|| arn::resource_id(resource.arn()));
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### MediaPackage channel {channel_id}")));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Egress {channel_id}"), region)
                .left(vec![channel_metric(channel_id, "EgressRequestCount", Statistic::Sum)])
                .right(vec![channel_metric(channel_id, "EgressBytes", Statistic::Sum)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Egress latency {channel_id}"), region)
                .left(vec![channel_metric(
                    channel_id,
                    "EgressResponseTime",
                    Statistic::Average,
                )])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn channel_metric(channel_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new("AWS/MediaPackage", metric)
        .dim("Channel", channel_id)
        .statistic(statistic)
}

pub struct MediaLive;

impl Renderer for MediaLive {
    fn namespace(&self) -> &'static str {
        "AWS/MediaLive"
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let channel_id = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(self.namespace());
        ws.push_widget(Widget::text(format!("### MediaLive channel {channel_id}")));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Input {channel_id}"), region)
                .left(vec![live_metric(channel_id, "InputVideoFrameRate", Statistic::Average)])
                .right(vec![live_metric(channel_id, "FillMsec", Statistic::Maximum)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Errors {channel_id}"), region)
                .left(vec![
                    live_metric(channel_id, "InputTimecodesPresent", Statistic::Minimum),
                    live_metric(channel_id, "DroppedFrames", Statistic::Sum),
                ])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn live_metric(channel_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new("AWS/MediaLive", metric)
        .dim("ChannelId", channel_id)
        .statistic(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mediapackage_prefers_described_id() {
        let mut record = ResourceRecord::from_arn(
            "arn:aws:mediapackage:eu-west-1:123456789012:channels/fallback",
        );
        record.extras.insert("Id".into(), json!("live-main"));
        let ws = MediaPackage.render(&record, &GeneratorConfig::default());
        match &ws.rows[1].widgets[0] {
            Widget::Graph(g) => assert_eq!(g.left[0].dimensions[0].value, "live-main"),
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn medialive_uses_arn_segment() {
        let record = ResourceRecord::from_arn(
            "arn:aws:medialive:eu-west-1:123456789012:channel:1234567",
        );
        let ws = MediaLive.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
    }
}
