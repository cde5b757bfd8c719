//! S3 bucket widgets
//!
//! Storage metrics are daily, so these graphs use a 86400s period.

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/S3";
const DAILY: u32 = 86_400;

pub struct S3;

impl Renderer for S3 {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let bucket = arn::resource_name(resource.arn());
        let region = arn::region(resource.arn());

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### Bucket [{bucket}](https://s3.console.aws.amazon.com/s3/buckets/{bucket})"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Size {bucket}"), region)
                .left(vec![MetricSpec::new(NAMESPACE, "BucketSizeBytes")
                    .dim("BucketName", bucket)
                    .dim("StorageType", "StandardStorage")
                    .statistic(Statistic::Average)
                    .period_secs(DAILY)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Objects {bucket}"), region)
                .left(vec![MetricSpec::new(NAMESPACE, "NumberOfObjects")
                    .dim("BucketName", bucket)
                    .dim("StorageType", "AllStorageTypes")
                    .statistic(Statistic::Average)
                    .period_secs(DAILY)])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_daily_storage_metrics() {
        let record = ResourceRecord::from_arn("arn:aws:s3:::my-bucket");
        let ws = S3.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
        match &ws.rows[1].widgets[0] {
            Widget::Graph(g) => {
                assert_eq!(g.region, "global");
                assert_eq!(g.left[0].period_secs, DAILY);
                assert_eq!(g.left[0].dimensions[0].value, "my-bucket");
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
