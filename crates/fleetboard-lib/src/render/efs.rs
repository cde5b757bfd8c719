//! EFS file system widgets

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/EFS";

pub struct Efs;

impl Renderer for Efs {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let fs_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());
        let fs_name = resource.name_tag().unwrap_or(fs_id);

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### EFS [{fs_name}](https://{region}.console.aws.amazon.com/efs/home?region={region}#/file-systems/{fs_id})"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Connections {fs_id}"), region)
                .left(vec![fs_metric(fs_id, "ClientConnections", Statistic::Sum)])
                .size(8, 5)
                .into(),
            GraphWidget::new(format!("Throughput {fs_id}"), region)
                .left(vec![fs_metric(fs_id, "DataReadIOBytes", Statistic::Sum)])
                .right(vec![fs_metric(fs_id, "DataWriteIOBytes", Statistic::Sum)])
                .size(8, 5)
                .into(),
            GraphWidget::new(format!("IO limit {fs_id}"), region)
                .left(vec![fs_metric(fs_id, "PercentIOLimit", Statistic::Maximum)])
                .size(8, 5)
                .left_y_max(100.0)
                .into(),
        ]));
        ws
    }
}

fn fs_metric(fs_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("FileSystemId", fs_id)
        .statistic(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_three_graphs() {
        let record = ResourceRecord::from_arn(
            "arn:aws:elasticfilesystem:eu-west-1:123456789012:file-system/fs-0abc",
        );
        let ws = Efs.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 4);
        match &ws.rows[1].widgets[0] {
            Widget::Graph(g) => assert_eq!(g.left[0].dimensions[0].value, "fs-0abc"),
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
