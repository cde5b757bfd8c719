//! AppSync GraphQL API widgets

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/AppSync";

pub struct AppSync;

impl Renderer for AppSync {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let api_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());
        let api_name = resource.name_tag().unwrap_or(api_id);

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### GraphQL API [{api_name}](https://{region}.console.aws.amazon.com/appsync/home?region={region}#/{api_id}/v1/home)"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Requests/Latency {api_name}"), region)
                .left(vec![api_metric(api_id, "Latency", Statistic::Average)])
                .right(vec![api_metric(api_id, "Requests", Statistic::SampleCount)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Errors {api_name}"), region)
                .left(vec![api_metric(api_id, "4XXError", Statistic::Sum)])
                .right(vec![api_metric(api_id, "5XXError", Statistic::Sum)])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn api_metric(api_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("GraphQLAPIId", api_id)
        .statistic(statistic)
}

/// Region-wide token consumption widget, emitted once ahead of the
/// per-API rows.
pub fn regional_widget(region: &str) -> Widget {
    GraphWidget::new("AppSync token consumption", region)
        .left(vec![MetricSpec::new(NAMESPACE, "TokensConsumed").statistic(Statistic::Sum)])
        .size(24, 5)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_two_graphs() {
        let record = ResourceRecord::from_arn(
            "arn:aws:appsync:eu-west-1:123456789012:apis/abcdefgh",
        );
        let ws = AppSync.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
        assert!(ws.alarms.is_empty());
    }

    #[test]
    fn regional_widget_spans_the_grid() {
        match regional_widget("eu-west-1") {
            Widget::Graph(g) => {
                assert_eq!(g.width, 24);
                assert_eq!(g.left[0].metric_name, "TokensConsumed");
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
