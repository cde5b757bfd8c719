//! API Gateway widgets (REST and v2 HTTP/WebSocket)

use super::Renderer;
use crate::arn;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::{GraphWidget, MetricSpec, Statistic, Widget, WidgetRow, WidgetSet};

const NAMESPACE: &str = "AWS/ApiGateway";

pub struct RestApi;

impl Renderer for RestApi {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let api_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());
        let api_name = resource.name_tag().unwrap_or(api_id);

        let mut ws = WidgetSet::new(NAMESPACE);
        ws.push_widget(Widget::text(format!(
            "### REST API [{api_name}](https://{region}.console.aws.amazon.com/apigateway/home?region={region}#/apis/{api_id}/resources)"
        )));
        ws.push_row(WidgetRow::new(vec![
            GraphWidget::new(format!("Requests {api_name}"), region)
                .left(vec![api_metric(api_name, "Count", Statistic::Sum)])
                .right(vec![api_metric(api_name, "Latency", Statistic::Average)])
                .size(12, 5)
                .into(),
            GraphWidget::new(format!("Errors {api_name}"), region)
                .left(vec![api_metric(api_name, "4XXError", Statistic::Sum)])
                .right(vec![api_metric(api_name, "5XXError", Statistic::Sum)])
                .size(12, 5)
                .into(),
        ]));
        ws
    }
}

fn api_metric(api_name: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("ApiName", api_name)
        .statistic(statistic)
}

pub struct HttpWsApi;

impl Renderer for HttpWsApi {
    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn render(&self, resource: &ResourceRecord, _config: &GeneratorConfig) -> WidgetSet {
        let api_id = arn::resource_id(resource.arn());
        let region = arn::region(resource.arn());
        let websocket = resource
            .api_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("WEBSOCKET"));

        let mut ws = WidgetSet::new(NAMESPACE);
        if websocket {
            ws.push_widget(Widget::text(format!(
                "### WebSocket API [{api_id}](https://{region}.console.aws.amazon.com/apigateway/main/api-detail?api={api_id}&region={region})"
            )));
            ws.push_row(WidgetRow::new(vec![
                GraphWidget::new(format!("Connections/Messages {api_id}"), region)
                    .left(vec![v2_metric(api_id, "ConnectCount", Statistic::Sum)])
                    .right(vec![v2_metric(api_id, "MessageCount", Statistic::Sum)])
                    .size(12, 5)
                    .into(),
                GraphWidget::new(format!("Errors {api_id}"), region)
                    .left(vec![
                        v2_metric(api_id, "ClientError", Statistic::Sum),
                        v2_metric(api_id, "ExecutionError", Statistic::Sum),
                    ])
                    .right(vec![v2_metric(api_id, "IntegrationLatency", Statistic::Average)])
                    .size(12, 5)
                    .into(),
            ]));
        } else {
            ws.push_widget(Widget::text(format!(
                "### HTTP API [{api_id}](https://{region}.console.aws.amazon.com/apigateway/main/api-detail?api={api_id}&region={region})"
            )));
            ws.push_row(WidgetRow::new(vec![
                GraphWidget::new(format!("Requests {api_id}"), region)
                    .left(vec![v2_metric(api_id, "Count", Statistic::Sum)])
                    .right(vec![v2_metric(api_id, "Latency", Statistic::Average)])
                    .size(12, 5)
                    .into(),
                GraphWidget::new(format!("Errors {api_id}"), region)
                    .left(vec![v2_metric(api_id, "4xx", Statistic::Sum)])
                    .right(vec![v2_metric(api_id, "5xx", Statistic::Sum)])
                    .size(12, 5)
                    .into(),
            ]));
        }
        ws
    }
}

fn v2_metric(api_id: &str, metric: &str, statistic: Statistic) -> MetricSpec {
    MetricSpec::new(NAMESPACE, metric)
        .dim("ApiId", api_id)
        .statistic(statistic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_api_renders_two_graphs() {
        let record = ResourceRecord::from_arn(
            "arn:aws:apigateway:eu-west-1::/restapis/abc123",
        );
        let ws = RestApi.render(&record, &GeneratorConfig::default());
        assert_eq!(ws.widget_count(), 3);
    }

    #[test]
    fn v2_discriminates_on_protocol_type() {
        let mut record =
            ResourceRecord::from_arn("arn:aws:apigateway:eu-west-1::/apis/xyz789");
        record.api_type = Some("WEBSOCKET".into());
        let ws = HttpWsApi.render(&record, &GeneratorConfig::default());
        match &ws.rows[0].widgets[0] {
            Widget::Text { markdown, .. } => assert!(markdown.contains("WebSocket")),
            other => panic!("unexpected widget: {other:?}"),
        }

        record.api_type = Some("HTTP".into());
        let ws = HttpWsApi.render(&record, &GeneratorConfig::default());
        match &ws.rows[0].widgets[0] {
            Widget::Text { markdown, .. } => assert!(markdown.contains("HTTP API")),
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn missing_protocol_defaults_to_http() {
        let record =
            ResourceRecord::from_arn("arn:aws:apigateway:eu-west-1::/apis/xyz789");
        let ws = HttpWsApi.render(&record, &GeneratorConfig::default());
        match &ws.rows[0].widgets[0] {
            Widget::Text { markdown, .. } => assert!(markdown.contains("HTTP API")),
            other => panic!("unexpected widget: {other:?}"),
        }
    }
}
