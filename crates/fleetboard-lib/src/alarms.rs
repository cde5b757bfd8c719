//! Alarm definitions and fleet-wide aggregation
//!
//! Renderers emit [`Alarm`]s with deterministic names so repeated runs
//! against unchanged input neither rename nor duplicate anything. After
//! generation the accumulated set is folded into a single status widget
//! prepended to the primary dashboard.

use crate::widgets::{MetricSpec, Widget, GRID_WIDTH};
use serde::{Deserialize, Serialize};

/// Comparison operator for a threshold alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    GreaterThanThreshold,
    GreaterThanOrEqualToThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
}

/// How missing datapoints are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatMissingData {
    NotBreaching,
    Breaching,
    Ignore,
    Missing,
}

/// Named metric input to a math expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMetric {
    pub id: String,
    pub metric: MetricSpec,
}

/// What an alarm evaluates: a single metric or a math expression over
/// named metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmBinding {
    Metric(MetricSpec),
    Expression {
        expression: String,
        label: String,
        using: Vec<NamedMetric>,
    },
}

/// A threshold evaluation handed to the provisioning layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    /// Deterministic name derived from resource id, region and the
    /// deployment base name.
    pub name: String,
    pub region: String,
    pub binding: AlarmBinding,
    pub threshold: f64,
    pub comparison: Comparison,
    pub evaluation_periods: u32,
    pub datapoints_to_alarm: u32,
    pub treat_missing_data: TreatMissingData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alarm_actions: Vec<String>,
}

impl Alarm {
    /// Two-out-of-two threshold alarm over a single metric, not
    /// breaching on missing data. The shape nearly every renderer wants.
    pub fn threshold(
        name: impl Into<String>,
        region: impl Into<String>,
        metric: MetricSpec,
        comparison: Comparison,
        threshold: f64,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            binding: AlarmBinding::Metric(metric),
            threshold,
            comparison,
            evaluation_periods: 2,
            datapoints_to_alarm: 2,
            treat_missing_data: TreatMissingData::NotBreaching,
            alarm_actions: Vec::new(),
        }
    }

    /// Attach a notification topic. Idempotent: attaching the same topic
    /// twice keeps a single action.
    pub fn attach_topic(&mut self, topic_arn: &str) {
        if !self.alarm_actions.iter().any(|a| a == topic_arn) {
            self.alarm_actions.push(topic_arn.to_string());
        }
    }
}

/// Status widget height: one header row plus one row per four alarms.
pub fn status_widget_height(alarm_count: usize) -> u32 {
    let count = alarm_count as u32;
    1 + count / 4 + u32::from(count % 4 != 0)
}

/// Build the alarm-status widget for a set of alarms, or `None` when the
/// set is empty.
pub fn status_widget(title: &str, alarms: &[Alarm]) -> Option<Widget> {
    if alarms.is_empty() {
        return None;
    }
    Some(Widget::AlarmStatus {
        title: title.to_string(),
        alarms: alarms.iter().map(|a| a.name.clone()).collect(),
        width: GRID_WIDTH,
        height: status_widget_height(alarms.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Statistic;

    fn sample_alarm(name: &str) -> Alarm {
        Alarm::threshold(
            name,
            "eu-west-1",
            MetricSpec::new("AWS/Lambda", "Errors").statistic(Statistic::Sum),
            Comparison::GreaterThanThreshold,
            1.0,
        )
    }

    #[test]
    fn height_formula() {
        // (count, expected height); zero alarms emit no widget at all.
        for (count, expected) in [(1, 2), (4, 2), (5, 3), (8, 3), (9, 4)] {
            assert_eq!(status_widget_height(count), expected, "count {count}");
        }
    }

    #[test]
    fn no_widget_for_empty_set() {
        assert_eq!(status_widget("Alarms", &[]), None);
    }

    #[test]
    fn widget_lists_alarm_names() {
        let alarms = vec![sample_alarm("a"), sample_alarm("b")];
        match status_widget("Alarms", &alarms) {
            Some(Widget::AlarmStatus {
                alarms: names,
                height,
                width,
                ..
            }) => {
                assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(height, 2);
                assert_eq!(width, GRID_WIDTH);
            }
            other => panic!("unexpected widget: {other:?}"),
        }
    }

    #[test]
    fn topic_attachment_is_idempotent() {
        let mut alarm = sample_alarm("a");
        alarm.attach_topic("arn:aws:sns:eu-west-1:123456789012:alerts");
        alarm.attach_topic("arn:aws:sns:eu-west-1:123456789012:alerts");
        assert_eq!(alarm.alarm_actions.len(), 1);
    }
}
