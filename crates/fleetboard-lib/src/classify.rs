//! Resource classification
//!
//! Buckets discovered records by region and inferred service type. The
//! service is derived from ARN substring patterns (plus two auxiliary
//! fields) through an ordered rule table: some patterns are substrings of
//! others, so the table is evaluated most-specific-first and the first
//! match wins. A record matching no rule is dropped with a log line;
//! a record with no ARN at all aborts the run.

use crate::arn;
use crate::error::GenerateError;
use crate::models::ResourceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Recognized service types, declared in classification precedence
/// order. The `Ord` derive follows declaration order, which keeps bucket
/// iteration deterministic and aligned with the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    ApiGatewayRest,
    ApiGatewayV2,
    AppSync,
    MediaPackage,
    MediaLive,
    DynamoDb,
    Efs,
    Ec2Instance,
    Lambda,
    AutoScalingGroup,
    Sqs,
    Aurora,
    Elbv2,
    Elbv1,
    CapacityReservation,
    Ecs,
    TransitGateway,
    NatGateway,
    Sns,
    Wafv2,
    CloudFront,
    S3,
}

impl ServiceKind {
    /// Stable lowercase tag used in logs and CLI summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::ApiGatewayRest => "apigatewayv1",
            ServiceKind::ApiGatewayV2 => "apigatewayv2",
            ServiceKind::AppSync => "appsync",
            ServiceKind::MediaPackage => "mediapackage",
            ServiceKind::MediaLive => "medialive",
            ServiceKind::DynamoDb => "dynamodb",
            ServiceKind::Efs => "elasticfilesystem",
            ServiceKind::Ec2Instance => "ec2instances",
            ServiceKind::Lambda => "lambda",
            ServiceKind::AutoScalingGroup => "autoscalinggroup",
            ServiceKind::Sqs => "sqs",
            ServiceKind::Aurora => "aurora",
            ServiceKind::Elbv2 => "elbv2",
            ServiceKind::Elbv1 => "elbv1",
            ServiceKind::CapacityReservation => "odcr",
            ServiceKind::Ecs => "ecs",
            ServiceKind::TransitGateway => "tgw",
            ServiceKind::NatGateway => "natgw",
            ServiceKind::Sns => "sns",
            ServiceKind::Wafv2 => "wafv2",
            ServiceKind::CloudFront => "cloudfront",
            ServiceKind::S3 => "s3",
        }
    }

    /// Markdown heading emitted above this service's widgets.
    pub fn heading(&self) -> &'static str {
        match self {
            ServiceKind::ApiGatewayRest => "## API Gateway V1 (REST)",
            ServiceKind::ApiGatewayV2 => "## API Gateway V2 (Websocket/HTTP)",
            ServiceKind::AppSync => "## AppSync",
            ServiceKind::MediaPackage => "## Media Package",
            ServiceKind::MediaLive => "## Media Live",
            ServiceKind::DynamoDb => "## DynamoDB",
            ServiceKind::Efs => "## EFS volumes",
            ServiceKind::Ec2Instance => "## EC2 Instances",
            ServiceKind::Lambda => "## Lambdas",
            ServiceKind::AutoScalingGroup => "## Autoscaling groups",
            ServiceKind::Sqs => "## SQS Queues",
            ServiceKind::Aurora => "## Aurora",
            ServiceKind::Elbv2 => "## ELB (app/net)",
            ServiceKind::Elbv1 => "## ELB Classic",
            ServiceKind::CapacityReservation => "## On Demand Capacity Reservations",
            ServiceKind::Ecs => "## ECS Clusters",
            ServiceKind::TransitGateway => "## Transit Gateways",
            ServiceKind::NatGateway => "## NAT Gateways",
            ServiceKind::Sns => "## SNS Topics",
            ServiceKind::Wafv2 => "## WAF WebACLs",
            ServiceKind::CloudFront => "## CloudFront",
            ServiceKind::S3 => "## S3 Buckets",
        }
    }
}

/// One classification rule: the kind plus its predicate over the ARN and
/// auxiliary record fields.
struct Rule {
    kind: ServiceKind,
    matches: fn(&str, &ResourceRecord) -> bool,
}

/// Rule table in precedence order. Order matters: REST APIs are matched
/// before v2 APIs, ELBv2 before ELBv1, and the gateway rules must see
/// `:ec2:` to avoid swallowing other `/`-path ARNs.
const RULES: &[Rule] = &[
    Rule {
        kind: ServiceKind::ApiGatewayRest,
        matches: |a, _| {
            a.contains(":apigateway:") && a.contains("/restapis/") && !a.contains("stages")
        },
    },
    Rule {
        kind: ServiceKind::ApiGatewayV2,
        matches: |a, _| a.contains(":apigateway:") && a.contains("/apis/") && !a.contains("stages"),
    },
    Rule {
        kind: ServiceKind::AppSync,
        matches: |a, _| a.contains(":appsync:"),
    },
    Rule {
        kind: ServiceKind::MediaPackage,
        matches: |a, _| a.contains(":mediapackage:"),
    },
    Rule {
        kind: ServiceKind::MediaLive,
        matches: |a, _| a.contains(":medialive:"),
    },
    Rule {
        kind: ServiceKind::DynamoDb,
        matches: |a, _| a.contains(":dynamodb:") && a.contains(":table/"),
    },
    Rule {
        kind: ServiceKind::Efs,
        matches: |a, _| a.contains(":elasticfilesystem:"),
    },
    Rule {
        kind: ServiceKind::Ec2Instance,
        matches: |a, _| a.contains(":ec2:") && a.contains(":instance/"),
    },
    Rule {
        kind: ServiceKind::Lambda,
        matches: |a, _| a.contains(":lambda:") && a.contains(":function:"),
    },
    Rule {
        kind: ServiceKind::AutoScalingGroup,
        matches: |a, _| a.contains(":autoscaling:") && a.contains(":autoScalingGroup:"),
    },
    Rule {
        kind: ServiceKind::Sqs,
        matches: |a, _| a.contains(":sqs:"),
    },
    Rule {
        kind: ServiceKind::Aurora,
        matches: |a, r| a.contains(":rds:") && a.contains(":cluster:") && r.engine.is_some(),
    },
    Rule {
        kind: ServiceKind::Elbv2,
        matches: |a, _| {
            a.contains(":elasticloadbalancing:")
                && (a.contains("/net/") || a.contains("/app/"))
                && !a.contains(":targetgroup/")
        },
    },
    Rule {
        kind: ServiceKind::Elbv1,
        matches: |a, _| {
            a.contains(":elasticloadbalancing:")
                && !a.contains("/net/")
                && !a.contains("/app/")
                && !a.contains(":targetgroup/")
        },
    },
    Rule {
        kind: ServiceKind::CapacityReservation,
        matches: |a, _| a.contains(":capacity-reservation/"),
    },
    Rule {
        kind: ServiceKind::Ecs,
        matches: |a, _| a.contains(":ecs:") && a.contains(":cluster/"),
    },
    Rule {
        kind: ServiceKind::TransitGateway,
        matches: |a, _| a.contains(":transit-gateway/") && a.contains(":ec2:"),
    },
    Rule {
        kind: ServiceKind::NatGateway,
        matches: |a, _| a.contains(":natgateway/") && a.contains(":ec2:"),
    },
    Rule {
        kind: ServiceKind::Sns,
        matches: |a, _| a.contains(":sns:"),
    },
    Rule {
        kind: ServiceKind::Wafv2,
        matches: |a, _| a.contains(":wafv2:"),
    },
    Rule {
        kind: ServiceKind::CloudFront,
        matches: |a, _| a.contains(":cloudfront:") && a.contains(":distribution/"),
    },
    Rule {
        kind: ServiceKind::S3,
        matches: |a, _| a.contains("arn:aws:s3:"),
    },
];

/// First matching rule for a record, or `None` when the ARN is not
/// recognized.
pub fn service_kind(record: &ResourceRecord) -> Option<ServiceKind> {
    let arn = record.arn();
    RULES
        .iter()
        .find(|rule| (rule.matches)(arn, record))
        .map(|rule| rule.kind)
}

/// Region -> service -> records, in input order within each bucket.
pub type RegionServiceBuckets = BTreeMap<String, BTreeMap<ServiceKind, Vec<ResourceRecord>>>;

/// Bucket records by (region, service).
///
/// Fails on the first record without an ARN; succeeds otherwise, silently
/// dropping unrecognized ARNs so schema drift in the collector does not
/// abort a whole run.
pub fn classify(resources: Vec<ResourceRecord>) -> Result<RegionServiceBuckets, GenerateError> {
    for (index, record) in resources.iter().enumerate() {
        if record.resource_arn.as_deref().map_or(true, str::is_empty) {
            return Err(GenerateError::MissingResourceArn { index });
        }
    }

    let mut buckets = RegionServiceBuckets::new();
    for record in resources {
        let Some(kind) = service_kind(&record) else {
            debug!(arn = %record.arn(), "Dropping unrecognized resource");
            continue;
        };
        let region = arn::region(record.arn()).to_string();
        buckets
            .entry(region)
            .or_default()
            .entry(kind)
            .or_default()
            .push(record);
    }
    Ok(buckets)
}
