//! Per-service widget renderers
//!
//! Each renderer translates one discovered resource into a [`WidgetSet`]:
//! rows of graph widgets plus any threshold alarms. Renderers are pure
//! (no shared state), derive every generated name deterministically from
//! resource id + region + base name, and omit widgets whose source
//! fields are missing instead of failing.
//!
//! High-cardinality services additionally provide batch entry points
//! (`lambda::group_widget_set`, `sqs::group_widget_set`) that aggregate
//! many resources into one multi-series widget set for compact mode;
//! capacity reservations are only ever rendered as one per-region batch
//! (`capacity::group_widget_set`).

pub mod apigateway;
pub mod appsync;
pub mod aurora;
pub mod autoscaling;
pub mod capacity;
pub mod dynamodb;
pub mod ec2;
pub mod ecs;
pub mod edge;
pub mod elb;
pub mod efs;
pub mod lambda;
pub mod media;
pub mod network;
pub mod s3;
pub mod sns;
pub mod sqs;

use crate::classify::ServiceKind;
use crate::config::GeneratorConfig;
use crate::models::ResourceRecord;
use crate::widgets::WidgetSet;

/// The uniform capability every per-service renderer implements.
pub trait Renderer: Sync {
    /// Metrics namespace the renderer draws from.
    fn namespace(&self) -> &'static str;

    /// Produce the widget rows and alarms for one resource.
    fn render(&self, resource: &ResourceRecord, config: &GeneratorConfig) -> WidgetSet;
}

/// Per-resource renderer for a service kind. Capacity reservations are
/// rendered per region through [`capacity::group_widget_set`] and have
/// no per-resource form.
pub fn renderer_for(kind: ServiceKind) -> Option<&'static dyn Renderer> {
    Some(match kind {
        ServiceKind::ApiGatewayRest => &apigateway::RestApi,
        ServiceKind::ApiGatewayV2 => &apigateway::HttpWsApi,
        ServiceKind::AppSync => &appsync::AppSync,
        ServiceKind::MediaPackage => &media::MediaPackage,
        ServiceKind::MediaLive => &media::MediaLive,
        ServiceKind::DynamoDb => &dynamodb::DynamoDb,
        ServiceKind::Efs => &efs::Efs,
        ServiceKind::Ec2Instance => &ec2::Ec2Instance,
        ServiceKind::Lambda => &lambda::Lambda,
        ServiceKind::AutoScalingGroup => &autoscaling::AutoScalingGroup,
        ServiceKind::Sqs => &sqs::Sqs,
        ServiceKind::Aurora => &aurora::Aurora,
        ServiceKind::Elbv2 => &elb::Elbv2,
        ServiceKind::Elbv1 => &elb::Elbv1,
        ServiceKind::CapacityReservation => return None,
        ServiceKind::Ecs => &ecs::Ecs,
        ServiceKind::TransitGateway => &network::TransitGateway,
        ServiceKind::NatGateway => &network::NatGateway,
        ServiceKind::Sns => &sns::Sns,
        ServiceKind::Wafv2 => &edge::Wafv2,
        ServiceKind::CloudFront => &edge::CloudFront,
        ServiceKind::S3 => &s3::S3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_rendering_path() {
        use ServiceKind::*;
        let kinds = [
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
            Ecs,
            TransitGateway,
            NatGateway,
            Sns,
            Wafv2,
            CloudFront,
            S3,
        ];
        for kind in kinds {
            assert!(renderer_for(kind).is_some(), "{kind:?}");
        }
        // batch-only
        assert!(renderer_for(CapacityReservation).is_none());
    }
}
