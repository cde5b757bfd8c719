//! ARN string helpers
//!
//! ARNs are treated purely as delimited strings. Nothing here interprets
//! partitions or accounts; classification works on substring patterns and
//! renderers pull out the trailing resource id.

/// Sentinel region for ARNs with an empty region field (IAM, S3,
/// CloudFront and other non-regional services).
pub const GLOBAL_REGION: &str = "global";

/// Region of an ARN: the 4th colon-delimited field, or [`GLOBAL_REGION`]
/// when that field is empty or absent.
pub fn region(arn: &str) -> &str {
    match arn.split(':').nth(3) {
        Some("") | None => GLOBAL_REGION,
        Some(region) => region,
    }
}

/// Last segment after splitting on `sep`. Returns the whole string when
/// the separator never occurs.
pub fn last_segment(arn: &str, sep: char) -> &str {
    arn.rsplit(sep).next().unwrap_or(arn)
}

/// Last `/`-delimited segment, the usual resource id shape
/// (`...:instance/i-0abc` -> `i-0abc`).
pub fn resource_id(arn: &str) -> &str {
    last_segment(arn, '/')
}

/// Last `:`-delimited segment (`...:function:my-fn` -> `my-fn`).
pub fn resource_name(arn: &str) -> &str {
    last_segment(arn, ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_fourth_field() {
        assert_eq!(
            region("arn:aws:lambda:eu-west-1:123456789012:function:fn"),
            "eu-west-1"
        );
    }

    #[test]
    fn empty_region_maps_to_global() {
        assert_eq!(region("arn:aws:s3:::my-bucket"), GLOBAL_REGION);
        assert_eq!(region("arn:aws:iam::123456789012:role/foo"), GLOBAL_REGION);
    }

    #[test]
    fn short_string_maps_to_global() {
        assert_eq!(region("not-an-arn"), GLOBAL_REGION);
    }

    #[test]
    fn trailing_segments() {
        assert_eq!(
            resource_id("arn:aws:ec2:eu-west-1:123456789012:instance/i-0abc"),
            "i-0abc"
        );
        assert_eq!(
            resource_name("arn:aws:lambda:eu-west-1:123456789012:function:my-fn"),
            "my-fn"
        );
        assert_eq!(resource_id("no-slashes"), "no-slashes");
    }
}
