use {
    serde::{ser::Serializer, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

const PARTITION_START: usize = 4;

/// An Amazon Resource Name (ARN) rendered from an [ArnTemplate][crate::ArnTemplate].
///
/// The rendered string may contain `*` wildcards in any component that was not supplied, e.g.
/// `arn:*:elasticfilesystem:us-east-1:*:file-system/fs-123`. It is suitable for the `Resource` element of a policy; no
/// attempt is made to check that the components are valid for AWS.
///
/// [ResourceArn] objects are immutable.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ResourceArn {
    arn: String,
    service_start: usize,
    region_start: usize,
    account_id_start: usize,
    resource_start: usize,
}

impl ResourceArn {
    /// Create a new ARN from the specified components.
    ///
    /// * `partition` - The partition the resource is in.
    /// * `service` - The service the resource belongs to.
    /// * `region` - The region the resource is in. Empty for global resources.
    /// * `account_id` - The account ID the resource belongs to. Empty for resources without an owner account.
    /// * `resource` - The resource path, which may itself contain `:` and `/`.
    pub fn new(partition: &str, service: &str, region: &str, account_id: &str, resource: &str) -> Self {
        let arn = format!("arn:{partition}:{service}:{region}:{account_id}:{resource}");
        let service_start = PARTITION_START + partition.len() + 1;
        let region_start = service_start + service.len() + 1;
        let account_id_start = region_start + region.len() + 1;
        let resource_start = account_id_start + account_id.len() + 1;

        Self {
            arn,
            service_start,
            region_start,
            account_id_start,
            resource_start,
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.arn[PARTITION_START..self.service_start - 1]
    }

    #[inline]
    pub fn service(&self) -> &str {
        &self.arn[self.service_start..self.region_start - 1]
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.arn[self.region_start..self.account_id_start - 1]
    }

    #[inline]
    pub fn account_id(&self) -> &str {
        &self.arn[self.account_id_start..self.resource_start - 1]
    }

    #[inline]
    pub fn resource(&self) -> &str {
        &self.arn[self.resource_start..]
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.arn
    }

    /// Indicates whether any component of the ARN contains a `*` wildcard.
    #[inline]
    pub fn has_wildcards(&self) -> bool {
        self.arn[PARTITION_START..].contains('*')
    }
}

impl Display for ResourceArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.arn)
    }
}

impl From<ResourceArn> for String {
    fn from(arn: ResourceArn) -> Self {
        arn.arn
    }
}

impl AsRef<str> for ResourceArn {
    fn as_ref(&self) -> &str {
        &self.arn
    }
}

impl Serialize for ResourceArn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.arn)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ResourceArn,
        pretty_assertions::{assert_eq, assert_ne},
        std::{collections::hash_map::DefaultHasher, hash::Hash},
    };

    #[test_log::test]
    fn check_arn_derived() {
        let arn1a = ResourceArn::new("*", "ec2", "us-*-1", "123456789012", "instance/*");
        let arn1b = arn1a.clone();
        let arn2 = ResourceArn::new("aws", "ec2", "us-east-1", "123456789012", "instance/*");
        let arn3 = ResourceArn::new("aws", "s3", "", "", "examplebucket");

        assert_eq!(arn1a, arn1b);
        assert_ne!(arn1a, arn2);

        // Ensure we can derive a hash for the arn.
        let mut h = DefaultHasher::new();
        arn3.hash(&mut h);

        // Ensure we can debug print the arn.
        _ = format!("{arn3:?}");

        assert_eq!(arn3.to_string(), "arn:aws:s3:::examplebucket");
        assert_eq!(String::from(arn3), "arn:aws:s3:::examplebucket");
    }

    #[test_log::test]
    fn check_arn_components() {
        let arn = ResourceArn::new("aws", "codebuild", "us-west-2", "123456789012", "build/proj:abcd");
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "codebuild");
        assert_eq!(arn.region(), "us-west-2");
        assert_eq!(arn.account_id(), "123456789012");
        assert_eq!(arn.resource(), "build/proj:abcd");
        assert_eq!(arn.as_str(), "arn:aws:codebuild:us-west-2:123456789012:build/proj:abcd");
        assert!(!arn.has_wildcards());

        let global = ResourceArn::new("aws", "iam", "", "123456789012", "role/*");
        assert_eq!(global.region(), "");
        assert_eq!(global.account_id(), "123456789012");
        assert!(global.has_wildcards());
    }

    #[test_log::test]
    fn check_serialize() {
        let arn = ResourceArn::new("aws", "sqs", "us-east-1", "123456789012", "queue");
        assert_eq!(serde_json::to_string(&arn).unwrap(), r#""arn:aws:sqs:us-east-1:123456789012:queue""#);
    }
}
