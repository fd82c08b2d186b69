//! Amazon Elastic File System.
//!
//! The `Client*` actions are not API calls; they authorize NFS clients mounting a file system and are evaluated
//! against the file system policy.

service_catalog! {
    prefix: "elasticfilesystem",
    name: "Amazon Elastic File System",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonelasticfilesystem.html",
    api_docs: "https://docs.aws.amazon.com/efs/latest/ug/API_",
    actions: {
        Backup {
            access: Write,
            description: "Grants permission to start a backup job for an existing file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/awsbackup.html",
        },
        ClientMount {
            access: Read,
            description: "Grants permission to allow an NFS client read-access to a file system",
            resources: ["fileSystem"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "elasticfilesystem:AccessPointArn",
                "elasticfilesystem:AccessedViaMountTarget",
            ],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/efs-client-authorization.html",
        },
        ClientRootAccess {
            access: Write,
            description: "Grants permission to allow an NFS client root-access to a file system",
            resources: ["fileSystem"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "elasticfilesystem:AccessPointArn",
                "elasticfilesystem:AccessedViaMountTarget",
            ],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/efs-client-authorization.html",
        },
        ClientWrite {
            access: Write,
            description: "Grants permission to allow an NFS client write-access to a file system",
            resources: ["fileSystem"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "elasticfilesystem:AccessPointArn",
                "elasticfilesystem:AccessedViaMountTarget",
            ],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/efs-client-authorization.html",
        },
        CreateAccessPoint {
            access: Write,
            description: "Grants permission to create an access point for the specified file system",
            resources: ["fileSystem"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        CreateFileSystem {
            access: Write,
            description: "Grants permission to create a new, empty file system",
            resources: ["fileSystem"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "elasticfilesystem:Encrypted"],
        },
        CreateMountTarget {
            access: Write,
            description: "Grants permission to create a mount target for a file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateReplicationConfiguration {
            access: Write,
            description: "Grants permission to create a new replication configuration",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateTags {
            access: Tagging,
            description: "Grants permission to create or overwrite tags associated with a file system; deprecated in favor of TagResource",
            resources: ["fileSystem"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        DeleteAccessPoint {
            access: Write,
            description: "Grants permission to delete the specified access point",
            resources: ["accessPoint"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteFileSystem {
            access: Write,
            description: "Grants permission to delete a file system, permanently severing access to its contents",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteFileSystemPolicy {
            access: PermissionsManagement,
            description: "Grants permission to delete the resource-level policy for a file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteMountTarget {
            access: Write,
            description: "Grants permission to delete the specified mount target",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteReplicationConfiguration {
            access: Write,
            description: "Grants permission to delete a replication configuration",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteTags {
            access: Tagging,
            description: "Grants permission to delete the specified tags from a file system; deprecated in favor of UntagResource",
            resources: ["fileSystem"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        DescribeAccessPoints {
            access: List,
            description: "Grants permission to view the descriptions of Amazon EFS access points",
            resources: ["accessPoint", "fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeAccountPreferences {
            access: Read,
            description: "Grants permission to view the account preferences in effect for the current region",
            resources: [],
            conditions: [],
        },
        DescribeBackupPolicy {
            access: Read,
            description: "Grants permission to view the BackupPolicy object for an Amazon EFS file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeFileSystemPolicy {
            access: Read,
            description: "Grants permission to view the resource-level policy for an Amazon EFS file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeFileSystems {
            access: List,
            description: "Grants permission to view the description of an Amazon EFS file system specified by file system CreationToken or FileSystemId; or to view the description of all file systems owned by the caller's AWS account in the AWS region of the endpoint that is being called",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLifecycleConfiguration {
            access: Read,
            description: "Grants permission to view the LifecycleConfiguration object for an Amazon EFS file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeMountTargetSecurityGroups {
            access: Read,
            description: "Grants permission to view the security groups in effect for a mount target",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeMountTargets {
            access: Read,
            description: "Grants permission to view the descriptions of all the current mount targets, or a specific mount target, for a file system",
            resources: ["accessPoint", "fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeReplicationConfigurations {
            access: Read,
            description: "Grants permission to view the description of an Amazon EFS replication configuration specified by FileSystemId; or to view the description of all replication configurations owned by the caller's AWS account in the AWS region of the endpoint that is being called",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeTags {
            access: Read,
            description: "Grants permission to view the tags associated with a file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to view the tags associated with the specified Amazon EFS resource",
            resources: ["accessPoint", "fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ModifyMountTargetSecurityGroups {
            access: Write,
            description: "Grants permission to modify the set of security groups in effect for a mount target",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutAccountPreferences {
            access: Write,
            description: "Grants permission to set the account preferences of the current user's AWS account in the current region",
            resources: [],
            conditions: [],
        },
        PutBackupPolicy {
            access: Write,
            description: "Grants permission to enable or disable automatic backups with AWS Backup by creating a new BackupPolicy object",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutFileSystemPolicy {
            access: PermissionsManagement,
            description: "Grants permission to apply a resource-level policy that defines the actions allowed or denied from given actors for the specified file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}", "elasticfilesystem:BypassPolicyLockoutSafetyCheck"],
        },
        PutLifecycleConfiguration {
            access: Write,
            description: "Grants permission to enable lifecycle management by creating a new LifecycleConfiguration object",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ReplicationRead {
            access: Read,
            description: "Grants permission to read file system data as the source of a replication configuration",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/efs-replication.html",
        },
        ReplicationWrite {
            access: Write,
            description: "Grants permission to write file system data as the destination of a replication configuration",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/efs-replication.html",
        },
        Restore {
            access: Write,
            description: "Grants permission to start a restore job for a backup of a file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/efs/latest/ug/awsbackup.html",
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to create or overwrite tags associated with the specified Amazon EFS resource",
            resources: ["accessPoint", "fileSystem"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "elasticfilesystem:CreateAction",
            ],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to delete the specified tags from an Amazon EFS resource",
            resources: ["accessPoint", "fileSystem"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateFileSystem {
            access: Write,
            description: "Grants permission to update the throughput mode or the amount of provisioned throughput of an existing file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateFileSystemProtection {
            access: Write,
            description: "Grants permission to update the replication overwrite protection of an existing file system",
            resources: ["fileSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        file_system => "fileSystem": "arn:{partition}:elasticfilesystem:{region}:{account}:file-system/{fileSystemId}",
        access_point => "accessPoint": "arn:{partition}:elasticfilesystem:{region}:{account}:access-point/{accessPointId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{access_point, file_system, Action},
        crate::{AccessLevel, ArnOptions},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_file_system() {
        assert_eq!(file_system(&ArnOptions::new()), "arn:*:elasticfilesystem:*:*:file-system/*");
        assert_eq!(
            file_system(&ArnOptions::new().region("us-east-1").with("fileSystemId", "fs-123")),
            "arn:*:elasticfilesystem:us-east-1:*:file-system/fs-123"
        );
    }

    #[test_log::test]
    fn test_access_point() {
        let options = ArnOptions::from([
            ("partition", "aws"),
            ("region", "eu-west-1"),
            ("account", "123456789012"),
            ("accessPointId", "fsap-0123456789abcdef0"),
        ]);
        assert_eq!(
            access_point(&options),
            "arn:aws:elasticfilesystem:eu-west-1:123456789012:access-point/fsap-0123456789abcdef0"
        );
    }

    #[test_log::test]
    fn test_actions() {
        assert_eq!(Action::ClientMount.as_str(), "elasticfilesystem:ClientMount");
        assert_eq!(Action::All.to_string(), "elasticfilesystem:*");
        assert_eq!(Action::from_str("CreateFileSystem").unwrap(), Action::CreateFileSystem);
        assert_eq!(Action::from_str("elasticfilesystem:*").unwrap(), Action::All);
        assert!(Action::from_str("s3:CreateFileSystem").is_err());

        let definition = Action::PutFileSystemPolicy.definition().unwrap();
        assert_eq!(definition.access_level(), AccessLevel::PermissionsManagement);
        assert_eq!(definition.documentation(), "https://docs.aws.amazon.com/efs/latest/ug/API_PutFileSystemPolicy.html");
        assert_eq!(
            Action::ClientMount.definition().unwrap().documentation(),
            "https://docs.aws.amazon.com/efs/latest/ug/efs-client-authorization.html"
        );
        assert!(Action::All.definition().is_none());
    }
}
