//! AWS Secrets Manager.
//!
//! Secret ARNs end in a random six-character suffix, so `secretId` is usually given as `<name>-??????` or left as a
//! wildcard.

service_catalog! {
    prefix: "secretsmanager",
    name: "AWS Secrets Manager",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awssecretsmanager.html",
    api_docs: "https://docs.aws.amazon.com/secretsmanager/latest/apireference/API_",
    actions: {
        BatchGetSecretValue {
            access: Read,
            description: "Grants permission to retrieve and decrypt a list of secrets",
            resources: [],
            conditions: [],
        },
        CancelRotateSecret {
            access: Write,
            description: "Grants permission to cancel an in-progress secret rotation",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        CreateSecret {
            access: Write,
            description: "Grants permission to create a secret that stores encrypted data that can be queried and rotated",
            resources: ["secret"],
            conditions: [
                "secretsmanager:Name",
                "secretsmanager:Description",
                "secretsmanager:KmsKeyId",
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:AddReplicaRegions",
                "secretsmanager:ForceOverwriteReplicaSecret",
            ],
        },
        DeleteResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to delete the resource policy attached to a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        DeleteSecret {
            access: Write,
            description: "Grants permission to delete a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:RecoveryWindowInDays",
                "secretsmanager:ForceDeleteWithoutRecovery",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        DescribeSecret {
            access: Read,
            description: "Grants permission to retrieve the metadata about a secret, but not the encrypted data",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        GetRandomPassword {
            access: Read,
            description: "Grants permission to generate a random string for use in password creation",
            resources: [],
            conditions: [],
        },
        GetResourcePolicy {
            access: Read,
            description: "Grants permission to get the resource policy attached to a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        GetSecretValue {
            access: Read,
            description: "Grants permission to retrieve and decrypt the encrypted data",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:VersionId",
                "secretsmanager:VersionStage",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        ListSecretVersionIds {
            access: Read,
            description: "Grants permission to list the available versions of a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        ListSecrets {
            access: List,
            description: "Grants permission to list the available secrets",
            resources: [],
            conditions: [],
        },
        PutResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to attach a resource policy to a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:BlockPublicPolicy",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        PutSecretValue {
            access: Write,
            description: "Grants permission to create a new version of the secret with new encrypted data",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        RemoveRegionsFromReplication {
            access: Write,
            description: "Grants permission to remove regions from replication",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        ReplicateSecretToRegions {
            access: Write,
            description: "Grants permission to convert an existing secret to a multi-Region secret and begin replicating the secret to a list of new regions",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:AddReplicaRegions",
                "secretsmanager:ForceOverwriteReplicaSecret",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        RestoreSecret {
            access: Write,
            description: "Grants permission to cancel deletion of a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        RotateSecret {
            access: Write,
            description: "Grants permission to start rotation of a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:RotationLambdaARN",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:ModifyRotationRules",
                "secretsmanager:RotateImmediately",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        StopReplicationToReplica {
            access: Write,
            description: "Grants permission to remove the secret from replication and promote the secret to a regional secret in the replica Region",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add tags to a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:TagKeys",
                "aws:RequestTag/${TagKey}",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove tags from a secret",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "aws:TagKeys",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        UpdateSecret {
            access: Write,
            description: "Grants permission to update a secret with new metadata or with a new version of the encrypted data",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:Description",
                "secretsmanager:KmsKeyId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        UpdateSecretVersionStage {
            access: Write,
            description: "Grants permission to move a stage from one secret to another",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:VersionStage",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
        ValidateResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to validate a resource policy before attaching policy",
            resources: ["secret"],
            conditions: [
                "secretsmanager:SecretId",
                "secretsmanager:resource/AllowRotationLambdaArn",
                "aws:ResourceTag/${TagKey}",
                "secretsmanager:ResourceTag/tag-key",
                "secretsmanager:SecretPrimaryRegion",
            ],
        },
    },
    resources: {
        secret => "secret": "arn:{partition}:secretsmanager:{region}:{account}:secret:{secretId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{secret, Action},
        crate::{AccessLevel, ArnOptions},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_secret() {
        assert_eq!(secret(&ArnOptions::new()), "arn:*:secretsmanager:*:*:secret:*");
        assert_eq!(
            secret(&ArnOptions::new().region("us-west-2").account("123456789012").with("secretId", "prod/db-??????")),
            "arn:*:secretsmanager:us-west-2:123456789012:secret:prod/db-??????"
        );
    }

    #[test_log::test]
    fn test_policy_actions() {
        for action in [Action::DeleteResourcePolicy, Action::PutResourcePolicy, Action::ValidateResourcePolicy] {
            assert_eq!(action.definition().unwrap().access_level(), AccessLevel::PermissionsManagement);
        }
        assert!(Action::GetRandomPassword.definition().unwrap().resource_types().is_empty());
    }
}
