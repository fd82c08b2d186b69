//! Amazon Elastic Container Registry.

service_catalog! {
    prefix: "ecr",
    name: "Amazon Elastic Container Registry",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonelasticcontainerregistry.html",
    api_docs: "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_",
    actions: {
        BatchCheckLayerAvailability {
            access: Read,
            description: "Grants permission to check the availability of multiple image layers in a specified registry and repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        BatchDeleteImage {
            access: Write,
            description: "Grants permission to delete a list of specified images within a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        BatchGetImage {
            access: Read,
            description: "Grants permission to get detailed information for specified images within a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        BatchGetRepositoryScanningConfiguration {
            access: Read,
            description: "Grants permission to retrieve repository scanning configuration for a list of repositories",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        BatchImportUpstreamImage {
            access: Write,
            description: "Grants permission to retrieve the image from the upstream registry and import it to your private registry",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/AmazonECR/latest/userguide/security-iam-awsmanpol.html",
        },
        CompleteLayerUpload {
            access: Write,
            description: "Grants permission to inform Amazon ECR that the image layer upload for a specified registry, repository name, and upload ID, has completed",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        CreatePullThroughCacheRule {
            access: Write,
            description: "Grants permission to create new pull-through cache rule",
            resources: [],
            conditions: [],
        },
        CreateRepository {
            access: Write,
            description: "Grants permission to create an image repository",
            resources: ["repository"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateRepositoryCreationTemplate {
            access: Write,
            description: "Grants permission to create a repository creation template",
            resources: [],
            conditions: [],
        },
        DeleteLifecyclePolicy {
            access: Write,
            description: "Grants permission to delete the specified lifecycle policy",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DeletePullThroughCacheRule {
            access: Write,
            description: "Grants permission to delete the pull-through cache rule",
            resources: [],
            conditions: [],
        },
        DeleteRegistryPolicy {
            access: Write,
            description: "Grants permission to delete the registry policy",
            resources: [],
            conditions: [],
        },
        DeleteRepository {
            access: Write,
            description: "Grants permission to delete an existing image repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DeleteRepositoryCreationTemplate {
            access: Write,
            description: "Grants permission to delete the repository creation template",
            resources: [],
            conditions: [],
        },
        DeleteRepositoryPolicy {
            access: PermissionsManagement,
            description: "Grants permission to delete the repository policy from a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DescribeImageReplicationStatus {
            access: Read,
            description: "Grants permission to describe the image replication status on a given repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DescribeImageScanFindings {
            access: Read,
            description: "Grants permission to describe the image scan findings for the specified image",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DescribeImages {
            access: List,
            description: "Grants permission to get metadata about the images in a repository, including image size, image tags, and creation date",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DescribePullThroughCacheRules {
            access: Read,
            description: "Grants permission to describe the pull-through cache rules",
            resources: [],
            conditions: [],
        },
        DescribeRegistry {
            access: Read,
            description: "Grants permission to describe the registry settings",
            resources: [],
            conditions: [],
        },
        DescribeRepositories {
            access: List,
            description: "Grants permission to describe image repositories in a registry",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        DescribeRepositoryCreationTemplates {
            access: Read,
            description: "Grants permission to describe the repository creation templates",
            resources: [],
            conditions: [],
        },
        GetAuthorizationToken {
            access: Read,
            description: "Grants permission to retrieve a token that is valid for a specified registry for 12 hours",
            resources: [],
            conditions: [],
        },
        GetDownloadUrlForLayer {
            access: Read,
            description: "Grants permission to retrieve the download URL corresponding to an image layer",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        GetLifecyclePolicy {
            access: Read,
            description: "Grants permission to retrieve the specified lifecycle policy",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        GetLifecyclePolicyPreview {
            access: Read,
            description: "Grants permission to retrieve the results of the specified lifecycle policy preview request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        GetRegistryPolicy {
            access: Read,
            description: "Grants permission to retrieve the registry policy",
            resources: [],
            conditions: [],
        },
        GetRegistryScanningConfiguration {
            access: Read,
            description: "Grants permission to retrieve the registry scanning configuration",
            resources: [],
            conditions: [],
        },
        GetRepositoryPolicy {
            access: Read,
            description: "Grants permission to retrieve the repository policy for a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        InitiateLayerUpload {
            access: Write,
            description: "Grants permission to notify Amazon ECR that you intend to upload an image layer",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        ListImages {
            access: List,
            description: "Grants permission to list all the image IDs for a given repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list the tags for an Amazon ECR resource",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        PutImage {
            access: Write,
            description: "Grants permission to create or update the image manifest associated with an image",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        PutImageScanningConfiguration {
            access: Write,
            description: "Grants permission to update the image scanning configuration for a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        PutImageTagMutability {
            access: Write,
            description: "Grants permission to update the image tag mutability settings for a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        PutLifecyclePolicy {
            access: Write,
            description: "Grants permission to create or update a lifecycle policy",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        PutRegistryPolicy {
            access: PermissionsManagement,
            description: "Grants permission to update the registry policy",
            resources: [],
            conditions: [],
        },
        PutRegistryScanningConfiguration {
            access: Write,
            description: "Grants permission to update the registry scanning configuration",
            resources: [],
            conditions: [],
        },
        PutReplicationConfiguration {
            access: Write,
            description: "Grants permission to update the replication configuration for the registry",
            resources: [],
            conditions: [],
        },
        ReplicateImage {
            access: Write,
            description: "Grants permission to replicate images to the destination registry",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/AmazonECR/latest/userguide/security-iam-awsmanpol.html",
        },
        SetRepositoryPolicy {
            access: PermissionsManagement,
            description: "Grants permission to apply a repository policy on a specified repository to control access permissions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        StartImageScan {
            access: Write,
            description: "Grants permission to start an image scan",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        StartLifecyclePolicyPreview {
            access: Write,
            description: "Grants permission to start a preview of the specified lifecycle policy",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to tag an Amazon ECR resource",
            resources: ["repository"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to untag an Amazon ECR resource",
            resources: ["repository"],
            conditions: ["aws:TagKeys"],
        },
        UpdatePullThroughCacheRule {
            access: Write,
            description: "Grants permission to update an existing pull-through cache rule",
            resources: [],
            conditions: [],
        },
        UpdateRepositoryCreationTemplate {
            access: Write,
            description: "Grants permission to update an existing repository creation template",
            resources: [],
            conditions: [],
        },
        UploadLayerPart {
            access: Write,
            description: "Grants permission to upload an image layer part to Amazon ECR",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecr:ResourceTag/${TagKey}"],
        },
        ValidatePullThroughCacheRule {
            access: Read,
            description: "Grants permission to validate an existing pull-through cache rule",
            resources: [],
            conditions: [],
        },
    },
    resources: {
        repository => "repository": "arn:{partition}:ecr:{region}:{account}:repository/{repositoryName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{repository, Action},
        crate::{AccessLevel, ArnOptions},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_repository() {
        assert_eq!(repository(&ArnOptions::new()), "arn:*:ecr:*:*:repository/*");

        // Namespaced repository names keep their slashes.
        let options = ArnOptions::new()
            .partition("aws")
            .region("eu-west-1")
            .account("123456789012")
            .with("repositoryName", "team/service");
        assert_eq!(repository(&options), "arn:aws:ecr:eu-west-1:123456789012:repository/team/service");
    }

    #[test_log::test]
    fn test_policy_actions() {
        let level = Action::SetRepositoryPolicy.definition().unwrap().access_level();
        assert_eq!(level, AccessLevel::PermissionsManagement);
        assert_eq!(level.to_string(), "Permissions management");
        assert!(Action::GetAuthorizationToken.definition().unwrap().resource_types().is_empty());
    }
}
