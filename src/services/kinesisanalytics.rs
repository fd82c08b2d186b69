//! Amazon Kinesis Analytics (v1) and Amazon Managed Service for Apache Flink (v2).
//!
//! Both API versions authorize under the `kinesisanalytics` prefix, so their actions share one enum. The resource
//! tables of the two versions each declare an `application` type; only the later definition is kept.

service_catalog! {
    prefix: "kinesisanalytics",
    name: "Amazon Kinesis Analytics V2",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonkinesisanalyticsv2.html",
    api_docs: "https://docs.aws.amazon.com/managed-flink/latest/apiv2/API_",
    actions: {
        AddApplicationCloudWatchLoggingOption {
            access: Write,
            description: "Grants permission to add cloudwatch logging option to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AddApplicationInput {
            access: Write,
            description: "Grants permission to add input to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AddApplicationInputProcessingConfiguration {
            access: Write,
            description: "Grants permission to add input processing configuration to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AddApplicationOutput {
            access: Write,
            description: "Grants permission to add output to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AddApplicationReferenceDataSource {
            access: Write,
            description: "Grants permission to add reference data source to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AddApplicationVpcConfiguration {
            access: Write,
            description: "Grants permission to add VPC configuration to the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateApplication {
            access: Write,
            description: "Grants permission to create an application",
            resources: ["application"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateApplicationPresignedUrl {
            access: Read,
            description: "Grants permission to create and return a URL that you can use to connect to an application's extension",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateApplicationSnapshot {
            access: Write,
            description: "Grants permission to create a snapshot for an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplication {
            access: Write,
            description: "Grants permission to delete the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationCloudWatchLoggingOption {
            access: Write,
            description: "Grants permission to delete the specified cloudwatch logging option of the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationInputProcessingConfiguration {
            access: Write,
            description: "Grants permission to delete the specified input processing configuration of the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationOutput {
            access: Write,
            description: "Grants permission to delete the specified output of the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationReferenceDataSource {
            access: Write,
            description: "Grants permission to delete the specified reference data source of the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationSnapshot {
            access: Write,
            description: "Grants permission to delete a snapshot for an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteApplicationVpcConfiguration {
            access: Write,
            description: "Grants permission to delete the specified VPC configuration of the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeApplication {
            access: Read,
            description: "Grants permission to describe the specified application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeApplicationOperation {
            access: Read,
            description: "Grants permission to describe an application operation of an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeApplicationSnapshot {
            access: Read,
            description: "Grants permission to describe an application snapshot",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeApplicationVersion {
            access: Read,
            description: "Grants permission to describe the application version of an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DiscoverInputSchema {
            access: Read,
            description: "Grants permission to discover the input schema for the application",
            resources: [],
            conditions: [],
        },
        GetApplicationState {
            access: Read,
            description: "Grants permission to access the application state (v1 only)",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/managed-flink/latest/java/security-iam.html",
        },
        ListApplicationOperations {
            access: List,
            description: "Grants permission to list application operations of an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListApplicationSnapshots {
            access: List,
            description: "Grants permission to list the snapshots for an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListApplicationVersions {
            access: List,
            description: "Grants permission to list application versions of an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListApplications {
            access: List,
            description: "Grants permission to list applications for the account",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to fetch the tags associated with the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RollbackApplication {
            access: Write,
            description: "Grants permission to perform rollback operation on an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StartApplication {
            access: Write,
            description: "Grants permission to start the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StopApplication {
            access: Write,
            description: "Grants permission to stop the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add tags to the application",
            resources: ["application"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove the specified tags from the application",
            resources: ["application"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateApplication {
            access: Write,
            description: "Grants permission to update the application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateApplicationMaintenanceConfiguration {
            access: Write,
            description: "Grants permission to update the maintenance configuration of an application",
            resources: ["application"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        application => "application": "arn:{partition}:kinesisanalytics:{region}:{account}:application/{applicationName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{application, Action, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_single_application_type() {
        assert_eq!(RESOURCES.len(), 1);
        assert_eq!(RESOURCES[0].resource_type(), "application");
        assert_eq!(
            application(&ArnOptions::new().with("applicationName", "flink-app")),
            "arn:*:kinesisanalytics:*:*:application/flink-app"
        );
    }

    #[test_log::test]
    fn test_both_versions() {
        // v1 only
        assert_eq!(Action::from_str("GetApplicationState").unwrap(), Action::GetApplicationState);
        assert!(Action::AddApplicationInputProcessingConfiguration.definition().is_some());
        // v2 only
        assert_eq!(
            Action::from_str("kinesisanalytics:CreateApplicationSnapshot").unwrap(),
            Action::CreateApplicationSnapshot
        );
        assert!(Action::from_str("kinesisanalyticsv2:CreateApplication").is_err());
    }
}
