//! AWS CodeBuild.

service_catalog! {
    prefix: "codebuild",
    name: "AWS CodeBuild",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscodebuild.html",
    api_docs: "https://docs.aws.amazon.com/codebuild/latest/APIReference/API_",
    actions: {
        BatchDeleteBuilds {
            access: Write,
            description: "Grants permission to delete one or more builds",
            resources: ["project"],
            conditions: [],
        },
        BatchGetBuildBatches {
            access: Read,
            description: "Grants permission to get information about one or more build batches",
            resources: ["project"],
            conditions: [],
        },
        BatchGetBuilds {
            access: Read,
            description: "Grants permission to get information about one or more builds",
            resources: ["project"],
            conditions: [],
        },
        BatchGetFleets {
            access: Read,
            description: "Grants permission to get information about one or more compute fleets",
            resources: ["fleet"],
            conditions: [],
        },
        BatchGetProjects {
            access: Read,
            description: "Grants permission to get information about one or more build projects",
            resources: ["project"],
            conditions: [],
        },
        BatchGetReportGroups {
            access: Read,
            description: "Grants permission to return an array of ReportGroup objects that are specified by the input reportGroupArns parameter",
            resources: ["reportGroup"],
            conditions: [],
        },
        BatchGetReports {
            access: Read,
            description: "Grants permission to return an array of the Report objects specified by the input reportArns parameter",
            resources: ["reportGroup"],
            conditions: [],
        },
        BatchPutCodeCoverages {
            access: Write,
            description: "Grants permission to add or update information about a report",
            resources: ["reportGroup"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        BatchPutTestCases {
            access: Write,
            description: "Grants permission to add or update information about a report",
            resources: ["reportGroup"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        CreateFleet {
            access: Write,
            description: "Grants permission to create a compute fleet",
            resources: ["fleet"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateProject {
            access: Write,
            description: "Grants permission to create a build project",
            resources: ["project"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateReport {
            access: Write,
            description: "Grants permission to create a report. A report is created when tests specified in the buildspec file for a report groups run during the build of a project",
            resources: ["reportGroup"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        CreateReportGroup {
            access: Write,
            description: "Grants permission to create a report group",
            resources: ["reportGroup"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateWebhook {
            access: Write,
            description: "Grants permission to create webhook. For an existing AWS CodeBuild build project that has its source code stored in a GitHub or Bitbucket repository, enables AWS CodeBuild to start rebuilding the source code every time a code change is pushed to the repository",
            resources: ["project"],
            conditions: [],
        },
        DeleteBuildBatch {
            access: Write,
            description: "Grants permission to delete a build batch",
            resources: ["project"],
            conditions: [],
        },
        DeleteFleet {
            access: Write,
            description: "Grants permission to delete a compute fleet",
            resources: ["fleet"],
            conditions: [],
        },
        DeleteOAuthToken {
            access: Write,
            description: "Grants permission to delete an OAuth token from a connected third-party OAuth provider. Only used in the AWS CodeBuild console",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        DeleteProject {
            access: Write,
            description: "Grants permission to delete a build project",
            resources: ["project"],
            conditions: [],
        },
        DeleteReport {
            access: Write,
            description: "Grants permission to delete a report",
            resources: ["reportGroup"],
            conditions: [],
        },
        DeleteReportGroup {
            access: Write,
            description: "Grants permission to delete a report group",
            resources: ["reportGroup"],
            conditions: [],
        },
        DeleteResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to delete a resource policy for the associated project or report group",
            resources: ["project", "reportGroup"],
            conditions: [],
        },
        DeleteSourceCredentials {
            access: Write,
            description: "Grants permission to delete a set of GitHub, GitHub Enterprise, or Bitbucket source credentials",
            resources: [],
            conditions: [],
        },
        DeleteWebhook {
            access: Write,
            description: "Grants permission to delete webhook. For an existing AWS CodeBuild build project that has its source code stored in a GitHub or Bitbucket repository, stops AWS CodeBuild from rebuilding the source code every time a code change is pushed to the repository",
            resources: ["project"],
            conditions: [],
        },
        DescribeCodeCoverages {
            access: Read,
            description: "Grants permission to return an array of CodeCoverage objects",
            resources: ["reportGroup"],
            conditions: [],
        },
        DescribeTestCases {
            access: Read,
            description: "Grants permission to return an array of TestCase objects",
            resources: ["reportGroup"],
            conditions: [],
        },
        GetReportGroupTrend {
            access: Read,
            description: "Grants permission to analyze and accumulate test report values for the test reports in the specified report group",
            resources: ["reportGroup"],
            conditions: [],
        },
        GetResourcePolicy {
            access: Read,
            description: "Grants permission to return a resource policy for the specified project or report group",
            resources: ["project", "reportGroup"],
            conditions: [],
        },
        ImportSourceCredentials {
            access: Write,
            description: "Grants permission to import the source repository credentials for an AWS CodeBuild project that has its source code stored in a GitHub, GitHub Enterprise, or Bitbucket repository",
            resources: [],
            conditions: [],
        },
        InvalidateProjectCache {
            access: Write,
            description: "Grants permission to reset the cache for a project",
            resources: ["project"],
            conditions: [],
        },
        ListBuildBatches {
            access: List,
            description: "Grants permission to get a list of build batch IDs, with each build batch ID representing a single build batch",
            resources: [],
            conditions: [],
        },
        ListBuildBatchesForProject {
            access: List,
            description: "Grants permission to get a list of build batch IDs for the specified build project, with each build batch ID representing a single build batch",
            resources: ["project"],
            conditions: [],
        },
        ListBuilds {
            access: List,
            description: "Grants permission to get a list of build IDs, with each build ID representing a single build",
            resources: [],
            conditions: [],
        },
        ListBuildsForProject {
            access: List,
            description: "Grants permission to get a list of build IDs for the specified build project, with each build ID representing a single build",
            resources: ["project"],
            conditions: [],
        },
        ListConnectedOAuthAccounts {
            access: List,
            description: "Grants permission to list connected third-party OAuth providers. Only used in the AWS CodeBuild console",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        ListCuratedEnvironmentImages {
            access: List,
            description: "Grants permission to get information about Docker images that are managed by AWS CodeBuild",
            resources: [],
            conditions: [],
        },
        ListFleets {
            access: List,
            description: "Grants permission to get a list of compute fleet ARNs, with each compute fleet ARN representing a single fleet",
            resources: [],
            conditions: [],
        },
        ListProjects {
            access: List,
            description: "Grants permission to get a list of build project names, with each build project name representing a single build project",
            resources: [],
            conditions: [],
        },
        ListReportGroups {
            access: List,
            description: "Grants permission to return a list of report group ARNs. Each report group ARN represents one report group",
            resources: [],
            conditions: [],
        },
        ListReports {
            access: List,
            description: "Grants permission to return a list of report ARNs. Each report ARN representing one report",
            resources: [],
            conditions: [],
        },
        ListReportsForReportGroup {
            access: List,
            description: "Grants permission to return a list of report ARNs that belong to the specified report group. Each report ARN represents one report",
            resources: ["reportGroup"],
            conditions: [],
        },
        ListRepositories {
            access: List,
            description: "Grants permission to list source code repositories from a connected third-party OAuth provider. Only used in the AWS CodeBuild console",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        ListSharedProjects {
            access: List,
            description: "Grants permission to return a list of project ARNs that have been shared with the requester. Each project ARN represents one project",
            resources: [],
            conditions: [],
        },
        ListSharedReportGroups {
            access: List,
            description: "Grants permission to return a list of report group ARNs that have been shared with the requester. Each report group ARN represents one report group",
            resources: [],
            conditions: [],
        },
        ListSourceCredentials {
            access: List,
            description: "Grants permission to return a list of SourceCredentialsInfo objects",
            resources: [],
            conditions: [],
        },
        PersistOAuthToken {
            access: Write,
            description: "Grants permission to save an OAuth token from a connected third-party OAuth provider. Only used in the AWS CodeBuild console",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        PutResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to create a resource policy for the associated project or report group",
            resources: ["project", "reportGroup"],
            conditions: [],
        },
        RetryBuild {
            access: Write,
            description: "Grants permission to retry a build",
            resources: ["project"],
            conditions: [],
        },
        RetryBuildBatch {
            access: Write,
            description: "Grants permission to retry a build batch",
            resources: ["project"],
            conditions: [],
        },
        StartBuild {
            access: Write,
            description: "Grants permission to start running a build",
            resources: ["project"],
            conditions: [],
        },
        StartBuildBatch {
            access: Write,
            description: "Grants permission to start running a build batch",
            resources: ["project"],
            conditions: [],
        },
        StopBuild {
            access: Write,
            description: "Grants permission to attempt to stop running a build",
            resources: ["project"],
            conditions: [],
        },
        StopBuildBatch {
            access: Write,
            description: "Grants permission to attempt to stop running a build batch",
            resources: ["project"],
            conditions: [],
        },
        UpdateFleet {
            access: Write,
            description: "Grants permission to change the settings of an existing compute fleet",
            resources: ["fleet"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateProject {
            access: Write,
            description: "Grants permission to change the settings of an existing build project",
            resources: ["project"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateProjectVisibility {
            access: Write,
            description: "Grants permission to change the public visibility of a project and its builds",
            resources: ["project"],
            conditions: [],
        },
        UpdateReport {
            access: Write,
            description: "Grants permission to update information about a report",
            resources: ["reportGroup"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/codebuild/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        UpdateReportGroup {
            access: Write,
            description: "Grants permission to change the settings of an existing report group",
            resources: ["reportGroup"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateWebhook {
            access: Write,
            description: "Grants permission to update the webhook associated with an AWS CodeBuild build project",
            resources: ["project"],
            conditions: [],
        },
    },
    resources: {
        build => "build": "arn:{partition}:codebuild:{region}:{account}:build/{buildId}",
        build_batch => "buildBatch": "arn:{partition}:codebuild:{region}:{account}:build-batch/{buildBatchId}",
        project => "project": "arn:{partition}:codebuild:{region}:{account}:project/{projectName}",
        report_group => "reportGroup": "arn:{partition}:codebuild:{region}:{account}:report-group/{reportGroupName}",
        report => "report": "arn:{partition}:codebuild:{region}:{account}:report/{reportGroupName}:{reportId}",
        fleet => "fleet": "arn:{partition}:codebuild:{region}:{account}:fleet/{fleetId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{build, report, Action},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_build() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-west-2")
            .account("123456789012")
            .with("buildId", "proj:abcd");
        assert_eq!(build(&options), "arn:aws:codebuild:us-west-2:123456789012:build/proj:abcd");
        assert_eq!(build(&ArnOptions::new()), "arn:*:codebuild:*:*:build/*");
    }

    #[test_log::test]
    fn test_report() {
        let options = ArnOptions::new().with("reportGroupName", "unit-tests");
        assert_eq!(report(&options), "arn:*:codebuild:*:*:report/unit-tests:*");
    }

    #[test_log::test]
    fn test_oauth_actions() {
        assert_eq!(Action::DeleteOAuthToken.as_str(), "codebuild:DeleteOAuthToken");
        assert_eq!(Action::ListConnectedOAuthAccounts.definition().unwrap().resource_types().len(), 0);
    }
}
