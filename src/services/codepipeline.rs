service_catalog! {
    prefix: "codepipeline",
    name: "AWS CodePipeline",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscodepipeline.html",
    api_docs: "https://docs.aws.amazon.com/codepipeline/latest/APIReference/API_",
    actions: {
        AcknowledgeJob {
            access: Write,
            description: "Grants permission to view information about a specified job and whether that job has been received by the job worker",
            resources: [],
            conditions: [],
        },
        AcknowledgeThirdPartyJob {
            access: Write,
            description: "Grants permission to confirm that a job worker has received the specified job (partner actions only)",
            resources: [],
            conditions: [],
        },
        CreateCustomActionType {
            access: Write,
            description: "Grants permission to create a custom action that you can use in the pipelines associated with your AWS account",
            resources: ["actionType"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreatePipeline {
            access: Write,
            description: "Grants permission to create a uniquely named pipeline",
            resources: ["pipeline"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        DeleteCustomActionType {
            access: Write,
            description: "Grants permission to delete a custom action",
            resources: ["actionType"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeletePipeline {
            access: Write,
            description: "Grants permission to delete a specified pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteWebhook {
            access: Write,
            description: "Grants permission to delete a specified webhook",
            resources: ["webhook"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeregisterWebhookWithThirdParty {
            access: Write,
            description: "Grants permission to remove the registration of a webhook with the third party specified in its configuration",
            resources: ["webhook"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DisableStageTransition {
            access: Write,
            description: "Grants permission to prevent revisions from transitioning to the next stage in a pipeline",
            resources: ["stage"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        EnableStageTransition {
            access: Write,
            description: "Grants permission to allow revisions to transition to the next stage in a pipeline",
            resources: ["stage"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetActionType {
            access: Read,
            description: "Grants permission to view information about an action type",
            resources: ["actionType"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetJobDetails {
            access: Read,
            description: "Grants permission to view information about a job (custom actions only)",
            resources: [],
            conditions: [],
        },
        GetPipeline {
            access: Read,
            description: "Grants permission to retrieve information about a pipeline structure",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetPipelineExecution {
            access: Read,
            description: "Grants permission to view information about an execution of a pipeline, including details about artifacts, the pipeline execution ID, and the name, version, and status of the pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetPipelineState {
            access: Read,
            description: "Grants permission to view information about the current state of the stages and actions of a pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetThirdPartyJobDetails {
            access: Read,
            description: "Grants permission to view the details of a job for a third-party action (partner actions only)",
            resources: [],
            conditions: [],
        },
        ListActionExecutions {
            access: List,
            description: "Grants permission to list the action executions that have occurred in a pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListActionTypes {
            access: List,
            description: "Grants permission to list a summary of all the action types available for pipelines in your account",
            resources: ["actionType"],
            conditions: [],
        },
        ListPipelineExecutions {
            access: List,
            description: "Grants permission to list a summary of the most recent executions for a pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListPipelines {
            access: List,
            description: "Grants permission to list a summary of all the pipelines associated with your AWS account",
            resources: [],
            conditions: [],
        },
        ListRuleExecutions {
            access: List,
            description: "Grants permission to list the rule executions that have occurred in a pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListRuleTypes {
            access: List,
            description: "Grants permission to list a summary of all the rule types available for pipelines in your account",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: List,
            description: "Grants permission to list tags for a CodePipeline resource",
            resources: ["actionType", "pipeline", "webhook"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListWebhooks {
            access: List,
            description: "Grants permission to list all of the webhooks associated with your AWS account",
            resources: ["webhook"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        OverrideStageCondition {
            access: Write,
            description: "Grants permission to override a stage condition",
            resources: ["stage"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PollForJobs {
            access: Write,
            description: "Grants permission to view information about any jobs for CodePipeline to act on",
            resources: ["actionType"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PollForThirdPartyJobs {
            access: Write,
            description: "Grants permission to determine whether there are any third-party jobs for a job worker to act on (partner actions only)",
            resources: [],
            conditions: [],
        },
        PutActionRevision {
            access: Write,
            description: "Grants permission to edit actions in a pipeline",
            resources: ["action"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutApprovalResult {
            access: Write,
            description: "Grants permission to provide a response (Approved or Rejected) to a manual approval request in CodePipeline",
            resources: ["action"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutJobFailureResult {
            access: Write,
            description: "Grants permission to represent the failure of a job as returned to the pipeline by a job worker (custom actions only)",
            resources: [],
            conditions: [],
        },
        PutJobSuccessResult {
            access: Write,
            description: "Grants permission to represent the success of a job as returned to the pipeline by a job worker (custom actions only)",
            resources: [],
            conditions: [],
        },
        PutThirdPartyJobFailureResult {
            access: Write,
            description: "Grants permission to represent the failure of a third-party job as returned to the pipeline by a job worker (partner actions only)",
            resources: [],
            conditions: [],
        },
        PutThirdPartyJobSuccessResult {
            access: Write,
            description: "Grants permission to represent the success of a third-party job as returned to the pipeline by a job worker (partner actions only)",
            resources: [],
            conditions: [],
        },
        PutWebhook {
            access: Write,
            description: "Grants permission to create or update a webhook",
            resources: ["pipeline", "webhook"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        RegisterWebhookWithThirdParty {
            access: Write,
            description: "Grants permission to register a webhook with the third party specified in its configuration",
            resources: ["webhook"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RetryStageExecution {
            access: Write,
            description: "Grants permission to resume the pipeline execution by retrying the last failed actions in a stage",
            resources: ["stage"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RollbackStage {
            access: Write,
            description: "Grants permission to roll back a stage to a previous successful pipeline execution",
            resources: ["stage"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StartPipelineExecution {
            access: Write,
            description: "Grants permission to run the most recent revision through the pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StopPipelineExecution {
            access: Write,
            description: "Grants permission to stop an in-progress pipeline execution",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to tag a CodePipeline resource",
            resources: ["actionType", "pipeline", "webhook"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove a tag from a CodePipeline resource",
            resources: ["actionType", "pipeline", "webhook"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateActionType {
            access: Write,
            description: "Grants permission to update an action type that was created with any supported integration model",
            resources: ["actionType"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePipeline {
            access: Write,
            description: "Grants permission to update a pipeline with changes to the structure of the pipeline",
            resources: ["pipeline"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        action => "action": "arn:{partition}:codepipeline:{region}:{account}:{pipelineName}/{stageName}/{actionName}",
        action_type => "actionType": "arn:{partition}:codepipeline:{region}:{account}:actiontype:{owner}/{category}/{provider}/{version}",
        pipeline => "pipeline": "arn:{partition}:codepipeline:{region}:{account}:{pipelineName}",
        stage => "stage": "arn:{partition}:codepipeline:{region}:{account}:{pipelineName}/{stageName}",
        webhook => "webhook": "arn:{partition}:codepipeline:{region}:{account}:webhook:{webhookName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{action, action_type, stage, webhook},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_nested_paths() {
        let options = ArnOptions::new().with("pipelineName", "release").with("stageName", "Deploy");
        assert_eq!(stage(&options), "arn:*:codepipeline:*:*:release/Deploy");
        assert_eq!(action(&options), "arn:*:codepipeline:*:*:release/Deploy/*");
        assert_eq!(action(&options.with("actionName", "Approve")), "arn:*:codepipeline:*:*:release/Deploy/Approve");
    }

    #[test_log::test]
    fn test_colon_separated() {
        assert_eq!(action_type(&ArnOptions::new()), "arn:*:codepipeline:*:*:actiontype:*/*/*/*");
        assert_eq!(
            action_type(&ArnOptions::from([("owner", "Custom"), ("category", "Build"), ("provider", "Gradle"), ("version", "1")])),
            "arn:*:codepipeline:*:*:actiontype:Custom/Build/Gradle/1"
        );
        assert_eq!(webhook(&ArnOptions::new().with("webhookName", "gh")), "arn:*:codepipeline:*:*:webhook:gh");
    }
}
