//! AWS Step Functions.
//!
//! Versions and aliases are qualified after a colon (`stateMachine:{stateMachineName}:{stateMachineVersionId}`).

service_catalog! {
    prefix: "states",
    name: "AWS Step Functions",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awsstepfunctions.html",
    api_docs: "https://docs.aws.amazon.com/step-functions/latest/apireference/API_",
    actions: {
        CreateActivity {
            access: Write,
            description: "Grants permission to create an activity",
            resources: ["activity"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateStateMachine {
            access: Write,
            description: "Grants permission to create a state machine",
            resources: ["stateMachine"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateStateMachineAlias {
            access: Write,
            description: "Grants permission to create a state machine alias",
            resources: ["stateMachineAlias", "stateMachineVersion"],
            conditions: [],
        },
        DeleteActivity {
            access: Write,
            description: "Grants permission to delete an activity",
            resources: ["activity"],
            conditions: [],
        },
        DeleteStateMachine {
            access: Write,
            description: "Grants permission to delete a state machine",
            resources: ["stateMachine"],
            conditions: [],
        },
        DeleteStateMachineAlias {
            access: Write,
            description: "Grants permission to delete a state machine alias",
            resources: ["stateMachineAlias"],
            conditions: [],
        },
        DeleteStateMachineVersion {
            access: Write,
            description: "Grants permission to delete a state machine version",
            resources: ["stateMachineVersion"],
            conditions: [],
        },
        DescribeActivity {
            access: Read,
            description: "Grants permission to describe an activity",
            resources: ["activity"],
            conditions: [],
        },
        DescribeExecution {
            access: Read,
            description: "Grants permission to describe an execution",
            resources: ["execution", "express"],
            conditions: [],
        },
        DescribeMapRun {
            access: Read,
            description: "Grants permission to describe a map run",
            resources: ["mapRun"],
            conditions: [],
        },
        DescribeStateMachine {
            access: Read,
            description: "Grants permission to describe a state machine",
            resources: ["stateMachine", "stateMachineAlias", "stateMachineVersion"],
            conditions: [],
        },
        DescribeStateMachineAlias {
            access: Read,
            description: "Grants permission to describe a state machine alias",
            resources: ["stateMachineAlias"],
            conditions: [],
        },
        DescribeStateMachineForExecution {
            access: Read,
            description: "Grants permission to describe the state machine for an execution",
            resources: ["execution"],
            conditions: [],
        },
        GetActivityTask {
            access: Write,
            description: "Grants permission to be used by workers to retrieve a task (with the specified activity ARN) which has been scheduled for execution by a running state machine",
            resources: ["activity"],
            conditions: [],
        },
        GetExecutionHistory {
            access: Read,
            description: "Grants permission to return the history of the specified execution as a list of events",
            resources: ["execution"],
            conditions: [],
        },
        InvokeHTTPEndpoint {
            access: Write,
            description: "Grants permission to invoke an HTTP endpoint from a state machine task or test state",
            resources: ["stateMachine"],
            conditions: ["states:HTTPEndpoint", "states:HTTPMethod"],
            docs: "https://docs.aws.amazon.com/step-functions/latest/dg/auth-and-access-control-sfn.html",
        },
        ListActivities {
            access: List,
            description: "Grants permission to list the existing activities",
            resources: [],
            conditions: [],
        },
        ListExecutions {
            access: List,
            description: "Grants permission to list the executions of a state machine",
            resources: ["mapRun", "stateMachine", "stateMachineAlias", "stateMachineVersion"],
            conditions: [],
        },
        ListMapRuns {
            access: List,
            description: "Grants permission to list map runs of an execution",
            resources: ["execution"],
            conditions: [],
        },
        ListStateMachineAliases {
            access: List,
            description: "Grants permission to list the aliases of a state machine",
            resources: ["stateMachine", "stateMachineVersion"],
            conditions: [],
        },
        ListStateMachineVersions {
            access: List,
            description: "Grants permission to list the versions of a state machine",
            resources: ["stateMachine"],
            conditions: [],
        },
        ListStateMachines {
            access: List,
            description: "Grants permission to list the existing state machines",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list tags for an AWS Step Functions resource",
            resources: ["activity", "stateMachine"],
            conditions: [],
        },
        PublishStateMachineVersion {
            access: Write,
            description: "Grants permission to publish a state machine version",
            resources: ["stateMachine"],
            conditions: [],
        },
        RedriveExecution {
            access: Write,
            description: "Grants permission to restart a failed or aborted execution",
            resources: ["execution"],
            conditions: [],
        },
        RevealSecrets {
            access: Write,
            description: "Grants permission to reveal sensitive HTTP request and response information when testing a state",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/step-functions/latest/dg/auth-and-access-control-sfn.html",
        },
        SendTaskFailure {
            access: Write,
            description: "Grants permission to report that the task identified by the taskToken failed",
            resources: ["activity", "stateMachine"],
            conditions: [],
        },
        SendTaskHeartbeat {
            access: Write,
            description: "Grants permission to report to the service that the task represented by the specified taskToken is still making progress",
            resources: ["activity", "stateMachine"],
            conditions: [],
        },
        SendTaskSuccess {
            access: Write,
            description: "Grants permission to report that the task identified by the taskToken completed successfully",
            resources: ["activity", "stateMachine"],
            conditions: [],
        },
        StartExecution {
            access: Write,
            description: "Grants permission to start a state machine execution",
            resources: ["stateMachine", "stateMachineAlias", "stateMachineVersion"],
            conditions: [],
        },
        StartSyncExecution {
            access: Write,
            description: "Grants permission to start a Synchronous Express state machine execution",
            resources: ["stateMachine"],
            conditions: [],
        },
        StopExecution {
            access: Write,
            description: "Grants permission to stop an execution",
            resources: ["execution"],
            conditions: [],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to tag an AWS Step Functions resource",
            resources: ["activity", "stateMachine"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        TestState {
            access: Write,
            description: "Grants permission to test a state definition",
            resources: [],
            conditions: [],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove a tag from an AWS Step Functions resource",
            resources: ["activity", "stateMachine"],
            conditions: ["aws:TagKeys"],
        },
        UpdateMapRun {
            access: Write,
            description: "Grants permission to update a map run",
            resources: ["mapRun"],
            conditions: [],
        },
        UpdateStateMachine {
            access: Write,
            description: "Grants permission to update a state machine",
            resources: ["stateMachine"],
            conditions: [],
        },
        UpdateStateMachineAlias {
            access: Write,
            description: "Grants permission to update a state machine alias",
            resources: ["stateMachineAlias", "stateMachineVersion"],
            conditions: [],
        },
        ValidateStateMachineDefinition {
            access: Read,
            description: "Grants permission to validate a state machine definition",
            resources: [],
            conditions: [],
        },
    },
    resources: {
        activity => "activity": "arn:{partition}:states:{region}:{account}:activity:{activityName}",
        execution => "execution": "arn:{partition}:states:{region}:{account}:execution:{stateMachineName}:{executionId}",
        express => "express": "arn:{partition}:states:{region}:{account}:express:{stateMachineName}:{executionId}:{expressId}",
        state_machine => "stateMachine": "arn:{partition}:states:{region}:{account}:stateMachine:{stateMachineName}",
        state_machine_version => "stateMachineVersion": "arn:{partition}:states:{region}:{account}:stateMachine:{stateMachineName}:{stateMachineVersionId}",
        state_machine_alias => "stateMachineAlias": "arn:{partition}:states:{region}:{account}:stateMachine:{stateMachineName}:{stateMachineAliasName}",
        map_run => "mapRun": "arn:{partition}:states:{region}:{account}:mapRun:{stateMachineName}/{mapRunLabel}:{mapRunId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{execution, map_run, state_machine, state_machine_version},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_state_machine_family() {
        let options = ArnOptions::new().region("us-east-1").account("123456789012").with("stateMachineName", "Orders");
        assert_eq!(state_machine(&options), "arn:*:states:us-east-1:123456789012:stateMachine:Orders");
        assert_eq!(state_machine_version(&options), "arn:*:states:us-east-1:123456789012:stateMachine:Orders:*");
        assert_eq!(execution(&options), "arn:*:states:us-east-1:123456789012:execution:Orders:*");
    }

    #[test_log::test]
    fn test_map_run() {
        let options = ArnOptions::from([("stateMachineName", "Orders"), ("mapRunLabel", "Fanout"), ("mapRunId", "1a2b")]);
        assert_eq!(map_run(&options), "arn:*:states:*:*:mapRun:Orders/Fanout:1a2b");
    }
}
