//! Amazon Elastic Container Service.
//!
//! Task definition ARNs carry the revision after a colon. Leaving `taskDefinitionRevisionNumber` unset matches
//! every revision of a family.

service_catalog! {
    prefix: "ecs",
    name: "Amazon Elastic Container Service",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonelasticcontainerservice.html",
    api_docs: "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_",
    actions: {
        CreateCapacityProvider {
            access: Write,
            description: "Grants permission to create a new capacity provider",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateCluster {
            access: Write,
            description: "Grants permission to create a new Amazon ECS cluster",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateService {
            access: Write,
            description: "Grants permission to run and maintain a desired number of tasks from a specified task definition via service creation",
            resources: ["service"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "ecs:cluster",
                "ecs:capacity-provider",
                "ecs:task-definition",
                "ecs:enable-ecs-managed-tags",
                "ecs:propagate-tags",
            ],
        },
        CreateTaskSet {
            access: Write,
            description: "Grants permission to create a new Amazon ECS task set",
            resources: ["taskSet"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "ecs:cluster",
                "ecs:capacity-provider",
                "ecs:service",
                "ecs:task-definition",
            ],
        },
        DeleteAccountSetting {
            access: Write,
            description: "Grants permission to modify the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user for an account",
            resources: [],
            conditions: [],
        },
        DeleteAttributes {
            access: Write,
            description: "Grants permission to delete one or more custom attributes from an Amazon ECS resource",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        DeleteCapacityProvider {
            access: Write,
            description: "Grants permission to delete the specified capacity provider",
            resources: ["capacityProvider"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DeleteCluster {
            access: Write,
            description: "Grants permission to delete the specified cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DeleteService {
            access: Write,
            description: "Grants permission to delete a specified service within a cluster",
            resources: ["service"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        DeleteTaskDefinitions {
            access: Write,
            description: "Grants permission to delete the specified task definitions by family and revision",
            resources: ["taskDefinition"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DeleteTaskSet {
            access: Write,
            description: "Grants permission to delete the specified task set",
            resources: ["taskSet"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster", "ecs:service"],
        },
        DeregisterContainerInstance {
            access: Write,
            description: "Grants permission to deregister an Amazon ECS container instance from the specified cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DeregisterTaskDefinition {
            access: Write,
            description: "Grants permission to deregister the specified task definition by family and revision",
            resources: [],
            conditions: [],
        },
        DescribeCapacityProviders {
            access: Read,
            description: "Grants permission to describe one or more Amazon ECS capacity providers",
            resources: ["capacityProvider"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DescribeClusters {
            access: Read,
            description: "Grants permission to describe one or more of your clusters",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        DescribeContainerInstances {
            access: Read,
            description: "Grants permission to describe Amazon ECS container instances",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        DescribeServiceDeployments {
            access: Read,
            description: "Grants permission to describe one or more of your service deployments",
            resources: [],
            conditions: [],
        },
        DescribeServices {
            access: Read,
            description: "Grants permission to describe the specified services running in your cluster",
            resources: ["service"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        DescribeTaskDefinition {
            access: Read,
            description: "Grants permission to describe a task definition",
            resources: [],
            conditions: [],
        },
        DescribeTaskSets {
            access: Read,
            description: "Grants permission to describe Amazon ECS task sets",
            resources: ["taskSet"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster", "ecs:service"],
        },
        DescribeTasks {
            access: Read,
            description: "Grants permission to describe a specified task or tasks",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        DiscoverPollEndpoint {
            access: Read,
            description: "Grants permission to get an endpoint for the Amazon ECS agent to poll for updates",
            resources: [],
            conditions: [],
        },
        ExecuteCommand {
            access: Write,
            description: "Grants permission to run a command remotely on an Amazon ECS container",
            resources: ["cluster", "task"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "ecs:ResourceTag/${TagKey}",
                "ecs:cluster",
                "ecs:container-name",
                "ecs:task",
            ],
        },
        GetTaskProtection {
            access: Read,
            description: "Grants permission to retrieve the protection status of tasks in an Amazon ECS service",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        ListAccountSettings {
            access: List,
            description: "Grants permission to list the account settings for an Amazon ECS resource for a specified principal",
            resources: [],
            conditions: [],
        },
        ListAttributes {
            access: List,
            description: "Grants permission to list the attributes for Amazon ECS resources within a specified target type and cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ListClusters {
            access: List,
            description: "Grants permission to get a list of existing clusters",
            resources: [],
            conditions: [],
        },
        ListContainerInstances {
            access: List,
            description: "Grants permission to get a list of container instances in a specified cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ListServiceDeployments {
            access: List,
            description: "Grants permission to get a list of service deployments for a specified service",
            resources: ["service"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        ListServices {
            access: List,
            description: "Grants permission to get a list of services that are running in a specified cluster",
            resources: [],
            conditions: ["ecs:cluster"],
        },
        ListServicesByNamespace {
            access: List,
            description: "Grants permission to get a list of services that are running in a specified AWS Cloud Map Namespace",
            resources: [],
            conditions: ["ecs:namespace"],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to get a list of tags for the specified resource",
            resources: [
                "capacityProvider",
                "cluster",
                "containerInstance",
                "service",
                "task",
                "taskDefinition",
                "taskSet",
            ],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        ListTaskDefinitionFamilies {
            access: List,
            description: "Grants permission to get a list of task definition families that are registered to your account",
            resources: [],
            conditions: [],
        },
        ListTaskDefinitions {
            access: List,
            description: "Grants permission to get a list of task definitions that are registered to your account",
            resources: [],
            conditions: [],
        },
        ListTasks {
            access: List,
            description: "Grants permission to get a list of tasks for a specified cluster",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        Poll {
            access: Write,
            description: "Grants permission to an agent to connect with the Amazon ECS service to report status and get commands",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
            docs: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/security-iam-awsmanpol.html",
        },
        PutAccountSetting {
            access: Write,
            description: "Grants permission to modify the ARN and resource ID format of a resource for a specified IAM user, IAM role, or the root user for an account",
            resources: [],
            conditions: [],
        },
        PutAccountSettingDefault {
            access: Write,
            description: "Grants permission to modify the ARN and resource ID format of a resource type for all IAM users on an account for which no individual account setting has been set",
            resources: [],
            conditions: [],
        },
        PutAttributes {
            access: Write,
            description: "Grants permission to create or update an attribute on an Amazon ECS resource",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        PutClusterCapacityProviders {
            access: Write,
            description: "Grants permission to modify the available capacity providers and the default capacity provider strategy for a cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:capacity-provider"],
        },
        RegisterContainerInstance {
            access: Write,
            description: "Grants permission to register an EC2 instance into the specified cluster",
            resources: ["cluster"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "ecs:ResourceTag/${TagKey}",
            ],
        },
        RegisterTaskDefinition {
            access: Write,
            description: "Grants permission to register a new task definition from the supplied family and containerDefinitions",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        RunTask {
            access: Write,
            description: "Grants permission to start a task using random placement and the default Amazon ECS scheduler",
            resources: ["taskDefinition"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "ecs:ResourceTag/${TagKey}",
                "ecs:cluster",
                "ecs:capacity-provider",
                "ecs:enable-ecs-managed-tags",
                "ecs:propagate-tags",
            ],
        },
        StartTask {
            access: Write,
            description: "Grants permission to start a new task from the specified task definition on the specified container instance or instances",
            resources: ["taskDefinition"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "ecs:ResourceTag/${TagKey}",
                "ecs:cluster",
                "ecs:container-instances",
                "ecs:enable-ecs-managed-tags",
                "ecs:propagate-tags",
            ],
        },
        StartTelemetrySession {
            access: Write,
            description: "Grants permission to start a telemetry session",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
            docs: "https://docs.aws.amazon.com/AmazonECS/latest/developerguide/security-iam-awsmanpol.html",
        },
        StopTask {
            access: Write,
            description: "Grants permission to stop a running task",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        SubmitAttachmentStateChanges {
            access: Write,
            description: "Grants permission to send an acknowledgement that attachments changed states",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        SubmitContainerStateChange {
            access: Write,
            description: "Grants permission to send an acknowledgement that a container changed states",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        SubmitTaskStateChange {
            access: Write,
            description: "Grants permission to send an acknowledgement that a task changed states",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to tag the specified resource",
            resources: [
                "capacityProvider",
                "cluster",
                "containerInstance",
                "service",
                "task",
                "taskDefinition",
                "taskSet",
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "ecs:CreateAction"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to untag the specified resource",
            resources: [
                "capacityProvider",
                "cluster",
                "containerInstance",
                "service",
                "task",
                "taskDefinition",
                "taskSet",
            ],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        UpdateCapacityProvider {
            access: Write,
            description: "Grants permission to update the specified capacity provider",
            resources: ["capacityProvider"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        UpdateCluster {
            access: Write,
            description: "Grants permission to modify the configuration or settings to use for a cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        UpdateClusterSettings {
            access: Write,
            description: "Grants permission to modify the settings to use for a cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        UpdateContainerAgent {
            access: Write,
            description: "Grants permission to update the Amazon ECS container agent on a specified container instance",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}"],
        },
        UpdateContainerInstancesState {
            access: Write,
            description: "Grants permission to the user to modify the status of an Amazon ECS container instance",
            resources: ["containerInstance"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        UpdateService {
            access: Write,
            description: "Grants permission to modify the parameters of a service",
            resources: ["service"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "ecs:ResourceTag/${TagKey}",
                "ecs:cluster",
                "ecs:capacity-provider",
                "ecs:task-definition",
                "ecs:enable-ecs-managed-tags",
                "ecs:propagate-tags",
            ],
        },
        UpdateServicePrimaryTaskSet {
            access: Write,
            description: "Grants permission to modify the primary task set used in a service",
            resources: ["service"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        UpdateTaskProtection {
            access: Write,
            description: "Grants permission to modify the protection status of a task",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster"],
        },
        UpdateTaskSet {
            access: Write,
            description: "Grants permission to update the specified task set",
            resources: ["taskSet"],
            conditions: ["aws:ResourceTag/${TagKey}", "ecs:ResourceTag/${TagKey}", "ecs:cluster", "ecs:service"],
        },
    },
    resources: {
        cluster => "cluster": "arn:{partition}:ecs:{region}:{account}:cluster/{clusterName}",
        container_instance => "containerInstance": "arn:{partition}:ecs:{region}:{account}:container-instance/{clusterName}/{containerInstanceId}",
        service => "service": "arn:{partition}:ecs:{region}:{account}:service/{clusterName}/{serviceName}",
        task => "task": "arn:{partition}:ecs:{region}:{account}:task/{clusterName}/{taskId}",
        task_definition => "taskDefinition": "arn:{partition}:ecs:{region}:{account}:task-definition/{taskDefinitionFamilyName}:{taskDefinitionRevisionNumber}",
        capacity_provider => "capacityProvider": "arn:{partition}:ecs:{region}:{account}:capacity-provider/{capacityProviderName}",
        task_set => "taskSet": "arn:{partition}:ecs:{region}:{account}:task-set/{clusterName}/{serviceName}/{taskSetId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{cluster, service, task_definition, task_set, Action, CATALOG},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_task_definition() {
        let family = ArnOptions::new().with("taskDefinitionFamilyName", "web");
        assert_eq!(task_definition(&family), "arn:*:ecs:*:*:task-definition/web:*");
        assert_eq!(
            task_definition(&family.with("taskDefinitionRevisionNumber", "12")),
            "arn:*:ecs:*:*:task-definition/web:12"
        );
    }

    #[test_log::test]
    fn test_cluster_scoped() {
        let options = ArnOptions::new().region("us-east-1").account("123456789012").with("clusterName", "prod");
        assert_eq!(cluster(&options), "arn:*:ecs:us-east-1:123456789012:cluster/prod");
        assert_eq!(service(&options), "arn:*:ecs:us-east-1:123456789012:service/prod/*");
        assert_eq!(task_set(&options), "arn:*:ecs:us-east-1:123456789012:task-set/prod/*/*");
    }

    #[test_log::test]
    fn test_list_services_scoped_by_condition() {
        let list = Action::ListServices.definition().unwrap();
        assert_eq!(
            list.documentation(),
            "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListServices.html"
        );
        assert_eq!(list.condition_keys(), &["ecs:cluster"]);
        assert!(list.resource_types().is_empty());

        let by_namespace = Action::ListServicesByNamespace.definition().unwrap();
        assert_eq!(
            by_namespace.documentation(),
            "https://docs.aws.amazon.com/AmazonECS/latest/APIReference/API_ListServicesByNamespace.html"
        );
        assert_eq!(by_namespace.condition_keys(), &["ecs:namespace"]);
    }

    #[test_log::test]
    fn test_tagging_covers_every_resource() {
        let tag = CATALOG.action("TagResource").unwrap();
        for template in CATALOG.resources() {
            assert!(tag.applies_to(template.resource_type()), "{}", template.resource_type());
        }
    }
}
