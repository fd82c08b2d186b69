//! AWS DataSync.

service_catalog! {
    prefix: "datasync",
    name: "AWS DataSync",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awsdatasync.html",
    api_docs: "https://docs.aws.amazon.com/datasync/latest/userguide/API_",
    actions: {
        AddStorageSystem {
            access: Write,
            description: "Grants permission to create an AWS resource for an on-premises storage system that you want DataSync Discovery to collect information about",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CancelTaskExecution {
            access: Write,
            description: "Grants permission to cancel execution of a sync task",
            resources: ["taskExecution"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateAgent {
            access: Write,
            description: "Grants permission to activate an agent that you have deployed on your host",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationAzureBlob {
            access: Write,
            description: "Grants permission to create an endpoint for a Microsoft Azure Blob Storage container",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationEfs {
            access: Write,
            description: "Grants permission to create an endpoint for an Amazon EFS file system",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationFsxLustre {
            access: Write,
            description: "Grants permission to create an endpoint for an Amazon Fsx Lustre",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationFsxOntap {
            access: Write,
            description: "Grants permission to create an endpoint for Amazon FSx for NetApp ONTAP",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationFsxOpenZfs {
            access: Write,
            description: "Grants permission to create an endpoint for Amazon FSx for OpenZFS",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationFsxWindows {
            access: Write,
            description: "Grants permission to create an endpoint for an Amazon FSx Windows File Server file system",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationHdfs {
            access: Write,
            description: "Grants permission to create an endpoint for an Amazon Hdfs",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationNfs {
            access: Write,
            description: "Grants permission to create an endpoint for a NFS file system",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationObjectStorage {
            access: Write,
            description: "Grants permission to create an endpoint for a self-managed object storage bucket",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLocationSmb {
            access: Write,
            description: "Grants permission to create an endpoint for an SMB file system",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateTask {
            access: Write,
            description: "Grants permission to create a sync task",
            resources: ["location"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        DeleteAgent {
            access: Write,
            description: "Grants permission to delete an agent",
            resources: ["agent"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteLocation {
            access: Write,
            description: "Grants permission to delete the configuration of a location used by AWS DataSync",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteTask {
            access: Write,
            description: "Grants permission to delete a sync task",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeAgent {
            access: Read,
            description: "Grants permission to view metadata such as name, network interfaces, and the status (that is, whether the agent is running or not) about a sync agent",
            resources: ["agent"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeDiscoveryJob {
            access: Read,
            description: "Grants permission to view metadata about a discovery job",
            resources: ["discoveryJob"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationAzureBlob {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about a Microsoft Azure Blob Storage location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationEfs {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon EFS sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationFsxLustre {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon FSx Lustre sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationFsxOntap {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon FSx for NetApp ONTAP sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationFsxOpenZfs {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon FSx OpenZFS sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationFsxWindows {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon FSx Windows sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationHdfs {
            access: Read,
            description: "Grants permission to view metadata, such as the path information about an Amazon HDFS sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationNfs {
            access: Read,
            description: "Grants permission to view metadata, such as the path information, about a NFS sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationObjectStorage {
            access: Read,
            description: "Grants permission to view metadata about a self-managed object storage server location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLocationSmb {
            access: Read,
            description: "Grants permission to view metadata, such as the path information, about an SMB sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeStorageSystem {
            access: Read,
            description: "Grants permission to view information about an on-premises storage system that you are using with DataSync Discovery",
            resources: ["storageSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeTask {
            access: Read,
            description: "Grants permission to view metadata about a sync task",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeTaskExecution {
            access: Read,
            description: "Grants permission to view metadata about a sync task that is being executed",
            resources: ["taskExecution"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListAgents {
            access: List,
            description: "Grants permission to list agents owned by an AWS account in a region specified in the request",
            resources: [],
            conditions: [],
        },
        ListDiscoveryJobs {
            access: List,
            description: "Grants permission to list DataSync Discovery jobs",
            resources: ["storageSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListLocations {
            access: List,
            description: "Grants permission to list source and destination sync locations",
            resources: [],
            conditions: [],
        },
        ListStorageSystems {
            access: List,
            description: "Grants permission to list the on-premises storage systems that you are using with DataSync Discovery",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list tags that have been added to the specified resource",
            resources: ["agent", "location", "task", "taskExecution"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListTaskExecutions {
            access: List,
            description: "Grants permission to list executed sync tasks",
            resources: [],
            conditions: [],
        },
        ListTasks {
            access: List,
            description: "Grants permission to list of all the sync tasks",
            resources: [],
            conditions: [],
        },
        RemoveStorageSystem {
            access: Write,
            description: "Grants permission to permanently remove a storage system resource from DataSync Discovery, including the associated discovery jobs, collected data, and recommendations",
            resources: ["storageSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StartDiscoveryJob {
            access: Write,
            description: "Grants permission to start a DataSync Discovery job for an on-premises storage system",
            resources: ["storageSystem"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        StartTaskExecution {
            access: Write,
            description: "Grants permission to start a specific invocation of a sync task",
            resources: ["task"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        StopDiscoveryJob {
            access: Write,
            description: "Grants permission to stop a DataSync Discovery job from running",
            resources: ["discoveryJob"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to apply a key-value pair to an AWS resource",
            resources: ["agent", "location", "task", "taskExecution"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove one or more tags from the specified resource",
            resources: ["agent", "location", "task", "taskExecution"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateAgent {
            access: Write,
            description: "Grants permission to update the name of an agent",
            resources: ["agent"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateDiscoveryJob {
            access: Write,
            description: "Grants permission to update a DataSync Discovery job",
            resources: ["discoveryJob"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLocationAzureBlob {
            access: Write,
            description: "Grants permission to update a Microsoft Azure Blob Storage location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLocationHdfs {
            access: Write,
            description: "Grants permission to update an HDFS sync Location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLocationNfs {
            access: Write,
            description: "Grants permission to update an NFS sync Location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLocationObjectStorage {
            access: Write,
            description: "Grants permission to update a self-managed object storage server location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLocationSmb {
            access: Write,
            description: "Grants permission to update an SMB sync location",
            resources: ["location"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateStorageSystem {
            access: Write,
            description: "Grants permission to update a storage system resource's information",
            resources: ["storageSystem"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateTask {
            access: Write,
            description: "Grants permission to update metadata associated with a sync task",
            resources: ["task"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateTaskExecution {
            access: Write,
            description: "Grants permission to update execution of a sync task",
            resources: ["taskExecution"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        agent => "agent": "arn:{partition}:datasync:{region}:{account}:agent/{agentId}",
        location => "location": "arn:{partition}:datasync:{region}:{account}:location/{locationId}",
        task => "task": "arn:{partition}:datasync:{region}:{account}:task/{taskId}",
        task_execution => "taskExecution": "arn:{partition}:datasync:{region}:{account}:task/{taskId}/execution/{executionId}",
        storage_system => "storageSystem": "arn:{partition}:datasync:{region}:{account}:system/{storageSystemId}",
        discovery_job => "discoveryJob": "arn:{partition}:datasync:{region}:{account}:system/{storageSystemId}/job/{discoveryJobId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{discovery_job, task, task_execution, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_task_execution() {
        assert_eq!(task_execution(&ArnOptions::new()), "arn:*:datasync:*:*:task/*/execution/*");

        let options = ArnOptions::new()
            .partition("aws")
            .region("us-east-2")
            .account("111222333444")
            .with("taskId", "task-08de6e6697796f026")
            .with("executionId", "exec-04ce9d516d69bd52f");
        assert_eq!(
            task_execution(&options),
            "arn:aws:datasync:us-east-2:111222333444:task/task-08de6e6697796f026/execution/exec-04ce9d516d69bd52f"
        );
        assert_eq!(task(&options), "arn:aws:datasync:us-east-2:111222333444:task/task-08de6e6697796f026");
    }

    #[test_log::test]
    fn test_discovery_job() {
        let options = ArnOptions::new().with("discoveryJobId", "discovery-job-1");
        assert_eq!(discovery_job(&options), "arn:*:datasync:*:*:system/*/job/discovery-job-1");
        assert_eq!(RESOURCES.len(), 6);
    }
}
