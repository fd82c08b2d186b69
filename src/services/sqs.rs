//! Amazon Simple Queue Service.
//!
//! Batch APIs such as `SendMessageBatch` authorize as their single-message counterparts and have no actions of
//! their own.

service_catalog! {
    prefix: "sqs",
    name: "Amazon SQS",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonsqs.html",
    api_docs: "https://docs.aws.amazon.com/AWSSimpleQueueService/latest/APIReference/API_",
    actions: {
        AddPermission {
            access: PermissionsManagement,
            description: "Grants permission to a queue for a specific principal",
            resources: ["queue"],
            conditions: [],
        },
        CancelMessageMoveTask {
            access: Write,
            description: "Grants permission to cancel an in progress message move task",
            resources: ["queue"],
            conditions: [],
        },
        ChangeMessageVisibility {
            access: Write,
            description: "Grants permission to change the visibility timeout of a specified message in a queue to a new value",
            resources: ["queue"],
            conditions: [],
        },
        CreateQueue {
            access: Write,
            description: "Grants permission to create a new queue, or returns the URL of an existing one",
            resources: ["queue"],
            conditions: ["aws:TagKeys", "aws:RequestTag/${TagKey}"],
        },
        DeleteMessage {
            access: Write,
            description: "Grants permission to delete the specified message from the specified queue",
            resources: ["queue"],
            conditions: [],
        },
        DeleteQueue {
            access: Write,
            description: "Grants permission to delete the queue specified by the queue URL, regardless of whether the queue is empty",
            resources: ["queue"],
            conditions: [],
        },
        GetQueueAttributes {
            access: Read,
            description: "Grants permission to get attributes for the specified queue",
            resources: ["queue"],
            conditions: [],
        },
        GetQueueUrl {
            access: Read,
            description: "Grants permission to return the URL of an existing queue",
            resources: ["queue"],
            conditions: [],
        },
        ListDeadLetterSourceQueues {
            access: Read,
            description: "Grants permission to return a list of your queues that have the RedrivePolicy queue attribute configured with a dead letter queue",
            resources: ["queue"],
            conditions: [],
        },
        ListMessageMoveTasks {
            access: Read,
            description: "Grants permission to list the most recent message movement tasks (up to 10) under a specific source queue",
            resources: ["queue"],
            conditions: [],
        },
        ListQueueTags {
            access: Read,
            description: "Grants permission to list tags added to an SQS queue",
            resources: ["queue"],
            conditions: [],
        },
        ListQueues {
            access: List,
            description: "Grants permission to return a list of your queues",
            resources: [],
            conditions: [],
        },
        PurgeQueue {
            access: Write,
            description: "Grants permission to delete the messages in a queue specified by the queue URL",
            resources: ["queue"],
            conditions: [],
        },
        ReceiveMessage {
            access: Read,
            description: "Grants permission to retrieve one or more messages, with a maximum limit of 10 messages, from the specified queue",
            resources: ["queue"],
            conditions: [],
        },
        RemovePermission {
            access: PermissionsManagement,
            description: "Grants permission to revoke any permissions in the queue policy that matches the specified Label parameter",
            resources: ["queue"],
            conditions: [],
        },
        SendMessage {
            access: Write,
            description: "Grants permission to deliver a message to the specified queue",
            resources: ["queue"],
            conditions: [],
        },
        SetQueueAttributes {
            access: Write,
            description: "Grants permission to set the value of one or more queue attributes",
            resources: ["queue"],
            conditions: [],
        },
        StartMessageMoveTask {
            access: Write,
            description: "Grants permission to start a message movement task from a dead letter queue to its source queue or another queue",
            resources: ["queue"],
            conditions: [],
        },
        TagQueue {
            access: Tagging,
            description: "Grants permission to add tags to the specified SQS queue",
            resources: ["queue"],
            conditions: ["aws:TagKeys", "aws:RequestTag/${TagKey}"],
        },
        UntagQueue {
            access: Tagging,
            description: "Grants permission to remove tags from the specified SQS queue",
            resources: ["queue"],
            conditions: ["aws:TagKeys"],
        },
    },
    resources: {
        queue => "queue": "arn:{partition}:sqs:{region}:{account}:{queueName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{queue, Action, CATALOG},
        crate::{AccessLevel, ArnOptions},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_queue() {
        let options = ArnOptions::new().partition("aws").region("us-east-1").account("123456789012");
        assert_eq!(queue(&options), "arn:aws:sqs:us-east-1:123456789012:*");
        assert_eq!(queue(&options.with("queueName", "jobs")), "arn:aws:sqs:us-east-1:123456789012:jobs");
    }

    #[test_log::test]
    fn test_no_batch_actions() {
        assert!(CATALOG.action("SendMessageBatch").is_none());
        assert_eq!(Action::SendMessage.definition().unwrap().access_level(), AccessLevel::Write);
        assert_eq!(Action::ReceiveMessage.definition().unwrap().access_level(), AccessLevel::Read);
    }
}
