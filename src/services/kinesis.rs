//! Amazon Kinesis Data Streams.
//!
//! The `kmsKey` resource type names a key owned by KMS; its ARN carries the `kms` service.

service_catalog! {
    prefix: "kinesis",
    name: "Amazon Kinesis Data Streams",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonkinesisdatastreams.html",
    api_docs: "https://docs.aws.amazon.com/kinesis/latest/APIReference/API_",
    actions: {
        AddTagsToStream {
            access: Tagging,
            description: "Grants permission to add or update tags for the specified Amazon Kinesis stream. Each stream can have up to 50 tags",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateStream {
            access: Write,
            description: "Grants permission to create a Amazon Kinesis stream",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        DecreaseStreamRetentionPeriod {
            access: Write,
            description: "Grants permission to decrease the stream's retention period, which is the length of time data records are accessible after they are added to the stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to delete a resource policy associated with a specified stream or consumer",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteStream {
            access: Write,
            description: "Grants permission to delete a stream and all its shards and data",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeregisterStreamConsumer {
            access: Write,
            description: "Grants permission to deregister a stream consumer with a Kinesis data stream",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeLimits {
            access: Read,
            description: "Grants permission to describe the shard limits and usage for the account",
            resources: [],
            conditions: [],
        },
        DescribeStream {
            access: Read,
            description: "Grants permission to describe the specified stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeStreamConsumer {
            access: Read,
            description: "Grants permission to get the description of a registered stream consumer",
            resources: ["consumer"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeStreamSummary {
            access: Read,
            description: "Grants permission to provide a summarized description of the specified Kinesis data stream without the shard list",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DisableEnhancedMonitoring {
            access: Write,
            description: "Grants permission to disables enhanced monitoring",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        EnableEnhancedMonitoring {
            access: Write,
            description: "Grants permission to enable enhanced Kinesis data stream monitoring for shard-level metrics",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetRecords {
            access: Read,
            description: "Grants permission to get data records from a shard",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetResourcePolicy {
            access: Read,
            description: "Grants permission to get a resource policy associated with a specified stream or consumer",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetShardIterator {
            access: Read,
            description: "Grants permission to get a shard iterator. A shard iterator expires five minutes after it is returned to the requester",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        IncreaseStreamRetentionPeriod {
            access: Write,
            description: "Grants permission to increase the stream's retention period, which is the length of time data records are accessible after they are added to the stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListShards {
            access: List,
            description: "Grants permission to list the shards in a stream and provides information about each shard",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListStreamConsumers {
            access: List,
            description: "Grants permission to list the stream consumers registered to receive data from a Kinesis stream using enhanced fan-out, and provides information about each consumer",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListStreams {
            access: List,
            description: "Grants permission to list your streams",
            resources: [],
            conditions: [],
        },
        ListTagsForStream {
            access: Read,
            description: "Grants permission to list the tags for the specified Amazon Kinesis stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        MergeShards {
            access: Write,
            description: "Grants permission to merge two adjacent shards in a stream and combines them into a single shard to reduce the stream's capacity to ingest and transport data",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutRecord {
            access: Write,
            description: "Grants permission to write a single data record from a producer into an Amazon Kinesis stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutRecords {
            access: Write,
            description: "Grants permission to write multiple data records from a producer into an Amazon Kinesis stream in a single call (also referred to as a PutRecords request)",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutResourcePolicy {
            access: PermissionsManagement,
            description: "Grants permission to attach a resource policy to a specified stream or consumer",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RegisterStreamConsumer {
            access: Write,
            description: "Grants permission to register a stream consumer with a Kinesis data stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RemoveTagsFromStream {
            access: Tagging,
            description: "Grants permission to remove tags from the specified Kinesis data stream. Removed tags are deleted and cannot be recovered after this operation successfully completes",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:TagKeys"],
        },
        SplitShard {
            access: Write,
            description: "Grants permission to split a shard into two new shards in the Kinesis data stream, to increase the stream's capacity to ingest and transport data",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StartStreamEncryption {
            access: Write,
            description: "Grants permission to enable or update server-side encryption using an AWS KMS key for a specified stream",
            resources: ["kmsKey", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        StopStreamEncryption {
            access: Write,
            description: "Grants permission to disable server-side encryption for a specified stream",
            resources: ["kmsKey", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        SubscribeToShard {
            access: Read,
            description: "Grants permission to listen to a specific shard with enhanced fan-out",
            resources: ["consumer"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add or update tags for the specified Amazon Kinesis resource. Each resource can have up to 50 tags",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove tags from the specified Kinesis data resource. Removed tags are deleted and cannot be recovered after this operation successfully completes",
            resources: ["consumer", "stream"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateShardCount {
            access: Write,
            description: "Grants permission to update the shard count of the specified stream to the specified number of shards",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateStreamMode {
            access: Write,
            description: "Grants permission to update the capacity mode of the data stream",
            resources: ["stream"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        stream => "stream": "arn:{partition}:kinesis:{region}:{account}:stream/{streamName}",
        consumer => "consumer": "arn:{partition}:kinesis:{region}:{account}:{streamType}/{streamName}/consumer/{consumerName}:{consumerCreationTimestamp}",
        kms_key => "kmsKey": "arn:{partition}:kms:{region}:{account}:key/{keyId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{consumer, kms_key, stream, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_consumer() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-east-1")
            .account("123456789012")
            .with("streamType", "stream")
            .with("streamName", "orders")
            .with("consumerName", "analytics")
            .with("consumerCreationTimestamp", "1592436768");
        assert_eq!(
            consumer(&options),
            "arn:aws:kinesis:us-east-1:123456789012:stream/orders/consumer/analytics:1592436768"
        );
        assert_eq!(stream(&options), "arn:aws:kinesis:us-east-1:123456789012:stream/orders");
    }

    #[test_log::test]
    fn test_kms_key_uses_kms_service() {
        assert_eq!(kms_key(&ArnOptions::new()), "arn:*:kms:*:*:key/*");
        let template = RESOURCES.iter().find(|t| t.resource_type() == "kmsKey").unwrap();
        assert_eq!(template.resource_arn(&ArnOptions::new()).service(), "kms");
    }
}
