service_catalog! {
    prefix: "firehose",
    name: "Amazon Kinesis Firehose",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonkinesisfirehose.html",
    api_docs: "https://docs.aws.amazon.com/firehose/latest/APIReference/API_",
    actions: {
        CreateDeliveryStream {
            access: Write,
            description: "Grants permission to create a delivery stream",
            resources: ["deliverystream"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        DeleteDeliveryStream {
            access: Write,
            description: "Grants permission to delete a delivery stream and its data",
            resources: ["deliverystream"],
            conditions: [],
        },
        DescribeDeliveryStream {
            access: List,
            description: "Grants permission to describe the specified delivery stream and gets the status",
            resources: ["deliverystream"],
            conditions: [],
        },
        ListDeliveryStreams {
            access: List,
            description: "Grants permission to list your delivery streams",
            resources: [],
            conditions: [],
        },
        ListTagsForDeliveryStream {
            access: List,
            description: "Grants permission to list the tags for the specified delivery stream",
            resources: ["deliverystream"],
            conditions: [],
        },
        PutRecord {
            access: Write,
            description: "Grants permission to write a single data record into an Amazon Kinesis Firehose delivery stream",
            resources: ["deliverystream"],
            conditions: [],
        },
        PutRecordBatch {
            access: Write,
            description: "Grants permission to write multiple data records into a delivery stream in a single call, which can achieve higher throughput per producer than when writing single records",
            resources: ["deliverystream"],
            conditions: [],
        },
        StartDeliveryStreamEncryption {
            access: Write,
            description: "Grants permission to enable server-side encryption (SSE) for the delivery stream",
            resources: ["deliverystream"],
            conditions: [],
        },
        StopDeliveryStreamEncryption {
            access: Write,
            description: "Grants permission to disable the specified destination of the specified delivery stream",
            resources: ["deliverystream"],
            conditions: [],
        },
        TagDeliveryStream {
            access: Tagging,
            description: "Grants permission to add or update tags for the specified delivery stream",
            resources: ["deliverystream"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UntagDeliveryStream {
            access: Tagging,
            description: "Grants permission to remove tags from the specified delivery stream",
            resources: ["deliverystream"],
            conditions: ["aws:TagKeys"],
        },
        UpdateDestination {
            access: Write,
            description: "Grants permission to update the specified destination of the specified delivery stream",
            resources: ["deliverystream"],
            conditions: [],
        },
    },
    resources: {
        deliverystream => "deliverystream": "arn:{partition}:firehose:{region}:{account}:deliverystream/{deliveryStreamName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{deliverystream, Action, ACTIONS},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_deliverystream() {
        assert_eq!(deliverystream(&ArnOptions::new()), "arn:*:firehose:*:*:deliverystream/*");
        assert_eq!(
            deliverystream(&ArnOptions::from([("account", "123456789012"), ("deliveryStreamName", "clicks")])),
            "arn:*:firehose:*:123456789012:deliverystream/clicks"
        );
    }

    #[test_log::test]
    fn test_actions() {
        assert_eq!(ACTIONS.len(), 12);
        assert_eq!(Action::PutRecordBatch.as_str(), "firehose:PutRecordBatch");
        assert_eq!(
            Action::PutRecord.definition().unwrap().documentation(),
            "https://docs.aws.amazon.com/firehose/latest/APIReference/API_PutRecord.html"
        );
    }
}
