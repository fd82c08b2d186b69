//! Amazon CloudWatch Logs.

service_catalog! {
    prefix: "logs",
    name: "Amazon CloudWatch Logs",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazoncloudwatchlogs.html",
    api_docs: "https://docs.aws.amazon.com/AmazonCloudWatchLogs/latest/APIReference/API_",
    actions: {
        AssociateKmsKey {
            access: Write,
            description: "Grants permission to associate the specified AWS Key Management Service (AWS KMS) customer master key (CMK) with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        CancelExportTask {
            access: Write,
            description: "Grants permission to cancel an export task if it is in PENDING or RUNNING state",
            resources: [],
            conditions: [],
        },
        CreateDelivery {
            access: Write,
            description: "Grants permission to create a delivery between a delivery source and a delivery destination",
            resources: ["delivery", "deliveryDestination", "deliverySource"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateExportTask {
            access: Write,
            description: "Grants permission to create an ExportTask which allows you to efficiently export data from a Log Group to your Amazon S3 bucket",
            resources: ["logGroup"],
            conditions: [],
        },
        CreateLogAnomalyDetector {
            access: Write,
            description: "Grants permission to create a log anomaly detector",
            resources: ["anomalyDetector", "logGroup"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLogDelivery {
            access: Write,
            description: "Grants permission to create the log delivery",
            resources: [],
            conditions: [],
        },
        CreateLogGroup {
            access: Write,
            description: "Grants permission to create a new log group with the specified name",
            resources: ["logGroup"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateLogStream {
            access: Write,
            description: "Grants permission to create a new log stream with the specified name",
            resources: ["logGroup"],
            conditions: [],
        },
        DeleteAccountPolicy {
            access: Write,
            description: "Grants permission to delete a data protection policy or subscription filter policy from this account",
            resources: [],
            conditions: [],
        },
        DeleteDataProtectionPolicy {
            access: Write,
            description: "Grants permission to delete a data protection policy attached to an account or log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DeleteDelivery {
            access: Write,
            description: "Grants permission to delete a delivery",
            resources: ["delivery"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteDeliveryDestination {
            access: Write,
            description: "Grants permission to delete a delivery destination",
            resources: ["deliveryDestination"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteDeliveryDestinationPolicy {
            access: Write,
            description: "Grants permission to delete a delivery destination policy",
            resources: ["deliveryDestination"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteDeliverySource {
            access: Write,
            description: "Grants permission to delete a delivery source",
            resources: ["deliverySource"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteDestination {
            access: Write,
            description: "Grants permission to delete the destination with the specified name and eventually disables all the subscription filters that publish to it",
            resources: ["destination"],
            conditions: [],
        },
        DeleteLogAnomalyDetector {
            access: Write,
            description: "Grants permission to delete a log anomaly detector",
            resources: ["anomalyDetector"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteLogDelivery {
            access: Write,
            description: "Grants permission to delete the log delivery information for specified log delivery",
            resources: [],
            conditions: [],
        },
        DeleteLogGroup {
            access: Write,
            description: "Grants permission to delete the log group with the specified name and permanently deletes all the archived log events associated with it",
            resources: ["logGroup"],
            conditions: [],
        },
        DeleteLogStream {
            access: Write,
            description: "Grants permission to delete a log stream and permanently deletes all the archived log events associated with it",
            resources: ["logStream"],
            conditions: [],
        },
        DeleteMetricFilter {
            access: Write,
            description: "Grants permission to delete a metric filter associated with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DeleteQueryDefinition {
            access: Write,
            description: "Grants permission to delete a saved CloudWatch Logs Insights query definition",
            resources: [],
            conditions: [],
        },
        DeleteResourcePolicy {
            access: Write,
            description: "Grants permission to delete a resource policy from this account",
            resources: [],
            conditions: [],
        },
        DeleteRetentionPolicy {
            access: Write,
            description: "Grants permission to delete the retention policy of the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DeleteSubscriptionFilter {
            access: Write,
            description: "Grants permission to delete a subscription filter associated with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DescribeAccountPolicies {
            access: Read,
            description: "Grants permission to retrieve a data protection policy or subscription filter policy attached to an account",
            resources: [],
            conditions: [],
        },
        DescribeDeliveries {
            access: List,
            description: "Grants permission to return a list of all deliveries in the account",
            resources: [],
            conditions: [],
        },
        DescribeDeliveryDestinations {
            access: List,
            description: "Grants permission to return a list of all delivery destinations in the account",
            resources: [],
            conditions: [],
        },
        DescribeDeliverySources {
            access: List,
            description: "Grants permission to return a list of all delivery sources in the account",
            resources: [],
            conditions: [],
        },
        DescribeDestinations {
            access: List,
            description: "Grants permission to return all the destinations that are associated with the AWS account making the request",
            resources: [],
            conditions: [],
        },
        DescribeExportTasks {
            access: List,
            description: "Grants permission to return all the export tasks that are associated with the AWS account making the request",
            resources: [],
            conditions: [],
        },
        DescribeLogGroups {
            access: List,
            description: "Grants permission to return all the log groups that are associated with the AWS account making the request",
            resources: [],
            conditions: [],
        },
        DescribeLogStreams {
            access: List,
            description: "Grants permission to return all the log streams that are associated with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DescribeMetricFilters {
            access: List,
            description: "Grants permission to return all the metrics filters associated with the AWS account making the request",
            resources: [],
            conditions: [],
        },
        DescribeQueries {
            access: List,
            description: "Grants permission to return a list of CloudWatch Logs Insights queries that are scheduled, executing, or have been executed recently in this account",
            resources: [],
            conditions: [],
        },
        DescribeQueryDefinitions {
            access: List,
            description: "Grants permission to return a paginated list of your saved CloudWatch Logs Insights query definitions",
            resources: [],
            conditions: [],
        },
        DescribeResourcePolicies {
            access: List,
            description: "Grants permission to return all the resource policies in this account",
            resources: [],
            conditions: [],
        },
        DescribeSubscriptionFilters {
            access: List,
            description: "Grants permission to return all the subscription filters associated with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        DisassociateKmsKey {
            access: Write,
            description: "Grants permission to disassociate the associated AWS Key Management Service (AWS KMS) customer master key (CMK) from the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        FilterLogEvents {
            access: Read,
            description: "Grants permission to list log events from the specified log group, which can be filtered using a filter pattern",
            resources: ["logGroup"],
            conditions: [],
        },
        GetDataProtectionPolicy {
            access: Read,
            description: "Grants permission to retrieve a data protection policy attached to an account or log group",
            resources: ["logGroup"],
            conditions: [],
        },
        GetDelivery {
            access: Read,
            description: "Grants permission to get the information about a delivery",
            resources: ["delivery"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetDeliveryDestination {
            access: Read,
            description: "Grants permission to get the information about a delivery destination",
            resources: ["deliveryDestination"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetDeliveryDestinationPolicy {
            access: Read,
            description: "Grants permission to get the information about a delivery destination policy",
            resources: ["deliveryDestination"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetDeliverySource {
            access: Read,
            description: "Grants permission to get the information about a delivery source",
            resources: ["deliverySource"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetLogAnomalyDetector {
            access: Read,
            description: "Grants permission to retrieve information about the log anomaly detector",
            resources: ["anomalyDetector"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetLogDelivery {
            access: Read,
            description: "Grants permission to get the log delivery information for specified log delivery",
            resources: [],
            conditions: [],
        },
        GetLogEvents {
            access: Read,
            description: "Grants permission to retrieve log events from the specified log stream",
            resources: ["logStream"],
            conditions: [],
        },
        GetLogGroupFields {
            access: Read,
            description: "Grants permission to return a list of the fields that are included in log events in the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        GetLogRecord {
            access: Read,
            description: "Grants permission to retrieve all the fields and values of a single log event",
            resources: [],
            conditions: [],
        },
        GetQueryResults {
            access: Read,
            description: "Grants permission to return the results from the specified query",
            resources: [],
            conditions: [],
        },
        Link {
            access: Write,
            description: "Grants permission to share CloudWatch resources with a monitoring account",
            resources: [],
            conditions: [],
            docs: "https://docs.aws.amazon.com/AmazonCloudWatch/latest/logs/permissions-reference-cwl.html",
        },
        ListAnomalies {
            access: List,
            description: "Grants permission to return a list of anomalies that log anomaly detectors have found",
            resources: ["anomalyDetector"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListLogAnomalyDetectors {
            access: List,
            description: "Grants permission to retrieve a list of the log anomaly detectors in the account",
            resources: [],
            conditions: [],
        },
        ListLogDeliveries {
            access: List,
            description: "Grants permission to list all the log deliveries for specified account and/or log source",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: List,
            description: "Grants permission to list the tags for the specified resource",
            resources: [
                "anomalyDetector",
                "delivery",
                "deliveryDestination",
                "deliverySource",
                "destination",
                "logGroup",
            ],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListTagsLogGroup {
            access: List,
            description: "Grants permission to list the tags for the specified log group",
            resources: ["logGroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutAccountPolicy {
            access: Write,
            description: "Grants permission to attach a data protection policy or subscription filter policy to an account",
            resources: [],
            conditions: [],
        },
        PutDataProtectionPolicy {
            access: Write,
            description: "Grants permission to attach a data protection policy to an account or log group",
            resources: ["logGroup"],
            conditions: [],
        },
        PutDeliveryDestination {
            access: Write,
            description: "Grants permission to create or update a logical delivery destination",
            resources: ["deliveryDestination"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        PutDeliveryDestinationPolicy {
            access: Write,
            description: "Grants permission to create or update a resource policy allowing other AWS accounts to link to a delivery destination",
            resources: ["deliveryDestination"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutDeliverySource {
            access: Write,
            description: "Grants permission to create or update a logical delivery source",
            resources: ["deliverySource"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        PutDestination {
            access: Write,
            description: "Grants permission to create or update a Destination",
            resources: ["destination"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        PutDestinationPolicy {
            access: Write,
            description: "Grants permission to create or update an access policy associated with an existing Destination",
            resources: ["destination"],
            conditions: [],
        },
        PutLogEvents {
            access: Write,
            description: "Grants permission to upload a batch of log events to the specified log stream",
            resources: ["logStream"],
            conditions: [],
        },
        PutMetricFilter {
            access: Write,
            description: "Grants permission to create or update a metric filter and associates it with the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        PutQueryDefinition {
            access: Write,
            description: "Grants permission to create or update a query definition",
            resources: [],
            conditions: [],
        },
        PutResourcePolicy {
            access: Write,
            description: "Grants permission to create or update a resource policy allowing other AWS services to put log events to this account",
            resources: [],
            conditions: [],
        },
        PutRetentionPolicy {
            access: Write,
            description: "Grants permission to set the retention of the specified log group",
            resources: ["logGroup"],
            conditions: [],
        },
        PutSubscriptionFilter {
            access: Write,
            description: "Grants permission to create or update a subscription filter and associates it with the specified log group",
            resources: ["destination", "logGroup"],
            conditions: [],
        },
        StartLiveTail {
            access: Read,
            description: "Grants permission to start a Live Tail streaming session for one or more log groups",
            resources: ["logGroup"],
            conditions: [],
        },
        StartQuery {
            access: Read,
            description: "Grants permission to schedule a query of a log group using CloudWatch Logs Insights",
            resources: ["logGroup"],
            conditions: [],
        },
        StopLiveTail {
            access: Read,
            description: "Grants permission to stop a Live Tail streaming session",
            resources: [],
            conditions: [],
        },
        StopQuery {
            access: Read,
            description: "Grants permission to stop a CloudWatch Logs Insights query that is in progress",
            resources: [],
            conditions: [],
        },
        TagLogGroup {
            access: Tagging,
            description: "Grants permission to add or update the specified tags for the specified log group",
            resources: ["logGroup"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add or update the specified tags for the specified resource",
            resources: [
                "anomalyDetector",
                "delivery",
                "deliveryDestination",
                "deliverySource",
                "destination",
                "logGroup",
            ],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        TestMetricFilter {
            access: Read,
            description: "Grants permission to test the filter pattern of a metric filter against a sample of log event messages",
            resources: [],
            conditions: [],
        },
        Unmask {
            access: Read,
            description: "Grants permission to display log events in clear text when they have been masked by a data protection policy",
            resources: ["logGroup"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/AmazonCloudWatch/latest/logs/permissions-reference-cwl.html",
        },
        UntagLogGroup {
            access: Tagging,
            description: "Grants permission to remove the specified tags from the specified log group",
            resources: ["logGroup"],
            conditions: ["aws:TagKeys"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove the specified tags from the specified resource",
            resources: [
                "anomalyDetector",
                "delivery",
                "deliveryDestination",
                "deliverySource",
                "destination",
                "logGroup",
            ],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateAnomaly {
            access: Write,
            description: "Grants permission to update an anomaly detector's suppression settings",
            resources: ["anomalyDetector"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLogAnomalyDetector {
            access: Write,
            description: "Grants permission to update an existing log anomaly detector",
            resources: ["anomalyDetector"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateLogDelivery {
            access: Write,
            description: "Grants permission to update the log delivery information for specified log delivery",
            resources: [],
            conditions: [],
        },
    },
    resources: {
        log_group => "logGroup": "arn:{partition}:logs:{region}:{account}:log-group:{logGroupName}",
        log_stream => "logStream": "arn:{partition}:logs:{region}:{account}:log-group:{logGroupName}:log-stream:{logStreamName}",
        destination => "destination": "arn:{partition}:logs:{region}:{account}:destination:{destinationName}",
        delivery_source => "deliverySource": "arn:{partition}:logs:{region}:{account}:delivery-source:{deliverySourceName}",
        delivery => "delivery": "arn:{partition}:logs:{region}:{account}:delivery:{deliveryId}",
        delivery_destination => "deliveryDestination": "arn:{partition}:logs:{region}:{account}:delivery-destination:{deliveryDestinationName}",
        anomaly_detector => "anomalyDetector": "arn:{partition}:logs:{region}:{account}:anomaly-detector:{detectorId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{log_group, log_stream},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_log_group_and_stream() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-east-1")
            .account("123456789012")
            .with("logGroupName", "/aws/lambda/my-function");
        assert_eq!(log_group(&options), "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/my-function");
        assert_eq!(
            log_stream(&options.with("logStreamName", "2024/01/01/[$LATEST]abcdef")),
            "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/my-function:log-stream:2024/01/01/[$LATEST]abcdef"
        );
    }
}
