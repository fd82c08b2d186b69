//! Amazon EventBridge.
//!
//! Rules on the default event bus omit the bus name; rules on a custom bus use `rule/{eventBusName}/{ruleName}`.

service_catalog! {
    prefix: "events",
    name: "Amazon EventBridge",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazoneventbridge.html",
    api_docs: "https://docs.aws.amazon.com/eventbridge/latest/APIReference/API_",
    actions: {
        ActivateEventSource {
            access: Write,
            description: "Grants permission to activate partner event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        CancelReplay {
            access: Write,
            description: "Grants permission to cancel a replay",
            resources: ["replay"],
            conditions: [],
        },
        CreateApiDestination {
            access: Write,
            description: "Grants permission to create a new api destination",
            resources: ["apiDestination"],
            conditions: [],
        },
        CreateArchive {
            access: Write,
            description: "Grants permission to create a new archive",
            resources: ["archive", "eventBus"],
            conditions: [],
        },
        CreateConnection {
            access: Write,
            description: "Grants permission to create a new connection",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateEndpoint {
            access: Write,
            description: "Grants permission to create a global endpoint",
            resources: ["endpoint"],
            conditions: [],
        },
        CreateEventBus {
            access: Write,
            description: "Grants permission to create event buses",
            resources: ["eventBus"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreatePartnerEventSource {
            access: Write,
            description: "Grants permission to create partner event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        DeactivateEventSource {
            access: Write,
            description: "Grants permission to deactivate event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        DeauthorizeConnection {
            access: Write,
            description: "Grants permission to deauthorize a connection, deleting its stored authorization secrets",
            resources: ["connection"],
            conditions: [],
        },
        DeleteApiDestination {
            access: Write,
            description: "Grants permission to delete an api destination",
            resources: ["apiDestination"],
            conditions: [],
        },
        DeleteArchive {
            access: Write,
            description: "Grants permission to delete an archive",
            resources: ["archive"],
            conditions: [],
        },
        DeleteConnection {
            access: Write,
            description: "Grants permission to delete a connection",
            resources: ["connection"],
            conditions: [],
        },
        DeleteEndpoint {
            access: Write,
            description: "Grants permission to delete a global endpoint",
            resources: ["endpoint"],
            conditions: [],
        },
        DeleteEventBus {
            access: Write,
            description: "Grants permission to delete event buses",
            resources: ["eventBus"],
            conditions: [],
        },
        DeletePartnerEventSource {
            access: Write,
            description: "Grants permission to delete partner event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        DeleteRule {
            access: Write,
            description: "Grants permission to delete rules",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount", "events:ManagedBy"],
        },
        DescribeApiDestination {
            access: Read,
            description: "Grants permission to retrieve details about an api destination",
            resources: ["apiDestination"],
            conditions: [],
        },
        DescribeArchive {
            access: Read,
            description: "Grants permission to retrieve details about an archive",
            resources: ["archive"],
            conditions: [],
        },
        DescribeConnection {
            access: Read,
            description: "Grants permission to retrieve details about a connection",
            resources: ["connection"],
            conditions: [],
        },
        DescribeEndpoint {
            access: Read,
            description: "Grants permission to retrieve details about a global endpoint",
            resources: ["endpoint"],
            conditions: [],
        },
        DescribeEventBus {
            access: Read,
            description: "Grants permission to retrieve details about event buses",
            resources: ["eventBus"],
            conditions: [],
        },
        DescribeEventSource {
            access: Read,
            description: "Grants permission to retrieve details about event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        DescribePartnerEventSource {
            access: Read,
            description: "Grants permission to retrieve details about partner event sources",
            resources: ["eventSource"],
            conditions: [],
        },
        DescribeReplay {
            access: Read,
            description: "Grants permission to retrieve the details of a replay",
            resources: ["replay"],
            conditions: [],
        },
        DescribeRule {
            access: Read,
            description: "Grants permission to retrieve details about rules",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount"],
        },
        DisableRule {
            access: Write,
            description: "Grants permission to disable rules",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount", "events:ManagedBy"],
        },
        EnableRule {
            access: Write,
            description: "Grants permission to enable rules",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount", "events:ManagedBy"],
        },
        InvokeApiDestination {
            access: Write,
            description: "Grants permission to invoke an api destination",
            resources: ["apiDestination"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/eventbridge/latest/userguide/eb-use-identity-based.html",
        },
        ListApiDestinations {
            access: List,
            description: "Grants permission to retrieve a list of api destinations",
            resources: [],
            conditions: [],
        },
        ListArchives {
            access: List,
            description: "Grants permission to retrieve a list of archives",
            resources: [],
            conditions: [],
        },
        ListConnections {
            access: List,
            description: "Grants permission to retrieve a list of connections",
            resources: [],
            conditions: [],
        },
        ListEndpoints {
            access: List,
            description: "Grants permission to retrieve a list of global endpoints",
            resources: [],
            conditions: [],
        },
        ListEventBuses {
            access: List,
            description: "Grants permission to retrieve a list of the event buses in your account",
            resources: [],
            conditions: [],
        },
        ListEventSources {
            access: List,
            description: "Grants permission to to retrieve a list of event sources shared with this account",
            resources: [],
            conditions: [],
        },
        ListPartnerEventSourceAccounts {
            access: List,
            description: "Grants permission to retrieve a list of AWS account IDs associated with an event source",
            resources: ["eventSource"],
            conditions: [],
        },
        ListPartnerEventSources {
            access: List,
            description: "Grants permission to retrieve a list partner event sources",
            resources: [],
            conditions: [],
        },
        ListReplays {
            access: List,
            description: "Grants permission to retrieve a list of replays",
            resources: [],
            conditions: [],
        },
        ListRuleNamesByTarget {
            access: List,
            description: "Grants permission to retrieve a list of the names of the rules associated with a target",
            resources: [],
            conditions: [],
        },
        ListRules {
            access: List,
            description: "Grants permission to retrieve a list of the Amazon EventBridge rules in the account",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: List,
            description: "Grants permission to retrieve a list of tags associated with an Amazon EventBridge resource",
            resources: ["eventBus", "rule", "ruleOnCustomEventBus"],
            conditions: [],
        },
        ListTargetsByRule {
            access: List,
            description: "Grants permission to retrieve a list of targets defined for a rule",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount"],
        },
        PutEvents {
            access: Write,
            description: "Grants permission to send custom events to Amazon EventBridge",
            resources: ["eventBus"],
            conditions: ["events:source", "events:detail-type", "events:eventBusInvocation"],
        },
        PutPartnerEvents {
            access: Write,
            description: "Grants permission to sends custom events to Amazon EventBridge",
            resources: [],
            conditions: [],
        },
        PutPermission {
            access: PermissionsManagement,
            description: "Grants permission to use the PutPermission action to grants permission to another AWS account to put events to your default event bus",
            resources: ["eventBus"],
            conditions: [],
        },
        PutRule {
            access: Write,
            description: "Grants permission to create or update a rule",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "events:detail.userIdentity.principalId",
                "events:detail-type",
                "events:source",
                "events:detail.service",
                "events:detail.eventTypeCode",
                "events:creatorAccount",
                "events:ManagedBy",
            ],
        },
        PutTargets {
            access: Write,
            description: "Grants permission to add targets to a rule",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:TargetArn", "events:creatorAccount", "events:ManagedBy"],
        },
        RemovePermission {
            access: PermissionsManagement,
            description: "Grants permission to revoke the permission of another AWS account to put events to your default event bus",
            resources: ["eventBus"],
            conditions: [],
        },
        RemoveTargets {
            access: Write,
            description: "Grants permission to remove targets from a rule",
            resources: ["rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "events:creatorAccount", "events:ManagedBy"],
        },
        RetrieveConnectionCredentials {
            access: Read,
            description: "Grants permission to retrieve the credentials of a connection",
            resources: ["connection"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/eventbridge/latest/userguide/eb-use-identity-based.html",
        },
        StartReplay {
            access: Write,
            description: "Grants permission to start a replay of an archive",
            resources: ["archive"],
            conditions: [],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add a tag to an Amazon EventBridge resource",
            resources: ["eventBus", "rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        TestEventPattern {
            access: Read,
            description: "Grants permission to test whether an event pattern matches the provided event",
            resources: [],
            conditions: [],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove a tag from an Amazon EventBridge resource",
            resources: ["eventBus", "rule", "ruleOnCustomEventBus"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateApiDestination {
            access: Write,
            description: "Grants permission to update an api destination",
            resources: ["apiDestination"],
            conditions: [],
        },
        UpdateArchive {
            access: Write,
            description: "Grants permission to update an archive",
            resources: ["archive"],
            conditions: [],
        },
        UpdateConnection {
            access: Write,
            description: "Grants permission to update a connection",
            resources: ["connection"],
            conditions: [],
        },
        UpdateEndpoint {
            access: Write,
            description: "Grants permission to update a global endpoint",
            resources: ["endpoint"],
            conditions: [],
        },
        UpdateEventBus {
            access: Write,
            description: "Grants permission to update an event bus",
            resources: ["eventBus"],
            conditions: [],
        },
    },
    resources: {
        event_source => "eventSource": "arn:{partition}:events:{region}::event-source/{eventSourceName}",
        event_bus => "eventBus": "arn:{partition}:events:{region}:{account}:event-bus/{eventBusName}",
        rule => "rule": "arn:{partition}:events:{region}:{account}:rule/{ruleName}",
        rule_on_custom_event_bus => "ruleOnCustomEventBus": "arn:{partition}:events:{region}:{account}:rule/{eventBusName}/{ruleName}",
        archive => "archive": "arn:{partition}:events:{region}:{account}:archive/{archiveName}",
        replay => "replay": "arn:{partition}:events:{region}:{account}:replay/{replayName}",
        connection => "connection": "arn:{partition}:events:{region}:{account}:connection/{connectionName}",
        api_destination => "apiDestination": "arn:{partition}:events:{region}:{account}:api-destination/{apiDestinationName}",
        endpoint => "endpoint": "arn:{partition}:events:{region}:{account}:endpoint/{endpointName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{event_source, rule, rule_on_custom_event_bus, Action},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_rules() {
        let options = ArnOptions::new().region("us-east-1").account("123456789012").with("ruleName", "nightly");
        assert_eq!(rule(&options), "arn:*:events:us-east-1:123456789012:rule/nightly");
        assert_eq!(rule_on_custom_event_bus(&options), "arn:*:events:us-east-1:123456789012:rule/*/nightly");
    }

    #[test_log::test]
    fn test_event_source_has_no_account() {
        let options = ArnOptions::new().account("123456789012").with("eventSourceName", "aws.partner/example.com/1");
        assert_eq!(event_source(&options), "arn:*:events:*::event-source/aws.partner/example.com/1");
    }

    #[test_log::test]
    fn test_put_events() {
        let definition = Action::PutEvents.definition().unwrap();
        assert_eq!(definition.resource_types(), &["eventBus"]);
        assert!(definition.condition_keys().contains(&"events:source"));
    }
}
