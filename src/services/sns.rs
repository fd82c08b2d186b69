service_catalog! {
    prefix: "sns",
    name: "Amazon SNS",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonsns.html",
    api_docs: "https://docs.aws.amazon.com/sns/latest/api/API_",
    actions: {
        AddPermission {
            access: PermissionsManagement,
            description: "Grants permission to add a statement to a topic's access control policy, granting access for the specified AWS accounts to the specified actions",
            resources: ["topic"],
            conditions: [],
        },
        CheckIfPhoneNumberIsOptedOut {
            access: Read,
            description: "Grants permission to accept a phone number and indicate whether the phone holder has opted out of receiving SMS messages from your account",
            resources: [],
            conditions: [],
        },
        ConfirmSubscription {
            access: Write,
            description: "Grants permission to verify an endpoint owner's intent to receive messages by validating the token sent to the endpoint by an earlier Subscribe action",
            resources: ["topic"],
            conditions: [],
        },
        CreatePlatformApplication {
            access: Write,
            description: "Grants permission to create a platform application object for one of the supported push notification services, such as APNS and GCM, to which devices and mobile apps may register",
            resources: [],
            conditions: [],
        },
        CreatePlatformEndpoint {
            access: Write,
            description: "Grants permission to create an endpoint for a device and mobile app on one of the supported push notification services, such as GCM and APNS",
            resources: [],
            conditions: [],
        },
        CreateSMSSandboxPhoneNumber {
            access: Write,
            description: "Grants permission to add a destination phone number and send a one-time password (OTP) to that phone number for an AWS account",
            resources: [],
            conditions: [],
        },
        CreateTopic {
            access: Write,
            description: "Grants permission to create a topic to which notifications can be published",
            resources: ["topic"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        DeleteEndpoint {
            access: Write,
            description: "Grants permission to delete the endpoint for a device and mobile app from Amazon SNS",
            resources: [],
            conditions: [],
        },
        DeletePlatformApplication {
            access: Write,
            description: "Grants permission to delete a platform application object for one of the supported push notification services, such as APNS and GCM",
            resources: [],
            conditions: [],
        },
        DeleteSMSSandboxPhoneNumber {
            access: Write,
            description: "Grants permission to delete an AWS account's verified or pending phone number",
            resources: [],
            conditions: [],
        },
        DeleteTopic {
            access: Write,
            description: "Grants permission to delete a topic and all its subscriptions",
            resources: ["topic"],
            conditions: [],
        },
        GetDataProtectionPolicy {
            access: Read,
            description: "Grants permission to retrieve the specified topic's data protection policy",
            resources: ["topic"],
            conditions: [],
        },
        GetEndpointAttributes {
            access: Read,
            description: "Grants permission to retrieve the endpoint attributes for a device on one of the supported push notification services, such as GCM and APNS",
            resources: [],
            conditions: [],
        },
        GetPlatformApplicationAttributes {
            access: Read,
            description: "Grants permission to retrieve the attributes of the platform application object for the supported push notification services, such as APNS and GCM",
            resources: [],
            conditions: [],
        },
        GetSMSAttributes {
            access: Read,
            description: "Grants permission to return the settings for sending SMS messages from your account",
            resources: [],
            conditions: [],
        },
        GetSMSSandboxAccountStatus {
            access: Read,
            description: "Grants permission to retrieve the sandbox status for the calling account in the target region",
            resources: [],
            conditions: [],
        },
        GetSubscriptionAttributes {
            access: Read,
            description: "Grants permission to return all of the properties of a subscription",
            resources: [],
            conditions: [],
        },
        GetTopicAttributes {
            access: Read,
            description: "Grants permission to return all of the properties of a topic. Topic properties returned might differ based on the authorization of the user",
            resources: ["topic"],
            conditions: [],
        },
        ListEndpointsByPlatformApplication {
            access: List,
            description: "Grants permission to list the endpoints and endpoint attributes for devices in a supported push notification service, such as GCM and APNS",
            resources: [],
            conditions: [],
        },
        ListOriginationNumbers {
            access: List,
            description: "Grants permission to list all origination numbers, and their metadata",
            resources: [],
            conditions: [],
        },
        ListPhoneNumbersOptedOut {
            access: List,
            description: "Grants permission to return a list of phone numbers that are opted out, meaning you cannot send SMS messages to them",
            resources: [],
            conditions: [],
        },
        ListPlatformApplications {
            access: List,
            description: "Grants permission to list the platform application objects for the supported push notification services, such as APNS and GCM",
            resources: [],
            conditions: [],
        },
        ListSMSSandboxPhoneNumbers {
            access: List,
            description: "Grants permission to list the calling account's current pending and verified destination phone numbers",
            resources: [],
            conditions: [],
        },
        ListSubscriptions {
            access: List,
            description: "Grants permission to return a list of the requester's subscriptions",
            resources: [],
            conditions: [],
        },
        ListSubscriptionsByTopic {
            access: List,
            description: "Grants permission to return a list of the subscriptions to a specific topic",
            resources: ["topic"],
            conditions: [],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list all tags added to the specified Amazon SNS topic",
            resources: ["topic"],
            conditions: [],
        },
        ListTopics {
            access: List,
            description: "Grants permission to return a list of the requester's topics",
            resources: [],
            conditions: [],
        },
        OptInPhoneNumber {
            access: Write,
            description: "Grants permission to opt in a phone number that is currently opted out, which enables you to resume sending SMS messages to the number",
            resources: [],
            conditions: [],
        },
        Publish {
            access: Write,
            description: "Grants permission to send a message to all of a topic's subscribed endpoints",
            resources: ["topic"],
            conditions: [],
        },
        PutDataProtectionPolicy {
            access: Write,
            description: "Grants permission to create or update the specified topic's data protection policy",
            resources: ["topic"],
            conditions: [],
        },
        RemovePermission {
            access: PermissionsManagement,
            description: "Grants permission to remove a statement from a topic's access control policy",
            resources: ["topic"],
            conditions: [],
        },
        SetEndpointAttributes {
            access: Write,
            description: "Grants permission to set the attributes for an endpoint for a device on one of the supported push notification services, such as GCM and APNS",
            resources: [],
            conditions: [],
        },
        SetPlatformApplicationAttributes {
            access: Write,
            description: "Grants permission to set the attributes of the platform application object for the supported push notification services, such as APNS and GCM",
            resources: [],
            conditions: [],
        },
        SetSMSAttributes {
            access: Write,
            description: "Grants permission to set the default settings for sending SMS messages and receiving daily SMS usage reports",
            resources: [],
            conditions: [],
        },
        SetSubscriptionAttributes {
            access: Write,
            description: "Grants permission to allow a subscription owner to set an attribute of the topic to a new value",
            resources: [],
            conditions: [],
        },
        SetTopicAttributes {
            access: PermissionsManagement,
            description: "Grants permission to allow a topic owner to set an attribute of the topic to a new value",
            resources: ["topic"],
            conditions: [],
        },
        Subscribe {
            access: Write,
            description: "Grants permission to prepare to subscribe an endpoint by sending the endpoint a confirmation message",
            resources: ["topic"],
            conditions: ["sns:Endpoint", "sns:Protocol"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add tags to the specified Amazon SNS topic",
            resources: ["topic"],
            conditions: ["aws:TagKeys", "aws:RequestTag/${TagKey}"],
        },
        Unsubscribe {
            access: Write,
            description: "Grants permission to delete a subscription",
            resources: [],
            conditions: [],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove tags from the specified Amazon SNS topic",
            resources: ["topic"],
            conditions: ["aws:TagKeys"],
        },
        VerifySMSSandboxPhoneNumber {
            access: Write,
            description: "Grants permission to verify a destination phone number with a one-time password (OTP) for an AWS account",
            resources: [],
            conditions: [],
        },
    },
    resources: {
        topic => "topic": "arn:{partition}:sns:{region}:{account}:{topicName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{topic, Action},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_topic() {
        assert_eq!(topic(&ArnOptions::new()), "arn:*:sns:*:*:*");
        assert_eq!(
            topic(&ArnOptions::new().region("us-east-2").account("123456789012").with("topicName", "alerts.fifo")),
            "arn:*:sns:us-east-2:123456789012:alerts.fifo"
        );
    }

    #[test_log::test]
    fn test_acronym_actions() {
        assert_eq!(Action::GetSMSAttributes.as_str(), "sns:GetSMSAttributes");
        assert_eq!(Action::from_str("sns:Publish").unwrap(), Action::Publish);
        assert!(Action::from_str("sqs:Publish").is_err());
    }
}
