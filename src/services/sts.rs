//! AWS Security Token Service.
//!
//! STS authorizes against IAM resources: role and user ARNs belong to the global `iam` service and have no region.

service_catalog! {
    prefix: "sts",
    name: "AWS Security Token Service",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awssecuritytokenservice.html",
    api_docs: "https://docs.aws.amazon.com/STS/latest/APIReference/API_",
    actions: {
        AssumeRole {
            access: Write,
            description: "Grants permission to obtain a set of temporary security credentials that you can use to access AWS resources that you might not normally have access to",
            resources: ["role"],
            conditions: [
                "aws:SourceIdentity",
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "sts:TransitiveTagKeys",
                "sts:ExternalId",
                "sts:RoleSessionName",
                "sts:SourceIdentity",
            ],
        },
        AssumeRoleWithSAML {
            access: Write,
            description: "Grants permission to obtain a set of temporary security credentials for users who have been authenticated via a SAML authentication response",
            resources: ["role"],
            conditions: [
                "saml:namequalifier",
                "saml:sub",
                "saml:sub_type",
                "saml:aud",
                "saml:iss",
                "saml:doc",
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "sts:TransitiveTagKeys",
                "sts:SourceIdentity",
                "sts:RoleSessionName",
            ],
        },
        AssumeRoleWithWebIdentity {
            access: Write,
            description: "Grants permission to obtain a set of temporary security credentials for users who have been authenticated in a mobile or web application with a web identity provider",
            resources: ["role"],
            conditions: [
                "cognito-identity.amazonaws.com:amr",
                "cognito-identity.amazonaws.com:aud",
                "cognito-identity.amazonaws.com:sub",
                "www.amazon.com:app_id",
                "www.amazon.com:user_id",
                "graph.facebook.com:app_id",
                "graph.facebook.com:id",
                "accounts.google.com:aud",
                "accounts.google.com:oaud",
                "accounts.google.com:sub",
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "sts:TransitiveTagKeys",
                "sts:SourceIdentity",
                "sts:RoleSessionName",
            ],
        },
        AssumeRoot {
            access: Write,
            description: "Grants permission to obtain a set of short term credentials that you can use to perform privileged tasks in a member account in your organization",
            resources: [],
            conditions: ["sts:TaskPolicyArn"],
        },
        DecodeAuthorizationMessage {
            access: Write,
            description: "Grants permission to decode additional information about the authorization status of a request from an encoded message returned in response to an AWS request",
            resources: [],
            conditions: [],
        },
        GetAccessKeyInfo {
            access: Read,
            description: "Grants permission to obtain details about the access key id passed as a parameter to the request",
            resources: [],
            conditions: [],
        },
        GetCallerIdentity {
            access: Read,
            description: "Grants permission to obtain details about the IAM identity whose credentials are used to call the API",
            resources: [],
            conditions: [],
        },
        GetFederationToken {
            access: Read,
            description: "Grants permission to obtain a set of temporary security credentials (consisting of an access key ID, a secret access key, and a security token) for a federated user",
            resources: ["user"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        GetServiceBearerToken {
            access: Read,
            description: "Grants permission to obtain a STS bearer token for an AWS root user, IAM role, or an IAM user",
            resources: [],
            conditions: ["sts:AWSServiceName"],
            docs: "https://docs.aws.amazon.com/IAM/latest/UserGuide/id_credentials_temp_control-access.html",
        },
        GetSessionToken {
            access: Read,
            description: "Grants permission to obtain a set of temporary security credentials (consisting of an access key ID, a secret access key, and a security token) for an AWS account or IAM user",
            resources: [],
            conditions: [],
        },
        SetContext {
            access: Tagging,
            description: "Grants permission to set a context key on a STS session",
            resources: ["role"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            docs: "https://docs.aws.amazon.com/IAM/latest/UserGuide/id_credentials_temp_control-access.html",
        },
        SetSourceIdentity {
            access: Write,
            description: "Grants permission to set a source identity on a STS session",
            resources: ["role", "user"],
            conditions: ["sts:SourceIdentity"],
            docs: "https://docs.aws.amazon.com/IAM/latest/UserGuide/id_credentials_temp_control-access.html",
        },
        TagSession {
            access: Tagging,
            description: "Grants permission to add tags to a STS session",
            resources: ["role", "user"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "sts:TransitiveTagKeys"],
            docs: "https://docs.aws.amazon.com/IAM/latest/UserGuide/id_credentials_temp_control-access.html",
        },
    },
    resources: {
        role => "role": "arn:{partition}:iam::{account}:role/{roleNameWithPath}",
        user => "user": "arn:{partition}:iam::{account}:user/{userNameWithPath}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{role, user, Action, ACTIONS, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_iam_resources() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-east-1")
            .account("123456789012")
            .with("roleNameWithPath", "service-role/deployer");
        assert_eq!(role(&options), "arn:aws:iam::123456789012:role/service-role/deployer");
        assert_eq!(user(&options), "arn:aws:iam::123456789012:user/*");

        for template in RESOURCES {
            let arn = template.resource_arn(&options);
            assert_eq!(arn.service(), "iam");
            assert_eq!(arn.region(), "");
        }
    }

    #[test_log::test]
    fn test_assume_role() {
        assert_eq!(ACTIONS[0].action(), "sts:AssumeRole");
        let definition = Action::AssumeRole.definition().unwrap();
        assert_eq!(definition.resource_types(), &["role"]);
        assert!(definition.condition_keys().contains(&"sts:ExternalId"));
        assert!(Action::GetCallerIdentity.definition().unwrap().condition_keys().is_empty());
    }
}
