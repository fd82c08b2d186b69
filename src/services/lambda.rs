//! AWS Lambda.
//!
//! Function, alias and version ARNs share the `function:` resource prefix. An unset `version` or `alias` therefore
//! matches every qualifier of the function.

service_catalog! {
    prefix: "lambda",
    name: "AWS Lambda",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awslambda.html",
    api_docs: "https://docs.aws.amazon.com/lambda/latest/dg/API_",
    actions: {
        AddLayerVersionPermission {
            access: PermissionsManagement,
            description: "Grants permission to add permissions to the resource-based policy of a version of an AWS Lambda layer",
            resources: ["layerVersion"],
            conditions: [],
        },
        AddPermission {
            access: PermissionsManagement,
            description: "Grants permission to give an AWS service or another account permission to use an AWS Lambda function",
            resources: ["function"],
            conditions: ["lambda:Principal", "lambda:FunctionUrlAuthType"],
        },
        CreateAlias {
            access: Write,
            description: "Grants permission to create an alias for a Lambda function version",
            resources: ["function"],
            conditions: [],
        },
        CreateCodeSigningConfig {
            access: Write,
            description: "Grants permission to create an AWS Lambda code signing config",
            resources: [],
            conditions: [],
        },
        CreateEventSourceMapping {
            access: Write,
            description: "Grants permission to create a mapping between an event source and an AWS Lambda function",
            resources: [],
            conditions: ["lambda:FunctionArn"],
        },
        CreateFunction {
            access: Write,
            description: "Grants permission to create an AWS Lambda function",
            resources: ["function"],
            conditions: [
                "lambda:Layer",
                "lambda:VpcIds",
                "lambda:SubnetIds",
                "lambda:SecurityGroupIds",
                "lambda:CodeSigningConfigArn",
            ],
        },
        CreateFunctionUrlConfig {
            access: Write,
            description: "Grants permission to create a function url configuration for a Lambda function",
            resources: ["function"],
            conditions: ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"],
        },
        DeleteAlias {
            access: Write,
            description: "Grants permission to delete an AWS Lambda function alias",
            resources: ["function"],
            conditions: [],
        },
        DeleteCodeSigningConfig {
            access: Write,
            description: "Grants permission to delete an AWS Lambda code signing config",
            resources: ["codeSigningConfig"],
            conditions: [],
        },
        DeleteEventSourceMapping {
            access: Write,
            description: "Grants permission to delete an AWS Lambda event source mapping",
            resources: ["eventSourceMapping"],
            conditions: ["lambda:FunctionArn"],
        },
        DeleteFunction {
            access: Write,
            description: "Grants permission to delete an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        DeleteFunctionCodeSigningConfig {
            access: Write,
            description: "Grants permission to detach a code signing config from an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        DeleteFunctionConcurrency {
            access: Write,
            description: "Grants permission to remove a concurrent execution limit from an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        DeleteFunctionEventInvokeConfig {
            access: Write,
            description: "Grants permission to delete the configuration for asynchronous invocation for an AWS Lambda function, version, or alias",
            resources: ["function"],
            conditions: [],
        },
        DeleteFunctionUrlConfig {
            access: Write,
            description: "Grants permission to delete function url configuration for a Lambda function",
            resources: ["function"],
            conditions: ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"],
        },
        DeleteLayerVersion {
            access: Write,
            description: "Grants permission to delete a version of an AWS Lambda layer",
            resources: ["layerVersion"],
            conditions: [],
        },
        DeleteProvisionedConcurrencyConfig {
            access: Write,
            description: "Grants permission to delete the provisioned concurrency configuration for an AWS Lambda function",
            resources: ["function", "functionAlias", "functionVersion"],
            conditions: [],
        },
        DisableReplication {
            access: PermissionsManagement,
            description: "Grants permission to disable replication for a Lambda@Edge function",
            resources: ["function"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
        },
        EnableReplication {
            access: PermissionsManagement,
            description: "Grants permission to enable replication for a Lambda@Edge function",
            resources: ["function"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
        },
        GetAccountSettings {
            access: Read,
            description: "Grants permission to view details about an account's limits and usage in an AWS Region",
            resources: [],
            conditions: [],
        },
        GetAlias {
            access: Read,
            description: "Grants permission to view details about an AWS Lambda function alias",
            resources: ["function"],
            conditions: [],
        },
        GetCodeSigningConfig {
            access: Read,
            description: "Grants permission to view details about an AWS Lambda code signing config",
            resources: ["codeSigningConfig"],
            conditions: [],
        },
        GetEventSourceMapping {
            access: Read,
            description: "Grants permission to view details about an AWS Lambda event source mapping",
            resources: ["eventSourceMapping"],
            conditions: ["lambda:FunctionArn"],
        },
        GetFunction {
            access: Read,
            description: "Grants permission to view details about an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionCodeSigningConfig {
            access: Read,
            description: "Grants permission to view the code signing config arn attached to an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionConcurrency {
            access: Read,
            description: "Grants permission to view details about the reserved concurrency configuration for a function",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionConfiguration {
            access: Read,
            description: "Grants permission to view details about the version-specific settings of an AWS Lambda function or version",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionEventInvokeConfig {
            access: Read,
            description: "Grants permission to view the configuration for asynchronous invocation for a function, version, or alias",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionRecursionConfig {
            access: Read,
            description: "Grants permission to view details about a function's recursive loop detection configuration",
            resources: ["function"],
            conditions: [],
        },
        GetFunctionUrlConfig {
            access: Read,
            description: "Grants permission to read function url configuration for a Lambda function",
            resources: ["function"],
            conditions: ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"],
        },
        GetLayerVersion {
            access: Read,
            description: "Grants permission to view details about a version of an AWS Lambda layer. Note this action also supports GetLayerVersionByArn API",
            resources: ["layerVersion"],
            conditions: [],
        },
        GetLayerVersionPolicy {
            access: Read,
            description: "Grants permission to view the resource-based policy for a version of an AWS Lambda layer",
            resources: ["layerVersion"],
            conditions: [],
        },
        GetPolicy {
            access: Read,
            description: "Grants permission to view the resource-based policy for an AWS Lambda function, version, or alias",
            resources: ["function"],
            conditions: [],
        },
        GetProvisionedConcurrencyConfig {
            access: Read,
            description: "Grants permission to view the provisioned concurrency configuration for an AWS Lambda function's alias or version",
            resources: ["function", "functionAlias", "functionVersion"],
            conditions: [],
        },
        GetRuntimeManagementConfig {
            access: Read,
            description: "Grants permission to view the runtime management configuration of an AWS Lambda function",
            resources: ["functionVersion"],
            conditions: [],
        },
        InvokeAsync {
            access: Write,
            description: "Grants permission to invoke a function asynchronously (Deprecated)",
            resources: ["function"],
            conditions: [],
            docs: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
        },
        InvokeFunction {
            access: Write,
            description: "Grants permission to invoke an AWS Lambda function",
            resources: ["function"],
            conditions: ["lambda:EventSourceToken"],
            docs: "https://docs.aws.amazon.com/lambda/latest/dg/API_Invoke.html",
        },
        InvokeFunctionUrl {
            access: Write,
            description: "Grants permission to invoke an AWS Lambda function through url",
            resources: ["function"],
            conditions: ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"],
            docs: "https://docs.aws.amazon.com/lambda/latest/dg/lambda-api-permissions-ref.html",
        },
        ListAliases {
            access: List,
            description: "Grants permission to retrieve a list of aliases for an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        ListCodeSigningConfigs {
            access: List,
            description: "Grants permission to retrieve a list of AWS Lambda code signing configs",
            resources: [],
            conditions: [],
        },
        ListEventSourceMappings {
            access: List,
            description: "Grants permission to retrieve a list of AWS Lambda event source mappings",
            resources: [],
            conditions: [],
        },
        ListFunctionEventInvokeConfigs {
            access: List,
            description: "Grants permission to retrieve a list of configurations for asynchronous invocation for a function",
            resources: ["function"],
            conditions: [],
        },
        ListFunctionUrlConfigs {
            access: List,
            description: "Grants permission to read function url configurations for a function",
            resources: ["function"],
            conditions: [],
        },
        ListFunctions {
            access: List,
            description: "Grants permission to retrieve a list of AWS Lambda functions, with the version-specific configuration of each function",
            resources: [],
            conditions: [],
        },
        ListFunctionsByCodeSigningConfig {
            access: List,
            description: "Grants permission to retrieve a list of AWS Lambda functions by the code signing config assigned",
            resources: ["codeSigningConfig"],
            conditions: [],
        },
        ListLayerVersions {
            access: List,
            description: "Grants permission to retrieve a list of versions of an AWS Lambda layer",
            resources: [],
            conditions: [],
        },
        ListLayers {
            access: List,
            description: "Grants permission to retrieve a list of AWS Lambda layers, with details about the latest version of each layer",
            resources: [],
            conditions: [],
        },
        ListProvisionedConcurrencyConfigs {
            access: List,
            description: "Grants permission to retrieve a list of provisioned concurrency configurations for an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        ListTags {
            access: Read,
            description: "Grants permission to retrieve a list of tags for an AWS Lambda function, event source mapping or code signing configuration resource",
            resources: ["codeSigningConfig", "eventSourceMapping", "function"],
            conditions: [],
        },
        ListVersionsByFunction {
            access: List,
            description: "Grants permission to retrieve a list of versions for an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        PublishLayerVersion {
            access: Write,
            description: "Grants permission to create an AWS Lambda layer",
            resources: ["layer"],
            conditions: [],
        },
        PublishVersion {
            access: Write,
            description: "Grants permission to create an AWS Lambda function version",
            resources: ["function"],
            conditions: [],
        },
        PutFunctionCodeSigningConfig {
            access: Write,
            description: "Grants permission to attach a code signing config to an AWS Lambda function",
            resources: ["function"],
            conditions: ["lambda:CodeSigningConfigArn"],
        },
        PutFunctionConcurrency {
            access: Write,
            description: "Grants permission to modify the reserved concurrency configuration for a function",
            resources: ["function"],
            conditions: [],
        },
        PutFunctionEventInvokeConfig {
            access: Write,
            description: "Grants permission to configure options for asynchronous invocation on a function, version, or alias",
            resources: ["function"],
            conditions: [],
        },
        PutFunctionRecursionConfig {
            access: Write,
            description: "Grants permission to update a function's recursive loop detection configuration",
            resources: ["function"],
            conditions: [],
        },
        PutProvisionedConcurrencyConfig {
            access: Write,
            description: "Grants permission to configure provisioned concurrency for an AWS Lambda function's alias or version",
            resources: ["functionAlias", "functionVersion"],
            conditions: [],
        },
        PutRuntimeManagementConfig {
            access: Write,
            description: "Grants permission to update the runtime management configuration of an AWS Lambda function",
            resources: ["functionVersion"],
            conditions: [],
        },
        RemoveLayerVersionPermission {
            access: PermissionsManagement,
            description: "Grants permission to remove a statement from the permissions policy for a version of an AWS Lambda layer",
            resources: ["layerVersion"],
            conditions: [],
        },
        RemovePermission {
            access: PermissionsManagement,
            description: "Grants permission to revoke function-use permission from an AWS service or another account",
            resources: ["function"],
            conditions: ["lambda:Principal", "lambda:FunctionUrlAuthType"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to add tags to an AWS Lambda function, event source mapping or code signing configuration resource",
            resources: ["codeSigningConfig", "eventSourceMapping", "function"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to remove tags from an AWS Lambda function, event source mapping or code signing configuration resource",
            resources: ["codeSigningConfig", "eventSourceMapping", "function"],
            conditions: ["aws:ResourceTag/${TagKey}", "aws:TagKeys"],
        },
        UpdateAlias {
            access: Write,
            description: "Grants permission to update the configuration of an AWS Lambda function's alias",
            resources: ["function"],
            conditions: [],
        },
        UpdateCodeSigningConfig {
            access: Write,
            description: "Grants permission to update an AWS Lambda code signing config",
            resources: ["codeSigningConfig"],
            conditions: [],
        },
        UpdateEventSourceMapping {
            access: Write,
            description: "Grants permission to update the configuration of an AWS Lambda event source mapping",
            resources: ["eventSourceMapping"],
            conditions: ["lambda:FunctionArn"],
        },
        UpdateFunctionCode {
            access: Write,
            description: "Grants permission to update the code of an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        UpdateFunctionCodeSigningConfig {
            access: Write,
            description: "Grants permission to update the code signing config of an AWS Lambda function",
            resources: ["function"],
            conditions: [],
        },
        UpdateFunctionConfiguration {
            access: Write,
            description: "Grants permission to modify the version-specific settings of an AWS Lambda function",
            resources: ["function"],
            conditions: ["lambda:Layer", "lambda:VpcIds", "lambda:SubnetIds", "lambda:SecurityGroupIds"],
        },
        UpdateFunctionEventInvokeConfig {
            access: Write,
            description: "Grants permission to modify the configuration for asynchronous invocation for a function, version, or alias",
            resources: ["function"],
            conditions: [],
        },
        UpdateFunctionUrlConfig {
            access: Write,
            description: "Grants permission to update a function url configuration for a Lambda function",
            resources: ["function"],
            conditions: ["lambda:FunctionUrlAuthType", "lambda:FunctionArn"],
        },
    },
    resources: {
        code_signing_config => "codeSigningConfig": "arn:{partition}:lambda:{region}:{account}:code-signing-config:{codeSigningConfigId}",
        event_source_mapping => "eventSourceMapping": "arn:{partition}:lambda:{region}:{account}:event-source-mapping:{uuid}",
        function => "function": "arn:{partition}:lambda:{region}:{account}:function:{functionName}",
        function_alias => "functionAlias": "arn:{partition}:lambda:{region}:{account}:function:{functionName}:{alias}",
        function_version => "functionVersion": "arn:{partition}:lambda:{region}:{account}:function:{functionName}:{version}",
        layer => "layer": "arn:{partition}:lambda:{region}:{account}:layer:{layerName}",
        layer_version => "layerVersion": "arn:{partition}:lambda:{region}:{account}:layer:{layerName}:{layerVersion}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{function, function_alias, function_version, layer_version, Action, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_function_qualifiers() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-west-2")
            .account("123456789012")
            .with("functionName", "my-function");
        assert_eq!(function(&options), "arn:aws:lambda:us-west-2:123456789012:function:my-function");
        assert_eq!(function_version(&options), "arn:aws:lambda:us-west-2:123456789012:function:my-function:*");
        assert_eq!(
            function_alias(&options.with("alias", "live")),
            "arn:aws:lambda:us-west-2:123456789012:function:my-function:live"
        );
    }

    #[test_log::test]
    fn test_resource_arn_components() {
        let template = RESOURCES.iter().find(|t| t.resource_type() == "layerVersion").unwrap();
        let options = ArnOptions::new().with("layerName", "deps").with("layerVersion", "3");
        let arn = template.resource_arn(&options);
        assert_eq!(arn.resource(), "layer:deps:3");
        assert_eq!(arn.to_string(), layer_version(&options));
        assert!(arn.has_wildcards());
    }

    #[test_log::test]
    fn test_invoke_function_docs() {
        let definition = Action::InvokeFunction.definition().unwrap();
        assert_eq!(definition.documentation(), "https://docs.aws.amazon.com/lambda/latest/dg/API_Invoke.html");
        assert_eq!(definition.condition_keys(), &["lambda:EventSourceToken"]);
    }
}
