//! Amazon Elastic Kubernetes Service.
//!
//! Access policies are AWS owned: their ARNs have no region and use the literal account `aws`.

service_catalog! {
    prefix: "eks",
    name: "Amazon Elastic Kubernetes Service",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonelastickubernetesservice.html",
    api_docs: "https://docs.aws.amazon.com/eks/latest/APIReference/API_",
    actions: {
        AccessKubernetesApi {
            access: Read,
            description: "Grants permission to view Kubernetes objects via AWS EKS console",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/eks/latest/userguide/security-iam.html",
        },
        AssociateAccessPolicy {
            access: Write,
            description: "Grants permission to associate an access policy to an access entry",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}", "eks:policyArn", "eks:accessScope", "eks:namespaces"],
        },
        AssociateEncryptionConfig {
            access: Write,
            description: "Grants permission to associate encryption configuration to a cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        AssociateIdentityProviderConfig {
            access: Write,
            description: "Grants permission to associate an identity provider configuration to a cluster",
            resources: ["cluster"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "eks:clientId",
                "eks:issuerUrl",
            ],
        },
        CreateAccessEntry {
            access: Write,
            description: "Grants permission to create an access entry",
            resources: ["cluster"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "aws:ResourceTag/${TagKey}",
                "eks:principalArn",
                "eks:kubernetesGroups",
                "eks:username",
                "eks:accessEntryType",
            ],
        },
        CreateAddon {
            access: Write,
            description: "Grants permission to create an Amazon EKS add-on",
            resources: ["cluster"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        CreateCluster {
            access: Write,
            description: "Grants permission to create an Amazon EKS cluster",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "eks:bootstrapClusterCreatorAdminPermissions"],
        },
        CreateEksAnywhereSubscription {
            access: Write,
            description: "Grants permission to create an EKS Anywhere subscription",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateFargateProfile {
            access: Write,
            description: "Grants permission to create an AWS Fargate profile",
            resources: ["cluster"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        CreateNodegroup {
            access: Write,
            description: "Grants permission to create an Amazon EKS Nodegroup",
            resources: ["cluster"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        CreatePodIdentityAssociation {
            access: Write,
            description: "Grants permission to create an EKS Pod Identity association",
            resources: ["cluster"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        DeleteAccessEntry {
            access: Write,
            description: "Grants permission to delete an access entry",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteAddon {
            access: Write,
            description: "Grants permission to delete an Amazon EKS add-on",
            resources: ["addon"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteCluster {
            access: Write,
            description: "Grants permission to delete an Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteEksAnywhereSubscription {
            access: Write,
            description: "Grants permission to delete an EKS Anywhere subscription",
            resources: ["eksAnywhereSubscription"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteFargateProfile {
            access: Write,
            description: "Grants permission to delete an AWS Fargate profile",
            resources: ["fargateprofile"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteNodegroup {
            access: Write,
            description: "Grants permission to delete an Amazon EKS Nodegroup",
            resources: ["nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeletePodIdentityAssociation {
            access: Write,
            description: "Grants permission to delete an EKS Pod Identity association",
            resources: ["podIdentityAssociation"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeregisterCluster {
            access: Write,
            description: "Grants permission to deregister an External cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeAccessEntry {
            access: Read,
            description: "Grants permission to describe an access entry",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeAddon {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an Amazon EKS add-on",
            resources: ["addon"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeAddonConfiguration {
            access: Read,
            description: "Grants permission to list configuration options about an Amazon EKS add-on",
            resources: [],
            conditions: [],
        },
        DescribeAddonVersions {
            access: List,
            description: "Grants permission to retrieve descriptive version information about the add-ons that Amazon EKS Add-ons supports",
            resources: [],
            conditions: [],
        },
        DescribeCluster {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeEksAnywhereSubscription {
            access: Read,
            description: "Grants permission to describe an EKS Anywhere subscription",
            resources: ["eksAnywhereSubscription"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeFargateProfile {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an AWS Fargate profile associated with a cluster",
            resources: ["fargateprofile"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeIdentityProviderConfig {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an Idp config associated with a cluster",
            resources: ["identityProviderConfig"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeInsight {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an insight",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeNodegroup {
            access: Read,
            description: "Grants permission to retrieve descriptive information about an Amazon EKS nodegroup",
            resources: ["nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribePodIdentityAssociation {
            access: Read,
            description: "Grants permission to describe an EKS Pod Identity association",
            resources: ["podIdentityAssociation"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeUpdate {
            access: Read,
            description: "Grants permission to retrieve a given update for a given Amazon EKS cluster/nodegroup/add-on (in the specified or default region)",
            resources: ["addon", "cluster", "nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DisassociateAccessPolicy {
            access: Write,
            description: "Grants permission to disassociate an access policy from an access entry",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}", "eks:policyArn"],
        },
        DisassociateIdentityProviderConfig {
            access: Write,
            description: "Grants permission to delete an asssociated Idp config",
            resources: ["identityProviderConfig"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListAccessEntries {
            access: List,
            description: "Grants permission to list access entries",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListAccessPolicies {
            access: List,
            description: "Grants permission to list access policies",
            resources: [],
            conditions: [],
        },
        ListAddons {
            access: List,
            description: "Grants permission to list the Amazon EKS add-ons in your Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListAssociatedAccessPolicies {
            access: List,
            description: "Grants permission to list associated access policies",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListClusters {
            access: List,
            description: "Grants permission to list the Amazon EKS clusters in your AWS account (in the specified or default region)",
            resources: [],
            conditions: [],
        },
        ListEksAnywhereSubscriptions {
            access: List,
            description: "Grants permission to list EKS Anywhere subscriptions",
            resources: [],
            conditions: [],
        },
        ListFargateProfiles {
            access: List,
            description: "Grants permission to list the AWS Fargate profiles in your Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListIdentityProviderConfigs {
            access: List,
            description: "Grants permission to list the Idp configs in your Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListInsights {
            access: List,
            description: "Grants permission to list all insights associated with a cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListNodegroups {
            access: List,
            description: "Grants permission to list the Amazon EKS nodegroups in your Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListPodIdentityAssociations {
            access: List,
            description: "Grants permission to list EKS Pod Identity associations",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list tags for the specified resource",
            resources: [
                "accessEntry",
                "addon",
                "cluster",
                "eksAnywhereSubscription",
                "fargateprofile",
                "identityProviderConfig",
                "nodegroup",
                "podIdentityAssociation",
            ],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListUpdates {
            access: List,
            description: "Grants permission to list the updates for a given Amazon EKS cluster/nodegroup/add-on (in the specified or default region)",
            resources: ["addon", "cluster", "nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        RegisterCluster {
            access: Write,
            description: "Grants permission to register an External cluster",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to tag the specified resource",
            resources: [
                "accessEntry",
                "addon",
                "cluster",
                "eksAnywhereSubscription",
                "fargateprofile",
                "identityProviderConfig",
                "nodegroup",
                "podIdentityAssociation",
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to untag the specified resource",
            resources: [
                "accessEntry",
                "addon",
                "cluster",
                "eksAnywhereSubscription",
                "fargateprofile",
                "identityProviderConfig",
                "nodegroup",
                "podIdentityAssociation",
            ],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateAccessEntry {
            access: Write,
            description: "Grants permission to update an access entry",
            resources: ["accessEntry"],
            conditions: ["aws:ResourceTag/${TagKey}", "eks:principalArn", "eks:kubernetesGroups", "eks:username"],
        },
        UpdateAddon {
            access: Write,
            description: "Grants permission to update Amazon EKS add-on configurations, such as the VPC-CNI version",
            resources: ["addon"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateClusterConfig {
            access: Write,
            description: "Grants permission to update Amazon EKS cluster configurations (eg: API server endpoint access)",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateClusterVersion {
            access: Write,
            description: "Grants permission to update the Kubernetes version of an Amazon EKS cluster",
            resources: ["cluster"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateEksAnywhereSubscription {
            access: Write,
            description: "Grants permission to update an EKS Anywhere subscription",
            resources: ["eksAnywhereSubscription"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateNodegroupConfig {
            access: Write,
            description: "Grants permission to update Amazon EKS nodegroup configurations (eg: min/max/desired capacity or labels)",
            resources: ["nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateNodegroupVersion {
            access: Write,
            description: "Grants permission to update the Kubernetes version of an Amazon EKS nodegroup",
            resources: ["nodegroup"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePodIdentityAssociation {
            access: Write,
            description: "Grants permission to update an EKS Pod Identity association",
            resources: ["podIdentityAssociation"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
    },
    resources: {
        cluster => "cluster": "arn:{partition}:eks:{region}:{account}:cluster/{clusterName}",
        nodegroup => "nodegroup": "arn:{partition}:eks:{region}:{account}:nodegroup/{clusterName}/{nodegroupName}/{uuid}",
        addon => "addon": "arn:{partition}:eks:{region}:{account}:addon/{clusterName}/{addonName}/{uuid}",
        fargateprofile => "fargateprofile": "arn:{partition}:eks:{region}:{account}:fargateprofile/{clusterName}/{fargateProfileName}/{uuid}",
        identity_provider_config => "identityProviderConfig": "arn:{partition}:eks:{region}:{account}:identityproviderconfig/{clusterName}/{identityProviderType}/{identityProviderConfigName}/{uuid}",
        access_entry => "accessEntry": "arn:{partition}:eks:{region}:{account}:access-entry/{clusterName}/{iamIdentityType}/{iamIdentityAccountID}/{iamIdentityName}/{uuid}",
        pod_identity_association => "podIdentityAssociation": "arn:{partition}:eks:{region}:{account}:podidentityassociation/{clusterName}/{podIdentityAssociationId}",
        eks_anywhere_subscription => "eksAnywhereSubscription": "arn:{partition}:eks:{region}:{account}:eks-anywhere-subscription/{eksAnywhereSubscriptionId}",
        access_policy => "accessPolicy": "arn:{partition}:eks::aws:cluster-access-policy/{accessPolicyName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{access_policy, nodegroup, RESOURCES},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_nodegroup() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-west-2")
            .account("123456789012")
            .with("clusterName", "prod")
            .with("nodegroupName", "workers");
        assert_eq!(nodegroup(&options), "arn:aws:eks:us-west-2:123456789012:nodegroup/prod/workers/*");
    }

    #[test_log::test]
    fn test_access_policy_is_global() {
        let options = ArnOptions::new()
            .partition("aws")
            .region("us-west-2")
            .account("123456789012")
            .with("accessPolicyName", "AmazonEKSClusterAdminPolicy");
        assert_eq!(access_policy(&options), "arn:aws:eks::aws:cluster-access-policy/AmazonEKSClusterAdminPolicy");

        let template = RESOURCES.iter().find(|t| t.resource_type() == "accessPolicy").unwrap();
        let arn = template.resource_arn(&options);
        assert_eq!(arn.region(), "");
        assert_eq!(arn.account_id(), "aws");
        assert_eq!(template.fields(), vec!["partition", "accessPolicyName"]);
    }
}
