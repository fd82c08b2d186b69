//! AWS Key Management Service.

service_catalog! {
    prefix: "kms",
    name: "AWS Key Management Service",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awskeymanagementservice.html",
    api_docs: "https://docs.aws.amazon.com/kms/latest/APIReference/API_",
    actions: {
        CancelKeyDeletion {
            access: Write,
            description: "Controls permission to cancel the scheduled deletion of an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ConnectCustomKeyStore {
            access: Write,
            description: "Controls permission to connect or reconnect a custom key store to its associated AWS CloudHSM cluster or external key manager outside of AWS",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        CreateAlias {
            access: Write,
            description: "Controls permission to create an alias for an AWS KMS key. Aliases are optional friendly names that you can associate with KMS keys",
            resources: ["alias", "key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        CreateCustomKeyStore {
            access: Write,
            description: "Controls permission to create a custom key store that is backed by an AWS CloudHSM cluster or an external key manager outside of AWS",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        CreateGrant {
            access: PermissionsManagement,
            description: "Controls permission to add a grant to an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:GrantConstraintType",
                "kms:GranteePrincipal",
                "kms:GrantIsForAWSResource",
                "kms:GrantOperations",
                "kms:RetiringPrincipal",
                "kms:ViaService",
            ],
        },
        CreateKey {
            access: Write,
            description: "Controls permission to create an AWS KMS key that can be used to protect data keys and other sensitive information",
            resources: [],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:TagKeys",
                "kms:BypassPolicyLockoutSafetyCheck",
                "kms:CallerAccount",
                "kms:KeySpec",
                "kms:KeyUsage",
                "kms:KeyOrigin",
                "kms:MultiRegion",
                "kms:MultiRegionKeyType",
                "kms:ViaService",
            ],
        },
        Decrypt {
            access: Write,
            description: "Controls permission to decrypt ciphertext that was encrypted under an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:RecipientAttestation:ImageSha384",
                "kms:ViaService",
            ],
        },
        DeleteAlias {
            access: Write,
            description: "Controls permission to delete an alias. Aliases are optional friendly names that you can associate with AWS KMS keys",
            resources: ["alias", "key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        DeleteCustomKeyStore {
            access: Write,
            description: "Controls permission to delete a custom key store",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        DeleteImportedKeyMaterial {
            access: Write,
            description: "Controls permission to delete cryptographic material that you imported into an AWS KMS key. This action makes the key unusable",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        DeriveSharedSecret {
            access: Write,
            description: "Controls permission to use the specified AWS KMS key to derive shared secrets",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:KeyAgreementAlgorithm",
                "kms:ViaService",
            ],
        },
        DescribeCustomKeyStores {
            access: Read,
            description: "Controls permission to view detailed information about custom key stores in the account and region",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        DescribeKey {
            access: Read,
            description: "Controls permission to view detailed information about an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        DisableKey {
            access: Write,
            description: "Controls permission to disable an AWS KMS key, which prevents it from being used in cryptographic operations",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        DisableKeyRotation {
            access: Write,
            description: "Controls permission to disable automatic rotation of a customer managed AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        DisconnectCustomKeyStore {
            access: Write,
            description: "Controls permission to disconnect the custom key store from its associated AWS CloudHSM cluster or external key manager outside of AWS",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        EnableKey {
            access: Write,
            description: "Controls permission to change the state of an AWS KMS key to enabled. This allows the KMS key to be used in cryptographic operations",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        EnableKeyRotation {
            access: Write,
            description: "Controls permission to enable automatic rotation of the cryptographic material in an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:RotationPeriodInDays",
                "kms:ViaService",
            ],
        },
        Encrypt {
            access: Write,
            description: "Controls permission to use the specified AWS KMS key to encrypt data and data keys",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:ViaService",
            ],
        },
        GenerateDataKey {
            access: Write,
            description: "Controls permission to use the AWS KMS key to generate data keys. You can use the data keys to encrypt data outside of AWS KMS",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:RecipientAttestation:ImageSha384",
                "kms:ViaService",
            ],
        },
        GenerateDataKeyPair {
            access: Write,
            description: "Controls permission to use the AWS KMS key to generate data key pairs",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:DataKeyPairSpec",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:RecipientAttestation:ImageSha384",
                "kms:ViaService",
            ],
        },
        GenerateDataKeyPairWithoutPlaintext {
            access: Write,
            description: "Controls permission to use the AWS KMS key to generate data key pairs. Unlike the GenerateDataKeyPair operation, this operation returns an encrypted private key without a plaintext copy",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:DataKeyPairSpec",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:ViaService",
            ],
        },
        GenerateDataKeyWithoutPlaintext {
            access: Write,
            description: "Controls permission to use the AWS KMS key to generate a data key. Unlike the GenerateDataKey operation, this operation returns an encrypted data key without a plaintext version of the data key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:ViaService",
            ],
        },
        GenerateMac {
            access: Write,
            description: "Controls permission to use the AWS KMS key to generate message authentication codes",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"],
        },
        GenerateRandom {
            access: Write,
            description: "Controls permission to get a cryptographically secure random byte string from AWS KMS",
            resources: [],
            conditions: ["kms:RecipientAttestation:ImageSha384"],
        },
        GetKeyPolicy {
            access: Read,
            description: "Controls permission to view the key policy for the specified AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        GetKeyRotationStatus {
            access: Read,
            description: "Controls permission to determine whether automatic key rotation is enabled on the AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        GetParametersForImport {
            access: Read,
            description: "Controls permission to get data that is required to import cryptographic material into a customer managed key, including a public key and import token",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:ViaService",
                "kms:WrappingAlgorithm",
                "kms:WrappingKeySpec",
            ],
        },
        GetPublicKey {
            access: Read,
            description: "Controls permission to download the public key of an asymmetric AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ImportKeyMaterial {
            access: Write,
            description: "Controls permission to import cryptographic material into an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:ExpirationModel",
                "kms:ValidTo",
                "kms:ViaService",
            ],
        },
        ListAliases {
            access: List,
            description: "Controls permission to view the aliases that are defined in the account. Aliases are optional friendly names that you can associate with AWS KMS keys",
            resources: [],
            conditions: [],
        },
        ListGrants {
            access: List,
            description: "Controls permission to view all grants for an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:GrantIsForAWSResource",
                "kms:ViaService",
            ],
        },
        ListKeyPolicies {
            access: List,
            description: "Controls permission to view the names of key policies for an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ListKeyRotations {
            access: List,
            description: "Controls permission to view the list of completed key rotations for an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ListKeys {
            access: List,
            description: "Controls permission to view the key ID and Amazon Resource Name (ARN) of all AWS KMS keys in the account",
            resources: [],
            conditions: [],
        },
        ListResourceTags {
            access: Read,
            description: "Controls permission to view all tags that are attached to an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ListRetirableGrants {
            access: List,
            description: "Controls permission to view grants in which the specified principal is the retiring principal. Other principals might be able to retire the grant and this principal might be able to retire other grants",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        PutKeyPolicy {
            access: PermissionsManagement,
            description: "Controls permission to replace the key policy for the specified AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:BypassPolicyLockoutSafetyCheck",
                "kms:CallerAccount",
                "kms:ViaService",
            ],
        },
        ReEncryptFrom {
            access: Write,
            description: "Controls permission to decrypt data as part of the process that decrypts and reencrypts the data within AWS KMS",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:ReEncryptOnSameKey",
                "kms:ViaService",
            ],
            docs: "https://docs.aws.amazon.com/kms/latest/APIReference/API_ReEncrypt.html",
        },
        ReEncryptTo {
            access: Write,
            description: "Controls permission to encrypt data as part of the process that decrypts and reencrypts the data within AWS KMS",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:EncryptionAlgorithm",
                "kms:EncryptionContext:${EncryptionContextKey}",
                "kms:EncryptionContextKeys",
                "kms:ReEncryptOnSameKey",
                "kms:ViaService",
            ],
            docs: "https://docs.aws.amazon.com/kms/latest/APIReference/API_ReEncrypt.html",
        },
        ReplicateKey {
            access: Write,
            description: "Controls permission to replicate a multi-Region primary key",
            resources: ["key"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:ResourceTag/${TagKey}",
                "aws:TagKeys",
                "kms:CallerAccount",
                "kms:ReplicaRegion",
                "kms:ViaService",
            ],
        },
        RetireGrant {
            access: PermissionsManagement,
            description: "Controls permission to retire a grant. The RetireGrant operation is typically called by the grant user after they complete the tasks that the grant allowed them to perform",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:GrantConstraintType", "kms:ViaService"],
        },
        RevokeGrant {
            access: PermissionsManagement,
            description: "Controls permission to revoke a grant, which denies permission for all operations that depend on the grant",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:GrantIsForAWSResource",
                "kms:ViaService",
            ],
        },
        RotateKeyOnDemand {
            access: Write,
            description: "Controls permission to invoke on-demand rotation of the cryptographic material in an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        ScheduleKeyDeletion {
            access: Write,
            description: "Controls permission to schedule deletion of an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:ScheduleKeyDeletionPendingWindowInDays",
                "kms:ViaService",
            ],
        },
        Sign {
            access: Write,
            description: "Controls permission to produce a digital signature for a message",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:MessageType",
                "kms:SigningAlgorithm",
                "kms:ViaService",
            ],
        },
        SynchronizeMultiRegionKey {
            access: Write,
            description: "Controls access to internal APIs that synchronize multi-Region keys",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
            docs: "https://docs.aws.amazon.com/kms/latest/developerguide/kms-api-permissions-reference.html",
        },
        TagResource {
            access: Tagging,
            description: "Controls permission to create or update tags that are attached to an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:ResourceTag/${TagKey}",
                "aws:TagKeys",
                "kms:CallerAccount",
                "kms:ViaService",
            ],
        },
        UntagResource {
            access: Tagging,
            description: "Controls permission to delete tags that are attached to an AWS KMS key",
            resources: ["key"],
            conditions: [
                "aws:RequestTag/${TagKey}",
                "aws:ResourceTag/${TagKey}",
                "aws:TagKeys",
                "kms:CallerAccount",
                "kms:ViaService",
            ],
        },
        UpdateAlias {
            access: Write,
            description: "Controls permission to associate an alias with a different AWS KMS key",
            resources: ["alias", "key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        UpdateCustomKeyStore {
            access: Write,
            description: "Controls permission to change the properties of a custom key store",
            resources: [],
            conditions: ["kms:CallerAccount"],
        },
        UpdateKeyDescription {
            access: Write,
            description: "Controls permission to delete or change the description of an AWS KMS key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:ViaService"],
        },
        UpdatePrimaryRegion {
            access: Write,
            description: "Controls permission to update the primary Region of a multi-Region primary key",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:PrimaryRegion", "kms:ViaService"],
        },
        Verify {
            access: Write,
            description: "Controls permission to use the specified AWS KMS key to verify digital signatures",
            resources: ["key"],
            conditions: [
                "aws:ResourceTag/${TagKey}",
                "kms:CallerAccount",
                "kms:MessageType",
                "kms:SigningAlgorithm",
                "kms:ViaService",
            ],
        },
        VerifyMac {
            access: Write,
            description: "Controls permission to use the AWS KMS key to verify message authentication codes",
            resources: ["key"],
            conditions: ["aws:ResourceTag/${TagKey}", "kms:CallerAccount", "kms:MacAlgorithm", "kms:ViaService"],
        },
    },
    resources: {
        alias => "alias": "arn:{partition}:kms:{region}:{account}:alias/{aliasName}",
        key => "key": "arn:{partition}:kms:{region}:{account}:key/{keyId}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{alias, key, Action},
        crate::{AccessLevel, ArnOptions},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_key_and_alias() {
        let options = ArnOptions::new()
            .partition("aws-us-gov")
            .region("us-gov-west-1")
            .account("123456789012")
            .with("keyId", "1234abcd-12ab-34cd-56ef-1234567890ab")
            .with("aliasName", "app");
        assert_eq!(key(&options), "arn:aws-us-gov:kms:us-gov-west-1:123456789012:key/1234abcd-12ab-34cd-56ef-1234567890ab");
        assert_eq!(alias(&options), "arn:aws-us-gov:kms:us-gov-west-1:123456789012:alias/app");
    }

    #[test_log::test]
    fn test_reencrypt_documentation() {
        let from = Action::ReEncryptFrom.definition().unwrap();
        let to = Action::ReEncryptTo.definition().unwrap();
        assert_eq!(from.documentation(), to.documentation());
        assert!(from.documentation().ends_with("API_ReEncrypt.html"));
        assert_eq!(Action::CreateGrant.definition().unwrap().access_level(), AccessLevel::PermissionsManagement);
    }
}
