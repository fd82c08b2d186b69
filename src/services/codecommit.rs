//! AWS CodeCommit.
//!
//! Repository ARNs have no resource-type prefix; the repository name follows the account directly.

service_catalog! {
    prefix: "codecommit",
    name: "AWS CodeCommit",
    reference: "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awscodecommit.html",
    api_docs: "https://docs.aws.amazon.com/codecommit/latest/APIReference/API_",
    actions: {
        AssociateApprovalRuleTemplateWithRepository {
            access: Write,
            description: "Grants permission to associate an approval rule template with a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        BatchAssociateApprovalRuleTemplateWithRepositories {
            access: Write,
            description: "Grants permission to associate an approval rule template with multiple repositories in a single operation",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        BatchDescribeMergeConflicts {
            access: Read,
            description: "Grants permission to get information about multiple merge conflicts when attempting to merge two commits using either the three-way merge or the squash merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        BatchDisassociateApprovalRuleTemplateFromRepositories {
            access: Write,
            description: "Grants permission to remove the association between an approval rule template and multiple repositories in a single operation",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        BatchGetCommits {
            access: Read,
            description: "Grants permission to return information about one or more commits in an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        BatchGetPullRequests {
            access: Read,
            description: "Grants permission to return information about one or more pull requests in an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        BatchGetRepositories {
            access: Read,
            description: "Grants permission to get information about multiple repositories",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CancelUploadArchive {
            access: Read,
            description: "Grants permission to cancel the uploading of an archive to a pipeline in AWS CodePipeline",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        CreateApprovalRuleTemplate {
            access: Write,
            description: "Grants permission to create an approval rule template that will automatically create approval rules in pull requests that match the conditions defined in the template",
            resources: [],
            conditions: [],
        },
        CreateBranch {
            access: Write,
            description: "Grants permission to create a branch in an AWS CodeCommit repository with this API; does not control Git create branch actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        CreateCommit {
            access: Write,
            description: "Grants permission to add, copy, move or update single or multiple files in a branch in an AWS CodeCommit repository, and generate a commit for the changes in the specified branch",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        CreatePullRequest {
            access: Write,
            description: "Grants permission to create a pull request in the specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreatePullRequestApprovalRule {
            access: Write,
            description: "Grants permission to create an approval rule specific to an individual pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        CreateRepository {
            access: Write,
            description: "Grants permission to create an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
        },
        CreateUnreferencedMergeCommit {
            access: Write,
            description: "Grants permission to create an unreferenced commit that contains the result of merging two commits using either the three-way or the squash merge option; does not control Git merge actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        DeleteApprovalRuleTemplate {
            access: Write,
            description: "Grants permission to delete an approval rule template",
            resources: [],
            conditions: [],
        },
        DeleteBranch {
            access: Write,
            description: "Grants permission to delete a branch in an AWS CodeCommit repository with this API; does not control Git delete branch actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        DeleteCommentContent {
            access: Write,
            description: "Grants permission to delete the content of a comment made on a change, file, or commit in a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteFile {
            access: Write,
            description: "Grants permission to delete a specified file from a specified branch",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        DeletePullRequestApprovalRule {
            access: Write,
            description: "Grants permission to delete approval rule created for a pull request if the rule was not created by an approval rule template",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DeleteRepository {
            access: Write,
            description: "Grants permission to delete an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribeMergeConflicts {
            access: Read,
            description: "Grants permission to get information about specific merge conflicts when attempting to merge two commits using either the three-way or the squash merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DescribePullRequestEvents {
            access: Read,
            description: "Grants permission to return information about one or more pull request events",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        DisassociateApprovalRuleTemplateFromRepository {
            access: Write,
            description: "Grants permission to remove the association between an approval rule template and a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        EvaluatePullRequestApprovalRules {
            access: Read,
            description: "Grants permission to evaluate whether a pull request is mergable based on its current approval state and approval rule requirements",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetApprovalRuleTemplate {
            access: Read,
            description: "Grants permission to return information about an approval rule template",
            resources: [],
            conditions: [],
        },
        GetArchive {
            access: Read,
            description: "Grants permission to view the encoded content of an individual file in an AWS CodeCommit repository from the AWS CodeCommit console",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetBlob {
            access: Read,
            description: "Grants permission to view the encoded content of an individual file in an AWS CodeCommit repository from the AWS CodeCommit console",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetBranch {
            access: Read,
            description: "Grants permission to get details about a branch in an AWS CodeCommit repository with this API; does not control Git branch actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetComment {
            access: Read,
            description: "Grants permission to get the content of a comment made on a change, file, or commit in a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetCommentReactions {
            access: Read,
            description: "Grants permission to get the reactions on a comment",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetCommentsForComparedCommit {
            access: Read,
            description: "Grants permission to get information about comments made on the comparison between two commits",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetCommentsForPullRequest {
            access: Read,
            description: "Grants permission to get comments made on a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetCommit {
            access: Read,
            description: "Grants permission to return information about a commit, including commit message and committer information, with this API; does not control Git log actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetCommitHistory {
            access: Read,
            description: "Grants permission to get information about the history of commits in a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetCommitsFromMergeBase {
            access: Read,
            description: "Grants permission to get information about the difference between commits in the context of a potential merge",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetDifferences {
            access: Read,
            description: "Grants permission to view information about the differences between valid commit specifiers such as a branch, tag, HEAD, commit ID, or other fully qualified reference",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetFile {
            access: Read,
            description: "Grants permission to return the base-64 encoded contents of a specified file and its metadata",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetFolder {
            access: Read,
            description: "Grants permission to return the contents of a specified folder in a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetMergeCommit {
            access: Read,
            description: "Grants permission to get information about a merge commit created by one of the merge options for pull requests that creates merge commits",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetMergeConflicts {
            access: Read,
            description: "Grants permission to get information about merge conflicts between the before and after commit IDs for a pull request in a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetMergeOptions {
            access: Read,
            description: "Grants permission to get information about merge options for pull requests that can be used to merge two commits",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetObjectIdentifier {
            access: Read,
            description: "Grants permission to resolve blobs, trees, and commits to their identifier",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetPullRequest {
            access: Read,
            description: "Grants permission to get information about a pull request in a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetPullRequestApprovalStates {
            access: Read,
            description: "Grants permission to retrieve the current approvals on an inputted pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetPullRequestOverrideState {
            access: Read,
            description: "Grants permission to retrieve the current override state of a given pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetReferences {
            access: Read,
            description: "Grants permission to get details about references in an AWS CodeCommit repository; does not control Git reference actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetRepository {
            access: Read,
            description: "Grants permission to get information about an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetRepositoryTriggers {
            access: Read,
            description: "Grants permission to get information about triggers configured for a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        GetTree {
            access: Read,
            description: "Grants permission to view the contents of a specified tree in an AWS CodeCommit repository from the AWS CodeCommit console",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GetUploadArchiveStatus {
            access: Read,
            description: "Grants permission to get status information about an archive upload to a pipeline in AWS CodePipeline",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GitPull {
            access: Read,
            description: "Grants permission to pull information from an AWS CodeCommit repository to a local repo",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        GitPush {
            access: Write,
            description: "Grants permission to push information from a local repo to an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
        ListApprovalRuleTemplates {
            access: List,
            description: "Grants permission to list all approval rule templates in an AWS Region for the AWS account",
            resources: [],
            conditions: [],
        },
        ListAssociatedApprovalRuleTemplatesForRepository {
            access: List,
            description: "Grants permission to list approval rule templates that are associated with a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListBranches {
            access: List,
            description: "Grants permission to list branches for an AWS CodeCommit repository with this API; does not control Git branch actions",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListFileCommitHistory {
            access: List,
            description: "Grants permission to list commits and changes to a specified file",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListPullRequests {
            access: List,
            description: "Grants permission to list pull requests for a specified repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        ListRepositories {
            access: List,
            description: "Grants permission to list information about AWS CodeCommit repositories in the current Region for your AWS account",
            resources: [],
            conditions: [],
        },
        ListRepositoriesForApprovalRuleTemplate {
            access: List,
            description: "Grants permission to list repositories that are associated with an approval rule template",
            resources: [],
            conditions: [],
        },
        ListTagsForResource {
            access: Read,
            description: "Grants permission to list the resource attached to a CodeCommit resource ARN",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        MergeBranchesByFastForward {
            access: Write,
            description: "Grants permission to merge two commits into the specified destination branch using the fast-forward merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        MergeBranchesBySquash {
            access: Write,
            description: "Grants permission to merge two commits into the specified destination branch using the squash merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        MergeBranchesByThreeWay {
            access: Write,
            description: "Grants permission to merge two commits into the specified destination branch using the three-way merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        MergePullRequestByFastForward {
            access: Write,
            description: "Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the fast-forward merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        MergePullRequestBySquash {
            access: Write,
            description: "Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the squash merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        MergePullRequestByThreeWay {
            access: Write,
            description: "Grants permission to close a pull request and attempt to merge it into the specified destination branch for that pull request at the specified commit using the three-way merge option",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        OverridePullRequestApprovalRules {
            access: Write,
            description: "Grants permission to override all approval rules for a pull request, including approval rules created by a template",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PostCommentForComparedCommit {
            access: Write,
            description: "Grants permission to post a comment on the comparison between two commits",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PostCommentForPullRequest {
            access: Write,
            description: "Grants permission to post a comment on a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PostCommentReply {
            access: Write,
            description: "Grants permission to post a comment in reply to a comment on a comparison between commits or a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutCommentReaction {
            access: Write,
            description: "Grants permission to post a reaction on a comment",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        PutFile {
            access: Write,
            description: "Grants permission to add or update a file in a branch in an AWS CodeCommit repository, and generate a commit for the addition in the specified branch",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}", "codecommit:References"],
        },
        PutRepositoryTriggers {
            access: Write,
            description: "Grants permission to create, update, or delete triggers for a repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        TagResource {
            access: Tagging,
            description: "Grants permission to attach resource tags to a CodeCommit resource ARN",
            resources: ["repository"],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        TestRepositoryTriggers {
            access: Write,
            description: "Grants permission to test the functionality of repository triggers by sending information to the trigger target",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UntagResource {
            access: Tagging,
            description: "Grants permission to disassociate resource tags from a CodeCommit resource ARN",
            resources: ["repository"],
            conditions: ["aws:TagKeys", "aws:ResourceTag/${TagKey}"],
        },
        UpdateApprovalRuleTemplateContent {
            access: Write,
            description: "Grants permission to update the content of approval rule templates; does not grant permission to update content of approval rules created specifically for pull requests",
            resources: [],
            conditions: [],
        },
        UpdateApprovalRuleTemplateDescription {
            access: Write,
            description: "Grants permission to update the description of approval rule templates",
            resources: [],
            conditions: [],
        },
        UpdateApprovalRuleTemplateName {
            access: Write,
            description: "Grants permission to update the name of approval rule templates",
            resources: [],
            conditions: [],
        },
        UpdateComment {
            access: Write,
            description: "Grants permission to update the contents of a comment if the identity matches the identity used to create the comment",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateDefaultBranch {
            access: Write,
            description: "Grants permission to change the default branch in an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePullRequestApprovalRuleContent {
            access: Write,
            description: "Grants permission to update the content for approval rules created for a specific pull requests; does not grant permission to update approval rule content for rules created with an approval rule template",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePullRequestApprovalState {
            access: Write,
            description: "Grants permission to update the approval state for pull requests",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePullRequestDescription {
            access: Write,
            description: "Grants permission to update the description of a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePullRequestStatus {
            access: Write,
            description: "Grants permission to update the status of a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdatePullRequestTitle {
            access: Write,
            description: "Grants permission to update the title of a pull request",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateRepositoryDescription {
            access: Write,
            description: "Grants permission to change the description of an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateRepositoryEncryptionKey {
            access: Write,
            description: "Grants permission to update the AWS KMS key used to encrypt the repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UpdateRepositoryName {
            access: Write,
            description: "Grants permission to change the name of an AWS CodeCommit repository",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
        },
        UploadArchive {
            access: Write,
            description: "Grants permission to the service role for AWS CodePipeline to upload repository changes into a pipeline",
            resources: ["repository"],
            conditions: ["aws:ResourceTag/${TagKey}"],
            docs: "https://docs.aws.amazon.com/codecommit/latest/userguide/auth-and-access-control-permissions-reference.html",
        },
    },
    resources: {
        repository => "repository": "arn:{partition}:codecommit:{region}:{account}:{repositoryName}",
    },
}

#[cfg(test)]
mod tests {
    use {
        super::{repository, Action, ACTIONS},
        crate::ArnOptions,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_repository() {
        assert_eq!(repository(&ArnOptions::new()), "arn:*:codecommit:*:*:*");
        assert_eq!(
            repository(
                &ArnOptions::new().region("us-east-2").account("111122223333").with("repositoryName", "MyDemoRepo")
            ),
            "arn:*:codecommit:us-east-2:111122223333:MyDemoRepo"
        );
    }

    #[test_log::test]
    fn test_git_actions() {
        let push = Action::GitPush.definition().unwrap();
        assert!(push.condition_keys().contains(&"codecommit:References"));
        assert!(!push.documentation().contains("API_GitPush"));

        let with_references = ACTIONS.iter().filter(|d| d.condition_keys().contains(&"codecommit:References")).count();
        assert_eq!(with_references, 13);
    }
}
