mod arn;

use {
    lazy_static::lazy_static,
    log::trace,
    regex::{Captures, Regex},
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

pub use arn::ResourceArn;

/// The value substituted for any ARN field that has not been supplied.
pub const WILDCARD: &str = "*";

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\{([A-Za-z][A-Za-z0-9]*)\}").expect("placeholder pattern is a valid regex");
}

/// Named values used to fill in an [ArnTemplate].
///
/// Every field is optional. A field that is absent and a field that is set to the empty string are treated the same:
/// both render as `*`.
///
/// # Example
/// ```
/// # use scratchstack_iam_catalog::{services::elasticfilesystem, ArnOptions};
/// let options = ArnOptions::new().region("us-east-1").with("fileSystemId", "fs-123");
/// assert_eq!(elasticfilesystem::file_system(&options), "arn:*:elasticfilesystem:us-east-1:*:file-system/fs-123");
/// assert_eq!(elasticfilesystem::file_system(&ArnOptions::default()), "arn:*:elasticfilesystem:*:*:file-system/*");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArnOptions(BTreeMap<String, String>);

impl ArnOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the updated options.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, field: K, value: V) -> Self {
        self.insert(field, value);
        self
    }

    #[inline]
    pub fn partition<V: Into<String>>(self, partition: V) -> Self {
        self.with("partition", partition)
    }

    #[inline]
    pub fn region<V: Into<String>>(self, region: V) -> Self {
        self.with("region", region)
    }

    #[inline]
    pub fn account<V: Into<String>>(self, account: V) -> Self {
        self.with("account", account)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, field: K, value: V) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    /// Retrieve a field. Empty values are reported as absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        match self.0.get(field) {
            Some(value) if !value.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn value_or_wildcard(&self, field: &str) -> &str {
        self.get(field).unwrap_or(WILDCARD)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ArnOptions {
    fn from(fields: [(K, V); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArnOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The ARN format for one resource type of a service.
///
/// Patterns follow the layout used in the AWS Service Authorization Reference, with `{field}` placeholders:
/// `arn:{partition}:codebuild:{region}:{account}:build/{buildId}`. Rendering never fails; unsupplied fields become
/// `*`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArnTemplate {
    resource_type: &'static str,
    pattern: &'static str,
    documentation: &'static str,
}

impl ArnTemplate {
    pub const fn new(resource_type: &'static str, pattern: &'static str, documentation: &'static str) -> Self {
        Self {
            resource_type,
            pattern,
            documentation,
        }
    }

    #[inline]
    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    #[inline]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    #[inline]
    pub fn documentation(&self) -> &'static str {
        self.documentation
    }

    /// The placeholder names of this template in the order they first appear.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut result = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.pattern) {
            if let Some(field) = caps.get(1) {
                let field = field.as_str();
                if !result.contains(&field) {
                    result.push(field);
                }
            }
        }
        result
    }

    /// Render this template into an ARN.
    pub fn resource_arn(&self, options: &ArnOptions) -> ResourceArn {
        // Split the template, not the rendered ARN: supplied values may contain ':'.
        let mut parts = self.pattern.splitn(6, ':').skip(1);
        let mut next = || substitute(parts.next().unwrap_or_default(), options);
        let partition = next();
        let service = next();
        let region = next();
        let account_id = next();
        let resource = next();

        let result = ResourceArn::new(&partition, &service, &region, &account_id, &resource);
        trace!("ArnTemplate::resource_arn: pattern={:?}, options={:?} -> {}", self.pattern, options, result);
        result
    }

    #[inline]
    pub fn format(&self, options: &ArnOptions) -> String {
        self.resource_arn(options).into()
    }
}

impl Display for ArnTemplate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.pattern)
    }
}

fn substitute(segment: &str, options: &ArnOptions) -> String {
    PLACEHOLDER.replace_all(segment, |caps: &Captures| options.value_or_wildcard(&caps[1]).to_string()).into_owned()
}

#[cfg(test)]
mod tests {
    use {
        super::{ArnOptions, ArnTemplate},
        pretty_assertions::assert_eq,
    };

    const TASK_EXECUTION: ArnTemplate = ArnTemplate::new(
        "taskexecution",
        "arn:{partition}:datasync:{region}:{account}:task/{taskId}/execution/{executionId}",
        "https://example.com/datasync",
    );

    const BUCKET: ArnTemplate =
        ArnTemplate::new("bucket", "arn:{partition}:s3:::{bucketName}", "https://example.com/s3");

    #[test_log::test]
    fn test_fields() {
        assert_eq!(TASK_EXECUTION.fields(), vec!["partition", "region", "account", "taskId", "executionId"]);
        assert_eq!(BUCKET.fields(), vec!["partition", "bucketName"]);

        let repeated = ArnTemplate::new("x", "arn:{partition}:x:{region}:{account}:{name}/{name}", "");
        assert_eq!(repeated.fields(), vec!["partition", "region", "account", "name"]);
    }

    #[test_log::test]
    fn test_defaults() {
        assert_eq!(TASK_EXECUTION.format(&ArnOptions::new()), "arn:*:datasync:*:*:task/*/execution/*");
        assert_eq!(BUCKET.format(&ArnOptions::new()), "arn:*:s3:::*");
    }

    #[test_log::test]
    fn test_empty_is_absent() {
        let options = ArnOptions::from([("region", ""), ("taskId", "task-1"), ("account", "")]);
        assert_eq!(options.get("region"), None);
        assert_eq!(options.get("taskId"), Some("task-1"));
        assert_eq!(TASK_EXECUTION.format(&options), "arn:*:datasync:*:*:task/task-1/execution/*");
    }

    #[test_log::test]
    fn test_verbatim() {
        // Values are never validated or escaped.
        let options = ArnOptions::new().partition("aws").with("taskId", "a:b/c").with("executionId", "$1 {x}");
        let arn = TASK_EXECUTION.resource_arn(&options);
        assert_eq!(arn.to_string(), "arn:aws:datasync:*:*:task/a:b/c/execution/$1 {x}");
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "datasync");
        assert_eq!(arn.region(), "*");
        assert_eq!(arn.resource(), "task/a:b/c/execution/$1 {x}");
    }

    #[test_log::test]
    fn test_unknown_fields_ignored() {
        let options = ArnOptions::new().with("bucketName", "logs").with("objectName", "ignored");
        assert_eq!(BUCKET.format(&options), "arn:*:s3:::logs");
        assert_eq!(options.len(), 2);
        assert!(!options.is_empty());
    }

    #[test_log::test]
    fn test_options_deserialize() {
        let options: ArnOptions = serde_json::from_str(r#"{"partition": "aws-cn", "bucketName": "data"}"#).unwrap();
        assert_eq!(BUCKET.format(&options), "arn:aws-cn:s3:::data");
        assert_eq!(serde_json::to_string(&options).unwrap(), r#"{"bucketName":"data","partition":"aws-cn"}"#);
    }

    #[test_log::test]
    fn test_display() {
        assert_eq!(BUCKET.to_string(), "arn:{partition}:s3:::{bucketName}");
        assert_eq!(BUCKET.resource_type(), "bucket");
        assert_eq!(BUCKET.documentation(), "https://example.com/s3");
    }
}
