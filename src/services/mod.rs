//! Per-service action catalogs and ARN builders.
//!
//! Each module is named for its IAM service prefix and exposes the same items: an `Action` enum, the `ACTIONS` and
//! `RESOURCES` tables, one ARN builder function per resource type, and a `CATALOG` tying them together.
//!
//! ```
//! use scratchstack_iam_catalog::{services::lambda, ArnOptions};
//!
//! let options = ArnOptions::new().region("us-west-2").with("functionName", "resize");
//! assert_eq!(lambda::function(&options), "arn:*:lambda:us-west-2:*:function:resize");
//! assert_eq!(lambda::Action::InvokeFunction.as_str(), "lambda:InvokeFunction");
//! ```

use crate::ServiceCatalog;

pub mod codebuild;
pub mod codecommit;
pub mod codepipeline;
pub mod datasync;
pub mod ecr;
pub mod ecs;
pub mod eks;
pub mod elasticfilesystem;
pub mod events;
pub mod firehose;
pub mod kinesis;
pub mod kinesisanalytics;
pub mod kms;
pub mod lambda;
pub mod logs;
pub mod secretsmanager;
pub mod sns;
pub mod sqs;
pub mod states;
pub mod sts;

#[cfg(test)]
mod tests;

/// Sorted by prefix.
pub(crate) static ALL: &[&ServiceCatalog] = &[
    &codebuild::CATALOG,
    &codecommit::CATALOG,
    &codepipeline::CATALOG,
    &datasync::CATALOG,
    &ecr::CATALOG,
    &ecs::CATALOG,
    &eks::CATALOG,
    &elasticfilesystem::CATALOG,
    &events::CATALOG,
    &firehose::CATALOG,
    &kinesis::CATALOG,
    &kinesisanalytics::CATALOG,
    &kms::CATALOG,
    &lambda::CATALOG,
    &logs::CATALOG,
    &secretsmanager::CATALOG,
    &sns::CATALOG,
    &sqs::CATALOG,
    &states::CATALOG,
    &sts::CATALOG,
];
