//! Static catalog of AWS IAM actions and ARN builders for writing IAM policies.
//!
//! Every supported service has a module under [services] named for its IAM prefix. The action enum gives the action
//! strings along with their access level, linked resource types, and condition keys. The ARN builders format
//! resource ARNs and use `*` for any field left unset:
//!
//! ```
//! use scratchstack_iam_catalog::{services::elasticfilesystem, ArnOptions};
//!
//! let options = ArnOptions::new().region("us-east-1").with("fileSystemId", "fs-0123");
//! assert_eq!(elasticfilesystem::file_system(&options), "arn:*:elasticfilesystem:us-east-1:*:file-system/fs-0123");
//! assert_eq!(elasticfilesystem::Action::ClientMount.as_str(), "elasticfilesystem:ClientMount");
//! ```
//!
//! The catalog knows nothing about partitions, regions, or accounts and does not validate the values it is given.
#![warn(clippy::all)]

#[macro_use]
pub(crate) mod serutil;

#[macro_use]
mod macros;

pub(crate) mod action;
pub(crate) mod catalog;
pub(crate) mod error;
pub(crate) mod resource;
pub mod services;

pub use {
    action::{AccessLevel, ActionDefinition, ActionName},
    catalog::{catalogs, expand_action, lookup_action, service, ServiceCatalog},
    error::CatalogError,
    resource::{ArnOptions, ArnTemplate, ResourceArn, WILDCARD},
};
