use {
    crate::{services, AccessLevel, ActionDefinition, ActionName, ArnOptions, ArnTemplate, CatalogError},
    lazy_static::lazy_static,
    log::debug,
    serde::Serialize,
    std::{collections::HashMap, str::FromStr},
};

lazy_static! {
    static ref BY_PREFIX: HashMap<&'static str, &'static ServiceCatalog> =
        services::ALL.iter().map(|catalog| (catalog.prefix(), *catalog)).collect();
}

/// The actions and resource types of a single AWS service.
#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceCatalog {
    prefix: &'static str,
    name: &'static str,
    reference: &'static str,
    all_actions: &'static str,
    actions: &'static [ActionDefinition],
    resources: &'static [ArnTemplate],
}

display_json!(ServiceCatalog);

impl ServiceCatalog {
    pub const fn new(
        prefix: &'static str,
        name: &'static str,
        reference: &'static str,
        all_actions: &'static str,
        actions: &'static [ActionDefinition],
        resources: &'static [ArnTemplate],
    ) -> Self {
        Self {
            prefix,
            name,
            reference,
            all_actions,
            actions,
            resources,
        }
    }

    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The Service Authorization Reference page for the service.
    #[inline]
    pub fn reference(&self) -> &'static str {
        self.reference
    }

    /// The `<prefix>:*` action string.
    #[inline]
    pub fn all_actions(&self) -> &'static str {
        self.all_actions
    }

    #[inline]
    pub fn actions(&self) -> &'static [ActionDefinition] {
        self.actions
    }

    #[inline]
    pub fn resources(&self) -> &'static [ArnTemplate] {
        self.resources
    }

    /// Find an action by its bare name (`CreateFileSystem`) or full name (`elasticfilesystem:CreateFileSystem`).
    pub fn action(&self, name: &str) -> Option<&'static ActionDefinition> {
        let bare = match name.split_once(':') {
            Some((prefix, bare)) if prefix == self.prefix => bare,
            Some(_) => return None,
            None => name,
        };

        self.actions.iter().find(|definition| definition.name() == bare)
    }

    pub fn resource(&self, resource_type: &str) -> Option<&'static ArnTemplate> {
        self.resources.iter().find(|template| template.resource_type() == resource_type)
    }

    /// Format an ARN for the named resource type. This fails only if the resource type is unknown.
    pub fn arn(&self, resource_type: &str, options: &ArnOptions) -> Result<String, CatalogError> {
        match self.resource(resource_type) {
            Some(template) => Ok(template.format(options)),
            None => {
                debug!("Service {} has no resource type {}", self.prefix, resource_type);
                Err(CatalogError::UnknownResourceType(format!("{}:{}", self.prefix, resource_type)))
            }
        }
    }

    /// Actions covered by a possibly wildcarded name such as `sqs:*` or `sqs:Get*`.
    pub fn matching_actions<'a>(&self, name: &'a ActionName) -> impl Iterator<Item = &'static ActionDefinition> + 'a {
        self.actions.iter().filter(move |definition| name.matches(definition))
    }

    pub fn actions_with_access_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static ActionDefinition> {
        self.actions.iter().filter(move |definition| definition.access_level() == level)
    }

    /// Actions whose documentation lists the given resource type.
    pub fn actions_for_resource<'a>(
        &self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = &'static ActionDefinition> + 'a {
        self.actions.iter().filter(move |definition| definition.applies_to(resource_type))
    }
}

/// Every service catalog, sorted by prefix.
#[inline]
pub fn catalogs() -> &'static [&'static ServiceCatalog] {
    services::ALL
}

pub fn service(prefix: &str) -> Option<&'static ServiceCatalog> {
    BY_PREFIX.get(prefix).copied()
}

/// Look up an action such as `codebuild:StartBuild` across all services.
///
/// # Example
/// ```
/// # use scratchstack_iam_catalog::{lookup_action, AccessLevel};
/// let definition = lookup_action("codebuild:StartBuild").unwrap();
/// assert_eq!(definition.access_level(), AccessLevel::Write);
/// assert_eq!(definition.resource_types(), &["project"]);
/// ```
pub fn lookup_action(action: &str) -> Result<&'static ActionDefinition, CatalogError> {
    let name = ActionName::from_str(action)?;
    if name.is_any() {
        debug!("Wildcard action * has no definition");
        return Err(CatalogError::UnknownAction(action.to_string()));
    }

    let catalog = match service(name.service()) {
        Some(catalog) => catalog,
        None => {
            debug!("No catalog for service {}", name.service());
            return Err(CatalogError::UnknownService(name.service().to_string()));
        }
    };

    match catalog.action(name.action()) {
        Some(definition) => Ok(definition),
        None => {
            debug!("Service {} has no action {}", catalog.prefix(), name.action());
            Err(CatalogError::UnknownAction(action.to_string()))
        }
    }
}

/// Expand an action string as written in a policy into the actions it grants.
///
/// `*` covers every cataloged action, `<prefix>:*` every action of one service, and globs such as `sqs:Get*` the
/// actions they match. Matching ignores case.
///
/// # Example
/// ```
/// # use scratchstack_iam_catalog::expand_action;
/// let names: Vec<&str> = expand_action("sqs:*Message").unwrap().iter().map(|definition| definition.name()).collect();
/// assert_eq!(names, vec!["DeleteMessage", "ReceiveMessage", "SendMessage"]);
/// ```
pub fn expand_action(action: &str) -> Result<Vec<&'static ActionDefinition>, CatalogError> {
    let name = ActionName::from_str(action)?;
    let result: Vec<&'static ActionDefinition> = if name.is_any() {
        catalogs().iter().flat_map(|catalog| catalog.actions().iter()).collect()
    } else {
        let prefix = name.service().to_ascii_lowercase();
        match service(&prefix) {
            Some(catalog) => catalog.matching_actions(&name).collect(),
            None => {
                debug!("No catalog for service {}", name.service());
                return Err(CatalogError::UnknownService(name.service().to_string()));
            }
        }
    };

    if result.is_empty() {
        debug!("Action {} matches nothing", action);
        return Err(CatalogError::UnknownAction(action.to_string()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            catalogs, expand_action, lookup_action, service,
            services::{ecs, elasticfilesystem},
            AccessLevel, ArnOptions, CatalogError,
        },
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_service_lookup() {
        let efs = service("elasticfilesystem").unwrap();
        assert_eq!(efs.prefix(), "elasticfilesystem");
        assert_eq!(efs.name(), "Amazon Elastic File System");
        assert_eq!(efs.all_actions(), "elasticfilesystem:*");
        assert_eq!(efs, &elasticfilesystem::CATALOG);
        assert!(service("efs").is_none());

        for catalog in catalogs() {
            assert_eq!(service(catalog.prefix()), Some(*catalog));
        }
    }

    #[test_log::test]
    fn test_services_sorted() {
        let prefixes: Vec<&str> = catalogs().iter().map(|catalog| catalog.prefix()).collect();
        let mut sorted = prefixes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(prefixes, sorted);
    }

    #[test_log::test]
    fn test_action_lookup() {
        let efs = service("elasticfilesystem").unwrap();
        let by_bare = efs.action("CreateFileSystem").unwrap();
        let by_full = efs.action("elasticfilesystem:CreateFileSystem").unwrap();
        assert_eq!(by_bare, by_full);
        assert_eq!(by_bare.access_level(), AccessLevel::Write);
        assert!(efs.action("sqs:CreateFileSystem").is_none());
        assert!(efs.action("CreateWidget").is_none());

        assert_eq!(lookup_action("elasticfilesystem:CreateFileSystem").unwrap(), by_bare);
        assert_eq!(lookup_action("sqs:SendMessage").unwrap().access_level(), AccessLevel::Write);
        assert_eq!(lookup_action("nope:Thing").unwrap_err(), CatalogError::UnknownService("nope".to_string()));
        assert_eq!(lookup_action("sqs:Thing").unwrap_err(), CatalogError::UnknownAction("sqs:Thing".to_string()));
        assert_eq!(lookup_action("*").unwrap_err(), CatalogError::UnknownAction("*".to_string()));
        assert_eq!(lookup_action("sqs").unwrap_err(), CatalogError::InvalidAction("sqs".to_string()));
    }

    #[test_log::test]
    fn test_expand_action() {
        assert_eq!(expand_action("ecs:*").unwrap().len(), ecs::ACTIONS.len());
        assert_eq!(expand_action("ECS:listservices").unwrap(), vec![ecs::Action::ListServices.definition().unwrap()]);

        let listing: Vec<&str> = expand_action("ecs:ListServices*").unwrap().iter().map(|d| d.name()).collect();
        assert_eq!(listing, vec!["ListServices", "ListServicesByNamespace"]);

        let every: usize = catalogs().iter().map(|catalog| catalog.actions().len()).sum();
        assert_eq!(expand_action("*").unwrap().len(), every);

        assert_eq!(expand_action("ecs:Nope*").unwrap_err(), CatalogError::UnknownAction("ecs:Nope*".to_string()));
        assert_eq!(expand_action("nope:*").unwrap_err(), CatalogError::UnknownService("nope".to_string()));
        assert_eq!(expand_action("sqs").unwrap_err(), CatalogError::InvalidAction("sqs".to_string()));
    }

    #[test_log::test]
    fn test_arn_by_name() {
        let efs = service("elasticfilesystem").unwrap();
        let options = ArnOptions::new().region("us-east-1").with("fileSystemId", "fs-123");
        assert_eq!(efs.arn("fileSystem", &options).unwrap(), "arn:*:elasticfilesystem:us-east-1:*:file-system/fs-123");
        assert_eq!(
            efs.arn("widget", &options).unwrap_err().to_string(),
            "Unknown resource type: elasticfilesystem:widget"
        );
    }

    #[test_log::test]
    fn test_filters() {
        let efs = service("elasticfilesystem").unwrap();
        let tagging: Vec<&str> =
            efs.actions_with_access_level(AccessLevel::Tagging).map(|definition| definition.name()).collect();
        assert!(tagging.contains(&"TagResource"));
        assert!(tagging.contains(&"UntagResource"));

        assert!(efs.actions_for_resource("accessPoint").any(|definition| definition.name() == "DeleteAccessPoint"));
        assert!(efs.actions_for_resource("accessPoint").all(|definition| definition.applies_to("accessPoint")));
    }

    #[test_log::test]
    fn test_display_json() {
        let s = service("sts").unwrap().to_string();
        assert!(s.starts_with("{\n    \"Prefix\": \"sts\",\n"));
        let value: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(value["AllActions"], "sts:*");
        assert_eq!(value["Actions"][0]["Action"], "sts:AssumeRole");
    }
}
