use {
    crate::{CatalogError},
    log::debug,
    regex::RegexBuilder,
    serde::{
        de::{self, Deserializer, Unexpected, Visitor},
        ser::Serializer,
        Deserialize, Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// The access level the AWS Service Authorization Reference assigns to an action.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AccessLevel {
    Read,
    Write,
    List,
    Tagging,
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
}

impl AccessLevel {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::List => "List",
            Self::Tagging => "Tagging",
            Self::PermissionsManagement => "Permissions management",
        }
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Documentation metadata for a single IAM action.
///
/// Definitions are static data; the resource types and condition keys are informational only and are not
/// enforced anywhere in this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionDefinition {
    action: &'static str,
    access_level: AccessLevel,
    description: &'static str,
    documentation: &'static str,
    resource_types: &'static [&'static str],
    condition_keys: &'static [&'static str],
}

display_json!(ActionDefinition);

impl ActionDefinition {
    pub const fn new(
        action: &'static str,
        access_level: AccessLevel,
        description: &'static str,
        documentation: &'static str,
        resource_types: &'static [&'static str],
        condition_keys: &'static [&'static str],
    ) -> Self {
        Self {
            action,
            access_level,
            description,
            documentation,
            resource_types,
            condition_keys,
        }
    }

    /// The full action string, e.g. `elasticfilesystem:CreateFileSystem`.
    #[inline]
    pub fn action(&self) -> &'static str {
        self.action
    }

    /// The service prefix portion of the action.
    pub fn service(&self) -> &'static str {
        match self.action.split_once(':') {
            Some((service, _)) => service,
            None => self.action,
        }
    }

    /// The action name without the service prefix.
    pub fn name(&self) -> &'static str {
        match self.action.split_once(':') {
            Some((_, name)) => name,
            None => self.action,
        }
    }

    #[inline]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn documentation(&self) -> &'static str {
        self.documentation
    }

    #[inline]
    pub fn resource_types(&self) -> &'static [&'static str] {
        self.resource_types
    }

    #[inline]
    pub fn condition_keys(&self) -> &'static [&'static str] {
        self.condition_keys
    }

    #[inline]
    pub fn applies_to(&self, resource_type: &str) -> bool {
        self.resource_types.contains(&resource_type)
    }
}

/// An action as written in the `Action` element of a policy: either `*` or `service:action`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ActionName {
    Any,
    Specific {
        service: String,
        action: String,
    },
}

impl ActionName {
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Result<Self, CatalogError> {
        let service = service.into();
        let action = action.into();

        if service.is_empty() {
            debug!("Action '{service}:{action}' has an empty service.");
            return Err(CatalogError::InvalidAction(format!("{}:{}", service, action)));
        }

        if action.is_empty() {
            debug!("Action '{service}:{action}' has an empty action.");
            return Err(CatalogError::InvalidAction(format!("{}:{}", service, action)));
        }

        if !service.is_ascii() || !action.is_ascii() {
            debug!("Action '{service}:{action}' is not ASCII.");
            return Err(CatalogError::InvalidAction(format!("{}:{}", service, action)));
        }

        for (i, c) in service.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && !(i > 0 && i < service.len() - 1 && (c == b'-' || c == b'_')) {
                debug!("Action '{service}:{action}' has an invalid service.");
                return Err(CatalogError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        for (i, c) in action.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && c != b'*' && !(i > 0 && i < action.len() - 1 && (c == b'-' || c == b'_')) {
                debug!("Action '{service}:{action}' has an invalid action.");
                return Err(CatalogError::InvalidAction(format!("{}:{}", service, action)));
            }
        }

        Ok(ActionName::Specific {
            service,
            action,
        })
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific { .. })
    }

    #[inline]
    pub fn service(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                service,
                ..
            } => service,
        }
    }

    #[inline]
    pub fn action(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                action,
                ..
            } => action,
        }
    }

    /// Whether this name covers the given action. `*` in the action part matches any run of characters, and the
    /// comparison ignores case as IAM does.
    pub fn matches(&self, definition: &ActionDefinition) -> bool {
        match self {
            Self::Any => true,
            Self::Specific {
                service,
                action,
            } => service.eq_ignore_ascii_case(definition.service()) && glob_matches(action, definition.name()),
        }
    }
}

fn glob_matches(glob: &str, name: &str) -> bool {
    let mut pattern = String::with_capacity(2 + glob.len());
    pattern.push('^');
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            _ => pattern.push_str(&regex::escape(&String::from(c))),
        }
    }
    pattern.push('$');

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(name),
        Err(e) => {
            debug!("Action pattern {glob} could not be compiled: {e}");
            false
        }
    }
}

impl FromStr for ActionName {
    type Err = CatalogError;
    fn from_str(v: &str) -> Result<Self, Self::Err> {
        if v == "*" {
            return Ok(Self::Any);
        }

        let parts: Vec<&str> = v.split(':').collect();
        if parts.len() != 2 {
            return Err(CatalogError::InvalidAction(v.to_string()));
        }

        ActionName::new(parts[0], parts[1])
    }
}

impl Display for ActionName {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Specific {
                service,
                action,
            } => write!(f, "{}:{}", service, action),
        }
    }
}

struct ActionNameVisitor {}
impl<'de> Visitor<'de> for ActionNameVisitor {
    type Value = ActionName;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "service:action or \"*\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match ActionName::from_str(v) {
            Ok(action) => Ok(action),
            Err(_) => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for ActionName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ActionNameVisitor {})
    }
}

impl Serialize for ActionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{AccessLevel, ActionDefinition, ActionName},
        indoc::indoc,
        pretty_assertions::{assert_eq, assert_ne},
        std::str::FromStr,
    };

    const CREATE: ActionDefinition = ActionDefinition::new(
        "widgets:CreateWidget",
        AccessLevel::Write,
        "Grants permission to create a widget",
        "https://example.com/CreateWidget",
        &["widget"],
        &["aws:RequestTag/${TagKey}"],
    );

    #[test_log::test]
    fn test_definition_accessors() {
        assert_eq!(CREATE.action(), "widgets:CreateWidget");
        assert_eq!(CREATE.service(), "widgets");
        assert_eq!(CREATE.name(), "CreateWidget");
        assert_eq!(CREATE.access_level(), AccessLevel::Write);
        assert!(CREATE.applies_to("widget"));
        assert!(!CREATE.applies_to("gadget"));
        assert_eq!(CREATE.condition_keys(), &["aws:RequestTag/${TagKey}"]);
    }

    #[test_log::test]
    fn test_definition_display() {
        assert_eq!(
            CREATE.to_string(),
            indoc! {r#"
            {
                "Action": "widgets:CreateWidget",
                "AccessLevel": "Write",
                "Description": "Grants permission to create a widget",
                "Documentation": "https://example.com/CreateWidget",
                "ResourceTypes": [
                    "widget"
                ],
                "ConditionKeys": [
                    "aws:RequestTag/${TagKey}"
                ]
            }"#}
        );
    }

    #[test_log::test]
    fn test_access_level() {
        assert_eq!(AccessLevel::PermissionsManagement.to_string(), "Permissions management");
        assert_eq!(serde_json::to_string(&AccessLevel::PermissionsManagement).unwrap(), r#""Permissions management""#);
        assert_eq!(serde_json::from_str::<AccessLevel>(r#""Tagging""#).unwrap(), AccessLevel::Tagging);
        assert_ne!(AccessLevel::Read, AccessLevel::List);
    }

    #[test_log::test]
    fn test_bad_strings() {
        assert_eq!(ActionName::from_str("").unwrap_err().to_string(), "Invalid action: ");
        assert_eq!(ActionName::from_str("ec2:").unwrap_err().to_string(), "Invalid action: ec2:");
        assert_eq!(
            ActionName::from_str(":DescribeInstances").unwrap_err().to_string(),
            "Invalid action: :DescribeInstances"
        );
        assert_eq!(
            ActionName::from_str("ec2:Describe:Instances").unwrap_err().to_string(),
            "Invalid action: ec2:Describe:Instances"
        );
        assert_eq!(
            ActionName::from_str("🦀:DescribeInstances").unwrap_err().to_string(),
            "Invalid action: 🦀:DescribeInstances"
        );
        assert_eq!(
            ActionName::from_str("-ec2:DescribeInstances").unwrap_err().to_string(),
            "Invalid action: -ec2:DescribeInstances"
        );
        assert_eq!(
            ActionName::from_str("ec2_:DescribeInstances").unwrap_err().to_string(),
            "Invalid action: ec2_:DescribeInstances"
        );
        assert_eq!(
            ActionName::from_str("ec2:DescribeInstances-").unwrap_err().to_string(),
            "Invalid action: ec2:DescribeInstances-"
        );

        assert_eq!(ActionName::from_str("e_c-2:De-scribe_Instances").unwrap().service(), "e_c-2");
        assert_eq!(ActionName::from_str("e_c-2:De-scribe_Instances").unwrap().action(), "De-scribe_Instances");
        assert!(ActionName::from_str("ec2:Describe*").unwrap().is_specific());
        assert!(ActionName::from_str("*").unwrap().is_any());
        assert_eq!(ActionName::from_str("*").unwrap().service(), "*");
    }

    #[test_log::test]
    fn test_matches() {
        assert!(ActionName::Any.matches(&CREATE));
        assert!(ActionName::from_str("widgets:*").unwrap().matches(&CREATE));
        assert!(ActionName::from_str("widgets:Create*").unwrap().matches(&CREATE));
        assert!(ActionName::from_str("Widgets:createwidget").unwrap().matches(&CREATE));
        assert!(ActionName::from_str("widgets:*Widget").unwrap().matches(&CREATE));
        assert!(!ActionName::from_str("widgets:Create").unwrap().matches(&CREATE));
        assert!(!ActionName::from_str("widgets:Delete*").unwrap().matches(&CREATE));
        assert!(!ActionName::from_str("gadgets:*").unwrap().matches(&CREATE));
    }

    #[test_log::test]
    fn test_serde() {
        let name: ActionName = serde_json::from_str(r#""sqs:SendMessage""#).unwrap();
        assert_eq!(name, ActionName::new("sqs", "SendMessage").unwrap());
        assert_eq!(serde_json::to_string(&name).unwrap(), r#""sqs:SendMessage""#);
        assert_eq!(serde_json::to_string(&ActionName::Any).unwrap(), r#""*""#);
        assert!(serde_json::from_str::<ActionName>(r#""sqs""#).is_err());
    }
}
