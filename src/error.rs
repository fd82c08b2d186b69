use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Eq, PartialEq)]
pub enum CatalogError {
    InvalidAction(String),
    UnknownAction(String),
    UnknownResourceType(String),
    UnknownService(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidAction(action) => write!(f, "Invalid action: {}", action),
            Self::UnknownAction(action) => write!(f, "Unknown action: {}", action),
            Self::UnknownResourceType(resource_type) => write!(f, "Unknown resource type: {}", resource_type),
            Self::UnknownService(service) => write!(f, "Unknown service: {}", service),
        }
    }
}

impl Error for CatalogError {}

#[cfg(test)]
mod tests {
    use {
        crate::CatalogError,
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", CatalogError::InvalidAction("foo".to_string()));
        assert_eq!(CatalogError::InvalidAction("foo".to_string()).to_string(), "Invalid action: foo");
        assert_eq!(CatalogError::UnknownAction("s3:Foo".to_string()).to_string(), "Unknown action: s3:Foo");
        assert_eq!(
            CatalogError::UnknownResourceType("widget".to_string()).to_string(),
            "Unknown resource type: widget"
        );
        assert_eq!(CatalogError::UnknownService("nope".to_string()).to_string(), "Unknown service: nope");
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = CatalogError::InvalidAction("foo".to_string());
        let e1b = CatalogError::InvalidAction("foo".to_string());
        let e2 = CatalogError::UnknownAction("foo".to_string());
        let e3 = CatalogError::UnknownService("foo".to_string());
        let e4 = CatalogError::InvalidAction("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e1a, e4);
        assert_ne!(e2, e3);
    }
}
