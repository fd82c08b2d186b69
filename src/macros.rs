/// Declare the catalog of one AWS service.
///
/// Generates, in the invoking module:
/// * `SERVICE_PREFIX` and `ALL_ACTIONS` (`<prefix>:*`).
/// * An `Action` enum with one variant per action plus `All`.
/// * `ACTIONS`, the [ActionDefinition][crate::ActionDefinition] list in variant order.
/// * One `pub fn` ARN builder per resource type, and the matching `RESOURCES` table.
/// * `CATALOG`, the [ServiceCatalog][crate::ServiceCatalog] tying these together.
///
/// Action documentation defaults to `<api_docs><ActionName>.html`; permission-only actions supply `docs` instead.
macro_rules! service_catalog {
    (
        prefix: $prefix:literal,
        name: $name:literal,
        reference: $reference:literal,
        api_docs: $api_docs:literal,
        actions: {
            $(
                $action:ident {
                    access: $access:ident,
                    description: $description:literal,
                    resources: [$($resource_type:literal),* $(,)?],
                    conditions: [$($condition:literal),* $(,)?]
                    $(, docs: $docs:literal)? $(,)?
                }
            ),* $(,)?
        },
        resources: {
            $(
                $builder:ident => $builder_type:literal: $pattern:literal
            ),* $(,)?
        } $(,)?
    ) => {
        /// The IAM service prefix.
        pub const SERVICE_PREFIX: &str = $prefix;

        /// The action string granting every action of this service.
        pub const ALL_ACTIONS: &str = concat!($prefix, ":*");

        #[doc = concat!("IAM actions of ", $name, " (`", $prefix, "`).")]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Action {
            $(
                #[doc = $description]
                $action,
            )*
            #[doc = concat!("All ", $name, " actions (`", $prefix, ":*`).")]
            All,
        }

        impl Action {
            /// Every action, with [Action::All] last.
            pub const ALL: &'static [Action] = &[$(Action::$action,)* Action::All];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$action => concat!($prefix, ":", stringify!($action)),)*
                    Self::All => ALL_ACTIONS,
                }
            }

            /// The documentation metadata for this action. [Action::All] has none.
            pub fn definition(&self) -> Option<&'static $crate::ActionDefinition> {
                match self {
                    Self::All => None,
                    action => ACTIONS.get(*action as usize),
                }
            }
        }

        impl ::std::fmt::Display for Action {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for Action {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::str::FromStr for Action {
            type Err = $crate::CatalogError;

            /// Accepts either `<prefix>:<Name>` or the bare `<Name>`.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let name = s.strip_prefix(concat!($prefix, ":")).unwrap_or(s);
                for action in Action::ALL {
                    if action.as_str()[$prefix.len() + 1..] == *name {
                        return Ok(*action);
                    }
                }

                ::log::debug!("{} is not a {} action", s, $prefix);
                Err($crate::CatalogError::UnknownAction(s.to_string()))
            }
        }

        impl ::serde::Serialize for Action {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl From<Action> for $crate::ActionName {
            fn from(action: Action) -> Self {
                $crate::ActionName::Specific {
                    service: $prefix.to_string(),
                    action: action.as_str()[$prefix.len() + 1..].to_string(),
                }
            }
        }

        /// Metadata for every action, in [Action] variant order.
        pub const ACTIONS: &[$crate::ActionDefinition] = &[
            $(
                $crate::ActionDefinition::new(
                    concat!($prefix, ":", stringify!($action)),
                    $crate::AccessLevel::$access,
                    $description,
                    action_docs!($api_docs, $action $(, $docs)?),
                    &[$($resource_type),*],
                    &[$($condition),*],
                ),
            )*
        ];

        /// ARN templates for every resource type of this service.
        pub const RESOURCES: &[$crate::ArnTemplate] = &[
            $($crate::ArnTemplate::new($builder_type, $pattern, $reference),)*
        ];

        $(
            #[doc = concat!("Format an ARN for the `", $builder_type, "` resource type: `", $pattern, "`.")]
            pub fn $builder(options: &$crate::ArnOptions) -> String {
                $crate::ArnTemplate::new($builder_type, $pattern, $reference).format(options)
            }
        )*

        #[doc = concat!("The catalog of ", $name, ".")]
        pub static CATALOG: $crate::ServiceCatalog =
            $crate::ServiceCatalog::new($prefix, $name, $reference, ALL_ACTIONS, ACTIONS, RESOURCES);
    };
}

macro_rules! action_docs {
    ($api_docs:literal, $action:ident) => {
        concat!($api_docs, stringify!($action), ".html")
    };
    ($api_docs:literal, $action:ident, $docs:literal) => {
        $docs
    };
}
