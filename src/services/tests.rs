use {
    crate::{catalogs, lookup_action, service, ArnOptions, ArnTemplate, WILDCARD},
    pretty_assertions::assert_eq,
    regex::Regex,
    std::{collections::HashSet, str::FromStr},
};

/// Run `$body` once per service module with `$svc` bound to the module.
macro_rules! each_service {
    ($svc:ident => $body:block) => {
        each_service!(@expand $svc $body;
            codebuild, codecommit, codepipeline, datasync, ecr, ecs, eks, elasticfilesystem, events, firehose,
            kinesis, kinesisanalytics, kms, lambda, logs, secretsmanager, sns, sqs, states, sts)
    };
    (@expand $svc:ident $body:block; $($module:ident),*) => {
        $({
            use super::$module as $svc;
            $body
        })*
    };
}

/// The pattern with every placeholder replaced by either its value in `values` or `*`.
fn expected(template: &ArnTemplate, values: &[(&str, &str)]) -> String {
    let mut result = template.pattern().to_string();
    for field in template.fields() {
        let value = values.iter().find(|(name, _)| *name == field).map(|(_, value)| *value).unwrap_or(WILDCARD);
        result = result.replace(&format!("{{{field}}}"), value);
    }
    result
}

#[test_log::test]
fn test_every_module_registered() {
    let mut count = 0;
    each_service!(svc => {
        assert_eq!(service(svc::SERVICE_PREFIX), Some(&svc::CATALOG));
        count += 1;
    });
    assert_eq!(catalogs().len(), count);
}

#[test_log::test]
fn test_action_grammar() {
    let grammar = Regex::new(r"^[a-z0-9-]+:[A-Za-z*]+$").unwrap();
    each_service!(svc => {
        for action in svc::Action::ALL {
            assert!(grammar.is_match(action.as_str()), "{}", action);
            assert!(action.as_str().starts_with(&format!("{}:", svc::SERVICE_PREFIX)), "{}", action);
        }
    });
}

#[test_log::test]
fn test_action_uniqueness() {
    each_service!(svc => {
        let values: HashSet<&str> = svc::Action::ALL.iter().map(|action| action.as_str()).collect();
        assert_eq!(values.len(), svc::Action::ALL.len(), "duplicate action in {}", svc::SERVICE_PREFIX);
        assert_eq!(svc::ACTIONS.len() + 1, svc::Action::ALL.len());
    });
}

#[test_log::test]
fn test_single_all_actions_entry() {
    each_service!(svc => {
        let wildcards: Vec<&svc::Action> =
            svc::Action::ALL.iter().filter(|action| action.as_str().ends_with(":*")).collect();
        assert_eq!(wildcards, vec![&svc::Action::All]);
        assert_eq!(svc::Action::ALL.last(), Some(&svc::Action::All));
        assert_eq!(svc::Action::All.as_str(), svc::ALL_ACTIONS);
        assert_eq!(svc::CATALOG.all_actions(), format!("{}:*", svc::SERVICE_PREFIX));
        assert!(svc::Action::All.definition().is_none());
    });
}

#[test_log::test]
fn test_definitions_follow_variants() {
    each_service!(svc => {
        for action in svc::Action::ALL.iter().filter(|action| **action != svc::Action::All) {
            let definition = action.definition().unwrap();
            assert_eq!(definition.action(), action.as_str());
            assert_eq!(definition.service(), svc::SERVICE_PREFIX);
            assert!(definition.documentation().starts_with("https://docs.aws.amazon.com/"), "{}", action);
            assert!(!definition.description().is_empty(), "{}", action);
            assert_eq!(svc::Action::from_str(definition.name()).unwrap(), *action);
            assert_eq!(lookup_action(action.as_str()).unwrap(), definition);
        }
    });
}

#[test_log::test]
fn test_resource_cross_references() {
    for catalog in catalogs() {
        let types: HashSet<&str> = catalog.resources().iter().map(|template| template.resource_type()).collect();
        assert_eq!(types.len(), catalog.resources().len(), "duplicate resource type in {}", catalog.prefix());

        for definition in catalog.actions() {
            for resource_type in definition.resource_types() {
                assert!(
                    types.contains(resource_type),
                    "{} names unknown resource type {}",
                    definition.action(),
                    resource_type
                );
            }
        }
    }
}

#[test_log::test]
fn test_wildcard_default() {
    let empty = ArnOptions::new();
    for catalog in catalogs() {
        for template in catalog.resources() {
            let arn = template.format(&empty);
            assert!(!arn.contains('{') && !arn.contains('}'), "{}", arn);
            assert_eq!(arn, expected(template, &[]));
            assert_eq!(catalog.arn(template.resource_type(), &empty).unwrap(), arn);
            assert!(template.resource_arn(&empty).has_wildcards());
        }
    }
}

#[test_log::test]
fn test_builders_match_templates() {
    each_service!(svc => {
        let options = ArnOptions::new().partition("aws").region("us-east-1").account("123456789012");
        for template in svc::RESOURCES {
            assert_eq!(svc::CATALOG.resource(template.resource_type()), Some(template));
            assert_eq!(svc::CATALOG.arn(template.resource_type(), &options).unwrap(), template.format(&options));
        }
    });
}

#[test_log::test]
fn test_field_substitution() {
    for catalog in catalogs() {
        for template in catalog.resources() {
            for field in template.fields() {
                let options = ArnOptions::new().with(field, "VALUE");
                assert_eq!(template.format(&options), expected(template, &[(field, "VALUE")]));
            }
        }
    }
}

#[test_log::test]
fn test_full_specification_and_idempotence() {
    for catalog in catalogs() {
        for template in catalog.resources() {
            let options: ArnOptions = template.fields().into_iter().map(|field| (field, format!("{field}-x"))).collect();
            let first = template.format(&options);
            assert!(!first.contains(WILDCARD), "{}", first);
            assert_eq!(template.format(&options), first);

            let arn = template.resource_arn(&options);
            assert_eq!(arn.as_str(), first);
            assert_eq!(arn.partition(), "partition-x");
        }
    }
}

#[test_log::test]
fn test_unrelated_fields_ignored() {
    let options = ArnOptions::new().with("notAField", "value");
    for catalog in catalogs() {
        for template in catalog.resources() {
            assert_eq!(template.format(&options), template.format(&ArnOptions::new()));
        }
    }
}

#[test_log::test]
fn test_kinesisanalytics_application() {
    let catalog = service("kinesisanalytics").unwrap();
    let applications: Vec<&ArnTemplate> =
        catalog.resources().iter().filter(|template| template.resource_type() == "application").collect();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].fields(), vec!["partition", "region", "account", "applicationName"]);
}
