//! Tests for `Registry`.

use switchboard_llm::{
    Adapter, Error, ModelConfig, NoopModel, Overrides, ProviderKind, Registry, Secret,
};

#[derive(Debug, PartialEq)]
enum Built {
    A,
    B,
}

#[test]
fn test_registry_create_unknown_fails() {
    let registry = Registry::<Built>::new();
    let err = registry.create("missing", None, Overrides::new()).unwrap_err();
    assert!(matches!(&err, Error::ProviderNotRegistered(id) if id == "missing"));
    assert!(err.to_string().contains("not registered"));
}

#[test]
fn test_registry_last_registration_wins() {
    let mut registry = Registry::new();
    registry.register("p", |_, _| Ok(Built::A));
    registry.register("p", |_, _| Ok(Built::B));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.create("p", None, Overrides::new()).unwrap(), Built::B);
}

#[test]
fn test_registry_forwards_config_and_overrides() {
    let mut registry = Registry::new();
    registry.register("echo", |config: Option<&ModelConfig>, overrides: Overrides| {
        let model = config.and_then(|c| c.model.clone());
        Ok((model, overrides.len()))
    });

    let config = ModelConfig {
        model: Some("gpt-4o".into()),
        ..Default::default()
    };
    let overrides = Overrides::new().set("temperature", 0.3).set("top_p", 0.9);
    let (model, count) = registry.create("echo", Some(&config), overrides).unwrap();
    assert_eq!(model.as_deref(), Some("gpt-4o"));
    assert_eq!(count, 2);
}

#[test]
fn test_registry_builtin_covers_every_provider() {
    let registry = Registry::<Adapter<NoopModel>>::builtin();
    assert_eq!(registry.len(), ProviderKind::ALL.len());
    for kind in ProviderKind::ALL {
        assert!(registry.contains(kind.as_str()));
        let adapter = registry.create(kind.as_str(), None, Overrides::new()).unwrap();
        assert_eq!(adapter.kind(), kind);
    }
}

#[test]
fn test_registry_builtin_bedrock_drops_api_key() {
    let registry = Registry::<Adapter<NoopModel>>::builtin();
    let config = ModelConfig {
        api_key: Some(Secret::new("aws-ignored")),
        model: Some("anthropic.claude-v2".into()),
        ..Default::default()
    };
    let adapter = registry
        .create("bedrock", Some(&config), Overrides::new().api_key("also-ignored"))
        .unwrap();
    assert!(!adapter.params.contains("api_key"));
    assert_eq!(adapter.params.str("model_id"), Some("anthropic.claude-v2"));
}

#[test]
fn test_registry_register_adapter_into_enum() {
    #[derive(Debug)]
    enum Client {
        Noop(Adapter<NoopModel>),
    }

    impl From<Adapter<NoopModel>> for Client {
        fn from(adapter: Adapter<NoopModel>) -> Self {
            Self::Noop(adapter)
        }
    }

    let mut registry = Registry::<Client>::new();
    registry.register_adapter::<NoopModel>(ProviderKind::Grok);

    let Client::Noop(adapter) = registry
        .create("grok", None, Overrides::new().api_key("xai-key"))
        .unwrap();
    assert_eq!(adapter.params.str("xai_api_key"), Some("xai-key"));
}

#[test]
fn test_registry_ids_sorted() {
    let mut registry = Registry::<Built>::new();
    registry.register("zeta", |_, _| Ok(Built::A));
    registry.register("alpha", |_, _| Ok(Built::B));
    assert_eq!(registry.ids().collect::<Vec<_>>(), ["alpha", "zeta"]);
    assert!(!registry.is_empty());
}
