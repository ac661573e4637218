use acm_client::{DEFAULT_NAMESPACE, EndpointConfig, Namespace, cache_key};
use proptest::prelude::*;

fn endpoint() -> impl Strategy<Value = EndpointConfig> {
    ("[a-z]{2}-[a-z]{4}-[1-3]", "https://[a-z]{1,12}/graphql")
        .prop_map(|(region, url)| EndpointConfig::new(region, url))
}

fn namespace() -> impl Strategy<Value = Namespace> {
    "[a-zA-Z]{1,24}".prop_map(|name| Namespace::new(name).unwrap())
}

proptest! {
    #[test]
    fn equal_configuration_always_maps_to_default(requested in namespace(), config in endpoint()) {
        let default = config.clone();
        prop_assert_eq!(cache_key(&requested, &config, Some(&default)), DEFAULT_NAMESPACE);
    }

    #[test]
    fn distinct_or_missing_default_keeps_requested(
        requested in namespace(),
        config in endpoint(),
        other in endpoint(),
    ) {
        prop_assume!(config != other);
        prop_assert_eq!(cache_key(&requested, &config, Some(&other)), requested.clone());
        prop_assert_eq!(cache_key(&requested, &config, None), requested);
    }
}
